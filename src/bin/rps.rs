//! Rock, Paper, Scissors: Best of N entry point

use std::io;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use arcade_toys::rps::{Console, RandomOpponent, run};

#[derive(Parser)]
#[command(name = "rps", about = "Best-of-N rock-paper-scissors against the computer")]
struct Cli {
    /// Seed for the computer's choices (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
    log::info!("Computer opponent seeded with {}", seed);

    let mut opponent = RandomOpponent::new(Pcg32::seed_from_u64(seed));
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    let board = run(&mut console, &mut opponent).context("console I/O failed")?;
    log::info!("Session finished: {} matches played", board.total());
    Ok(())
}

//! F1 Racer entry point
//!
//! Opens the window, then runs the fixed-rate session loop until the window
//! is closed.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::{Conf, get_frame_time, next_frame};

use arcade_toys::RacerSettings;
use arcade_toys::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use arcade_toys::platform::{FixedStep, KeyState, capture_quit, draw_frame, quit_requested};
use arcade_toys::renderer::build_frame;
use arcade_toys::sim::{SessionState, tick};

#[derive(Parser)]
#[command(name = "f1-racer", about = "Top-down track driving demo")]
struct Cli {
    /// Seed for obstacle placement (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the default settings as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "F1 Racer".to_string(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(settings: RacerSettings, seed: u64) {
    capture_quit();

    let mut state = SessionState::new(seed, &settings);
    log::info!("Session started with seed {}", state.seed);
    let mut clock = FixedStep::new(settings.tick_rate);

    loop {
        if quit_requested() {
            break;
        }

        let input = KeyState::sample().to_tick_input();
        for _ in 0..clock.advance(get_frame_time()) {
            tick(&mut state, &input);
        }

        draw_frame(&build_frame(&state));
        next_frame().await;
    }

    log::info!(
        "Session over after {} ticks, {} crashes",
        state.time_ticks,
        state.crashes
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.dump_config {
        println!("{}", RacerSettings::default().to_json()?);
        return Ok(());
    }

    let settings = match &cli.config {
        Some(path) => RacerSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => RacerSettings::default(),
    };

    let seed = cli
        .seed
        .or(settings.seed)
        .unwrap_or_else(rand::random::<u64>);

    macroquad::Window::from_config(window_conf(), run(settings, seed));
    Ok(())
}

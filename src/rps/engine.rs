//! Best-of-N match engine and the outer session driver

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use rand::Rng;
use thiserror::Error;

use super::choice::{Choice, RoundOutcome, resolve};
use super::console::Console;
use super::leaderboard::{Leaderboard, Side};

/// The word that abandons a match or ends the session
pub const QUIT: &str = "quit";

const ROUNDS_PROMPT: &str =
    "Enter an odd number of rounds for Best-of-N (or type 'quit' to exit): ";
const CHOICE_PROMPT: &str = "Choose rock, paper, or scissors: ";

/// Picks the computer's hand each round
pub trait Opponent {
    fn choose(&mut self) -> Choice;
}

/// Uniformly random opponent over a seedable RNG
pub struct RandomOpponent<R> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn choose(&mut self) -> Choice {
        Choice::ALL[self.rng.random_range(0..Choice::ALL.len())]
    }
}

/// Plays a fixed sequence of hands, then repeats the last one
pub struct ScriptedOpponent {
    hands: VecDeque<Choice>,
    last: Choice,
}

impl ScriptedOpponent {
    pub fn new(hands: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            hands: hands.into_iter().collect(),
            last: Choice::Rock,
        }
    }
}

impl Opponent for ScriptedOpponent {
    fn choose(&mut self) -> Choice {
        if let Some(hand) = self.hands.pop_front() {
            self.last = hand;
        }
        self.last
    }
}

/// Why a round count was refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundsError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{0} is not a positive odd number")]
    NotPositiveOdd(i64),
}

/// What the player asked for at the rounds prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundsCommand {
    Play(u32),
    Quit,
}

/// Parse the answer to the rounds prompt
pub fn parse_rounds(input: &str) -> Result<RoundsCommand, RoundsError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(QUIT) {
        return Ok(RoundsCommand::Quit);
    }

    let n: i64 = input
        .parse()
        .map_err(|_| RoundsError::NotANumber(input.to_string()))?;
    if n < 1 || n % 2 == 0 {
        return Err(RoundsError::NotPositiveOdd(n));
    }
    u32::try_from(n)
        .map(RoundsCommand::Play)
        .map_err(|_| RoundsError::NotANumber(input.to_string()))
}

/// Round wins needed to take a best-of-`n` match
pub fn win_threshold(n: u32) -> u32 {
    n / 2 + 1
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won {
        winner: Side,
        player: u32,
        opponent: u32,
    },
    /// The player quit (or input ran out) before either side reached the threshold
    Abandoned,
}

/// Play one best-of-`n` match, crediting the winner on `leaderboard`
///
/// Ties and invalid input do not count toward either side. An abandoned
/// match leaves the leaderboard untouched.
pub fn play_match<R, W, O>(
    n: u32,
    leaderboard: &mut Leaderboard,
    console: &mut Console<R, W>,
    opponent: &mut O,
) -> io::Result<MatchOutcome>
where
    R: BufRead,
    W: Write,
    O: Opponent + ?Sized,
{
    let needed = win_threshold(n);
    let mut player = 0;
    let mut computer = 0;

    console.say(format!("\nStarting a Best-of-{} game!", n))?;
    console.say("Type 'quit' at any time to stop the current game.\n")?;
    log::debug!("Match started: best of {}, {} wins needed", n, needed);

    let winner = loop {
        if player >= needed {
            break Side::Player;
        }
        if computer >= needed {
            break Side::Opponent;
        }

        let Some(line) = console.prompt(CHOICE_PROMPT)? else {
            log::debug!("Input closed mid-match");
            return Ok(MatchOutcome::Abandoned);
        };
        if line.eq_ignore_ascii_case(QUIT) {
            console.say("You ended the game early.\n")?;
            log::info!("Match abandoned at {}-{}", player, computer);
            return Ok(MatchOutcome::Abandoned);
        }

        let hand = match line.parse::<Choice>() {
            Ok(hand) => hand,
            Err(err) => {
                log::debug!("Rejected round input: {}", err);
                console.say("Invalid input. Please try again.\n")?;
                continue;
            }
        };

        let theirs = opponent.choose();
        console.say(format!("\nYou chose {}, computer chose {}.", hand, theirs))?;

        match resolve(hand, theirs) {
            RoundOutcome::Tie => console.say("It's a tie!\n")?,
            RoundOutcome::Won(Side::Player) => {
                console.say("You win this round!\n")?;
                player += 1;
            }
            RoundOutcome::Won(Side::Opponent) => {
                console.say("Computer wins this round!\n")?;
                computer += 1;
            }
        }

        console.say(format!("Score: You {} - Computer {}\n", player, computer))?;
    };

    match winner {
        Side::Player => console.say("🎉 You won this match!")?,
        Side::Opponent => console.say("💻 Computer won this match!")?,
    }
    leaderboard.credit(winner);
    log::info!("Match won by {} ({}-{})", winner.label(), player, computer);

    Ok(MatchOutcome::Won {
        winner,
        player,
        opponent: computer,
    })
}

/// Prompt for round counts and play matches until the player quits
///
/// Returns the final leaderboard after printing it.
pub fn run<R, W, O>(console: &mut Console<R, W>, opponent: &mut O) -> io::Result<Leaderboard>
where
    R: BufRead,
    W: Write,
    O: Opponent + ?Sized,
{
    let mut leaderboard = Leaderboard::new();
    console.say("🎮 Welcome to Rock, Paper, Scissors: Best of N Edition!")?;

    while let Some(line) = console.prompt(ROUNDS_PROMPT)? {
        match parse_rounds(&line) {
            Ok(RoundsCommand::Quit) => break,
            Ok(RoundsCommand::Play(n)) => {
                play_match(n, &mut leaderboard, console, opponent)?;
            }
            Err(err @ RoundsError::NotPositiveOdd(_)) => {
                log::debug!("Rejected round count: {}", err);
                console.say("Please enter a positive **odd** number (e.g., 3, 5, 7).")?;
            }
            Err(err @ RoundsError::NotANumber(_)) => {
                log::debug!("Rejected round count: {}", err);
                console.say("Please enter a valid number.")?;
            }
        }
    }

    console.say("\n📊 Final Leaderboard:")?;
    console.say(format!(
        "{} won {} match(es).",
        Side::Player.label(),
        leaderboard.player
    ))?;
    console.say(format!(
        "{} won {} match(es).",
        Side::Opponent.label(),
        leaderboard.opponent
    ))?;
    console.say("Thanks for playing!")?;

    Ok(leaderboard)
}

//! Best-of-N rock-paper-scissors against a computer opponent
//!
//! The engine talks to the player through a `Console`, so matches can be
//! driven from stdin or from scripted input in tests.

pub mod choice;
pub mod console;
pub mod engine;
pub mod leaderboard;

pub use choice::{Choice, ChoiceError, RoundOutcome, resolve};
pub use console::Console;
pub use engine::{
    MatchOutcome, Opponent, RandomOpponent, RoundsCommand, RoundsError, ScriptedOpponent,
    parse_rounds, play_match, run, win_threshold,
};
pub use leaderboard::{Leaderboard, Side};

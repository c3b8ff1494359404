//! Hands and the beat-table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::leaderboard::Side;

/// Raised for round input that names no hand
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not rock, paper, or scissors")]
pub struct ChoiceError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// The hand this one defeats
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = ChoiceError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(ChoiceError(s.trim().to_string())),
        }
    }
}

/// Result of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Tie,
    Won(Side),
}

/// Resolve a round with the fixed beat-table
pub fn resolve(player: Choice, opponent: Choice) -> RoundOutcome {
    if player == opponent {
        RoundOutcome::Tie
    } else if player.beats() == opponent {
        RoundOutcome::Won(Side::Player)
    } else {
        RoundOutcome::Won(Side::Opponent)
    }
}

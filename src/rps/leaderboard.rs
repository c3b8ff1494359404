//! Match leaderboard
//!
//! Counts matches won by each side for the life of the process.

use serde::{Deserialize, Serialize};

/// One of the two competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// How the console refers to this side
    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "You",
            Side::Opponent => "Computer",
        }
    }
}

/// Matches won per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub player: u32,
    pub opponent: u32,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Record a match win
    pub fn credit(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    /// Matches completed
    pub fn total(&self) -> u32 {
        self.player + self.opponent
    }
}

//! Boundary to an external move-suggestion engine.
//!
//! The game hands out a position snapshot and takes back move text, which is
//! then resolved and validated like any user input. Nothing an engine says
//! is trusted before that.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::Color;

/// "Best move for this position" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRequest {
    /// Current position as FEN
    pub fen: String,
    pub side_to_move: Color,
    /// Desired search depth in plies
    pub depth: u8,
    /// Optional thinking time budget
    pub move_time: Option<Duration>,
}

pub trait Engine {
    fn name(&self) -> &str;

    /// Answers with a move in coordinate form (`e2e4`, `e7e8q`).
    fn best_move(&mut self, request: &EngineRequest) -> Result<String, EngineError>;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Playing strength on a 0..=20 scale, if the engine supports one.
    fn set_skill_level(&mut self, _level: u8) {}
}

/// Preset bot strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotDifficulty {
    Beginner,
    Novice,
    #[default]
    Intermediate,
    Advanced,
    Expert,
    Grandmaster,
}

impl BotDifficulty {
    pub const ALL: [BotDifficulty; 6] = [
        BotDifficulty::Beginner,
        BotDifficulty::Novice,
        BotDifficulty::Intermediate,
        BotDifficulty::Advanced,
        BotDifficulty::Expert,
        BotDifficulty::Grandmaster,
    ];

    pub fn skill_level(self) -> u8 {
        match self {
            BotDifficulty::Beginner => 1,
            BotDifficulty::Novice => 3,
            BotDifficulty::Intermediate => 6,
            BotDifficulty::Advanced => 15,
            BotDifficulty::Expert => 19,
            BotDifficulty::Grandmaster => 20,
        }
    }

    pub fn search_depth(self) -> u8 {
        match self {
            BotDifficulty::Beginner => 5,
            BotDifficulty::Novice => 8,
            BotDifficulty::Intermediate => 12,
            BotDifficulty::Advanced => 18,
            BotDifficulty::Expert => 25,
            BotDifficulty::Grandmaster => 35,
        }
    }

    pub fn thinking_time(self) -> Duration {
        let ms = match self {
            BotDifficulty::Beginner => 100,
            BotDifficulty::Novice => 250,
            BotDifficulty::Intermediate => 500,
            BotDifficulty::Advanced => 1000,
            BotDifficulty::Expert => 1500,
            BotDifficulty::Grandmaster => 2000,
        };
        Duration::from_millis(ms)
    }

    pub fn description(self) -> &'static str {
        match self {
            BotDifficulty::Beginner => "Makes frequent mistakes, good for learning the rules",
            BotDifficulty::Novice => "Knows the basics but misses tactics",
            BotDifficulty::Intermediate => "Solid club-level play",
            BotDifficulty::Advanced => "Strong tactical and positional play",
            BotDifficulty::Expert => "Master-level strength",
            BotDifficulty::Grandmaster => "Full engine strength",
        }
    }
}

impl fmt::Display for BotDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BotDifficulty::Beginner => "beginner",
            BotDifficulty::Novice => "novice",
            BotDifficulty::Intermediate => "intermediate",
            BotDifficulty::Advanced => "advanced",
            BotDifficulty::Expert => "expert",
            BotDifficulty::Grandmaster => "grandmaster",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for BotDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BotDifficulty::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty '{s}'"))
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;

//! Settings file. Every field is optional in the file; command-line flags
//! win over whatever it says.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chess_rules::{BotDifficulty, Color, TimeControl};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "chess.toml";
const STOCKFISH_ENV: &str = "STOCKFISH_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub white_name: String,
    pub black_name: String,
    pub time_control: TimeControl,
    pub bot: Option<BotConfig>,
    /// 0 keeps every move undoable
    pub undo_capacity: usize,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            white_name: "White".to_string(),
            black_name: "Black".to_string(),
            time_control: TimeControl::default(),
            bot: None,
            undo_capacity: 0,
            log_filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub color: Color,
    pub difficulty: BotDifficulty,
    pub engine: EngineChoice,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            color: Color::Black,
            difficulty: BotDifficulty::default(),
            engine: EngineChoice::Random,
        }
    }
}

/// `engine = "random"`, `engine = "stockfish"` or `engine = { uci = "/path" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineChoice {
    #[default]
    Random,
    Stockfish,
    Uci(PathBuf),
}

impl EngineChoice {
    /// Binary to launch for UCI engines. `stockfish` looks at
    /// `STOCKFISH_PATH` first, then the search path.
    pub fn uci_path(&self) -> Option<PathBuf> {
        match self {
            EngineChoice::Random => None,
            EngineChoice::Stockfish => Some(
                env::var_os(STOCKFISH_ENV)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("stockfish")),
            ),
            EngineChoice::Uci(path) => Some(path.clone()),
        }
    }
}

impl Config {
    /// Reads `path`, or `chess.toml` when no path is given and the file
    /// exists, or falls back to defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Config::default());
                }
                default
            }
        };
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(name) = &cli.white {
            self.white_name = name.clone();
        }
        if let Some(name) = &cli.black {
            self.black_name = name.clone();
        }
        if cli.bot.is_some() || cli.bot_color.is_some() || cli.engine.is_some() {
            let bot = self.bot.get_or_insert_with(BotConfig::default);
            if let Some(difficulty) = cli.bot {
                bot.difficulty = difficulty;
            }
            if let Some(color) = cli.bot_color {
                bot.color = color;
            }
            if let Some(path) = &cli.engine {
                bot.engine = EngineChoice::Uci(path.clone());
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

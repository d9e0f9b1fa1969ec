use std::path::PathBuf;

use chess_rules::{BotDifficulty, Color};
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about = "Play chess in the terminal")]
pub struct Cli {
    /// TOML configuration file (defaults to ./chess.toml when present)
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Name of the white player
    #[clap(long, value_name = "NAME")]
    pub white: Option<String>,
    /// Name of the black player
    #[clap(long, value_name = "NAME")]
    pub black: Option<String>,
    /// Play against a bot of this strength (beginner .. grandmaster)
    #[clap(long, value_name = "DIFFICULTY")]
    pub bot: Option<BotDifficulty>,
    /// Side the bot plays
    #[clap(long, value_name = "COLOR", value_parser = parse_color)]
    pub bot_color: Option<Color>,
    /// Path to a UCI engine binary to use as the bot
    #[clap(long, value_name = "PATH")]
    pub engine: Option<PathBuf>,
    /// PGN (or .json) game to continue from
    #[clap(long, value_name = "PATH")]
    pub load: Option<PathBuf>,
}

pub fn parse_color(s: &str) -> Result<Color, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(format!("unknown color '{other}', expected white or black")),
    }
}

use std::path::PathBuf;

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Load(PathBuf),
    Save(PathBuf),
    Resign,
    OfferDraw,
    AcceptDraw,
    DeclineDraw,
    Undo,
    Board,
    Help,
    Exit,
    Move(String),
}

impl Command {
    /// `None` for blank input. Keywords are case-insensitive; anything that
    /// is not a keyword is move text.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        let Some((word, rest)) = split_word(line) else {
            return Ok(None);
        };
        let path = || {
            if rest.is_empty() {
                Err(format!("usage: {} <file>", word.to_ascii_lowercase()))
            } else {
                Ok(PathBuf::from(rest))
            }
        };
        let cmd = match word.to_ascii_lowercase().as_str() {
            "new" => Command::New,
            "load" => Command::Load(path()?),
            "save" => Command::Save(path()?),
            "resign" => Command::Resign,
            "draw" => Command::OfferDraw,
            "accept" => Command::AcceptDraw,
            "decline" => Command::DeclineDraw,
            "undo" => Command::Undo,
            "board" => Command::Board,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            _ => Command::Move(line.to_string()),
        };
        Ok(Some(cmd))
    }
}

fn split_word(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    })
}

pub const HELP: &str = "\
Moves: e4, Nf3, exd5, O-O, e8=Q or coordinates like e2e4, e7e8q
Commands:
  new            start a new game
  load <file>    load a PGN (or .json) game
  save <file>    save the game as PGN (or .json)
  resign         resign the game
  draw           offer a draw
  accept         accept a draw offer
  decline        decline a draw offer
  undo           take back the last move (a full turn against a bot)
  board          show the board
  help           show this text
  exit, quit     leave";

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;

//! Portable Game Notation
//!
//! A forgiving reader and a plain writer for PGN files. The reader strips
//! comments, NAGs, variations and result markers and pairs what is left into
//! [`MoveRecord`]s; it does not check that the move text is valid SAN. That
//! happens when the records are replayed into a [`Game`].

use std::fs;
use std::path::Path;

use chess_rules::{ChessError, Color, Game, GameMetadata, MoveRecord, Player};
use serde::{Deserialize, Serialize};
use tracing::debug;


const RESULTS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];
const GROUPS_PER_LINE: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum PgnError {
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Chess(#[from] ChessError),
}

/// One game: tag pairs, numbered move pairs and the result marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PgnGame {
    pub metadata: GameMetadata,
    pub moves: Vec<MoveRecord>,
    pub result: String,
}

impl PgnGame {
    pub fn from_game(game: &Game) -> Self {
        Self {
            metadata: game.metadata(),
            moves: game.move_records(),
            result: game.result_tag().to_string(),
        }
    }

    /// Rebuilds a game by replaying every recorded move. A `FEN` tag sets the
    /// starting position, and the `White`/`Black` tags name the players. The
    /// tags are kept on the game so saving it again preserves them.
    pub fn to_game(&self, white: Player, black: Player) -> Result<Game, PgnError> {
        let white = named_from_tag(white, self.metadata.white());
        let black = named_from_tag(black, self.metadata.black());
        let mut game = match self.metadata.get("FEN") {
            Some(fen) => Game::from_fen(white, black, fen)?,
            None => Game::new(white, black),
        };
        game.set_metadata(self.metadata.clone());
        game.replay(&self.moves)?;
        Ok(game)
    }
}

fn named_from_tag(player: Player, tag: Option<&str>) -> Player {
    match tag.map(str::trim) {
        Some(name) if !name.is_empty() && name != "?" => Player {
            name: name.to_string(),
            ..player
        },
        _ => player,
    }
}

pub fn read_file(path: impl AsRef<Path>) -> Result<PgnGame, PgnError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

pub fn write_file(path: impl AsRef<Path>, game: &PgnGame) -> Result<(), PgnError> {
    fs::write(path, write(game))?;
    Ok(())
}

/// Parses the first game in `text`.
pub fn parse(text: &str) -> Result<PgnGame, PgnError> {
    let mut metadata = GameMetadata::default();
    let mut pairing = Pairing::default();
    let mut result: Option<String> = None;
    let mut comment_depth = 0usize;
    let mut variation_depth = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if comment_depth == 0 && variation_depth == 0 && line.starts_with('[') {
            let (key, value) = parse_tag(line).ok_or_else(|| PgnError::Format {
                line: line_no,
                message: format!("malformed tag pair '{line}'"),
            })?;
            metadata.set(key, value);
            continue;
        }

        let mut token = String::new();
        for ch in line.chars() {
            match ch {
                '{' => comment_depth += 1,
                '}' if comment_depth > 0 => comment_depth -= 1,
                _ if comment_depth > 0 => {}
                ';' => break,
                '(' => variation_depth += 1,
                ')' if variation_depth > 0 => variation_depth -= 1,
                _ if variation_depth > 0 => {}
                c if c.is_whitespace() => {
                    take_token(&mut token, &mut pairing, &mut result, line_no)?;
                }
                c => token.push(c),
            }
        }
        take_token(&mut token, &mut pairing, &mut result, line_no)?;
    }

    let moves = pairing.finish();
    let result = result
        .or_else(|| metadata.result().map(str::to_string))
        .unwrap_or_else(|| "*".to_string());
    debug!(records = moves.len(), tags = metadata.iter().count(), "parsed PGN");
    Ok(PgnGame {
        metadata,
        moves,
        result,
    })
}

fn parse_tag(line: &str) -> Option<(String, String)> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    let (key, rest) = inner.split_once(char::is_whitespace)?;
    let quoted = rest.trim().strip_prefix('"')?.strip_suffix('"')?;
    let mut value = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            value.extend(chars.next());
        } else {
            value.push(c);
        }
    }
    Some((key.to_string(), value))
}

fn take_token(
    token: &mut String,
    pairing: &mut Pairing,
    result: &mut Option<String>,
    line: usize,
) -> Result<(), PgnError> {
    if token.is_empty() {
        return Ok(());
    }
    let tok = std::mem::take(token);
    if RESULTS.contains(&tok.as_str()) {
        *result = Some(tok);
        return Ok(());
    }
    if tok.starts_with('$') {
        return Ok(());
    }

    let digits = tok.chars().take_while(char::is_ascii_digit).count();
    let rest = &tok[digits..];
    if digits > 0 && rest.starts_with('.') {
        let number: u32 = tok[..digits]
            .parse()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| PgnError::Format {
                line,
                message: format!("bad move number '{tok}'"),
            })?;
        let dots = rest.chars().take_while(|c| *c == '.').count();
        pairing.number(number, dots >= 3);
        let san = &rest[dots..];
        if !san.is_empty() {
            pairing.push(san);
        }
        return Ok(());
    }
    pairing.push(&tok);
    Ok(())
}

/// Groups loose SAN tokens into numbered white/black records.
#[derive(Default)]
struct Pairing {
    done: Vec<MoveRecord>,
    open: Option<MoveRecord>,
    next: Option<Color>,
}

impl Pairing {
    fn number(&mut self, number: u32, black_to_move: bool) {
        if black_to_move {
            let continues = self
                .open
                .as_ref()
                .is_some_and(|r| r.number == number && r.black.is_none());
            if !continues {
                self.flush();
                self.open = Some(MoveRecord {
                    number,
                    white: None,
                    black: None,
                });
            }
            self.next = Some(Color::Black);
        } else {
            self.flush();
            self.open = Some(MoveRecord {
                number,
                white: None,
                black: None,
            });
            self.next = Some(Color::White);
        }
    }

    fn push(&mut self, san: &str) {
        if self.open.is_none() {
            let number = self.done.last().map_or(1, |r| r.number + 1);
            self.open = Some(MoveRecord {
                number,
                white: None,
                black: None,
            });
            self.next = Some(Color::White);
        }
        let Some(open) = self.open.as_mut() else {
            return;
        };
        match self.next {
            Some(Color::Black) => {
                open.black = Some(san.to_string());
                self.flush();
            }
            _ => {
                open.white = Some(san.to_string());
                self.next = Some(Color::Black);
            }
        }
    }

    fn flush(&mut self) {
        if let Some(rec) = self.open.take() {
            if rec.white.is_some() || rec.black.is_some() {
                self.done.push(rec);
            }
        }
        self.next = None;
    }

    fn finish(mut self) -> Vec<MoveRecord> {
        self.flush();
        self.done
    }
}

/// Renders `game` as PGN text: tags, a blank line, then the move text.
pub fn write(game: &PgnGame) -> String {
    let mut out = String::new();
    for (key, value) in game.metadata.iter() {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        out.push_str(&format!("[{key} \"{escaped}\"]\n"));
    }
    if !game.metadata.is_empty() {
        out.push('\n');
    }

    let mut groups: Vec<String> = game
        .moves
        .iter()
        .map(|rec| match (&rec.white, &rec.black) {
            (Some(w), Some(b)) => format!("{}. {w} {b}", rec.number),
            (Some(w), None) => format!("{}. {w}", rec.number),
            (None, Some(b)) => format!("{}... {b}", rec.number),
            (None, None) => format!("{}.", rec.number),
        })
        .collect();
    groups.push(game.result.clone());

    let lines: Vec<String> = groups
        .chunks(GROUPS_PER_LINE)
        .map(|chunk| chunk.join(" "))
        .collect();
    out.push_str(&lines.join("\n"));
    out.push('\n');
    out
}

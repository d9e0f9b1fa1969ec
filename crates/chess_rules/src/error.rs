//! Error types for rule violations, malformed input and engine failures.

use std::time::Duration;

use crate::game::GameState;
use crate::types::{Color, Square};

/// Everything that can go wrong while setting up or playing a game.
///
/// Input errors (bad notation, bad FEN) and illegal moves leave the game
/// untouched. Structural errors point at a misuse of the API or a broken
/// position.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("cannot parse move: {0}")]
    UnparseableMove(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid promotion piece: {0}")]
    InvalidPromotionPiece(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("ambiguous move {text}: could be {}", candidates.join(", "))]
    AmbiguousMove {
        text: String,
        candidates: Vec<String>,
    },

    #[error("move {0} needs a promotion piece (Q, R, B or N)")]
    PromotionRequired(String),

    #[error("the piece on {0} does not belong to the side to move")]
    NotYourPiece(Square),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("no {0} king on the board")]
    MissingKing(Color),

    #[error("game is over ({0})")]
    GameOver(GameState),

    #[error("no draw offer is pending")]
    NoDrawOffer,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to replay {color} move {number} ({text}): {source}")]
    Replay {
        number: u32,
        color: Color,
        text: String,
        source: Box<ChessError>,
    },
}

/// Failures of the external move-suggestion engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine unavailable: {0}")]
    Unavailable(String),

    #[error("engine did not answer within {0:?}")]
    Timeout(Duration),

    #[error("engine protocol error: {0}")]
    Protocol(String),

    #[error("engine has no move in this position")]
    NoMove,

    #[error("engine I/O error: {0}")]
    Io(#[from] std::io::Error),
}

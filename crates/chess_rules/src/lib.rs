pub mod apply;
pub mod attacks;
pub mod board;
pub mod castling;
pub mod check;
pub mod clock;
pub mod en_passant;
pub mod engine;
pub mod error;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod promotion;
pub mod record;
pub mod resolve;
pub mod types;
pub mod undo;
pub mod validate;

// Re-export the rules surface used by the PGN layer, engines and front ends
pub use apply::apply_move;
pub use attacks::is_square_attacked;
pub use board::Board;
pub use castling::CastleSide;
pub use check::{has_any_legal_move, is_checkmate, is_king_in_check, is_stalemate, legal_moves};
pub use clock::{ChessClock, TimeControl, Timer};
pub use engine::{BotDifficulty, Engine, EngineRequest};
pub use error::{ChessError, EngineError};
pub use fen::{Setup, STARTING_FEN};
pub use game::{Game, GameState, Player, PlayerKind};
pub use movegen::pseudo_legal_destinations;
pub use notation::{to_coordinate, to_san};
pub use perft::perft;
pub use record::{GameMetadata, MoveRecord};
pub use resolve::resolve;
pub use types::*;
pub use undo::{Snapshot, UndoManager};
pub use validate::is_valid_move;

//! The game: board, players, history and the state machine around them.
//!
//! A move attempt flows text -> resolved move -> validated move -> board
//! mutation -> history -> turn switch -> state re-evaluation. Terminal states
//! are sticky; only undo can leave checkmate or stalemate, and nothing leaves
//! resignation, agreement or a fallen flag.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::apply;
use crate::board::Board;
use crate::check::{has_any_legal_move, is_king_in_check};
use crate::clock::Timer;
use crate::en_passant;
use crate::engine::{Engine, EngineRequest};
use crate::error::ChessError;
use crate::fen;
use crate::notation::{to_coordinate, to_san};
use crate::promotion;
use crate::record::{GameMetadata, MoveRecord};
use crate::resolve::resolve;
use crate::types::*;
use crate::undo::{Snapshot, UndoManager};
use crate::validate::is_valid_move;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    DrawByAgreement,
    Resignation,
    TimedOut,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Ongoing | GameState::Check)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameState::Ongoing => "ongoing",
            GameState::Check => "check",
            GameState::Checkmate => "checkmate",
            GameState::Stalemate => "stalemate",
            GameState::DrawByAgreement => "draw by agreement",
            GameState::Resignation => "resignation",
            GameState::TimedOut => "time out",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Engine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: Color,
    pub kind: PlayerKind,
}

impl Player {
    pub fn human(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            kind: PlayerKind::Human,
        }
    }

    pub fn engine(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            kind: PlayerKind::Engine,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    history: Vec<Move>,
    notation: Vec<String>,
    current: Color,
    state: GameState,
    draw_offer: Option<Color>,
    loser: Option<Color>,
    undo: UndoManager,
    start_color: Color,
    /// Set only when the game did not begin from the standard position
    start_fen: Option<String>,
    metadata: GameMetadata,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new(white: Player, black: Player) -> Self {
        let metadata = GameMetadata::standard(&white.name, &black.name);
        let mut game = Game {
            board: Board::standard(),
            players: [white, black],
            history: Vec::new(),
            notation: Vec::new(),
            current: Color::White,
            state: GameState::Ongoing,
            draw_offer: None,
            loser: None,
            undo: UndoManager::new(),
            start_color: Color::White,
            start_fen: None,
            metadata,
        };
        game.refresh_state();
        info!(white = %game.players[0].name, black = %game.players[1].name, "new game");
        game
    }

    /// A game starting from an arbitrary position.
    pub fn from_fen(white: Player, black: Player, fen: &str) -> Result<Self, ChessError> {
        let setup = fen::parse(fen)?;
        let mut game = Game::new(white, black);
        game.board = setup.board;
        game.current = setup.side_to_move;
        game.start_color = setup.side_to_move;
        if game.board != Board::standard() || game.current != Color::White {
            game.start_fen = Some(fen.trim().to_string());
        }
        game.state = GameState::Ongoing;
        game.refresh_state();
        Ok(game)
    }

    /// Bounds the undo stack; 0 keeps it unbounded.
    pub fn with_undo_capacity(mut self, capacity: usize) -> Self {
        self.undo = UndoManager::with_capacity(capacity);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn current_color(&self) -> Color {
        self.current
    }
    pub fn state(&self) -> GameState {
        self.state
    }
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    /// SAN of every move in `history`, in the same order.
    pub fn notation(&self) -> &[String] {
        &self.notation
    }
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.idx()]
    }
    pub fn draw_offer(&self) -> Option<Color> {
        self.draw_offer
    }
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }
    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    /// The winning side, if the game ended decisively.
    pub fn winner(&self) -> Option<Color> {
        match self.state {
            GameState::Checkmate | GameState::Resignation | GameState::TimedOut => {
                self.loser.map(Color::other)
            }
            _ => None,
        }
    }

    pub fn result_tag(&self) -> &'static str {
        match (self.state, self.winner()) {
            (_, Some(Color::White)) => "1-0",
            (_, Some(Color::Black)) => "0-1",
            (GameState::Stalemate | GameState::DrawByAgreement, None) => "1/2-1/2",
            _ => "*",
        }
    }

    /// Current position as FEN, counters derived from the history.
    pub fn fen(&self) -> String {
        let halfmove = self
            .history
            .iter()
            .rev()
            .take_while(|m| m.piece != PieceKind::Pawn && !m.flags.capture)
            .count() as u32;
        let offset = usize::from(self.start_color == Color::Black);
        let fullmove = 1 + (self.history.len() + offset) / 2;
        fen::to_fen(&self.board, self.current, halfmove, fullmove as u32)
    }

    /// Resolves `text` for the side to move and applies it.
    pub fn play(&mut self, text: &str) -> Result<Move, ChessError> {
        if self.state.is_terminal() {
            return Err(ChessError::GameOver(self.state));
        }
        let mv = resolve(&self.board, self.current, text)?;
        self.apply_move(mv)
    }

    /// Validates and applies `mv`. On any failure the game is left exactly
    /// as it was.
    pub fn apply_move(&mut self, mv: Move) -> Result<Move, ChessError> {
        if self.state.is_terminal() {
            return Err(ChessError::GameOver(self.state));
        }
        self.check_move(&mv)?;
        let san = to_san(&self.board, &mv);

        let snap = self.snapshot();
        self.undo.push(snap);
        if let Err(e) = apply::apply_move(&mut self.board, &mv) {
            if let Some(snap) = self.undo.pop() {
                self.restore(snap);
            }
            return Err(e);
        }

        self.history.push(mv);
        self.notation.push(san);
        if self.draw_offer == Some(self.current.other()) {
            debug!(offered_by = %self.current.other(), "draw offer lapsed");
            self.draw_offer = None;
        }
        self.current = self.current.other();
        self.refresh_state();
        debug!(mv = %to_coordinate(&mv), state = %self.state, "move applied");
        Ok(mv)
    }

    fn check_move(&self, mv: &Move) -> Result<(), ChessError> {
        let pc = self
            .board
            .piece_at(mv.from)
            .ok_or(ChessError::EmptySquare(mv.from))?;
        if pc.color != self.current || mv.color != self.current {
            return Err(ChessError::NotYourPiece(mv.from));
        }
        promotion::check_promotion(mv)?;
        let illegal = || ChessError::IllegalMove(to_coordinate(mv));
        if mv.flags.en_passant && !en_passant::is_en_passant_capture(&self.board, mv) {
            return Err(illegal());
        }
        if !is_valid_move(&self.board, mv, self.current) {
            return Err(illegal());
        }
        Ok(())
    }

    /// Position-based re-evaluation for the side to move: checkmate beats
    /// stalemate beats check beats ongoing. Terminal states are kept.
    fn refresh_state(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        let side = self.current;
        let in_check = is_king_in_check(&self.board, side);
        let can_move = has_any_legal_move(&self.board, side);
        self.state = match (in_check, can_move) {
            (true, false) => {
                self.loser = Some(side);
                GameState::Checkmate
            }
            (false, false) => GameState::Stalemate,
            (true, true) => GameState::Check,
            (false, true) => GameState::Ongoing,
        };
        if self.state.is_terminal() {
            info!(state = %self.state, result = self.result_tag(), "game over");
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            state: self.state,
            history: self.history.clone(),
            notation: self.notation.clone(),
            current: self.current,
            draw_offer: self.draw_offer,
            loser: self.loser,
        }
    }

    fn restore(&mut self, snap: Snapshot) {
        self.board = snap.board;
        self.state = snap.state;
        self.history = snap.history;
        self.notation = snap.notation;
        self.current = snap.current;
        self.draw_offer = snap.draw_offer;
        self.loser = snap.loser;
    }

    /// Takes back the last move.
    pub fn undo(&mut self) -> Result<(), ChessError> {
        if matches!(
            self.state,
            GameState::Resignation | GameState::DrawByAgreement | GameState::TimedOut
        ) {
            return Err(ChessError::GameOver(self.state));
        }
        let snap = self.undo.pop().ok_or(ChessError::NothingToUndo)?;
        self.restore(snap);
        debug!(plies = self.history.len(), "undo");
        Ok(())
    }

    /// Takes back the last two moves (one per side) when available.
    pub fn undo_turn(&mut self) -> Result<(), ChessError> {
        self.undo()?;
        if self.undo.can_undo() {
            self.undo()?;
        }
        Ok(())
    }

    pub fn offer_draw(&mut self, color: Color) -> Result<(), ChessError> {
        self.ensure_running()?;
        self.draw_offer = Some(color);
        info!(by = %color, "draw offered");
        Ok(())
    }

    /// `color` accepts a pending offer made by the other side.
    pub fn accept_draw(&mut self, color: Color) -> Result<(), ChessError> {
        self.ensure_running()?;
        if self.draw_offer != Some(color.other()) {
            return Err(ChessError::NoDrawOffer);
        }
        self.draw_offer = None;
        self.state = GameState::DrawByAgreement;
        info!(by = %color, "draw accepted");
        Ok(())
    }

    pub fn decline_draw(&mut self, color: Color) -> Result<(), ChessError> {
        self.ensure_running()?;
        if self.draw_offer != Some(color.other()) {
            return Err(ChessError::NoDrawOffer);
        }
        self.draw_offer = None;
        Ok(())
    }

    pub fn resign(&mut self, color: Color) -> Result<(), ChessError> {
        self.ensure_running()?;
        self.state = GameState::Resignation;
        self.loser = Some(color);
        info!(by = %color, "resigned");
        Ok(())
    }

    /// External flag-fall signal: `color` ran out of time.
    pub fn flag_fall(&mut self, color: Color) -> Result<(), ChessError> {
        self.ensure_running()?;
        self.state = GameState::TimedOut;
        self.loser = Some(color);
        info!(side = %color, "flag fell");
        Ok(())
    }

    /// Ends the game if the side to move has run out of time. Returns whether
    /// it did.
    pub fn observe_timer(&mut self, timer: &dyn Timer) -> bool {
        if self.state.is_terminal() || !timer.has_expired(self.current) {
            return false;
        }
        self.flag_fall(self.current).is_ok()
    }

    fn ensure_running(&self) -> Result<(), ChessError> {
        if self.state.is_terminal() {
            Err(ChessError::GameOver(self.state))
        } else {
            Ok(())
        }
    }

    /// The SAN history paired into numbered records.
    pub fn move_records(&self) -> Vec<MoveRecord> {
        let mut out = Vec::new();
        let mut number = 1;
        let mut sans = self.notation.iter().cloned();
        if self.start_color == Color::Black
            && let Some(first) = sans.next()
        {
            out.push(MoveRecord {
                number,
                white: None,
                black: Some(first),
            });
            number += 1;
        }
        let rest: Vec<String> = sans.collect();
        for pair in rest.chunks(2) {
            out.push(MoveRecord {
                number,
                white: Some(pair[0].clone()),
                black: pair.get(1).cloned(),
            });
            number += 1;
        }
        out
    }

    /// Tags for saving this game: the stored tags with the current result
    /// and, for a game set up from a position, its starting FEN.
    pub fn metadata(&self) -> GameMetadata {
        let mut meta = self.metadata.clone();
        meta.set("Result", self.result_tag());
        match &self.start_fen {
            Some(fen) => {
                meta.set("SetUp", "1");
                meta.set("FEN", fen.as_str());
            }
            None => {
                meta.remove("SetUp");
                meta.remove("FEN");
            }
        }
        meta
    }

    /// Replaces the stored tags, e.g. with the ones read from a game file.
    pub fn set_metadata(&mut self, metadata: GameMetadata) {
        self.metadata = metadata;
    }

    /// The position this game was set up from, if not the standard one.
    pub fn start_fen(&self) -> Option<&str> {
        self.start_fen.as_deref()
    }

    /// Plays every move of `records` in order. Stops at the first move that
    /// does not resolve or is illegal.
    pub fn replay(&mut self, records: &[MoveRecord]) -> Result<(), ChessError> {
        for rec in records {
            for (color, text) in [(Color::White, &rec.white), (Color::Black, &rec.black)] {
                let Some(text) = text else {
                    continue;
                };
                self.play(text).map_err(|e| ChessError::Replay {
                    number: rec.number,
                    color,
                    text: text.clone(),
                    source: Box::new(e),
                })?;
            }
        }
        info!(plies = self.history.len(), "game record replayed");
        Ok(())
    }

    pub fn engine_request(&self, depth: u8) -> EngineRequest {
        EngineRequest {
            fen: self.fen(),
            side_to_move: self.current,
            depth,
            move_time: None,
        }
    }

    /// Asks `engine` for a move and plays it as if it had been typed in.
    pub fn play_engine_move(&mut self, engine: &mut dyn Engine, depth: u8) -> Result<Move, ChessError> {
        self.ensure_running()?;
        let request = self.engine_request(depth);
        let answer = engine.best_move(&request)?;
        let text = answer.trim();
        self.play(text).inspect_err(|e| {
            warn!(engine = engine.name(), answer = text, error = %e, "engine move rejected");
        })
    }

    /// Back to the standard starting position with an empty history.
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.notation.clear();
        self.current = Color::White;
        self.start_color = Color::White;
        self.start_fen = None;
        self.metadata = GameMetadata::standard(&self.players[0].name, &self.players[1].name);
        self.state = GameState::Ongoing;
        self.draw_offer = None;
        self.loser = None;
        self.undo.clear();
        self.refresh_state();
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

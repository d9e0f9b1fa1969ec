//! Random Move Engine
//!
//! Picks uniformly among all legal moves of the requested position. It is
//! the opponent used when no external engine is configured, and a handy
//! stress test for the rules crate since every answer must replay cleanly.

use chess_rules::{fen, legal_moves, to_coordinate, Engine, EngineError, EngineRequest};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

#[cfg(test)]
mod lib_tests;

#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move sequence for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn best_move(&mut self, request: &EngineRequest) -> Result<String, EngineError> {
        let setup = fen::parse(&request.fen).map_err(|e| EngineError::Protocol(e.to_string()))?;
        let moves = legal_moves(&setup.board, setup.side_to_move);
        let mv = moves.choose(&mut self.rng).ok_or(EngineError::NoMove)?;
        let answer = to_coordinate(mv);
        trace!(candidates = moves.len(), answer = %answer, "random move");
        Ok(answer)
    }
}

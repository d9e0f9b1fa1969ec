use std::collections::VecDeque;

use tracing::debug;

use crate::board::Board;
use crate::game::GameState;
use crate::types::{Color, Move};

/// Full game state captured before a move attempt. Restoring it replaces the
/// live state wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub state: GameState,
    pub history: Vec<Move>,
    pub notation: Vec<String>,
    pub current: Color,
    pub draw_offer: Option<Color>,
    pub loser: Option<Color>,
}

/// Stack of snapshots, optionally bounded (the oldest is dropped when full).
#[derive(Clone, Debug, Default)]
pub struct UndoManager {
    stack: VecDeque<Snapshot>,
    capacity: Option<usize>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of 0 means unbounded.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity: (capacity > 0).then_some(capacity),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        if let Some(cap) = self.capacity
            && self.stack.len() >= cap
        {
            self.stack.pop_front();
            debug!(capacity = cap, "undo stack full, dropped oldest snapshot");
        }
        self.stack.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.stack.pop_back()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
#[path = "undo_tests.rs"]
mod undo_tests;

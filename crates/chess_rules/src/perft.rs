use crate::apply::apply_move;
use crate::board::Board;
use crate::check::legal_moves;
use crate::types::Color;

/// Pure perft node count: every legal line from `board` down to `depth` plies.
/// Each child works on its own board copy, the same way legality is checked.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board, color);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let mut child = board.clone();
        if apply_move(&mut child, mv).is_ok() {
            nodes += perft(&child, color.other(), depth - 1);
        }
    }
    nodes
}

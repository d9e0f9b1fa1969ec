use super::*;

fn snapshot(plies: usize) -> Snapshot {
    Snapshot {
        board: Board::standard(),
        state: GameState::Ongoing,
        history: Vec::new(),
        notation: vec!["e4".to_string(); plies],
        current: Color::White,
        draw_offer: None,
        loser: None,
    }
}

#[test]
fn last_in_first_out() {
    let mut undo = UndoManager::new();
    assert!(!undo.can_undo());
    undo.push(snapshot(0));
    undo.push(snapshot(1));
    assert_eq!(undo.len(), 2);
    assert_eq!(undo.pop().unwrap().notation.len(), 1);
    assert_eq!(undo.pop().unwrap().notation.len(), 0);
    assert!(undo.pop().is_none());
}

#[test]
fn capacity_discards_oldest() {
    let mut undo = UndoManager::with_capacity(2);
    for plies in 0..4 {
        undo.push(snapshot(plies));
    }
    assert_eq!(undo.len(), 2);
    assert_eq!(undo.pop().unwrap().notation.len(), 3);
    assert_eq!(undo.pop().unwrap().notation.len(), 2);
    assert!(undo.is_empty());
}

#[test]
fn zero_capacity_is_unbounded() {
    let mut undo = UndoManager::with_capacity(0);
    for plies in 0..100 {
        undo.push(snapshot(plies));
    }
    assert_eq!(undo.len(), 100);
    undo.clear();
    assert!(!undo.can_undo());
}

use chess_rules::{Player, TimeControl};

use super::*;

fn game(white: &str, black: &str) -> Game {
    Game::new(
        Player::human(white, Color::White),
        Player::human(black, Color::Black),
    )
}

#[test]
fn renders_start_position() {
    let text = render_board(&Board::standard());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8  r n b q k b n r");
    assert_eq!(lines[4], "4  . . . . . . . .");
    assert_eq!(lines[7], "1  R N B Q K B N R");
    assert_eq!(lines[8], "   a b c d e f g h");
}

#[test]
fn status_names_the_side_to_move() {
    assert_eq!(status_line(&game("White", "Black")), "White to move");
    assert_eq!(status_line(&game("Ann", "Ben")), "Ann (White) to move");
}

#[test]
fn status_after_resignation() {
    let mut g = game("Ann", "Ben");
    g.resign(Color::White).unwrap();
    assert_eq!(
        status_line(&g),
        "Ann (White) resigned. Ben (Black) wins 0-1"
    );
}

#[test]
fn clock_line_only_for_timed_games() {
    assert!(clock_line(&ChessClock::new(TimeControl::untimed())).is_none());
    assert_eq!(
        clock_line(&ChessClock::new(TimeControl::blitz())).as_deref(),
        Some("White 5:00  Black 5:00")
    );
}

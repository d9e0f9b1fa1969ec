use std::fmt::Write as _;

use chess_rules::{Board, ChessClock, Color, Game, GameState, Square};

/// 8x8 text grid, rank 8 on top. White pieces in upper case.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        let _ = write!(out, "{} ", rank + 1);
        for file in 0..8 {
            let ch = Square::new(file, rank)
                .and_then(|sq| board.piece_at(sq))
                .map_or('.', |p| p.fen_char());
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}

/// One line describing whose turn it is or how the game ended.
pub fn status_line(game: &Game) -> String {
    let side = game.current_color();
    let name = who(game, side);
    match game.state() {
        GameState::Ongoing => format!("{name} to move"),
        GameState::Check => format!("Check! {name} to move"),
        GameState::Checkmate => format!("Checkmate! {}", winner_text(game)),
        GameState::Stalemate => "Stalemate. The game is drawn (1/2-1/2)".to_string(),
        GameState::DrawByAgreement => "Draw agreed (1/2-1/2)".to_string(),
        GameState::Resignation => {
            let loser = game.winner().map_or(side, Color::other);
            format!("{} resigned. {}", who(game, loser), winner_text(game))
        }
        GameState::TimedOut => format!("Time is up. {}", winner_text(game)),
    }
}

fn winner_text(game: &Game) -> String {
    match game.winner() {
        Some(color) => format!("{} wins {}", who(game, color), game.result_tag()),
        None => game.result_tag().to_string(),
    }
}

/// The player's name, with the color added unless the name already is one.
fn who(game: &Game, color: Color) -> String {
    let name = &game.player(color).name;
    if name.eq_ignore_ascii_case(&color.to_string()) {
        name.clone()
    } else {
        format!("{name} ({color})")
    }
}

pub fn clock_line(clock: &ChessClock) -> Option<String> {
    clock.is_enabled().then(|| {
        format!(
            "White {}  Black {}",
            ChessClock::format(clock.remaining(Color::White)),
            ChessClock::format(clock.remaining(Color::Black))
        )
    })
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod display_tests;

//! Text rendering of the game
//!
//! Draws the board from the side the controller's orientation asks for,
//! marking the selected piece `(X)` and legal destinations `[X]` / ` * `.
//! Below the board: both clocks as MM:SS, a status line, the recent move
//! history and, while a promotion is pending, the piece prompt.

use crate::game::{TurnController, TurnState};
use chess_engine::{Color, File, Rank, Square};
use std::fmt::Write;

/// History lines shown under the board
const HISTORY_LINES: usize = 6;

pub const HELP: &str = "\
Commands:
  e2          click a square (select a piece, then its destination)
  e2e4        play a whole move; add q/r/b/n for promotions (e7e8q)
  q r b n     choose a promotion piece
  flip        turn the board around
  restart     start a new game
  help        show this text
  quit        leave";

/// Board, clocks, status, history and any prompt
pub fn render(controller: &TurnController) -> String {
    let mut out = render_board(controller);
    out.push('\n');
    out.push_str(&render_clocks(controller));
    out.push('\n');
    out.push_str(&render_status(controller));
    out.push('\n');

    let lines = controller.move_log().lines();
    if !lines.is_empty() {
        let skip = lines.len().saturating_sub(HISTORY_LINES);
        for line in &lines[skip..] {
            let _ = writeln!(out, "  {}", line);
        }
    }

    if let Some(prompt) = render_promotion_prompt(controller) {
        out.push_str(&prompt);
        out.push('\n');
    }
    out
}

/// The 8x8 grid with rank and file labels
pub fn render_board(controller: &TurnController) -> String {
    let flipped = controller.is_flipped();
    let selected = controller.selected_square();
    let highlights = controller.highlights();

    let ranks: Vec<Rank> = if flipped {
        Rank::ALL.to_vec()
    } else {
        Rank::ALL.iter().rev().copied().collect()
    };
    let files: Vec<File> = if flipped {
        File::ALL.iter().rev().copied().collect()
    } else {
        File::ALL.to_vec()
    };

    let mut out = String::new();
    for rank in &ranks {
        let _ = write!(out, "{} ", rank.char());
        for file in &files {
            let square = Square::from_coords(*file, *rank);
            let glyph = controller
                .position()
                .piece_at(square)
                .map(|piece| piece.char())
                .unwrap_or('.');

            let cell = if selected == Some(square) {
                format!("({})", glyph)
            } else if highlights.contains(&square) {
                if glyph == '.' {
                    " * ".to_string()
                } else {
                    format!("[{}]", glyph)
                }
            } else {
                format!(" {} ", glyph)
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    out.push_str("  ");
    for file in &files {
        let _ = write!(out, " {} ", file.char());
    }
    out.push('\n');
    out
}

/// `White 09:58 | Black 10:00`, with the side to move marked
pub fn render_clocks(controller: &TurnController) -> String {
    let clock = controller.clock();
    let marker = |color: Color| {
        if controller.result().is_none() && controller.side_to_move() == color {
            ">"
        } else {
            " "
        }
    };
    format!(
        "{}White {} | {}Black {}",
        marker(Color::White),
        clock.format(Color::White),
        marker(Color::Black),
        clock.format(Color::Black)
    )
}

/// One-line description of the current state
pub fn render_status(controller: &TurnController) -> String {
    let side = color_name(controller.side_to_move());
    match controller.state() {
        TurnState::AwaitingSelection => {
            if controller.position().is_check() {
                format!("{} to move (check)", side)
            } else {
                format!("{} to move", side)
            }
        }
        TurnState::AwaitingDestination { from, moves } => {
            format!("{}: {} selected, {} legal moves", side, from, moves.len())
        }
        TurnState::AwaitingPromotionChoice { from, to, .. } => {
            format!("{}: promote {}{}", side, from, to)
        }
        TurnState::ComputerThinking => format!("Computer ({}) is thinking...", side),
        TurnState::GameOver(result) => format!("Game over: {}", result),
    }
}

/// Promotion prompt listing the picker squares
pub fn render_promotion_prompt(controller: &TurnController) -> Option<String> {
    let picker = controller.promotion_picker()?;
    let options: Vec<String> = picker
        .iter()
        .map(|(role, square)| format!("{} ({})", role.char(), square))
        .collect();
    Some(format!("Promote to: {}", options.join(", ")))
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn human_game() -> TurnController {
        TurnController::new(GameConfig::default()).expect("standard start")
    }

    #[test]
    fn test_board_orientation() {
        let mut controller = human_game();
        let board = render_board(&controller);
        let first = board.lines().next().unwrap_or_default().to_string();
        assert!(first.starts_with("8 "), "White's view starts at rank 8: {}", first);
        assert!(first.contains(" r "));

        controller.flip();
        let flipped = render_board(&controller);
        let first = flipped.lines().next().unwrap_or_default().to_string();
        assert!(first.starts_with("1 "), "flipped view starts at rank 1: {}", first);
        assert!(flipped.lines().last().unwrap_or_default().trim_start().starts_with('h'));
    }

    #[test]
    fn test_selection_highlights() {
        let mut controller = human_game();
        controller.select(Square::E2);

        let board = render_board(&controller);

        assert!(board.contains("(P)"));
        assert_eq!(board.matches(" * ").count(), 2, "e3 and e4 marked");
    }

    #[test]
    fn test_clocks_and_status() {
        let controller = human_game();

        assert_eq!(render_clocks(&controller), ">White 10:00 |  Black 10:00");
        assert_eq!(render_status(&controller), "White to move");
    }

    #[test]
    fn test_promotion_prompt() {
        let mut controller = TurnController::new(GameConfig {
            start_fen: Some("8/4P3/8/8/8/8/k7/4K3 w - - 0 1".to_string()),
            ..GameConfig::default()
        })
        .expect("valid fen");
        controller.click(Square::E7);
        controller.click(Square::E8);

        let text = render(&controller);

        assert!(text.contains("Promote to: q (e8), r (e7), b (e6), n (e5)"));
    }

    #[test]
    fn test_history_lines() {
        let mut controller = human_game();
        controller.click(Square::E2);
        controller.click(Square::E4);

        assert!(render(&controller).contains("1. e4"));
    }
}

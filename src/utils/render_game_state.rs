//! Terminal-oriented Unicode board renderer.
//!
//! Layered boards print one block per layer, layer 1 first.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let layers = game_state.layers();
    let mut blocks = Vec::with_capacity(layers as usize);

    for layer in 0..layers {
        let mut out = String::new();
        if layers > 1 {
            out.push_str(&format!("Layer {}\n", layer + 1));
        }
        out.push_str("  a b c d e f g h\n");

        for row in 0..BOARD_SIZE {
            let rank = char::from(b'8' - row);
            out.push(rank);
            out.push(' ');
            for col in 0..BOARD_SIZE {
                match game_state.piece_at(Coord::new(layer, row, col)) {
                    Some(piece) => out.push(piece_to_unicode(piece)),
                    None => out.push('·'),
                }
                if col + 1 < BOARD_SIZE {
                    out.push(' ');
                }
            }
            out.push(' ');
            out.push(rank);
            out.push('\n');
        }

        out.push_str("  a b c d e f g h");
        blocks.push(out);
    }

    blocks.join("\n\n")
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::chess_rules::Variant;
    use crate::game_state::game_state::GameState;

    #[test]
    fn renders_start_position() {
        let text = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn renders_one_block_per_layer() {
        let text = render_game_state(&GameState::new_game_for(Variant::layered_with_sentinels()));
        assert_eq!(text.matches("Layer").count(), 3);
        assert!(text.contains("Layer 2\n"));
        assert!(text.contains("5 · · · ♕ · · · · 5"));
    }
}

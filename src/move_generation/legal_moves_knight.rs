use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_steps;
use crate::moves::move_descriptions::MoveList;

/// Knight jumps: the eight L offsets, repeated on each adjacent layer when the
/// board is layered.
pub fn generate_knight_moves(game_state: &GameState, from: Coord, side: Color, out: &mut MoveList) {
    push_steps(game_state, from, side, game_state.geometry().knight, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_rules::Variant;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::MoveList;

    #[test]
    fn corner_knight_has_two_planar_jumps() {
        let game = GameState::from_fen("k7/8/8/8/8/8/8/N6K w - - 0 1").expect("FEN should parse");
        let mut out = MoveList::with_limit(256);
        generate_knight_moves(&game, Coord::planar(7, 0), Color::White, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn layered_knight_repeats_its_jumps_on_adjacent_layers() {
        let mut game = GameState::new_empty(Variant::layered());
        let from = Coord::new(1, 4, 4);
        game.set(from, Some(Piece::new(PieceKind::Knight, Color::White)));
        let mut out = MoveList::with_limit(512);
        generate_knight_moves(&game, from, Color::White, &mut out);
        assert_eq!(out.len(), 24);

        game.set(Coord::new(0, 2, 3), Some(Piece::new(PieceKind::Pawn, Color::White)));
        game.set(Coord::new(2, 2, 3), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        let mut out = MoveList::with_limit(512);
        generate_knight_moves(&game, from, Color::White, &mut out);
        assert_eq!(out.len(), 23);
        assert!(out.iter().any(|m| m.to == Coord::new(2, 2, 3) && m.is_capture()));
    }
}

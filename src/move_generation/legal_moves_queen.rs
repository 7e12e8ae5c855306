use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_rays;
use crate::moves::move_descriptions::MoveList;

/// Queen = bishop rays followed by rook rays.
pub fn generate_queen_moves(game_state: &GameState, from: Coord, side: Color, out: &mut MoveList) {
    let geometry = game_state.geometry();
    push_rays(game_state, from, side, geometry.diagonals, out);
    push_rays(game_state, from, side, geometry.straights, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::MoveList;

    #[test]
    fn central_queen_on_empty_board_has_twenty_seven_moves() {
        let game = GameState::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("FEN should parse");
        let mut out = MoveList::with_limit(256);
        generate_queen_moves(&game, Coord::planar(4, 3), Color::White, &mut out);
        assert_eq!(out.len(), 27);
    }
}

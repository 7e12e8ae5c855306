//! Rook move generation.
//!
//! Straight rays on the rook's own layer, plus on layered boards rays that
//! change layer with the row, with the column, or alone.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_rays;
use crate::moves::move_descriptions::MoveList;

pub fn generate_rook_moves(game_state: &GameState, from: Coord, side: Color, out: &mut MoveList) {
    push_rays(game_state, from, side, game_state.geometry().straights, out);
}

//! Bishop move generation.
//!
//! Diagonal rays on the bishop's own layer, plus on layered boards the rays
//! that change layer together with both row and column.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_rays;
use crate::moves::move_descriptions::MoveList;

pub fn generate_bishop_moves(game_state: &GameState, from: Coord, side: Color, out: &mut MoveList) {
    push_rays(game_state, from, side, game_state.geometry().diagonals, out);
}

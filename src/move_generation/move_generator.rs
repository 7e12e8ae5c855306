use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveList;

/// Source of legal moves for the side to move.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveList;
}

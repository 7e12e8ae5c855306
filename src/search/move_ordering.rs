//! Move ordering heuristics: promotions first, then captures by MVV-LVA.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

const PROMOTION_BONUS: i32 = 10_000;
const CAPTURE_BONUS: i32 = 1_000;

/// Ordering value of a piece. Kings carry none, so a capture "by the king"
/// is only ranked by its victim.
#[inline]
const fn ordering_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

/// Heuristic score of a generated move; quiet moves score 0.
pub fn score_move(game_state: &GameState, mv: &Move) -> i32 {
    if let Some(kind) = mv.promotion {
        return PROMOTION_BONUS + ordering_value(kind);
    }
    let Some(victim) = mv.previous_state.captured else {
        return 0;
    };
    let attacker = game_state
        .piece_at(mv.from)
        .map_or(0, |piece| ordering_value(piece.kind));
    CAPTURE_BONUS + ordering_value(victim.kind) - attacker / 10
}

/// Sorts best-first. The sort is stable, so equal scores keep generation
/// order.
pub fn order_moves(game_state: &GameState, moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| -score_move(game_state, mv));
}

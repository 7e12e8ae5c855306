use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, MoveList, FLAG_CAPTURE};

/// Builds a move, recording the captured occupant of `to` (if any).
#[inline]
pub fn build_move(
    game_state: &GameState,
    from: Coord,
    to: Coord,
    promotion: Option<PieceKind>,
    flags: u8,
) -> Move {
    let mut mv = Move::new(from, to);
    mv.promotion = promotion;
    mv.flags = flags;
    mv.previous_state.captured = game_state.piece_at(to);
    if mv.previous_state.captured.is_some() {
        mv.flags |= FLAG_CAPTURE;
    }
    mv
}

/// Single-step movers (knight, king): land on empty or enemy squares.
pub fn push_steps(game_state: &GameState, from: Coord, side: Color, steps: &[Delta], out: &mut MoveList) {
    let layers = game_state.layers();
    for &step in steps {
        let Some(to) = from.offset(step, layers) else {
            continue;
        };
        match game_state.piece_at(to) {
            Some(piece) if piece.color == side => {}
            _ => out.push(build_move(game_state, from, to, None, 0)),
        }
    }
}

/// Sliding movers: walk each ray until the edge, an own piece (excluded) or
/// an enemy piece (captured, then stop).
pub fn push_rays(game_state: &GameState, from: Coord, side: Color, rays: &[Delta], out: &mut MoveList) {
    let layers = game_state.layers();
    for &ray in rays {
        let mut cursor = from;
        while let Some(to) = cursor.offset(ray, layers) {
            match game_state.piece_at(to) {
                None => out.push(build_move(game_state, from, to, None, 0)),
                Some(piece) => {
                    if piece.color != side {
                        out.push(build_move(game_state, from, to, None, 0));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}

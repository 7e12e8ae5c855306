//! Pawn move generation.
//!
//! Same-layer moves follow ordinary chess. On layered boards a pawn may also
//! push or capture forward onto an adjacent layer; those moves never double
//! push, never capture en passant and only promote when the variant enables
//! inter-layer promotion.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::build_move;
use crate::moves::move_descriptions::{MoveList, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT};

pub fn generate_pawn_moves(game_state: &GameState, from: Coord, side: Color, out: &mut MoveList) {
    let layers = game_state.layers();
    let forward = side.pawn_direction();

    for &shift in game_state.geometry().pawn_layer_shifts {
        let promotes = shift == 0 || game_state.variant.inter_layer_promotion;

        if let Some(to) = from.offset(Delta::new(shift, forward, 0), layers) {
            if game_state.is_empty(to) {
                push_pawn_move(game_state, from, to, side, promotes, out);

                if shift == 0 && from.row == side.pawn_start_row() {
                    if let Some(double) = to.offset(Delta::planar(forward, 0), layers) {
                        if game_state.is_empty(double) {
                            out.push(build_move(game_state, from, double, None, FLAG_DOUBLE_PAWN_PUSH));
                        }
                    }
                }
            }
        }

        for side_step in [-1, 1] {
            let Some(to) = from.offset(Delta::new(shift, forward, side_step), layers) else {
                continue;
            };
            match game_state.piece_at(to) {
                Some(target) if target.color != side => {
                    push_pawn_move(game_state, from, to, side, promotes, out);
                }
                Some(_) => {}
                None if shift == 0 && is_en_passant_target(game_state, from, to, side) => {
                    let mut mv = build_move(game_state, from, to, None, FLAG_EN_PASSANT | FLAG_CAPTURE);
                    mv.previous_state.captured = Some(Piece::new(PieceKind::Pawn, side.opposite()));
                    out.push(mv);
                }
                None => {}
            }
        }
    }
}

/// The square behind a pawn that just double-pushed, still holding that
/// enemy pawn beside the capturer.
fn is_en_passant_target(game_state: &GameState, from: Coord, to: Coord, side: Color) -> bool {
    game_state.en_passant_square == Some(to)
        && game_state.piece_at(Coord::new(from.layer, from.row, to.col))
            == Some(Piece::new(PieceKind::Pawn, side.opposite()))
}

fn push_pawn_move(
    game_state: &GameState,
    from: Coord,
    to: Coord,
    side: Color,
    promotes: bool,
    out: &mut MoveList,
) {
    if promotes && to.row == side.promotion_row() {
        for kind in PROMOTION_KINDS {
            out.push(build_move(game_state, from, to, Some(kind), 0));
        }
    } else {
        out.push(build_move(game_state, from, to, None, 0));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_rules::Variant;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::MoveList;

    fn pawn_moves(game: &GameState, from: Coord, side: Color) -> MoveList {
        let mut out = MoveList::with_limit(game.move_capacity());
        generate_pawn_moves(game, from, side, &mut out);
        out
    }

    #[test]
    fn start_row_pawn_pushes_one_or_two() {
        let game = GameState::new_game();
        let moves = pawn_moves(&game, Coord::planar(6, 4), Color::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to == Coord::planar(4, 4) && m.is_double_pawn_push()));
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let game = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(pawn_moves(&game, Coord::planar(6, 4), Color::White).is_empty());
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let game = GameState::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let moves = pawn_moves(&game, Coord::planar(6, 4), Color::White);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Coord::planar(5, 4));
    }

    #[test]
    fn promotion_emits_four_moves_per_destination() {
        // Push to e8 plus capture on d8.
        let game = GameState::from_fen("3rk3/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = pawn_moves(&game, Coord::planar(1, 4), Color::White);
        // e8 is occupied by the king, so only d8 captures remain.
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.promotion.is_some() && m.is_capture()));

        let game = GameState::from_fen("3r3k/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = pawn_moves(&game, Coord::planar(1, 4), Color::White);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn en_passant_capture_records_the_captured_pawn() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        let moves = pawn_moves(&game, Coord::planar(3, 4), Color::White);
        let ep = moves
            .iter()
            .find(|m| m.is_en_passant())
            .expect("en passant should be generated");
        assert_eq!(ep.to, Coord::planar(2, 3));
        assert_eq!(
            ep.previous_state.captured,
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
    }

    #[test]
    fn layered_pawn_steps_onto_adjacent_layers() {
        let mut game = GameState::new_empty(Variant::layered());
        let from = Coord::new(1, 4, 4);
        game.set(from, Some(Piece::new(PieceKind::Pawn, Color::White)));
        game.set(Coord::new(0, 3, 3), Some(Piece::new(PieceKind::Rook, Color::Black)));
        let moves = pawn_moves(&game, from, Color::White);
        // Three forward pushes (one per layer) plus one inter-layer capture.
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().any(|m| m.to == Coord::new(0, 3, 3) && m.is_capture()));
        assert!(moves.iter().any(|m| m.to == Coord::new(2, 3, 4)));
    }

    #[test]
    fn inter_layer_moves_do_not_promote_by_default() {
        let mut game = GameState::new_empty(Variant::layered());
        let from = Coord::new(1, 1, 0);
        game.set(from, Some(Piece::new(PieceKind::Pawn, Color::White)));
        let moves = pawn_moves(&game, from, Color::White);
        assert_eq!(moves.iter().filter(|m| m.to.layer == 1).count(), 4);
        assert_eq!(moves.iter().filter(|m| m.to.layer != 1).count(), 2);
        assert!(moves.iter().filter(|m| m.to.layer != 1).all(|m| m.promotion.is_none()));

        let variant = Variant {
            inter_layer_promotion: true,
            ..Variant::layered()
        };
        let mut game = GameState::new_empty(variant);
        game.set(from, Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(pawn_moves(&game, from, Color::White).len(), 12);
    }
}

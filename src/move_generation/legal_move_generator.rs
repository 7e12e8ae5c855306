//! Full legal move generation pipeline.
//!
//! Per-square, per-piece pseudo-legal generation for the side to move,
//! followed by a make/undo pass that drops every move leaving the mover's own
//! king attacked. Output order is generation order.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::MoveList;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveList {
        generate_legal_moves(game_state)
    }
}

/// Every move of the side to move that obeys piece movement and occupancy,
/// ignoring own-king safety.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> MoveList {
    let side = game_state.side_to_move;
    let mut out = MoveList::with_limit(game_state.move_capacity());

    for (from, piece) in game_state.pieces() {
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, side, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, from, side, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, side, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, from, side, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, from, side, &mut out),
            PieceKind::King => generate_king_moves(game_state, from, side, &mut out),
        }
    }

    out
}

/// Legal moves, simulated on a private copy of the board.
pub fn generate_legal_moves(game_state: &GameState) -> MoveList {
    let mut working = game_state.clone();
    generate_legal_moves_in_place(&mut working)
}

/// Legal moves, simulated with make/undo directly on `game_state`, which is
/// left exactly as it was found.
pub fn generate_legal_moves_in_place(game_state: &mut GameState) -> MoveList {
    let side = game_state.side_to_move;
    let pseudo = generate_pseudo_legal_moves(game_state);
    let mut legal = MoveList::with_limit(pseudo.limit());

    #[cfg(debug_assertions)]
    let snapshot = game_state.clone();

    for mut mv in pseudo {
        make_move(game_state, &mut mv);
        let exposes_king = is_king_in_check(game_state, side);
        unmake_move(game_state, &mv);
        if !exposes_king {
            legal.push(mv);
        }
    }

    #[cfg(debug_assertions)]
    debug_assert_eq!(*game_state, snapshot, "make/unmake did not restore the board");

    legal
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, generate_legal_moves_in_place, generate_pseudo_legal_moves};
    use crate::game_state::chess_rules::Variant;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::make_move;

    #[test]
    fn start_position_has_twenty_moves() {
        let game = GameState::new_game();
        assert_eq!(generate_pseudo_legal_moves(&game).len(), 20);
        assert_eq!(generate_legal_moves(&game).len(), 20);
    }

    #[test]
    fn pinned_piece_only_moves_along_the_pin() {
        // Rook e2 pinned by the rook on e8; bishop d2 pinned by the bishop on a5.
        let game = GameState::from_fen("4r1k1/8/8/b7/8/8/3BR3/4K3 w - - 0 1").expect("FEN should parse");
        let legal = generate_legal_moves(&game);

        let rook_moves: Vec<Coord> = legal
            .iter()
            .filter(|m| m.from == Coord::planar(6, 4))
            .map(|m| m.to)
            .collect();
        assert_eq!(rook_moves.len(), 6);
        assert!(rook_moves.iter().all(|to| to.col == 4));

        let bishop_moves: Vec<Coord> = legal
            .iter()
            .filter(|m| m.from == Coord::planar(6, 3))
            .map(|m| m.to)
            .collect();
        assert_eq!(
            bishop_moves,
            vec![Coord::planar(5, 2), Coord::planar(4, 1), Coord::planar(3, 0)]
        );

        let pseudo = generate_pseudo_legal_moves(&game);
        assert!(pseudo.iter().any(|m| m.from == Coord::planar(6, 4) && m.to.col != 4));
    }

    #[test]
    fn checked_side_must_resolve_the_check() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/3q4/R3K3 w Q - 0 1").expect("FEN should parse");
        let legal = generate_legal_moves(&game);
        // Only Kxd2 or king steps off the queen's lines.
        assert!(legal.iter().all(|m| m.from == Coord::planar(7, 4)));
        assert!(legal.iter().any(|m| m.to == Coord::planar(6, 3) && m.is_capture()));
        assert!(!legal.iter().any(|m| m.is_castling()));
    }

    #[test]
    fn unused_en_passant_expires() {
        let mut game = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let mut push = generate_legal_moves(&game)
            .into_iter()
            .find(|m| m.from == Coord::planar(1, 3) && m.to == Coord::planar(3, 3))
            .expect("double push should be legal");
        make_move(&mut game, &mut push);
        assert!(generate_legal_moves(&game).iter().any(|m| m.is_en_passant()));

        let mut king_step = generate_legal_moves(&game)
            .into_iter()
            .find(|m| m.from == Coord::planar(7, 4) && m.to == Coord::planar(7, 3))
            .expect("king step should be legal");
        make_move(&mut game, &mut king_step);
        let mut black_king = generate_legal_moves(&game)
            .into_iter()
            .find(|m| m.from == Coord::planar(0, 4))
            .expect("black king should move");
        make_move(&mut game, &mut black_king);
        assert!(!generate_legal_moves(&game).iter().any(|m| m.is_en_passant()));
    }

    #[test]
    fn in_place_generation_leaves_the_board_untouched() {
        let mut game = GameState::new_game_for(Variant::layered_with_sentinels());
        let before = game.clone();
        let moves = generate_legal_moves_in_place(&mut game);
        assert_eq!(game, before);
        assert_eq!(moves.len(), generate_legal_moves(&before).len());
    }

    #[test]
    fn layered_start_stays_within_capacity() {
        for variant in [Variant::layered(), Variant::layered_with_sentinels()] {
            let game = GameState::new_game_for(variant);
            let moves = generate_legal_moves(&game);
            assert!(!moves.is_empty());
            assert!(moves.len() <= variant.move_capacity);
            assert!(moves.iter().all(|m| game.contains(m.to)));
        }
    }
}

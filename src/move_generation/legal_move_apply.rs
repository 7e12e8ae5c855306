//! In-place move application and its exact inverse.
//!
//! `make_move` stores every piece of mutable pre-move state in
//! `Move::previous_state`; `unmake_move` restores from that snapshot alone and
//! never re-derives state. Pairs must be strictly nested.

use tracing::error;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

pub fn make_move(game_state: &mut GameState, mv: &mut Move) {
    let Some(moving) = game_state.piece_at(mv.from) else {
        error!(from = ?mv.from, to = ?mv.to, "make_move called on an empty square");
        return;
    };
    let mover = moving.color;

    mv.previous_state.castling_rights = game_state.castling_rights;
    mv.previous_state.en_passant_square = game_state.en_passant_square;
    mv.previous_state.halfmove_clock = game_state.halfmove_clock;

    if mv.is_en_passant() {
        mv.previous_state.captured = Some(Piece::new(PieceKind::Pawn, mover.opposite()));
        game_state.clear(en_passant_victim(mv));
    } else {
        mv.previous_state.captured = game_state.piece_at(mv.to);
    }

    if moving.kind == PieceKind::King {
        if let Some((rook_from, rook_to)) = castling_rook_path(mv) {
            let rook = game_state.piece_at(rook_from);
            game_state.clear(rook_from);
            game_state.set(rook_to, rook);
        }
        game_state.castling_rights &= !castle_flags_for(mover);
    }

    let placed = match mv.promotion {
        Some(kind) => Piece::new(kind, mover),
        None => moving,
    };
    game_state.clear(mv.from);
    game_state.set(mv.to, Some(placed));

    game_state.en_passant_square = None;
    if moving.kind == PieceKind::Pawn && mv.from.layer == mv.to.layer && mv.from.row.abs_diff(mv.to.row) == 2 {
        game_state.en_passant_square = Some(Coord::new(
            mv.from.layer,
            (mv.from.row + mv.to.row) / 2,
            mv.from.col,
        ));
    }

    revoke_corner_rights(game_state, mv.from);
    revoke_corner_rights(game_state, mv.to);

    if moving.kind == PieceKind::Pawn || mv.previous_state.captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }

    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }
    game_state.side_to_move = mover.opposite();
}

pub fn unmake_move(game_state: &mut GameState, mv: &Move) {
    let Some(placed) = game_state.piece_at(mv.to) else {
        error!(from = ?mv.from, to = ?mv.to, "unmake_move found no piece on the destination");
        return;
    };
    let mover = placed.color;

    let original = if mv.promotion.is_some() {
        Piece::new(PieceKind::Pawn, mover)
    } else {
        placed
    };
    game_state.set(mv.from, Some(original));

    if mv.is_en_passant() {
        game_state.clear(mv.to);
        game_state.set(en_passant_victim(mv), mv.previous_state.captured);
    } else {
        game_state.set(mv.to, mv.previous_state.captured);
    }

    if original.kind == PieceKind::King {
        if let Some((rook_from, rook_to)) = castling_rook_path(mv) {
            let rook = game_state.piece_at(rook_to);
            game_state.clear(rook_to);
            game_state.set(rook_from, rook);
        }
    }

    game_state.castling_rights = mv.previous_state.castling_rights;
    game_state.en_passant_square = mv.previous_state.en_passant_square;
    game_state.halfmove_clock = mv.previous_state.halfmove_clock;

    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_sub(1);
    }
    game_state.side_to_move = mover;
}

/// Square of the pawn removed by an en-passant capture: beside the capturer,
/// on the destination's column.
#[inline]
fn en_passant_victim(mv: &Move) -> Coord {
    Coord::new(mv.from.layer, mv.from.row, mv.to.col)
}

/// Rook origin and destination for a king move of two columns.
fn castling_rook_path(mv: &Move) -> Option<(Coord, Coord)> {
    if mv.from.layer != mv.to.layer || mv.from.row != mv.to.row || mv.from.col.abs_diff(mv.to.col) != 2 {
        return None;
    }
    if mv.to.col > mv.from.col {
        Some((mv.from.with_col(7), mv.from.with_col(5)))
    } else {
        Some((mv.from.with_col(0), mv.from.with_col(3)))
    }
}

/// Clears the right tied to a rook corner when anything leaves or lands on it.
fn revoke_corner_rights(game_state: &mut GameState, square: Coord) {
    for color in [Color::White, Color::Black] {
        let Some(layer) = game_state.variant.castling_layer(color) else {
            continue;
        };
        if square.layer != layer || square.row != color.home_row() {
            continue;
        }
        match square.col {
            0 => game_state.castling_rights &= !castle_flag(color, false),
            7 => game_state.castling_rights &= !castle_flag(color, true),
            _ => {}
        }
    }
}

//! Move text: from-square, to-square, optional promotion letter
//! (`e7e8q`, `3e23e4`). Parsed text is only ever resolved against the legal
//! move list, so nothing illegal can come out of it.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_coord, coord_to_algebraic};

pub fn move_to_text(mv: &Move, layers: u8) -> String {
    let mut out = coord_to_algebraic(mv.from, layers);
    out.push_str(&coord_to_algebraic(mv.to, layers));
    if let Some(kind) = mv.promotion {
        out.push(kind.letter());
    }
    out
}

/// Splits move text into squares and promotion without consulting the board.
fn split_move_text(text: &str, layers: u8) -> ChessResult<(Coord, Coord, Option<PieceKind>)> {
    let compact: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    let square_len = if layers > 1 { 3 } else { 2 };
    if !compact.is_ascii() || compact.len() < 2 * square_len || compact.len() > 2 * square_len + 1 {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let from = algebraic_to_coord(&compact[..square_len], layers)?;
    let to = algebraic_to_coord(&compact[square_len..2 * square_len], layers)?;
    let promotion = match compact[2 * square_len..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_letter(ch) {
            Some(kind) if PROMOTION_KINDS.contains(&kind) => Some(kind),
            _ => return Err(ChessError::InvalidMoveText(text.to_owned())),
        },
    };
    Ok((from, to, promotion))
}

/// Resolves move text to the matching legal move of the side to move.
pub fn parse_move(game_state: &GameState, text: &str) -> ChessResult<Move> {
    let (from, to, promotion) = split_move_text(text, game_state.layers())?;
    generate_legal_moves(game_state)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
        .ok_or_else(|| ChessError::IllegalMove(text.trim().to_owned()))
}

/// Parses and plays move text, returning the applied move.
pub fn apply_move_text(game_state: &mut GameState, text: &str) -> ChessResult<Move> {
    let mut mv = parse_move(game_state, text)?;
    make_move(game_state, &mut mv);
    Ok(mv)
}

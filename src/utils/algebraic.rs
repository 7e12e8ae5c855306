//! Square notation.
//!
//! Planar boards use plain file+rank (`e4`). Layered boards prefix the
//! 1-based layer (`1e4` is layer 0).

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Coord, BOARD_SIZE};

/// Parses a square for a board with `layers` layers.
pub fn algebraic_to_coord(square: &str, layers: u8) -> ChessResult<Coord> {
    let bytes = square.as_bytes();
    let (layer, rest) = if layers > 1 {
        match bytes.first() {
            Some(digit @ b'1'..=b'9') => (digit - b'1', &bytes[1..]),
            _ => return Err(ChessError::InvalidSquare(square.to_owned())),
        }
    } else {
        (0, bytes)
    };

    let [file, rank] = rest else {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    };
    if !(b'a'..=b'h').contains(file) || !(b'1'..=b'8').contains(rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let coord = Coord::new(layer, BOARD_SIZE - 1 - (rank - b'1'), file - b'a');
    if !coord.is_on_board(layers) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }
    Ok(coord)
}

/// Formats a square for a board with `layers` layers.
pub fn coord_to_algebraic(coord: Coord, layers: u8) -> String {
    let file = char::from(b'a' + coord.col);
    let rank = char::from(b'1' + (BOARD_SIZE - 1 - coord.row));
    if layers > 1 {
        format!("{}{file}{rank}", coord.layer + 1)
    } else {
        format!("{file}{rank}")
    }
}

//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Every scorer reports from White's point of view: positive favours White,
//! negative favours Black, whoever is to move.

use crate::game_state::chess_rules::EvaluationKind;
use crate::game_state::{chess_types::*, game_state::GameState};

pub trait BoardScorer: Send + Sync {
    /// Static score, White-positive.
    fn score(&self, game_state: &GameState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }
}

#[inline]
fn signed(color: Color, value: i32) -> i32 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state
            .pieces()
            .map(|(_, piece)| signed(piece.color, Self::piece_value(piece.kind)))
            .sum()
    }
}

// Piece-square tables from White's side: index [row][col] with row 0 = rank 8.
// Black reads the row mirrored.

#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [ 50, 50, 50, 50, 50, 50, 50, 50],
    [ 10, 10, 20, 30, 30, 20, 10, 10],
    [  5,  5, 10, 25, 25, 10,  5,  5],
    [  0,  0,  0, 20, 20,  0,  0,  0],
    [  5, -5,-10,  0,  0,-10, -5,  5],
    [  5, 10, 10,-20,-20, 10, 10,  5],
    [  0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [  5, 10, 10, 10, 10, 10, 10,  5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [  0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

// Middlegame king: stay home, prefer the castled corners.
#[rustfmt::skip]
const KING_TABLE: [[i32; 8]; 8] = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

/// Material plus mirrored piece-square tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl PieceSquareScorer {
    #[inline]
    pub fn square_bonus(piece: Piece, coord: Coord) -> i32 {
        let table = match piece.kind {
            PieceKind::Pawn => &PAWN_TABLE,
            PieceKind::Knight => &KNIGHT_TABLE,
            PieceKind::Bishop => &BISHOP_TABLE,
            PieceKind::Rook => &ROOK_TABLE,
            PieceKind::Queen => &QUEEN_TABLE,
            PieceKind::King => &KING_TABLE,
        };
        let row = match piece.color {
            Color::White => coord.row,
            Color::Black => BOARD_SIZE - 1 - coord.row,
        };
        table[row as usize][coord.col as usize]
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state
            .pieces()
            .map(|(coord, piece)| {
                signed(
                    piece.color,
                    MaterialScorer::piece_value(piece.kind) + Self::square_bonus(piece, coord),
                )
            })
            .sum()
    }
}

const CENTER_BONUS: i32 = 10;
const MIDDLE_LAYER_BONUS: i32 = 15;

/// Material plus a bonus for the central 4x4 of each layer and, on layered
/// boards, for standing on the middle layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatScorer;

impl FlatScorer {
    #[inline]
    pub fn square_bonus(layers: u8, coord: Coord) -> i32 {
        let mut bonus = 0;
        if (2..=5).contains(&coord.row) && (2..=5).contains(&coord.col) {
            bonus += CENTER_BONUS;
        }
        if layers > 1 && coord.layer == layers / 2 {
            bonus += MIDDLE_LAYER_BONUS;
        }
        bonus
    }
}

impl BoardScorer for FlatScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let layers = game_state.layers();
        game_state
            .pieces()
            .map(|(coord, piece)| {
                signed(
                    piece.color,
                    MaterialScorer::piece_value(piece.kind) + Self::square_bonus(layers, coord),
                )
            })
            .sum()
    }
}

/// Scores with whichever evaluator the position's variant selects.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantScorer;

impl BoardScorer for VariantScorer {
    #[inline]
    fn score(&self, game_state: &GameState) -> i32 {
        evaluate(game_state)
    }
}

pub fn evaluate(game_state: &GameState) -> i32 {
    match game_state.variant.evaluation {
        EvaluationKind::PieceSquare => PieceSquareScorer.score(game_state),
        EvaluationKind::Flat => FlatScorer.score(game_state),
    }
}

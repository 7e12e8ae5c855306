//! Rule configuration for the supported board topologies.
//!
//! A [`Variant`] is a plain value: the layer count, which layout the initial
//! setup uses, and the switches for the rules that differ between the planar
//! and layered games.

use crate::game_state::chess_types::Color;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Move buffer bound for the planar board.
pub const PLANAR_MOVE_CAPACITY: usize = 256;
/// Move buffer bound for the layered board.
pub const LAYERED_MOVE_CAPACITY: usize = 512;
/// Halfmove clock value at which the fifty-move rule ends the game.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Initial piece layout produced by `GameState::initial_standard_setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    /// Ordinary chess on a single layer.
    Standard,
    /// Black's army on layer 0, White's on the top layer, empty layers between.
    Layered,
    /// `Layered` plus one queen per side on the middle layer.
    LayeredWithSentinels,
}

/// Which static evaluator the search uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationKind {
    /// Material plus mirrored piece-square tables.
    PieceSquare,
    /// Material plus central-square and middle-layer bonuses.
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub layers: u8,
    pub setup: Setup,
    /// Per side (indexed by `Color::index`), the only layer on which that side
    /// may castle. `None` disables castling for the side.
    pub castling_layers: [Option<u8>; 2],
    /// Whether pawn moves that change layer promote on the far row.
    pub inter_layer_promotion: bool,
    pub move_capacity: usize,
    pub evaluation: EvaluationKind,
}

impl Variant {
    pub const fn standard() -> Self {
        Self {
            layers: 1,
            setup: Setup::Standard,
            castling_layers: [Some(0), Some(0)],
            inter_layer_promotion: false,
            move_capacity: PLANAR_MOVE_CAPACITY,
            evaluation: EvaluationKind::PieceSquare,
        }
    }

    pub const fn layered() -> Self {
        Self {
            layers: 3,
            setup: Setup::Layered,
            castling_layers: [Some(0), Some(0)],
            inter_layer_promotion: false,
            move_capacity: LAYERED_MOVE_CAPACITY,
            evaluation: EvaluationKind::Flat,
        }
    }

    pub const fn layered_with_sentinels() -> Self {
        Self {
            setup: Setup::LayeredWithSentinels,
            ..Self::layered()
        }
    }

    #[inline]
    pub const fn is_layered(&self) -> bool {
        self.layers > 1
    }

    #[inline]
    pub const fn castling_layer(&self, color: Color) -> Option<u8> {
        self.castling_layers[color.index()]
    }

    /// Layer holding `color`'s army in the initial setup.
    pub const fn home_layer(&self, color: Color) -> u8 {
        match color {
            Color::White => self.layers.saturating_sub(1),
            Color::Black => 0,
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::standard()
    }
}

//! Direction tables per board topology.
//!
//! Move generation and attack detection both walk these tables, so a piece's
//! movement pattern is defined once per topology. Layered boards reuse the
//! planar offsets on the adjacent layers and add pure vertical steps for the
//! straight movers and the king.

use crate::game_state::chess_types::Delta;

const LAYER_SHIFTS_PLANAR: [i8; 1] = [0];
const LAYER_SHIFTS_LAYERED: [i8; 3] = [0, -1, 1];

const KNIGHT_PLANAR: [Delta; 8] = [
    Delta::planar(2, 1),
    Delta::planar(2, -1),
    Delta::planar(-2, 1),
    Delta::planar(-2, -1),
    Delta::planar(1, 2),
    Delta::planar(1, -2),
    Delta::planar(-1, 2),
    Delta::planar(-1, -2),
];

const DIAGONAL_PLANAR: [Delta; 4] = [
    Delta::planar(1, 1),
    Delta::planar(1, -1),
    Delta::planar(-1, 1),
    Delta::planar(-1, -1),
];

const STRAIGHT_PLANAR: [Delta; 4] = [
    Delta::planar(1, 0),
    Delta::planar(-1, 0),
    Delta::planar(0, 1),
    Delta::planar(0, -1),
];

const KING_PLANAR: [Delta; 8] = [
    Delta::planar(-1, -1),
    Delta::planar(-1, 0),
    Delta::planar(-1, 1),
    Delta::planar(0, -1),
    Delta::planar(0, 1),
    Delta::planar(1, -1),
    Delta::planar(1, 0),
    Delta::planar(1, 1),
];

const KNIGHT_LAYERED: [Delta; 24] = spread_over_layers(KNIGHT_PLANAR);
const DIAGONAL_LAYERED: [Delta; 12] = spread_over_layers(DIAGONAL_PLANAR);
const STRAIGHT_LAYERED: [Delta; 14] = with_verticals(spread_over_layers::<4, 12>(STRAIGHT_PLANAR));
const KING_LAYERED: [Delta; 26] = with_verticals(spread_over_layers::<8, 24>(KING_PLANAR));

/// Repeats planar offsets on the same layer, then one layer down, then up.
const fn spread_over_layers<const N: usize, const M: usize>(planar: [Delta; N]) -> [Delta; M] {
    let mut out = [Delta::ZERO; M];
    let mut shift = 0;
    while shift < LAYER_SHIFTS_LAYERED.len() {
        let mut i = 0;
        while i < N {
            let d = planar[i];
            out[shift * N + i] = Delta::new(LAYER_SHIFTS_LAYERED[shift], d.row, d.col);
            i += 1;
        }
        shift += 1;
    }
    out
}

/// Appends the straight down/up layer steps.
const fn with_verticals<const N: usize, const M: usize>(base: [Delta; N]) -> [Delta; M] {
    let mut out = [Delta::ZERO; M];
    let mut i = 0;
    while i < N {
        out[i] = base[i];
        i += 1;
    }
    out[N] = Delta::new(-1, 0, 0);
    out[N + 1] = Delta::new(1, 0, 0);
    out
}

/// Movement vectors for one topology. Every direction set is closed under
/// negation, so the same tables serve outward generation and inward attack
/// scans.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    pub layers: u8,
    pub knight: &'static [Delta],
    /// Bishop rays; also the queen's diagonal rays.
    pub diagonals: &'static [Delta],
    /// Rook rays; also the queen's straight rays.
    pub straights: &'static [Delta],
    pub king: &'static [Delta],
    /// Layer changes a pawn may combine with its forward step.
    pub pawn_layer_shifts: &'static [i8],
}

impl Geometry {
    pub const PLANAR: Geometry = Geometry {
        layers: 1,
        knight: &KNIGHT_PLANAR,
        diagonals: &DIAGONAL_PLANAR,
        straights: &STRAIGHT_PLANAR,
        king: &KING_PLANAR,
        pawn_layer_shifts: &LAYER_SHIFTS_PLANAR,
    };

    pub const LAYERED: Geometry = Geometry {
        layers: 3,
        knight: &KNIGHT_LAYERED,
        diagonals: &DIAGONAL_LAYERED,
        straights: &STRAIGHT_LAYERED,
        king: &KING_LAYERED,
        pawn_layer_shifts: &LAYER_SHIFTS_LAYERED,
    };

    pub const fn for_layers(layers: u8) -> Geometry {
        if layers > 1 {
            Geometry {
                layers,
                ..Geometry::LAYERED
            }
        } else {
            Geometry::PLANAR
        }
    }
}

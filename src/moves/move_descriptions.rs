//! Move values and the fixed-capacity buffer they are generated into.

use std::ops::{Deref, DerefMut};

use arrayvec::ArrayVec;
use tracing::error;

use crate::game_state::chess_rules::LAYERED_MOVE_CAPACITY;
use crate::game_state::chess_types::{Coord, PieceKind, PreviousState};

pub const FLAG_CAPTURE: u8 = 1 << 0;
pub const FLAG_DOUBLE_PAWN_PUSH: u8 = 1 << 1;
pub const FLAG_EN_PASSANT: u8 = 1 << 2;
pub const FLAG_CASTLING: u8 = 1 << 3;

/// A transient move: produced by the generator, completed by `make_move`,
/// consumed by `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub promotion: Option<PieceKind>,
    pub flags: u8,
    pub previous_state: PreviousState,
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Self {
        Self {
            from,
            to,
            promotion: None,
            flags: 0,
            previous_state: PreviousState::default(),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        self.flags & FLAG_CASTLING != 0
    }

    #[inline]
    pub const fn is_double_pawn_push(&self) -> bool {
        self.flags & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    /// Same from/to/promotion, ignoring flags and undo bookkeeping.
    #[inline]
    pub fn same_action(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

/// Move buffer bounded by the variant's move capacity.
///
/// Exceeding the bound means the generator is broken: debug builds panic,
/// release builds drop the move and log an error.
#[derive(Debug, Clone)]
pub struct MoveList {
    moves: ArrayVec<Move, LAYERED_MOVE_CAPACITY>,
    limit: usize,
}

impl MoveList {
    pub fn with_limit(limit: usize) -> Self {
        debug_assert!(
            limit <= LAYERED_MOVE_CAPACITY,
            "move buffer limit {limit} exceeds storage capacity {LAYERED_MOVE_CAPACITY}"
        );
        Self {
            moves: ArrayVec::new(),
            limit: limit.min(LAYERED_MOVE_CAPACITY),
        }
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(
            self.moves.len() < self.limit,
            "move buffer overflow: capacity {} exceeded",
            self.limit
        );
        if self.moves.len() >= self.limit {
            error!(limit = self.limit, "move buffer full, dropping generated move");
            return;
        }
        self.moves.push(mv);
    }
}

impl Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.moves
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.moves
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = arrayvec::IntoIter<Move, LAYERED_MOVE_CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

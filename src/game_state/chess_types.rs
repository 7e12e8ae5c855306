//! Core value types shared by every subsystem: sides, pieces, squares and
//! coordinates on a one- or three-layer board.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::PreviousState;

/// Files and ranks per layer.
pub const BOARD_SIZE: u8 = 8;
/// Largest supported layer count.
pub const MAX_LAYERS: u8 = 3;
/// Storage slots needed for the largest topology.
pub const MAX_SQUARES: usize = (MAX_LAYERS as usize) * 64;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White advances towards row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks in the initial setup.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// Piece kind (colour is carried separately in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase letter used by FEN and move notation.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Promotion choices in the order the generator emits them.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// An occupied square's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { kind, color })
    }
}

/// Contents of one board square. `None` is empty, so a piece kind never
/// exists without an owner and vice versa.
pub type Square = Option<Piece>;

/// Step between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub layer: i8,
    pub row: i8,
    pub col: i8,
}

impl Delta {
    pub const ZERO: Delta = Delta::new(0, 0, 0);

    #[inline]
    pub const fn new(layer: i8, row: i8, col: i8) -> Self {
        Self { layer, row, col }
    }

    #[inline]
    pub const fn planar(row: i8, col: i8) -> Self {
        Self { layer: 0, row, col }
    }

    #[inline]
    pub const fn scaled(self, factor: i8) -> Self {
        Self {
            layer: self.layer * factor,
            row: self.row * factor,
            col: self.col * factor,
        }
    }
}

/// A board coordinate. Row 0 is rank 8, col 0 is file a; planar boards only
/// ever use layer 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub layer: u8,
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[inline]
    pub const fn new(layer: u8, row: u8, col: u8) -> Self {
        Self { layer, row, col }
    }

    #[inline]
    pub const fn planar(row: u8, col: u8) -> Self {
        Self { layer: 0, row, col }
    }

    /// Whether this coordinate exists on a board with `layers` layers.
    #[inline]
    pub const fn is_on_board(self, layers: u8) -> bool {
        self.layer < layers && self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Applies `delta`, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, delta: Delta, layers: u8) -> Option<Coord> {
        let layer = self.layer as i16 + delta.layer as i16;
        let row = self.row as i16 + delta.row as i16;
        let col = self.col as i16 + delta.col as i16;
        let size = BOARD_SIZE as i16;
        if !(0..layers as i16).contains(&layer) || !(0..size).contains(&row) || !(0..size).contains(&col)
        {
            return None;
        }
        Some(Coord::new(layer as u8, row as u8, col as u8))
    }

    /// Same layer and row, different column.
    #[inline]
    pub const fn with_col(self, col: u8) -> Self {
        Self {
            layer: self.layer,
            row: self.row,
            col,
        }
    }

    /// Flat storage index. Only meaningful for on-board coordinates.
    #[inline]
    pub const fn index(self) -> usize {
        (self.layer as usize) * 64 + (self.row as usize) * 8 + self.col as usize
    }
}

/// Castling rights bitmask; each right is an independent bit.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[inline]
pub const fn castle_flag(color: Color, kingside: bool) -> CastlingRights {
    match (color, kingside) {
        (Color::White, true) => CASTLE_WHITE_KINGSIDE,
        (Color::White, false) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, true) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, false) => CASTLE_BLACK_QUEENSIDE,
    }
}

#[inline]
pub const fn castle_flags_for(color: Color) -> CastlingRights {
    castle_flag(color, true) | castle_flag(color, false)
}

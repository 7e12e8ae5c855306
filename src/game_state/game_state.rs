//! Core board state representation.
//!
//! `GameState` is the central model for the engine: a square array covering
//! every layer of the configured topology, plus side to move, castling rights,
//! the en-passant target and the clocks. All mutation during play goes
//! through `make_move` / `unmake_move`.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::{Setup, Variant, LAYERED_MOVE_CAPACITY};
use crate::game_state::chess_types::*;
use crate::moves::geometry::Geometry;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub variant: Variant,
    squares: [Square; MAX_SQUARES],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Coord>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_empty(Variant::standard())
    }
}

impl GameState {
    /// An empty board for `variant` with White to move and no rights.
    ///
    /// The layer count is clamped to `1..=MAX_LAYERS`, the extent of the
    /// square storage.
    pub fn new_empty(mut variant: Variant) -> Self {
        variant.layers = variant.layers.clamp(1, MAX_LAYERS);
        Self {
            variant,
            squares: [None; MAX_SQUARES],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Standard chess starting position.
    #[inline]
    pub fn new_game() -> Self {
        Self::new_game_for(Variant::standard())
    }

    /// Starting position of `variant`.
    pub fn new_game_for(variant: Variant) -> Self {
        let mut game = Self::new_empty(variant);
        game.initial_standard_setup();
        game
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen, Variant::standard())
    }

    #[inline]
    pub fn from_fen_for(fen: &str, variant: Variant) -> ChessResult<Self> {
        parse_fen(fen, variant)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Clears the board and places both armies for the configured setup.
    ///
    /// Castling rights are granted only to a side whose king stands on its
    /// home square on that side's castling layer.
    pub fn initial_standard_setup(&mut self) {
        self.squares = [None; MAX_SQUARES];

        for color in [Color::White, Color::Black] {
            let layer = match self.variant.setup {
                Setup::Standard => 0,
                Setup::Layered | Setup::LayeredWithSentinels => self.variant.home_layer(color),
            };
            self.place_army(color, layer);
        }

        if self.variant.setup == Setup::LayeredWithSentinels && self.layers() >= 3 {
            let middle = self.layers() / 2;
            self.set(
                Coord::new(middle, 3, 3),
                Some(Piece::new(PieceKind::Queen, Color::White)),
            );
            self.set(
                Coord::new(middle, 4, 4),
                Some(Piece::new(PieceKind::Queen, Color::Black)),
            );
        }

        self.side_to_move = Color::White;
        self.castling_rights = 0;
        for color in [Color::White, Color::Black] {
            if self.king_on_castling_home(color) {
                self.castling_rights |= castle_flags_for(color);
            }
        }
        self.en_passant_square = None;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;
    }

    fn place_army(&mut self, color: Color, layer: u8) {
        let home = color.home_row();
        let pawns = color.pawn_start_row();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            self.set(Coord::new(layer, home, col), Some(Piece::new(*kind, color)));
            self.set(
                Coord::new(layer, pawns, col),
                Some(Piece::new(PieceKind::Pawn, color)),
            );
        }
    }

    fn king_on_castling_home(&self, color: Color) -> bool {
        let Some(layer) = self.variant.castling_layer(color) else {
            return false;
        };
        self.piece_at(Coord::new(layer, color.home_row(), 4)) == Some(Piece::new(PieceKind::King, color))
    }

    /// Layer count, never beyond the square storage even if `variant` was
    /// edited after construction.
    #[inline]
    pub fn layers(&self) -> u8 {
        self.variant.layers.clamp(1, MAX_LAYERS)
    }

    /// Move buffer bound for generation, capped at the buffer's storage.
    #[inline]
    pub fn move_capacity(&self) -> usize {
        self.variant.move_capacity.min(LAYERED_MOVE_CAPACITY)
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        Geometry::for_layers(self.layers())
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.is_on_board(self.layers())
    }

    /// Contents of `coord`; off-board coordinates read as empty.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Square {
        if self.contains(coord) {
            self.squares[coord.index()]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    /// Writes a square. Off-board coordinates are ignored.
    #[inline]
    pub fn set(&mut self, coord: Coord, square: Square) {
        if self.contains(coord) {
            self.squares[coord.index()] = square;
        }
    }

    #[inline]
    pub fn clear(&mut self, coord: Coord) {
        self.set(coord, None);
    }

    /// Every coordinate of the topology in layer, row, column order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let layers = self.layers();
        (0..layers).flat_map(|layer| {
            (0..BOARD_SIZE).flat_map(move |row| (0..BOARD_SIZE).map(move |col| Coord::new(layer, row, col)))
        })
    }

    /// Occupied squares with their pieces, in `coords` order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.coords()
            .filter_map(move |coord| self.piece_at(coord).map(|piece| (coord, piece)))
    }

    #[inline]
    pub fn has_castling_right(&self, color: Color, kingside: bool) -> bool {
        self.castling_rights & castle_flag(color, kingside) != 0
    }
}

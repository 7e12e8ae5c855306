use crate::game_state::chess_types::*;

/// Everything `unmake_move` needs to restore, captured before the move.
///
/// `captured` is filled in at generation time (for en passant it names the
/// pawn removed from beside the destination); the remaining fields are
/// snapshotted by `make_move`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviousState {
    pub captured: Option<Piece>,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Coord>,
    pub halfmove_clock: u16,
}

//! Attack detection.
//!
//! Attacks are re-derived outward from the target square using the same
//! geometry tables as generation, so occupancy rules that only matter for
//! moving (pawn pushes, own-piece exclusion) never leak into check tests.

use tracing::debug;

use crate::game_state::{chess_types::*, game_state::GameState};

/// First king of `color` in layer, row, column order.
pub fn find_king(game_state: &GameState, color: Color) -> Option<Coord> {
    game_state
        .pieces()
        .find(|(_, piece)| piece.is(PieceKind::King, color))
        .map(|(coord, _)| coord)
}

/// Whether `color`'s king is attacked. A position without that king is
/// reported as not in check.
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king) = find_king(game_state, color) else {
        debug!(side = color.name(), "no king on board while testing for check");
        return false;
    };
    is_square_attacked(game_state, king, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, target: Coord, attacker_color: Color) -> bool {
    if !game_state.contains(target) {
        return false;
    }
    let layers = game_state.layers();
    let geometry = game_state.geometry();
    let holds = |coord: Option<Coord>, kind: PieceKind| {
        coord.is_some_and(|c| game_state.piece_at(c).is_some_and(|p| p.is(kind, attacker_color)))
    };

    // A pawn attacks one row forward; look one row backward from the target.
    let behind = -attacker_color.pawn_direction();
    for &shift in geometry.pawn_layer_shifts {
        for side_step in [-1, 1] {
            if holds(target.offset(Delta::new(shift, behind, side_step), layers), PieceKind::Pawn) {
                return true;
            }
        }
    }

    if geometry
        .knight
        .iter()
        .any(|&d| holds(target.offset(d, layers), PieceKind::Knight))
    {
        return true;
    }

    if geometry
        .king
        .iter()
        .any(|&d| holds(target.offset(d, layers), PieceKind::King))
    {
        return true;
    }

    ray_hits(game_state, target, geometry.diagonals, attacker_color, PieceKind::Bishop)
        || ray_hits(game_state, target, geometry.straights, attacker_color, PieceKind::Rook)
}

/// Walks each ray to its first occupant and reports whether that occupant is
/// an `attacker_color` piece of `slider` kind or a queen.
fn ray_hits(
    game_state: &GameState,
    target: Coord,
    rays: &[Delta],
    attacker_color: Color,
    slider: PieceKind,
) -> bool {
    let layers = game_state.layers();
    for &ray in rays {
        let mut cursor = target;
        while let Some(next) = cursor.offset(ray, layers) {
            if let Some(piece) = game_state.piece_at(next) {
                if piece.color == attacker_color
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            cursor = next;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{find_king, is_king_in_check, is_square_attacked};
    use crate::game_state::chess_rules::Variant;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_attacks() {
        let game = GameState::new_game();
        // e3 is covered by the d2 and f2 pawns, e4 by nothing.
        assert!(is_square_attacked(&game, Coord::planar(5, 4), Color::White));
        assert!(!is_square_attacked(&game, Coord::planar(4, 4), Color::White));
        // f6 is covered by the g8 knight.
        assert!(is_square_attacked(&game, Coord::planar(2, 5), Color::Black));
        assert!(!is_king_in_check(&game, Color::White));
        assert!(!is_king_in_check(&game, Color::Black));
    }

    #[test]
    fn pawns_attack_diagonally_even_onto_empty_squares() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/3P4/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&game, Coord::planar(5, 2), Color::White));
        assert!(is_square_attacked(&game, Coord::planar(5, 4), Color::White));
        assert!(!is_square_attacked(&game, Coord::planar(5, 3), Color::White));
    }

    #[test]
    fn sliders_are_blocked_by_the_first_occupant() {
        let game = GameState::from_fen("4k3/8/8/8/4r3/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&game, Color::White));
        assert!(is_square_attacked(&game, Coord::planar(6, 4), Color::Black));

        let game = GameState::from_fen("4k3/8/8/8/4r3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Color::White));
    }

    #[test]
    fn queen_attacks_along_diagonals_and_files() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/q3K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Color::White));
        let game = GameState::from_fen("4k3/8/8/q7/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Color::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1").expect("FEN should parse");
        assert_eq!(find_king(&game, Color::White), None);
        assert!(!is_king_in_check(&game, Color::White));
    }

    #[test]
    fn off_board_targets_are_never_attacked() {
        let game = GameState::new_game();
        assert!(!is_square_attacked(&game, Coord::new(1, 4, 4), Color::White));
    }

    #[test]
    fn layered_attacks_cross_layers() {
        let mut game = GameState::new_empty(Variant::layered());
        let king = Coord::new(0, 4, 4);
        game.set(king, Some(Piece::new(PieceKind::King, Color::Black)));

        game.set(Coord::new(2, 4, 4), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert!(is_king_in_check(&game, Color::Black));
        game.set(Coord::new(1, 4, 4), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(!is_king_in_check(&game, Color::Black));

        // White pawn one layer up, one row behind (toward rank 1), one file over.
        game.set(Coord::new(1, 5, 5), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(is_king_in_check(&game, Color::Black));
        game.clear(Coord::new(1, 5, 5));

        game.set(Coord::new(1, 6, 5), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert!(is_king_in_check(&game, Color::Black));
        game.clear(Coord::new(1, 6, 5));

        game.set(Coord::new(2, 6, 6), Some(Piece::new(PieceKind::Bishop, Color::White)));
        assert!(is_king_in_check(&game, Color::Black));
    }
}

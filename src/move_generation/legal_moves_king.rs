//! King move generation, including castling on the variant's castling layer.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{build_move, push_steps};
use crate::moves::move_descriptions::{MoveList, FLAG_CASTLING};

const KING_HOME_COL: u8 = 4;

pub fn generate_king_moves(game_state: &GameState, from: Coord, side: Color, out: &mut MoveList) {
    push_steps(game_state, from, side, game_state.geometry().king, out);
    generate_castling_moves(game_state, from, side, out);
}

fn generate_castling_moves(game_state: &GameState, from: Coord, side: Color, out: &mut MoveList) {
    let Some(layer) = game_state.variant.castling_layer(side) else {
        return;
    };
    if from != Coord::new(layer, side.home_row(), KING_HOME_COL) {
        return;
    }
    let enemy = side.opposite();
    if is_square_attacked(game_state, from, enemy) {
        return;
    }

    // (kingside, rook column, squares that must be empty, squares the king crosses)
    let wings: [(bool, u8, &[u8], &[u8]); 2] = [(true, 7, &[5, 6], &[5, 6]), (false, 0, &[1, 2, 3], &[3, 2])];

    for (kingside, rook_col, between, crossed) in wings {
        if !game_state.has_castling_right(side, kingside) {
            continue;
        }
        if game_state.piece_at(from.with_col(rook_col)) != Some(Piece::new(PieceKind::Rook, side)) {
            continue;
        }
        if between.iter().any(|&col| !game_state.is_empty(from.with_col(col))) {
            continue;
        }
        if crossed
            .iter()
            .any(|&col| is_square_attacked(game_state, from.with_col(col), enemy))
        {
            continue;
        }
        let landing = crossed[crossed.len() - 1];
        out.push(build_move(game_state, from, from.with_col(landing), None, FLAG_CASTLING));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_rules::Variant;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::MoveList;

    fn castles(game: &GameState, from: Coord, side: Color) -> Vec<Coord> {
        let mut out = MoveList::with_limit(game.move_capacity());
        generate_king_moves(game, from, side, &mut out);
        out.iter().filter(|m| m.is_castling()).map(|m| m.to).collect()
    }

    #[test]
    fn both_wings_available_when_clear() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let targets = castles(&game, Coord::planar(7, 4), Color::White);
        assert_eq!(targets, vec![Coord::planar(7, 6), Coord::planar(7, 2)]);
    }

    #[test]
    fn no_castling_out_of_or_through_check() {
        // Rook on e8 checks the king.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert!(castles(&game, Coord::planar(7, 4), Color::White).is_empty());

        // Rook on f8 covers f1; queenside stays available.
        let game = GameState::from_fen("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert_eq!(castles(&game, Coord::planar(7, 4), Color::White), vec![Coord::planar(7, 2)]);

        // b1 may be attacked; only c1 and d1 are crossed.
        let game = GameState::from_fen("1r4k1/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");
        assert_eq!(castles(&game, Coord::planar(7, 4), Color::White), vec![Coord::planar(7, 2)]);
    }

    #[test]
    fn blocked_or_rightless_wings_are_skipped() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/RN2K2R w Q - 0 1").expect("FEN should parse");
        assert!(castles(&game, Coord::planar(7, 4), Color::White).is_empty());
    }

    #[test]
    fn layered_castling_only_on_the_castling_layer() {
        let game = GameState::new_game_for(Variant::layered());
        let mut cleared = game.clone();
        for col in [1, 2, 3, 5, 6] {
            cleared.clear(Coord::new(0, 0, col));
            cleared.clear(Coord::new(2, 7, col));
        }
        assert_eq!(
            castles(&cleared, Coord::new(0, 0, 4), Color::Black),
            vec![Coord::new(0, 0, 6), Coord::new(0, 0, 2)]
        );
        assert!(castles(&cleared, Coord::new(2, 7, 4), Color::White).is_empty());
    }
}

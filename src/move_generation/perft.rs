//! Perft: exhaustive legal-move tree counts for generator regression.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

/// Leaf tallies. Move-kind counters describe the last move into each leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    let mut working = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut working, depth, &mut total);
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> Vec<(Move, usize)> {
    let mut working = game_state.clone();
    let mut split = Vec::new();
    for mut mv in generator.generate_legal_moves(&working) {
        let mut counts = PerftCounts::default();
        make_move(&mut working, &mut mv);
        if depth <= 1 {
            counts.nodes = 1;
        } else {
            perft_recurse(generator, &mut working, depth - 1, &mut counts);
        }
        unmake_move(&mut working, &mv);
        split.push((mv, counts.nodes));
    }
    split
}

fn perft_recurse<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    let moves = generator.generate_legal_moves(game_state);

    if depth == 1 {
        for mut mv in moves {
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            leaf.captures = usize::from(mv.is_capture());
            leaf.en_passant = usize::from(mv.is_en_passant());
            leaf.castles = usize::from(mv.is_castling());
            leaf.promotions = usize::from(mv.promotion.is_some());

            make_move(game_state, &mut mv);
            if is_king_in_check(game_state, game_state.side_to_move) {
                leaf.checks = 1;
                leaf.checkmates = usize::from(generator.generate_legal_moves(game_state).is_empty());
            }
            unmake_move(game_state, &mv);
            counts.merge(leaf);
        }
        return;
    }

    for mut mv in moves {
        make_move(game_state, &mut mv);
        perft_recurse(generator, game_state, depth - 1, counts);
        unmake_move(game_state, &mv);
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::chess_rules::Variant;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn start_position_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&LegalMoveGenerator, &game, 0).nodes, 1);
        assert_eq!(perft(&LegalMoveGenerator, &game, 1).nodes, 20);
        assert_eq!(perft(&LegalMoveGenerator, &game, 2).nodes, 400);

        let depth3 = perft(&LegalMoveGenerator, &game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);
    }

    #[test]
    fn kiwipete_counts() {
        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let depth1 = perft(&LegalMoveGenerator, &game, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft(&LegalMoveGenerator, &game, 2);
        assert_eq!(
            depth2,
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn position_3_counts() {
        let game = GameState::from_fen(POSITION_3).expect("FEN should parse");
        assert_eq!(perft(&LegalMoveGenerator, &game, 1).nodes, 14);
        assert_eq!(perft(&LegalMoveGenerator, &game, 2).nodes, 191);
        let depth3 = perft(&LegalMoveGenerator, &game, 3);
        assert_eq!(depth3.nodes, 2812);
        assert_eq!(depth3.en_passant, 2);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let split = perft_divide(&LegalMoveGenerator, &game, 2);
        assert_eq!(split.len(), 48);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<usize>(), 2039);
    }

    #[test]
    fn layered_start_is_symmetric_between_sides() {
        let game = GameState::new_game_for(Variant::layered());
        let white = perft(&LegalMoveGenerator, &game, 1);
        assert_eq!(white.nodes, 72);

        let mut black_to_move = game.clone();
        black_to_move.side_to_move = Color::Black;
        assert_eq!(perft(&LegalMoveGenerator, &black_to_move, 1).nodes, 72);

        // Queens reaching the empty middle layer cover some of the black
        // king's vertical escapes, so the second ply is not a full 72.
        let depth2 = perft(&LegalMoveGenerator, &game, 2);
        let split = perft_divide(&LegalMoveGenerator, &game, 2);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<usize>(), depth2.nodes);
        assert!(depth2.nodes < 72 * 72);
    }
}

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::coord_to_algebraic;

/// Serialises the position in the format `parse_fen` reads back.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = game_state
        .en_passant_square
        .map_or_else(|| "-".to_owned(), |coord| coord_to_algebraic(coord, game_state.layers()));

    format!(
        "{} {} {} {} {} {}",
        board, side_to_move, castling, en_passant, game_state.halfmove_clock, game_state.fullmove_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut layers = Vec::with_capacity(game_state.layers() as usize);

    for layer in 0..game_state.layers() {
        let mut out = String::new();
        for row in 0..BOARD_SIZE {
            let mut empty_count = 0u8;
            for col in 0..BOARD_SIZE {
                match game_state.piece_at(Coord::new(layer, row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push(char::from(b'0' + empty_count));
                            empty_count = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push(char::from(b'0' + empty_count));
            }
            if row + 1 < BOARD_SIZE {
                out.push('/');
            }
        }
        layers.push(out);
    }

    layers.join("|")
}

fn generate_castling_field(castling_rights: CastlingRights) -> String {
    let mut out = String::new();
    for (flag, ch) in [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ] {
        if castling_rights & flag != 0 {
            out.push(ch);
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::{Variant, STARTING_POSITION_FEN};
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_fen() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn fen_survives_a_parse_cycle() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        ] {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            assert_eq!(game.get_fen(), fen);
        }
    }

    #[test]
    fn layered_fen_joins_layers() {
        let game = GameState::new_game_for(Variant::layered_with_sentinels());
        let fen = game.get_fen();
        assert_eq!(
            fen,
            "rnbqkbnr/pppppppp/8/8/8/8/8/8|8/8/8/3Q4/4q3/8/8/8|8/8/8/8/8/8/PPPPPPPP/RNBQKBNR w kq - 0 1"
        );
        let reparsed =
            GameState::from_fen_for(&fen, Variant::layered_with_sentinels()).expect("FEN should parse");
        assert_eq!(reparsed, game);
    }
}

//! FEN-to-GameState parser.
//!
//! Standard six-field FEN. Layered boards give one piece placement per layer,
//! joined by `|` with layer 0 first, and a layer-prefixed en-passant square.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::Variant;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_coord;

fn invalid(message: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(message.into())
}

pub fn parse_fen(fen: &str, variant: Variant) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty(variant);

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part, game_state.layers())?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("halfmove clock '{halfmove_part}'")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("fullmove number '{fullmove_part}'")))?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let layers: Vec<&str> = board_part.split('|').collect();
    if layers.len() != game_state.layers() as usize {
        return Err(invalid(format!(
            "expected {} layer(s), found {}",
            game_state.layers(),
            layers.len()
        )));
    }

    for (layer, layer_str) in layers.iter().enumerate() {
        let ranks: Vec<&str> = layer_str.split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(invalid("each layer must contain 8 ranks"));
        }

        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0u8;
            for ch in rank_str.chars() {
                if let Some(empty_count) = ch.to_digit(10) {
                    if !(1..=8).contains(&empty_count) {
                        return Err(invalid(format!("empty-square count '{ch}'")));
                    }
                    col += empty_count as u8;
                    if col > BOARD_SIZE {
                        return Err(invalid("rank has too many files"));
                    }
                    continue;
                }

                let piece =
                    Piece::from_fen_char(ch).ok_or_else(|| invalid(format!("piece character '{ch}'")))?;
                if col >= BOARD_SIZE {
                    return Err(invalid("rank has too many files"));
                }
                game_state.set(Coord::new(layer as u8, row as u8, col), Some(piece));
                col += 1;
            }

            if col != BOARD_SIZE {
                return Err(invalid("rank does not sum to 8 files"));
            }
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(invalid(format!("castling rights character '{ch}'"))),
        }
    }
    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str, layers: u8) -> ChessResult<Option<Coord>> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    algebraic_to_coord(en_passant_part, layers)
        .map(Some)
        .map_err(|_| invalid(format!("en-passant square '{en_passant_part}'")))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::{Variant, STARTING_POSITION_FEN};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn parses_start_position() {
        let game = parse_fen(STARTING_POSITION_FEN, Variant::standard()).expect("FEN should parse");
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn parses_rights_en_passant_and_clocks() {
        let game = parse_fen(
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w Kq e6 3 7",
            Variant::standard(),
        )
        .expect("FEN should parse");
        assert_eq!(game.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert_eq!(game.en_passant_square, Some(Coord::planar(2, 4)));
        assert_eq!(game.halfmove_clock, 3);
        assert_eq!(game.fullmove_number, 7);
    }

    #[test]
    fn parses_layered_boards() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/8/8|8/8/8/8/8/8/8/8|8/8/8/8/8/8/PPPPPPPP/RNBQKBNR w kq - 0 1";
        let game = parse_fen(fen, Variant::layered()).expect("FEN should parse");
        assert_eq!(game, GameState::new_game_for(Variant::layered()));

        let with_ep = "4k3/8/8/8/8/8/8/8|8/8/8/8/8/8/8/8|8/8/8/8/4P3/8/8/4K3 b - 3e3 0 1";
        let game = parse_fen(with_ep, Variant::layered()).expect("FEN should parse");
        assert_eq!(game.en_passant_square, Some(Coord::new(2, 5, 4)));
    }

    #[test]
    fn rejects_malformed_fen() {
        for fen in [
            "",
            "8/8/8/8/8/8/8/8 w - - 0",
            "8/8/8/8/8/8/8 w - - 0 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
            "ppppppppp/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/7x w - - 0 1",
            "8/8/8/8/8/8/8/8 x - - 0 1",
            "8/8/8/8/8/8/8/8 w X - 0 1",
            "8/8/8/8/8/8/8/8 w - z9 0 1",
            "8/8/8/8/8/8/8/8 w - - a 1",
            "8/8/8/8/8/8/8/8 w - - 0 1 extra",
        ] {
            assert!(
                matches!(parse_fen(fen, Variant::standard()), Err(ChessError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
        assert!(parse_fen(STARTING_POSITION_FEN, Variant::layered()).is_err());
    }
}

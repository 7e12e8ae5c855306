//! Terminal-state detection for the turn loop.

use std::fmt;

use tracing::warn;

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{find_king, is_king_in_check};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveDraw,
    MissingKing,
}

impl GameOutcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameOutcome::Ongoing
    }

    /// Human-readable status line.
    pub fn reason(self) -> String {
        match self {
            GameOutcome::Ongoing => "Game ongoing.".to_owned(),
            GameOutcome::Checkmate { winner } => format!("Checkmate! {} wins.", winner.name()),
            GameOutcome::Stalemate => "Stalemate! Draw.".to_owned(),
            GameOutcome::FiftyMoveDraw => "Draw by 50-move rule.".to_owned(),
            GameOutcome::MissingKing => "Game Over! A king is missing.".to_owned(),
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason())
    }
}

/// Classifies the position for the side to move. A missing king wins over
/// every other verdict; checkmate and stalemate win over the fifty-move rule.
pub fn game_outcome(game_state: &GameState) -> GameOutcome {
    let white_king = find_king(game_state, Color::White);
    let black_king = find_king(game_state, Color::Black);
    if white_king.is_none() || black_king.is_none() {
        warn!(
            white_king = white_king.is_some(),
            black_king = black_king.is_some(),
            "king missing from the board"
        );
        return GameOutcome::MissingKing;
    }

    let side = game_state.side_to_move;
    if generate_legal_moves(game_state).is_empty() {
        return if is_king_in_check(game_state, side) {
            GameOutcome::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameOutcome::Stalemate
        };
    }

    if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        return GameOutcome::FiftyMoveDraw;
    }
    GameOutcome::Ongoing
}

#[inline]
pub fn is_game_over(game_state: &GameState) -> bool {
    game_outcome(game_state).is_over()
}

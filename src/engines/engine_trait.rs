//! Engine abstraction used by the console front end.
//!
//! Different move-selection strategies sit behind one trait so the turn loop
//! can pick an opponent at runtime.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// White-positive score of `best_move`, when the engine computes one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> ChessResult<()> {
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    /// Chooses a move without playing it. Fails with
    /// [`ChessError::NoLegalMoves`] when the side to move has none.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}

//! Fixed-depth minimax engine.
//!
//! Wraps the root search with runtime options. With `RandomizeTies` on, the
//! root keeps every equally scored move and one is drawn at random.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::VariantScorer;
use crate::search::minimax::{search_root, Difficulty, SearchConfig};
use crate::utils::long_algebraic::move_to_text;

pub const MAX_DEPTH: u8 = 8;

pub struct MinimaxEngine {
    config: SearchConfig,
    randomize_ties: bool,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            config: SearchConfig::for_difficulty(difficulty),
            randomize_ties: false,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

fn parse_bool(name: &str, value: &str) -> ChessResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(ChessError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name.trim().to_ascii_lowercase().as_str() {
            "difficulty" => {
                self.config.depth = value.parse::<Difficulty>()?.depth();
            }
            "depth" => {
                let depth = value
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .filter(|depth| (1..=MAX_DEPTH).contains(depth))
                    .ok_or_else(|| ChessError::InvalidOptionValue {
                        name: name.to_owned(),
                        value: value.to_owned(),
                    })?;
                self.config.depth = depth;
            }
            "randomizeties" => self.randomize_ties = parse_bool(name, value)?,
            "alphabeta" => self.config.alpha_beta = parse_bool(name, value)?,
            _ => return Err(ChessError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let config = SearchConfig {
            keep_ties: self.randomize_ties,
            ..self.config
        };
        let result = search_root(game_state, &VariantScorer, &config);

        let picked = if self.randomize_ties {
            result.best_moves.choose(&mut rand::rng()).copied()
        } else {
            result.best_move
        };
        let best_move = picked.ok_or(ChessError::NoLegalMoves)?;

        let mut out = EngineOutput {
            best_move: Some(best_move),
            score: Some(result.best_score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} pv {}",
            config.depth,
            result.best_score,
            result.nodes,
            move_to_text(&best_move, game_state.layers())
        ));
        if self.randomize_ties {
            out.info_lines
                .push(format!("info string tied_moves {}", result.best_moves.len()));
        }
        Ok(out)
    }
}

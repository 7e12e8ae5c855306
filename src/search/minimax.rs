//! Fixed-depth minimax with optional alpha-beta pruning.
//!
//! Scores are White-positive throughout: White maximises, Black minimises.
//! The tree is explored in place with make/unmake, so each call leaves the
//! board exactly as it found it.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::errors::ChessError;
use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves_in_place;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, VariantScorer};
use crate::search::move_ordering::order_moves;
use crate::utils::long_algebraic::move_to_text;

pub const INFINITY: i32 = 1_000_000;
/// Base magnitude of a mate score; the remaining depth is added on top so
/// quicker mates score further from zero.
pub const MATE_SCORE: i32 = INFINITY - 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "medium" => Ok(Difficulty::Medium),
            "3" | "hard" => Ok(Difficulty::Hard),
            _ => Err(ChessError::InvalidOptionValue {
                name: "Difficulty".to_owned(),
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub alpha_beta: bool,
    pub order_moves: bool,
    /// Collect every root move sharing the best score. Forces exact root
    /// scores, so the root window is never narrowed.
    pub keep_ties: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

impl SearchConfig {
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            alpha_beta: true,
            order_moves: true,
            keep_ties: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// First root move reaching `best_score`; `None` when there are no legal moves.
    pub best_move: Option<Move>,
    /// Every root move reaching `best_score`, when ties are kept.
    pub best_moves: Vec<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Minimax with the variant's evaluator, alpha-beta pruning and move ordering.
pub fn minimax(game_state: &mut GameState, depth: u8, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    let config = SearchConfig {
        depth,
        ..SearchConfig::default()
    };
    let mut nodes = 0;
    minimax_with(game_state, &VariantScorer, &config, depth, alpha, beta, maximizing, &mut nodes)
}

#[allow(clippy::too_many_arguments)]
pub fn minimax_with<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    config: &SearchConfig,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return scorer.score(game_state);
    }

    let mut moves = generate_legal_moves_in_place(game_state);
    if moves.is_empty() {
        return terminal_score(game_state, depth, maximizing);
    }
    if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        return 0;
    }

    if config.order_moves {
        order_moves(game_state, &mut moves);
    }

    if maximizing {
        let mut best = -INFINITY - 1;
        for mut mv in moves {
            make_move(game_state, &mut mv);
            let score = minimax_with(game_state, scorer, config, depth - 1, alpha, beta, false, nodes);
            unmake_move(game_state, &mv);
            best = best.max(score);
            alpha = alpha.max(best);
            if config.alpha_beta && beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY + 1;
        for mut mv in moves {
            make_move(game_state, &mut mv);
            let score = minimax_with(game_state, scorer, config, depth - 1, alpha, beta, true, nodes);
            unmake_move(game_state, &mv);
            best = best.min(score);
            beta = beta.min(best);
            if config.alpha_beta && beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Score of a position with no legal moves: mate against the side to move,
/// or a stalemate draw.
fn terminal_score(game_state: &GameState, depth: u8, maximizing: bool) -> i32 {
    if !is_king_in_check(game_state, game_state.side_to_move) {
        return 0;
    }
    let magnitude = MATE_SCORE + i32::from(depth);
    if maximizing {
        -magnitude
    } else {
        magnitude
    }
}

/// Searches every legal root move and reports the best for the side to move.
pub fn search_root<S: BoardScorer>(game_state: &GameState, scorer: &S, config: &SearchConfig) -> SearchResult {
    let mut working = game_state.clone();
    let depth = config.depth.max(1);
    let maximizing = working.side_to_move == Color::White;

    let mut moves = generate_legal_moves_in_place(&mut working);
    if moves.is_empty() {
        return SearchResult {
            best_score: terminal_score(&working, depth, maximizing),
            nodes: 1,
            ..SearchResult::default()
        };
    }
    if config.order_moves {
        order_moves(&working, &mut moves);
    }

    let narrow_root = config.alpha_beta && !config.keep_ties;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut result = SearchResult {
        best_score: if maximizing { -INFINITY - 1 } else { INFINITY + 1 },
        nodes: 1,
        ..SearchResult::default()
    };

    for mut mv in moves {
        make_move(&mut working, &mut mv);
        let score = minimax_with(
            &mut working,
            scorer,
            config,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            &mut result.nodes,
        );
        unmake_move(&mut working, &mv);

        let improves = if maximizing {
            score > result.best_score
        } else {
            score < result.best_score
        };
        if improves {
            result.best_score = score;
            result.best_move = Some(mv);
            result.best_moves.clear();
            result.best_moves.push(mv);
        } else if config.keep_ties && score == result.best_score {
            result.best_moves.push(mv);
        }

        if narrow_root {
            if maximizing {
                alpha = alpha.max(result.best_score);
            } else {
                beta = beta.min(result.best_score);
            }
        }
    }

    let best_text = result
        .best_move
        .map(|mv| move_to_text(&mv, working.layers()))
        .unwrap_or_default();
    debug!(
        depth,
        nodes = result.nodes,
        score = result.best_score,
        best = %best_text,
        "root search finished"
    );
    result
}

/// Picks a move for the side to move at the difficulty's depth and plays it.
/// Returns the applied move, or `None` when the game is already over.
pub fn ai_select_move(game_state: &mut GameState, difficulty: Difficulty) -> Option<Move> {
    let config = SearchConfig::for_difficulty(difficulty);
    let result = search_root(game_state, &VariantScorer, &config);
    let mut chosen = result.best_move?;
    make_move(game_state, &mut chosen);
    Some(chosen)
}

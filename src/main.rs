use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use layered_chess::engines::engine_minimax::MinimaxEngine;
use layered_chess::engines::engine_random::RandomEngine;
use layered_chess::engines::engine_trait::Engine;
use layered_chess::errors::{ChessError, ChessResult};
use layered_chess::game_state::chess_rules::Variant;
use layered_chess::game_state::chess_types::Color;
use layered_chess::game_state::game_outcome::game_outcome;
use layered_chess::game_state::game_state::GameState;
use layered_chess::move_generation::legal_move_apply::make_move;
use layered_chess::move_generation::legal_move_generator::generate_legal_moves;
use layered_chess::search::minimax::Difficulty;
use layered_chess::utils::long_algebraic::{apply_move_text, move_to_text};
use layered_chess::utils::render_game_state::render_game_state;

const USAGE: &str = "usage: layered_chess [--3d] [--sentinels] [--difficulty easy|medium|hard] [--human-black] [--ai-vs-ai]";

#[derive(Debug, Clone, Copy)]
struct PlayOptions {
    variant: Variant,
    difficulty: Difficulty,
    human: Option<Color>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> ChessResult<PlayOptions> {
    let mut layered = false;
    let mut sentinels = false;
    let mut options = PlayOptions {
        variant: Variant::standard(),
        difficulty: Difficulty::default(),
        human: Some(Color::White),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--3d" => layered = true,
            "--sentinels" => sentinels = true,
            "--human-black" => options.human = Some(Color::Black),
            "--ai-vs-ai" => options.human = None,
            "--difficulty" => {
                let value = args.next().ok_or_else(|| ChessError::InvalidOptionValue {
                    name: "--difficulty".to_owned(),
                    value: String::new(),
                })?;
                options.difficulty = value.parse()?;
            }
            other => return Err(ChessError::UnknownOption(other.to_owned())),
        }
    }

    options.variant = match (layered || sentinels, sentinels) {
        (false, _) => Variant::standard(),
        (true, false) => Variant::layered(),
        (true, true) => Variant::layered_with_sentinels(),
    };
    Ok(options)
}

enum HumanInput {
    Played,
    Quit,
}

fn human_turn(game: &mut GameState, input: &mut impl BufRead) -> io::Result<HumanInput> {
    let layers = game.layers();
    loop {
        print!("{} to move> ", game.side_to_move.name());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(HumanInput::Quit);
        }
        match line.trim() {
            "" => continue,
            "quit" | "exit" => return Ok(HumanInput::Quit),
            "moves" => {
                let moves: Vec<String> = generate_legal_moves(game)
                    .iter()
                    .map(|mv| move_to_text(mv, layers))
                    .collect();
                println!("{}", moves.join(" "));
            }
            "fen" => println!("{}", game.get_fen()),
            text => match apply_move_text(game, text) {
                Ok(_) => return Ok(HumanInput::Played),
                Err(err) => println!("{err}"),
            },
        }
    }
}

fn engine_turn(game: &mut GameState, engine: &mut dyn Engine, fallback: &mut dyn Engine) -> ChessResult<()> {
    let output = match engine.choose_move(game) {
        Ok(output) => output,
        Err(err) => {
            warn!(engine = engine.name(), %err, "engine failed, using fallback");
            fallback.choose_move(game)?
        }
    };
    for line in &output.info_lines {
        info!("{line}");
    }
    let mut mv = output.best_move.ok_or(ChessError::NoLegalMoves)?;
    println!("{} plays {}", game.side_to_move.name(), move_to_text(&mv, game.layers()));
    make_move(game, &mut mv);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let mut game = GameState::new_game_for(options.variant);
    let mut engine = MinimaxEngine::new(options.difficulty);
    let mut fallback = RandomEngine::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    if options.human.is_some() {
        let example = if game.variant.is_layered() { "3e23e4" } else { "e2e4" };
        println!("Enter moves like {example}; 'moves' lists legal moves, 'fen' prints the position, 'quit' exits.");
    }

    loop {
        println!("{}\n", render_game_state(&game));

        let outcome = game_outcome(&game);
        if outcome.is_over() {
            println!("{}", outcome.reason());
            return ExitCode::SUCCESS;
        }

        if options.human == Some(game.side_to_move) {
            match human_turn(&mut game, &mut input) {
                Ok(HumanInput::Played) => {}
                Ok(HumanInput::Quit) => return ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("input error: {err}");
                    return ExitCode::FAILURE;
                }
            }
        } else if let Err(err) = engine_turn(&mut game, &mut engine, &mut fallback) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }
}

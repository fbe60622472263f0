use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simulator::{play_game, GameRecording, Recorder};
use solitaire::{EdgeStrategy, GameOutcome, RandomStrategy, Strategy};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Strategy that picks the moves, either "random" or "edges"
    #[arg(short, long, default_value = "random")]
    strategy: String,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop as soon as a game finishes with a single peg left
    #[arg(long, default_value_t = false)]
    stop_on_win: bool,

    /// Stop as soon as the strategy produces an illegal move
    #[arg(long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Print the game state before every move
    #[arg(short, long, default_value_t = false)]
    print_moves: bool,

    /// Record finished games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct BatchScore {
    games_played: usize,
    wins: usize,
    abandoned: usize,
    best: Option<u32>,
    total_pieces: u64,
    total_turns: u64,
}

impl BatchScore {
    fn record(&mut self, outcome: &GameOutcome) {
        self.games_played += 1;
        if outcome.is_win() {
            self.wins += 1;
        }
        self.best = Some(match self.best {
            Some(best) => best.min(outcome.pieces_remaining),
            None => outcome.pieces_remaining,
        });
        self.total_pieces += u64::from(outcome.pieces_remaining);
        self.total_turns += u64::from(outcome.turns);
    }

    fn mean_pieces(&self) -> f64 {
        self.total_pieces as f64 / self.games_played as f64
    }

    fn mean_turns(&self) -> f64 {
        self.total_turns as f64 / self.games_played as f64
    }
}

fn strategy_from_name(name: &str) -> anyhow::Result<Box<dyn Strategy>> {
    match name {
        "random" => Ok(Box::new(RandomStrategy)),
        "edges" => Ok(Box::new(EdgeStrategy)),
        _ => anyhow::bail!("Unknown strategy '{}', expected \"random\" or \"edges\"", name),
    }
}

fn play_batch(
    strategy: &mut dyn Strategy,
    num_games: usize,
    rng: &mut StdRng,
    print_moves: bool,
    stop_on_win: bool,
    stop_on_illegal_move: bool,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<BatchScore> {
    let mut score = BatchScore::default();
    for game_idx in 0..num_games {
        match play_game(strategy, rng, print_moves) {
            Ok(game) => {
                debug!(
                    game_idx,
                    pieces_remaining = game.outcome.pieces_remaining,
                    turns = game.outcome.turns
                );
                if let Some(rec) = recorder {
                    rec.write_game_recording(&GameRecording {
                        strategy: String::from(strategy.name()),
                        moves: game.moves,
                        pieces_remaining: game.outcome.pieces_remaining,
                    })?;
                }
                score.record(&game.outcome);
                if stop_on_win && game.outcome.is_win() {
                    info!(game_idx, "Solved with a single peg left, stopping");
                    break;
                }
            }
            Err(err) => {
                info!(game_idx, "Illegal move by strategy: {}", err);
                score.abandoned += 1;
                if stop_on_illegal_move {
                    break;
                }
            }
        }
    }
    Ok(score)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    if args.num_games == 0 {
        anyhow::bail!("--num-games must be at least 1");
    }
    let mut strategy = strategy_from_name(&args.strategy)?;

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let started = Instant::now();
    let score = play_batch(
        strategy.as_mut(),
        args.num_games,
        &mut rng,
        args.print_moves,
        args.stop_on_win,
        args.stop_on_illegal_move,
        &mut recorder,
    )?;
    let elapsed = started.elapsed();

    if score.games_played == 0 {
        eprintln!("End result: no game was completed");
        return Ok(());
    }
    let abandoned = if score.abandoned > 0 {
        format!("\n- {} games abandoned after an illegal move", score.abandoned)
    } else {
        String::new()
    };
    eprintln!(
        "End result:\n- {} games played with the {} strategy in {:.2?}\n- {} wins\n- best game: {} pegs remaining\n- {:.2} pegs remaining on average\n- {:.1} moves per game on average{}",
        score.games_played,
        strategy.name(),
        elapsed,
        score.wins,
        score.best.unwrap_or(0),
        score.mean_pieces(),
        score.mean_turns(),
        abandoned
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}

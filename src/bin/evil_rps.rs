use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{error, info, LevelFilter};

use evil_rps::core::{GameRng, PredictorConfig, SessionConfig};
use evil_rps::engine::{Arena, GameEngine};
use evil_rps::storage::{FileStore, PlayerKey};
use evil_rps::strategy::{FixedStrategy, PredictiveStrategy, RandomStrategy, Strategy};
use evil_rps::terminal::{self, Terminal};

/// Rock-paper-scissors against an opponent that learns your habits.
#[derive(Parser, Debug)]
#[command(name = "evil-rps", version, about)]
struct Args {
    /// Directory holding one history record per player.
    #[arg(long, default_value = "rps_markov_samples")]
    data_dir: PathBuf,

    /// Fixed RNG seed for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Longest context the model records.
    #[arg(long, default_value_t = 2)]
    max_order: usize,

    /// Rounds handed to the model after each round.
    #[arg(long, default_value_t = 3)]
    window: usize,

    /// Log more (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively (default).
    Play,
    /// Watch a bot play the predictive opponent.
    Simulate {
        #[arg(long, value_enum, default_value_t = Bot::Random)]
        opponent: Bot,
        #[arg(long, default_value_t = 100)]
        rounds: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Bot {
    Random,
    Lazy,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        let predictor = PredictorConfig::default()
            .with_max_order(self.max_order)
            .with_window(self.window);
        let config = SessionConfig::default()
            .with_data_dir(&self.data_dir)
            .with_predictor(predictor);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = terminal::init_logging(args.log_level()) {
        eprintln!("could not initialize logging: {err}");
    }

    let config = args.session_config();
    if let Err(err) = config.validate() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

    match args.command.unwrap_or(Command::Play) {
        Command::Play => play(&config, rng),
        Command::Simulate { opponent, rounds } => simulate(&config, rng, opponent, rounds),
    }
}

fn play(config: &SessionConfig, rng: GameRng) -> ExitCode {
    let mut console = match Terminal::new() {
        Ok(console) => console,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let Some(name) = console.prompt_name() else {
        println!();
        println!("Have a nice day!");
        return ExitCode::SUCCESS;
    };
    let player = PlayerKey::from_display_name(&name);
    let store = FileStore::new(&config.data_dir);

    let mut engine = GameEngine::resume(player.clone(), &store, config.predictor.clone(), rng);
    if engine.is_returning() {
        println!("Welcome back, {player}!");
    } else {
        println!("Welcome to Evil Rock Paper Scissors, {player}!");
    }

    match engine.run(&mut console, &store, terminal::print_round) {
        Ok(summary) => info!(
            "'{}' played {} rounds ({} on record): {}",
            summary.player, summary.rounds_played, summary.total_rounds, summary.scores
        ),
        Err(err) => error!("could not save history for '{player}': {err}"),
    }

    println!();
    println!("Have a nice day, {player}!");
    ExitCode::SUCCESS
}

fn simulate(config: &SessionConfig, mut rng: GameRng, opponent: Bot, rounds: usize) -> ExitCode {
    let challenger: Box<dyn Strategy> = match opponent {
        Bot::Random => Box::new(RandomStrategy),
        Bot::Lazy => Box::new(FixedStrategy::random(&mut rng)),
    };
    let engine = PredictiveStrategy::new(config.predictor.clone());

    let mut arena = Arena::new(challenger, engine, &mut rng);
    let scores = arena.play(rounds);

    println!(
        "{} vs {} after {rounds} rounds: PC: {}, {}: {}, Draws: {}",
        arena.challenger().name(),
        arena.engine().name(),
        scores.engine,
        arena.challenger().name(),
        scores.human,
        scores.draws
    );
    println!("PC win rate: {:.1}%", scores.engine_win_rate() * 100.0);
    ExitCode::SUCCESS
}

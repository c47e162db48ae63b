mod command;
mod config;
mod game_ui;
mod runner;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::games::tictactoe::{Difficulty, GameSession, SessionSettings};
use common::{SessionRng, log, logger};

use config::{Config, get_config_manager};
use runner::{RunnerOptions, run_game_loop};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// easy, medium or hard; overrides the config file
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Let the computer open every game
    #[arg(long)]
    computer_first: bool,

    /// Seed for the random choices of the easy and medium levels
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_default_config: bool,

    /// Print session log lines
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    no_hints: bool,
}

impl Args {
    fn apply_to(&self, config: Config) -> Config {
        Config {
            difficulty: self.difficulty.unwrap_or(config.difficulty),
            computer_first: self.computer_first || config.computer_first,
            show_hints: config.show_hints && !self.no_hints,
            seed: self.seed.or(config.seed),
            log_prefix: config.log_prefix,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let config = args.apply_to(config_manager.get_config()?);

    if args.write_default_config {
        config_manager.set_config(&config)?;
        println!("Configuration written.");
        return Ok(());
    }

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting with seed {}", rng.seed());

    let settings = SessionSettings {
        difficulty: config.difficulty,
        computer_first: config.computer_first,
    };
    let mut session = GameSession::new(settings, rng)?;
    let options = RunnerOptions {
        show_hints: config.show_hints,
    };

    println!("You are X, the computer is O. Type ? for help.");
    let stdin = io::stdin();
    run_game_loop(&mut session, &options, stdin.lock(), &mut io::stdout())?;

    Ok(())
}

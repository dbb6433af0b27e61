use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use war_cards::{Result, Side, WarConfig, WarGameBuilder};

#[derive(Parser)]
#[command(
    name = "war",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,
)]
struct Args {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shuffle seed; overrides the configuration.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rounds to play (1-26); overrides the configuration.
    #[arg(long)]
    rounds: Option<usize>,

    /// Deal the deck in its created order.
    #[arg(long)]
    no_shuffle: bool,

    /// Print the dealing order before playing.
    #[arg(long)]
    show_deck: bool,
}

fn load_config(args: &Args) -> Result<WarConfig> {
    let mut config = match &args.config {
        Some(path) => WarConfig::load(path)?,
        None => WarConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(rounds) = args.rounds {
        config = config.with_max_rounds(rounds);
    }
    if args.no_shuffle {
        config = config.with_shuffle(false);
    }
    config.verify()?;
    Ok(config)
}

fn setup_logger(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args, config: WarConfig) -> Result<()> {
    let mut game = WarGameBuilder::from_config(config).build()?;

    if args.show_deck {
        for card in game.deck() {
            println!("{card}");
        }
        println!();
    }

    while game.is_terminal().is_none() {
        let record = game.play_round()?;
        println!("{record}");
    }

    let summary = game.play_to_end()?;
    println!();
    println!("Seed: {}", summary.seed);
    println!(
        "Won: {}, Drawn: {}, Lost: {}",
        summary.wins[Side::User],
        summary.draws,
        summary.losses()
    );
    println!("Result: {}", summary.result);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("war: {err}");
            return ExitCode::FAILURE;
        }
    };
    setup_logger(&config.log_filter);

    match run(&args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "game aborted");
            eprintln!("war: {err}");
            ExitCode::FAILURE
        }
    }
}

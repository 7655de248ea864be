use std::error::Error;
use std::process;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use clock_patience::game::{DEFAULT_RIFFLE_PASSES, DEFAULT_SEED};
use clock_patience::{GameSession, Mode, Outcome};

#[derive(Parser, Debug)]
#[command(
    name = "winrate",
    about = "Play many automatic games and report how often the deal comes out."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 10_000)]
    games: usize,

    /// Seed for the session's shuffle generator
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Riffle passes per shuffle
    #[arg(long = "riffles", default_value_t = DEFAULT_RIFFLE_PASSES)]
    riffles: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if args.games == 0 {
        return Err("--games must be positive".into());
    }

    let mut session = GameSession::builder()
        .with_seed(args.seed)
        .with_riffle_passes(args.riffles)
        .build()?;

    let started = Instant::now();
    let mut wins = 0usize;
    let mut face_up_total = 0usize;
    for game in 0..args.games {
        session.start_game(Mode::Automatic);
        let outcome = session.play_out()?;
        if outcome == Outcome::Win {
            wins += 1;
        }
        face_up_total += session.piles().total_face_up();
        info!(game, ?outcome, "finished game");
    }

    let elapsed = started.elapsed();
    let rate = wins as f64 / args.games as f64;
    println!("Games played: {}", args.games);
    println!("Wins: {wins} ({:.2}%, about 1 in 13 expected)", rate * 100.0);
    println!(
        "Average cards turned face up: {:.1}",
        face_up_total as f64 / args.games as f64
    );
    println!("Elapsed: {:.2?}", elapsed);
    Ok(())
}

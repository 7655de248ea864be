use std::error::Error;
use std::process;
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use clock_patience::game::DEFAULT_SEED;
use clock_patience::{
    BoardSnapshot, GameSession, HumanPlayer, Mode, Outcome, PerfectPlayer, Phase, Player,
    RandomPlayer,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Auto,
    Manual,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlayerArg {
    Human,
    Random,
    Perfect,
}

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play a single game of Clock Patience.")]
struct Args {
    /// Automatic play or manual pile selection
    #[arg(long, value_enum, default_value_t = ModeArg::Auto)]
    mode: ModeArg,

    /// Seed for shuffling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Who answers the prompts in manual mode
    #[arg(long, value_enum, default_value_t = PlayerArg::Human)]
    player: PlayerArg,

    /// Pause between automatic moves, in milliseconds
    #[arg(long = "delay-ms", default_value_t = 0)]
    delay_ms: u64,

    /// Print the final board as JSON
    #[arg(long)]
    json: bool,

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

    let mut session = GameSession::builder().with_seed(args.seed).build()?;
    let outcome = match args.mode {
        ModeArg::Auto => run_automatic(&mut session, Duration::from_millis(args.delay_ms))?,
        ModeArg::Manual => {
            let mut player: Box<dyn Player> = match args.player {
                PlayerArg::Human => Box::new(HumanPlayer::default()),
                PlayerArg::Random => Box::new(RandomPlayer::new(StdRng::seed_from_u64(
                    args.seed ^ 0x9E37_79B9,
                ))),
                PlayerArg::Perfect => Box::new(PerfectPlayer),
            };
            run_manual(&mut session, player.as_mut())?
        }
    };

    let state = session.snapshot();
    print_board(&state);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }
    match outcome {
        Outcome::Win => println!("Game finished: win."),
        Outcome::Loss => println!("Game finished: loss."),
        Outcome::Ongoing => println!("Game stopped before completion."),
    }
    Ok(())
}

fn run_automatic(session: &mut GameSession, delay: Duration) -> Result<Outcome, Box<dyn Error>> {
    let state = session.start_game(Mode::Automatic);
    println!("{}", state.message);
    while !session.is_over() {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        session.advance()?;
        println!("{}", session.message());
    }
    Ok(session.outcome())
}

fn run_manual(
    session: &mut GameSession,
    player: &mut dyn Player,
) -> Result<Outcome, Box<dyn Error>> {
    session.start_game(Mode::Manual);
    while !session.is_over() {
        let state = session.snapshot();
        let result = match state.phase {
            Phase::AwaitingReveal { .. } => match player.choose_reveal(&state) {
                Some(pile) => session.confirm_reveal(pile).map(|_| ()),
                None => break,
            },
            _ => match player.choose_placement(&state) {
                Some(pile) => session.submit_pile_choice(pile).map(|_| ()),
                None => break,
            },
        };
        match result {
            Ok(()) => println!("{}", session.message()),
            Err(err) if err.is_retryable() => println!("Wrong move: {err}."),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(session.outcome())
}

fn print_board(state: &BoardSnapshot) {
    println!("Board:");
    for view in &state.piles {
        let top = view
            .visible
            .map(|card| card.to_string())
            .unwrap_or_else(|| String::from("--"));
        println!(
            "  [{:>2}] {top:<4} face up {}  hidden {}",
            view.pile.index(),
            view.face_up_count,
            view.hidden_count
        );
    }
}

//! Play command - interactive game in the terminal
//!
//! Input is read on a background thread so the turn timer keeps running
//! while the player thinks; the main loop polls it every 100ms.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::{
    app::{GameConfig, Session, TimerEvent},
    cli::output,
    selector::MoveSelector,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(about = "Play a game in the terminal")]
pub struct PlayArgs {
    /// Game mode (`pvp` or `ai`)
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// AI difficulty (`easy`, `medium`, `hard`)
    #[arg(long, short = 'd')]
    pub difficulty: Option<String>,

    /// Random seed for reproducible AI play
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// What the player typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Cell(usize),
    Hint,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" => Some(Command::Quit),
        "h" | "hint" => Some(Command::Hint),
        other => match other.parse::<usize>() {
            Ok(n @ 1..=9) => Some(Command::Cell(n - 1)),
            _ => None,
        },
    }
}

fn load_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(mode) = &args.mode {
        config.mode = mode.parse()?;
    }
    if let Some(difficulty) = &args.difficulty {
        config.difficulty = difficulty.parse()?;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;
    Ok(config)
}

fn spawn_input_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn prompt(session: &Session) -> Result<()> {
    let now = Instant::now();
    let timer = session.timer();
    println!("\n{}\n", output::format_board(&session.board()));
    println!(
        "{}  {}",
        session.status(),
        output::timer_bar(timer.fraction_remaining(now), timer.band(now))
    );
    print!("Cell (1-9), h for hint, q to quit: ");
    io::stdout().flush()?;
    Ok(())
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = load_config(&args)?;
    let policy = config.difficulty.policy();
    let selector = match config.seed {
        Some(seed) => MoveSelector::with_seed(policy, seed),
        None => MoveSelector::new(policy),
    };
    let mut selector = selector.with_optimal_probability(config.optimal_probability)?;

    output::print_section("Tic-Tac-Toe");
    output::print_kv("Mode", &config.mode.to_string());
    output::print_kv("Difficulty", &config.difficulty.to_string());

    let input = spawn_input_reader();
    let mut session = Session::new(&config)?;
    let mut needs_prompt = true;

    while session.is_active() {
        if session.is_ai_turn() {
            thread::sleep(config.ai_delay());
            let report = session.play_ai(&mut selector)?;
            println!("\nAI plays cell {}", report.applied.position + 1);
            needs_prompt = true;
            continue;
        }

        if needs_prompt {
            prompt(&session)?;
            needs_prompt = false;
        }

        match session.tick(Instant::now()) {
            TimerEvent::HintDue(index) => {
                println!("\nHint: try cell {}", index + 1);
                needs_prompt = true;
                continue;
            }
            TimerEvent::TurnSkipped { skipped, next } => {
                println!("\nTime's up! Player {skipped} loses the turn to Player {next}.");
                needs_prompt = true;
                continue;
            }
            TimerEvent::Idle => {}
        }

        let line = match input.recv_timeout(POLL_INTERVAL) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                println!("\nInput closed, leaving the game.");
                return Ok(());
            }
        };
        debug!(input = %line, "player input");
        needs_prompt = true;

        match parse_command(&line) {
            Some(Command::Quit) => {
                println!("Bye!");
                return Ok(());
            }
            Some(Command::Hint) => match session.hint() {
                Some(index) => println!("Hint: try cell {}", index + 1),
                None => println!("No hint available."),
            },
            Some(Command::Cell(index)) => {
                if let Err(err) = session.play(index) {
                    println!("Can't play there: {err}");
                }
            }
            None => println!("Please enter a number from 1 to 9, h or q."),
        }
    }

    println!("\n{}\n", output::format_board(&session.board()));
    println!("{}", session.status());
    Ok(())
}

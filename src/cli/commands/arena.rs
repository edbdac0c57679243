//! Arena command - AI vs AI matches

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    pipeline::{Arena, MatchConfig, MoveTraceObserver, ProgressObserver},
    selector::{DEFAULT_OPTIMAL_PROBABILITY, MoveSelector, Policy},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play synthetic opponents against each other")]
pub struct ArenaArgs {
    /// Policy controlling X (random, blended, optimal)
    #[arg(long = "x", default_value = "random")]
    pub x_policy: String,

    /// Policy controlling O (random, blended, optimal)
    #[arg(long = "o", default_value = "optimal")]
    pub o_policy: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which side opens each game (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: String,

    /// Chance that a blended policy plays the optimal move
    #[arg(long, default_value_t = DEFAULT_OPTIMAL_PROBABILITY)]
    pub optimal_probability: f64,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export results to file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: ArenaArgs) -> Result<()> {
    let x_policy: Policy = args.x_policy.parse()?;
    let o_policy: Policy = args.o_policy.parse()?;
    let first_player: Player = args.first.parse()?;

    let mut x_agent = MoveSelector::new(x_policy)
        .with_name(format!("{x_policy} (X)"))
        .with_optimal_probability(args.optimal_probability)?;
    let mut o_agent = MoveSelector::new(o_policy)
        .with_name(format!("{o_policy} (O)"))
        .with_optimal_probability(args.optimal_probability)?;

    output::print_section("Arena Configuration");
    output::print_kv("X", &x_policy.to_string());
    output::print_kv("O", &o_policy.to_string());
    output::print_kv("First player", &first_player.to_string());
    output::print_kv("Games", &args.games.to_string());
    if let Some(seed) = args.seed {
        output::print_kv("Seed", &seed.to_string());
    }

    let config = MatchConfig {
        games: args.games,
        seed: args.seed,
        first_player,
    };

    let mut arena = Arena::new(config).with_observer(Box::new(MoveTraceObserver));
    if !args.no_progress {
        arena = arena.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = arena.run(&mut x_agent, &mut o_agent)?;

    output::print_section("Results");
    output::print_kv("Total games", &result.total_games.to_string());
    output::print_kv(
        "X wins",
        &format!("{} ({:.1}%)", result.x_wins, result.x_win_rate * 100.0),
    );
    output::print_kv(
        "O wins",
        &format!("{} ({:.1}%)", result.o_wins, result.o_win_rate * 100.0),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}

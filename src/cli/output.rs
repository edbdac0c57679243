//! Terminal formatting helpers

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    app::TimerBand,
    tictactoe::{Board, Cell},
};

/// Create a spinner for a long-running search
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the grid with 1-based numbers on empty cells
pub fn format_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => (row * 3 + col + 1).to_string(),
                    other => other.to_char().to_string(),
                })
                .map(|label| format!(" {label} "))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Text gauge of the remaining turn time
pub fn timer_bar(fraction: f64, band: TimerBand) -> String {
    const WIDTH: usize = 20;
    let filled = (fraction.clamp(0.0, 1.0) * WIDTH as f64).round() as usize;
    let label = match band {
        TimerBand::Green => "ok",
        TimerBand::Gold => "hurry",
        TimerBand::Red => "last seconds",
    };
    format!(
        "[{}{}] {label}",
        "#".repeat(filled),
        "-".repeat(WIDTH - filled)
    )
}

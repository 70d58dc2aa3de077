//! Command-line interface for strictly_gomoku.

use crate::games::gomoku::Difficulty;
use clap::Parser;
use std::path::PathBuf;

/// Strictly Gomoku - five in a row against a tiered AI
#[derive(Parser, Debug)]
#[command(name = "strictly_gomoku")]
#[command(about = "Play five-in-a-row against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Starting difficulty (easy, medium, hard)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the AI random source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds the AI waits before answering
    #[arg(long)]
    pub think_delay_ms: Option<u64>,

    /// File that receives log output
    #[arg(long, default_value = "strictly_gomoku.log")]
    pub log_file: PathBuf,
}

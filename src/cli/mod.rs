//! CLI interface for kelly-sizer
//!
//! Provides subcommands for:
//! - `recommend`: Size a position from trade statistics
//! - `project`: Per-trade return needed between two balances
//! - `solve`: Fixed-fractional risk needed for a growth target
//! - `profiles`: List risk profiles
//! - `config`: Show configuration

mod project;
mod recommend;
mod solve;

pub use project::ProjectArgs;
pub use recommend::RecommendArgs;
pub use solve::SolveArgs;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "kelly-sizer")]
#[command(about = "Position sizing and growth projection for discretionary traders")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend risk per trade from win rate and average win/loss
    Recommend(RecommendArgs),
    /// Project the per-trade return between two balances
    Project(ProjectArgs),
    /// Solve for the fixed fraction that reaches a growth target
    Solve(SolveArgs),
    /// List risk profiles
    Profiles,
    /// Show configuration
    Config,
}

/// Output format for calculation commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Print a value as pretty JSON
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print validation messages under a table
pub(crate) fn print_messages(errors: &[String], warnings: &[String]) {
    for error in errors {
        println!("ERROR:   {}", error);
    }
    for warning in warnings {
        println!("WARNING: {}", warning);
    }
}

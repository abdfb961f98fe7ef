//! Solve command implementation

use clap::Args;

use super::{print_json, OutputFormat};
use crate::config::Config;
use crate::growth::{FixedFractionalQuery, FixedFractionalSolver};

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Target capital ratio (final / starting balance)
    #[arg(long)]
    pub target_ratio: f64,

    /// Win probability between 0 and 1
    #[arg(long)]
    pub win_rate: f64,

    /// Payoff ratio (average win / average loss)
    #[arg(long)]
    pub payoff: f64,

    /// Number of trades
    #[arg(long)]
    pub trades: u32,

    /// Upper bound of the searched fraction, overrides configuration
    #[arg(long)]
    pub max_fraction: Option<f64>,

    /// Bisection iteration cap, overrides configuration
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Convergence tolerance, overrides configuration
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Print the balance path for a starting balance of 1, up to `projection.max_trades` trades
    #[arg(long)]
    pub path: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl SolveArgs {
    fn solver(&self, config: &Config) -> FixedFractionalSolver {
        let mut solver = FixedFractionalSolver::from_config(&config.solver);
        if let Some(max_fraction) = self.max_fraction {
            solver = solver.with_max_fraction(max_fraction);
        }
        if let Some(max_iterations) = self.max_iterations {
            solver = solver.with_max_iterations(max_iterations);
        }
        if let Some(tolerance) = self.tolerance {
            solver = solver.with_tolerance(tolerance);
        }
        solver
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let query =
            FixedFractionalQuery::new(self.target_ratio, self.win_rate, self.payoff, self.trades);
        let outcome = self.solver(config).solve(&query);
        let max_trades = config.projection.max_trades;

        match (self.format, &outcome) {
            (OutputFormat::Json, Ok(solution)) => print_json(&serde_json::json!({
                "query": query,
                "solution": solution,
                "path": self.path.then(|| solution.equity_path(&query, 1.0, max_trades)),
            })),
            (OutputFormat::Json, Err(reason)) => print_json(&serde_json::json!({
                "query": query,
                "solution": null,
                "reason": reason.to_string(),
            })),
            (OutputFormat::Table, Ok(solution)) => {
                println!("Expectancy:         {:.4}", query.expectancy());
                println!("Risk per trade:     {:.4}%", solution.fraction_pct());
                println!("Achieved ratio:     {:.6}", solution.achieved_ratio);
                println!("Iterations:         {}", solution.iterations);
                println!("Convergence:        {:?}", solution.convergence);
                if self.path {
                    for (trade, balance) in solution.equity_path(&query, 1.0, max_trades).iter().enumerate() {
                        println!("{:>5}  {:.6}", trade, balance);
                    }
                }
                Ok(())
            }
            (OutputFormat::Table, Err(reason)) => {
                println!("No solution: {}", reason);
                Ok(())
            }
        }
    }
}

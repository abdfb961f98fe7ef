//! Fixed-fractional risk solver
//!
//! Finds the constant fraction f of capital risked per trade such that
//! `(1 + f * expectancy)^n` reaches a target capital ratio, where
//! `expectancy = p * b - (1 - p)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::SolverConfig;

/// One solve request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedFractionalQuery {
    /// Final balance / starting balance
    pub target_capital_ratio: f64,
    /// Win probability in [0, 1]
    pub win_rate: f64,
    /// Average win / average loss
    pub payoff_ratio: f64,
    pub num_trades: u32,
}

impl FixedFractionalQuery {
    pub fn new(target_capital_ratio: f64, win_rate: f64, payoff_ratio: f64, num_trades: u32) -> Self {
        Self {
            target_capital_ratio,
            win_rate,
            payoff_ratio,
            num_trades,
        }
    }

    /// Average per-trade edge in payoff-ratio units
    pub fn expectancy(&self) -> f64 {
        self.win_rate * self.payoff_ratio - (1.0 - self.win_rate)
    }

    /// Per-trade growth factor when risking `fraction`
    pub fn growth_factor(&self, fraction: f64) -> f64 {
        1.0 + fraction * self.expectancy()
    }

    /// Capital ratio reached after `num_trades` trades, `None` for a non-positive growth factor
    pub fn achieved_ratio(&self, fraction: f64) -> Option<f64> {
        let factor = self.growth_factor(fraction);
        if factor <= 0.0 {
            return None;
        }
        Some(factor.powf(f64::from(self.num_trades)))
    }
}

/// How closely a solution matched the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convergence {
    /// Within the configured tolerance during the search
    Strict,
    /// Iterations ran out; the final bracket midpoint is within the relaxed tolerance
    Relaxed,
}

/// A solved risk fraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedFractionalSolution {
    /// Fraction of capital risked per trade
    pub fraction: f64,
    /// Capital ratio produced by `fraction`
    pub achieved_ratio: f64,
    /// Bisection steps taken
    pub iterations: u32,
    pub convergence: Convergence,
}

impl FixedFractionalSolution {
    /// Risk per trade in percent
    pub fn fraction_pct(&self) -> f64 {
        self.fraction * 100.0
    }

    /// Balance after each trade when compounding the solved fraction,
    /// stopping after `max_trades` trades
    pub fn equity_path(
        &self,
        query: &FixedFractionalQuery,
        start_balance: f64,
        max_trades: u32,
    ) -> Vec<f64> {
        let factor = query.growth_factor(self.fraction);
        let trades = query.num_trades.min(max_trades);
        std::iter::successors(Some(start_balance), |balance| Some(balance * factor))
            .take(trades as usize + 1)
            .collect()
    }
}

/// Reasons no risk fraction satisfies a query
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NoSolution {
    /// Query parameters outside their domain
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    /// Growth is impossible with a non-negative fraction
    #[error("Expectancy {0:.4} is not positive, target growth is unreachable")]
    NonPositiveExpectancy(f64),
    /// The final bracket did not reach the target within the relaxed tolerance
    #[error("No fraction up to the search bound reaches the target (best {fraction:.6} gives {achieved_ratio:.6})")]
    DidNotConverge { fraction: f64, achieved_ratio: f64 },
}

/// Bisection solver for the fixed-fractional risk per trade
#[derive(Debug, Clone)]
pub struct FixedFractionalSolver {
    pub max_iterations: u32,
    pub tolerance: f64,
    pub max_fraction: f64,
    pub relaxed_tolerance_factor: f64,
}

impl FixedFractionalSolver {
    /// Create from SolverConfig
    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            max_fraction: config.max_fraction,
            relaxed_tolerance_factor: config.relaxed_tolerance_factor,
        }
    }

    /// Set the upper search bound
    pub fn with_max_fraction(mut self, max_fraction: f64) -> Self {
        self.max_fraction = max_fraction;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the strict tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Solve for the per-trade risk fraction
    pub fn solve(&self, query: &FixedFractionalQuery) -> Result<FixedFractionalSolution, NoSolution> {
        let target = query.target_capital_ratio;
        if !(target > 0.0) || target.is_infinite() {
            return Err(NoSolution::InvalidQuery(format!(
                "target capital ratio must be positive and finite (got {})",
                target
            )));
        }

        if target <= 1.0 {
            return Ok(FixedFractionalSolution {
                fraction: 0.0,
                achieved_ratio: 1.0,
                iterations: 0,
                convergence: Convergence::Strict,
            });
        }

        if !(query.win_rate > 0.0 && query.win_rate <= 1.0) {
            return Err(NoSolution::InvalidQuery(format!(
                "win rate must be in (0, 1] (got {})",
                query.win_rate
            )));
        }
        if !(query.payoff_ratio > 0.0) {
            return Err(NoSolution::InvalidQuery(format!(
                "payoff ratio must be positive (got {})",
                query.payoff_ratio
            )));
        }
        if query.num_trades == 0 {
            return Err(NoSolution::InvalidQuery(
                "number of trades must be positive".to_string(),
            ));
        }
        if !(self.max_fraction > 0.0) {
            return Err(NoSolution::InvalidQuery(format!(
                "search bound must be positive (got {})",
                self.max_fraction
            )));
        }

        let expectancy = query.expectancy();
        if expectancy <= 0.0 {
            debug!(expectancy, target, "fixed-fractional target unreachable");
            return Err(NoSolution::NonPositiveExpectancy(expectancy));
        }

        let mut low = 0.0_f64;
        let mut high = self.max_fraction;

        for iteration in 1..=self.max_iterations {
            let mid = (low + high) / 2.0;

            // Too aggressive: shrink instead of raising a non-positive base
            let Some(achieved) = query.achieved_ratio(mid) else {
                high = mid;
                continue;
            };

            if (achieved - target).abs() <= self.tolerance {
                debug!(
                    fraction = mid,
                    iterations = iteration,
                    "fixed-fractional solve converged"
                );
                return Ok(FixedFractionalSolution {
                    fraction: mid,
                    achieved_ratio: achieved,
                    iterations: iteration,
                    convergence: Convergence::Strict,
                });
            }

            if achieved < target {
                low = mid;
            } else {
                high = mid;
            }
        }

        let fraction = (low + high) / 2.0;
        // Unreachable with positive expectancy and bound; a non-positive base never converges
        let achieved = query.achieved_ratio(fraction).unwrap_or(0.0);

        let relaxed = self.tolerance * self.relaxed_tolerance_factor;
        if (achieved - target).abs() <= relaxed {
            warn!(
                fraction,
                achieved,
                target,
                iterations = self.max_iterations,
                "fixed-fractional solve accepted at relaxed tolerance"
            );
            Ok(FixedFractionalSolution {
                fraction,
                achieved_ratio: achieved,
                iterations: self.max_iterations,
                convergence: Convergence::Relaxed,
            })
        } else {
            warn!(fraction, achieved, target, "fixed-fractional solve found no solution");
            Err(NoSolution::DidNotConverge {
                fraction,
                achieved_ratio: achieved,
            })
        }
    }
}

impl Default for FixedFractionalSolver {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}

/// Risk fraction for a query with default solver settings.
///
/// Accepts strict and relaxed solutions; `None` means no fraction reaches the target.
pub fn solve_fixed_fractional_f(query: &FixedFractionalQuery) -> Option<f64> {
    FixedFractionalSolver::default()
        .solve(query)
        .ok()
        .map(|solution| solution.fraction)
}

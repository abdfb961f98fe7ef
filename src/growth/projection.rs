//! Compound growth projection
//!
//! Inverts `final = initial * (1 + r)^n` for the per-trade return r and checks
//! the answer by compounding it forward again.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ProjectionConfig;

/// Starting and ending capital over a number of trades
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjectionInput {
    pub initial_value: f64,
    pub final_value: f64,
    pub number_of_trades: u32,
    pub time_horizon_years: Option<f64>,
}

impl GrowthProjectionInput {
    pub fn new(initial_value: f64, final_value: f64, number_of_trades: u32) -> Self {
        Self {
            initial_value,
            final_value,
            number_of_trades,
            time_horizon_years: None,
        }
    }

    /// Attach a time horizon for annualization
    pub fn with_time_horizon(mut self, years: f64) -> Self {
        self.time_horizon_years = Some(years);
        self
    }
}

/// Derived per-trade return and its checks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjectionResult {
    /// Per-trade return as a decimal (0.01 = 1%)
    pub per_trade_return: f64,
    pub per_trade_return_percent: f64,
    pub total_return_percent: f64,
    /// Annualized return as a decimal, when a time horizon was given
    pub annualized_return: Option<f64>,
    /// `initial * (1 + per_trade_return)^n`, should reproduce the final value
    pub compounded_value: f64,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Closed-form solver for per-trade compound returns
#[derive(Debug, Clone, Default)]
pub struct GrowthProjector {
    config: ProjectionConfig,
}

impl GrowthProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project the per-trade return that turns `initial_value` into `final_value`
    pub fn project(&self, input: &GrowthProjectionInput) -> GrowthProjectionResult {
        let errors = self.check_input(input);
        if !errors.is_empty() {
            return GrowthProjectionResult {
                is_valid: false,
                errors,
                ..GrowthProjectionResult::default()
            };
        }

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let trades = f64::from(input.number_of_trades);
        let growth_ratio = input.final_value / input.initial_value;
        let per_trade_return = growth_ratio.powf(1.0 / trades) - 1.0;
        let total_return_percent = (growth_ratio - 1.0) * 100.0;

        let compounded_value =
            input.initial_value * (1.0 + per_trade_return).powf(trades);
        let relative_error = (compounded_value - input.final_value).abs() / input.final_value;
        if !(relative_error <= self.config.accuracy_tolerance) {
            warnings.push(format!(
                "Verification failed: compounding the per-trade return gives {:.6}, expected {:.6} ({:.6}% error)",
                compounded_value,
                input.final_value,
                relative_error * 100.0
            ));
        }

        let annualized_return = input
            .time_horizon_years
            .map(|years| growth_ratio.powf(1.0 / years) - 1.0);

        if total_return_percent < self.config.min_total_return_pct
            || total_return_percent > self.config.max_total_return_pct
        {
            errors.push(format!(
                "Total return {:.2}% is outside the allowed range of {}% to {}%",
                total_return_percent,
                self.config.min_total_return_pct,
                self.config.max_total_return_pct
            ));
        }

        let per_trade_magnitude = per_trade_return.abs();
        if per_trade_magnitude > 0.10 {
            warnings.push(format!(
                "Per-trade return of {:.4}% is very large, verify it is realistic",
                per_trade_return * 100.0
            ));
        } else if per_trade_magnitude < 0.0001 {
            warnings.push(format!(
                "Per-trade return of {:.6}% is very small, check measurement precision",
                per_trade_return * 100.0
            ));
        }

        if input.number_of_trades > 100 {
            warnings.push(format!(
                "{} trades is a long sequence, consider transaction costs",
                input.number_of_trades
            ));
        }

        if let Some(years) = input.time_horizon_years {
            if years > 50.0 {
                warnings.push(format!(
                    "Time horizon of {} years makes the projection less reliable",
                    years
                ));
            }
        }

        if let Some(annualized) = annualized_return {
            if annualized.abs() > 0.30 {
                warnings.push(format!(
                    "Annualized return of {:.2}% is high, verify it is sustainable",
                    annualized * 100.0
                ));
            }
        }

        debug!(
            per_trade_return,
            total_return_percent,
            relative_error,
            "growth projection computed"
        );

        GrowthProjectionResult {
            per_trade_return,
            per_trade_return_percent: per_trade_return * 100.0,
            total_return_percent,
            annualized_return,
            compounded_value,
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Balance after each trade, starting with `initial_value`.
    ///
    /// Stops after `max_trades` trades.
    pub fn trajectory(
        &self,
        initial_value: f64,
        per_trade_return: f64,
        number_of_trades: u32,
    ) -> Vec<f64> {
        let trades = number_of_trades.min(self.config.max_trades);
        (0..=trades)
            .map(|trade| initial_value * (1.0 + per_trade_return).powf(f64::from(trade)))
            .collect()
    }

    fn check_input(&self, input: &GrowthProjectionInput) -> Vec<String> {
        let mut errors = Vec::new();

        let horizon_finite = input.time_horizon_years.map_or(true, f64::is_finite);
        if !input.initial_value.is_finite() || !input.final_value.is_finite() || !horizon_finite {
            errors.push("All values must be finite numbers".to_string());
            return errors;
        }

        if input.initial_value <= 0.0 {
            errors.push(format!(
                "Initial value must be positive (got {})",
                input.initial_value
            ));
        }
        if input.final_value <= 0.0 {
            errors.push(format!(
                "Final value must be positive (got {})",
                input.final_value
            ));
        }
        if input.number_of_trades < 1 || input.number_of_trades > self.config.max_trades {
            errors.push(format!(
                "Number of trades must be between 1 and {} (got {})",
                self.config.max_trades, input.number_of_trades
            ));
        }
        if let Some(years) = input.time_horizon_years {
            if years <= 0.0 {
                errors.push(format!("Time horizon must be positive (got {} years)", years));
            }
        }

        errors
    }
}

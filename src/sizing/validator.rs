//! Input validation for sizing requests
//!
//! Problems are reported, never raised: a request with errors is still sized
//! and the caller decides whether to use it.

use super::kelly::KellyCalculator;
use super::volatility::{EXTREME_VIX, HIGH_VIX};
use super::types::{
    PositionSizingInput, ValidationResult, MAX_RISK_PER_TRADE_PCT, MAX_WIN_RATE_PCT,
    MIN_WIN_RATE_PCT,
};
use crate::config::SizingConfig;
use crate::profile::RiskProfileCatalog;

/// Checks raw sizing inputs against safety rules
#[derive(Debug, Clone, Copy)]
pub struct InputValidator<'a> {
    catalog: &'a RiskProfileCatalog,
    config: &'a SizingConfig,
}

impl<'a> InputValidator<'a> {
    pub fn new(catalog: &'a RiskProfileCatalog, config: &'a SizingConfig) -> Self {
        Self { catalog, config }
    }

    /// Validate an input
    pub fn validate(&self, input: &PositionSizingInput) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let profile = self.catalog.get(input.risk_profile);

        if !(MIN_WIN_RATE_PCT..=MAX_WIN_RATE_PCT).contains(&input.win_rate) {
            errors.push(format!(
                "Win rate must be between {}% and {}% (got {})",
                MIN_WIN_RATE_PCT, MAX_WIN_RATE_PCT, input.win_rate
            ));
        }

        if input.account_balance < self.config.min_account_balance {
            errors.push(format!(
                "Account balance {} is below the minimum account size of {}",
                input.account_balance, self.config.min_account_balance
            ));
        }

        if !(input.avg_win > self.config.min_avg_trade) {
            errors.push(format!(
                "Average win must be greater than {} (got {})",
                self.config.min_avg_trade, input.avg_win
            ));
        }
        if !(input.avg_loss > self.config.min_avg_trade) {
            errors.push(format!(
                "Average loss must be greater than {} (got {})",
                self.config.min_avg_trade, input.avg_loss
            ));
        }

        if let Some(max_risk) = input.max_risk_per_trade_override {
            if !(max_risk <= MAX_RISK_PER_TRADE_PCT) {
                errors.push(format!(
                    "Max risk per trade cannot exceed {}% (got {}%)",
                    MAX_RISK_PER_TRADE_PCT, max_risk
                ));
            } else if max_risk < 0.0 {
                warnings.push(format!(
                    "Max risk per trade {}% is negative, position size will be 0%",
                    max_risk
                ));
            } else if max_risk > profile.risk_per_trade.max {
                warnings.push(format!(
                    "Max risk per trade {}% exceeds the {} profile maximum of {}%",
                    max_risk, profile.name, profile.risk_per_trade.max
                ));
            }
        }

        if let Some(vix) = input.current_vix {
            if vix > EXTREME_VIX {
                warnings.push(format!(
                    "Extreme volatility (VIX {}): position sizes heavily reduced",
                    vix
                ));
            } else if vix > HIGH_VIX {
                warnings.push(format!(
                    "High volatility (VIX {}): position sizes reduced",
                    vix
                ));
            }
        }

        if let Ok(full) = KellyCalculator::full_kelly(input.win_rate, input.avg_win, input.avg_loss)
        {
            if full <= 0.0 {
                warnings.push(format!(
                    "Unfavorable edge: full Kelly fraction is {:.4}, statistics do not support risking capital",
                    full
                ));
            }
        }

        ValidationResult::from_messages(errors, warnings)
    }
}

//! Position sizing types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::growth::Convergence;
use crate::profile::{RiskProfile, RiskProfileName};

/// Hard ceiling on any risk-per-trade percentage handed to a caller
pub const MAX_RISK_PER_TRADE_PCT: f64 = 5.0;
/// Lowest accepted win rate, percent
pub const MIN_WIN_RATE_PCT: f64 = 5.0;
/// Highest accepted win rate, percent
pub const MAX_WIN_RATE_PCT: f64 = 95.0;

/// Errors raised by direct calls that bypass input validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SizingError {
    /// Payoff ratio (avg win / avg loss) is zero, negative or not finite
    #[error("Invalid payoff ratio: {0}")]
    InvalidPayoffRatio(f64),
    /// Win probability outside [0, 1]
    #[error("Invalid win probability: {0}")]
    InvalidWinProbability(f64),
    /// Profile name not in the catalog
    #[error("Unknown risk profile: {0}")]
    UnknownProfile(String),
}

/// Trader statistics and account state for one sizing request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSizingInput {
    /// Account balance in currency units
    pub account_balance: Decimal,
    /// Historical win rate, percent
    pub win_rate: f64,
    /// Average winning trade, currency units
    pub avg_win: f64,
    /// Average losing trade as a positive amount
    pub avg_loss: f64,
    pub risk_profile: RiskProfileName,
    /// Current VIX reading
    pub current_vix: Option<f64>,
    /// Explicit cap on risk per trade, percent
    pub max_risk_per_trade_override: Option<f64>,
}

impl PositionSizingInput {
    pub fn new(
        account_balance: Decimal,
        win_rate: f64,
        avg_win: f64,
        avg_loss: f64,
        risk_profile: RiskProfileName,
    ) -> Self {
        Self {
            account_balance,
            win_rate,
            avg_win,
            avg_loss,
            risk_profile,
            current_vix: None,
            max_risk_per_trade_override: None,
        }
    }

    /// Attach a VIX reading
    pub fn with_vix(mut self, vix: f64) -> Self {
        self.current_vix = Some(vix);
        self
    }

    /// Attach an explicit risk-per-trade cap
    pub fn with_max_risk_override(mut self, pct: f64) -> Self {
        self.max_risk_per_trade_override = Some(pct);
        self
    }

    /// Average win divided by average loss
    pub fn payoff_ratio(&self) -> f64 {
        self.avg_win / self.avg_loss
    }
}

/// Outcome of validating a sizing input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Blocking problems, in rule order
    pub errors: Vec<String>,
    /// Advisory notes, in rule order
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn from_messages(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Sizing recommendation for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSizingResult {
    /// Unscaled full Kelly fraction; may be zero or negative
    pub kelly_fraction: f64,
    /// Profile-scaled Kelly fraction, within [0, 0.05]
    pub fractional_kelly: f64,
    /// Percent of balance to risk per trade
    pub recommended_position_size: f64,
    /// Recommended size after the VIX multiplier, percent
    pub vix_adjusted_size: f64,
    /// Largest size any caller may use, percent
    pub max_position_size: f64,
    /// Currency amount at risk for the VIX-adjusted size
    pub risk_amount: Decimal,
    pub validation: ValidationResult,
    pub risk_profile: RiskProfile,
    /// Model that produced the recommended size
    pub limiting_factor: SizeSource,
    /// Present when a growth target was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_advice: Option<GrowthAdvice>,
}

/// Risk model contributing a candidate size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeSource {
    /// Profile-scaled Kelly fraction
    Kelly,
    /// Profile default risk per trade
    ProfileDefault,
    /// Explicit override, or the profile maximum without one
    RiskLimit,
}

/// Capital growth goal used for advisory sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthTarget {
    /// Desired final balance / starting balance
    pub target_capital_ratio: f64,
    pub num_trades: u32,
}

/// Risk per trade needed to reach a growth target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthAdvice {
    pub target: GrowthTarget,
    /// Required risk per trade in percent, `None` when the target is unreachable
    pub required_risk_pct: Option<f64>,
    pub convergence: Option<Convergence>,
}

//! Position sizing module
//!
//! Validation, Kelly sizing, VIX scaling, and the combined recommendation

mod kelly;
mod recommender;
mod types;
mod validator;
mod volatility;

pub use kelly::{kelly_fraction, KellyCalculator};
pub use recommender::PositionSizeRecommender;
pub use types::{
    GrowthAdvice, GrowthTarget, PositionSizingInput, PositionSizingResult, SizeSource,
    SizingError, ValidationResult, MAX_RISK_PER_TRADE_PCT, MAX_WIN_RATE_PCT, MIN_WIN_RATE_PCT,
};
pub use validator::InputValidator;
pub use volatility::{vix_multiplier, ELEVATED_VIX, EXTREME_VIX, HIGH_VIX};

//! Kelly criterion position sizing
//!
//! For a trader with win probability p and payoff ratio b (avg win / avg loss):
//! f* = (p * (b + 1) - 1) / b

use super::types::{SizingError, MAX_RISK_PER_TRADE_PCT};
use crate::profile::RiskProfile;

/// Full Kelly fraction from a win probability in [0, 1] and a payoff ratio.
///
/// Returns `None` when the inputs cannot produce a Kelly fraction.
pub fn kelly_fraction(win_probability: f64, payoff_ratio: f64) -> Option<f64> {
    full_kelly(win_probability, payoff_ratio).ok()
}

fn full_kelly(p: f64, b: f64) -> Result<f64, SizingError> {
    if !(b.is_finite() && b > 0.0) {
        return Err(SizingError::InvalidPayoffRatio(b));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(SizingError::InvalidWinProbability(p));
    }
    Ok((p * (b + 1.0) - 1.0) / b)
}

/// Fractional Kelly calculator for trade statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KellyCalculator {
    /// Share of full Kelly to use (e.g., 0.25 for quarter Kelly)
    pub multiplier: f64,
    /// Maximum risk as a fraction of balance
    pub max_fraction: f64,
}

impl KellyCalculator {
    /// Create a new Kelly calculator
    pub fn new(multiplier: f64, max_fraction: f64) -> Self {
        Self {
            multiplier,
            max_fraction,
        }
    }

    /// Calculator using a profile's Kelly multiplier and the global ceiling
    pub fn for_profile(profile: &RiskProfile) -> Self {
        Self::new(
            profile.kelly_fraction_multiplier,
            MAX_RISK_PER_TRADE_PCT / 100.0,
        )
    }

    /// Unscaled, uncapped Kelly fraction. Negative when the edge is unfavorable.
    ///
    /// `win_rate` is a percentage.
    pub fn full_kelly(win_rate: f64, avg_win: f64, avg_loss: f64) -> Result<f64, SizingError> {
        if !(avg_loss > 0.0) {
            return Err(SizingError::InvalidPayoffRatio(avg_win / avg_loss));
        }
        full_kelly(win_rate / 100.0, avg_win / avg_loss)
    }

    /// Scaled Kelly fraction, clamped to `[0, max_fraction]`
    pub fn kelly(&self, win_rate: f64, avg_win: f64, avg_loss: f64) -> Result<f64, SizingError> {
        let full = Self::full_kelly(win_rate, avg_win, avg_loss)?;
        Ok(self.scale(full))
    }

    /// Apply the multiplier and clamp a full Kelly fraction
    pub fn scale(&self, full_kelly: f64) -> f64 {
        (full_kelly * self.multiplier).min(self.max_fraction).max(0.0)
    }
}

impl Default for KellyCalculator {
    fn default() -> Self {
        Self::new(0.25, MAX_RISK_PER_TRADE_PCT / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_full_kelly_calculation() {
        // p = 0.55, b = 1.5 -> (0.55 * 2.5 - 1) / 1.5 = 0.25
        let full = KellyCalculator::full_kelly(55.0, 150.0, 100.0).unwrap();
        assert!(approx(full, 0.25));
    }

    #[test]
    fn test_even_money_kelly() {
        // b = 1 -> f* = 2p - 1
        assert!(approx(kelly_fraction(0.6, 1.0).unwrap(), 0.2));
        assert!(approx(kelly_fraction(0.5, 1.0).unwrap(), 0.0));
    }

    #[test]
    fn test_full_kelly_negative_edge_is_uncapped() {
        let full = KellyCalculator::full_kelly(30.0, 100.0, 100.0).unwrap();
        assert!(approx(full, -0.4));
    }

    #[test]
    fn test_fractional_kelly_under_cap() {
        // 0.25 full Kelly * 0.1 = 0.025
        let calc = KellyCalculator::new(0.1, 0.05);
        let f = calc.kelly(55.0, 150.0, 100.0).unwrap();
        assert!(approx(f, 0.025));
    }

    #[test]
    fn test_fractional_kelly_capped_at_ceiling() {
        // 0.25 * 0.35 = 0.0875, capped at 5%
        let calc = KellyCalculator::new(0.35, 0.05);
        let f = calc.kelly(55.0, 150.0, 100.0).unwrap();
        assert_eq!(f, 0.05);
    }

    #[test]
    fn test_fractional_kelly_never_negative() {
        let calc = KellyCalculator::default();
        let f = calc.kelly(20.0, 100.0, 100.0).unwrap();
        assert_eq!(f, 0.0);
    }

    #[test]
    fn test_zero_payoff_is_error() {
        assert_eq!(
            KellyCalculator::full_kelly(55.0, 0.0, 100.0),
            Err(SizingError::InvalidPayoffRatio(0.0))
        );
        assert!(kelly_fraction(0.55, 0.0).is_none());
    }

    #[test]
    fn test_zero_avg_loss_is_error() {
        let result = KellyCalculator::full_kelly(55.0, 150.0, 0.0);
        assert!(matches!(result, Err(SizingError::InvalidPayoffRatio(_))));
    }

    #[test]
    fn test_win_probability_out_of_range() {
        assert!(kelly_fraction(1.2, 1.5).is_none());
        assert!(kelly_fraction(-0.1, 1.5).is_none());
        assert!(kelly_fraction(f64::NAN, 1.5).is_none());
    }

    #[test]
    fn test_for_profile_uses_multiplier() {
        let catalog = crate::profile::RiskProfileCatalog::standard();
        let calc = KellyCalculator::for_profile(
            catalog.get(crate::profile::RiskProfileName::Conservative),
        );
        assert_eq!(calc.multiplier, 0.25);
        assert_eq!(calc.max_fraction, 0.05);
    }
}

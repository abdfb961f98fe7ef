//! Position size recommendation
//!
//! Combines the Kelly, profile and risk-limit sizes by taking the smallest,
//! so no single model can push the recommendation past what another allows.
//! Validation runs first but never stops the numbers from being computed.

use rust_decimal::Decimal;
use tracing::debug;

use super::kelly::KellyCalculator;
use super::types::{
    GrowthAdvice, GrowthTarget, PositionSizingInput, PositionSizingResult, SizeSource,
    MAX_RISK_PER_TRADE_PCT,
};
use super::validator::InputValidator;
use super::volatility::vix_multiplier;
use crate::config::SizingConfig;
use crate::growth::{FixedFractionalQuery, FixedFractionalSolver};
use crate::profile::{RiskProfile, RiskProfileCatalog};

/// Produces sizing recommendations from trader statistics
#[derive(Debug, Clone, Default)]
pub struct PositionSizeRecommender {
    catalog: RiskProfileCatalog,
    config: SizingConfig,
}

impl PositionSizeRecommender {
    pub fn new(catalog: RiskProfileCatalog, config: SizingConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &RiskProfileCatalog {
        &self.catalog
    }

    pub fn validator(&self) -> InputValidator<'_> {
        InputValidator::new(&self.catalog, &self.config)
    }

    /// Size a position for the given input
    pub fn recommend(&self, input: &PositionSizingInput) -> PositionSizingResult {
        let validation = self.validator().validate(input);
        let profile = self.catalog.get(input.risk_profile);
        let calculator = KellyCalculator::for_profile(profile);

        // Invalid averages are already reported by validation
        let kelly_fraction =
            KellyCalculator::full_kelly(input.win_rate, input.avg_win, input.avg_loss)
                .unwrap_or(0.0);
        let fractional_kelly = calculator.scale(kelly_fraction);

        let max_position_size = input
            .max_risk_per_trade_override
            .map_or(MAX_RISK_PER_TRADE_PCT, clamp_pct);

        let (limiting_factor, recommended_position_size) =
            smallest_candidate(&size_candidates(input, profile, fractional_kelly));

        let vix_adjusted_size = match input.current_vix {
            Some(vix) => recommended_position_size * vix_multiplier(vix),
            None => recommended_position_size,
        };

        let risk_amount = (input.account_balance
            * Decimal::try_from(vix_adjusted_size / 100.0).unwrap_or(Decimal::ZERO))
        .round_dp(2);

        debug!(
            profile = %profile.name,
            kelly_fraction,
            recommended_position_size,
            vix_adjusted_size,
            limiting = ?limiting_factor,
            is_valid = validation.is_valid,
            "position size recommended"
        );

        PositionSizingResult {
            kelly_fraction,
            fractional_kelly,
            recommended_position_size,
            vix_adjusted_size,
            max_position_size,
            risk_amount,
            validation,
            risk_profile: profile.clone(),
            limiting_factor,
            growth_advice: None,
        }
    }

    /// Size a position and report the risk needed to reach a growth target.
    ///
    /// The advice never changes the recommended size.
    pub fn recommend_with_target(
        &self,
        input: &PositionSizingInput,
        target: &GrowthTarget,
        solver: &FixedFractionalSolver,
    ) -> PositionSizingResult {
        let mut result = self.recommend(input);

        let query = FixedFractionalQuery::new(
            target.target_capital_ratio,
            input.win_rate / 100.0,
            input.payoff_ratio(),
            target.num_trades,
        );

        let advice = match solver.solve(&query) {
            Ok(solution) => {
                let required = solution.fraction_pct();
                if required > result.recommended_position_size {
                    result.validation.warnings.push(format!(
                        "Reaching {}x in {} trades needs {:.2}% risk per trade, above the recommended {:.2}%",
                        target.target_capital_ratio,
                        target.num_trades,
                        required,
                        result.recommended_position_size
                    ));
                }
                GrowthAdvice {
                    target: *target,
                    required_risk_pct: Some(required),
                    convergence: Some(solution.convergence),
                }
            }
            Err(reason) => {
                result.validation.warnings.push(format!(
                    "Growth target of {}x in {} trades is not reachable: {}",
                    target.target_capital_ratio, target.num_trades, reason
                ));
                GrowthAdvice {
                    target: *target,
                    required_risk_pct: None,
                    convergence: None,
                }
            }
        };

        result.growth_advice = Some(advice);
        result
    }
}

/// Candidate sizes in percent, one per risk model
fn size_candidates(
    input: &PositionSizingInput,
    profile: &RiskProfile,
    fractional_kelly: f64,
) -> [(SizeSource, f64); 3] {
    let risk_limit = input
        .max_risk_per_trade_override
        .map_or(profile.risk_per_trade.max, clamp_pct);

    [
        (SizeSource::Kelly, fractional_kelly * 100.0),
        (SizeSource::ProfileDefault, profile.risk_per_trade.default),
        (SizeSource::RiskLimit, risk_limit),
    ]
}

/// First candidate with the smallest size; ties keep the earlier model
fn smallest_candidate(candidates: &[(SizeSource, f64)]) -> (SizeSource, f64) {
    candidates
        .iter()
        .copied()
        .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
        .unwrap_or((SizeSource::RiskLimit, 0.0))
}

fn clamp_pct(pct: f64) -> f64 {
    pct.min(MAX_RISK_PER_TRADE_PCT).max(0.0)
}

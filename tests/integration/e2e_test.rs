//! End-to-end integration tests for position sizing

use kelly_sizer::config::Config;
use kelly_sizer::profile::{RiskProfileCatalog, RiskProfileName};
use kelly_sizer::sizing::{
    PositionSizeRecommender, PositionSizingInput, SizeSource, MAX_RISK_PER_TRADE_PCT,
};
use rust_decimal_macros::dec;

fn recommender(config: &Config) -> PositionSizeRecommender {
    PositionSizeRecommender::new(RiskProfileCatalog::standard(), config.sizing.clone())
}

#[test]
fn test_example_config_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    let defaults = Config::default();
    assert_eq!(config.sizing.min_account_balance, defaults.sizing.min_account_balance);
    assert_eq!(config.solver.max_iterations, defaults.solver.max_iterations);
    assert_eq!(config.solver.tolerance, defaults.solver.tolerance);
    assert_eq!(config.projection.max_total_return_pct, defaults.projection.max_total_return_pct);
}

#[test]
fn test_moderate_trader_with_vix() {
    let config = Config::default();
    let input = PositionSizingInput::new(dec!(10000), 55.0, 150.0, 100.0, RiskProfileName::Moderate)
        .with_vix(20.0);

    let result = recommender(&config).recommend(&input);

    assert!(result.validation.is_valid);
    assert!((result.kelly_fraction - 0.25).abs() < 1e-9);
    assert_eq!(result.recommended_position_size, 1.5);
    assert_eq!(result.limiting_factor, SizeSource::ProfileDefault);
    assert_eq!(result.vix_adjusted_size, 1.125);
    assert_eq!(result.risk_amount, dec!(112.50));
}

#[test]
fn test_small_account_is_flagged_but_sized() {
    let config = Config::default();
    let input = PositionSizingInput::new(dec!(1500), 55.0, 150.0, 100.0, RiskProfileName::Moderate);

    let result = recommender(&config).recommend(&input);

    assert!(!result.validation.is_valid);
    assert!(result
        .validation
        .errors
        .iter()
        .any(|e| e.contains("minimum account size")));
    assert!(result.recommended_position_size > 0.0);
    assert!(result.risk_amount > dec!(0));
}

#[test]
fn test_size_invariants_hold_across_inputs() {
    let config = Config::default();
    let recommender = recommender(&config);

    for profile in RiskProfileName::ALL {
        for win_rate in [5.0, 20.0, 35.0, 50.0, 65.0, 80.0, 95.0] {
            for (avg_win, avg_loss) in [(50.0, 100.0), (100.0, 100.0), (300.0, 100.0), (1000.0, 50.0)] {
                for vix in [None, Some(10.0), Some(15.0), Some(30.0), Some(60.0)] {
                    for max_risk in [None, Some(0.5), Some(2.5), Some(5.0)] {
                        let mut input =
                            PositionSizingInput::new(dec!(25000), win_rate, avg_win, avg_loss, profile);
                        input.current_vix = vix;
                        input.max_risk_per_trade_override = max_risk;

                        let result = recommender.recommend(&input);
                        assert!(result.validation.is_valid, "{:?}", result.validation);
                        assert!(result.fractional_kelly >= 0.0);
                        assert!(result.fractional_kelly <= 0.05);
                        assert!(result.recommended_position_size <= result.max_position_size);
                        assert!(result.max_position_size <= MAX_RISK_PER_TRADE_PCT);
                        assert!(result.vix_adjusted_size <= result.recommended_position_size);
                        assert!(result.recommended_position_size <= result.fractional_kelly * 100.0);
                        assert!(
                            result.recommended_position_size
                                <= result.risk_profile.risk_per_trade.default
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_recommend_is_idempotent() {
    let config = Config::default();
    let recommender = recommender(&config);
    let input = PositionSizingInput::new(dec!(42000), 61.5, 120.0, 80.0, RiskProfileName::Aggressive)
        .with_vix(31.2)
        .with_max_risk_override(4.0);

    let first = recommender.recommend(&input);
    let second = recommender.recommend(&input);

    assert_eq!(first, second);
    assert_eq!(
        first.recommended_position_size.to_bits(),
        second.recommended_position_size.to_bits()
    );
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_win_rate_boundaries() {
    let config = Config::default();
    let recommender = recommender(&config);
    let check = |win_rate: f64| {
        let input =
            PositionSizingInput::new(dec!(10000), win_rate, 150.0, 100.0, RiskProfileName::Moderate);
        recommender.recommend(&input).validation.is_valid
    };

    assert!(check(5.0));
    assert!(check(95.0));
    assert!(!check(4.999));
    assert!(!check(95.001));
}

#[test]
fn test_result_serializes_to_json() {
    let config = Config::default();
    let input = PositionSizingInput::new(dec!(10000), 55.0, 150.0, 100.0, RiskProfileName::Conservative);
    let result = recommender(&config).recommend(&input);

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["risk_profile"]["name"], "conservative");
    assert_eq!(json["limiting_factor"], "profile_default");
    assert!(json.get("growth_advice").is_none());
}

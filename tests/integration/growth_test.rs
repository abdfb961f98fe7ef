//! Integration tests for growth solving and projection

use kelly_sizer::config::{Config, ProjectionConfig, SolverConfig};
use kelly_sizer::growth::{
    solve_fixed_fractional_f, Convergence, FixedFractionalQuery, FixedFractionalSolver,
    GrowthProjectionInput, GrowthProjector, NoSolution,
};

#[test]
fn test_solver_reaches_growth_target() {
    let query = FixedFractionalQuery::new(1.2, 0.5, 1.5, 50);
    let solver = FixedFractionalSolver::from_config(&SolverConfig::default());

    let solution = solver.solve(&query).unwrap();
    assert_eq!(solution.convergence, Convergence::Strict);
    assert!(solution.fraction > 0.0 && solution.fraction < 0.5);

    let mut balance = 1.0;
    for _ in 0..50 {
        balance *= 1.0 + solution.fraction * query.expectancy();
    }
    assert!((balance - 1.2).abs() < 1e-5);
}

#[test]
fn test_negative_expectancy_has_no_solution() {
    let query = FixedFractionalQuery::new(2.0, 0.3, 1.0, 10);
    assert_eq!(solve_fixed_fractional_f(&query), None);
    assert!(matches!(
        FixedFractionalSolver::default().solve(&query),
        Err(NoSolution::NonPositiveExpectancy(_))
    ));
}

#[test]
fn test_no_solution_is_distinct_from_zero() {
    let flat = FixedFractionalQuery::new(1.0, 0.3, 1.0, 10);
    let impossible = FixedFractionalQuery::new(1.5, 0.3, 1.0, 10);
    assert_eq!(solve_fixed_fractional_f(&flat), Some(0.0));
    assert_eq!(solve_fixed_fractional_f(&impossible), None);
}

#[test]
fn test_solver_always_terminates() {
    let solver = FixedFractionalSolver::default();
    for target in [1.01, 1.5, 3.0, 50.0, 1e6] {
        for win_rate in [0.05, 0.35, 0.5, 0.9, 1.0] {
            for payoff in [0.1, 1.0, 3.0] {
                for trades in [1, 10, 200] {
                    let query = FixedFractionalQuery::new(target, win_rate, payoff, trades);
                    if let Ok(solution) = solver.solve(&query) {
                        assert!(solution.fraction >= 0.0 && solution.fraction <= 0.5);
                        assert!(solution.iterations <= 100);
                        assert!(solution.achieved_ratio.is_finite());
                    }
                }
            }
        }
    }
}

#[test]
fn test_projection_round_trip() {
    let projector = GrowthProjector::new(ProjectionConfig::default());
    let result = projector.project(&GrowthProjectionInput::new(1000.0, 1056.25, 27));

    assert!(result.is_valid);
    assert!((result.per_trade_return_percent - 0.2029).abs() < 0.0001);
    let recomputed = 1000.0 * (1.0 + result.per_trade_return).powi(27);
    assert!((recomputed - 1056.25).abs() / 1056.25 <= 0.0001);
}

#[test]
fn test_projection_band_from_config_file() {
    let config: Config = toml::from_str(
        r#"
        [projection]
        min_total_return_pct = -10.0
        max_total_return_pct = 20.0
        "#,
    )
    .unwrap();
    let projector = GrowthProjector::new(config.projection);

    assert!(projector.project(&GrowthProjectionInput::new(1000.0, 1150.0, 10)).is_valid);
    assert!(!projector.project(&GrowthProjectionInput::new(1000.0, 1300.0, 10)).is_valid);
    assert!(!projector.project(&GrowthProjectionInput::new(1000.0, 850.0, 10)).is_valid);
}

#[test]
fn test_solved_fraction_matches_projection() {
    // The per-trade growth implied by the solved fraction equals the
    // projected per-trade return for the same capital ratio
    let query = FixedFractionalQuery::new(1.5, 0.6, 1.2, 30);
    let solution = FixedFractionalSolver::default().solve(&query).unwrap();
    let projection =
        GrowthProjector::default().project(&GrowthProjectionInput::new(1000.0, 1500.0, 30));

    let solved_return = solution.fraction * query.expectancy();
    assert!((solved_return - projection.per_trade_return).abs() < 1e-7);
}

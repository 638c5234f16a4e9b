//! Round-trip calibration: price an option at a known volatility, then
//! recover that volatility from the price.

use optpricer::analytical::BlackScholes;
use optpricer::implied_vol::{
    ConvergenceError, ImpliedVolError, ImpliedVolSolver, SolveMethod, SolverConfig,
};
use optpricer::types::{MarketInputs, OptionType};

#[test]
fn roundtrip_across_strike_expiry_vol_grid() {
    let solver = ImpliedVolSolver::with_defaults();

    for option_type in [OptionType::Call, OptionType::Put] {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            for expiry in [0.25, 1.0, 2.0] {
                for volatility in [0.1, 0.2, 0.4] {
                    let inputs =
                        MarketInputs::new(100.0, strike, expiry, 0.05, volatility, option_type)
                            .unwrap();
                    let price = BlackScholes::new(inputs).unwrap().price();
                    if price < 1e-10 {
                        // Price too close to zero to carry volatility
                        // information at solver tolerance.
                        continue;
                    }

                    let result = solver.solve(&inputs, price).unwrap();
                    assert!(
                        (result.volatility - volatility).abs() < 1e-4,
                        "{option_type} K={strike} T={expiry} sigma={volatility}: \
                         recovered {} via {}",
                        result.volatility,
                        result.method
                    );
                }
            }
        }
    }
}

#[test]
fn roundtrip_with_dividend_yield() {
    let solver = ImpliedVolSolver::with_defaults();
    let inputs = MarketInputs::new(100.0, 95.0, 1.0, 0.05, 0.3, OptionType::Call)
        .unwrap()
        .with_dividend_yield(0.02)
        .unwrap();
    let price = BlackScholes::new(inputs).unwrap().price();

    let result = solver.solve(&inputs, price).unwrap();
    assert!((result.volatility - 0.3).abs() < 1e-4);
}

#[test]
fn atm_quote_converges_via_newton() {
    let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    let price = BlackScholes::new(inputs).unwrap().price();

    let result = ImpliedVolSolver::with_defaults()
        .solve(&inputs, price)
        .unwrap();
    assert_eq!(result.method, SolveMethod::Newton);
    assert!(result.iterations < 10, "iterations = {}", result.iterations);
}

#[test]
fn flat_vega_quote_converges_via_bisection() {
    // Short-dated, far out of the money: vega is negligible around the
    // starting guess, so Newton hands off to bisection.
    let inputs = MarketInputs::new(100.0, 300.0, 0.1, 0.05, 0.2, OptionType::Call).unwrap();
    let price = BlackScholes::new(MarketInputs {
        volatility: 0.9,
        ..inputs
    })
    .unwrap()
    .price();

    let result = ImpliedVolSolver::with_defaults()
        .solve(&inputs, price)
        .unwrap();
    assert_eq!(result.method, SolveMethod::Bisection);
    assert!((result.volatility - 0.9).abs() < 1e-4);
}

#[test]
fn unattainable_quote_reports_invalid_bracket() {
    let inputs = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    let err = ImpliedVolSolver::with_defaults()
        .solve(&inputs, 150.0)
        .unwrap_err();

    match err {
        ImpliedVolError::Convergence(ConvergenceError::BracketInvalid { f_lo, f_hi, .. }) => {
            assert!(f_lo < 0.0 && f_hi < 0.0);
        }
        other => panic!("expected BracketInvalid, got {other}"),
    }
}

#[test]
fn quote_below_intrinsic_reports_invalid_bracket() {
    // Deep ITM call: even at the lowest volatility the model price
    // stays above a quote below intrinsic value.
    let inputs = MarketInputs::new(100.0, 50.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    let err = ImpliedVolSolver::with_defaults()
        .solve(&inputs, 10.0)
        .unwrap_err();
    assert!(matches!(
        err,
        ImpliedVolError::Convergence(ConvergenceError::BracketInvalid { .. })
    ));
}

#[test]
fn solver_config_errors_surface() {
    assert!(SolverConfig::new(-1.0, 100).is_err());
    assert!(SolverConfig::new(1e-8, 0).is_err());
    assert!(ImpliedVolSolver::new(SolverConfig::default(), (0.5, 0.1)).is_err());
    assert!(ImpliedVolSolver::new(SolverConfig::default(), (0.0, 1.0)).is_err());
}

#[test]
fn invalid_inputs_surface_as_domain_errors() {
    let solver = ImpliedVolSolver::with_defaults();
    let bad = MarketInputs {
        spot: -100.0,
        ..MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
    };
    assert!(matches!(
        solver.solve(&bad, 10.0).unwrap_err(),
        ImpliedVolError::Domain(_)
    ));
}

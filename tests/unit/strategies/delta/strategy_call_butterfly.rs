use approx::assert_relative_eq;
use zerodte_engine::greeks::equations::Greeks;
use zerodte_engine::model::types::PositiveF64;
use zerodte_engine::model::types::{ExpirationDate, OptionStyle};
use zerodte_engine::pos;
use zerodte_engine::strategies::call_butterfly::CallButterfly;
use zerodte_engine::strategies::delta_neutral::DeltaAdjustment::SellOptions;
use zerodte_engine::strategies::delta_neutral::DeltaNeutrality;
use zerodte_engine::utils::logger::setup_logger;
use std::error::Error;

#[test]
fn test_call_butterfly_integration() -> Result<(), Box<dyn Error>> {
    setup_logger();

    // Define inputs for the CallButterfly strategy
    let underlying_price = pos!(5781.88);

    let strategy = CallButterfly::new(
        "SP500".to_string(),
        underlying_price, // underlying_price
        pos!(5750.0),     // long_call_strike
        pos!(5800.0),     // short_call_low_strike
        pos!(5850.0),     // short_call_high_strike
        ExpirationDate::Days(2.0),
        0.18,      // implied_volatility
        0.05,      // risk_free_rate
        0.0,       // dividend_yield
        pos!(1.0), // long quantity
        85.04,     // premium_long_itm
        53.04,     // premium_long_otm
        28.85,     // premium_short
        0.78,      // premium_short
        0.78,      // open_fee_long
        0.78,      // close_fee_long
        0.73,      // close_fee_short
        0.73,      // close_fee_short
        0.73,      // open_fee_short
    );

    let greeks = strategy.greeks();

    assert_relative_eq!(greeks.delta, 0.0559, epsilon = 0.001);
    assert_relative_eq!(greeks.gamma, 0.0133, epsilon = 0.001);
    assert_relative_eq!(greeks.theta, -7606.7078, epsilon = 0.001);
    assert_relative_eq!(greeks.vega, 550.2891, epsilon = 0.001);
    assert_relative_eq!(greeks.rho, 40.2857, epsilon = 0.001);
    assert_relative_eq!(greeks.rho_d, -40.7342, epsilon = 0.001);

    assert_relative_eq!(
        strategy.calculate_net_delta().net_delta,
        0.0559,
        epsilon = 0.001
    );
    assert_relative_eq!(
        strategy.calculate_net_delta().individual_deltas[0],
        -0.4177,
        epsilon = 0.001
    );
    assert_relative_eq!(
        strategy.calculate_net_delta().individual_deltas[1],
        -0.1971,
        epsilon = 0.001
    );
    assert!(!strategy.is_delta_neutral());
    assert_eq!(strategy.suggest_delta_adjustments().len(), 2);

    assert_eq!(
        strategy.suggest_delta_adjustments()[0],
        SellOptions {
            quantity: pos!(0.13381901826077533),
            strike: pos!(5800.0),
            option_type: OptionStyle::Call
        }
    );

    Ok(())
}

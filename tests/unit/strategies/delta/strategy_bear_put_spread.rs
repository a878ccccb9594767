use approx::assert_relative_eq;
use zerodte_engine::greeks::equations::Greeks;
use zerodte_engine::model::types::PositiveF64;
use zerodte_engine::model::types::{ExpirationDate, OptionStyle};
use zerodte_engine::pos;
use zerodte_engine::strategies::bear_put_spread::BearPutSpread;
use zerodte_engine::strategies::delta_neutral::DeltaAdjustment::SellOptions;
use zerodte_engine::strategies::delta_neutral::DeltaNeutrality;
use zerodte_engine::utils::logger::setup_logger;
use std::error::Error;

#[test]
fn test_bear_put_spread_integration() -> Result<(), Box<dyn Error>> {
    setup_logger();

    // Define inputs for the BearPutSpread strategy
    let underlying_price = pos!(5781.88);

    let strategy = BearPutSpread::new(
        "SP500".to_string(),
        underlying_price, // underlying_price
        pos!(5850.0),     // long_strike
        pos!(5720.0),     // short_strike
        ExpirationDate::Days(2.0),
        0.18,      // implied_volatility
        0.05,      // risk_free_rate
        0.0,       // dividend_yield
        pos!(2.0), // long quantity
        85.04,     // premium_long
        29.85,     // premium_short
        0.78,      // open_fee_long
        0.78,      // open_fee_long
        0.73,      // close_fee_long
        0.73,      // close_fee_short
    );

    let greeks = strategy.greeks();

    assert_relative_eq!(greeks.delta, -1.2018, epsilon = 0.001);
    assert_relative_eq!(greeks.gamma, 0.0145, epsilon = 0.001);
    assert_relative_eq!(greeks.theta, -7271.7206, epsilon = 0.001);
    assert_relative_eq!(greeks.vega, 851.9072, epsilon = 0.001);
    assert_relative_eq!(greeks.rho, -64.5820, epsilon = 0.001);
    assert_relative_eq!(greeks.rho_d, 63.6651, epsilon = 0.001);

    assert_relative_eq!(
        strategy.calculate_net_delta().net_delta,
        -1.2018,
        epsilon = 0.001
    );
    assert_relative_eq!(
        strategy.calculate_net_delta().individual_deltas[0],
        -1.6056,
        epsilon = 0.001
    );
    assert_relative_eq!(
        strategy.calculate_net_delta().individual_deltas[1],
        0.4038,
        epsilon = 0.001
    );
    assert!(!strategy.is_delta_neutral());
    assert_eq!(strategy.suggest_delta_adjustments().len(), 1);

    assert_eq!(
        strategy.suggest_delta_adjustments()[0],
        SellOptions {
            quantity: pos!(5.952144261472911),
            strike: pos!(5720.0),
            option_type: OptionStyle::Put
        }
    );

    Ok(())
}

use approx::assert_relative_eq;
use num_traits::ToPrimitive;
use zerodte_engine::chains::chain::OptionChain;
use zerodte_engine::f2p;
use zerodte_engine::strategies::base::{Optimizable, Strategies};
use zerodte_engine::strategies::utils::FindOptimalSide;
use zerodte_engine::strategies::LongStrangle;
use zerodte_engine::utils::setup_logger;
use zerodte_engine::ExpirationDate;
use std::error::Error;

#[test]
fn test_long_strangle_integration() -> Result<(), Box<dyn Error>> {
    setup_logger();

    // Define inputs for the LongStrangle strategy
    let underlying_price = f2p!(7138.5);

    let mut strategy = LongStrangle::new(
        "CL".to_string(),
        underlying_price, // underlying_price
        f2p!(7450.0),     // call_strike
        f2p!(7050.0),     // put_strike
        ExpirationDate::Days(45.0),
        0.3745,    // implied_volatility
        0.05,      // risk_free_rate
        0.0,       // dividend_yield
        f2p!(1.0), // quantity
        84.2,      // premium_short_call
        353.2,     // premium_short_put
        7.0,       // open_fee_short_call
        7.01,      // close_fee_short_call
        7.01,      // open_fee_short_put
        7.01,      // close_fee_short_put
    );

    let option_chain =
        OptionChain::load_from_json("./examples/Chains/SP500-18-oct-2024-5781.88.json")?;
    strategy.best_area(&option_chain, FindOptimalSide::All);
    assert_relative_eq!(
        strategy.profit_area().unwrap().to_f64().unwrap(),
        0.2439,
        epsilon = 0.001
    );
    strategy.best_ratio(&option_chain, FindOptimalSide::Upper);
    assert_relative_eq!(
        strategy.profit_ratio().unwrap().to_f64().unwrap(),
        0.0518,
        epsilon = 0.001
    );

    Ok(())
}

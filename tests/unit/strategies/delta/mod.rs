/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/12/24
******************************************************************************/
mod strategy_bear_call_spread;
mod strategy_bear_put_spread;
mod strategy_bull_call_spread;
mod strategy_bull_put_spread;
mod strategy_call_butterfly;
mod strategy_iron_butterfly;
mod strategy_iron_condor;
mod strategy_long_butterfly_spread;
mod strategy_long_straddle;
mod strategy_long_strangle;
mod strategy_poor_mans_covered_call;
mod strategy_short_butterfly_spread;
mod strategy_short_straddle;
mod strategy_short_strangle;

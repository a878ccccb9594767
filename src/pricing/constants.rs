/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/24
******************************************************************************/
use rust_decimal::Decimal;

pub(crate) const CLAMP_MIN: Decimal = Decimal::ZERO;
pub(crate) const CLAMP_MAX: Decimal = Decimal::ONE;

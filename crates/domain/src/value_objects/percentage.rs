use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A fraction, stored as a decimal ratio (`0.01` is 1%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentage(pub Decimal);

impl Percentage {
    pub fn from_bps(bps: u32) -> Self {
        Self(Decimal::from(bps) / Decimal::from(10000))
    }

    /// `numerator / denominator`; zero when the denominator is zero.
    pub fn from_ratio(numerator: u32, denominator: u32) -> Self {
        if denominator == 0 {
            return Self(Decimal::ZERO);
        }
        Self(Decimal::from(numerator) / Decimal::from(denominator))
    }

    pub fn to_bps(&self) -> u32 {
        (self.0 * Decimal::from(10000)).to_u32().unwrap_or(0)
    }

    /// Value in percent, e.g. `1` for 1%.
    pub fn as_percent(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ratio_and_bps() {
        let fee = Percentage::from_ratio(1, 100);
        assert_eq!(fee.to_bps(), 100);
        assert_eq!(fee.as_percent(), dec!(1));
        assert_eq!(Percentage::from_bps(25).0, dec!(0.0025));
        assert_eq!(Percentage::from_ratio(1, 0).0, Decimal::ZERO);
    }
}

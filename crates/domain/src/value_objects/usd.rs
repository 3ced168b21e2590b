use crate::constants::DISPLAY_DECIMALS;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative USD figure kept at full precision.
///
/// Rounding happens only in [`UsdValue::to_display_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct UsdValue(pub Decimal);

impl UsdValue {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True when the figure hit `Decimal::MAX` and is only a lower bound.
    pub fn is_saturated(&self) -> bool {
        self.0 == Decimal::MAX
    }

    /// Saturating sum of two figures.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Figure rounded half away from zero to two places, e.g. `"1234.57"`.
    pub fn to_display_string(&self) -> String {
        fixed_dp(self.0, DISPLAY_DECIMALS)
    }
}

impl fmt::Display for UsdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_display_string())
    }
}

/// Renders `value` with exactly `dp` fractional digits.
pub(crate) fn fixed_dp(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_rounding() {
        assert_eq!(UsdValue(dec!(123.456789012345678)).to_display_string(), "123.46");
        assert_eq!(UsdValue(dec!(0.005)).to_display_string(), "0.01");
        assert_eq!(UsdValue(dec!(7)).to_display_string(), "7.00");
        assert_eq!(UsdValue::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_display_does_not_mutate_value() {
        let usd = UsdValue(dec!(1.23456));
        let _ = usd.to_display_string();
        assert_eq!(usd.value(), dec!(1.23456));
    }

    #[test]
    fn test_saturating_add() {
        let max = UsdValue(Decimal::MAX);
        assert_eq!(max.saturating_add(UsdValue(dec!(1))), max);
        assert!(max.is_saturated());
        assert!(!UsdValue(dec!(3.75)).is_saturated());
        assert_eq!(
            UsdValue(dec!(1.5)).saturating_add(UsdValue(dec!(2.25))),
            UsdValue(dec!(3.75))
        );
    }
}

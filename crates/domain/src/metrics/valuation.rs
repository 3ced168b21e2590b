//! USD valuation of vault balances.

use crate::value_objects::{PriceQuote, TokenAmount, UsdValue, VaultPosition};
use rust_decimal::Decimal;

/// Converts token balances into a USD total.
///
/// Stateless; a single instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValuationEngine;

impl ValuationEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Total USD value of both sides of `position`.
    ///
    /// A side with an unknown price contributes nothing, so a partially
    /// priced position still yields a partial total. With both prices
    /// unknown the result is exactly zero.
    ///
    /// # Arguments
    ///
    /// * `position` - Current balances in smallest units
    /// * `price0` - USD price of token0
    /// * `price1` - USD price of token1
    #[must_use]
    pub fn total_staked_usd(
        &self,
        position: &VaultPosition,
        price0: PriceQuote,
        price1: PriceQuote,
    ) -> UsdValue {
        token_value_usd(&position.token0, price0)
            .saturating_add(token_value_usd(&position.token1, price1))
    }
}

/// USD value of a single balance; zero when the price is unknown.
///
/// Balances beyond the decimal range saturate at `Decimal::MAX` rather than
/// wrap; see [`UsdValue::is_saturated`].
#[must_use]
pub fn token_value_usd(amount: &TokenAmount, price: PriceQuote) -> UsdValue {
    let factor = price.contribution();
    if factor.is_zero() {
        return UsdValue::ZERO;
    }
    let human = amount.to_decimal().unwrap_or(Decimal::MAX);
    UsdValue(human.saturating_mul(factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Decimals, Price};
    use primitive_types::U256;
    use rust_decimal_macros::dec;

    fn quote(value: Decimal) -> PriceQuote {
        PriceQuote::from(Price::new(value).unwrap())
    }

    fn position(raw0: u128, raw1: u128) -> VaultPosition {
        VaultPosition::new(
            TokenAmount::new(raw0, Decimals::EIGHTEEN),
            TokenAmount::new(raw1, Decimals::new(6).unwrap()),
        )
    }

    #[test]
    fn test_total_staked_usd() {
        // 2 CAKE at $1.50 + 10 USDC at $1.00
        let total = ValuationEngine::new().total_staked_usd(
            &position(2_000_000_000_000_000_000, 10_000_000),
            quote(dec!(1.5)),
            quote(dec!(1)),
        );
        assert_eq!(total.value(), dec!(13));
        assert_eq!(total.to_display_string(), "13.00");
    }

    #[test]
    fn test_unknown_price_contributes_nothing() {
        let engine = ValuationEngine::new();
        let pos = position(2_000_000_000_000_000_000, 10_000_000);

        let partial = engine.total_staked_usd(&pos, PriceQuote::Unknown, quote(dec!(1)));
        assert_eq!(partial.value(), dec!(10));

        let none = engine.total_staked_usd(&pos, PriceQuote::Unknown, PriceQuote::Unknown);
        assert_eq!(none, UsdValue::ZERO);
    }

    #[test]
    fn test_empty_position_is_zero() {
        let total =
            ValuationEngine::new().total_staked_usd(&position(0, 0), quote(dec!(3)), quote(dec!(1)));
        assert_eq!(total, UsdValue::ZERO);
    }

    #[test]
    fn test_full_precision_before_display() {
        let amount = TokenAmount::new(123_456_789_012_345_678_000u128, Decimals::EIGHTEEN);
        let value = token_value_usd(&amount, quote(dec!(1.00)));
        assert_eq!(value.value(), dec!(123.456789012345678));
        assert_eq!(value.to_display_string(), "123.46");

        let amount = TokenAmount::new(123_456_789_012_345_678u128, Decimals::EIGHTEEN);
        let value = token_value_usd(&amount, quote(dec!(1.00)));
        assert_eq!(value.value(), dec!(0.123456789012345678));
    }

    #[test]
    fn test_huge_balance_saturates() {
        let amount = TokenAmount::new(U256::MAX, Decimals::EIGHTEEN);
        assert_eq!(token_value_usd(&amount, quote(dec!(2))).value(), Decimal::MAX);
        assert_eq!(token_value_usd(&amount, quote(dec!(0))), UsdValue::ZERO);
    }
}

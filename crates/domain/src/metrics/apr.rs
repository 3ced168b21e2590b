//! Blended vault APR: trading-fee yield plus reward-emission yield.

use crate::constants::SECONDS_PER_YEAR;
use crate::metrics::{fees, rewards};
use crate::value_objects::{AprBreakdown, PriceQuote, RewardRate, UsdValue};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures the yield computation consumes.
///
/// Average amounts are human-scale (whole tokens), averaged over a trailing
/// window chosen by whoever supplies them. `total_staked_usd` is the value of
/// the *current* balances, normally from
/// [`ValuationEngine::total_staked_usd`](crate::metrics::valuation::ValuationEngine::total_staked_usd).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AprInputs {
    pub avg_token0_amount: Decimal,
    pub avg_token1_amount: Decimal,
    pub price0: PriceQuote,
    pub price1: PriceQuote,
    pub reward_per_second: RewardRate,
    pub reward_token_price: PriceQuote,
    pub total_staked_usd: Option<UsdValue>,
}

impl AprInputs {
    /// Creates inputs with zero averages and unknown prices.
    #[must_use]
    pub fn new(total_staked_usd: Option<UsdValue>, reward_per_second: RewardRate) -> Self {
        Self {
            avg_token0_amount: Decimal::ZERO,
            avg_token1_amount: Decimal::ZERO,
            price0: PriceQuote::Unknown,
            price1: PriceQuote::Unknown,
            reward_per_second,
            reward_token_price: PriceQuote::Unknown,
            total_staked_usd,
        }
    }

    /// Sets the trailing-average balances.
    #[must_use]
    pub fn with_averages(mut self, avg_token0_amount: Decimal, avg_token1_amount: Decimal) -> Self {
        self.avg_token0_amount = avg_token0_amount;
        self.avg_token1_amount = avg_token1_amount;
        self
    }

    /// Sets the USD prices of the pool tokens.
    #[must_use]
    pub fn with_prices(mut self, price0: PriceQuote, price1: PriceQuote) -> Self {
        self.price0 = price0;
        self.price1 = price1;
        self
    }

    /// Sets the USD price of the reward token.
    #[must_use]
    pub fn with_reward_price(mut self, reward_token_price: PriceQuote) -> Self {
        self.reward_token_price = reward_token_price;
        self
    }
}

/// Computes a vault's APR breakdown.
///
/// All components are expressed in percent, so `fee_apr` and `reward_apr`
/// add directly. The engine never panics and never fails: anything that
/// cannot be computed comes back as [`Apr::Undefined`](crate::value_objects::Apr::Undefined).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YieldEngine {
    seconds_per_year: u64,
}

impl Default for YieldEngine {
    fn default() -> Self {
        Self::new(SECONDS_PER_YEAR)
    }
}

impl YieldEngine {
    /// Creates an engine annualizing per-second rates over `seconds_per_year`.
    #[must_use]
    pub fn new(seconds_per_year: u64) -> Self {
        Self { seconds_per_year }
    }

    #[must_use]
    pub fn seconds_per_year(&self) -> u64 {
        self.seconds_per_year
    }

    /// Fee APR, reward APR and their sum.
    ///
    /// * No stake (`total_staked_usd` absent or zero): everything undefined.
    /// * Saturated stake (balances beyond the decimal range): everything
    ///   undefined.
    /// * Unknown reward-token price: reward and total undefined, fee still
    ///   reported.
    /// * Unknown pool-token price: that token's average counts as zero.
    #[must_use]
    pub fn compute_apr(&self, inputs: &AprInputs) -> AprBreakdown {
        let Some(total) = inputs
            .total_staked_usd
            .filter(|usd| !usd.is_saturated())
            .map(|usd| usd.value())
            .filter(|usd| *usd > Decimal::ZERO)
        else {
            return AprBreakdown::UNDEFINED;
        };

        let fee_apr = fees::average_staked_usd(
            inputs.avg_token0_amount,
            inputs.avg_token1_amount,
            inputs.price0,
            inputs.price1,
        )
        .map(|avg_staked_usd| fees::fee_apr(avg_staked_usd, total))
        .unwrap_or_default();

        let reward_apr = rewards::reward_apr(
            &inputs.reward_per_second,
            self.seconds_per_year,
            inputs.reward_token_price,
            total,
        );

        AprBreakdown::new(fee_apr, reward_apr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ValuationEngine;
    use crate::value_objects::{Apr, Decimals, Price, TokenAmount, VaultPosition};
    use primitive_types::U256;
    use rust_decimal_macros::dec;

    fn quote(value: Decimal) -> PriceQuote {
        PriceQuote::from(Price::new(value).unwrap())
    }

    fn rate(raw: u128) -> RewardRate {
        RewardRate::per_second(TokenAmount::new(raw, Decimals::EIGHTEEN))
    }

    #[test]
    fn test_fee_only() {
        let inputs = AprInputs::new(Some(UsdValue(dec!(10000))), rate(0))
            .with_averages(dec!(100), dec!(0))
            .with_prices(quote(dec!(1)), quote(dec!(1)))
            .with_reward_price(quote(dec!(2)));

        let apr = YieldEngine::default().compute_apr(&inputs);
        assert_eq!(apr.fee_apr.to_fixed_string(), "365.00");
        assert_eq!(apr.reward_apr, Apr::Defined(Decimal::ZERO));
        assert_eq!(apr.total_apr.to_fixed_string(), "365.00");
    }

    #[test]
    fn test_fee_and_reward_are_summed_in_percent() {
        // fee: 10 * 365 / 1000 * 100 = 365
        // reward: 1 * 31_536_000 * 2 / 1000 * 100 = 6_307_200
        let inputs = AprInputs::new(Some(UsdValue(dec!(1000))), rate(1_000_000_000_000_000_000))
            .with_averages(dec!(5), dec!(5))
            .with_prices(quote(dec!(1)), quote(dec!(1)))
            .with_reward_price(quote(dec!(2)));

        let apr = YieldEngine::default().compute_apr(&inputs);
        assert_eq!(apr.fee_apr, Apr::Defined(dec!(365)));
        assert_eq!(apr.reward_apr, Apr::Defined(dec!(6307200)));
        assert_eq!(apr.total_apr.to_fixed_string(), "6307565.00");
    }

    #[test]
    fn test_zero_stake_is_undefined() {
        let inputs = AprInputs::new(Some(UsdValue::ZERO), rate(1))
            .with_averages(dec!(100), dec!(100))
            .with_prices(quote(dec!(1)), quote(dec!(1)))
            .with_reward_price(quote(dec!(2)));

        let apr = YieldEngine::default().compute_apr(&inputs);
        assert_eq!(apr, AprBreakdown::UNDEFINED);
        assert_eq!(apr.total_apr.to_fixed_string(), "");
    }

    #[test]
    fn test_absent_stake_is_undefined() {
        let inputs = AprInputs::new(None, rate(1)).with_reward_price(quote(dec!(2)));
        assert_eq!(YieldEngine::default().compute_apr(&inputs), AprBreakdown::UNDEFINED);
    }

    #[test]
    fn test_saturated_stake_is_undefined() {
        let pos = VaultPosition::new(
            TokenAmount::new(U256::MAX, Decimals::EIGHTEEN),
            TokenAmount::zero(Decimals::EIGHTEEN),
        );
        let total = ValuationEngine::new().total_staked_usd(&pos, quote(dec!(2)), quote(dec!(1)));
        assert!(total.is_saturated());

        let inputs = AprInputs::new(Some(total), rate(1_000_000_000_000_000_000))
            .with_averages(dec!(1000000000000000000000000), dec!(0))
            .with_prices(quote(dec!(2)), quote(dec!(1)))
            .with_reward_price(quote(dec!(2)));

        let apr = YieldEngine::default().compute_apr(&inputs);
        assert_eq!(apr, AprBreakdown::UNDEFINED);
        assert_eq!(apr.total_apr.to_fixed_string(), "");
    }

    #[test]
    fn test_unknown_reward_price() {
        let inputs = AprInputs::new(Some(UsdValue(dec!(10000))), rate(1))
            .with_averages(dec!(100), dec!(0))
            .with_prices(quote(dec!(1)), quote(dec!(1)));

        let apr = YieldEngine::default().compute_apr(&inputs);
        assert_eq!(apr.fee_apr.to_fixed_string(), "365.00");
        assert_eq!(apr.reward_apr, Apr::Undefined);
        assert_eq!(apr.total_apr, Apr::Undefined);
    }

    #[test]
    fn test_custom_year_length() {
        let engine = YieldEngine::new(10);
        let inputs = AprInputs::new(Some(UsdValue(dec!(100))), rate(1_000_000_000_000_000_000))
            .with_reward_price(quote(dec!(1)));

        // 1 * 10 * 1 / 100 * 100 = 10
        assert_eq!(engine.compute_apr(&inputs).reward_apr, Apr::Defined(dec!(10)));
        assert_eq!(engine.seconds_per_year(), 10);
    }
}

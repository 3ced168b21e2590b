use crate::value_objects::{Apr, PriceQuote, RewardRate};
use rust_decimal::Decimal;

/// Annualized reward-emission yield in percent.
///
/// `rate * seconds_per_year * reward_price / total_staked_usd * 100`.
/// Undefined when nothing is staked, when the reward token has no price, or
/// on overflow.
pub fn reward_apr(
    reward_per_second: &RewardRate,
    seconds_per_year: u64,
    reward_token_price: PriceQuote,
    total_staked_usd: Decimal,
) -> Apr {
    if total_staked_usd <= Decimal::ZERO {
        return Apr::Undefined;
    }
    let Some(price) = reward_token_price.known() else {
        return Apr::Undefined;
    };

    reward_per_second
        .human_per_second()
        .and_then(|rate| rate.checked_mul(Decimal::from(seconds_per_year)))
        .and_then(|v| v.checked_mul(price.value()))
        .and_then(|v| v.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|v| v.checked_div(total_staked_usd))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_YEAR;
    use crate::value_objects::{Decimals, Price, TokenAmount};
    use rust_decimal_macros::dec;

    fn one_token_per_second() -> RewardRate {
        RewardRate::per_second(TokenAmount::new(
            1_000_000_000_000_000_000u128,
            Decimals::EIGHTEEN,
        ))
    }

    #[test]
    fn test_reward_apr() {
        // 1 * 31_536_000 * 2 / 1000 * 100
        let price = PriceQuote::from(Price::new(dec!(2)).unwrap());
        let apr = reward_apr(&one_token_per_second(), SECONDS_PER_YEAR, price, dec!(1000));
        assert_eq!(apr, Apr::Defined(dec!(6307200)));
        assert_eq!(apr.to_fixed_string(), "6307200.00");
    }

    #[test]
    fn test_reward_apr_unknown_price() {
        let apr = reward_apr(
            &one_token_per_second(),
            SECONDS_PER_YEAR,
            PriceQuote::Unknown,
            dec!(1000),
        );
        assert_eq!(apr, Apr::Undefined);
    }

    #[test]
    fn test_reward_apr_zero_rate() {
        let price = PriceQuote::from(Price::new(dec!(2)).unwrap());
        let rate = RewardRate::per_second(TokenAmount::zero(Decimals::EIGHTEEN));
        assert_eq!(
            reward_apr(&rate, SECONDS_PER_YEAR, price, dec!(1000)),
            Apr::Defined(Decimal::ZERO)
        );
    }
}

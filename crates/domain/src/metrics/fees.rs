use crate::constants::DAYS_PER_YEAR;
use crate::value_objects::{Apr, PriceQuote};
use rust_decimal::Decimal;

/// USD value of the trailing-average balances.
///
/// Unknown prices contribute zero, as in [`crate::metrics::valuation`].
/// Returns `None` on overflow.
pub fn average_staked_usd(
    avg_token0_amount: Decimal,
    avg_token1_amount: Decimal,
    price0: PriceQuote,
    price1: PriceQuote,
) -> Option<Decimal> {
    let value0 = avg_token0_amount.checked_mul(price0.contribution())?;
    let value1 = avg_token1_amount.checked_mul(price1.contribution())?;
    value0.checked_add(value1)
}

/// Annualized fee yield in percent.
///
/// `avg_staked_usd * 365 / total_staked_usd * 100`. Fees compound into the
/// pool balance, so the daily average value is extrapolated over a year and
/// compared with the current stake. The average and the denominator cover
/// different windows; this is a known approximation.
pub fn fee_apr(avg_staked_usd: Decimal, total_staked_usd: Decimal) -> Apr {
    if total_staked_usd <= Decimal::ZERO {
        return Apr::Undefined;
    }
    avg_staked_usd
        .checked_mul(Decimal::from(DAYS_PER_YEAR))
        .and_then(|v| v.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|v| v.checked_div(total_staked_usd))
        .into()
}

//! Conversions between a token's smallest unit and human-scale decimals.

use crate::value_objects::amount::Decimals;
use primitive_types::U256;
use rust_decimal::Decimal;

/// Width of the `Decimal` mantissa.
const MANTISSA_BITS: usize = 96;

/// Returns `10^decimals` as a `Decimal`.
#[must_use]
pub fn ten_pow(decimals: Decimals) -> Decimal {
    // 10^28 < 2^96, so every valid precision fits the mantissa.
    Decimal::from_i128_with_scale(10i128.pow(u32::from(decimals.get())), 0)
}

/// Converts a smallest-unit magnitude to a human-scale decimal.
///
/// When the magnitude fits the decimal mantissa the conversion is exact: the
/// raw integer becomes the mantissa and the precision becomes the scale, so
/// `123456789012345678` at 18 decimals is exactly `0.123456789012345678`.
/// Larger magnitudes are split into whole and fractional parts; the fraction
/// is then rounded to whatever precision remains.
///
/// Returns `None` only when the whole part alone exceeds the decimal range.
#[must_use]
pub fn scale_down(raw: U256, decimals: Decimals) -> Option<Decimal> {
    let scale = u32::from(decimals.get());
    if raw.bits() <= MANTISSA_BITS {
        return Decimal::try_from_i128_with_scale(raw.low_u128() as i128, scale).ok();
    }

    let (whole, fraction) = raw.div_mod(U256::exp10(usize::from(decimals.get())));
    if whole.bits() > MANTISSA_BITS {
        return None;
    }
    let whole = Decimal::try_from_i128_with_scale(whole.low_u128() as i128, 0).ok()?;
    let fraction = Decimal::try_from_i128_with_scale(fraction.low_u128() as i128, scale).ok()?;
    whole.checked_add(fraction)
}

/// Human-scales a decimal that is still expressed in smallest units.
///
/// Feed averages arrive as fractional smallest-unit figures, so they cannot
/// go through [`scale_down`].
#[must_use]
pub fn scale_decimal_down(value: Decimal, decimals: Decimals) -> Option<Decimal> {
    value.checked_div(ten_pow(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn decimals(value: u8) -> Decimals {
        Decimals::new(value).unwrap()
    }

    #[test]
    fn test_ten_pow() {
        assert_eq!(ten_pow(decimals(0)), dec!(1));
        assert_eq!(ten_pow(decimals(6)), dec!(1000000));
        assert_eq!(ten_pow(decimals(28)).to_string(), format!("1{}", "0".repeat(28)));
    }

    #[test]
    fn test_scale_down_is_exact_for_18_decimals() {
        let raw = U256::from(123_456_789_012_345_678u128);
        assert_eq!(
            scale_down(raw, decimals(18)).unwrap(),
            dec!(0.123456789012345678)
        );

        let raw = U256::from(123_456_789_012_345_678_000u128);
        assert_eq!(
            scale_down(raw, decimals(18)).unwrap(),
            dec!(123.456789012345678)
        );
    }

    #[test]
    fn test_scale_down_zero_decimals() {
        assert_eq!(scale_down(U256::from(42u64), decimals(0)).unwrap(), dec!(42));
        assert_eq!(scale_down(U256::zero(), decimals(18)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_scale_down_beyond_mantissa() {
        // 10^30 wei = 10^12 whole tokens; the raw value needs more than 96 bits.
        let raw = U256::exp10(30) + U256::from(5u64);
        let scaled = scale_down(raw, decimals(18)).unwrap();
        assert_eq!(scaled.trunc(), dec!(1000000000000));
        assert!(scaled >= dec!(1000000000000));
    }

    #[test]
    fn test_scale_down_out_of_range() {
        assert!(scale_down(U256::MAX, decimals(0)).is_none());
        assert!(scale_down(U256::MAX, decimals(18)).is_none());
    }

    #[test]
    fn test_scale_decimal_down() {
        assert_eq!(
            scale_decimal_down(dec!(1500000.5), decimals(6)).unwrap(),
            dec!(1.5000005)
        );
        assert_eq!(scale_decimal_down(dec!(0), decimals(18)).unwrap(), Decimal::ZERO);
    }
}

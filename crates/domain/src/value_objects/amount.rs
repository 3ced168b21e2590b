use crate::constants::MAX_DECIMALS;
use crate::error::DomainError;
use crate::math::scaling;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal precision of a token.
///
/// Fixed per token and never inferred from a magnitude. Valid range is
/// `0..=28`, the largest scale a `Decimal` represents exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// Most ERC-20 tokens, including CAKE and BSC-USD.
    pub const EIGHTEEN: Self = Self(18);

    /// Creates a validated precision.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidDecimals`] above 28.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > MAX_DECIMALS {
            return Err(DomainError::InvalidDecimals(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Decimals {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(d: Decimals) -> Self {
        d.0
    }
}

/// A balance in a token's smallest unit together with its precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenAmount {
    pub raw: U256,
    pub decimals: Decimals,
}

impl TokenAmount {
    pub fn new(raw: impl Into<U256>, decimals: Decimals) -> Self {
        Self {
            raw: raw.into(),
            decimals,
        }
    }

    pub fn zero(decimals: Decimals) -> Self {
        Self {
            raw: U256::zero(),
            decimals,
        }
    }

    /// Parses a base-10 string of smallest units, e.g. an on-chain `uint256`
    /// rendered as text.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidAmount`] if the string is not an
    /// unsigned integer that fits in 256 bits.
    pub fn from_raw_str(raw: &str, decimals: Decimals) -> Result<Self, DomainError> {
        let raw = U256::from_dec_str(raw.trim())
            .map_err(|_| DomainError::InvalidAmount(raw.to_string()))?;
        Ok(Self { raw, decimals })
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Human-scale value, `raw / 10^decimals`.
    ///
    /// `None` when the whole-token part exceeds the decimal range
    /// (roughly 7.9e28 whole tokens).
    pub fn to_decimal(&self) -> Option<Decimal> {
        scaling::scale_down(self.raw, self.decimals)
    }
}

impl FromStr for Decimals {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| DomainError::InvalidDecimal(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Some(d) => write!(f, "{}", d.normalize()),
            None => write!(f, "{}e-{}", self.raw, self.decimals.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimals_range() {
        assert_eq!(Decimals::new(0).unwrap().get(), 0);
        assert_eq!(Decimals::new(28).unwrap().get(), 28);
        assert_eq!(Decimals::new(29), Err(DomainError::InvalidDecimals(29)));
        assert_eq!("6".parse::<Decimals>().unwrap().get(), 6);
        assert!("x".parse::<Decimals>().is_err());
    }

    #[test]
    fn test_from_raw_str() {
        let amount = TokenAmount::from_raw_str("100000000000000", Decimals::EIGHTEEN).unwrap();
        assert_eq!(amount.to_decimal().unwrap(), dec!(0.0001));

        assert!(TokenAmount::from_raw_str("-1", Decimals::EIGHTEEN).is_err());
        assert!(TokenAmount::from_raw_str("1.5", Decimals::EIGHTEEN).is_err());
        assert!(TokenAmount::from_raw_str("1e18", Decimals::EIGHTEEN).is_err());
        assert!(TokenAmount::from_raw_str(&"9".repeat(80), Decimals::EIGHTEEN).is_err());
        assert_eq!(
            TokenAmount::from_raw_str(" 42 ", Decimals::EIGHTEEN).unwrap().raw,
            U256::from(42u64)
        );
    }

    #[test]
    fn test_display() {
        let amount = TokenAmount::new(1_500_000u64, Decimals::new(6).unwrap());
        assert_eq!(amount.to_string(), "1.5");
        assert!(TokenAmount::zero(Decimals::EIGHTEEN).is_zero());
    }

    #[test]
    fn test_decimals_serde_validates() {
        let ok: Decimals = serde_json::from_str("18").unwrap();
        assert_eq!(ok, Decimals::EIGHTEEN);
        assert!(serde_json::from_str::<Decimals>("30").is_err());
    }
}

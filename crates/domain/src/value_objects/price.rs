use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// USD value of one whole unit of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price {
    value: Decimal,
}

impl Price {
    pub const ZERO: Self = Self {
        value: Decimal::ZERO,
    };

    /// Creates a price, rejecting negative values.
    ///
    /// # Errors
    /// Returns [`DomainError::NegativePrice`] if `value < 0`.
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::NegativePrice(value.to_string()));
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(p: Price) -> Self {
        p.value
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Decimal::from_str(s.trim()).map_err(|_| DomainError::InvalidDecimal(s.to_string()))?;
        Self::new(value)
    }
}

/// A price that may not be available.
///
/// `Unknown` means there is no price data, which is not the same thing as a
/// worthless token. It only counts as zero where a valuation explicitly
/// asks for [`PriceQuote::contribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PriceQuote {
    Known(Price),
    #[default]
    Unknown,
}

impl PriceQuote {
    pub fn known(&self) -> Option<Price> {
        match self {
            Self::Known(p) => Some(*p),
            Self::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Multiplier used when summing token values: the price if known, zero
    /// otherwise.
    pub fn contribution(&self) -> Decimal {
        self.known().map_or(Decimal::ZERO, |p| p.value())
    }
}

impl From<Price> for PriceQuote {
    fn from(p: Price) -> Self {
        Self::Known(p)
    }
}

impl From<Option<Price>> for PriceQuote {
    fn from(p: Option<Price>) -> Self {
        p.map_or(Self::Unknown, Self::Known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_rejects_negative() {
        assert!(Price::new(dec!(-0.01)).is_err());
        assert_eq!(Price::new(dec!(0)).unwrap(), Price::ZERO);
        assert_eq!("2.5".parse::<Price>().unwrap().value(), dec!(2.5));
        assert!("abc".parse::<Price>().is_err());
    }

    #[test]
    fn test_unknown_is_not_zero() {
        let zero = PriceQuote::from(Price::ZERO);
        let unknown = PriceQuote::from(None::<Price>);

        assert_ne!(zero, unknown);
        assert!(zero.is_known());
        assert!(!unknown.is_known());
        assert_eq!(zero.contribution(), unknown.contribution());
    }

    #[test]
    fn test_contribution_uses_known_price() {
        let quote = PriceQuote::from(Price::new(dec!(1.75)).unwrap());
        assert_eq!(quote.contribution(), dec!(1.75));
        assert_eq!(quote.known().unwrap().value(), dec!(1.75));
    }
}

use crate::value_objects::Percentage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Concentrated-liquidity pool fee tier, in hundredths of a basis point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeTier {
    /// 0.01%
    Lowest,
    /// 0.05%
    Low,
    /// 0.25%
    Medium,
    /// 1%
    High,
}

impl FeeTier {
    /// Raw fee as stored on chain (`2500` for 0.25%).
    pub const fn pips(&self) -> u32 {
        match self {
            Self::Lowest => 100,
            Self::Low => 500,
            Self::Medium => 2500,
            Self::High => 10_000,
        }
    }

    pub fn from_pips(pips: u32) -> Option<Self> {
        match pips {
            100 => Some(Self::Lowest),
            500 => Some(Self::Low),
            2500 => Some(Self::Medium),
            10_000 => Some(Self::High),
            _ => None,
        }
    }

    pub fn rate(&self) -> Percentage {
        Percentage(Decimal::from(self.pips()) / Decimal::from(1_000_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fee_tier_rate() {
        assert_eq!(FeeTier::Medium.rate().as_percent(), dec!(0.25));
        assert_eq!(FeeTier::High.rate().to_bps(), 100);
        assert_eq!(FeeTier::from_pips(500), Some(FeeTier::Low));
        assert_eq!(FeeTier::from_pips(3000), None);
    }
}

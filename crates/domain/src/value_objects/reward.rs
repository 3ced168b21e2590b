use crate::value_objects::amount::TokenAmount;
use crate::value_objects::price::PriceQuote;
use crate::value_objects::usd::UsdValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Emission of a reward token, in smallest units per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRate(pub TokenAmount);

impl RewardRate {
    pub fn per_second(amount: TokenAmount) -> Self {
        Self(amount)
    }

    /// Whole tokens emitted per second; `None` if out of decimal range.
    pub fn human_per_second(&self) -> Option<Decimal> {
        self.0.to_decimal()
    }
}

/// Rewards a depositor has earned but not yet harvested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReward(pub TokenAmount);

impl PendingReward {
    pub fn new(amount: TokenAmount) -> Self {
        Self(amount)
    }

    /// Earned balance in whole tokens, saturating at `Decimal::MAX`.
    pub fn human_amount(&self) -> Decimal {
        self.0.to_decimal().unwrap_or(Decimal::MAX)
    }

    /// USD value of the earned balance; an unknown price values it at zero.
    pub fn usd_value(&self, price: PriceQuote) -> UsdValue {
        UsdValue(self.human_amount().saturating_mul(price.contribution()))
    }

    /// Harvesting only makes sense for a strictly positive balance.
    pub fn is_harvestable(&self) -> bool {
        !self.0.is_zero()
    }
}

use crate::constants::DISPLAY_DECIMALS;
use crate::value_objects::usd::fixed_dp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An annual percentage rate, in percent (`12.5` means 12.5%).
///
/// `Undefined` marks a rate that could not be computed, e.g. because nothing
/// is staked yet. It renders as an empty string so callers can tell it apart
/// from a genuine `0.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Apr {
    Defined(Decimal),
    #[default]
    Undefined,
}

impl Apr {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Defined(d) => Some(*d),
            Self::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// Sum of two rates; undefined if either side is, or on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Defined(a), Self::Defined(b)) => a.checked_add(b).into(),
            _ => Self::Undefined,
        }
    }

    /// Two-decimal rendering, e.g. `"365.00"`, or `""` when undefined.
    pub fn to_fixed_string(&self) -> String {
        self.value()
            .map(|d| fixed_dp(d, DISPLAY_DECIMALS))
            .unwrap_or_default()
    }
}

impl From<Option<Decimal>> for Apr {
    fn from(d: Option<Decimal>) -> Self {
        d.map_or(Self::Undefined, Self::Defined)
    }
}

impl fmt::Display for Apr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed_string())
    }
}

/// Fee and reward components of a vault's APR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AprBreakdown {
    /// Yield from trading fees compounding into the pool balance.
    pub fee_apr: Apr,
    /// Yield from reward-token emissions.
    pub reward_apr: Apr,
    /// `fee_apr + reward_apr`.
    pub total_apr: Apr,
}

impl AprBreakdown {
    pub const UNDEFINED: Self = Self {
        fee_apr: Apr::Undefined,
        reward_apr: Apr::Undefined,
        total_apr: Apr::Undefined,
    };

    pub fn new(fee_apr: Apr, reward_apr: Apr) -> Self {
        Self {
            fee_apr,
            reward_apr,
            total_apr: fee_apr.checked_add(reward_apr),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Liquidity-management strategy run by a vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    TypicalWide,
    YieldIq,
}

/// Which flow the manager's fee is charged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManagerFeeType {
    LpRewards,
    PerformanceFee,
}

/// Protocol operating the vault's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Manager {
    Ichi,
    Range,
    DefiEdge,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TypicalWide => "Typical Wide",
            Self::YieldIq => "Yield IQ",
        })
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ichi => "ICHI",
            Self::Range => "Range",
            Self::DefiEdge => "DefiEdge",
        })
    }
}

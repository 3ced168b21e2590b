//! Prelude module for convenient imports.
//!
//! ```rust
//! use pm_vaults_domain::prelude::*;
//! ```

// Constants
pub use crate::constants::{DAYS_PER_YEAR, SECONDS_PER_YEAR};

// Entities
pub use crate::entities::{ManagerFee, Token, VaultConfig};
pub use crate::enums::{Manager, ManagerFeeType, Strategy};
pub use crate::fees::FeeTier;

// Errors
pub use crate::error::DomainError;

// Engines
pub use crate::metrics::{AprInputs, ValuationEngine, YieldEngine, token_value_usd};

// Value objects
pub use crate::value_objects::{
    Apr, AprBreakdown, ChainId, Decimals, PendingReward, Percentage, Price, PriceQuote,
    RewardRate, TokenAmount, UsdValue, VaultPosition,
};

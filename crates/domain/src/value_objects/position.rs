use crate::value_objects::amount::TokenAmount;
use serde::{Deserialize, Serialize};

/// Token balances held by a vault or a single depositor.
///
/// Rebuilt from chain state on every refresh; the engines only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultPosition {
    pub token0: TokenAmount,
    pub token1: TokenAmount,
}

impl VaultPosition {
    pub fn new(token0: TokenAmount, token1: TokenAmount) -> Self {
        Self { token0, token1 }
    }

    /// True when either side holds a non-zero balance.
    pub fn has_stake(&self) -> bool {
        !self.token0.is_zero() || !self.token1.is_zero()
    }
}

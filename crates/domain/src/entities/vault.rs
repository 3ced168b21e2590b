use crate::entities::token::Token;
use crate::enums::{Manager, ManagerFeeType, Strategy};
use crate::fees::FeeTier;
use crate::value_objects::{Percentage, RewardRate, TokenAmount, VaultPosition};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerFee {
    pub fee_type: ManagerFeeType,
    pub rate: Percentage,
}

/// Static description of a position manager vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub adapter_address: String,
    /// Liquidity pool the vault provides into; keys the fee-average feed.
    pub lp_address: String,
    /// Emission of `earning_token`, in its smallest units per second.
    pub reward_per_second: U256,
    pub currency_a: Token,
    pub currency_b: Token,
    pub earning_token: Token,
    pub fee_tier: FeeTier,
    pub strategy: Strategy,
    pub manager: Manager,
    pub manager_fee: ManagerFee,
    pub is_single_deposit_token: bool,
    pub allow_deposit_token0: bool,
    pub allow_deposit_token1: bool,
    /// Whether the vault stakes its LP position in a farm on its own.
    pub auto_farm: bool,
    /// Farm whose pool prices the vault's tokens, if any.
    pub price_from_v3_farm_pid: Option<u32>,
    pub manager_info_url: String,
    pub strategy_info_url: String,
    pub project_vault_url: String,
}

impl VaultConfig {
    pub fn reward_rate(&self) -> RewardRate {
        RewardRate::per_second(TokenAmount::new(
            self.reward_per_second,
            self.earning_token.decimals,
        ))
    }

    /// Wraps raw pool balances with each currency's precision.
    pub fn position(&self, raw0: U256, raw1: U256) -> VaultPosition {
        VaultPosition::new(
            TokenAmount::new(raw0, self.currency_a.decimals),
            TokenAmount::new(raw1, self.currency_b.decimals),
        )
    }

    /// Tokens accepted on deposit. Both, unless the vault is single-sided.
    pub fn deposit_tokens(&self) -> Vec<&Token> {
        if !self.is_single_deposit_token {
            return vec![&self.currency_a, &self.currency_b];
        }
        let mut tokens = Vec::with_capacity(1);
        if self.allow_deposit_token0 {
            tokens.push(&self.currency_a);
        }
        if self.allow_deposit_token1 {
            tokens.push(&self.currency_b);
        }
        tokens
    }

    /// True when the vault emits a reward token on top of trading fees.
    pub fn has_reward_token(&self) -> bool {
        !self.reward_per_second.is_zero()
    }

    /// What depositors earn, e.g. `"CAKE + Fees"`, or just `"Fees"`.
    pub fn earning_label(&self) -> String {
        if self.has_reward_token() {
            format!("{} + Fees", self.earning_token.symbol)
        } else {
            "Fees".to_string()
        }
    }

    /// `"CAKE-USDT"` style pair label.
    pub fn pair_symbol(&self) -> String {
        format!("{}-{}", self.currency_a.symbol, self.currency_b.symbol)
    }
}

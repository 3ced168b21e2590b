//! Per-vault figures shown on a vault card.
//!
//! Combines static configuration, live balances, feed averages and prices
//! into the two engine calls. Chain and balances are always passed in; there
//! is no ambient "current chain" or "current account".

use crate::models::AprDataInfo;
use pm_vaults_domain::entities::VaultConfig;
use pm_vaults_domain::metrics::{AprInputs, ValuationEngine, YieldEngine, token_value_usd};
use pm_vaults_domain::value_objects::{
    AprBreakdown, ChainId, PendingReward, PriceQuote, UsdValue, VaultPosition,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// USD prices needed to value a vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VaultPrices {
    pub token0: PriceQuote,
    pub token1: PriceQuote,
    pub reward_token: PriceQuote,
}

/// Vault-wide staked value and APR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaultSummary {
    pub chain_id: ChainId,
    pub vault_id: u32,
    pub name: String,
    pub pair: String,
    /// `"CAKE + Fees"` or `"Fees"`.
    pub earning: String,
    pub total_staked_usd: UsdValue,
    pub avg_token0_amount: Decimal,
    pub avg_token1_amount: Decimal,
    /// Window of the averages, if the feed had an entry for this pool.
    pub calculation_days: Option<u32>,
    pub apr: AprBreakdown,
}

/// A depositor's share of a vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub staked_usd: UsdValue,
    pub token0_usd: UsdValue,
    pub token1_usd: UsdValue,
    pub pending_reward: Decimal,
    pub pending_reward_usd: UsdValue,
    pub can_harvest: bool,
}

/// Values the pool's current balances and computes its APR.
///
/// Without a feed entry the averages are zero, so the fee APR is zero
/// rather than undefined whenever something is staked.
pub fn summarize_vault(
    chain_id: ChainId,
    vault: &VaultConfig,
    pool: &VaultPosition,
    fee_average: Option<&AprDataInfo>,
    prices: &VaultPrices,
) -> VaultSummary {
    let total_staked_usd =
        ValuationEngine::new().total_staked_usd(pool, prices.token0, prices.token1);

    let (avg_token0_amount, avg_token1_amount) = match fee_average {
        Some(info) => info.human_averages(vault.currency_a.decimals, vault.currency_b.decimals),
        None => {
            debug!(
                chain_id = %chain_id,
                vault_id = vault.id,
                lp_address = %vault.lp_address,
                "No fee average for pool"
            );
            (Decimal::ZERO, Decimal::ZERO)
        }
    };

    let inputs = AprInputs::new(Some(total_staked_usd), vault.reward_rate())
        .with_averages(avg_token0_amount, avg_token1_amount)
        .with_prices(prices.token0, prices.token1)
        .with_reward_price(prices.reward_token);
    let apr = YieldEngine::default().compute_apr(&inputs);

    VaultSummary {
        chain_id,
        vault_id: vault.id,
        name: vault.name.clone(),
        pair: vault.pair_symbol(),
        earning: vault.earning_label(),
        total_staked_usd,
        avg_token0_amount,
        avg_token1_amount,
        calculation_days: fee_average.map(|info| info.calculation_days),
        apr,
    }
}

/// Values a depositor's balances and unclaimed rewards.
pub fn summarize_user(
    staked: &VaultPosition,
    pending_reward: &PendingReward,
    prices: &VaultPrices,
) -> UserSummary {
    let token0_usd = token_value_usd(&staked.token0, prices.token0);
    let token1_usd = token_value_usd(&staked.token1, prices.token1);
    UserSummary {
        staked_usd: token0_usd.saturating_add(token1_usd),
        token0_usd,
        token1_usd,
        pending_reward: pending_reward.human_amount(),
        pending_reward_usd: pending_reward.usd_value(prices.reward_token),
        can_harvest: pending_reward.is_harvestable(),
    }
}

//! Vaults deployed on BNB Smart Chain.

use pm_vaults_domain::entities::{ManagerFee, Token, VaultConfig};
use pm_vaults_domain::enums::{Manager, ManagerFeeType, Strategy};
use pm_vaults_domain::fees::FeeTier;
use pm_vaults_domain::value_objects::{Decimals, Percentage};
use primitive_types::U256;

pub fn cake() -> Token {
    Token::new(
        "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82",
        "CAKE",
        Decimals::EIGHTEEN,
        "PancakeSwap Token",
    )
}

pub fn usdt() -> Token {
    Token::new(
        "0x55d398326f99059fF775485246999027B3197955",
        "USDT",
        Decimals::EIGHTEEN,
        "Tether USD",
    )
}

pub fn vaults() -> Vec<VaultConfig> {
    vec![VaultConfig {
        id: 1,
        name: "ICHI".to_string(),
        address: "0x7fcBe3DDc2e6BD069eb5f11374DCA99f00685189".to_string(),
        adapter_address: "0x7F9ECfe70996aE6b65f93EF831E6037B8381BeD7".to_string(),
        lp_address: "0x63652e66Abd23d02537759f03314c333921915E1".to_string(),
        // 0.0001 CAKE per second
        reward_per_second: U256::from(100_000_000_000_000u64),
        currency_a: cake(),
        currency_b: usdt(),
        earning_token: cake(),
        fee_tier: FeeTier::Medium,
        strategy: Strategy::YieldIq,
        manager: Manager::Ichi,
        manager_fee: ManagerFee {
            fee_type: ManagerFeeType::LpRewards,
            rate: Percentage::from_ratio(1, 100),
        },
        is_single_deposit_token: true,
        allow_deposit_token0: true,
        allow_deposit_token1: false,
        auto_farm: false,
        price_from_v3_farm_pid: Some(3),
        manager_info_url: "https://google.com/".to_string(),
        strategy_info_url: "https://google.com/".to_string(),
        project_vault_url: "https://google.com/".to_string(),
    }]
}

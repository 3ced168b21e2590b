//! Wire types of the position manager fee-average service.

use pm_vaults_domain::math::scale_decimal_down;
use pm_vaults_domain::value_objects::{ChainId, Decimals};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default trailing window, in days, requested from the service.
pub const DEFAULT_CALCULATION_DAYS: u32 = 7;

/// Trailing-average pool balances for one liquidity pool.
///
/// `token0` and `token1` are averages in smallest units and may be
/// fractional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AprDataInfo {
    #[serde(with = "rust_decimal::serde::float")]
    pub token0: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub token1: Decimal,
    pub chain_id: ChainId,
    pub lp_address: String,
    pub calculation_days: u32,
}

impl AprDataInfo {
    /// True if this entry describes `lp_address` on `chain_id`. Addresses
    /// compare case-insensitively, as checksummed and lowercase forms mix.
    pub fn matches(&self, chain_id: ChainId, lp_address: &str) -> bool {
        self.chain_id == chain_id && self.lp_address.eq_ignore_ascii_case(lp_address)
    }

    /// Averages in whole tokens. Negative or unrepresentable figures count
    /// as zero.
    pub fn human_averages(&self, decimals0: Decimals, decimals1: Decimals) -> (Decimal, Decimal) {
        let scale = |value: Decimal, decimals: Decimals| {
            scale_decimal_down(value, decimals)
                .unwrap_or_default()
                .max(Decimal::ZERO)
        };
        (scale(self.token0, decimals0), scale(self.token1, decimals1))
    }
}

/// Looks up the entry for a pool in a feed response.
pub fn find_fee_average<'a>(
    data: &'a [AprDataInfo],
    chain_id: ChainId,
    lp_address: &str,
) -> Option<&'a AprDataInfo> {
    data.iter().find(|info| info.matches(chain_id, lp_address))
}

/// Request body of `POST /{chainId}/vault/feeAvg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeAvgRequest {
    /// Sent as a string, e.g. `"7"`.
    pub avg_fee_calculation_days: String,
}

impl FeeAvgRequest {
    pub fn new(days: u32) -> Self {
        Self {
            avg_fee_calculation_days: days.to_string(),
        }
    }
}

impl Default for FeeAvgRequest {
    fn default() -> Self {
        Self::new(DEFAULT_CALCULATION_DAYS)
    }
}

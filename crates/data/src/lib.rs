//! External collaborators of the valuation core.
//!
//! This crate provides:
//! - The fee-average feed client and its wire types
//! - The static vault registry
//! - Composition of engine calls into per-vault and per-user summaries

/// Error types.
pub mod error;
/// Fee-average wire types.
pub mod models;
/// Feed clients.
pub mod providers;
/// Static vault configuration.
pub mod registry;
/// Vault and user summaries.
pub mod summary;

pub use error::DataError;
pub use models::{AprDataInfo, FeeAvgRequest, find_fee_average};
pub use registry::VaultRegistry;
pub use summary::{UserSummary, VaultPrices, VaultSummary, summarize_user, summarize_vault};

use async_trait::async_trait;
use pm_vaults_domain::value_objects::ChainId;

/// Source of trailing-average pool balances.
///
/// Implementations never fail: transport or decoding problems are logged and
/// reported as an empty set, so callers simply see no averages.
#[async_trait]
pub trait FeeAverageProvider: Send + Sync {
    /// All pool averages known for `chain_id`.
    async fn fetch_fee_averages(&self, chain_id: ChainId) -> Vec<AprDataInfo>;
}

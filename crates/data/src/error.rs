//! Error types for the data layer.

use pm_vaults_domain::value_objects::ChainId;
use thiserror::Error;

/// Errors raised by configuration lookups and client construction.
///
/// Feed requests never surface errors; see
/// [`FeeAverageProvider`](crate::FeeAverageProvider).
#[derive(Debug, Error)]
pub enum DataError {
    /// No vault table exists for the chain.
    #[error("chain {0} has no position manager vaults")]
    UnsupportedChain(ChainId),

    /// The chain is supported but the vault id is not configured.
    #[error("vault {vault_id} not found on chain {chain_id}")]
    UnknownVault { chain_id: ChainId, vault_id: u32 },

    /// The HTTP client could not be built.
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}

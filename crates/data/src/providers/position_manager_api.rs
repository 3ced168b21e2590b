//! Client for the position manager fee-average service.

use crate::FeeAverageProvider;
use crate::error::DataError;
use crate::models::{AprDataInfo, DEFAULT_CALCULATION_DAYS, FeeAvgRequest};
use anyhow::Result;
use async_trait::async_trait;
use pm_vaults_domain::value_objects::ChainId;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable holding the service base URL.
pub const POSITION_MANAGER_API_ENV: &str = "POSITION_MANAGER_API";

/// Connection settings for [`PositionManagerApiProvider`].
#[derive(Debug, Clone)]
pub struct FeeAverageClientConfig {
    /// Service root, e.g. `https://example.org/position-manager`.
    pub base_url: String,
    /// Trailing window requested from the service.
    pub calculation_days: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl FeeAverageClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads the base URL from [`POSITION_MANAGER_API_ENV`].
    pub fn from_env() -> Option<Self> {
        std::env::var(POSITION_MANAGER_API_ENV).ok().map(Self::new)
    }

    /// Sets the trailing window.
    #[must_use]
    pub fn with_calculation_days(mut self, days: u32) -> Self {
        self.calculation_days = days;
        self
    }
}

impl Default for FeeAverageClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            calculation_days: DEFAULT_CALCULATION_DAYS,
            timeout_secs: 10,
        }
    }
}

/// Fetches trailing fee averages over HTTP.
///
/// Only chains with configured vaults are queried.
#[derive(Debug, Clone)]
pub struct PositionManagerApiProvider {
    client: reqwest::Client,
    config: FeeAverageClientConfig,
    supported_chains: Vec<ChainId>,
}

impl PositionManagerApiProvider {
    /// Creates a provider for the given chains.
    ///
    /// # Errors
    /// Returns [`DataError::Http`] if the HTTP client cannot be built.
    pub fn new(
        config: FeeAverageClientConfig,
        supported_chains: Vec<ChainId>,
    ) -> Result<Self, DataError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            config,
            supported_chains,
        })
    }

    pub fn config(&self) -> &FeeAverageClientConfig {
        &self.config
    }

    pub fn supports(&self, chain_id: ChainId) -> bool {
        self.supported_chains.contains(&chain_id)
    }

    /// `{base_url}/{chainId}/vault/feeAvg`
    pub fn endpoint(&self, chain_id: ChainId) -> String {
        format!(
            "{}/{}/vault/feeAvg",
            self.config.base_url.trim_end_matches('/'),
            chain_id
        )
    }

    async fn request(&self, chain_id: ChainId) -> Result<Vec<AprDataInfo>> {
        let body = FeeAvgRequest::new(self.config.calculation_days);
        let data = self
            .client
            .post(self.endpoint(chain_id))
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<AprDataInfo>>()
            .await?;
        Ok(data)
    }
}

#[async_trait]
impl FeeAverageProvider for PositionManagerApiProvider {
    async fn fetch_fee_averages(&self, chain_id: ChainId) -> Vec<AprDataInfo> {
        if !self.supports(chain_id) {
            debug!(chain_id = %chain_id, "Chain not supported, skipping fee averages");
            return Vec::new();
        }

        match self.request(chain_id).await {
            Ok(data) => {
                debug!(chain_id = %chain_id, entries = data.len(), "Fetched fee averages");
                data
            }
            Err(e) => {
                warn!(chain_id = %chain_id, error = %e, "Fee average request failed");
                Vec::new()
            }
        }
    }
}

//! Static vault configuration keyed by chain and vault id.

pub mod bsc;

use crate::error::DataError;
use pm_vaults_domain::entities::VaultConfig;
use pm_vaults_domain::value_objects::ChainId;
use std::collections::BTreeMap;

/// Read-only table of configured vaults.
#[derive(Debug, Clone, Default)]
pub struct VaultRegistry {
    vaults: BTreeMap<ChainId, Vec<VaultConfig>>,
}

impl VaultRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every deployment shipped in this crate.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for vault in bsc::vaults() {
            registry.insert(ChainId::BSC, vault);
        }
        registry
    }

    /// Adds a vault, replacing any existing entry with the same id.
    pub fn insert(&mut self, chain_id: ChainId, vault: VaultConfig) {
        let vaults = self.vaults.entry(chain_id).or_default();
        vaults.retain(|v| v.id != vault.id);
        vaults.push(vault);
        vaults.sort_by_key(|v| v.id);
    }

    /// Chains with at least one vault, in ascending order.
    pub fn supported_chains(&self) -> Vec<ChainId> {
        self.vaults.keys().copied().collect()
    }

    pub fn is_supported(&self, chain_id: ChainId) -> bool {
        self.vaults.contains_key(&chain_id)
    }

    /// Vaults on `chain_id`; empty for unsupported chains.
    pub fn vaults(&self, chain_id: ChainId) -> &[VaultConfig] {
        self.vaults.get(&chain_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Looks up a single vault.
    ///
    /// # Errors
    /// Returns [`DataError::UnsupportedChain`] or [`DataError::UnknownVault`].
    pub fn get(&self, chain_id: ChainId, vault_id: u32) -> Result<&VaultConfig, DataError> {
        let vaults = self
            .vaults
            .get(&chain_id)
            .ok_or(DataError::UnsupportedChain(chain_id))?;
        vaults
            .iter()
            .find(|v| v.id == vault_id)
            .ok_or(DataError::UnknownVault { chain_id, vault_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = VaultRegistry::builtin();
        assert_eq!(registry.supported_chains(), vec![ChainId::BSC]);
        assert!(!registry.is_supported(ChainId::ETHEREUM));

        let vault = registry.get(ChainId::BSC, 1).unwrap();
        assert_eq!(vault.name, "ICHI");
        assert_eq!(vault.pair_symbol(), "CAKE-USDT");
        assert_eq!(vault.manager_fee.rate.to_bps(), 100);
        assert_eq!(vault.earning_label(), "CAKE + Fees");
        assert_eq!(vault.price_from_v3_farm_pid, Some(3));
    }

    #[test]
    fn test_lookup_errors() {
        let registry = VaultRegistry::builtin();
        assert!(matches!(
            registry.get(ChainId::ETHEREUM, 1),
            Err(DataError::UnsupportedChain(ChainId::ETHEREUM))
        ));
        assert!(matches!(
            registry.get(ChainId::BSC, 99),
            Err(DataError::UnknownVault { vault_id: 99, .. })
        ));
        assert!(registry.vaults(ChainId::ETHEREUM).is_empty());
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut registry = VaultRegistry::builtin();
        let mut vault = registry.get(ChainId::BSC, 1).unwrap().clone();
        vault.name = "ICHI v2".to_string();
        registry.insert(ChainId::BSC, vault);

        assert_eq!(registry.vaults(ChainId::BSC).len(), 1);
        assert_eq!(registry.get(ChainId::BSC, 1).unwrap().name, "ICHI v2");
    }
}

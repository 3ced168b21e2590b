//! Domain model for position manager vaults.
//!
//! This crate holds the valuation and yield core shared by the data layer
//! and the CLI:
//! - Token amounts in smallest units with exact decimal scaling
//! - Known/unknown USD prices
//! - Total staked value of a vault position
//! - Fee, reward and total APR
//! - Static vault configuration types
//!
//! Everything here is synchronous and free of I/O.

/// Prelude module for convenient imports.
pub mod prelude;

/// Shared constants.
pub mod constants;
/// Vault and token entities.
pub mod entities;
/// Strategy, manager and fee-type enums.
pub mod enums;
/// Error types.
pub mod error;
/// Pool fee tiers.
pub mod fees;
/// Decimal scaling helpers.
pub mod math;
/// Valuation and yield engines.
pub mod metrics;
/// Value objects.
pub mod value_objects;

pub use error::DomainError;
pub use metrics::{AprInputs, ValuationEngine, YieldEngine};

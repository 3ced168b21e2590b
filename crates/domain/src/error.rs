//! Error types for domain value construction.
//!
//! The valuation and yield engines never fail; these errors only surface when
//! building value objects from untrusted input (configuration tables, CLI
//! arguments, feed payloads).

use thiserror::Error;

/// Errors raised while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Decimal precision outside the representable range.
    #[error("invalid decimals {0}: must be 0..={max}", max = crate::constants::MAX_DECIMALS)]
    InvalidDecimals(u8),

    /// Prices are quoted as non-negative USD values.
    #[error("price must be non-negative, got {0}")]
    NegativePrice(String),

    /// A smallest-unit amount string could not be parsed as an unsigned integer.
    #[error("invalid token amount '{0}'")]
    InvalidAmount(String),

    /// A decimal string could not be parsed.
    #[error("invalid decimal '{0}'")]
    InvalidDecimal(String),
}

//! Time and precision constants shared across the workspace.

/// Days used to annualize the trailing fee average.
pub const DAYS_PER_YEAR: u32 = 365;

/// Seconds in a 365-day year. Every annualization of a per-second rate uses
/// this value.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Largest token precision whose smallest unit is exactly representable as a
/// `Decimal` scale.
pub const MAX_DECIMALS: u8 = 28;

/// Decimal places used when rendering USD and APR figures.
pub const DISPLAY_DECIMALS: u32 = 2;

pub mod apr;
pub mod fees;
pub mod rewards;
pub mod valuation;

pub use apr::{AprInputs, YieldEngine};
pub use valuation::{ValuationEngine, token_value_usd};

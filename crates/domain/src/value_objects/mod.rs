pub mod amount;
pub mod apr;
pub mod chain;
pub mod percentage;
pub mod position;
pub mod price;
pub mod reward;
pub mod usd;

pub use amount::{Decimals, TokenAmount};
pub use apr::{Apr, AprBreakdown};
pub use chain::ChainId;
pub use percentage::Percentage;
pub use position::VaultPosition;
pub use price::{Price, PriceQuote};
pub use reward::{PendingReward, RewardRate};
pub use usd::UsdValue;

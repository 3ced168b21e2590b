pub mod token;
pub mod vault;

// Re-export for easier access
pub use token::Token;
pub use vault::{ManagerFee, VaultConfig};

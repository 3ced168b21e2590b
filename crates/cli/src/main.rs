//! Command Line Interface for position manager vault valuation.
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use pm_vaults_data::models::DEFAULT_CALCULATION_DAYS;
use pm_vaults_data::providers::{FeeAverageClientConfig, PositionManagerApiProvider};
use pm_vaults_data::{
    AprDataInfo, FeeAverageProvider, VaultPrices, VaultRegistry, find_fee_average,
    summarize_user, summarize_vault,
};
use pm_vaults_domain::value_objects::{
    ChainId, PendingReward, Price, PriceQuote, TokenAmount, VaultPosition,
};
use prettytable::{Table, row};
use rust_decimal::Decimal;
use tracing::info;

#[derive(Parser)]
#[command(name = "pm-vaults")]
#[command(about = "Position manager vault valuation and APR CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured vaults on a chain
    Vaults {
        /// Chain id (e.g., 56 for BSC)
        #[arg(short, long, default_value_t = 56)]
        chain_id: u64,
    },
    /// Compute staked value and APR of a vault
    Apr {
        /// Chain id (e.g., 56 for BSC)
        #[arg(short, long, default_value_t = 56)]
        chain_id: u64,

        /// Vault id within the chain
        #[arg(short, long)]
        vault_id: u32,

        /// Pool balance of token0, in smallest units
        #[arg(long)]
        pool_token0: String,

        /// Pool balance of token1, in smallest units
        #[arg(long)]
        pool_token1: String,

        /// USD price of token0 (omit if unknown)
        #[arg(long)]
        price0: Option<Price>,

        /// USD price of token1 (omit if unknown)
        #[arg(long)]
        price1: Option<Price>,

        /// USD price of the reward token (omit if unknown)
        #[arg(long)]
        reward_price: Option<Price>,

        /// Trailing average of token0, in smallest units. Skips the feed.
        #[arg(long, requires = "avg_token1")]
        avg_token0: Option<Decimal>,

        /// Trailing average of token1, in smallest units. Skips the feed.
        #[arg(long, requires = "avg_token0")]
        avg_token1: Option<Decimal>,

        /// Fee-average service URL (defaults to POSITION_MANAGER_API)
        #[arg(long)]
        api_url: Option<String>,

        /// Trailing window requested from the feed
        #[arg(long, default_value_t = DEFAULT_CALCULATION_DAYS)]
        days: u32,
    },
    /// Value a depositor's stake and pending rewards
    Position {
        /// Chain id (e.g., 56 for BSC)
        #[arg(short, long, default_value_t = 56)]
        chain_id: u64,

        /// Vault id within the chain
        #[arg(short, long)]
        vault_id: u32,

        /// Staked token0, in smallest units
        #[arg(long)]
        staked0: String,

        /// Staked token1, in smallest units
        #[arg(long)]
        staked1: String,

        /// Unclaimed reward, in smallest units
        #[arg(long, default_value = "0")]
        pending_reward: String,

        /// USD price of token0 (omit if unknown)
        #[arg(long)]
        price0: Option<Price>,

        /// USD price of token1 (omit if unknown)
        #[arg(long)]
        price1: Option<Price>,

        /// USD price of the reward token (omit if unknown)
        #[arg(long)]
        reward_price: Option<Price>,
    },
}

fn prices(
    price0: Option<Price>,
    price1: Option<Price>,
    reward_price: Option<Price>,
) -> VaultPrices {
    VaultPrices {
        token0: PriceQuote::from(price0),
        token1: PriceQuote::from(price1),
        reward_token: PriceQuote::from(reward_price),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let registry = VaultRegistry::builtin();

    match cli.command {
        Commands::Vaults { chain_id } => {
            let chain_id = ChainId(chain_id);
            let vaults = registry.vaults(chain_id);
            if vaults.is_empty() {
                println!("❌ No vaults configured on chain {chain_id}.");
                return Ok(());
            }

            let mut table = Table::new();
            table.add_row(row![
                "ID", "Pair", "Manager", "Strategy", "Fee Tier", "Deposit", "Earn", "Vault"
            ]);
            for vault in vaults {
                let deposit = vault
                    .deposit_tokens()
                    .iter()
                    .map(|t| t.symbol.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                table.add_row(row![
                    vault.id,
                    vault.pair_symbol(),
                    vault.manager,
                    vault.strategy,
                    format!("{}%", vault.fee_tier.rate().as_percent().normalize()),
                    deposit,
                    vault.earning_label(),
                    vault.address,
                ]);
            }
            table.printstd();
        }
        Commands::Apr {
            chain_id,
            vault_id,
            pool_token0,
            pool_token1,
            price0,
            price1,
            reward_price,
            avg_token0,
            avg_token1,
            api_url,
            days,
        } => {
            let chain_id = ChainId(chain_id);
            let vault = registry.get(chain_id, vault_id)?;
            let pool = VaultPosition::new(
                TokenAmount::from_raw_str(&pool_token0, vault.currency_a.decimals)?,
                TokenAmount::from_raw_str(&pool_token1, vault.currency_b.decimals)?,
            );

            let feed = match (avg_token0, avg_token1) {
                (Some(token0), Some(token1)) => vec![AprDataInfo {
                    token0,
                    token1,
                    chain_id,
                    lp_address: vault.lp_address.clone(),
                    calculation_days: days,
                }],
                _ => {
                    let config = api_url
                        .map(FeeAverageClientConfig::new)
                        .or_else(FeeAverageClientConfig::from_env);
                    match config {
                        Some(config) => {
                            println!("📡 Fetching {days}-day fee averages...");
                            let provider = PositionManagerApiProvider::new(
                                config.with_calculation_days(days),
                                registry.supported_chains(),
                            )?;
                            provider.fetch_fee_averages(chain_id).await
                        }
                        None => {
                            info!("No fee-average service configured");
                            Vec::new()
                        }
                    }
                }
            };

            let fee_average = find_fee_average(&feed, chain_id, &vault.lp_address);
            let summary = summarize_vault(
                chain_id,
                vault,
                &pool,
                fee_average,
                &prices(price0, price1, reward_price),
            );

            let days_label = summary
                .calculation_days
                .map_or_else(|| "n/a".to_string(), |d| d.to_string());

            let mut table = Table::new();
            table.add_row(row!["Vault", format!("{} ({})", summary.name, summary.pair)]);
            table.add_row(row!["Earn", summary.earning]);
            table.add_row(row!["Total Staked", summary.total_staked_usd]);
            table.add_row(row!["Avg Token0", summary.avg_token0_amount.normalize()]);
            table.add_row(row!["Avg Token1", summary.avg_token1_amount.normalize()]);
            table.add_row(row!["Window (days)", days_label]);
            table.add_row(row!["Fee APR", summary.apr.fee_apr]);
            table.add_row(row!["Reward APR", summary.apr.reward_apr]);
            table.add_row(row!["Total APR", summary.apr.total_apr]);
            table.printstd();
        }
        Commands::Position {
            chain_id,
            vault_id,
            staked0,
            staked1,
            pending_reward,
            price0,
            price1,
            reward_price,
        } => {
            let vault = registry.get(ChainId(chain_id), vault_id)?;
            let staked = VaultPosition::new(
                TokenAmount::from_raw_str(&staked0, vault.currency_a.decimals)?,
                TokenAmount::from_raw_str(&staked1, vault.currency_b.decimals)?,
            );
            let reward = PendingReward::new(TokenAmount::from_raw_str(
                &pending_reward,
                vault.earning_token.decimals,
            )?);
            let user = summarize_user(&staked, &reward, &prices(price0, price1, reward_price));

            let mut table = Table::new();
            table.add_row(row![
                format!("{} Staked", vault.currency_a.symbol),
                user.token0_usd
            ]);
            table.add_row(row![
                format!("{} Staked", vault.currency_b.symbol),
                user.token1_usd
            ]);
            table.add_row(row!["Total Staked", user.staked_usd]);
            table.add_row(row![
                format!("Pending {}", vault.earning_token.symbol),
                user.pending_reward.normalize()
            ]);
            table.add_row(row!["Pending (USD)", user.pending_reward_usd]);
            let harvest = if user.can_harvest {
                "ready"
            } else {
                "nothing to harvest"
            };
            table.add_row(row!["Harvest", harvest]);
            table.printstd();
        }
    }

    Ok(())
}

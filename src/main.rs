//! HARVESTER — auto-compounding agent for MasterChef-style LP farms
//!
//! Entry point. Loads configuration, initialises structured logging,
//! derives the wallet from the mnemonic, and runs one
//! claim → swap → add-liquidity → stake cycle. Scheduling is external
//! (cron); any error aborts the process with a non-zero exit.

use anyhow::Result;
use secrecy::SecretString;
use tracing::info;

use harvester::chain::farm::FarmClient;
use harvester::chain::router::RouterClient;
use harvester::chain::token::Erc20Client;
use harvester::config;
use harvester::engine::{CompoundPlan, Compounder};
use harvester::types::{GasSettings, LiquidityPool};
use harvester::{amounts, chain};

const BANNER: &str = r#"
 _   _    _    ______     _______ ____ _____ _____ ____
| | | |  / \  |  _ \ \   / / ____/ ___|_   _| ____|  _ \
| |_| | / _ \ | |_) \ \ / /|  _| \___ \ | | |  _| | |_) |
|  _  |/ ___ \|  _ < \ V / | |___ ___) || | | |___|  _ <
|_| |_/_/   \_\_| \_\ \_/  |_____|____/ |_| |_____|_| \_\

  LP farm auto-compounder
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML
    let cfg = config::AppConfig::load("config.toml")?;

    // Initialise structured logging
    init_logging();

    // Print startup banner
    println!("{BANNER}");
    info!(
        farm = %cfg.farm.name,
        pool = %cfg.pool.name,
        router = %cfg.router.name,
        gas_price_gwei = cfg.gas.price_gwei,
        gas_limit = cfg.gas.limit,
        deadline_secs = amounts::DEADLINE_SECS,
        "HARVESTER starting up"
    );

    // -- Wallet + provider ------------------------------------------------

    let node_url = config::AppConfig::resolve_env(&cfg.network.node_url_env)?;
    let mnemonic = SecretString::new(config::AppConfig::resolve_env(&cfg.wallet.mnemonic_env)?);
    let (provider, owner) = chain::connect(&node_url, &mnemonic, cfg.network.chain_id)?;

    // -- Contract clients -------------------------------------------------

    let gas = GasSettings::from_gwei(cfg.gas.price_gwei, cfg.gas.limit);
    let explorer = cfg.network.explorer_tx_url.clone();

    let farm = FarmClient::new(
        cfg.farm.name.clone(),
        cfg.farm.address,
        provider.clone(),
        gas,
        explorer.clone(),
    );
    let router = RouterClient::new(
        cfg.router.name.clone(),
        cfg.router.address,
        provider.clone(),
        gas,
        explorer.clone(),
    );
    let tokens = Erc20Client::new(provider, gas, explorer);

    let plan = CompoundPlan {
        owner,
        reward: cfg.tokens.reward.clone(),
        paired: cfg.tokens.paired.clone(),
        pool: LiquidityPool {
            name: cfg.pool.name.clone(),
            pid: cfg.pool.pid,
            lp_token: cfg.pool.lp_token,
        },
        farm_address: cfg.farm.address,
        router_address: cfg.router.address,
    };

    // -- Run one compound cycle -------------------------------------------

    let compounder = Compounder::new(farm, router, tokens, plan);
    let report = compounder.run().await?;

    info!(%report, "Compound cycle complete");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("harvester=info"));

    let json_logging = std::env::var("HARVESTER_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}

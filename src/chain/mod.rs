//! On-chain integrations.
//!
//! Defines the `RewardFarm`, `AmmRouter`, and `TokenOps` traits and provides
//! implementations backed by `alloy` contract bindings:
//! - `FarmClient` — MasterChef-style reward farm (claim, stake, pending query)
//! - `RouterClient` — UniswapV2-style AMM router (quote, swap, add liquidity)
//! - `Erc20Client` — token balance and allowance management
//!
//! Also owns wallet and provider construction from the mnemonic seed phrase.

pub mod bindings;
pub mod farm;
pub mod router;
pub mod token;

use alloy::network::Ethereum;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::signers::local::{coins_bip39::English, MnemonicBuilder};
use anyhow::{Context, Result};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use crate::types::{explorer_tx_link, HarvestError, TxOutcome};

// ---------------------------------------------------------------------------
// Contract seams
// ---------------------------------------------------------------------------

/// A staking contract that distributes a reward token proportional to
/// deposited LP tokens. A zero-amount withdrawal pays out pending rewards.
#[async_trait]
pub trait RewardFarm: Send + Sync {
    /// Pending (unclaimed) reward amount for a user in a pool.
    async fn pending_rewards(&self, pid: u64, user: Address) -> Result<U256>;

    /// Withdraw LP tokens from a pool. `amount` of zero claims rewards only.
    async fn withdraw(&self, pid: u64, amount: U256) -> Result<TxOutcome>;

    /// Deposit LP tokens into a pool.
    async fn deposit(&self, pid: u64, amount: U256) -> Result<TxOutcome>;
}

/// A UniswapV2-style AMM router.
#[async_trait]
pub trait AmmRouter: Send + Sync {
    /// Quote the output amounts along a swap path for a given input.
    async fn amounts_out(&self, amount_in: U256, path: &[Address]) -> Result<Vec<U256>>;

    /// Swap an exact input amount for at least `amount_out_min` along `path`.
    async fn swap_exact_tokens(
        &self,
        amount_in: U256,
        amount_out_min: U256,
        path: &[Address],
        to: Address,
        deadline: U256,
    ) -> Result<TxOutcome>;

    /// Add liquidity for a token pair with minimum-amount protection.
    #[allow(clippy::too_many_arguments)]
    async fn add_liquidity(
        &self,
        token_a: Address,
        token_b: Address,
        amount_a_desired: U256,
        amount_b_desired: U256,
        amount_a_min: U256,
        amount_b_min: U256,
        to: Address,
        deadline: U256,
    ) -> Result<TxOutcome>;
}

/// ERC20 balance queries and allowance management.
#[async_trait]
pub trait TokenOps: Send + Sync {
    /// Token balance of `owner`.
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256>;

    /// Make sure `spender` may move at least `amount` of `token` from
    /// `owner`, submitting an unlimited approval when it may not.
    async fn ensure_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Wallet + provider
// ---------------------------------------------------------------------------

/// Build a signing provider from the mnemonic seed phrase (account index 0)
/// and return it together with the wallet address.
pub fn connect(
    node_url: &str,
    mnemonic: &SecretString,
    chain_id: u64,
) -> Result<(DynProvider, Address)> {
    let phrase = mnemonic.expose_secret().trim().to_string();
    if phrase.is_empty() {
        return Err(HarvestError::Config("mnemonic seed phrase is empty".into()).into());
    }

    let signer = MnemonicBuilder::<English>::default()
        .phrase(phrase)
        .index(0)
        .context("Invalid wallet derivation index")?
        .build()
        .context("Failed to derive wallet from mnemonic")?;
    let owner = signer.address();

    let provider = ProviderBuilder::new()
        .wallet(signer)
        .with_chain_id(chain_id)
        .connect_http(node_url.parse().context("Invalid node URL")?)
        .erased();

    info!(wallet = %owner, chain_id, "Wallet connected");
    Ok((provider, owner))
}

// ---------------------------------------------------------------------------
// Shared transaction handling
// ---------------------------------------------------------------------------

/// Wait for a submitted transaction to be mined, failing on revert status.
/// Logs the explorer link on submission and the gas used on inclusion.
pub(crate) async fn confirm(
    op: &'static str,
    explorer: &str,
    pending: PendingTransactionBuilder<Ethereum>,
) -> Result<TxOutcome> {
    let hash = *pending.tx_hash();
    info!(op, link = %explorer_tx_link(explorer, &hash), "Transaction submitted");

    let receipt = pending
        .get_receipt()
        .await
        .with_context(|| format!("{op} transaction was not mined"))?;

    if !receipt.status() {
        return Err(HarvestError::Reverted {
            op,
            hash: receipt.transaction_hash,
        }
        .into());
    }

    info!(
        op,
        gas_used = receipt.gas_used,
        block = receipt.block_number,
        "Transaction mined"
    );

    Ok(TxOutcome {
        hash: receipt.transaction_hash,
        gas_used: receipt.gas_used,
        block_number: receipt.block_number,
    })
}

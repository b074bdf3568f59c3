//! Core types shared across the agent.
//!
//! These are passive descriptors of on-chain resources — constructed once
//! from configuration and read for the process lifetime — plus the report
//! and error types the engine produces.

use alloy::primitives::{utils::format_ether, TxHash, U256};
use serde::Deserialize;
use std::fmt;

// ---------------------------------------------------------------------------
// On-chain resource descriptors
// ---------------------------------------------------------------------------

/// An ERC20 token: display name and deployed contract address.
#[derive(Debug, Deserialize, Clone)]
pub struct Token {
    pub name: String,
    pub address: alloy::primitives::Address,
}

/// A liquidity pool registered with the farm.
#[derive(Debug, Clone)]
pub struct LiquidityPool {
    pub name: String,
    /// The farm's registration index for this pool.
    pub pid: u64,
    /// Address of the LP share token.
    pub lp_token: alloy::primitives::Address,
}

/// Fixed gas overrides applied to every transaction.
#[derive(Debug, Clone, Copy)]
pub struct GasSettings {
    pub price_wei: u128,
    pub limit: u64,
}

impl GasSettings {
    pub fn from_gwei(price_gwei: u64, limit: u64) -> Self {
        Self {
            price_wei: price_gwei as u128 * 1_000_000_000,
            limit,
        }
    }
}

// ---------------------------------------------------------------------------
// Transaction outcomes
// ---------------------------------------------------------------------------

/// Summary of a mined transaction.
#[derive(Debug, Clone)]
pub struct TxOutcome {
    pub hash: TxHash,
    pub gas_used: u64,
    pub block_number: Option<u64>,
}

/// Block explorer link for a transaction hash.
pub fn explorer_tx_link(base: &str, hash: &TxHash) -> String {
    format!("{base}/{hash}")
}

// ---------------------------------------------------------------------------
// Cycle report
// ---------------------------------------------------------------------------

/// Summary of one full claim → swap → add-liquidity → stake cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// Pending rewards at the start of the cycle.
    pub rewards_claimed: U256,
    /// Reward tokens sold in the swap step (half the wallet balance).
    pub reward_swapped: U256,
    /// Slippage floor applied to the swap (95% of the quoted output).
    pub swap_min_out: U256,
    /// Desired reward-side amount submitted to the liquidity add.
    pub liquidity_reward: U256,
    /// Desired paired-side amount submitted to the liquidity add.
    pub liquidity_paired: U256,
    /// LP tokens deposited back into the farm.
    pub lp_staked: U256,
    /// Transactions submitted and mined this cycle.
    pub txs: u32,
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "claimed={} swapped={} liquidity=({}, {}) staked={} txs={}",
            format_ether(self.rewards_claimed),
            format_ether(self.reward_swapped),
            format_ether(self.liquidity_reward),
            format_ether(self.liquidity_paired),
            format_ether(self.lp_staked),
            self.txs,
        )
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for HARVESTER.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{op} transaction reverted: {hash}")]
    Reverted { op: &'static str, hash: TxHash },

    #[error("Router quote returned {0} amounts, expected at least 2")]
    ShortQuote(usize),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

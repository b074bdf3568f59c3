//! Amount arithmetic for swaps and liquidity adds.
//!
//! All math is done in the token's smallest unit with `U256`, so division
//! truncates — the same behavior the router contracts use on-chain.

use alloy::primitives::U256;
use chrono::{DateTime, Utc};

/// Divisor for the slippage floor: quote - quote/20 keeps 95% of the quote.
const SLIPPAGE_DIVISOR: u64 = 20;

/// Transaction validity window passed to the router, in seconds.
pub const DEADLINE_SECS: u64 = 600;

/// Minimum acceptable output for a quoted amount: 95% of the quote.
pub fn slippage_floor(quote: U256) -> U256 {
    quote - quote / U256::from(SLIPPAGE_DIVISOR)
}

/// Half of a wallet balance, floored.
pub fn half_balance(balance: U256) -> U256 {
    balance / U256::from(2u64)
}

/// Router deadline: ten minutes from `now`, as a unix timestamp.
pub fn tx_deadline(now: DateTime<Utc>) -> U256 {
    U256::from(now.timestamp() as u64 + DEADLINE_SECS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

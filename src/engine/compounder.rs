//! Compound cycle orchestration.
//!
//! Runs the fixed four-step sequence against the chain clients, re-reading
//! live balances between steps. There is no retry and no partial-failure
//! recovery: the first error aborts the remaining steps, and a re-run picks
//! up from whatever the chain state is at that point.

use alloy::primitives::{utils::format_ether, Address, U256};
use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::amounts::{half_balance, slippage_floor, tx_deadline};
use crate::chain::{AmmRouter, RewardFarm, TokenOps};
use crate::types::{CycleReport, HarvestError, LiquidityPool, Token};

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// Everything the compounder needs to know about the wallet, the pair, and
/// the contracts it is compounding into. Constructed once from config.
#[derive(Debug, Clone)]
pub struct CompoundPlan {
    pub owner: Address,
    pub reward: Token,
    pub paired: Token,
    pub pool: LiquidityPool,
    /// Farm contract — spender for staked LP tokens.
    pub farm_address: Address,
    /// Router contract — spender for swapped and pooled tokens.
    pub router_address: Address,
}

impl CompoundPlan {
    /// Swap path from the reward token to the paired token.
    pub fn swap_path(&self) -> [Address; 2] {
        [self.reward.address, self.paired.address]
    }
}

// ---------------------------------------------------------------------------
// Compounder
// ---------------------------------------------------------------------------

/// Sequences the four remote operations of a compound cycle.
pub struct Compounder<F, R, T> {
    farm: F,
    router: R,
    tokens: T,
    plan: CompoundPlan,
}

impl<F, R, T> Compounder<F, R, T>
where
    F: RewardFarm,
    R: AmmRouter,
    T: TokenOps,
{
    pub fn new(farm: F, router: R, tokens: T, plan: CompoundPlan) -> Self {
        Self {
            farm,
            router,
            tokens,
            plan,
        }
    }

    /// Run one full claim → swap → add-liquidity → stake cycle.
    pub async fn run(&self) -> Result<CycleReport> {
        let plan = &self.plan;
        info!(pool = %plan.pool.name, wallet = %plan.owner, "Starting compound cycle");

        // 1. Claim rewards
        let claimed = self.claim_rewards().await?;

        // 2. Swap half the reward balance for the paired token
        let balance = self
            .tokens
            .balance_of(plan.reward.address, plan.owner)
            .await?;
        info!(
            balance = %format_ether(balance),
            token = %plan.reward.name,
            "Reward balance in wallet"
        );
        let half = half_balance(balance);
        let min_out = self.swap_rewards(half).await?;

        // 3. Pool the remaining rewards with the swapped-for paired tokens
        let remaining = self
            .tokens
            .balance_of(plan.reward.address, plan.owner)
            .await?;
        let (desired_reward, desired_paired) = self.provide_liquidity(remaining).await?;

        // 4. Stake the LP tokens back into the farm
        let staked = self.stake_lp().await?;

        Ok(CycleReport {
            rewards_claimed: claimed,
            reward_swapped: half,
            swap_min_out: min_out,
            liquidity_reward: desired_reward,
            liquidity_paired: desired_paired,
            lp_staked: staked,
            txs: 4,
        })
    }

    /// Claim pending rewards via a zero-amount withdrawal, logging the
    /// pending amount before and after for confirmation.
    async fn claim_rewards(&self) -> Result<U256> {
        let plan = &self.plan;
        info!(pool = %plan.pool.name, "Claiming rewards");

        let pending = self
            .farm
            .pending_rewards(plan.pool.pid, plan.owner)
            .await?;
        info!(
            pending = %format_ether(pending),
            token = %plan.reward.name,
            "Pending rewards before claim"
        );

        self.farm.withdraw(plan.pool.pid, U256::ZERO).await?;

        let after = self
            .farm
            .pending_rewards(plan.pool.pid, plan.owner)
            .await?;
        info!(
            pending = %format_ether(after),
            token = %plan.reward.name,
            "Pending rewards after claim"
        );

        Ok(pending)
    }

    /// Sell `amount_in` reward tokens for the paired token, floored at 95%
    /// of the quoted output. Returns the floor that was applied.
    async fn swap_rewards(&self, amount_in: U256) -> Result<U256> {
        let plan = &self.plan;
        let path = plan.swap_path();

        let amounts = self.router.amounts_out(amount_in, &path).await?;
        let quote = quoted_output(&amounts)?;
        let min_out = slippage_floor(quote);

        info!(
            sell = %plan.reward.name,
            buy = %plan.paired.name,
            amount_in = %format_ether(amount_in),
            min_out = %format_ether(min_out),
            "Swapping rewards"
        );

        self.tokens
            .ensure_allowance(plan.reward.address, plan.owner, plan.router_address, amount_in)
            .await?;

        self.router
            .swap_exact_tokens(
                amount_in,
                min_out,
                &path,
                plan.owner,
                tx_deadline(Utc::now()),
            )
            .await?;

        Ok(min_out)
    }

    /// Add the remaining reward balance plus the quoted paired amount as
    /// liquidity, with 95%-of-quote minimums on both sides. Returns the
    /// desired amounts submitted.
    async fn provide_liquidity(&self, reward_balance: U256) -> Result<(U256, U256)> {
        let plan = &self.plan;
        let path = plan.swap_path();

        let amounts = self.router.amounts_out(reward_balance, &path).await?;
        let desired_paired = quoted_output(&amounts)?;
        let desired_reward = amounts[0];

        info!(
            pool = %plan.pool.name,
            reward = %format_ether(desired_reward),
            paired = %format_ether(desired_paired),
            "Adding liquidity"
        );

        self.tokens
            .ensure_allowance(
                plan.reward.address,
                plan.owner,
                plan.router_address,
                desired_reward,
            )
            .await?;
        self.tokens
            .ensure_allowance(
                plan.paired.address,
                plan.owner,
                plan.router_address,
                desired_paired,
            )
            .await?;

        self.router
            .add_liquidity(
                plan.reward.address,
                plan.paired.address,
                desired_reward,
                desired_paired,
                slippage_floor(desired_reward),
                slippage_floor(desired_paired),
                plan.owner,
                tx_deadline(Utc::now()),
            )
            .await?;

        Ok((desired_reward, desired_paired))
    }

    /// Stake the wallet's full LP token balance into the farm.
    async fn stake_lp(&self) -> Result<U256> {
        let plan = &self.plan;

        let lp_balance = self
            .tokens
            .balance_of(plan.pool.lp_token, plan.owner)
            .await?;
        info!(
            amount = %format_ether(lp_balance),
            pool = %plan.pool.name,
            "Staking LP tokens"
        );

        self.tokens
            .ensure_allowance(plan.pool.lp_token, plan.owner, plan.farm_address, lp_balance)
            .await?;

        self.farm.deposit(plan.pool.pid, lp_balance).await?;

        Ok(lp_balance)
    }
}

/// Last amount of a router quote — the output side of the path.
fn quoted_output(amounts: &[U256]) -> Result<U256> {
    if amounts.len() < 2 {
        return Err(HarvestError::ShortQuote(amounts.len()).into());
    }
    Ok(amounts[amounts.len() - 1])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

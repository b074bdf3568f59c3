//! ERC20 token client.
//!
//! One client serves every token the agent touches — the reward token, the
//! paired token, and the LP share token — since all calls take the token
//! address explicitly.

use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use super::bindings::IERC20;
use super::{confirm, TokenOps};
use crate::types::GasSettings;

/// ERC20 balance and allowance client.
pub struct Erc20Client {
    provider: DynProvider,
    gas: GasSettings,
    explorer: String,
}

impl Erc20Client {
    pub fn new(provider: DynProvider, gas: GasSettings, explorer: String) -> Self {
        Self {
            provider,
            gas,
            explorer,
        }
    }
}

#[async_trait]
impl TokenOps for Erc20Client {
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256> {
        IERC20::new(token, self.provider.clone())
            .balanceOf(owner)
            .call()
            .await
            .with_context(|| format!("balanceOf query failed for token {token}"))
    }

    async fn ensure_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<()> {
        let erc20 = IERC20::new(token, self.provider.clone());

        let allowance = erc20
            .allowance(owner, spender)
            .call()
            .await
            .with_context(|| format!("allowance query failed for token {token}"))?;

        if allowance >= amount {
            return Ok(());
        }

        info!(token = %token, spender = %spender, "Allowance too low — approving");

        let pending = erc20
            .approve(spender, U256::MAX)
            .gas_price(self.gas.price_wei)
            .gas(self.gas.limit)
            .send()
            .await
            .with_context(|| format!("approve submission failed for token {token}"))?;

        confirm("approve", &self.explorer, pending).await?;
        Ok(())
    }
}

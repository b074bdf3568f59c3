//! AMM router client.

use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;

use super::bindings::IUniswapV2Router;
use super::{confirm, AmmRouter};
use crate::types::{GasSettings, TxOutcome};

/// Client for a deployed UniswapV2-style router contract.
pub struct RouterClient {
    name: String,
    contract: IUniswapV2Router::IUniswapV2RouterInstance<DynProvider>,
    gas: GasSettings,
    explorer: String,
}

impl RouterClient {
    pub fn new(
        name: String,
        address: Address,
        provider: DynProvider,
        gas: GasSettings,
        explorer: String,
    ) -> Self {
        Self {
            name,
            contract: IUniswapV2Router::new(address, provider),
            gas,
            explorer,
        }
    }
}

#[async_trait]
impl AmmRouter for RouterClient {
    async fn amounts_out(&self, amount_in: U256, path: &[Address]) -> Result<Vec<U256>> {
        self.contract
            .getAmountsOut(amount_in, path.to_vec())
            .call()
            .await
            .with_context(|| format!("{} quote failed", self.name))
    }

    async fn swap_exact_tokens(
        &self,
        amount_in: U256,
        amount_out_min: U256,
        path: &[Address],
        to: Address,
        deadline: U256,
    ) -> Result<TxOutcome> {
        let pending = self
            .contract
            .swapExactTokensForTokens(amount_in, amount_out_min, path.to_vec(), to, deadline)
            .gas_price(self.gas.price_wei)
            .gas(self.gas.limit)
            .send()
            .await
            .with_context(|| format!("{} swap submission failed", self.name))?;

        confirm("swap", &self.explorer, pending).await
    }

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
    ) -> Result<TxOutcome> {
        let pending = self
            .contract
            .addLiquidity(
                token_a,
                token_b,
                amount_a_desired,
                amount_b_desired,
                amount_a_min,
                amount_b_min,
                to,
                deadline,
            )
            .gas_price(self.gas.price_wei)
            .gas(self.gas.limit)
            .send()
            .await
            .with_context(|| format!("{} add-liquidity submission failed", self.name))?;

        confirm("add_liquidity", &self.explorer, pending).await
    }
}

//! MasterChef reward farm client.
//!
//! The farm has no dedicated claim method: submitting a `withdraw` of zero
//! LP tokens pays out the caller's pending rewards.

use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;

use super::bindings::IMasterChef;
use super::{confirm, RewardFarm};
use crate::types::{GasSettings, TxOutcome};

/// Client for a deployed MasterChef-style farm contract.
pub struct FarmClient {
    name: String,
    contract: IMasterChef::IMasterChefInstance<DynProvider>,
    gas: GasSettings,
    explorer: String,
}

impl FarmClient {
    pub fn new(
        name: String,
        address: Address,
        provider: DynProvider,
        gas: GasSettings,
        explorer: String,
    ) -> Self {
        Self {
            name,
            contract: IMasterChef::new(address, provider),
            gas,
            explorer,
        }
    }
}

#[async_trait]
impl RewardFarm for FarmClient {
    async fn pending_rewards(&self, pid: u64, user: Address) -> Result<U256> {
        self.contract
            .pendingDino(U256::from(pid), user)
            .call()
            .await
            .with_context(|| format!("{} pending-reward query failed", self.name))
    }

    async fn withdraw(&self, pid: u64, amount: U256) -> Result<TxOutcome> {
        let pending = self
            .contract
            .withdraw(U256::from(pid), amount)
            .gas_price(self.gas.price_wei)
            .gas(self.gas.limit)
            .send()
            .await
            .with_context(|| format!("{} withdraw submission failed", self.name))?;

        confirm("withdraw", &self.explorer, pending).await
    }

    async fn deposit(&self, pid: u64, amount: U256) -> Result<TxOutcome> {
        let pending = self
            .contract
            .deposit(U256::from(pid), amount)
            .gas_price(self.gas.price_wei)
            .gas(self.gas.limit)
            .send()
            .await
            .with_context(|| format!("{} deposit submission failed", self.name))?;

        confirm("deposit", &self.explorer, pending).await
    }
}

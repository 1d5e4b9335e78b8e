// This file is part of the Holograph SDK.
//
// The Holograph SDK is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// The Holograph SDK is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with the Holograph SDK.
// If not, see https://www.gnu.org/licenses/.

//! Gateways to the Holograph protocol contracts.
//!
//! Both contracts are deployed at the same address on every chain of an environment, so each
//! gateway serves every configured chain and takes the EVM chain id of the call as argument.
//! Protocol arguments such as `to_chain` are holograph chain ids.

use alloy_primitives::{Address, Bytes, U256};
#[cfg(feature = "test-utils")]
use mockall::automock;

use super::error::ProviderResult;

/// Fees quoted by the bridge for a bridge-out request
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MessageFee {
    /// Protocol relay fee, paid to the operator
    pub hlg_fee: U256,
    /// Messaging layer fee
    pub msg_fee: U256,
    /// Gas price the messaging layer assumes on the destination chain
    pub dst_gas_price: U256,
}

impl MessageFee {
    /// Total fee due, without any margin
    pub fn total(&self) -> U256 {
        self.hlg_fee.saturating_add(self.msg_fee)
    }
}

/// Gateway to the `HolographBridge` contract
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait HolographBridge: Send + Sync {
    /// Address of the bridge contract
    fn address(&self) -> Address;

    /// Simulate `getBridgeOutRequestPayload` on `chain_id`, wrapping `payload` into the
    /// cross-chain request the operator executes on `to_chain`
    async fn get_bridge_out_request_payload(
        &self,
        chain_id: u64,
        to_chain: u32,
        contract: Address,
        gas_limit: U256,
        gas_price: U256,
        payload: Bytes,
    ) -> ProviderResult<Bytes>;

    /// Quote the fees of a bridge-out request on `chain_id`
    async fn get_message_fee(
        &self,
        chain_id: u64,
        to_chain: u32,
        gas_limit: U256,
        gas_price: U256,
        payload: Bytes,
    ) -> ProviderResult<MessageFee>;

    /// Encode the call data of `bridgeOutRequest`
    fn bridge_out_request_call_data(
        &self,
        to_chain: u32,
        contract: Address,
        gas_limit: U256,
        gas_price: U256,
        payload: Bytes,
    ) -> Bytes;
}

/// Gateway to the `HolographOperator` contract
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait HolographOperator: Send + Sync {
    /// Address of the operator contract
    fn address(&self) -> Address;

    /// Simulate `jobEstimator` on `chain_id` with a gas stipend of `gas`.
    ///
    /// Returns the gas left after executing the bridge-in job.
    async fn job_estimator(&self, chain_id: u64, payload: Bytes, gas: u64)
        -> ProviderResult<U256>;
}

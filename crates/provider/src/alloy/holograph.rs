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

use std::collections::HashMap;

use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::Provider as AlloyProvider;
use alloy_sol_types::SolCall;
use holograph_contracts::{
    functions::{
        FunctionDescriptor, GET_BRIDGE_OUT_REQUEST_PAYLOAD, GET_MESSAGE_FEE, JOB_ESTIMATOR,
    },
    holograph::{IHolographBridge, IHolographOperator},
};
use tracing::instrument;

use crate::{HolographBridge, HolographOperator, MessageFee, ProviderError, ProviderResult};

/// Per chain alloy providers shared by the contract gateways
#[derive(Clone, Debug)]
pub struct ChainProviders<AP> {
    providers: HashMap<u64, AP>,
    simulation_sender: Option<Address>,
}

impl<AP> ChainProviders<AP> {
    /// Create from a map of chain id to provider
    pub fn new(providers: HashMap<u64, AP>) -> Self {
        Self {
            providers,
            simulation_sender: None,
        }
    }

    /// Sender used when simulating state changing functions
    pub fn with_simulation_sender(mut self, sender: Option<Address>) -> Self {
        self.simulation_sender = sender;
        self
    }

    /// The provider of a chain
    pub fn get(&self, chain_id: u64) -> ProviderResult<&AP> {
        self.providers
            .get(&chain_id)
            .ok_or(ProviderError::ChainNotConfigured(chain_id))
    }

    /// Chain ids with a provider
    pub fn chain_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.providers.keys().copied()
    }

    fn sender_for(&self, function: &FunctionDescriptor) -> Option<Address> {
        if function.is_write() {
            self.simulation_sender
        } else {
            None
        }
    }
}

fn contract_error(function: &FunctionDescriptor, error: alloy_contract::Error) -> ProviderError {
    if let Some(data) = error.as_revert_data() {
        return ProviderError::Revert {
            function: function.to_string(),
            data,
        };
    }
    match error {
        alloy_contract::Error::TransportError(e) => ProviderError::RPC(e),
        e => ProviderError::ContractError(format!("{function}: {e}")),
    }
}

/// `HolographBridge` gateway using alloy contract bindings
#[derive(Clone, Debug)]
pub struct AlloyHolographBridge<AP> {
    address: Address,
    providers: ChainProviders<AP>,
}

impl<AP> AlloyHolographBridge<AP> {
    /// Create a new bridge gateway
    pub fn new(address: Address, providers: ChainProviders<AP>) -> Self {
        Self { address, providers }
    }
}

#[async_trait::async_trait]
impl<AP: AlloyProvider> HolographBridge for AlloyHolographBridge<AP> {
    fn address(&self) -> Address {
        self.address
    }

    #[instrument(skip(self, payload))]
    async fn get_bridge_out_request_payload(
        &self,
        chain_id: u64,
        to_chain: u32,
        contract: Address,
        gas_limit: U256,
        gas_price: U256,
        payload: Bytes,
    ) -> ProviderResult<Bytes> {
        let bridge = IHolographBridge::new(self.address, self.providers.get(chain_id)?);
        let mut call =
            bridge.getBridgeOutRequestPayload(to_chain, contract, gas_limit, gas_price, payload);
        if let Some(sender) = self.providers.sender_for(&GET_BRIDGE_OUT_REQUEST_PAYLOAD) {
            call = call.from(sender);
        }
        call.call()
            .await
            .map_err(|e| contract_error(&GET_BRIDGE_OUT_REQUEST_PAYLOAD, e))
    }

    #[instrument(skip(self, payload))]
    async fn get_message_fee(
        &self,
        chain_id: u64,
        to_chain: u32,
        gas_limit: U256,
        gas_price: U256,
        payload: Bytes,
    ) -> ProviderResult<MessageFee> {
        let bridge = IHolographBridge::new(self.address, self.providers.get(chain_id)?);
        let mut call = bridge.getMessageFee(to_chain, gas_limit, gas_price, payload);
        if let Some(sender) = self.providers.sender_for(&GET_MESSAGE_FEE) {
            call = call.from(sender);
        }
        let fee = call
            .call()
            .await
            .map_err(|e| contract_error(&GET_MESSAGE_FEE, e))?;
        Ok(MessageFee {
            hlg_fee: fee.hlgFee,
            msg_fee: fee.msgFee,
            dst_gas_price: fee.dstGasPrice,
        })
    }

    fn bridge_out_request_call_data(
        &self,
        to_chain: u32,
        contract: Address,
        gas_limit: U256,
        gas_price: U256,
        payload: Bytes,
    ) -> Bytes {
        encode_bridge_out_request(to_chain, contract, gas_limit, gas_price, payload)
    }
}

/// ABI encode a `bridgeOutRequest` call
pub fn encode_bridge_out_request(
    to_chain: u32,
    contract: Address,
    gas_limit: U256,
    gas_price: U256,
    payload: Bytes,
) -> Bytes {
    IHolographBridge::bridgeOutRequestCall {
        toChain: to_chain,
        holographableContract: contract,
        gasLimit: gas_limit,
        gasPrice: gas_price,
        bridgeOutPayload: payload,
    }
    .abi_encode()
    .into()
}

/// `HolographOperator` gateway using alloy contract bindings
#[derive(Clone, Debug)]
pub struct AlloyHolographOperator<AP> {
    address: Address,
    providers: ChainProviders<AP>,
}

impl<AP> AlloyHolographOperator<AP> {
    /// Create a new operator gateway
    pub fn new(address: Address, providers: ChainProviders<AP>) -> Self {
        Self { address, providers }
    }
}

#[async_trait::async_trait]
impl<AP: AlloyProvider> HolographOperator for AlloyHolographOperator<AP> {
    fn address(&self) -> Address {
        self.address
    }

    #[instrument(skip(self, payload))]
    async fn job_estimator(
        &self,
        chain_id: u64,
        payload: Bytes,
        gas: u64,
    ) -> ProviderResult<U256> {
        let operator = IHolographOperator::new(self.address, self.providers.get(chain_id)?);
        let mut call = operator.jobEstimator(payload).gas(gas);
        if let Some(sender) = self.providers.sender_for(&JOB_ESTIMATOR) {
            call = call.from(sender);
        }
        call.call()
            .await
            .map_err(|e| contract_error(&JOB_ESTIMATOR, e))
    }
}

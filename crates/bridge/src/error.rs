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

use alloy_primitives::U256;
use holograph_provider::ProviderError;
use holograph_types::NetworkNotFound;
use holograph_utils::eth::describe_revert;

/// Result of a bridge operation
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error type for bridge-out estimation and execution
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The account holder declined to sign
    #[error("signature request rejected")]
    SignatureRejected,
    /// The chain is not supported by the protocol
    #[error("network not found for chain id {chain_id}")]
    NetworkNotFound {
        /// EVM chain id
        chain_id: u64,
    },
    /// A simulated contract function reverted
    #[error("{contract}.{function} reverted: {cause}")]
    ContractReverted {
        /// Contract name
        contract: String,
        /// Function name
        function: String,
        /// Decoded revert message, or the hex encoded revert data
        cause: String,
    },
    /// No RPC connection is configured for the chain
    #[error("network unavailable for chain id {chain_id}")]
    NetworkUnavailable {
        /// EVM chain id
        chain_id: u64,
    },
    /// The wallet cannot pay for the bridge-out
    #[error("insufficient funds: required {required} wei, available {available} wei")]
    InsufficientFunds {
        /// Value plus maximum source gas cost
        required: U256,
        /// Wallet balance on the source chain
        available: U256,
    },
    /// Provider error
    #[error(transparent)]
    Provider(ProviderError),
    /// Wallet error
    #[error(transparent)]
    Signer(holograph_signer::Error),
    /// Other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<NetworkNotFound> for BridgeError {
    fn from(value: NetworkNotFound) -> Self {
        BridgeError::NetworkNotFound { chain_id: value.0 }
    }
}

impl From<ProviderError> for BridgeError {
    fn from(value: ProviderError) -> Self {
        match value {
            ProviderError::Revert { function, data } => {
                let (contract, function) = match function.split_once('.') {
                    Some((contract, function)) => (contract.to_string(), function.to_string()),
                    None => (String::new(), function),
                };
                BridgeError::ContractReverted {
                    contract,
                    function,
                    cause: describe_revert(&data),
                }
            }
            ProviderError::ChainNotConfigured(chain_id) => {
                BridgeError::NetworkUnavailable { chain_id }
            }
            e => BridgeError::Provider(e),
        }
    }
}

impl From<holograph_signer::Error> for BridgeError {
    fn from(value: holograph_signer::Error) -> Self {
        match value {
            holograph_signer::Error::Rejected => BridgeError::SignatureRejected,
            holograph_signer::Error::ChainNotConfigured(chain_id) => {
                BridgeError::NetworkUnavailable { chain_id }
            }
            holograph_signer::Error::ProviderError(e) => e.into(),
            e => BridgeError::Signer(e),
        }
    }
}

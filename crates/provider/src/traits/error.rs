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

use alloy_primitives::Bytes;
use alloy_transport::TransportError;
use holograph_utils::eth::describe_revert;

/// Result of a provider method call
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error enumeration for the provider traits
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// JSON-RPC error
    #[error(transparent)]
    RPC(#[from] TransportError),
    /// Contract Error
    #[error("Contract Error: {0}")]
    ContractError(String),
    /// A simulated contract function reverted
    #[error("{function} reverted: {}", describe_revert(.data))]
    Revert {
        /// `Contract.function` that reverted
        function: String,
        /// Raw revert data
        data: Bytes,
    },
    /// No RPC connection is configured for the chain
    #[error("no provider configured for chain {0}")]
    ChainNotConfigured(u64),
    /// Internal errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

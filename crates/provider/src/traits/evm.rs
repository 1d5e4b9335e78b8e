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

//! Trait for reading chain data of a single chain.

use alloy_primitives::{Address, U256};
use alloy_rpc_types_eth::BlockNumberOrTag;
use holograph_types::FeeBlock;
#[cfg(feature = "test-utils")]
use mockall::automock;

use super::error::ProviderResult;

/// Trait for reading the chain data the SDK needs from a single chain.
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait EvmProvider: Send + Sync {
    /// Get the fee relevant view of a block.
    ///
    /// With `full_transactions` the fee fields of every transaction are fetched, otherwise only
    /// their hashes.
    async fn get_fee_block(
        &self,
        block: BlockNumberOrTag,
        full_transactions: bool,
    ) -> ProviderResult<Option<FeeBlock>>;

    /// Get the legacy gas price as reported by the node (`eth_gasPrice`)
    async fn get_gas_price(&self) -> ProviderResult<u128>;

    /// Get the balance of an address at the latest block
    async fn get_balance(&self, address: Address) -> ProviderResult<U256>;
}

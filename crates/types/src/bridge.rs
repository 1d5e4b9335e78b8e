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

use alloy_primitives::{Bytes, TxHash, U256};
use serde::Serialize;

/// Gas price and limit for one side of a bridge-out
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainGas {
    /// EVM chain id
    pub chain_id: u64,
    /// Gas price in wei
    pub gas_price: u128,
    /// Gas limit
    pub gas_limit: u64,
}

impl ChainGas {
    /// Maximum cost of the gas, in wei
    pub fn max_cost(&self) -> U256 {
        U256::from(self.gas_price) * U256::from(self.gas_limit)
    }
}

/// Everything required to execute a bridge-out request
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeOutEstimate {
    /// Gas for the source chain transaction
    pub gas_source: ChainGas,
    /// Gas for the job on the destination chain
    pub gas_destination: ChainGas,
    /// Native amount to attach to the source transaction, covers all fees
    pub value: U256,
    /// Encoded `bridgeOutRequest` call data
    pub unsigned_tx: Bytes,
}

/// Outcome of a submitted bridge-out transaction
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeOutReceipt {
    /// Transaction hash
    pub transaction_hash: TxHash,
    /// Block the transaction was included in
    pub block_number: Option<u64>,
    /// Gas used by the transaction
    pub gas_used: u64,
    /// True if the transaction did not revert
    pub success: bool,
}

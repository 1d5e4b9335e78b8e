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

use alloy_primitives::B256;
use holograph_utils::math;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::chain::{MANTLE_CHAIN_IDS, POLYGON_CHAIN_IDS};

/// Snapshot of a chain's fee market.
///
/// Every field is optional until the corresponding data has been observed on chain.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GasPricing {
    /// True if the latest block carried a base fee
    pub is_eip1559: bool,
    /// Legacy gas price
    pub gas_price: Option<u128>,
    /// Projected base fee of the next block
    pub next_block_fee: Option<u128>,
    /// Running average of observed priority fees
    pub next_priority_fee: Option<u128>,
    /// Max fee per gas to attach to an EIP-1559 transaction
    pub max_fee_per_gas: Option<u128>,
}

impl GasPricing {
    /// The price a transaction on this chain should pay: `max_fee_per_gas`
    /// on EIP-1559 chains, `gas_price` otherwise.
    pub fn price(&self) -> Option<u128> {
        if self.is_eip1559 {
            self.max_fee_per_gas
        } else {
            self.gas_price
        }
    }
}

/// Fee relevant view of a block
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeeBlock {
    /// Block number
    pub number: u64,
    /// Base fee, `None` on chains without EIP-1559
    pub base_fee_per_gas: Option<u128>,
    /// Gas used by the block
    pub gas_used: u64,
    /// Gas limit of the block
    pub gas_limit: u64,
    /// Transactions of the block
    pub transactions: BlockTransactionFees,
}

/// Transactions of a block, either as hashes or with their fee fields
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BlockTransactionFees {
    /// Only the transaction hashes were fetched
    Hashes(Vec<B256>),
    /// Full transaction bodies were fetched
    Full(Vec<TransactionFees>),
}

impl Default for BlockTransactionFees {
    fn default() -> Self {
        Self::Hashes(vec![])
    }
}

impl BlockTransactionFees {
    /// Returns the full transactions, if they were fetched
    pub fn as_full(&self) -> Option<&[TransactionFees]> {
        match self {
            Self::Full(txs) => Some(txs),
            Self::Hashes(_) => None,
        }
    }
}

/// Fee fields of a single transaction
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransactionFees {
    /// EIP-2718 transaction type
    pub tx_type: u8,
    /// Gas price, set for legacy and access list transactions
    pub gas_price: Option<u128>,
    /// Max fee per gas, set for dynamic fee transactions
    pub max_fee_per_gas: Option<u128>,
    /// Max priority fee per gas, set for dynamic fee transactions
    pub max_priority_fee_per_gas: Option<u128>,
}

impl TransactionFees {
    /// Legacy transaction type
    pub const LEGACY_TX_TYPE: u8 = 0;
    /// EIP-1559 transaction type
    pub const EIP1559_TX_TYPE: u8 = 2;

    /// Fees of a legacy transaction
    pub fn legacy(gas_price: u128) -> Self {
        Self {
            tx_type: Self::LEGACY_TX_TYPE,
            gas_price: Some(gas_price),
            ..Default::default()
        }
    }

    /// Fees of an EIP-1559 transaction
    pub fn eip1559(max_fee_per_gas: u128, max_priority_fee_per_gas: u128) -> Self {
        Self {
            tx_type: Self::EIP1559_TX_TYPE,
            gas_price: None,
            max_fee_per_gas: Some(max_fee_per_gas),
            max_priority_fee_per_gas: Some(max_priority_fee_per_gas),
        }
    }
}

/// Operation kinds that the gas controller is keyed by
#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum GasOperation {
    /// Bridge a single NFT
    BridgeNft,
    /// Bridge an ERC20 balance
    BridgeErc20,
    /// Deploy a collection on another chain
    BridgeCollection,
    /// Deploy a generic holographable contract on another chain
    BridgeContract,
}

/// Static gas overrides for an operation on a chain
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasParams {
    /// Fixed gas price, replaces the estimated price
    pub gas_price: Option<u128>,
    /// Fixed gas limit, replaces the simulated limit
    pub gas_limit: Option<u64>,
    /// Percentage applied to the gas limit, 125 = x1.25
    pub gas_limit_multiplier: Option<u32>,
    /// Percentage applied to the gas price, 125 = x1.25
    pub gas_price_multiplier: Option<u32>,
}

impl GasParams {
    /// Apply the gas limit multiplier, if configured
    pub fn apply_gas_limit_multiplier(&self, gas_limit: u64) -> u64 {
        match self.gas_limit_multiplier {
            Some(percent) => math::percent(gas_limit as u128, percent)
                .try_into()
                .unwrap_or(u64::MAX),
            None => gas_limit,
        }
    }

    /// Apply the gas price multiplier, if configured
    pub fn apply_gas_price_multiplier(&self, gas_price: u128) -> u128 {
        match self.gas_price_multiplier {
            Some(percent) => math::percent(gas_price, percent),
            None => gas_price,
        }
    }
}

/// A single entry of the gas controller table
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GasOverride {
    /// Operation the override applies to
    pub operation: GasOperation,
    /// EVM chain id the override applies to
    pub chain_id: u64,
    /// Override values
    #[serde(flatten)]
    pub params: GasParams,
}

/// Per-operation, per-chain gas overrides.
///
/// A missing entry means "no override" and callers fall back to computed values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GasController {
    table: HashMap<GasOperation, HashMap<u64, GasParams>>,
}

impl GasController {
    /// A controller with no overrides at all
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Insert overrides, replacing any existing entry for the same operation and chain
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = GasOverride>) -> Self {
        for o in overrides {
            self.table
                .entry(o.operation)
                .or_default()
                .insert(o.chain_id, o.params);
        }
        self
    }

    /// Returns the overrides for an operation on a chain
    pub fn params(&self, operation: GasOperation, chain_id: u64) -> GasParams {
        self.table
            .get(&operation)
            .and_then(|chains| chains.get(&chain_id))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for GasController {
    fn default() -> Self {
        let mut overrides = vec![];
        for operation in GasOperation::iter() {
            // Mantle job gas varies heavily with L1 data cost
            for chain_id in MANTLE_CHAIN_IDS {
                overrides.push(GasOverride {
                    operation,
                    chain_id: *chain_id,
                    params: GasParams {
                        gas_limit_multiplier: Some(150),
                        ..Default::default()
                    },
                });
            }
            for chain_id in POLYGON_CHAIN_IDS {
                overrides.push(GasOverride {
                    operation,
                    chain_id: *chain_id,
                    params: GasParams {
                        gas_price_multiplier: Some(150),
                        ..Default::default()
                    },
                });
            }
        }
        Self::empty().with_overrides(overrides)
    }
}

/// Caller supplied gas overrides for the source chain transaction
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GasSettings {
    /// Gas price to pay on the source chain
    pub gas_price: Option<u128>,
    /// Gas limit of the source chain transaction
    pub gas_limit: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{ETHEREUM, MANTLE, POLYGON};

    #[test]
    fn test_missing_entry_is_no_override() {
        let controller = GasController::empty();
        let params = controller.params(GasOperation::BridgeNft, ETHEREUM);
        assert_eq!(params, GasParams::default());
        assert_eq!(params.apply_gas_limit_multiplier(1_000), 1_000);
        assert_eq!(params.apply_gas_price_multiplier(7), 7);
    }

    #[test]
    fn test_gas_limit_multiplier() {
        let params = GasParams {
            gas_limit_multiplier: Some(125),
            ..Default::default()
        };
        assert_eq!(params.apply_gas_limit_multiplier(1_000_000), 1_250_000);
    }

    #[test]
    fn test_gas_price_multiplier_rounds_down() {
        let params = GasParams {
            gas_price_multiplier: Some(125),
            ..Default::default()
        };
        assert_eq!(params.apply_gas_price_multiplier(3), 3);
        assert_eq!(params.apply_gas_price_multiplier(10), 12);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let controller = GasController::default().with_overrides([GasOverride {
            operation: GasOperation::BridgeNft,
            chain_id: MANTLE,
            params: GasParams {
                gas_limit: Some(500_000),
                ..Default::default()
            },
        }]);

        let nft = controller.params(GasOperation::BridgeNft, MANTLE);
        assert_eq!(nft.gas_limit, Some(500_000));
        assert_eq!(nft.gas_limit_multiplier, None);

        let erc20 = controller.params(GasOperation::BridgeErc20, MANTLE);
        assert_eq!(erc20.gas_limit_multiplier, Some(150));

        let polygon = controller.params(GasOperation::BridgeCollection, POLYGON);
        assert_eq!(polygon.gas_price_multiplier, Some(150));
    }

    #[test]
    fn test_deserialize_override() {
        let o: GasOverride = serde_json::from_str(
            r#"{"operation":"bridgeErc20","chain_id":137,"gas_price":30000000000}"#,
        )
        .unwrap();
        assert_eq!(o.operation, GasOperation::BridgeErc20);
        assert_eq!(o.chain_id, 137);
        assert_eq!(o.params.gas_price, Some(30_000_000_000));
        assert_eq!(o.params.gas_limit, None);
    }

    #[test]
    fn test_pricing_price() {
        let pricing = GasPricing {
            is_eip1559: true,
            gas_price: Some(1),
            max_fee_per_gas: Some(2),
            ..Default::default()
        };
        assert_eq!(pricing.price(), Some(2));

        let legacy = GasPricing {
            is_eip1559: false,
            ..pricing
        };
        assert_eq!(legacy.price(), Some(1));
    }
}

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

use alloy_consensus::Transaction as _;
use alloy_eips::Typed2718;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider as AlloyProvider;
use alloy_rpc_types_eth::{Block, BlockNumberOrTag, BlockTransactions};
use holograph_types::{BlockTransactionFees, FeeBlock, TransactionFees};
use tracing::instrument;

use crate::{EvmProvider, ProviderResult};

/// Evm Provider implementation using [alloy-provider](https://github.com/alloy-rs/alloy)
#[derive(Clone, Debug)]
pub struct AlloyEvmProvider<AP> {
    inner: AP,
}

impl<AP> AlloyEvmProvider<AP> {
    /// Create a new `AlloyEvmProvider`
    pub fn new(inner: AP) -> Self {
        Self { inner }
    }
}

impl<AP: AlloyProvider> From<AP> for AlloyEvmProvider<AP> {
    fn from(inner: AP) -> Self {
        Self::new(inner)
    }
}

#[async_trait::async_trait]
impl<AP: AlloyProvider> EvmProvider for AlloyEvmProvider<AP> {
    #[instrument(skip(self))]
    async fn get_fee_block(
        &self,
        block: BlockNumberOrTag,
        full_transactions: bool,
    ) -> ProviderResult<Option<FeeBlock>> {
        let request = self.inner.get_block_by_number(block);
        let block = if full_transactions {
            request.full().await?
        } else {
            request.hashes().await?
        };
        Ok(block.map(fee_block))
    }

    async fn get_gas_price(&self) -> ProviderResult<u128> {
        Ok(self.inner.get_gas_price().await?)
    }

    async fn get_balance(&self, address: Address) -> ProviderResult<U256> {
        Ok(self.inner.get_balance(address).await?)
    }
}

fn fee_block(block: Block) -> FeeBlock {
    let transactions = match block.transactions {
        BlockTransactions::Full(txs) => {
            BlockTransactionFees::Full(txs.iter().map(transaction_fees).collect())
        }
        BlockTransactions::Hashes(hashes) => BlockTransactionFees::Hashes(hashes),
        BlockTransactions::Uncle => BlockTransactionFees::Hashes(vec![]),
    };

    FeeBlock {
        number: block.header.number,
        base_fee_per_gas: block.header.base_fee_per_gas.map(u128::from),
        gas_used: block.header.gas_used,
        gas_limit: block.header.gas_limit,
        transactions,
    }
}

fn transaction_fees<T: alloy_consensus::Transaction>(tx: &T) -> TransactionFees {
    TransactionFees {
        tx_type: tx.ty(),
        gas_price: tx.gas_price(),
        max_fee_per_gas: tx.is_dynamic_fee().then(|| tx.max_fee_per_gas()),
        max_priority_fee_per_gas: tx.max_priority_fee_per_gas(),
    }
}

#[cfg(test)]
mod tests {
    use alloy_consensus::{Signed, TxEip1559, TxEnvelope, TxLegacy};
    use alloy_primitives::{Signature, B256};
    use alloy_rpc_types_eth::{Header, Transaction};

    use super::*;

    fn rpc_tx(envelope: TxEnvelope) -> Transaction {
        Transaction {
            inner: alloy_consensus::transaction::Recovered::new_unchecked(
                envelope,
                Address::ZERO,
            ),
            block_hash: None,
            block_number: None,
            transaction_index: None,
            effective_gas_price: None,
        }
    }

    fn signature() -> Signature {
        Signature::new(U256::from(1), U256::from(1), false)
    }

    #[test]
    fn test_transaction_fees() {
        let legacy = TxEnvelope::Legacy(Signed::new_unchecked(
            TxLegacy {
                gas_price: 30,
                ..Default::default()
            },
            signature(),
            B256::ZERO,
        ));
        let eip1559 = TxEnvelope::Eip1559(Signed::new_unchecked(
            TxEip1559 {
                max_fee_per_gas: 100,
                max_priority_fee_per_gas: 5,
                ..Default::default()
            },
            signature(),
            B256::ZERO,
        ));

        assert_eq!(transaction_fees(&rpc_tx(legacy)), TransactionFees::legacy(30));
        assert_eq!(
            transaction_fees(&rpc_tx(eip1559)),
            TransactionFees::eip1559(100, 5)
        );
    }

    #[test]
    fn test_fee_block() {
        let mut header: Header = Header::default();
        header.inner.number = 7;
        header.inner.base_fee_per_gas = Some(1_000);
        header.inner.gas_used = 10;
        header.inner.gas_limit = 30;
        let block = Block {
            header,
            uncles: vec![],
            transactions: BlockTransactions::Hashes(vec![B256::ZERO]),
            withdrawals: None,
        };

        let fee_block = fee_block(block);
        assert_eq!(fee_block.number, 7);
        assert_eq!(fee_block.base_fee_per_gas, Some(1_000));
        assert_eq!(fee_block.gas_used, 10);
        assert_eq!(fee_block.gas_limit, 30);
        assert_eq!(
            fee_block.transactions,
            BlockTransactionFees::Hashes(vec![B256::ZERO])
        );
    }
}

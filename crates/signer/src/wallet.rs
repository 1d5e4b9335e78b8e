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

use alloy_primitives::{Address, Signature, TxHash, B256};
use holograph_provider::TransactionRequest;
use holograph_types::BridgeOutReceipt;
#[cfg(feature = "test-utils")]
use mockall::automock;

use crate::Result;

/// An account that can sign messages and submit transactions on the configured chains
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait Wallet: Send + Sync {
    /// Address of the account
    fn address(&self) -> Address;

    /// Sign a 32 byte hash as an EIP-191 personal message.
    ///
    /// Fails with [`Error::Rejected`](crate::Error::Rejected) if the account holder declines.
    async fn sign_message_hash(&self, hash: B256) -> Result<Signature>;

    /// Sign and submit a transaction on `chain_id`, returning its hash once accepted by the node
    async fn send_transaction(&self, chain_id: u64, tx: TransactionRequest) -> Result<TxHash>;

    /// Wait until a transaction is included. There is no timeout.
    async fn wait_for_transaction_receipt(
        &self,
        chain_id: u64,
        hash: TxHash,
    ) -> Result<BridgeOutReceipt>;
}

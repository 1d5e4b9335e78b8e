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

use std::{collections::HashMap, fmt};

use alloy_network::{EthereumWallet, ReceiptResponse};
use alloy_primitives::{Address, Signature, TxHash, B256};
use alloy_provider::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use anyhow::Context;
use holograph_provider::TransactionRequest;
use holograph_types::BridgeOutReceipt;
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument};

use crate::{Error, Result, Wallet};

/// Wallet backed by a local private key, connected to a set of chains
#[derive(Clone)]
pub struct LocalWallet {
    signer: PrivateKeySigner,
    providers: HashMap<u64, DynProvider>,
}

impl fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.signer.address())
            .field("chains", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl LocalWallet {
    /// Create a wallet from a hex encoded private key.
    ///
    /// Each read provider is wrapped so transactions sent through it are filled and signed
    /// by this wallet.
    pub fn from_private_key(
        private_key: &SecretString,
        providers: HashMap<u64, DynProvider>,
    ) -> Result<Self> {
        let signer = private_key
            .expose_secret()
            .parse::<PrivateKeySigner>()
            .context("failed to parse private key signer")?;
        Ok(Self::new(signer, providers))
    }

    /// Create a wallet from a signer
    pub fn new(signer: PrivateKeySigner, providers: HashMap<u64, DynProvider>) -> Self {
        let wallet = EthereumWallet::from(signer.clone());
        let providers = providers
            .into_iter()
            .map(|(chain_id, provider)| {
                let provider = ProviderBuilder::new()
                    .wallet(wallet.clone())
                    .connect_provider(provider)
                    .erased();
                (chain_id, provider)
            })
            .collect();
        Self { signer, providers }
    }

    fn provider(&self, chain_id: u64) -> Result<&DynProvider> {
        self.providers
            .get(&chain_id)
            .ok_or(Error::ChainNotConfigured(chain_id))
    }
}

#[async_trait::async_trait]
impl Wallet for LocalWallet {
    fn address(&self) -> Address {
        self.signer.address()
    }

    async fn sign_message_hash(&self, hash: B256) -> Result<Signature> {
        Ok(self.signer.sign_message(hash.as_slice()).await?)
    }

    #[instrument(skip(self, tx))]
    async fn send_transaction(&self, chain_id: u64, mut tx: TransactionRequest) -> Result<TxHash> {
        tx.from = Some(self.signer.address());
        let pending = self.provider(chain_id)?.send_transaction(tx).await?;
        let hash = *pending.tx_hash();
        info!("submitted transaction {hash:?} on chain {chain_id}");
        Ok(hash)
    }

    #[instrument(skip(self))]
    async fn wait_for_transaction_receipt(
        &self,
        chain_id: u64,
        hash: TxHash,
    ) -> Result<BridgeOutReceipt> {
        let provider = self.provider(chain_id)?;
        let receipt = PendingTransactionBuilder::new(provider.root().clone(), hash)
            .get_receipt()
            .await
            .context("failed to wait for transaction receipt")?;
        Ok(BridgeOutReceipt {
            transaction_hash: ReceiptResponse::transaction_hash(&receipt),
            block_number: ReceiptResponse::block_number(&receipt),
            gas_used: ReceiptResponse::gas_used(&receipt),
            success: ReceiptResponse::status(&receipt),
        })
    }
}

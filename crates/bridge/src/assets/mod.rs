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

//! Asset specific bridge-out payload builders.
//!
//! Every builder produces the `bridgeOutPayload` ("init code") handed to the holographable
//! contract, then delegates estimation and submission to a [`BridgeOutEstimator`].

use std::sync::Arc;

use alloy_primitives::{Address, Bytes, B256};
use holograph_contracts::holograph::{DeploymentConfig, Verification};
use holograph_signer::Wallet;
use holograph_types::{BridgeOutEstimate, BridgeOutReceipt, GasOperation};
use tracing::debug;

use crate::{BridgeOutEstimator, BridgeOutRequest, BridgeResult};

mod collection;
pub use collection::{BridgeCollection, CollectionParams};

mod contract;
pub use contract::BridgeContract;

mod erc20;
pub use erc20::BridgeErc20;

mod nft;
pub use nft::BridgeNft;

/// Shared dependencies of the asset builders
#[derive(Clone)]
pub struct AssetContext {
    /// Estimator the builders delegate to
    pub estimator: Arc<dyn BridgeOutEstimator>,
    /// Wallet that signs deployment configs and sends bridge-outs
    pub wallet: Arc<dyn Wallet>,
}

impl AssetContext {
    /// Create a new context
    pub fn new(estimator: Arc<dyn BridgeOutEstimator>, wallet: Arc<dyn Wallet>) -> Self {
        Self { estimator, wallet }
    }
}

/// An asset that can be bridged out
#[async_trait::async_trait]
pub trait BridgeAsset: Send + Sync {
    /// Shared dependencies
    fn context(&self) -> &AssetContext;

    /// Gas controller operation of this asset
    fn operation(&self) -> GasOperation;

    /// Holographable contract handling the bridge-out
    fn contract(&self) -> Address;

    /// The bridge-out payload. Computed once, later calls return the cached bytes.
    async fn init_code(&self) -> BridgeResult<Bytes>;

    /// Build the estimator request for a source and destination chain
    async fn request(
        &self,
        source_chain_id: u64,
        destination_chain_id: u64,
    ) -> BridgeResult<BridgeOutRequest> {
        Ok(BridgeOutRequest {
            source_chain_id,
            destination_chain_id,
            contract: self.contract(),
            payload: self.init_code().await?,
            operation: self.operation(),
        })
    }

    /// Estimate bridging this asset
    async fn estimate(
        &self,
        source_chain_id: u64,
        destination_chain_id: u64,
    ) -> BridgeResult<BridgeOutEstimate> {
        let request = self.request(source_chain_id, destination_chain_id).await?;
        self.context().estimator.estimate_bridge_out(&request).await
    }

    /// Bridge this asset out and wait for the source chain receipt
    async fn bridge_out(
        &self,
        source_chain_id: u64,
        destination_chain_id: u64,
    ) -> BridgeResult<BridgeOutReceipt> {
        let request = self.request(source_chain_id, destination_chain_id).await?;
        let context = self.context();
        context
            .estimator
            .bridge_out(Arc::clone(&context.wallet), &request)
            .await
    }
}

/// Sign a deployment config with the context wallet.
///
/// Returns the verification and the signer, in the order the factory decodes them.
pub(crate) async fn sign_deployment_config(
    wallet: &dyn Wallet,
    config: &DeploymentConfig,
) -> BridgeResult<(Verification, Address)> {
    let signer = wallet.address();
    let hash = config.hash(signer);
    debug!("signing deployment config {hash:?} with {signer:?}");

    let signature = wallet.sign_message_hash(hash).await?;
    let verification = Verification {
        r: B256::from(signature.r().to_be_bytes::<32>()),
        s: B256::from(signature.s().to_be_bytes::<32>()),
        v: 27 + u8::from(signature.v()),
    };
    Ok((verification, signer))
}

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

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolValue;
use holograph_contracts::holograph::DeploymentConfig;
use holograph_types::GasOperation;
use tokio::sync::OnceCell;

use super::{sign_deployment_config, AssetContext, BridgeAsset};
use crate::{BridgeError, BridgeResult};

/// Deploys an arbitrary holographable contract on another chain through the factory
pub struct BridgeContract {
    context: AssetContext,
    factory: Address,
    config: DeploymentConfig,
    init_code: OnceCell<Bytes>,
}

impl BridgeContract {
    /// Create a new contract bridge-out from a prepared deployment config
    pub fn new(context: AssetContext, factory: Address, config: DeploymentConfig) -> Self {
        Self {
            context,
            factory,
            config,
            init_code: OnceCell::new(),
        }
    }
}

#[async_trait::async_trait]
impl BridgeAsset for BridgeContract {
    fn context(&self) -> &AssetContext {
        &self.context
    }

    fn operation(&self) -> GasOperation {
        GasOperation::BridgeContract
    }

    fn contract(&self) -> Address {
        self.factory
    }

    async fn init_code(&self) -> BridgeResult<Bytes> {
        self.init_code
            .get_or_try_init(|| async {
                let (verification, signer) =
                    sign_deployment_config(self.context.wallet.as_ref(), &self.config).await?;
                Ok::<Bytes, BridgeError>(
                    (self.config.clone(), verification, signer)
                        .abi_encode_params()
                        .into(),
                )
            })
            .await
            .cloned()
    }
}

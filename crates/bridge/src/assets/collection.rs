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

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolValue;
use holograph_contracts::holograph::DeploymentConfig;
use holograph_types::GasOperation;
use tokio::sync::OnceCell;

use super::{sign_deployment_config, AssetContext, BridgeAsset};
use crate::{BridgeError, BridgeResult};

/// Parameters of a collection deployment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionParams {
    /// Enforcer contract type, see [`contract_type`](holograph_contracts::holograph::contract_type)
    pub contract_type: B256,
    /// Holograph chain id of the chain the collection originates from
    pub chain_type: u32,
    /// Deployment salt
    pub salt: B256,
    /// Creation code of the source contract
    pub byte_code: Bytes,
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
    /// Royalties in basis points
    pub royalty_bps: u16,
    /// Bitmap of the events the collection emits
    pub event_config: U256,
    /// Skip the source contract's initializer
    pub skip_init: bool,
    /// Init code of the source contract
    pub source_init_code: Bytes,
}

impl CollectionParams {
    /// The deployment config the factory replays on the destination chain
    pub fn deployment_config(&self) -> DeploymentConfig {
        let init_code = (
            self.name.clone(),
            self.symbol.clone(),
            self.royalty_bps,
            self.event_config,
            self.skip_init,
            self.source_init_code.clone(),
        )
            .abi_encode_params();

        DeploymentConfig {
            contractType: self.contract_type,
            chainType: self.chain_type,
            salt: self.salt,
            byteCode: self.byte_code.clone(),
            initCode: init_code.into(),
        }
    }
}

/// Deploys a collection on another chain through the factory
pub struct BridgeCollection {
    context: AssetContext,
    factory: Address,
    params: CollectionParams,
    init_code: OnceCell<Bytes>,
}

impl BridgeCollection {
    /// Create a new collection bridge-out
    pub fn new(context: AssetContext, factory: Address, params: CollectionParams) -> Self {
        Self {
            context,
            factory,
            params,
            init_code: OnceCell::new(),
        }
    }
}

#[async_trait::async_trait]
impl BridgeAsset for BridgeCollection {
    fn context(&self) -> &AssetContext {
        &self.context
    }

    fn operation(&self) -> GasOperation {
        GasOperation::BridgeCollection
    }

    fn contract(&self) -> Address {
        self.factory
    }

    async fn init_code(&self) -> BridgeResult<Bytes> {
        self.init_code
            .get_or_try_init(|| async {
                let config = self.params.deployment_config();
                let (verification, signer) =
                    sign_deployment_config(self.context.wallet.as_ref(), &config).await?;
                Ok::<Bytes, BridgeError>((config, verification, signer).abi_encode_params().into())
            })
            .await
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use holograph_contracts::holograph::{contract_type, Verification};
    use holograph_signer::Error as SignerError;

    use super::*;
    use crate::assets::test_utils::{context, signing_wallet, wallet, SIGNER};

    fn params() -> CollectionParams {
        CollectionParams {
            contract_type: contract_type("HolographERC721"),
            chain_type: 4000000001,
            salt: B256::with_last_byte(1),
            byte_code: Bytes::from_static(&[0x60, 0x80]),
            name: "Holograph Test".to_string(),
            symbol: "HT".to_string(),
            royalty_bps: 1_000,
            event_config: U256::from(0x01),
            skip_init: false,
            source_init_code: Bytes::new(),
        }
    }

    #[tokio::test]
    async fn test_init_code_signed_once() {
        let collection = BridgeCollection::new(
            context(signing_wallet(1)),
            Address::with_last_byte(0xfa),
            params(),
        );
        let first = collection.init_code().await.unwrap();
        let second = collection.init_code().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(collection.contract(), Address::with_last_byte(0xfa));
        assert_eq!(collection.operation(), GasOperation::BridgeCollection);
    }

    #[tokio::test]
    async fn test_init_code_layout() {
        let collection = BridgeCollection::new(
            context(signing_wallet(1)),
            Address::with_last_byte(0xfa),
            params(),
        );
        let init_code = collection.init_code().await.unwrap();

        let (config, verification, signer) =
            <(DeploymentConfig, Verification, Address)>::abi_decode_params(&init_code).unwrap();
        assert_eq!(config, params().deployment_config());
        assert_eq!(verification.v, 28);
        assert_eq!(signer, SIGNER);

        let (name, symbol, royalty_bps, _, skip_init, _) =
            <(String, String, u16, U256, bool, Bytes)>::abi_decode_params(&config.initCode)
                .unwrap();
        assert_eq!(name, "Holograph Test");
        assert_eq!(symbol, "HT");
        assert_eq!(royalty_bps, 1_000);
        assert!(!skip_init);
    }

    #[tokio::test]
    async fn test_rejected_signature() {
        let mut wallet = wallet();
        wallet
            .expect_sign_message_hash()
            .returning(|_| Err(SignerError::Rejected));
        let collection =
            BridgeCollection::new(context(wallet), Address::with_last_byte(0xfa), params());
        let err = collection.init_code().await.unwrap_err();
        assert!(matches!(err, BridgeError::SignatureRejected));
    }
}

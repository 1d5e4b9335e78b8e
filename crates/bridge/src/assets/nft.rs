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

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolValue;
use holograph_types::GasOperation;
use tokio::sync::OnceCell;

use super::{AssetContext, BridgeAsset};
use crate::{BridgeError, BridgeResult};

/// Bridges a single token of a holographed ERC721 collection
pub struct BridgeNft {
    context: AssetContext,
    contract: Address,
    token_id: U256,
    from: Option<Address>,
    to: Option<Address>,
    init_code: OnceCell<Bytes>,
}

impl BridgeNft {
    /// Bridge `token_id` from the wallet to the same address on the destination chain
    pub fn new(context: AssetContext, contract: Address, token_id: U256) -> Self {
        Self {
            context,
            contract,
            token_id,
            from: None,
            to: None,
            init_code: OnceCell::new(),
        }
    }

    /// Current owner of the token, defaults to the wallet
    pub fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Recipient on the destination chain, defaults to the owner
    pub fn with_to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }
}

#[async_trait::async_trait]
impl BridgeAsset for BridgeNft {
    fn context(&self) -> &AssetContext {
        &self.context
    }

    fn operation(&self) -> GasOperation {
        GasOperation::BridgeNft
    }

    fn contract(&self) -> Address {
        self.contract
    }

    async fn init_code(&self) -> BridgeResult<Bytes> {
        self.init_code
            .get_or_try_init(|| async {
                let from = self.from.unwrap_or_else(|| self.context.wallet.address());
                let to = self.to.unwrap_or(from);
                Ok::<Bytes, BridgeError>((from, to, self.token_id).abi_encode_params().into())
            })
            .await
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;
    use crate::assets::test_utils::{context, wallet, SIGNER};

    const OWNER: Address = address!("0000000000000000000000000000000000000abc");

    #[tokio::test]
    async fn test_token_42() {
        let nft = BridgeNft::new(context(wallet()), Address::with_last_byte(1), U256::from(42))
            .with_from(OWNER)
            .with_to(OWNER);
        let init_code = nft.init_code().await.unwrap();

        let word = |last: &str| format!("{last:0>64}");
        let expected = format!("0x{}{}{}", word("abc"), word("abc"), word("2a"));
        assert_eq!(init_code.to_string(), expected);
    }

    #[tokio::test]
    async fn test_defaults_to_wallet() {
        let nft = BridgeNft::new(context(wallet()), Address::with_last_byte(1), U256::from(7));
        let init_code = nft.init_code().await.unwrap();
        let (from, to, token_id) =
            <(Address, Address, U256)>::abi_decode_params(&init_code).unwrap();
        assert_eq!(from, SIGNER);
        assert_eq!(to, from);
        assert_eq!(token_id, U256::from(7));
    }

    #[tokio::test]
    async fn test_to_defaults_to_from() {
        let from = Address::with_last_byte(0x55);
        let nft = BridgeNft::new(context(wallet()), Address::with_last_byte(1), U256::from(7))
            .with_from(from);
        let (_, to, _) = <(Address, Address, U256)>::abi_decode_params(
            &nft.init_code().await.unwrap(),
        )
        .unwrap();
        assert_eq!(to, from);
    }
}

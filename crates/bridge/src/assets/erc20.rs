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

/// Bridges an amount of a holographed ERC20 token
pub struct BridgeErc20 {
    context: AssetContext,
    contract: Address,
    amount: U256,
    from: Option<Address>,
    to: Option<Address>,
    init_code: OnceCell<Bytes>,
}

impl BridgeErc20 {
    /// Bridge `amount` from the wallet to the same address on the destination chain
    pub fn new(context: AssetContext, contract: Address, amount: U256) -> Self {
        Self {
            context,
            contract,
            amount,
            from: None,
            to: None,
            init_code: OnceCell::new(),
        }
    }

    /// Holder of the tokens, defaults to the wallet
    pub fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Recipient on the destination chain, defaults to the holder
    pub fn with_to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }
}

#[async_trait::async_trait]
impl BridgeAsset for BridgeErc20 {
    fn context(&self) -> &AssetContext {
        &self.context
    }

    fn operation(&self) -> GasOperation {
        GasOperation::BridgeErc20
    }

    fn contract(&self) -> Address {
        self.contract
    }

    async fn init_code(&self) -> BridgeResult<Bytes> {
        self.init_code
            .get_or_try_init(|| async {
                let from = self.from.unwrap_or_else(|| self.context.wallet.address());
                let to = self.to.unwrap_or(from);
                Ok::<Bytes, BridgeError>((from, to, self.amount).abi_encode_params().into())
            })
            .await
            .cloned()
    }
}

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
use clap::{Args, Subcommand};
use holograph_bridge::assets::{
    AssetContext, BridgeAsset, BridgeCollection, BridgeContract, BridgeErc20, BridgeNft,
    CollectionParams,
};
use holograph_contracts::holograph::{contract_type, DeploymentConfig};

#[derive(Debug, Subcommand)]
pub(super) enum AssetCommand {
    /// Bridge a single NFT
    #[command(name = "nft")]
    Nft {
        /// Holographed ERC721 contract
        #[arg(long = "contract", name = "contract")]
        contract: Address,
        /// Token to bridge
        #[arg(long = "token_id", name = "token_id")]
        token_id: U256,
        #[command(flatten)]
        parties: Parties,
    },

    /// Bridge an ERC20 amount
    #[command(name = "erc20")]
    Erc20 {
        /// Holographed ERC20 contract
        #[arg(long = "contract", name = "contract")]
        contract: Address,
        /// Amount in the token's smallest unit
        #[arg(long = "amount", name = "amount")]
        amount: U256,
        #[command(flatten)]
        parties: Parties,
    },

    /// Deploy a collection on the destination chain
    #[command(name = "collection")]
    Collection(CollectionArgs),

    /// Deploy a holographable contract from a raw deployment config
    #[command(name = "contract")]
    Contract(ContractArgs),
}

#[derive(Debug, Args)]
pub(super) struct Parties {
    /// Current holder, defaults to the wallet
    #[arg(long = "from", name = "from")]
    from: Option<Address>,
    /// Recipient on the destination chain, defaults to the holder
    #[arg(long = "to", name = "to")]
    to: Option<Address>,
}

#[derive(Debug, Args)]
pub(super) struct CollectionArgs {
    /// Enforcer contract type name
    #[arg(long = "contract_type", name = "contract_type", default_value = "HolographERC721")]
    contract_type: String,
    /// Deployment salt, defaults to zero
    #[arg(long = "salt", name = "salt")]
    salt: Option<B256>,
    /// Creation code of the source contract, hex encoded
    #[arg(long = "byte_code", name = "byte_code")]
    byte_code: Bytes,
    /// Collection name
    #[arg(long = "name", name = "name")]
    name: String,
    /// Collection symbol
    #[arg(long = "symbol", name = "symbol")]
    symbol: String,
    /// Royalties in basis points
    #[arg(long = "royalty_bps", name = "royalty_bps", default_value = "0")]
    royalty_bps: u16,
    /// Event bitmap
    #[arg(long = "event_config", name = "event_config")]
    event_config: Option<U256>,
    /// Skip the source contract's initializer
    #[arg(long = "skip_init", name = "skip_init")]
    skip_init: bool,
    /// Init code of the source contract, hex encoded
    #[arg(long = "source_init_code", name = "source_init_code")]
    source_init_code: Option<Bytes>,
}

#[derive(Debug, Args)]
pub(super) struct ContractArgs {
    /// Enforcer contract type name
    #[arg(long = "contract_type", name = "contract_type")]
    contract_type: String,
    /// Holograph chain id of the origin chain, defaults to the source chain
    #[arg(long = "chain_type", name = "chain_type")]
    chain_type: Option<u32>,
    /// Deployment salt, defaults to zero
    #[arg(long = "salt", name = "salt")]
    salt: Option<B256>,
    /// Creation code, hex encoded
    #[arg(long = "byte_code", name = "byte_code")]
    byte_code: Bytes,
    /// Init code, hex encoded
    #[arg(long = "init_code", name = "init_code")]
    init_code: Bytes,
}

impl AssetCommand {
    /// Build the asset. Deployments go through `factory` and originate on `source_id`.
    pub(super) fn build(
        self,
        context: AssetContext,
        factory: Address,
        source_id: u32,
    ) -> Box<dyn BridgeAsset> {
        match self {
            AssetCommand::Nft {
                contract,
                token_id,
                parties,
            } => Box::new(parties.apply_nft(BridgeNft::new(context, contract, token_id))),
            AssetCommand::Erc20 {
                contract,
                amount,
                parties,
            } => Box::new(parties.apply_erc20(BridgeErc20::new(context, contract, amount))),
            AssetCommand::Collection(args) => Box::new(BridgeCollection::new(
                context,
                factory,
                CollectionParams {
                    contract_type: contract_type(&args.contract_type),
                    chain_type: source_id,
                    salt: args.salt.unwrap_or_default(),
                    byte_code: args.byte_code,
                    name: args.name,
                    symbol: args.symbol,
                    royalty_bps: args.royalty_bps,
                    event_config: args.event_config.unwrap_or_default(),
                    skip_init: args.skip_init,
                    source_init_code: args.source_init_code.unwrap_or_default(),
                },
            )),
            AssetCommand::Contract(args) => Box::new(BridgeContract::new(
                context,
                factory,
                DeploymentConfig {
                    contractType: contract_type(&args.contract_type),
                    chainType: args.chain_type.unwrap_or(source_id),
                    salt: args.salt.unwrap_or_default(),
                    byteCode: args.byte_code,
                    initCode: args.init_code,
                },
            )),
        }
    }
}

impl Parties {
    fn apply_nft(self, mut nft: BridgeNft) -> BridgeNft {
        if let Some(from) = self.from {
            nft = nft.with_from(from);
        }
        if let Some(to) = self.to {
            nft = nft.with_to(to);
        }
        nft
    }

    fn apply_erc20(self, mut erc20: BridgeErc20) -> BridgeErc20 {
        if let Some(from) = self.from {
            erc20 = erc20.with_from(from);
        }
        if let Some(to) = self.to {
            erc20 = erc20.with_to(to);
        }
        erc20
    }
}

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

#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! Holograph common types

mod bridge;
pub use bridge::{BridgeOutEstimate, BridgeOutReceipt, ChainGas};

pub mod chain;

mod config;
pub use config::{BridgeConfig, ContractAddresses, Environment, HolographConfig, NetworkConfig};

mod gas;
pub use gas::{
    BlockTransactionFees, FeeBlock, GasController, GasOperation, GasOverride, GasParams,
    GasPricing, GasSettings, TransactionFees,
};

mod network;
pub use network::{Network, NetworkNotFound, NetworkRegistry};

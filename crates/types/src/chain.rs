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

//! EVM chain ids and the chain families that need special handling.

/// Ethereum mainnet
pub const ETHEREUM: u64 = 1;
/// Ethereum Goerli testnet
pub const ETHEREUM_GOERLI: u64 = 5;
/// Optimism mainnet
pub const OPTIMISM: u64 = 10;
/// BNB Smart Chain mainnet
pub const BSC: u64 = 56;
/// BNB Smart Chain testnet
pub const BSC_TESTNET: u64 = 97;
/// Polygon PoS mainnet
pub const POLYGON: u64 = 137;
/// Optimism Goerli testnet
pub const OPTIMISM_GOERLI: u64 = 420;
/// Zora Goerli testnet
pub const ZORA_GOERLI: u64 = 999;
/// Mantle mainnet
pub const MANTLE: u64 = 5000;
/// Mantle testnet
pub const MANTLE_TESTNET: u64 = 5001;
/// Base mainnet
pub const BASE: u64 = 8453;
/// Arbitrum One
pub const ARBITRUM_ONE: u64 = 42161;
/// Avalanche Fuji testnet
pub const AVALANCHE_FUJI: u64 = 43113;
/// Avalanche C-Chain
pub const AVALANCHE: u64 = 43114;
/// Polygon Mumbai testnet
pub const POLYGON_MUMBAI: u64 = 80001;
/// Base Goerli testnet
pub const BASE_GOERLI: u64 = 84531;
/// Arbitrum Goerli testnet
pub const ARBITRUM_GOERLI: u64 = 421613;
/// Zora mainnet
pub const ZORA: u64 = 7777777;

/// Avalanche network family, enforces a 25 gwei minimum base fee
pub const AVALANCHE_CHAIN_IDS: &[u64] = &[AVALANCHE, AVALANCHE_FUJI];

/// BNB Smart Chain family, enforces a 3 gwei minimum base fee
pub const BSC_CHAIN_IDS: &[u64] = &[BSC, BSC_TESTNET];

/// Mantle family. Gas is denominated in MNT so execution costs are
/// orders of magnitude larger than on other chains.
pub const MANTLE_CHAIN_IDS: &[u64] = &[MANTLE, MANTLE_TESTNET];

/// Polygon PoS family
pub const POLYGON_CHAIN_IDS: &[u64] = &[POLYGON, POLYGON_MUMBAI];

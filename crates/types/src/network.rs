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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::chain::*;

/// Metadata of a network supported by the protocol
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Short key, e.g. "ethereum"
    pub key: String,
    /// Name for logging purposes
    pub name: String,
    /// EVM chain id
    pub chain_id: u64,
    /// Chain id used by the protocol contracts
    pub holograph_id: u32,
    /// True for test networks
    pub testnet: bool,
}

/// Error returned when a chain id is not in the registry
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("network not found for chain id {0}")]
pub struct NetworkNotFound(pub u64);

/// Registry resolving EVM chain ids to protocol network metadata
#[derive(Clone, Debug)]
pub struct NetworkRegistry {
    by_chain_id: HashMap<u64, Network>,
}

const BUILTIN_NETWORKS: &[(&str, &str, u64, u32, bool)] = &[
    ("ethereum", "Ethereum", ETHEREUM, 1, false),
    ("bsc", "BNB Smart Chain", BSC, 2, false),
    ("avalanche", "Avalanche", AVALANCHE, 3, false),
    ("polygon", "Polygon", POLYGON, 4, false),
    ("arbitrumOne", "Arbitrum One", ARBITRUM_ONE, 6, false),
    ("optimism", "Optimism", OPTIMISM, 7, false),
    ("mantle", "Mantle", MANTLE, 9, false),
    ("zora", "Zora", ZORA, 10, false),
    ("base", "Base", BASE, 11, false),
    ("ethereumTestnetGoerli", "Ethereum Goerli", ETHEREUM_GOERLI, 4000000001, true),
    ("bscTestnet", "BNB Smart Chain Testnet", BSC_TESTNET, 4000000002, true),
    ("avalancheTestnet", "Avalanche Fuji", AVALANCHE_FUJI, 4000000003, true),
    ("polygonTestnet", "Polygon Mumbai", POLYGON_MUMBAI, 4000000004, true),
    ("arbitrumTestnetGoerli", "Arbitrum Goerli", ARBITRUM_GOERLI, 4000000006, true),
    ("optimismTestnetGoerli", "Optimism Goerli", OPTIMISM_GOERLI, 4000000007, true),
    ("mantleTestnet", "Mantle Testnet", MANTLE_TESTNET, 4000000009, true),
    ("zoraTestnetGoerli", "Zora Goerli", ZORA_GOERLI, 4000000010, true),
    ("baseTestnetGoerli", "Base Goerli", BASE_GOERLI, 4000000011, true),
];

impl NetworkRegistry {
    /// Create a registry from a list of networks
    pub fn new(networks: impl IntoIterator<Item = Network>) -> Self {
        Self {
            by_chain_id: networks.into_iter().map(|n| (n.chain_id, n)).collect(),
        }
    }

    /// Add or replace networks
    pub fn with_networks(mut self, networks: impl IntoIterator<Item = Network>) -> Self {
        self.by_chain_id
            .extend(networks.into_iter().map(|n| (n.chain_id, n)));
        self
    }

    /// Resolve a network by its EVM chain id
    pub fn get_network_by_chain_id(&self, chain_id: u64) -> Result<&Network, NetworkNotFound> {
        self.by_chain_id
            .get(&chain_id)
            .ok_or(NetworkNotFound(chain_id))
    }

    /// Resolve a network by its key, case insensitive
    pub fn get_network_by_key(&self, key: &str) -> Option<&Network> {
        self.by_chain_id
            .values()
            .find(|n| n.key.eq_ignore_ascii_case(key))
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::new(
            BUILTIN_NETWORKS
                .iter()
                .map(|(key, name, chain_id, holograph_id, testnet)| Network {
                    key: key.to_string(),
                    name: name.to_string(),
                    chain_id: *chain_id,
                    holograph_id: *holograph_id,
                    testnet: *testnet,
                }),
        )
    }
}

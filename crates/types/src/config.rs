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

//! SDK configuration.
//!
//! The configuration is an explicit value handed to each component on construction,
//! so several independent configurations can live in the same process.

use std::collections::HashSet;

use alloy_primitives::Address;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{GasController, GasOverride, Network, NetworkRegistry};

/// Protocol deployment environment
#[derive(
    Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    /// Production contracts on mainnets
    Mainnet,
    /// Production contracts on testnets
    #[default]
    Testnet,
    /// Development contracts on testnets
    Develop,
    /// Local development chains
    Localhost,
}

impl Environment {
    /// True if a network may be used in this environment
    pub fn allows(&self, network: &Network) -> bool {
        match self {
            Environment::Mainnet => !network.testnet,
            Environment::Testnet | Environment::Develop => network.testnet,
            Environment::Localhost => true,
        }
    }
}

/// Addresses of the protocol contracts, identical on every chain of an environment
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContractAddresses {
    /// Bridge contract
    pub bridge: Address,
    /// Operator contract
    pub operator: Address,
    /// Factory contract, the target of collection and contract bridge-outs
    pub factory: Address,
}

/// RPC configuration of a single chain
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// EVM chain id
    pub chain_id: u64,
    /// HTTP RPC url
    pub rpc_url: String,
    /// Protocol chain id, required for networks missing from the builtin registry
    #[serde(default)]
    pub holograph_id: Option<u32>,
    /// Network key, defaults to the chain id
    #[serde(default)]
    pub key: Option<String>,
}

/// Bridge-out behavior settings
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Check that the wallet can pay for the bridge-out before submitting it
    pub check_balance: bool,
    /// Sender used when simulating state changing contract functions
    pub simulation_sender: Option<Address>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            check_balance: true,
            simulation_sender: None,
        }
    }
}

/// Top level SDK configuration
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HolographConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,
    /// Protocol contract addresses
    pub contracts: ContractAddresses,
    /// Chains to connect to
    #[serde(default)]
    pub networks: Vec<NetworkConfig>,
    /// Gas controller overrides, applied on top of the builtin table
    #[serde(default)]
    pub gas_overrides: Vec<GasOverride>,
    /// Bridge-out settings
    #[serde(default)]
    pub bridge: BridgeConfig,
}

impl HolographConfig {
    /// Network registry: builtin networks plus configured networks that carry a protocol id
    pub fn network_registry(&self) -> NetworkRegistry {
        let extra = self.networks.iter().filter_map(|n| {
            n.holograph_id.map(|holograph_id| Network {
                key: n.key.clone().unwrap_or_else(|| n.chain_id.to_string()),
                name: n.key.clone().unwrap_or_else(|| n.chain_id.to_string()),
                chain_id: n.chain_id,
                holograph_id,
                testnet: self.environment != Environment::Mainnet,
            })
        });
        NetworkRegistry::default().with_networks(extra)
    }

    /// Gas controller: builtin table plus configured overrides
    pub fn gas_controller(&self) -> GasController {
        GasController::default().with_overrides(self.gas_overrides.iter().copied())
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> anyhow::Result<()> {
        let ContractAddresses {
            bridge,
            operator,
            factory,
        } = self.contracts;
        if bridge.is_zero() || operator.is_zero() || factory.is_zero() {
            bail!("bridge, operator and factory contract addresses must be set");
        }

        let registry = self.network_registry();
        let mut seen = HashSet::new();
        for n in &self.networks {
            if !seen.insert(n.chain_id) {
                bail!("chain id {} is configured more than once", n.chain_id);
            }
            let network = registry
                .get_network_by_chain_id(n.chain_id)
                .context("configured network is unknown and has no holograph_id")?;
            if !self.environment.allows(network) {
                bail!(
                    "network {} cannot be used in the {} environment",
                    network.key,
                    self.environment
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chain::POLYGON_MUMBAI, GasOperation};

    fn config() -> HolographConfig {
        serde_json::from_str(
            r#"{
                "environment": "testnet",
                "contracts": {
                    "bridge": "0x0000000000000000000000000000000000000b0b",
                    "operator": "0x0000000000000000000000000000000000000a0a",
                    "factory": "0x0000000000000000000000000000000000000f0f"
                },
                "networks": [
                    { "chain_id": 5, "rpc_url": "http://localhost:8545" },
                    { "chain_id": 80001, "rpc_url": "http://localhost:8546" }
                ],
                "gas_overrides": [
                    { "operation": "bridgeNft", "chain_id": 80001, "gas_limit": 400000 }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_config() {
        let config = config();
        config.validate().unwrap();
        assert!(config.bridge.check_balance);
        assert_eq!(config.networks[0].rpc_url, "http://localhost:8545");
        assert_eq!(
            config
                .gas_controller()
                .params(GasOperation::BridgeNft, POLYGON_MUMBAI)
                .gas_limit,
            Some(400_000)
        );
    }

    #[test]
    fn test_mainnet_network_rejected_on_testnet() {
        let mut config = config();
        config.networks.push(NetworkConfig {
            chain_id: 1,
            rpc_url: "http://localhost:8547".to_string(),
            holograph_id: None,
            key: None,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_network_requires_holograph_id() {
        let mut config = config();
        config.environment = Environment::Localhost;
        config.networks.push(NetworkConfig {
            chain_id: 31337,
            rpc_url: "http://localhost:8548".to_string(),
            holograph_id: None,
            key: None,
        });
        assert!(config.validate().is_err());

        config.networks.last_mut().unwrap().holograph_id = Some(4294967294);
        config.validate().unwrap();
    }

    #[test]
    fn test_duplicate_chain_rejected() {
        let mut config = config();
        config.networks.push(config.networks[0].clone());
        assert!(config.validate().is_err());
    }
}

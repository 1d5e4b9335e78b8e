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

use std::{collections::HashMap, sync::Arc, time::Duration};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use holograph_bridge::{assets::AssetContext, BridgeOutEstimatorImpl, Settings};
use holograph_provider::{
    AlloyEvmProvider, AlloyHolographBridge, AlloyHolographOperator, ChainProviders,
};
use holograph_signer::{LocalWallet, Wallet};
use holograph_types::{BridgeOutReceipt, GasSettings, HolographConfig, NetworkRegistry};
use secrecy::SecretString;

mod asset;
mod config;
mod tracing;

use asset::AssetCommand;

pub async fn run() -> anyhow::Result<()> {
    let opt = Cli::parse();
    let _guard = tracing::configure_logging(&opt.logs)?;

    let config = config::load_config(opt.common.config.as_deref())?;
    tracing::info!(
        "Config: environment {}, chains {:?}",
        config.environment,
        config.networks.iter().map(|n| n.chain_id).collect::<Vec<_>>()
    );

    let (args, submit) = match opt.command {
        Command::Estimate(args) => (args, false),
        Command::Bridge(args) => (args, true),
    };
    let registry = config.network_registry();
    let source = resolve_chain(&registry, &args.source)?;
    let destination = resolve_chain(&registry, &args.destination)?;

    let (context, source_id) = connect(&config, registry, &opt.common, &args, source)?;
    let asset = args.asset.build(context, config.contracts.factory, source_id);

    if submit {
        let receipt = asset.bridge_out(source, destination).await?;
        println!("{}", serde_json::to_string_pretty(&receipt)?);
        ensure_success(&receipt)?;
    } else {
        let estimate = asset.estimate(source, destination).await?;
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    }

    Ok(())
}

// Accepts an EVM chain id or a network key such as `polygonTestnet`.
fn resolve_chain(registry: &NetworkRegistry, chain: &str) -> anyhow::Result<u64> {
    if let Ok(chain_id) = chain.parse::<u64>() {
        return Ok(chain_id);
    }
    registry
        .get_network_by_key(chain)
        .map(|n| n.chain_id)
        .with_context(|| format!("unknown network {chain}"))
}

fn ensure_success(receipt: &BridgeOutReceipt) -> anyhow::Result<()> {
    if !receipt.success {
        anyhow::bail!("bridge-out transaction {} reverted", receipt.transaction_hash);
    }
    Ok(())
}

// Wires providers, contract gateways, the estimator and the wallet for a single command.
// Returns the context and the holograph id of the source chain.
fn connect(
    config: &HolographConfig,
    registry: NetworkRegistry,
    common: &CommonArgs,
    args: &BridgeOutArgs,
    source: u64,
) -> anyhow::Result<(AssetContext, u32)> {
    let source_id = registry
        .get_network_by_chain_id(source)
        .context("source chain is not supported")?
        .holograph_id;

    let timeout = Duration::from_secs(common.provider_client_timeout_seconds);
    let mut providers = HashMap::new();
    for network in &config.networks {
        let provider = holograph_provider::new_alloy_provider(
            network.chain_id,
            &network.rpc_url,
            timeout,
        )
        .with_context(|| format!("should connect to chain {}", network.chain_id))?;
        providers.insert(network.chain_id, provider);
    }

    let private_key = SecretString::new(
        common
            .private_key
            .clone()
            .context("must provide private_key")?,
    );
    let wallet = LocalWallet::from_private_key(&private_key, providers.clone())?;

    let chains = ChainProviders::new(providers.clone()).with_simulation_sender(Some(
        config.bridge.simulation_sender.unwrap_or(wallet.address()),
    ));
    tracing::info!(
        "Connected chains: {:?}",
        chains.chain_ids().collect::<Vec<_>>()
    );

    let settings = Settings {
        check_balance: config.bridge.check_balance && !args.skip_balance_check,
        source_gas: GasSettings {
            gas_price: args.gas_price,
            gas_limit: args.gas_limit,
        },
    };
    let estimator = BridgeOutEstimatorImpl::new(
        providers
            .into_iter()
            .map(|(chain_id, provider)| (chain_id, AlloyEvmProvider::new(provider)))
            .collect(),
        AlloyHolographBridge::new(config.contracts.bridge, chains.clone()),
        AlloyHolographOperator::new(config.contracts.operator, chains),
        registry,
        config.gas_controller(),
        settings,
    );

    Ok((
        AssetContext::new(Arc::new(estimator), Arc::new(wallet)),
        source_id,
    ))
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate command
    ///
    /// Estimates the gas and fees of a bridge-out and prints them as JSON
    #[command(name = "estimate")]
    Estimate(BridgeOutArgs),

    /// Bridge command
    ///
    /// Submits a bridge-out and waits for its receipt on the source chain
    #[command(name = "bridge")]
    Bridge(BridgeOutArgs),
}

#[derive(Debug, Args)]
struct BridgeOutArgs {
    /// Source network, an EVM chain id or a network key
    #[arg(long = "source", name = "source")]
    source: String,

    /// Destination network, an EVM chain id or a network key
    #[arg(long = "destination", name = "destination")]
    destination: String,

    /// Source chain gas price in wei, defaults to the node's gas price
    #[arg(long = "gas_price", name = "gas_price", env = "GAS_PRICE")]
    gas_price: Option<u128>,

    /// Source chain gas limit, defaults to 450000
    #[arg(long = "gas_limit", name = "gas_limit", env = "GAS_LIMIT")]
    gas_limit: Option<u64>,

    /// Skip the wallet balance check before submitting
    #[arg(long = "skip_balance_check", name = "skip_balance_check")]
    skip_balance_check: bool,

    #[command(subcommand)]
    asset: AssetCommand,
}

#[derive(Debug, Args)]
#[command(next_help_heading = "Common")]
pub struct CommonArgs {
    /// Config file path (TOML, JSON or YAML)
    #[arg(
        long = "config",
        name = "config",
        env = "HOLOGRAPH_CONFIG",
        global = true
    )]
    config: Option<String>,

    /// Private key of the wallet, hex encoded
    #[arg(
        long = "private_key",
        name = "private_key",
        env = "PRIVATE_KEY",
        hide_env_values = true,
        global = true
    )]
    private_key: Option<String>,

    /// Timeout of a single RPC request, in seconds
    #[arg(
        long = "provider_client_timeout_seconds",
        name = "provider_client_timeout_seconds",
        env = "PROVIDER_CLIENT_TIMEOUT_SECONDS",
        default_value = "10",
        global = true
    )]
    provider_client_timeout_seconds: u64,
}

#[derive(Debug, Args)]
#[command(next_help_heading = "Logging")]
pub struct LogsArgs {
    /// Log file
    ///
    /// If not provided, logs will be written to stderr
    #[arg(
        long = "log.file",
        name = "log.file",
        env = "LOG_FILE",
        default_value = None,
        global = true
    )]
    file: Option<String>,

    /// Log JSON
    ///
    /// If set, logs will be written in JSON format
    #[arg(
        long = "log.json",
        name = "log.json",
        env = "LOG_JSON",
        required = false,
        num_args = 0,
        global = true
    )]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log.level",
        name = "log.level",
        env = "LOG_LEVEL",
        default_value = "info",
        global = true
    )]
    level: String,
}

/// CLI options
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    common: CommonArgs,

    #[clap(flatten)]
    logs: LogsArgs,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::TxHash;

    use super::*;

    #[test]
    fn test_parse_estimate_nft() {
        let cli = Cli::try_parse_from([
            "holograph",
            "estimate",
            "--source",
            "5",
            "--destination",
            "80001",
            "nft",
            "--contract",
            "0x0000000000000000000000000000000000000c01",
            "--token_id",
            "42",
        ])
        .unwrap();
        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        assert_eq!(args.source, "5");
        assert_eq!(args.destination, "80001");
        assert!(!args.skip_balance_check);
        assert!(matches!(args.asset, AssetCommand::Nft { .. }));
        assert_eq!(cli.common.provider_client_timeout_seconds, 10);
    }

    #[test]
    fn test_resolve_chain() {
        let registry = NetworkRegistry::default();
        assert_eq!(resolve_chain(&registry, "80001").unwrap(), 80001);
        assert_eq!(resolve_chain(&registry, "polygonTestnet").unwrap(), 80001);
        assert_eq!(resolve_chain(&registry, "ETHEREUMTESTNETGOERLI").unwrap(), 5);
        assert!(resolve_chain(&registry, "localhost").is_err());
    }

    #[test]
    fn test_reverted_receipt_fails() {
        let mut receipt = BridgeOutReceipt {
            transaction_hash: TxHash::with_last_byte(1),
            block_number: Some(10),
            gas_used: 21_000,
            success: true,
        };
        ensure_success(&receipt).unwrap();

        receipt.success = false;
        let err = ensure_success(&receipt).unwrap_err();
        assert!(err.to_string().contains("reverted"));
    }

    #[test]
    fn test_missing_destination() {
        assert!(Cli::try_parse_from(["holograph", "bridge", "--source", "5", "nft"]).is_err());
    }
}

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

use std::{collections::HashMap, sync::Arc, time::Instant};

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, U256};
use holograph_contracts::functions::{BRIDGE_OUT_REQUEST, JOB_ESTIMATOR};
use holograph_provider::{EvmProvider, HolographBridge, HolographOperator, TransactionRequest};
use holograph_signer::Wallet;
use holograph_types::{
    chain::MANTLE_CHAIN_IDS, BridgeConfig, BridgeOutEstimate, BridgeOutReceipt, ChainGas,
    GasController, GasOperation, GasSettings, NetworkRegistry,
};
use holograph_utils::math;
use metrics::{Counter, Histogram};
use metrics_derive::Metrics;
#[cfg(feature = "test-utils")]
use mockall::automock;
use tracing::{debug, info, instrument, warn};

use crate::{gas::initialize_gas_pricing, BridgeError, BridgeResult};

/// Gas handed to `jobEstimator` on Mantle, whose gas units are priced far below other chains
const MANTLE_JOB_STIPEND: u64 = 1_000_000_000;
/// Gas handed to `jobEstimator` everywhere else
const DEFAULT_JOB_STIPEND: u64 = 10_000_000;
/// Source chain gas limit used when the caller supplies none
pub const DEFAULT_SOURCE_GAS_LIMIT: u64 = 450_000;
/// Margin applied to the quoted protocol and messaging fees
const FEE_MARGIN_PERCENT: u32 = 125;

/// A request to move an asset, or deploy a contract, from one chain to another
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeOutRequest {
    /// EVM chain id the transaction is sent on
    pub source_chain_id: u64,
    /// EVM chain id the operator executes the job on
    pub destination_chain_id: u64,
    /// Holographable contract handling the bridge-out
    pub contract: Address,
    /// Asset specific payload
    pub payload: Bytes,
    /// Operation, selects the gas controller entry
    pub operation: GasOperation,
}

/// Estimator settings
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    /// Check the wallet balance before submitting a bridge-out
    pub check_balance: bool,
    /// Caller supplied source chain gas, replaces the node's gas price and the default limit
    pub source_gas: GasSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            check_balance: true,
            source_gas: GasSettings::default(),
        }
    }
}

impl From<&BridgeConfig> for Settings {
    fn from(config: &BridgeConfig) -> Self {
        Self {
            check_balance: config.check_balance,
            ..Default::default()
        }
    }
}

/// Estimates and executes bridge-out requests
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait BridgeOutEstimator: Send + Sync {
    /// Estimate the gas on both chains and the fees of a bridge-out, and encode its transaction
    async fn estimate_bridge_out(&self, request: &BridgeOutRequest)
        -> BridgeResult<BridgeOutEstimate>;

    /// Estimate a bridge-out, submit it through `wallet` and wait for its receipt
    async fn bridge_out(
        &self,
        wallet: Arc<dyn Wallet>,
        request: &BridgeOutRequest,
    ) -> BridgeResult<BridgeOutReceipt>;
}

/// Bridge-out estimator backed by the protocol contracts
pub struct BridgeOutEstimatorImpl<P, B, O> {
    providers: HashMap<u64, P>,
    bridge: B,
    operator: O,
    registry: NetworkRegistry,
    gas_controller: GasController,
    settings: Settings,
    metrics: EstimatorMetrics,
}

#[async_trait::async_trait]
impl<P, B, O> BridgeOutEstimator for BridgeOutEstimatorImpl<P, B, O>
where
    P: EvmProvider,
    B: HolographBridge,
    O: HolographOperator,
{
    #[instrument(skip_all, fields(
        source = request.source_chain_id,
        destination = request.destination_chain_id,
        operation = %request.operation,
    ))]
    async fn estimate_bridge_out(
        &self,
        request: &BridgeOutRequest,
    ) -> BridgeResult<BridgeOutEstimate> {
        let timer = Instant::now();
        let result = self.estimate(request).await;
        self.metrics
            .estimate_ms
            .record(timer.elapsed().as_millis() as f64);

        match &result {
            Ok(_) => self.metrics.estimates.increment(1),
            Err(e) => {
                warn!("bridge-out estimation failed: {e}");
                self.metrics.estimate_failures.increment(1);
            }
        }
        result
    }

    #[instrument(skip_all, fields(
        source = request.source_chain_id,
        destination = request.destination_chain_id,
        operation = %request.operation,
    ))]
    async fn bridge_out(
        &self,
        wallet: Arc<dyn Wallet>,
        request: &BridgeOutRequest,
    ) -> BridgeResult<BridgeOutReceipt> {
        let estimate = self.estimate_bridge_out(request).await?;
        let chain_id = request.source_chain_id;

        if self.settings.check_balance {
            let required = estimate
                .value
                .saturating_add(estimate.gas_source.max_cost());
            let available = self.provider(chain_id)?.get_balance(wallet.address()).await?;
            if available < required {
                return Err(BridgeError::InsufficientFunds {
                    required,
                    available,
                });
            }
        }

        let tx = TransactionRequest::default()
            .with_to(self.bridge.address())
            .with_input(estimate.unsigned_tx)
            .with_value(estimate.value)
            .with_gas_limit(estimate.gas_source.gas_limit)
            .with_gas_price(estimate.gas_source.gas_price);

        let hash = wallet.send_transaction(chain_id, tx).await?;
        info!(function = %BRIDGE_OUT_REQUEST, "bridge-out submitted: {hash:?}");

        let receipt = wallet.wait_for_transaction_receipt(chain_id, hash).await?;
        self.metrics.bridge_outs.increment(1);
        if !receipt.success {
            warn!("bridge-out {hash:?} reverted");
        }
        Ok(receipt)
    }
}

impl<P, B, O> BridgeOutEstimatorImpl<P, B, O>
where
    P: EvmProvider,
    B: HolographBridge,
    O: HolographOperator,
{
    /// Create a new estimator.
    ///
    /// `providers` must hold a provider for every chain a request may name, as source or
    /// destination.
    pub fn new(
        providers: HashMap<u64, P>,
        bridge: B,
        operator: O,
        registry: NetworkRegistry,
        gas_controller: GasController,
        settings: Settings,
    ) -> Self {
        Self {
            providers,
            bridge,
            operator,
            registry,
            gas_controller,
            settings,
            metrics: EstimatorMetrics::default(),
        }
    }

    async fn estimate(&self, request: &BridgeOutRequest) -> BridgeResult<BridgeOutEstimate> {
        let source = request.source_chain_id;
        let destination = request.destination_chain_id;

        self.registry.get_network_by_chain_id(source)?;
        let to_chain = self.registry.get_network_by_chain_id(destination)?.holograph_id;
        let source_provider = self.provider(source)?;
        let destination_provider = self.provider(destination)?;

        let params = self.gas_controller.params(request.operation, destination);

        let gas_limit = match params.gas_limit {
            Some(gas_limit) => gas_limit,
            None => self.estimate_destination_gas(request, to_chain).await?,
        };
        let gas_limit = params.apply_gas_limit_multiplier(gas_limit);
        self.metrics.destination_gas.record(gas_limit as f64);

        let gas_price = match params.gas_price {
            Some(gas_price) => gas_price,
            None => destination_gas_price(destination, destination_provider).await?,
        };
        let gas_price = params.apply_gas_price_multiplier(gas_price);
        debug!("destination gas: limit {gas_limit}, price {gas_price}");

        let wrapped = self
            .bridge
            .get_bridge_out_request_payload(
                source,
                to_chain,
                request.contract,
                U256::from(gas_limit),
                U256::from(gas_price),
                request.payload.clone(),
            )
            .await?;

        let fee = self
            .bridge
            .get_message_fee(
                source,
                to_chain,
                U256::from(gas_limit),
                U256::from(gas_price),
                wrapped,
            )
            .await?;
        let value = math::uint_percent(fee.total(), FEE_MARGIN_PERCENT);
        debug!("message fee: {fee:?}, value {value}");

        let unsigned_tx = self.bridge.bridge_out_request_call_data(
            to_chain,
            request.contract,
            U256::from(gas_limit),
            U256::from(gas_price),
            request.payload.clone(),
        );

        let source_gas_price = match self.settings.source_gas.gas_price {
            Some(gas_price) => gas_price,
            None => source_provider.get_gas_price().await?,
        };
        let source_gas_limit = self
            .settings
            .source_gas
            .gas_limit
            .unwrap_or(DEFAULT_SOURCE_GAS_LIMIT);

        Ok(BridgeOutEstimate {
            gas_source: ChainGas {
                chain_id: source,
                gas_price: source_gas_price,
                gas_limit: source_gas_limit,
            },
            gas_destination: ChainGas {
                chain_id: destination,
                gas_price,
                gas_limit,
            },
            value,
            unsigned_tx,
        })
    }

    // Simulates the bridge-in job on the destination chain with a maximal gas budget and
    // measures what it consumed.
    async fn estimate_destination_gas(
        &self,
        request: &BridgeOutRequest,
        to_chain: u32,
    ) -> BridgeResult<u64> {
        let stub = self
            .bridge
            .get_bridge_out_request_payload(
                request.source_chain_id,
                to_chain,
                request.contract,
                U256::MAX,
                U256::MAX,
                request.payload.clone(),
            )
            .await?;

        let stipend = job_stipend(request.destination_chain_id);
        let remaining = self
            .operator
            .job_estimator(request.destination_chain_id, stub, stipend)
            .await?;
        let used = stipend.saturating_sub(remaining.saturating_to::<u64>());
        debug!(function = %JOB_ESTIMATOR, "stipend {stipend}, remaining {remaining}, used {used}");
        Ok(used)
    }

    fn provider(&self, chain_id: u64) -> BridgeResult<&P> {
        self.providers
            .get(&chain_id)
            .ok_or(BridgeError::NetworkUnavailable { chain_id })
    }
}

fn job_stipend(chain_id: u64) -> u64 {
    if MANTLE_CHAIN_IDS.contains(&chain_id) {
        MANTLE_JOB_STIPEND
    } else {
        DEFAULT_JOB_STIPEND
    }
}

async fn destination_gas_price<P: EvmProvider>(chain_id: u64, provider: &P) -> BridgeResult<u128> {
    let pricing = initialize_gas_pricing(chain_id, provider).await?;
    match pricing.price() {
        Some(price) => Ok(price),
        None => Ok(provider.get_gas_price().await?),
    }
}

#[derive(Metrics)]
#[metrics(scope = "bridge_out_estimator")]
struct EstimatorMetrics {
    #[metric(describe = "the count of successful bridge-out estimates.")]
    estimates: Counter,
    #[metric(describe = "the count of failed bridge-out estimates.")]
    estimate_failures: Counter,
    #[metric(describe = "the count of submitted bridge-outs that were mined.")]
    bridge_outs: Counter,
    #[metric(describe = "the distribution of destination gas limits.")]
    destination_gas: Histogram,
    #[metric(describe = "the distribution of bridge-out estimate time.")]
    estimate_ms: Histogram,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, bytes, TxHash, TxKind};
    use alloy_sol_types::{Revert, SolError};
    use holograph_provider::{
        MessageFee, MockEvmProvider, MockHolographBridge, MockHolographOperator, ProviderError,
    };
    use holograph_signer::MockWallet;
    use holograph_types::{
        chain::{BSC_TESTNET, ETHEREUM_GOERLI, MANTLE_TESTNET, POLYGON_MUMBAI},
        BlockTransactionFees, FeeBlock, GasOverride, GasParams,
    };

    use super::*;

    const GWEI: u128 = 1_000_000_000;
    const BRIDGE: Address = address!("0000000000000000000000000000000000000b0b");
    const COLLECTION: Address = address!("000000000000000000000000000000000000c011");
    const SENDER: Address = address!("0000000000000000000000000000000000000abc");
    const POLYGON_MUMBAI_ID: u32 = 4000000004;

    type TestEstimator =
        BridgeOutEstimatorImpl<MockEvmProvider, MockHolographBridge, MockHolographOperator>;

    fn request(destination_chain_id: u64) -> BridgeOutRequest {
        BridgeOutRequest {
            source_chain_id: ETHEREUM_GOERLI,
            destination_chain_id,
            contract: COLLECTION,
            payload: bytes!("c0ffee"),
            operation: GasOperation::BridgeNft,
        }
    }

    fn source_provider() -> MockEvmProvider {
        let mut provider = MockEvmProvider::new();
        provider.expect_get_gas_price().returning(|| Ok(5 * GWEI));
        provider
    }

    fn destination_provider(base_fee: u128) -> MockEvmProvider {
        let mut provider = MockEvmProvider::new();
        provider.expect_get_fee_block().returning(move |_, _| {
            Ok(Some(FeeBlock {
                number: 100,
                base_fee_per_gas: Some(base_fee),
                gas_used: 15_000_000,
                gas_limit: 30_000_000,
                ..Default::default()
            }))
        });
        provider
    }

    // A bridge that expects the destination holograph id and answers both payload
    // simulations, the fee quote and the call data encoding.
    fn bridge(to_chain: u32) -> MockHolographBridge {
        let mut bridge = MockHolographBridge::new();
        bridge.expect_address().return_const(BRIDGE);
        bridge
            .expect_get_bridge_out_request_payload()
            .withf(move |chain_id, to, contract, gas_limit, gas_price, payload| {
                *chain_id == ETHEREUM_GOERLI
                    && *to == to_chain
                    && *contract == COLLECTION
                    && *gas_limit == U256::MAX
                    && *gas_price == U256::MAX
                    && *payload == bytes!("c0ffee")
            })
            .returning(|_, _, _, _, _, _| Ok(bytes!("5705")));
        bridge
            .expect_get_bridge_out_request_payload()
            .withf(move |_, to, _, gas_limit, _, _| *to == to_chain && *gas_limit != U256::MAX)
            .returning(|_, _, _, _, _, _| Ok(bytes!("beef")));
        bridge
            .expect_get_message_fee()
            .withf(move |chain_id, to, _, _, payload| {
                *chain_id == ETHEREUM_GOERLI && *to == to_chain && *payload == bytes!("beef")
            })
            .returning(|_, _, _, _, _| {
                Ok(MessageFee {
                    hlg_fee: U256::from(800),
                    msg_fee: U256::from(200),
                    dst_gas_price: U256::ZERO,
                })
            });
        bridge
            .expect_bridge_out_request_call_data()
            .returning(|to_chain, contract, gas_limit, gas_price, payload| {
                holograph_provider::encode_bridge_out_request(
                    to_chain, contract, gas_limit, gas_price, payload,
                )
            });
        bridge
    }

    fn operator(chain_id: u64, stipend: u64, used: u64) -> MockHolographOperator {
        let mut operator = MockHolographOperator::new();
        operator
            .expect_job_estimator()
            .withf(move |c, payload, gas| {
                *c == chain_id && *payload == bytes!("5705") && *gas == stipend
            })
            .times(1)
            .returning(move |_, _, gas| Ok(U256::from(gas - used)));
        operator
    }

    fn estimator(
        destination_chain_id: u64,
        destination: MockEvmProvider,
        bridge: MockHolographBridge,
        operator: MockHolographOperator,
        gas_controller: GasController,
        settings: Settings,
    ) -> TestEstimator {
        let providers = HashMap::from([
            (ETHEREUM_GOERLI, source_provider()),
            (destination_chain_id, destination),
        ]);
        BridgeOutEstimatorImpl::new(
            providers,
            bridge,
            operator,
            NetworkRegistry::default(),
            gas_controller,
            settings,
        )
    }

    #[tokio::test]
    async fn test_estimate() {
        let estimator = estimator(
            POLYGON_MUMBAI,
            destination_provider(10 * GWEI),
            bridge(POLYGON_MUMBAI_ID),
            operator(POLYGON_MUMBAI, DEFAULT_JOB_STIPEND, 200_000),
            GasController::empty(),
            Settings::default(),
        );

        let estimate = estimator
            .estimate_bridge_out(&request(POLYGON_MUMBAI))
            .await
            .unwrap();

        assert_eq!(
            estimate.gas_destination,
            ChainGas {
                chain_id: POLYGON_MUMBAI,
                gas_price: 10 * GWEI,
                gas_limit: 200_000,
            }
        );
        assert_eq!(
            estimate.gas_source,
            ChainGas {
                chain_id: ETHEREUM_GOERLI,
                gas_price: 5 * GWEI,
                gas_limit: DEFAULT_SOURCE_GAS_LIMIT,
            }
        );
        assert_eq!(estimate.value, U256::from(1_250));
        assert_eq!(
            estimate.unsigned_tx,
            holograph_provider::encode_bridge_out_request(
                POLYGON_MUMBAI_ID,
                COLLECTION,
                U256::from(200_000),
                U256::from(10 * GWEI),
                bytes!("c0ffee"),
            )
        );
    }

    #[tokio::test]
    async fn test_builtin_controller_multipliers() {
        // mantle limits are raised by half, mantle jobs get the large stipend
        let mantle = estimator(
            MANTLE_TESTNET,
            destination_provider(GWEI),
            bridge(4000000009),
            operator(MANTLE_TESTNET, MANTLE_JOB_STIPEND, 1_000_000),
            GasController::default(),
            Settings::default(),
        );
        let estimate = mantle
            .estimate_bridge_out(&request(MANTLE_TESTNET))
            .await
            .unwrap();
        assert_eq!(estimate.gas_destination.gas_limit, 1_500_000);
        assert_eq!(estimate.gas_destination.gas_price, GWEI);

        // polygon prices are raised by half
        let polygon = estimator(
            POLYGON_MUMBAI,
            destination_provider(10 * GWEI),
            bridge(POLYGON_MUMBAI_ID),
            operator(POLYGON_MUMBAI, DEFAULT_JOB_STIPEND, 200_000),
            GasController::default(),
            Settings::default(),
        );
        let estimate = polygon
            .estimate_bridge_out(&request(POLYGON_MUMBAI))
            .await
            .unwrap();
        assert_eq!(estimate.gas_destination.gas_limit, 200_000);
        assert_eq!(estimate.gas_destination.gas_price, 15 * GWEI);
    }

    #[tokio::test]
    async fn test_static_overrides_skip_simulation() {
        let controller = GasController::empty().with_overrides([GasOverride {
            operation: GasOperation::BridgeNft,
            chain_id: POLYGON_MUMBAI,
            params: GasParams {
                gas_limit: Some(500_000),
                gas_price: Some(7_000_000_000),
                gas_limit_multiplier: Some(200),
                ..Default::default()
            },
        }]);

        let mut operator = MockHolographOperator::new();
        operator.expect_job_estimator().never();
        let estimator = estimator(
            POLYGON_MUMBAI,
            MockEvmProvider::new(),
            bridge(POLYGON_MUMBAI_ID),
            operator,
            controller,
            Settings {
                check_balance: true,
                source_gas: GasSettings {
                    gas_price: Some(GWEI),
                    gas_limit: Some(300_000),
                },
            },
        );

        let estimate = estimator
            .estimate_bridge_out(&request(POLYGON_MUMBAI))
            .await
            .unwrap();
        assert_eq!(estimate.gas_destination.gas_limit, 1_000_000);
        assert_eq!(estimate.gas_destination.gas_price, 7 * GWEI);
        assert_eq!(estimate.gas_source.gas_price, GWEI);
        assert_eq!(estimate.gas_source.gas_limit, 300_000);
    }

    #[tokio::test]
    async fn test_unknown_destination() {
        let estimator = estimator(
            31337,
            MockEvmProvider::new(),
            MockHolographBridge::new(),
            MockHolographOperator::new(),
            GasController::empty(),
            Settings::default(),
        );
        let err = estimator
            .estimate_bridge_out(&request(31337))
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::NetworkNotFound { chain_id: 31337 }));
    }

    #[tokio::test]
    async fn test_destination_without_provider() {
        let estimator = estimator(
            POLYGON_MUMBAI,
            MockEvmProvider::new(),
            MockHolographBridge::new(),
            MockHolographOperator::new(),
            GasController::empty(),
            Settings::default(),
        );
        let err = estimator
            .estimate_bridge_out(&request(BSC_TESTNET))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::NetworkUnavailable {
                chain_id: BSC_TESTNET
            }
        ));
    }

    #[tokio::test]
    async fn test_job_revert() {
        let mut operator = MockHolographOperator::new();
        operator.expect_job_estimator().returning(|_, _, _| {
            Err(ProviderError::Revert {
                function: JOB_ESTIMATOR.to_string(),
                data: Revert {
                    reason: "HOLOGRAPH: invalid job".to_string(),
                }
                .abi_encode()
                .into(),
            })
        });
        let estimator = estimator(
            POLYGON_MUMBAI,
            MockEvmProvider::new(),
            bridge(POLYGON_MUMBAI_ID),
            operator,
            GasController::empty(),
            Settings::default(),
        );

        let err = estimator
            .estimate_bridge_out(&request(POLYGON_MUMBAI))
            .await
            .unwrap_err();
        let BridgeError::ContractReverted {
            contract,
            function,
            cause,
        } = err
        else {
            panic!("expected a contract revert");
        };
        assert_eq!(contract, "HolographOperator");
        assert_eq!(function, "jobEstimator");
        assert_eq!(cause, "HOLOGRAPH: invalid job");
    }

    fn wallet() -> MockWallet {
        let mut wallet = MockWallet::new();
        wallet.expect_address().return_const(SENDER);
        wallet
    }

    fn funded_estimator(balance: U256) -> TestEstimator {
        let mut source = source_provider();
        source
            .expect_get_balance()
            .withf(|address| *address == SENDER)
            .returning(move |_| Ok(balance));
        let providers = HashMap::from([
            (ETHEREUM_GOERLI, source),
            (POLYGON_MUMBAI, destination_provider(10 * GWEI)),
        ]);
        BridgeOutEstimatorImpl::new(
            providers,
            bridge(POLYGON_MUMBAI_ID),
            operator(POLYGON_MUMBAI, DEFAULT_JOB_STIPEND, 200_000),
            NetworkRegistry::default(),
            GasController::empty(),
            Settings::default(),
        )
    }

    #[tokio::test]
    async fn test_bridge_out() {
        let hash = TxHash::with_last_byte(1);
        let mut wallet = wallet();
        wallet
            .expect_send_transaction()
            .withf(|chain_id, tx| {
                *chain_id == ETHEREUM_GOERLI
                    && tx.to == Some(TxKind::Call(BRIDGE))
                    && tx.value == Some(U256::from(1_250))
                    && tx.gas == Some(DEFAULT_SOURCE_GAS_LIMIT)
                    && tx.gas_price == Some(5 * GWEI)
            })
            .times(1)
            .returning(move |_, _| Ok(hash));
        wallet
            .expect_wait_for_transaction_receipt()
            .withf(move |chain_id, h| *chain_id == ETHEREUM_GOERLI && *h == hash)
            .returning(move |_, h| {
                Ok(BridgeOutReceipt {
                    transaction_hash: h,
                    block_number: Some(10),
                    gas_used: 210_000,
                    success: true,
                })
            });

        // value plus 5 gwei * 450,000
        let required = U256::from(1_250 + 5 * GWEI * 450_000);
        let receipt = funded_estimator(required)
            .bridge_out(Arc::new(wallet), &request(POLYGON_MUMBAI))
            .await
            .unwrap();
        assert_eq!(receipt.transaction_hash, hash);
        assert!(receipt.success);
    }

    #[tokio::test]
    async fn test_bridge_out_insufficient_funds() {
        let mut wallet = wallet();
        wallet.expect_send_transaction().never();

        let required = U256::from(1_250 + 5 * GWEI * 450_000);
        let err = funded_estimator(required - U256::from(1))
            .bridge_out(Arc::new(wallet), &request(POLYGON_MUMBAI))
            .await
            .unwrap_err();
        let BridgeError::InsufficientFunds {
            required: r,
            available,
        } = err
        else {
            panic!("expected insufficient funds");
        };
        assert_eq!(r, required);
        assert_eq!(available, required - U256::from(1));
    }

    #[tokio::test]
    async fn test_bridge_out_reverted_receipt() {
        let hash = TxHash::with_last_byte(2);
        let mut wallet = wallet();
        wallet
            .expect_send_transaction()
            .times(1)
            .returning(move |_, _| Ok(hash));
        wallet
            .expect_wait_for_transaction_receipt()
            .returning(move |_, h| {
                Ok(BridgeOutReceipt {
                    transaction_hash: h,
                    block_number: Some(11),
                    gas_used: 90_000,
                    success: false,
                })
            });

        let receipt = funded_estimator(U256::MAX)
            .bridge_out(Arc::new(wallet), &request(POLYGON_MUMBAI))
            .await
            .unwrap();
        assert_eq!(receipt.transaction_hash, hash);
        assert!(!receipt.success);
    }

    #[tokio::test]
    async fn test_legacy_destination_uses_node_gas_price() {
        let mut destination = MockEvmProvider::new();
        destination.expect_get_fee_block().returning(|_, full| {
            Ok(Some(FeeBlock {
                number: 100,
                base_fee_per_gas: None,
                gas_used: 0,
                gas_limit: 30_000_000,
                transactions: if full {
                    BlockTransactionFees::Full(vec![])
                } else {
                    BlockTransactionFees::default()
                },
            }))
        });
        destination
            .expect_get_gas_price()
            .times(1)
            .returning(|| Ok(8 * GWEI));

        let estimator = estimator(
            POLYGON_MUMBAI,
            destination,
            bridge(POLYGON_MUMBAI_ID),
            operator(POLYGON_MUMBAI, DEFAULT_JOB_STIPEND, 200_000),
            GasController::empty(),
            Settings::default(),
        );
        let estimate = estimator
            .estimate_bridge_out(&request(POLYGON_MUMBAI))
            .await
            .unwrap();
        assert_eq!(estimate.gas_destination.gas_price, 8 * GWEI);
    }

    #[test]
    fn test_job_stipend() {
        assert_eq!(job_stipend(5000), 1_000_000_000);
        assert_eq!(job_stipend(MANTLE_TESTNET), 1_000_000_000);
        assert_eq!(job_stipend(POLYGON_MUMBAI), 10_000_000);
    }
}

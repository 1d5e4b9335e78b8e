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

//! EIP-1559 aware gas pricing.
//!
//! A [`GasPricing`] snapshot is built from the latest block of a chain: the base fee of the
//! next block is projected from the parent's gas usage, and the priority fee is observed from
//! the transactions the parent included.

use std::cmp::{self, Ordering};

use holograph_provider::{BlockNumberOrTag, EvmProvider, ProviderResult};
use holograph_types::{
    chain::{AVALANCHE_CHAIN_IDS, BSC_CHAIN_IDS},
    FeeBlock, GasPricing, TransactionFees,
};
use tracing::{debug, instrument};

const GWEI: u128 = 1_000_000_000;

/// Minimum base fee accepted by the Avalanche C-Chain
const AVALANCHE_MIN_BASE_FEE: u128 = 25 * GWEI;
/// Minimum gas price accepted by BNB Smart Chain validators
const BSC_MIN_BASE_FEE: u128 = 3 * GWEI;

/// EIP-1559 base fee max change denominator
const BASE_FEE_MAX_CHANGE_DENOMINATOR: u128 = 8;
/// EIP-1559 elasticity multiplier
const ELASTICITY_MULTIPLIER: u64 = 2;

/// Projects the base fee of the block following `parent`.
///
/// Returns 0 if the parent carries no base fee.
pub fn calculate_next_block_fee(parent: &FeeBlock) -> u128 {
    let Some(base_fee) = parent.base_fee_per_gas else {
        return 0;
    };
    let gas_target = parent.gas_limit / ELASTICITY_MULTIPLIER;
    if gas_target == 0 {
        return base_fee;
    }
    let target = u128::from(gas_target);

    match parent.gas_used.cmp(&gas_target) {
        Ordering::Equal => base_fee,
        Ordering::Greater => {
            let delta = u128::from(parent.gas_used - gas_target);
            let increase = cmp::max(
                1,
                base_fee.saturating_mul(delta) / target / BASE_FEE_MAX_CHANGE_DENOMINATOR,
            );
            base_fee.saturating_add(increase)
        }
        Ordering::Less => {
            let delta = u128::from(gas_target - parent.gas_used);
            let decrease = base_fee.saturating_mul(delta) / target / BASE_FEE_MAX_CHANGE_DENOMINATOR;
            base_fee.saturating_sub(decrease)
        }
    }
}

/// Raises a projected base fee to the minimum a network accepts
pub fn adjust_base_block_fee(chain_id: u64, fee: u128) -> u128 {
    if AVALANCHE_CHAIN_IDS.contains(&chain_id) {
        cmp::max(fee, AVALANCHE_MIN_BASE_FEE)
    } else if BSC_CHAIN_IDS.contains(&chain_id) {
        cmp::max(fee, BSC_MIN_BASE_FEE)
    } else {
        fee
    }
}

/// Folds a block into a gas pricing snapshot.
///
/// `max_fee_per_gas` is derived from the priority fee known before this block's transactions
/// are observed.
pub fn update_gas_pricing(chain_id: u64, block: &FeeBlock, mut pricing: GasPricing) -> GasPricing {
    if block.base_fee_per_gas.is_some() {
        let next_block_fee = adjust_base_block_fee(chain_id, calculate_next_block_fee(block));
        pricing.is_eip1559 = true;
        pricing.next_block_fee = Some(next_block_fee);
        pricing.max_fee_per_gas = Some(match pricing.next_priority_fee {
            Some(priority_fee) => next_block_fee.saturating_add(priority_fee),
            None => next_block_fee,
        });
    }

    let Some(transactions) = block.transactions.as_full() else {
        return pricing;
    };

    let base_fee = block.base_fee_per_gas.unwrap_or_default();
    for tx in transactions {
        if pricing.is_eip1559 {
            let priority_fee = priority_fee(tx, base_fee);
            pricing.next_priority_fee = Some(running_average(pricing.next_priority_fee, priority_fee));
        } else if let Some(gas_price) = tx.gas_price {
            pricing.gas_price = Some(running_average(pricing.gas_price, gas_price));
        }
    }
    pricing
}

/// Builds a fresh gas pricing snapshot for a chain from its latest block.
///
/// The transactions are read from the same block the header pass saw, not from whatever block
/// is latest by then.
#[instrument(skip(provider))]
pub async fn initialize_gas_pricing<P: EvmProvider + ?Sized>(
    chain_id: u64,
    provider: &P,
) -> ProviderResult<GasPricing> {
    let mut pricing = GasPricing::default();
    let mut block_id = BlockNumberOrTag::Latest;

    if let Some(block) = provider.get_fee_block(BlockNumberOrTag::Latest, false).await? {
        block_id = BlockNumberOrTag::Number(block.number);
        pricing = update_gas_pricing(chain_id, &block, pricing);
    }
    if !pricing.is_eip1559 {
        pricing.gas_price = Some(provider.get_gas_price().await?);
    }
    if let Some(block) = provider.get_fee_block(block_id, true).await? {
        pricing = update_gas_pricing(chain_id, &block, pricing);
    }

    debug!("gas pricing for chain {chain_id}: {pricing:?}");
    Ok(pricing)
}

// classified by fee model rather than by type, blob and 7702 transactions are dynamic fee too
fn priority_fee(tx: &TransactionFees, base_fee: u128) -> u128 {
    match tx.max_fee_per_gas {
        Some(max_fee) => cmp::min(
            tx.max_priority_fee_per_gas.unwrap_or_default(),
            max_fee.saturating_sub(base_fee),
        ),
        None => tx.gas_price.unwrap_or_default().saturating_sub(base_fee),
    }
}

// average of the previous value and the new one, not a mean over all samples
fn running_average(previous: Option<u128>, value: u128) -> u128 {
    match previous {
        Some(previous) => (previous / 2).saturating_add(value / 2) + (previous % 2 + value % 2) / 2,
        None => value,
    }
}

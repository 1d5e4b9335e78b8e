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

use std::time::Duration;

use alloy_provider::{DynProvider, Provider as AlloyProvider, ProviderBuilder};
use alloy_rpc_client::ClientBuilder;
use anyhow::Context;
use layer::RpcLayer;
use url::Url;

pub(crate) mod evm;
pub(crate) mod holograph;
mod layer;

/// Create a new alloy provider from a given RPC URL.
///
/// Requests that do not complete within `timeout` fail with a transport error.
pub fn new_alloy_provider(
    chain_id: u64,
    rpc_url: &str,
    timeout: Duration,
) -> anyhow::Result<DynProvider> {
    let url = Url::parse(rpc_url).context("invalid rpc url")?;
    let client = ClientBuilder::default()
        .layer(RpcLayer::new(chain_id, timeout))
        .http(url);
    Ok(ProviderBuilder::new().connect_client(client).erased())
}

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

//! Transport middleware that bounds every request with a client side timeout and records
//! per method request metrics.
//!
//! The timeout is the only bound on a request, the middleware never retries.

use std::{
    task::{Context, Poll},
    time::{Duration, Instant},
};

use alloy_json_rpc::{RequestPacket, ResponsePacket};
use alloy_transport::{TransportError, TransportFut};
use futures_util::FutureExt;
use metrics::{Counter, Histogram};
use metrics_derive::Metrics;
use tower::{Layer, Service};

/// Layer producing an [`RpcService`]
#[derive(Clone, Debug)]
pub(crate) struct RpcLayer {
    chain_id: u64,
    timeout: Duration,
}

impl RpcLayer {
    pub(crate) fn new(chain_id: u64, timeout: Duration) -> Self {
        Self { chain_id, timeout }
    }
}

impl<S> Layer<S> for RpcLayer
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError> + Sync,
{
    type Service = RpcService<S>;

    fn layer(&self, service: S) -> Self::Service {
        RpcService {
            service,
            chain_id: self.chain_id,
            timeout: self.timeout,
        }
    }
}

/// Applies a timeout to requests and records their metrics
#[derive(Clone, Debug)]
pub(crate) struct RpcService<S> {
    service: S,
    chain_id: u64,
    timeout: Duration,
}

impl<S> Service<RequestPacket> for RpcService<S>
where
    S: Service<
            RequestPacket,
            Response = ResponsePacket,
            Error = TransportError,
            Future = TransportFut<'static>,
        > + Sync
        + Send
        + Clone
        + 'static,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = TransportFut<'static>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let metrics = RpcMetrics::new_with_labels(&[
            ("chain_id", self.chain_id.to_string()),
            ("method", method_name(&request)),
        ]);
        metrics.requests.increment(1);

        let timeout = self.timeout;
        let response = self.service.call(request);
        async move {
            let start = Instant::now();
            let result = match tokio::time::timeout(timeout, response).await {
                Ok(result) => result,
                Err(_) => {
                    metrics.timeouts.increment(1);
                    Err(TransportError::local_usage_str(
                        "provider request timeout from client side",
                    ))
                }
            };
            metrics
                .request_latency_ms
                .record(start.elapsed().as_millis() as f64);
            if result.is_err() {
                metrics.errors.increment(1);
            }
            result
        }
        .boxed()
    }
}

#[derive(Metrics)]
#[metrics(scope = "holograph_rpc")]
struct RpcMetrics {
    #[metric(describe = "the number of rpc requests sent.")]
    requests: Counter,
    #[metric(describe = "the number of rpc requests that failed.")]
    errors: Counter,
    #[metric(describe = "the number of rpc requests that timed out.")]
    timeouts: Counter,
    #[metric(describe = "the latency of rpc requests in milliseconds.")]
    request_latency_ms: Histogram,
}

fn method_name(request: &RequestPacket) -> String {
    match request {
        RequestPacket::Single(request) => request.method().to_string(),
        // can't extract a single method name for a batch
        RequestPacket::Batch(_) => "batch".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use alloy_json_rpc::{Id, Request, Response, ResponsePayload};
    use serde_json::value::RawValue;
    use tower::ServiceExt;

    use super::*;

    fn request(method: &'static str) -> RequestPacket {
        RequestPacket::Single(Request::new(method, Id::Number(1), ()).serialize().unwrap())
    }

    fn response() -> ResponsePacket {
        ResponsePacket::Single(Response {
            id: Id::Number(1),
            payload: ResponsePayload::Success(
                RawValue::from_string("\"0x1\"".to_string()).unwrap(),
            ),
        })
    }

    #[test]
    fn test_method_name() {
        assert_eq!(method_name(&request("eth_chainId")), "eth_chainId");
        assert_eq!(method_name(&RequestPacket::Batch(vec![])), "batch");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout() {
        let slow = tower::service_fn(|_req: RequestPacket| {
            async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok::<_, TransportError>(response())
            }
            .boxed()
        });
        let service = RpcLayer::new(1, Duration::from_secs(1)).layer(slow);
        assert!(service.oneshot(request("eth_blockNumber")).await.is_err());
    }

    #[tokio::test]
    async fn test_passes_through() {
        let fast = tower::service_fn(|_req: RequestPacket| {
            async { Ok::<_, TransportError>(response()) }.boxed()
        });
        let service = RpcLayer::new(1, Duration::from_secs(1)).layer(fast);
        assert!(service.oneshot(request("eth_blockNumber")).await.is_ok());
    }
}

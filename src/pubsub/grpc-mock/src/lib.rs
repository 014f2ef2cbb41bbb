// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! End-to-end mocks for the `google.pubsub.v1.Publisher` and
//! `google.pubsub.v1.Subscriber` gRPC services.
//!
//! Use this crate for end-to-end client library tests. Start a local server
//! implementing one of the services, with the implementation defined by a
//! mock. Then test the client library against this mock.
//!
//! # Example
//! ```
//! use pubsub_grpc_mock::{start_subscriber, MockSubscriber};
//!
//! # async fn test() -> anyhow::Result<()> {
//! let mut mock = MockSubscriber::new();
//! mock.expect_delete_subscription()
//!     .return_once(|_| Err(tonic::Status::not_found("test message")));
//! // Starts a service using `mock` and a random port.
//! let (endpoint, _server) = start_subscriber("0.0.0.0:0", mock).await?;
//! // ... point the client library at `endpoint` ...
//! # Ok(()) }
//! ```

mod mocks;
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::TcpListenerStream;

/// A mock for the `google.pubsub.v1.Publisher` gRPC service.
///
/// # Example
/// ```
/// use pubsub_grpc_mock::MockPublisher;
/// let mut mock = MockPublisher::new();
/// mock.expect_create_topic()
///     .return_once(|request| Ok(tonic::Response::new(request.into_inner())));
/// ```
pub use mocks::MockPublisher;

/// A mock for the `google.pubsub.v1.Subscriber` gRPC service.
///
/// # Example
/// ```
/// use pubsub_grpc_mock::MockSubscriber;
/// use pubsub_grpc_mock::google::pubsub::v1;
/// let mut mock = MockSubscriber::new();
/// mock.expect_list_subscriptions()
///     .return_once(|_| Ok(tonic::Response::new(v1::ListSubscriptionsResponse::default())));
/// ```
pub use mocks::MockSubscriber;

/// Starts a mock `google.pubsub.v1.Publisher` gRPC service.
///
/// Returns the endpoint URI for the service and a handle to the task running
/// it. Use `"0.0.0.0:0"` as the address to pick a random port.
pub async fn start_publisher<T>(
    address: &str,
    service: T,
) -> anyhow::Result<(String, JoinHandle<()>)>
where
    T: google::pubsub::v1::publisher_server::Publisher,
{
    let listener = tokio::net::TcpListener::bind(address).await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async {
        let stream = TcpListenerStream::new(listener);
        let _ = tonic::transport::Server::builder()
            .add_service(google::pubsub::v1::publisher_server::PublisherServer::new(service))
            .serve_with_incoming(stream)
            .await;
    });

    Ok((to_uri(addr), server))
}

/// Starts a mock `google.pubsub.v1.Subscriber` gRPC service.
///
/// # Example
/// ```
/// use pubsub_grpc_mock::{start_subscriber, MockSubscriber};
/// # async fn test() -> anyhow::Result<()> {
/// let mut mock = MockSubscriber::new();
/// mock.expect_create_subscription()
///     .return_once(|_| Err(tonic::Status::already_exists("test message")));
/// // starts a service using `mock` and a random port.
/// let (address, server) = start_subscriber("0.0.0.0:0", mock).await?;
/// // ... ... test goes here ... ...
/// # Ok(()) }
/// ```
pub async fn start_subscriber<T>(
    address: &str,
    service: T,
) -> anyhow::Result<(String, JoinHandle<()>)>
where
    T: google::pubsub::v1::subscriber_server::Subscriber,
{
    let listener = tokio::net::TcpListener::bind(address).await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async {
        let stream = TcpListenerStream::new(listener);
        let _ = tonic::transport::Server::builder()
            .add_service(google::pubsub::v1::subscriber_server::SubscriberServer::new(service))
            .serve_with_incoming(stream)
            .await;
    });

    Ok((to_uri(addr), server))
}

fn to_uri(addr: SocketAddr) -> String {
    if addr.is_ipv6() {
        format!("http://[{}]:{}", addr.ip(), addr.port())
    } else {
        format!("http://{}:{}", addr.ip(), addr.port())
    }
}

pub mod google {
    pub mod pubsub {
        pub mod v1 {
            include!("generated/protos/google.pubsub.v1.rs");
        }
    }
}

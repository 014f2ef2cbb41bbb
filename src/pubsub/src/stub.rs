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
//! Traits to mock the Cloud Pub/Sub administrative services.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! error conditions. The traits in this module are implemented by the default
//! stubs returned by [create_default_subscriber_stub] and
//! [create_default_publisher_stub]. Applications can provide their own
//! implementations, for example to wrap the default stubs with logging or
//! retry decorators.
//!
//! Each method sends exactly one RPC. There are no retries, and errors are
//! returned unmodified to the caller.

use crate::Result;
use crate::model;
use crate::options::ConnectionOptions;
use crate::transport::{DefaultPublisherStub, DefaultSubscriberStub};
use gax::options::RequestOptions;
use std::sync::Arc;

/// Defines the interface of the `google.pubsub.v1.Subscriber` administrative
/// RPCs.
#[async_trait::async_trait]
pub trait SubscriberStub: std::fmt::Debug + Send + Sync {
    /// Creates a subscription, returning the subscription as created by the
    /// service.
    async fn create_subscription(
        &self,
        req: model::Subscription,
        options: RequestOptions,
    ) -> Result<model::Subscription>;

    /// Lists one page of subscriptions in a project.
    async fn list_subscriptions(
        &self,
        req: model::ListSubscriptionsRequest,
        options: RequestOptions,
    ) -> Result<model::ListSubscriptionsResponse>;

    /// Deletes a subscription.
    async fn delete_subscription(
        &self,
        req: model::DeleteSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<()>;
}

/// Defines the interface of the `google.pubsub.v1.Publisher` administrative
/// RPCs.
#[async_trait::async_trait]
pub trait PublisherStub: std::fmt::Debug + Send + Sync {
    /// Creates a topic, returning the topic as created by the service.
    async fn create_topic(&self, req: model::Topic, options: RequestOptions)
    -> Result<model::Topic>;

    /// Deletes a topic.
    async fn delete_topic(
        &self,
        req: model::DeleteTopicRequest,
        options: RequestOptions,
    ) -> Result<()>;
}

/// Creates a stub for the `google.pubsub.v1.Subscriber` service.
///
/// Stubs created with the same `channel_id` (and equal options) may share the
/// underlying gRPC channel, stubs with different ids never do. The channel
/// connects on the first request, and must be created within a Tokio runtime.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_admin::options::ConnectionOptions;
/// # use google_cloud_pubsub_admin::stub::create_default_subscriber_stub;
/// # async fn sample() -> google_cloud_pubsub_admin::Result<()> {
/// let stub = create_default_subscriber_stub(&ConnectionOptions::new(), 0)?;
/// # Ok(()) }
/// ```
pub fn create_default_subscriber_stub(
    options: &ConnectionOptions,
    channel_id: i32,
) -> Result<Arc<dyn SubscriberStub>> {
    let stub = DefaultSubscriberStub::new(options, channel_id)?;
    Ok(Arc::new(stub))
}

/// Creates a stub for the `google.pubsub.v1.Publisher` service.
///
/// See [create_default_subscriber_stub] for the channel sharing rules.
pub fn create_default_publisher_stub(
    options: &ConnectionOptions,
    channel_id: i32,
) -> Result<Arc<dyn PublisherStub>> {
    let stub = DefaultPublisherStub::new(options, channel_id)?;
    Ok(Arc::new(stub))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) SubscriberStub {}
        #[async_trait::async_trait]
        impl SubscriberStub for SubscriberStub {
            async fn create_subscription(
                &self,
                req: model::Subscription,
                options: RequestOptions,
            ) -> Result<model::Subscription>;
            async fn list_subscriptions(
                &self,
                req: model::ListSubscriptionsRequest,
                options: RequestOptions,
            ) -> Result<model::ListSubscriptionsResponse>;
            async fn delete_subscription(
                &self,
                req: model::DeleteSubscriptionRequest,
                options: RequestOptions,
            ) -> Result<()>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) PublisherStub {}
        #[async_trait::async_trait]
        impl PublisherStub for PublisherStub {
            async fn create_topic(
                &self,
                req: model::Topic,
                options: RequestOptions,
            ) -> Result<model::Topic>;
            async fn delete_topic(
                &self,
                req: model::DeleteTopicRequest,
                options: RequestOptions,
            ) -> Result<()>;
        }
    }

    #[tokio::test]
    async fn factories() -> anyhow::Result<()> {
        let options = crate::grpc::tests::test_options("http://localhost:1");
        let subscriber = create_default_subscriber_stub(&options, 0)?;
        let publisher = create_default_publisher_stub(&options, 0)?;
        let fmt = format!("{subscriber:?} {publisher:?}");
        assert!(fmt.contains("DefaultSubscriberStub"), "{fmt}");
        assert!(fmt.contains("DefaultPublisherStub"), "{fmt}");
        Ok(())
    }
}

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
//! A connection to the `google.pubsub.v1.Subscriber` administrative RPCs.
//!
//! # Example
//! ```
//! # use google_cloud_pubsub_admin::builder::CreateSubscriptionBuilder;
//! # use google_cloud_pubsub_admin::options::ConnectionOptions;
//! # use google_cloud_pubsub_admin::subscriber_connection::make_subscriber_connection;
//! # use google_cloud_pubsub_admin::{Subscription, Topic};
//! # async fn sample() -> google_cloud_pubsub_admin::Result<()> {
//! let connection = make_subscriber_connection(ConnectionOptions::new())?;
//! let request = CreateSubscriptionBuilder::new(
//!     &Subscription::new("my-project", "my-subscription"),
//!     &Topic::new("my-project", "my-topic"),
//! )
//! .add_label("team", "billing")
//! .into_proto();
//! let subscription = connection.create_subscription(request).await?;
//! println!("created {}", subscription.name);
//!
//! let mut items = connection.list_subscriptions("my-project").by_item();
//! while let Some(item) = items.next().await {
//!     println!("found {}", item?.name);
//! }
//! # Ok(()) }
//! ```

use crate::options::ConnectionOptions;
use crate::paginator::Paginator;
use crate::stub::{SubscriberStub, create_default_subscriber_stub};
use crate::{Result, Subscription, model};
use gax::options::RequestOptions;
use std::sync::Arc;

/// Administrative operations on subscriptions.
#[async_trait::async_trait]
pub trait SubscriberConnection: std::fmt::Debug + Send + Sync {
    /// Creates a new subscription.
    ///
    /// The request is typically assembled with
    /// [CreateSubscriptionBuilder][crate::builder::CreateSubscriptionBuilder].
    async fn create_subscription(
        &self,
        request: model::Subscription,
    ) -> Result<model::Subscription>;

    /// Lists the subscriptions in a project.
    ///
    /// Pages are fetched on demand as the returned stream is polled.
    fn list_subscriptions(&self, project_id: &str) -> Paginator<model::ListSubscriptionsResponse>;

    /// Deletes an existing subscription.
    async fn delete_subscription(&self, subscription: &Subscription) -> Result<()>;
}

/// Creates a [SubscriberConnection] using the default stub, on channel 0.
pub fn make_subscriber_connection(
    options: ConnectionOptions,
) -> Result<Arc<dyn SubscriberConnection>> {
    let stub = create_default_subscriber_stub(&options, 0)?;
    Ok(make_subscriber_connection_from_stub(stub))
}

/// Creates a [SubscriberConnection] over an existing stub.
pub fn make_subscriber_connection_from_stub(
    stub: Arc<dyn SubscriberStub>,
) -> Arc<dyn SubscriberConnection> {
    Arc::new(SubscriberConnectionImpl { stub })
}

#[derive(Debug)]
struct SubscriberConnectionImpl {
    stub: Arc<dyn SubscriberStub>,
}

#[async_trait::async_trait]
impl SubscriberConnection for SubscriberConnectionImpl {
    async fn create_subscription(
        &self,
        request: model::Subscription,
    ) -> Result<model::Subscription> {
        self.stub
            .create_subscription(request, RequestOptions::default())
            .await
    }

    fn list_subscriptions(&self, project_id: &str) -> Paginator<model::ListSubscriptionsResponse> {
        let stub = self.stub.clone();
        let project = format!("projects/{project_id}");
        let execute = move |page_token: String| {
            let stub = stub.clone();
            let request = model::ListSubscriptionsRequest {
                project: project.clone(),
                page_token,
                ..Default::default()
            };
            async move {
                stub.list_subscriptions(request, RequestOptions::default())
                    .await
            }
        };
        Paginator::new(String::new(), execute)
    }

    async fn delete_subscription(&self, subscription: &Subscription) -> Result<()> {
        let request = model::DeleteSubscriptionRequest {
            subscription: subscription.full_name(),
        };
        self.stub
            .delete_subscription(request, RequestOptions::default())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CreateSubscriptionBuilder;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use crate::stub::tests::MockSubscriberStub;
    use crate::Topic;
    use mockall::Sequence;

    fn response(names: &[&str], next_page_token: &str) -> model::ListSubscriptionsResponse {
        model::ListSubscriptionsResponse {
            subscriptions: names
                .iter()
                .map(|n| model::Subscription {
                    name: n.to_string(),
                    ..Default::default()
                })
                .collect(),
            next_page_token: next_page_token.to_string(),
        }
    }

    #[tokio::test]
    async fn create_subscription() -> anyhow::Result<()> {
        let mut mock = MockSubscriberStub::new();
        mock.expect_create_subscription()
            .withf(|r, _| {
                r.name == "projects/test-project/subscriptions/test-subscription"
                    && r.topic == "projects/test-project/topics/test-topic"
                    && r.filter == "attributes.color = \"red\""
            })
            .return_once(|r, _| Ok(r));
        let connection = make_subscriber_connection_from_stub(Arc::new(mock));
        let request = CreateSubscriptionBuilder::new(
            &Subscription::new("test-project", "test-subscription"),
            &Topic::new("test-project", "test-topic"),
        )
        .set_filter("attributes.color = \"red\"")
        .into_proto();
        let got = connection.create_subscription(request.clone()).await?;
        assert_eq!(got, request);
        Ok(())
    }

    #[tokio::test]
    async fn create_subscription_error() {
        let mut mock = MockSubscriberStub::new();
        mock.expect_create_subscription().return_once(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::AlreadyExists)
                    .set_message("subscription exists"),
            ))
        });
        let connection = make_subscriber_connection_from_stub(Arc::new(mock));
        let err = connection
            .create_subscription(model::Subscription::default())
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::AlreadyExists));
    }

    #[tokio::test]
    async fn list_pages() -> anyhow::Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockSubscriberStub::new();
        mock.expect_list_subscriptions()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.project == "projects/test-project" && r.page_token.is_empty())
            .return_once(|_, _| Ok(response(&["s1", "s2"], "token-1")));
        mock.expect_list_subscriptions()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.project == "projects/test-project" && r.page_token == "token-1")
            .return_once(|_, _| Ok(response(&["s3"], "")));
        let connection = make_subscriber_connection_from_stub(Arc::new(mock));

        let mut pages = connection.list_subscriptions("test-project");
        let mut got = Vec::new();
        while let Some(page) = pages.next().await {
            got.push(page?);
        }
        assert_eq!(got, vec![response(&["s1", "s2"], "token-1"), response(&["s3"], "")]);
        Ok(())
    }

    #[tokio::test]
    async fn list_items() -> anyhow::Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockSubscriberStub::new();
        mock.expect_list_subscriptions()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(response(&["s1"], "token-1")));
        mock.expect_list_subscriptions()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(response(&[], "token-2")));
        mock.expect_list_subscriptions()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(response(&["s2", "s3"], "")));
        let connection = make_subscriber_connection_from_stub(Arc::new(mock));

        let mut items = connection.list_subscriptions("test-project").by_item();
        let mut names = Vec::new();
        while let Some(item) = items.next().await {
            names.push(item?.name);
        }
        assert_eq!(names, vec!["s1", "s2", "s3"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_error() {
        let mut mock = MockSubscriberStub::new();
        mock.expect_list_subscriptions()
            .times(1)
            .return_once(|_, _| {
                Err(Error::service(
                    Status::default()
                        .set_code(Code::PermissionDenied)
                        .set_message("uh-oh"),
                ))
            });
        let connection = make_subscriber_connection_from_stub(Arc::new(mock));

        let mut pages = connection.list_subscriptions("test-project");
        let err = pages.next().await.and_then(|r| r.err());
        assert_eq!(
            err.and_then(|e| e.status().map(|s| s.code)),
            Some(Code::PermissionDenied)
        );
        assert!(pages.next().await.is_none());
    }

    #[tokio::test]
    async fn list_is_lazy() {
        let mock = MockSubscriberStub::new();
        let connection = make_subscriber_connection_from_stub(Arc::new(mock));
        // Dropping the stream without polling it makes no calls.
        let _ = connection.list_subscriptions("test-project");
    }

    #[tokio::test]
    async fn delete_subscription() -> anyhow::Result<()> {
        let mut mock = MockSubscriberStub::new();
        mock.expect_delete_subscription()
            .withf(|r, _| r.subscription == "projects/test-project/subscriptions/test-subscription")
            .return_once(|_, _| Ok(()));
        let connection = make_subscriber_connection_from_stub(Arc::new(mock));
        connection
            .delete_subscription(&Subscription::new("test-project", "test-subscription"))
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn delete_subscription_error() {
        let mut mock = MockSubscriberStub::new();
        mock.expect_delete_subscription().return_once(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::NotFound)
                    .set_message("not found"),
            ))
        });
        let connection = make_subscriber_connection_from_stub(Arc::new(mock));
        let err = connection
            .delete_subscription(&Subscription::new("p", "s"))
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound));
    }
}

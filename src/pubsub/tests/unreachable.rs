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
//! Every operation fails cleanly when the service cannot be reached.

use auth::credentials::anonymous::Builder as Anonymous;
use google_cloud_pubsub_admin::builder::CreateSubscriptionBuilder;
use google_cloud_pubsub_admin::options::{ChannelArguments, ConnectionOptions};
use google_cloud_pubsub_admin::publisher_connection::*;
use google_cloud_pubsub_admin::subscriber_connection::*;
use google_cloud_pubsub_admin::{Subscription, Topic};
use std::time::Duration;

// Nothing listens on port 1.
const UNREACHABLE: &str = "http://localhost:1";

fn options() -> ConnectionOptions {
    ConnectionOptions::new()
        .with_endpoint(UNREACHABLE)
        .with_credentials(Anonymous::new().build())
        .with_channel_arguments(
            ChannelArguments::default().with_connect_timeout(Duration::from_secs(5)),
        )
}

#[tokio::test]
async fn create_subscription() -> anyhow::Result<()> {
    let connection = make_subscriber_connection(options())?;
    let request = CreateSubscriptionBuilder::new(
        &Subscription::new("test-project", "test-subscription"),
        &Topic::new("test-project", "test-topic"),
    )
    .into_proto();
    let err = connection.create_subscription(request).await.unwrap_err();
    assert!(err.is_connect(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn list_subscriptions() -> anyhow::Result<()> {
    let connection = make_subscriber_connection(options())?;
    let mut pages = connection.list_subscriptions("test-project");
    let err = pages
        .next()
        .await
        .and_then(|r| r.err())
        .ok_or_else(|| anyhow::anyhow!("expected an error"))?;
    assert!(err.is_connect(), "{err:?}");
    assert!(pages.next().await.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_subscription() -> anyhow::Result<()> {
    let connection = make_subscriber_connection(options())?;
    let err = connection
        .delete_subscription(&Subscription::new("test-project", "test-subscription"))
        .await
        .unwrap_err();
    assert!(err.is_connect(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn create_topic() -> anyhow::Result<()> {
    let connection = make_publisher_connection(options())?;
    let err = connection
        .create_topic(CreateTopicParams {
            project_id: "test-project".into(),
            topic_id: "test-topic".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_connect(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn delete_topic() -> anyhow::Result<()> {
    let connection = make_publisher_connection(options())?;
    let err = connection
        .delete_topic(DeleteTopicParams {
            project_id: "test-project".into(),
            topic_id: "test-topic".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_connect(), "{err:?}");
    Ok(())
}

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
//! A connection to the `google.pubsub.v1.Publisher` administrative RPCs.
//!
//! The connection converts simple parameter structs into request messages and
//! forwards them to a [PublisherStub].
//!
//! # Example
//! ```
//! # use google_cloud_pubsub_admin::options::ConnectionOptions;
//! # use google_cloud_pubsub_admin::publisher_connection::*;
//! # async fn sample() -> google_cloud_pubsub_admin::Result<()> {
//! let connection = make_publisher_connection(ConnectionOptions::new())?;
//! let topic = connection
//!     .create_topic(CreateTopicParams {
//!         project_id: "my-project".into(),
//!         topic_id: "my-topic".into(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("created {}", topic.name);
//! # Ok(()) }
//! ```

use crate::builder::CreateTopicBuilder;
use crate::options::ConnectionOptions;
use crate::stub::{PublisherStub, create_default_publisher_stub};
use crate::{Result, Topic, model};
use gax::options::RequestOptions;
use std::collections::HashMap;
use std::sync::Arc;

/// The parameters to create a topic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateTopicParams {
    /// The project containing the new topic.
    pub project_id: String,
    /// The short id for the new topic.
    pub topic_id: String,
    /// Labels for the new topic.
    pub labels: HashMap<String, String>,
    /// Regions where messages may be stored. Empty means no restrictions.
    pub allowed_persistence_regions: Vec<String>,
    /// The Cloud KMS key used to protect messages. Empty means Google-managed
    /// encryption.
    pub kms_key_name: String,
}

/// The parameters to delete a topic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteTopicParams {
    /// The project containing the topic.
    pub project_id: String,
    /// The short id of the topic.
    pub topic_id: String,
}

/// Administrative operations on topics.
#[async_trait::async_trait]
pub trait PublisherConnection: std::fmt::Debug + Send + Sync {
    /// Creates a new topic.
    async fn create_topic(&self, params: CreateTopicParams) -> Result<model::Topic>;

    /// Deletes an existing topic.
    async fn delete_topic(&self, params: DeleteTopicParams) -> Result<()>;
}

/// Creates a [PublisherConnection] using the default stub, on channel 0.
pub fn make_publisher_connection(
    options: ConnectionOptions,
) -> Result<Arc<dyn PublisherConnection>> {
    let stub = create_default_publisher_stub(&options, 0)?;
    Ok(make_publisher_connection_from_stub(stub))
}

/// Creates a [PublisherConnection] over an existing stub.
///
/// Useful to decorate the default stub, or to test applications with a mock
/// stub.
pub fn make_publisher_connection_from_stub(
    stub: Arc<dyn PublisherStub>,
) -> Arc<dyn PublisherConnection> {
    Arc::new(PublisherConnectionImpl { stub })
}

#[derive(Debug)]
struct PublisherConnectionImpl {
    stub: Arc<dyn PublisherStub>,
}

#[async_trait::async_trait]
impl PublisherConnection for PublisherConnectionImpl {
    async fn create_topic(&self, params: CreateTopicParams) -> Result<model::Topic> {
        let request = CreateTopicBuilder::new(&Topic::new(params.project_id, params.topic_id))
            .set_labels(params.labels)
            .set_allowed_persistence_regions(params.allowed_persistence_regions)
            .set_kms_key_name(params.kms_key_name)
            .into_proto();
        self.stub
            .create_topic(request, RequestOptions::default())
            .await
    }

    async fn delete_topic(&self, params: DeleteTopicParams) -> Result<()> {
        let request = model::DeleteTopicRequest {
            topic: Topic::new(params.project_id, params.topic_id).full_name(),
        };
        self.stub
            .delete_topic(request, RequestOptions::default())
            .await
    }
}

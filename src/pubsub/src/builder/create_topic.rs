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
use super::to_proto_duration;
use crate::model::MessageStoragePolicy;
use crate::{Topic, model};
use std::time::Duration;

/// Builds the request to create a topic.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_admin::builder::CreateTopicBuilder;
/// # use google_cloud_pubsub_admin::Topic;
/// let request = CreateTopicBuilder::new(&Topic::new("my-project", "my-topic"))
///     .add_label("team", "billing")
///     .add_allowed_persistence_region("us-central1")
///     .into_proto();
/// assert_eq!(request.name, "projects/my-project/topics/my-topic");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CreateTopicBuilder {
    proto: model::Topic,
}

impl CreateTopicBuilder {
    /// Creates a builder for `topic`.
    pub fn new(topic: &Topic) -> Self {
        Self {
            proto: model::Topic {
                name: topic.full_name(),
                ..Default::default()
            },
        }
    }

    /// Adds a label, replacing any previous value for `key`.
    pub fn add_label<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.proto.labels.insert(key.into(), value.into());
        self
    }

    /// Replaces all the labels.
    pub fn set_labels<I, K, V>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.proto.labels = labels
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Removes all the labels.
    pub fn clear_labels(mut self) -> Self {
        self.proto.labels.clear();
        self
    }

    /// Adds a region where messages published to the topic may be stored.
    pub fn add_allowed_persistence_region<T: Into<String>>(mut self, region: T) -> Self {
        self.proto
            .message_storage_policy
            .get_or_insert_with(MessageStoragePolicy::default)
            .allowed_persistence_regions
            .push(region.into());
        self
    }

    /// Replaces the regions where messages may be stored.
    ///
    /// An empty list removes the storage policy.
    pub fn set_allowed_persistence_regions<I, T>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let regions = regions.into_iter().map(Into::into).collect::<Vec<_>>();
        self.proto.message_storage_policy = if regions.is_empty() {
            None
        } else {
            Some(MessageStoragePolicy {
                allowed_persistence_regions: regions,
            })
        };
        self
    }

    /// Sets the Cloud KMS key used to protect messages published to the topic.
    pub fn set_kms_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.proto.kms_key_name = v.into();
        self
    }

    /// Sets the minimum time to retain published messages.
    pub fn set_message_retention_duration(mut self, v: Duration) -> Self {
        self.proto.message_retention_duration = Some(to_proto_duration(v));
        self
    }

    /// Returns a copy of the request.
    pub fn as_proto(&self) -> model::Topic {
        self.proto.clone()
    }

    /// Returns the request, consuming the builder.
    pub fn into_proto(self) -> model::Topic {
        self.proto
    }
}

impl From<CreateTopicBuilder> for model::Topic {
    fn from(value: CreateTopicBuilder) -> Self {
        value.into_proto()
    }
}

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
use crate::model::{DeadLetterPolicy, ExpirationPolicy, PushConfig};
use crate::{Subscription, Topic, model};
use std::time::Duration;

/// Builds the request to create a subscription.
///
/// The subscription and topic names are set by [new][Self::new]. All other
/// fields are optional, the service provides defaults for any field left
/// unset.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_admin::builder::CreateSubscriptionBuilder;
/// # use google_cloud_pubsub_admin::{Subscription, Topic};
/// use std::time::Duration;
/// let request = CreateSubscriptionBuilder::new(
///     &Subscription::new("my-project", "my-subscription"),
///     &Topic::new("my-project", "my-topic"),
/// )
/// .set_ack_deadline(Duration::from_secs(60))
/// .set_enable_message_ordering(true)
/// .into_proto();
/// assert_eq!(request.ack_deadline_seconds, 60);
/// assert!(request.enable_message_ordering);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CreateSubscriptionBuilder {
    proto: model::Subscription,
}

impl CreateSubscriptionBuilder {
    /// Creates a builder for `subscription`, attached to `topic`.
    pub fn new(subscription: &Subscription, topic: &Topic) -> Self {
        Self {
            proto: model::Subscription {
                name: subscription.full_name(),
                topic: topic.full_name(),
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

    /// Configures push delivery.
    ///
    /// Accepts a [PushConfigBuilder][super::PushConfigBuilder] or a
    /// [PushConfig].
    pub fn set_push_config<T: Into<PushConfig>>(mut self, v: T) -> Self {
        self.proto.push_config = Some(v.into());
        self
    }

    /// Sets the acknowledgement deadline.
    ///
    /// The service only supports whole seconds, fractions are truncated.
    pub fn set_ack_deadline(mut self, v: Duration) -> Self {
        self.proto.ack_deadline_seconds = i32::try_from(v.as_secs()).unwrap_or(i32::MAX);
        self
    }

    /// Retains acknowledged messages in the subscription's backlog.
    pub fn set_retain_acked_messages(mut self, v: bool) -> Self {
        self.proto.retain_acked_messages = v;
        self
    }

    /// Sets how long unacknowledged messages are retained.
    pub fn set_message_retention_duration(mut self, v: Duration) -> Self {
        self.proto.message_retention_duration = Some(to_proto_duration(v));
        self
    }

    /// Delivers messages with the same ordering key in publish order.
    pub fn set_enable_message_ordering(mut self, v: bool) -> Self {
        self.proto.enable_message_ordering = v;
        self
    }

    /// Only deliver messages matching this filter.
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.proto.filter = v.into();
        self
    }

    /// Forwards undeliverable messages to `dead_letter_topic` after
    /// `max_delivery_attempts`.
    pub fn set_dead_letter_policy(mut self, dead_letter_topic: &Topic, max_delivery_attempts: i32) -> Self {
        self.proto.dead_letter_policy = Some(DeadLetterPolicy {
            dead_letter_topic: dead_letter_topic.full_name(),
            max_delivery_attempts,
        });
        self
    }

    /// Deletes the subscription after `ttl` of inactivity.
    pub fn set_expiration_policy(mut self, ttl: Duration) -> Self {
        self.proto.expiration_policy = Some(ExpirationPolicy {
            ttl: Some(to_proto_duration(ttl)),
        });
        self
    }

    /// Returns a copy of the request.
    pub fn as_proto(&self) -> model::Subscription {
        self.proto.clone()
    }

    /// Returns the request, consuming the builder.
    pub fn into_proto(self) -> model::Subscription {
        self.proto
    }
}

impl From<CreateSubscriptionBuilder> for model::Subscription {
    fn from(value: CreateSubscriptionBuilder) -> Self {
        value.into_proto()
    }
}

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
//! Builders for the administrative request messages.
//!
//! The builders start from the required fields (the resource names) and
//! expose one setter per optional field. Setters consume and return the
//! builder, the last call for a given field wins. Use `as_proto()` to get a
//! copy of the message, or `into_proto()` (or `From`) to move it out.
//!
//! # Example
//! ```
//! # use google_cloud_pubsub_admin::builder::{CreateSubscriptionBuilder, PushConfigBuilder};
//! # use google_cloud_pubsub_admin::{Subscription, Topic};
//! let subscription = Subscription::new("my-project", "my-subscription");
//! let topic = Topic::new("my-project", "my-topic");
//! let request = CreateSubscriptionBuilder::new(&subscription, &topic)
//!     .add_label("team", "billing")
//!     .set_push_config(
//!         PushConfigBuilder::new("https://example.com/push")
//!             .set_service_account_email("pusher@my-project.iam.gserviceaccount.com"),
//!     )
//!     .into_proto();
//! assert_eq!(request.name, "projects/my-project/subscriptions/my-subscription");
//! assert_eq!(request.topic, "projects/my-project/topics/my-topic");
//! ```

mod create_subscription;
mod create_topic;
mod push_config;

pub use create_subscription::CreateSubscriptionBuilder;
pub use create_topic::CreateTopicBuilder;
pub use push_config::PushConfigBuilder;

// The largest value accepted by `google.protobuf.Duration`, about 10,000 years.
const MAX_PROTO_DURATION_SECONDS: u64 = 315_576_000_000;
const MAX_PROTO_DURATION_NANOS: u32 = 999_999_999;

// Durations beyond the protobuf range are clamped to the largest valid value.
pub(crate) fn to_proto_duration(d: std::time::Duration) -> prost_types::Duration {
    let (seconds, nanos) = if d.as_secs() > MAX_PROTO_DURATION_SECONDS {
        (MAX_PROTO_DURATION_SECONDS, MAX_PROTO_DURATION_NANOS)
    } else {
        (d.as_secs(), d.subsec_nanos())
    };
    prost_types::Duration {
        seconds: seconds as i64,
        nanos: nanos as i32,
    }
}

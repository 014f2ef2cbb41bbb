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
//! Google Cloud Client Libraries for Rust - Pub/Sub administrative operations
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains traits, types, and functions to create, list, and
//! delete [Pub/Sub] topics and subscriptions.
//!
//! * [builder] assembles the request messages for the create operations.
//! * [publisher_connection] and [subscriber_connection] send those requests to
//!   the service.
//! * [stub] defines the low-level interface used by the connections. Mock it to
//!   test your application without a network.
//!
//! Set the `PUBSUB_EMULATOR_HOST` environment variable to use the [emulator].
//!
//! [pub/sub]: https://cloud.google.com/pubsub
//! [emulator]: https://cloud.google.com/pubsub/docs/emulator

pub mod builder;
pub mod error;
pub mod options;
pub mod paginator;
pub mod publisher_connection;
pub mod stub;
pub mod subscriber_connection;

mod grpc;
mod subscription;
mod topic;
mod transport;

pub use gax::Result;
pub use gax::error::Error;
pub use subscription::Subscription;
pub use topic::Topic;

/// The request and response messages for the `google.pubsub.v1` services.
pub mod model {
    pub use crate::google::pubsub::v1::*;
}

pub(crate) mod google {
    pub mod pubsub {
        pub mod v1 {
            include!("generated/protos/google.pubsub.v1.rs");
        }
    }
}

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
//! Errors specific to the Cloud Pub/Sub administrative clients.
//!
//! Operations that contact the service return [Error][crate::Error], shared
//! with the other Google Cloud client libraries. Service errors carry a
//! [Status][gax::error::rpc::Status]:
//!
//! ```
//! use google_cloud_pubsub_admin::Error;
//! use gax::error::rpc::Code;
//! fn handle_error(e: Error) {
//!     match e.status() {
//!         Some(s) if s.code == Code::NotFound => println!("nothing to do"),
//!         Some(s) => println!("the service reported {s:?}"),
//!         None => println!("the request did not reach the service: {e}"),
//!     }
//! }
//! ```
//!
//! Errors are never retried, logged, or suppressed by this crate; they are
//! returned to the immediate caller.

/// A string could not be parsed as a topic or subscription name.
///
/// # Example
/// ```
/// use google_cloud_pubsub_admin::Topic;
/// let err = "projects/p/subscriptions/s".parse::<Topic>().unwrap_err();
/// assert!(err.to_string().contains("projects/p/subscriptions/s"));
/// ```
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("`{name}` does not match the `projects/{{project}}/{collection}/{{id}}` format")]
pub struct ResourceNameError {
    name: String,
    collection: &'static str,
}

impl ResourceNameError {
    pub(crate) fn new<T: Into<String>>(name: T, collection: &'static str) -> Self {
        Self {
            name: name.into(),
            collection,
        }
    }

    /// The string that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

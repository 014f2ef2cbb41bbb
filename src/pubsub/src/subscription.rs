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

use crate::error::ResourceNameError;

const COLLECTION: &str = "subscriptions";

/// Identifies a Cloud Pub/Sub subscription.
///
/// The service addresses subscriptions using their full name,
/// `projects/{project_id}/subscriptions/{subscription_id}`.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_admin::Subscription;
/// let subscription = Subscription::new("my-project", "my-subscription");
/// assert_eq!(
///     subscription.full_name(),
///     "projects/my-project/subscriptions/my-subscription"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription {
    project_id: String,
    subscription_id: String,
}

impl Subscription {
    /// Creates a new subscription identifier.
    pub fn new<P, S>(project_id: P, subscription_id: S) -> Self
    where
        P: Into<String>,
        S: Into<String>,
    {
        Self {
            project_id: project_id.into(),
            subscription_id: subscription_id.into(),
        }
    }

    /// The id of the project containing the subscription.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The short id of the subscription.
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// The fully-qualified name,
    /// `projects/{project_id}/subscriptions/{subscription_id}`.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "projects/{}/{COLLECTION}/{}",
            self.project_id, self.subscription_id
        )
    }
}

impl std::str::FromStr for Subscription {
    type Err = ResourceNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        split_name(s, COLLECTION)
            .map(|(project_id, subscription_id)| Self::new(project_id, subscription_id))
            .ok_or_else(|| ResourceNameError::new(s, COLLECTION))
    }
}

// Splits `projects/{project}/{collection}/{id}` into its two ids.
pub(crate) fn split_name<'a>(name: &'a str, collection: &str) -> Option<(&'a str, &'a str)> {
    let mut parts = name.split('/');
    match (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) {
        (Some("projects"), Some(project), Some(c), Some(id), None)
            if c == collection && !project.is_empty() && !id.is_empty() =>
        {
            Some((project, id))
        }
        _ => None,
    }
}

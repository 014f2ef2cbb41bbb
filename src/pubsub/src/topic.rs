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

const COLLECTION: &str = "topics";

/// Identifies a Cloud Pub/Sub topic.
///
/// A topic is identified by the project that contains it and a short id. The
/// service addresses topics using their full name,
/// `projects/{project_id}/topics/{topic_id}`.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_admin::Topic;
/// let topic = Topic::new("my-project", "my-topic");
/// assert_eq!(topic.full_name(), "projects/my-project/topics/my-topic");
/// assert_eq!(topic.to_string(), topic.full_name());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Topic {
    project_id: String,
    topic_id: String,
}

impl Topic {
    /// Creates a new topic identifier.
    pub fn new<P, T>(project_id: P, topic_id: T) -> Self
    where
        P: Into<String>,
        T: Into<String>,
    {
        Self {
            project_id: project_id.into(),
            topic_id: topic_id.into(),
        }
    }

    /// The id of the project containing the topic.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The short id of the topic.
    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    /// The fully-qualified name, `projects/{project_id}/topics/{topic_id}`.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "projects/{}/{COLLECTION}/{}", self.project_id, self.topic_id)
    }
}

impl std::str::FromStr for Topic {
    type Err = ResourceNameError;

    /// Parses a full topic name.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_pubsub_admin::Topic;
    /// let topic: Topic = "projects/my-project/topics/my-topic".parse()?;
    /// assert_eq!(topic, Topic::new("my-project", "my-topic"));
    /// # Ok::<(), google_cloud_pubsub_admin::error::ResourceNameError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::subscription::split_name(s, COLLECTION)
            .map(|(project_id, topic_id)| Self::new(project_id, topic_id))
            .ok_or_else(|| ResourceNameError::new(s, COLLECTION))
    }
}

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
use crate::model::PushConfig;
use crate::model::push_config::{AuthenticationMethod, OidcToken};

/// Builds the push configuration for a subscription.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_admin::builder::PushConfigBuilder;
/// let config = PushConfigBuilder::new("https://example.com/push")
///     .add_attribute("x-goog-version", "v1")
///     .set_authentication(PushConfigBuilder::make_oidc_token_with_audience(
///         "pusher@my-project.iam.gserviceaccount.com",
///         "https://example.com",
///     ))
///     .into_proto();
/// assert_eq!(config.push_endpoint, "https://example.com/push");
/// assert_eq!(config.attributes.get("x-goog-version").map(String::as_str), Some("v1"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PushConfigBuilder {
    proto: PushConfig,
}

impl PushConfigBuilder {
    /// Creates a builder with the given push endpoint and no other fields set.
    pub fn new<T: Into<String>>(push_endpoint: T) -> Self {
        Self {
            proto: PushConfig {
                push_endpoint: push_endpoint.into(),
                ..Default::default()
            },
        }
    }

    /// Adds an attribute, replacing any previous value for `key`.
    pub fn add_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.proto.attributes.insert(key.into(), value.into());
        self
    }

    /// Replaces all the attributes.
    pub fn set_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.proto.attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Sets the OIDC token used to authenticate push requests.
    pub fn set_authentication(mut self, token: OidcToken) -> Self {
        self.proto.authentication_method = Some(AuthenticationMethod::OidcToken(token));
        self
    }

    /// Sets the service account used to generate the OIDC token.
    ///
    /// Keeps the audience, if one is already configured.
    pub fn set_service_account_email<T: Into<String>>(mut self, email: T) -> Self {
        let token = match self.proto.authentication_method.take() {
            Some(AuthenticationMethod::OidcToken(t)) => OidcToken {
                service_account_email: email.into(),
                ..t
            },
            None => Self::make_oidc_token(email),
        };
        self.proto.authentication_method = Some(AuthenticationMethod::OidcToken(token));
        self
    }

    /// Creates an OIDC token for `service_account_email`, with the default
    /// audience.
    pub fn make_oidc_token<T: Into<String>>(service_account_email: T) -> OidcToken {
        OidcToken {
            service_account_email: service_account_email.into(),
            ..Default::default()
        }
    }

    /// Creates an OIDC token for `service_account_email` and `audience`.
    pub fn make_oidc_token_with_audience<T, U>(service_account_email: T, audience: U) -> OidcToken
    where
        T: Into<String>,
        U: Into<String>,
    {
        OidcToken {
            service_account_email: service_account_email.into(),
            audience: audience.into(),
        }
    }

    /// Returns a copy of the configuration.
    pub fn as_proto(&self) -> PushConfig {
        self.proto.clone()
    }

    /// Returns the configuration, consuming the builder.
    pub fn into_proto(self) -> PushConfig {
        self.proto
    }
}

impl From<PushConfigBuilder> for PushConfig {
    fn from(value: PushConfigBuilder) -> Self {
        value.into_proto()
    }
}

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
//! Client configuration and per request options.
//!
//! The defaults work for most applications running in Google Cloud. Unless
//! the application calls [ConnectionOptions::with_credentials], each stub
//! uses the [Application Default Credentials][adc].
//!
//! When the `PUBSUB_EMULATOR_HOST` environment variable is set, the default
//! options connect to the emulator at that address, without TLS, and using
//! anonymous credentials.
//!
//! Per request options use [RequestOptions][gax::options::RequestOptions].
//!
//! [adc]: https://cloud.google.com/docs/authentication/application-default-credentials

use auth::credentials::Credentials;
use auth::credentials::anonymous::Builder as Anonymous;
use std::time::Duration;

/// The default endpoint for the Cloud Pub/Sub service.
pub const DEFAULT_ENDPOINT: &str = "https://pubsub.googleapis.com";

pub(crate) const EMULATOR_VAR: &str = "PUBSUB_EMULATOR_HOST";

/// Configures the connection used by stubs and connections.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_admin::options::{ChannelArguments, ConnectionOptions};
/// use auth::credentials::anonymous::Builder;
/// use std::time::Duration;
/// let options = ConnectionOptions::new()
///     .with_endpoint("https://pubsub.us-central1.rep.googleapis.com")
///     .with_credentials(Builder::new().build())
///     .with_channel_arguments(
///         ChannelArguments::default().with_connect_timeout(Duration::from_secs(5)),
///     );
/// ```
#[derive(Clone, Debug)]
pub struct ConnectionOptions {
    endpoint: String,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
    channel_arguments: ChannelArguments,
}

impl ConnectionOptions {
    /// Creates the default options.
    ///
    /// Consults `PUBSUB_EMULATOR_HOST` to detect the emulator. Outside the
    /// emulator the credentials are left unset, and the stubs load the
    /// Application Default Credentials when they are created.
    pub fn new() -> Self {
        let (endpoint, credentials) = match std::env::var(EMULATOR_VAR) {
            Ok(host) if !host.is_empty() => {
                tracing::debug!("using the Cloud Pub/Sub emulator at {host}");
                (format!("http://{host}"), Some(Anonymous::new().build()))
            }
            _ => (DEFAULT_ENDPOINT.to_string(), None),
        };
        Self {
            endpoint,
            credentials,
            user_agent_prefix: None,
            channel_arguments: ChannelArguments::default(),
        }
    }

    /// Sets the endpoint, for example `https://pubsub.googleapis.com` or
    /// `http://localhost:8085`.
    ///
    /// Endpoints using `https` are contacted using TLS, any other scheme uses
    /// plaintext HTTP/2.
    pub fn with_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = v.into();
        self
    }

    /// Sets the credentials used to authenticate each request.
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.credentials = Some(v.into());
        self
    }

    /// Prepends this prefix to the user agent of every request.
    pub fn with_user_agent_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.user_agent_prefix = Some(v.into());
        self
    }

    /// Sets the arguments used to create the gRPC channel.
    pub fn with_channel_arguments(mut self, v: ChannelArguments) -> Self {
        self.channel_arguments = v;
        self
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The configured credentials.
    ///
    /// `None` means the stubs use the Application Default Credentials.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// The configured user agent prefix, if any.
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// The configured channel arguments.
    pub fn channel_arguments(&self) -> &ChannelArguments {
        &self.channel_arguments
    }
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Tuning parameters for the gRPC channel.
///
/// Channels are shared between stubs created with equal endpoints, equal
/// arguments, and the same channel id. Any field left unset uses the
/// transport defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChannelArguments {
    pub(crate) connect_timeout: Option<Duration>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) tcp_keepalive: Option<Duration>,
    pub(crate) http2_keep_alive_interval: Option<Duration>,
    pub(crate) keep_alive_timeout: Option<Duration>,
    pub(crate) keep_alive_while_idle: Option<bool>,
    pub(crate) tcp_nodelay: Option<bool>,
    pub(crate) concurrency_limit: Option<usize>,
    pub(crate) initial_stream_window_size: Option<u32>,
    pub(crate) initial_connection_window_size: Option<u32>,
}

impl ChannelArguments {
    /// Limits the time to establish a connection.
    pub fn with_connect_timeout(mut self, v: Duration) -> Self {
        self.connect_timeout = Some(v);
        self
    }

    /// Limits the time for each request on the channel.
    ///
    /// Prefer [RequestOptions::set_attempt_timeout] for per-call deadlines.
    ///
    /// [RequestOptions::set_attempt_timeout]: gax::options::RequestOptions::set_attempt_timeout
    pub fn with_timeout(mut self, v: Duration) -> Self {
        self.timeout = Some(v);
        self
    }

    /// Enables TCP keepalive with the given interval.
    pub fn with_tcp_keepalive(mut self, v: Duration) -> Self {
        self.tcp_keepalive = Some(v);
        self
    }

    /// Sends HTTP/2 keepalive pings at this interval.
    pub fn with_http2_keep_alive_interval(mut self, v: Duration) -> Self {
        self.http2_keep_alive_interval = Some(v);
        self
    }

    /// Closes the connection if a keepalive ping is not acknowledged in time.
    pub fn with_keep_alive_timeout(mut self, v: Duration) -> Self {
        self.keep_alive_timeout = Some(v);
        self
    }

    /// Sends keepalive pings even when there are no active requests.
    pub fn with_keep_alive_while_idle(mut self, v: bool) -> Self {
        self.keep_alive_while_idle = Some(v);
        self
    }

    /// Sets `TCP_NODELAY` on the connection.
    pub fn with_tcp_nodelay(mut self, v: bool) -> Self {
        self.tcp_nodelay = Some(v);
        self
    }

    /// Limits the number of concurrent requests on the channel.
    pub fn with_concurrency_limit(mut self, v: usize) -> Self {
        self.concurrency_limit = Some(v);
        self
    }

    /// Sets the HTTP/2 stream-level flow control window.
    pub fn with_initial_stream_window_size(mut self, v: u32) -> Self {
        self.initial_stream_window_size = Some(v);
        self
    }

    /// Sets the HTTP/2 connection-level flow control window.
    pub fn with_initial_connection_window_size(mut self, v: u32) -> Self {
        self.initial_connection_window_size = Some(v);
        self
    }
}

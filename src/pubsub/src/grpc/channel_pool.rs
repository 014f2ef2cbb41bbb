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
use crate::Result;
use crate::Error;
use crate::options::ChannelArguments;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

lazy_static::lazy_static! {
    /// The channels shared by all the stubs in the process.
    pub(crate) static ref POOL: ChannelPool = ChannelPool::default();
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ChannelKey {
    endpoint: String,
    arguments: ChannelArguments,
    channel_id: i32,
}

/// Shares gRPC channels between stubs.
///
/// Stubs created with the same endpoint, channel arguments and channel id
/// share a channel. The pool only holds weak references, a channel is closed
/// once the last stub using it is dropped.
#[derive(Debug, Default)]
pub(crate) struct ChannelPool {
    channels: Mutex<HashMap<ChannelKey, Weak<Channel>>>,
}

impl ChannelPool {
    pub(crate) fn channel(
        &self,
        endpoint: &str,
        arguments: &ChannelArguments,
        channel_id: i32,
    ) -> Result<Arc<Channel>> {
        let key = ChannelKey {
            endpoint: endpoint.to_string(),
            arguments: arguments.clone(),
            channel_id,
        };
        let mut guard = self.channels.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(channel) = guard.get(&key).and_then(Weak::upgrade) {
            tracing::debug!(endpoint, channel_id, "reusing gRPC channel");
            return Ok(channel);
        }
        guard.retain(|_, v| v.strong_count() > 0);
        let channel = Arc::new(make_channel(endpoint, arguments)?);
        tracing::debug!(endpoint, channel_id, "created gRPC channel");
        guard.insert(key, Arc::downgrade(&channel));
        Ok(channel)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.channels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

fn make_channel(endpoint: &str, arguments: &ChannelArguments) -> Result<Channel> {
    let mut builder = Endpoint::from_shared(endpoint.to_string()).map_err(Error::other)?;
    if builder.uri().scheme_str() == Some("https") {
        builder = builder
            .tls_config(ClientTlsConfig::new().with_enabled_roots())
            .map_err(Error::other)?;
    }
    if let Some(v) = arguments.connect_timeout {
        builder = builder.connect_timeout(v);
    }
    if let Some(v) = arguments.timeout {
        builder = builder.timeout(v);
    }
    if let Some(v) = arguments.tcp_keepalive {
        builder = builder.tcp_keepalive(Some(v));
    }
    if let Some(v) = arguments.http2_keep_alive_interval {
        builder = builder.http2_keep_alive_interval(v);
    }
    if let Some(v) = arguments.keep_alive_timeout {
        builder = builder.keep_alive_timeout(v);
    }
    if let Some(v) = arguments.keep_alive_while_idle {
        builder = builder.keep_alive_while_idle(v);
    }
    if let Some(v) = arguments.tcp_nodelay {
        builder = builder.tcp_nodelay(v);
    }
    if let Some(v) = arguments.concurrency_limit {
        builder = builder.concurrency_limit(v);
    }
    if let Some(v) = arguments.initial_stream_window_size {
        builder = builder.initial_stream_window_size(v);
    }
    if let Some(v) = arguments.initial_connection_window_size {
        builder = builder.initial_connection_window_size(v);
    }
    Ok(builder.connect_lazy())
}

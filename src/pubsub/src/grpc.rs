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
//! Implements the common features of the gRPC-based stubs.

mod channel_pool;

use crate::Error;
use crate::Result;
use crate::options::ConnectionOptions;
use auth::credentials::{CacheableResource, Credentials};
use auth::errors::CredentialsError;
use gax::options::RequestOptions;
use gaxi::grpc::from_status::to_gax_error;
use http::header::{HeaderName, HeaderValue};
use http::{Extensions, HeaderMap};
use std::sync::Arc;
use tonic::transport::Channel;

pub(crate) type InnerClient = tonic::client::Grpc<Channel>;

/// Sends unary RPCs over a (possibly shared) channel.
#[derive(Clone, Debug)]
pub(crate) struct Client {
    inner: InnerClient,
    // Keeps the channel registered in the pool while this client lives.
    _channel: Arc<Channel>,
    credentials: Credentials,
    user_agent_prefix: Option<String>,
}

impl Client {
    /// Creates a new client, reusing an existing channel if possible.
    ///
    /// The channel connects lazily, an unreachable endpoint is reported by
    /// the first request. Must be called within a Tokio runtime.
    pub fn new(options: &ConnectionOptions, channel_id: i32) -> Result<Self> {
        let credentials = Self::make_credentials(options)?;
        let channel = channel_pool::POOL.channel(
            options.endpoint(),
            options.channel_arguments(),
            channel_id,
        )?;
        Ok(Self {
            inner: tonic::client::Grpc::new(channel.as_ref().clone()),
            _channel: channel,
            credentials,
            user_agent_prefix: options.user_agent_prefix().map(str::to_string),
        })
    }

    fn make_credentials(options: &ConnectionOptions) -> Result<Credentials> {
        if let Some(c) = options.credentials() {
            return Ok(c.clone());
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(|e| Error::authentication(CredentialsError::from_source(false, e)))
    }

    /// Sends a request.
    pub async fn execute<Request, Response>(
        &self,
        method: tonic::GrpcMethod<'static>,
        path: http::uri::PathAndQuery,
        request: Request,
        options: RequestOptions,
        api_client_header: &'static str,
        request_params: &str,
    ) -> Result<Response>
    where
        Request: prost::Message + 'static,
        Response: prost::Message + Default + 'static,
    {
        let mut headers = self.make_headers(api_client_header, request_params, &options)?;
        headers.extend(self.auth_headers().await?);
        tracing::debug!(
            service = method.service(),
            method = method.method(),
            "sending request"
        );
        let mut extensions = tonic::Extensions::new();
        extensions.insert(method);
        let metadata = tonic::metadata::MetadataMap::from_headers(headers);
        let mut request = tonic::Request::from_parts(metadata, extensions, request);
        if let Some(timeout) = options.attempt_timeout() {
            request.set_timeout(*timeout);
        }
        let codec = tonic_prost::ProstCodec::default();
        let mut inner = self.inner.clone();
        inner.ready().await.map_err(Error::io)?;
        let response: tonic::Response<Response> = inner
            .unary(request, path, codec)
            .await
            .map_err(to_gax_error)?;
        Ok(response.into_inner())
    }

    async fn auth_headers(&self) -> Result<HeaderMap> {
        let cached = self
            .credentials
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;
        match cached {
            CacheableResource::New { data, .. } => Ok(data),
            CacheableResource::NotModified => Err(Error::authentication(
                CredentialsError::from_msg(false, "credentials returned no headers"),
            )),
        }
    }

    fn make_headers(
        &self,
        api_client_header: &'static str,
        request_params: &str,
        options: &RequestOptions,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.append(
            HeaderName::from_static("x-goog-api-client"),
            HeaderValue::from_static(api_client_header),
        );
        headers.append(
            HeaderName::from_static("x-goog-request-params"),
            HeaderValue::from_str(request_params).map_err(Error::other)?,
        );
        let user_agent = [options.user_agent().as_deref(), self.user_agent_prefix.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        if !user_agent.is_empty() {
            headers.append(
                http::header::USER_AGENT,
                HeaderValue::from_str(&user_agent.join(" ")).map_err(Error::other)?,
            );
        }
        Ok(headers)
    }
}

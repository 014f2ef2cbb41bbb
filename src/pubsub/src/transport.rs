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
use crate::grpc::Client;
use crate::model;
use crate::options::ConnectionOptions;
use crate::stub::{PublisherStub, SubscriberStub};
use gax::options::RequestOptions;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GCCL,
            };
            ac.grpc_header_value()
        };
    }
}

// Routing parameter values may contain any character except these.
const ROUTING_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn routing_param(name: &str, value: &str) -> String {
    format!("{name}={}", utf8_percent_encode(value, ROUTING_ENCODE_SET))
}

fn method(service: &'static str, name: &'static str) -> tonic::GrpcMethod<'static> {
    tonic::GrpcMethod::new(service, name)
}

const SUBSCRIBER: &str = "google.pubsub.v1.Subscriber";
const PUBLISHER: &str = "google.pubsub.v1.Publisher";

/// Implements [SubscriberStub] using a gRPC channel.
#[derive(Clone, Debug)]
pub(crate) struct DefaultSubscriberStub {
    inner: Client,
}

impl DefaultSubscriberStub {
    pub(crate) fn new(options: &ConnectionOptions, channel_id: i32) -> Result<Self> {
        let inner = Client::new(options, channel_id)?;
        Ok(Self { inner })
    }
}

#[async_trait::async_trait]
impl SubscriberStub for DefaultSubscriberStub {
    async fn create_subscription(
        &self,
        req: model::Subscription,
        options: RequestOptions,
    ) -> Result<model::Subscription> {
        let params = routing_param("name", &req.name);
        self.inner
            .execute(
                method(SUBSCRIBER, "CreateSubscription"),
                http::uri::PathAndQuery::from_static(
                    "/google.pubsub.v1.Subscriber/CreateSubscription",
                ),
                req,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &params,
            )
            .await
    }

    async fn list_subscriptions(
        &self,
        req: model::ListSubscriptionsRequest,
        options: RequestOptions,
    ) -> Result<model::ListSubscriptionsResponse> {
        let params = routing_param("project", &req.project);
        self.inner
            .execute(
                method(SUBSCRIBER, "ListSubscriptions"),
                http::uri::PathAndQuery::from_static(
                    "/google.pubsub.v1.Subscriber/ListSubscriptions",
                ),
                req,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &params,
            )
            .await
    }

    async fn delete_subscription(
        &self,
        req: model::DeleteSubscriptionRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let params = routing_param("subscription", &req.subscription);
        self.inner
            .execute(
                method(SUBSCRIBER, "DeleteSubscription"),
                http::uri::PathAndQuery::from_static(
                    "/google.pubsub.v1.Subscriber/DeleteSubscription",
                ),
                req,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &params,
            )
            .await
    }
}

/// Implements [PublisherStub] using a gRPC channel.
#[derive(Clone, Debug)]
pub(crate) struct DefaultPublisherStub {
    inner: Client,
}

impl DefaultPublisherStub {
    pub(crate) fn new(options: &ConnectionOptions, channel_id: i32) -> Result<Self> {
        let inner = Client::new(options, channel_id)?;
        Ok(Self { inner })
    }
}

#[async_trait::async_trait]
impl PublisherStub for DefaultPublisherStub {
    async fn create_topic(
        &self,
        req: model::Topic,
        options: RequestOptions,
    ) -> Result<model::Topic> {
        let params = routing_param("name", &req.name);
        self.inner
            .execute(
                method(PUBLISHER, "CreateTopic"),
                http::uri::PathAndQuery::from_static("/google.pubsub.v1.Publisher/CreateTopic"),
                req,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &params,
            )
            .await
    }

    async fn delete_topic(
        &self,
        req: model::DeleteTopicRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let params = routing_param("topic", &req.topic);
        self.inner
            .execute(
                method(PUBLISHER, "DeleteTopic"),
                http::uri::PathAndQuery::from_static("/google.pubsub.v1.Publisher/DeleteTopic"),
                req,
                options,
                &info::X_GOOG_API_CLIENT_HEADER,
                &params,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grpc::tests::{MockCredentials, test_options};
    use auth::credentials::{CacheableResource, Credentials, EntityTag};
    use auth::errors::CredentialsError;
    use gax::error::rpc::Code;
    use http::HeaderMap;
    use http::header::{AUTHORIZATION, HeaderValue};
    use prost::Message;
    use pubsub_grpc_mock::google::pubsub::v1;
    use pubsub_grpc_mock::{MockPublisher, MockSubscriber, start_publisher, start_subscriber};
    use std::time::Duration;

    // Both crates have their own copies of the protos. We can just serialize
    // then deserialize to convert between the two, as performance is not a
    // concern for these unit tests.
    fn convert<S: Message, D: Message + Default>(pb: &S) -> D {
        let v = pb.encode_to_vec();
        D::decode(v.as_slice()).expect("encoding is always valid.")
    }

    fn metadata_value(
        metadata: &tonic::metadata::MetadataMap,
        key: &'static str,
    ) -> Option<String> {
        metadata
            .get(key)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[test]
    fn routing() {
        assert_eq!(
            routing_param("subscription", "projects/p/subscriptions/s-1.a_b~c"),
            "subscription=projects%2Fp%2Fsubscriptions%2Fs-1.a_b~c"
        );
        assert_eq!(routing_param("project", ""), "project=");
    }

    #[test]
    fn api_client_header() {
        let header = info::X_GOOG_API_CLIENT_HEADER.as_str();
        assert!(header.starts_with("gl-rust/"), "{header}");
        assert!(header.contains("gccl/"), "{header}");
        assert!(header.contains("grpc/"), "{header}");
        assert!(HeaderValue::from_str(header).is_ok(), "{header}");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_subscription() -> anyhow::Result<()> {
        let mut mock = MockSubscriber::new();
        mock.expect_create_subscription().return_once(|request| {
            let name = metadata_value(request.metadata(), "x-goog-request-params");
            assert_eq!(
                name.as_deref(),
                Some("name=projects%2Fp%2Fsubscriptions%2Fs")
            );
            let api_client = metadata_value(request.metadata(), "x-goog-api-client");
            assert!(
                api_client.is_some_and(|v| v.starts_with("gl-rust/")),
                "{request:?}"
            );
            let mut response = request.into_inner();
            response.ack_deadline_seconds = 10;
            Ok(tonic::Response::new(response))
        });
        let (endpoint, _server) = start_subscriber("0.0.0.0:0", mock).await?;
        let stub = DefaultSubscriberStub::new(&test_options(endpoint), 0)?;

        let request = model::Subscription {
            name: "projects/p/subscriptions/s".into(),
            topic: "projects/p/topics/t".into(),
            ..Default::default()
        };
        let response = stub
            .create_subscription(request.clone(), RequestOptions::default())
            .await?;
        assert_eq!(response.name, request.name);
        assert_eq!(response.topic, request.topic);
        assert_eq!(response.ack_deadline_seconds, 10);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_subscription_already_exists() -> anyhow::Result<()> {
        let mut mock = MockSubscriber::new();
        mock.expect_create_subscription()
            .return_once(|_| Err(tonic::Status::already_exists("subscription exists")));
        let (endpoint, _server) = start_subscriber("0.0.0.0:0", mock).await?;
        let stub = DefaultSubscriberStub::new(&test_options(endpoint), 0)?;

        let err = stub
            .create_subscription(model::Subscription::default(), RequestOptions::default())
            .await
            .unwrap_err();
        let status = err.status().expect("service errors have a status");
        assert_eq!(status.code, Code::AlreadyExists);
        assert_eq!(status.message, "subscription exists");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn list_subscriptions() -> anyhow::Result<()> {
        let expected = model::ListSubscriptionsResponse {
            subscriptions: vec![model::Subscription {
                name: "projects/p/subscriptions/s1".into(),
                ..Default::default()
            }],
            next_page_token: "next-page".into(),
        };
        let response = convert::<_, v1::ListSubscriptionsResponse>(&expected);
        let mut mock = MockSubscriber::new();
        mock.expect_list_subscriptions().return_once(move |request| {
            let request = request.into_inner();
            assert_eq!(request.project, "projects/p");
            assert_eq!(request.page_token, "");
            Ok(tonic::Response::new(response))
        });
        let (endpoint, _server) = start_subscriber("0.0.0.0:0", mock).await?;
        let stub = DefaultSubscriberStub::new(&test_options(endpoint), 0)?;

        let request = model::ListSubscriptionsRequest {
            project: "projects/p".into(),
            ..Default::default()
        };
        let got = stub
            .list_subscriptions(request, RequestOptions::default())
            .await?;
        assert_eq!(got, expected);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_subscription() -> anyhow::Result<()> {
        let mut mock = MockSubscriber::new();
        mock.expect_delete_subscription().return_once(|request| {
            let params = metadata_value(request.metadata(), "x-goog-request-params");
            assert_eq!(
                params.as_deref(),
                Some("subscription=projects%2Fp%2Fsubscriptions%2Fs")
            );
            assert_eq!(
                request.into_inner().subscription,
                "projects/p/subscriptions/s"
            );
            Ok(tonic::Response::new(()))
        });
        let (endpoint, _server) = start_subscriber("0.0.0.0:0", mock).await?;
        let stub = DefaultSubscriberStub::new(&test_options(endpoint), 0)?;

        let request = model::DeleteSubscriptionRequest {
            subscription: "projects/p/subscriptions/s".into(),
        };
        stub.delete_subscription(request, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_subscription_not_found() -> anyhow::Result<()> {
        let mut mock = MockSubscriber::new();
        mock.expect_delete_subscription()
            .return_once(|_| Err(tonic::Status::not_found("no such subscription")));
        let (endpoint, _server) = start_subscriber("0.0.0.0:0", mock).await?;
        let stub = DefaultSubscriberStub::new(&test_options(endpoint), 0)?;

        let err = stub
            .delete_subscription(
                model::DeleteSubscriptionRequest::default(),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(
            err.status().map(|s| s.message.as_str()),
            Some("no such subscription")
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_topic() -> anyhow::Result<()> {
        let mut mock = MockPublisher::new();
        mock.expect_create_topic().return_once(|request| {
            let params = metadata_value(request.metadata(), "x-goog-request-params");
            assert_eq!(params.as_deref(), Some("name=projects%2Fp%2Ftopics%2Ft"));
            Ok(tonic::Response::new(request.into_inner()))
        });
        let (endpoint, _server) = start_publisher("0.0.0.0:0", mock).await?;
        let stub = DefaultPublisherStub::new(&test_options(endpoint), 0)?;

        let request = model::Topic {
            name: "projects/p/topics/t".into(),
            kms_key_name: "test-key".into(),
            labels: [("k".to_string(), "v".to_string())].into(),
            ..Default::default()
        };
        let response = stub
            .create_topic(request.clone(), RequestOptions::default())
            .await?;
        assert_eq!(response, request);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_topic() -> anyhow::Result<()> {
        let mut mock = MockPublisher::new();
        mock.expect_delete_topic().return_once(|request| {
            let params = metadata_value(request.metadata(), "x-goog-request-params");
            assert_eq!(params.as_deref(), Some("topic=projects%2Fp%2Ftopics%2Ft"));
            Ok(tonic::Response::new(()))
        });
        let (endpoint, _server) = start_publisher("0.0.0.0:0", mock).await?;
        let stub = DefaultPublisherStub::new(&test_options(endpoint), 0)?;

        let request = model::DeleteTopicRequest {
            topic: "projects/p/topics/t".into(),
        };
        stub.delete_topic(request, RequestOptions::default()).await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_topic_permission_denied() -> anyhow::Result<()> {
        let mut mock = MockPublisher::new();
        mock.expect_delete_topic()
            .return_once(|_| Err(tonic::Status::permission_denied("uh-oh")));
        let (endpoint, _server) = start_publisher("0.0.0.0:0", mock).await?;
        let stub = DefaultPublisherStub::new(&test_options(endpoint), 0)?;

        let err = stub
            .delete_topic(model::DeleteTopicRequest::default(), RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.status().map(|s| s.code),
            Some(Code::PermissionDenied),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn credentials_headers() -> anyhow::Result<()> {
        let mut mock = MockPublisher::new();
        mock.expect_delete_topic().return_once(|request| {
            let auth = metadata_value(request.metadata(), "authorization");
            assert_eq!(auth.as_deref(), Some("Bearer test-token"));
            Ok(tonic::Response::new(()))
        });
        let (endpoint, _server) = start_publisher("0.0.0.0:0", mock).await?;

        let mut credentials = MockCredentials::new();
        credentials.expect_headers().once().returning(|_extensions| {
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer test-token"));
            Ok(CacheableResource::New {
                entity_tag: EntityTag::default(),
                data: headers,
            })
        });
        let options = test_options(endpoint).with_credentials(Credentials::from(credentials));
        let stub = DefaultPublisherStub::new(&options, 0)?;
        stub.delete_topic(model::DeleteTopicRequest::default(), RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn credentials_error() -> anyhow::Result<()> {
        let mut mock = MockPublisher::new();
        mock.expect_delete_topic().never();
        let (endpoint, _server) = start_publisher("0.0.0.0:0", mock).await?;

        let mut credentials = MockCredentials::new();
        credentials
            .expect_headers()
            .once()
            .returning(|_extensions| Err(CredentialsError::from_msg(false, "bad credentials")));
        let options = test_options(endpoint).with_credentials(Credentials::from(credentials));
        let stub = DefaultPublisherStub::new(&options, 0)?;
        let err = stub
            .delete_topic(model::DeleteTopicRequest::default(), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user_agent() -> anyhow::Result<()> {
        let mut mock = MockSubscriber::new();
        mock.expect_delete_subscription().return_once(|request| {
            let agent = metadata_value(request.metadata(), "user-agent");
            assert!(
                agent.as_deref().is_some_and(|v| v.contains("test-agent/1.2.3")),
                "{agent:?}"
            );
            Ok(tonic::Response::new(()))
        });
        let (endpoint, _server) = start_subscriber("0.0.0.0:0", mock).await?;
        let stub = DefaultSubscriberStub::new(&test_options(endpoint), 0)?;
        let mut options = RequestOptions::default();
        options.set_user_agent("test-agent/1.2.3");
        stub.delete_subscription(model::DeleteSubscriptionRequest::default(), options)
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempt_timeout() -> anyhow::Result<()> {
        let mut mock = MockSubscriber::new();
        mock.expect_delete_subscription().return_once(|request| {
            let timeout = metadata_value(request.metadata(), "grpc-timeout");
            assert!(timeout.is_some(), "{request:?}");
            Ok(tonic::Response::new(()))
        });
        let (endpoint, _server) = start_subscriber("0.0.0.0:0", mock).await?;
        let stub = DefaultSubscriberStub::new(&test_options(endpoint), 0)?;
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_secs(30));
        stub.delete_subscription(model::DeleteSubscriptionRequest::default(), options)
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn unreachable_endpoint() -> anyhow::Result<()> {
        let options = test_options("http://localhost:1");
        let stub = DefaultSubscriberStub::new(&options, 0)?;
        let err = stub
            .delete_subscription(
                model::DeleteSubscriptionRequest::default(),
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_connect(), "{err:?}");

        let stub = DefaultPublisherStub::new(&options, 0)?;
        let err = stub
            .create_topic(model::Topic::default(), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_connect(), "{err:?}");
        Ok(())
    }
}

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
use super::google::pubsub::v1;
use async_trait::async_trait;

#[mockall::automock]
#[async_trait]
pub trait Publisher {
    async fn create_topic(
        &self,
        request: tonic::Request<v1::Topic>,
    ) -> tonic::Result<tonic::Response<v1::Topic>>;
    async fn delete_topic(
        &self,
        request: tonic::Request<v1::DeleteTopicRequest>,
    ) -> tonic::Result<tonic::Response<()>>;
}

#[async_trait]
impl v1::publisher_server::Publisher for MockPublisher {
    async fn create_topic(
        &self,
        request: tonic::Request<v1::Topic>,
    ) -> tonic::Result<tonic::Response<v1::Topic>> {
        self::Publisher::create_topic(self, request).await
    }
    async fn delete_topic(
        &self,
        request: tonic::Request<v1::DeleteTopicRequest>,
    ) -> tonic::Result<tonic::Response<()>> {
        self::Publisher::delete_topic(self, request).await
    }
}

#[mockall::automock]
#[async_trait]
pub trait Subscriber {
    async fn create_subscription(
        &self,
        request: tonic::Request<v1::Subscription>,
    ) -> tonic::Result<tonic::Response<v1::Subscription>>;
    async fn list_subscriptions(
        &self,
        request: tonic::Request<v1::ListSubscriptionsRequest>,
    ) -> tonic::Result<tonic::Response<v1::ListSubscriptionsResponse>>;
    async fn delete_subscription(
        &self,
        request: tonic::Request<v1::DeleteSubscriptionRequest>,
    ) -> tonic::Result<tonic::Response<()>>;
}

#[async_trait]
impl v1::subscriber_server::Subscriber for MockSubscriber {
    async fn create_subscription(
        &self,
        request: tonic::Request<v1::Subscription>,
    ) -> tonic::Result<tonic::Response<v1::Subscription>> {
        self::Subscriber::create_subscription(self, request).await
    }
    async fn list_subscriptions(
        &self,
        request: tonic::Request<v1::ListSubscriptionsRequest>,
    ) -> tonic::Result<tonic::Response<v1::ListSubscriptionsResponse>> {
        self::Subscriber::list_subscriptions(self, request).await
    }
    async fn delete_subscription(
        &self,
        request: tonic::Request<v1::DeleteSubscriptionRequest>,
    ) -> tonic::Result<tonic::Response<()>> {
        self::Subscriber::delete_subscription(self, request).await
    }
}

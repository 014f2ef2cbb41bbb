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
//! Streams over the pages, or the items, returned by list RPCs.
//!
//! List RPCs return one page of results at a time. Each page carries a token
//! to request the next page, an empty token marks the last page. The types in
//! this module hide that loop behind a [futures::Stream].
//!
//! Pages are described by [PageableResponse], the same trait used by the
//! generated Google Cloud clients. The streams here are concrete types, so
//! they can be returned from the `dyn`-compatible connection traits.

use crate::Result;
use crate::model;
use futures::stream::{BoxStream, unfold};
use futures::{Stream, StreamExt};
use gax::paginator::internal::PageableResponse;
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

impl PageableResponse for model::ListSubscriptionsResponse {
    type PageItem = model::Subscription;

    fn items(self) -> Vec<Self::PageItem> {
        self.subscriptions
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

type ControlFlow = std::ops::ControlFlow<(), String>;

/// A stream of pages.
///
/// Fetches each page on demand. The stream ends after the last page, or after
/// the first error.
///
/// # Example
/// ```
/// # use google_cloud_pubsub_admin::subscriber_connection::SubscriberConnection;
/// # async fn sample(connection: &dyn SubscriberConnection) -> google_cloud_pubsub_admin::Result<()> {
/// let mut pages = connection.list_subscriptions("my-project");
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     println!("{} subscriptions in this page", page.subscriptions.len());
/// }
/// # Ok(()) }
/// ```
#[pin_project]
pub struct Paginator<T> {
    #[pin]
    stream: BoxStream<'static, Result<T>>,
}

impl<T> Paginator<T>
where
    T: PageableResponse + Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch each page.
    pub fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + Send + 'static) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let tok = page.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: stream.boxed(),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the stream of pages into a stream of items.
    pub fn by_item(self) -> ItemPaginator<T::PageItem> {
        let stream = self.stream.flat_map(|page| {
            let items = match page {
                Ok(page) => page.items().into_iter().map(Ok).collect::<Vec<_>>(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        });
        ItemPaginator {
            stream: stream.boxed(),
        }
    }
}

impl<T> Stream for Paginator<T> {
    type Item = Result<T>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T> std::fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}

/// A stream of items, fetching pages as needed.
#[pin_project]
pub struct ItemPaginator<I> {
    #[pin]
    stream: BoxStream<'static, Result<I>>,
}

impl<I> ItemPaginator<I> {
    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<I> Stream for ItemPaginator<I> {
    type Item = Result<I>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<I> std::fmt::Debug for ItemPaginator<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemPaginator").finish_non_exhaustive()
    }
}

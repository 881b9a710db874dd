// Copyright 2024 Google LLC
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

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a type that can be iterated over asyncly when used with [Paginator].
pub trait PageableResponse {
    /// The token to fetch the next page, empty on the last page.
    fn next_page_token(&self) -> String;
}

/// An adapter that converts OCI list operations into a [futures::Stream] of
/// pages.
///
/// OCI list operations return one page of results per request, and an
/// `opc-next-page` header when more results are available. The value of this
/// header is sent as the `page` query parameter in the next request. The
/// stream ends after the first page without a continuation token, or after the
/// first error.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>>>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    ///
    /// An empty `seed_token` fetches the first page.
    pub fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + 'static,
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
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page in the stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{OPC_NEXT_PAGE, Parts, Response};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    type TestResult = std::result::Result<Response<Vec<String>>, crate::error::Error>;

    fn page(items: &[&str], next: Option<&'static str>) -> Response<Vec<String>> {
        let mut headers = http::HeaderMap::new();
        if let Some(n) = next {
            headers.insert(OPC_NEXT_PAGE, http::HeaderValue::from_static(n));
        }
        Response::from_parts(
            Parts::new().set_headers(headers),
            items.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[tokio::test]
    async fn follows_next_page_header() {
        let responses = VecDeque::from([
            page(&["zone-1", "zone-2"], Some("page-2")),
            page(&["zone-3"], Some("page-3")),
            page(&["zone-4"], None),
        ]);
        let expected_tokens = VecDeque::from(["", "page-2", "page-3"]);

        let state = Arc::new(Mutex::new(responses));
        let tokens = Arc::new(Mutex::new(expected_tokens));

        let execute = move |token: String| {
            let expected = tokens.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, expected);
            let resp = state.lock().unwrap().pop_front().unwrap();
            async move { TestResult::Ok(resp) }
        };

        let mut pages = vec![];
        let mut stream = Paginator::new(String::new(), execute);
        while let Some(resp) = stream.next().await {
            pages.push(resp.unwrap().into_body());
        }
        assert_eq!(
            pages,
            vec![
                vec!["zone-1".to_string(), "zone-2".to_string()],
                vec!["zone-3".to_string()],
                vec!["zone-4".to_string()],
            ]
        );
    }

    #[tokio::test]
    async fn seed_token() {
        let execute = |token: String| async move {
            assert_eq!(token, "start-here");
            TestResult::Ok(page(&["zone-9"], None))
        };
        let mut stream = Paginator::new("start-here".to_string(), execute);
        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.body(), &vec!["zone-9".to_string()]);
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn stops_after_error() {
        let execute = |_| async { TestResult::Err(crate::error::Error::io("err")) };

        let mut paginator = Paginator::new(String::new(), execute);
        let mut count = 0;
        while let Some(resp) = paginator.next().await {
            match resp {
                Ok(_) => panic!("should not succeed"),
                Err(e) => {
                    assert!(e.is_io(), "{e:?}");
                    count += 1;
                }
            }
        }
        assert_eq!(count, 1);
    }
}

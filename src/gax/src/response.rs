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

//! Response types.
//!
//! This module contains types related to OCI service responses. Notably it
//! contains the `Response` type itself. Typically you'll import this type.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use oci_gax::Result;
//! # use oci_gax::response::Response;
//! // A type representing an OCI resource, for example, a DNS zone.
//! struct Resource {
//!   // ...
//! }
//!
//! async fn get_resource(id: &str) -> Result<Response<Resource>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = get_resource("ocid1.dns-zone.oc1..example").await?;
//! if let Some(etag) = response.etag() {
//!     // use the etag in an `if-match` header
//! }
//! let resource = response.body();
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use oci_gax::Result;
//! # use oci_gax::response::Response;
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// The service-assigned request id.
pub const OPC_REQUEST_ID: &str = "opc-request-id";
/// The continuation token for list operations.
pub const OPC_NEXT_PAGE: &str = "opc-next-page";
/// The id of the work request tracking an asynchronous mutation.
pub const OPC_WORK_REQUEST_ID: &str = "opc-work-request-id";

/// Represents an OCI service response.
///
/// A response from an OCI service consists of a body (potentially the unit
/// type), and some metadata, currently just headers. Many OCI operations
/// return important information in the headers, such as the `etag` used for
/// optimistic concurrency, the `opc-next-page` token in list operations, or
/// the `opc-work-request-id` for asynchronous mutations.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::response::Response;
    /// #[derive(Clone, Default)]
    /// pub struct Resource {
    ///   // ...
    /// }
    ///
    /// let body = Resource::default();
    /// let response = Response::from(body);
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::response::Response;
    /// # use oci_gax::response::Parts;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("etag", http::HeaderValue::from_static("abc123"));
    /// let response : Response<()> = Response::from_parts(
    ///     Parts::new().set_headers(headers), ());
    /// assert_eq!(response.etag(), Some("abc123"));
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the value of a header, if present and valid UTF-8.
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `opc-request-id` header, include it when contacting support.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.header_str(OPC_REQUEST_ID)
    }

    /// The `etag` header.
    pub fn etag(&self) -> Option<&str> {
        self.header_str(http::header::ETAG.as_str())
    }

    /// The `opc-next-page` header.
    ///
    /// List operations set this header when more results are available.
    pub fn opc_next_page(&self) -> Option<&str> {
        self.header_str(OPC_NEXT_PAGE)
    }

    /// The `opc-work-request-id` header.
    pub fn opc_work_request_id(&self) -> Option<&str> {
        self.header_str(OPC_WORK_REQUEST_ID)
    }

    /// The `location` header, set by some create operations.
    pub fn location(&self) -> Option<&str> {
        self.header_str(http::header::LOCATION.as_str())
    }

    /// Returns the body associated with this response.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.body().as_str(), "test");
    /// ```
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, preserving the metadata.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

impl<T> crate::paginator::PageableResponse for Response<T> {
    fn next_page_token(&self) -> String {
        self.opc_next_page().unwrap_or_default().to_string()
    }
}

/// Component parts of a response.
///
/// The response parts, other than the body, consist of just headers.
///
/// # Example
/// ```
/// # use oci_gax::response::Parts;
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
/// let parts = Parts::new().set_headers(headers);
///
/// assert_eq!(
///     parts.headers.get(http::header::CONTENT_TYPE),
///     Some(&http::HeaderValue::from_static("application/json"))
/// );
/// ```
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

// Copyright 2025 Google LLC
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

use crate::options::ClientInfo;
use tracing::Span;

/// Creates the span wrapping a client request, including all its attempts.
pub(crate) fn request_span(info: &ClientInfo) -> Span {
    tracing::info_span!(
        "oci.request",
        oci.service = info.service_name,
        oci.client.artifact = info.client_artifact,
        oci.client.version = info.client_version,
        http.request.method = tracing::field::Empty,
        url.full = tracing::field::Empty,
        http.response.status_code = tracing::field::Empty,
        oci.request_id = tracing::field::Empty,
    )
}

/// Records the request method and URL in the current span.
pub(crate) fn record_request(method: &reqwest::Method, url: &reqwest::Url) {
    let span = Span::current();
    span.record("http.request.method", method.as_str());
    span.record("url.full", url.as_str());
}

/// Records the outcome of the request in the current span.
pub(crate) fn record_response(status: u16, request_id: Option<&str>) {
    let span = Span::current();
    span.record("http.response.status_code", status);
    if let Some(id) = request_id {
        span.record("oci.request_id", id);
    }
}

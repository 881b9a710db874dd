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

//! Optional request headers.
//!
//! Many OCI operations accept optional headers, such as `if-match` for
//! optimistic concurrency, or `opc-request-id` to correlate requests. Only the
//! headers with a value are attached to the request.

use gax::error::Error;
use gax::error::binding::{BindingError, SubstitutionFail};
use reqwest::header::{HeaderName, HeaderValue};

pub const IF_MATCH: &str = "if-match";
pub const IF_NONE_MATCH: &str = "if-none-match";
pub const IF_MODIFIED_SINCE: &str = "if-modified-since";
pub const IF_UNMODIFIED_SINCE: &str = "if-unmodified-since";

/// Attaches `value` as the `name` header, if it is set.
///
/// Values that are not valid in an HTTP header are rejected before any
/// request is sent.
pub fn add(
    builder: reqwest::RequestBuilder,
    name: &'static str,
    value: Option<&str>,
) -> gax::Result<reqwest::RequestBuilder> {
    match value {
        None => Ok(builder),
        Some(v) => Ok(builder.header(name, header_value(name, v)?)),
    }
}

/// Attaches each entry as a `{prefix}{key}` header.
///
/// `field_name` names the request field in errors.
pub fn add_prefixed<I, K, V>(
    builder: reqwest::RequestBuilder,
    field_name: &'static str,
    prefix: &str,
    entries: I,
) -> gax::Result<reqwest::RequestBuilder>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries.into_iter().try_fold(builder, |b, (k, v)| {
        let key = k.as_ref();
        let name = HeaderName::from_bytes(format!("{prefix}{key}").as_bytes())
            .map_err(|_| invalid(field_name, key))?;
        Ok(b.header(name, header_value(field_name, v.as_ref())?))
    })
}

fn header_value(field_name: &'static str, value: &str) -> gax::Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| invalid(field_name, value))
}

fn invalid(field_name: &'static str, value: &str) -> Error {
    Error::binding(BindingError {
        field_name,
        problem: SubstitutionFail::Invalid(value.to_string(), "a valid HTTP header"),
    })
}

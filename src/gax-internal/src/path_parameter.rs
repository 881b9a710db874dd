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

//! Handling of required path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required, and cannot be blank. The request builders store them as optional
//! fields, and the client needs to return an error when the parameter is
//! missing before making any request. A small helper function makes the
//! request builders easier to read.

use gax::error::Error;
use gax::error::binding::{BindingError, SubstitutionFail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Everything but the RFC 3986 unreserved characters is encoded, `/` included.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Validates a path parameter and returns its percent-encoded value.
///
/// # Example
/// ```
/// # use oci_gax_internal::path_parameter::required;
/// let p = required("objectName", Some("logs/2024/app.log"))?;
/// assert_eq!(p, "logs%2F2024%2Fapp.log");
/// # Ok::<(), gax::error::Error>(())
/// ```
pub fn required(name: &'static str, value: Option<&str>) -> gax::Result<String> {
    match value {
        None => Err(missing(name)),
        Some(v) if v.trim().is_empty() => Err(Error::binding(BindingError {
            field_name: name,
            problem: SubstitutionFail::Blank,
        })),
        Some(v) => Ok(encode(v)),
    }
}

/// Percent-encodes a value for use as a path segment.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

pub fn missing(name: &'static str) -> Error {
    Error::binding(BindingError {
        field_name: name,
        problem: SubstitutionFail::Unset,
    })
}

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

//! Defines traits and helpers to serialize query parameters.
//!
//! Query parameters in the OCI APIs are optional: strings, integers, booleans,
//! timestamps, enums, and lists of these. The request builders hold them as
//! `Option<T>` or `Vec<T>` fields, and only the values that are set are
//! attached to the request. Enums are sent using their wire name, which is
//! what their `Display` implementation produces.
//!
//! The types are not intended for application developers to use. They are
//! public because each service crate uses these helpers.

use gax::error::Error;
use gax::error::binding::{BindingError, SubstitutionFail};
use std::fmt::Display;

/// Validates a required query parameter.
///
/// Some OCI operations require a query parameter, most often the
/// `compartmentId` in list operations. The value must be set and not blank.
pub fn required<'a>(name: &'static str, value: Option<&'a str>) -> gax::Result<&'a str> {
    match value {
        None => Err(crate::path_parameter::missing(name)),
        Some(v) if v.trim().is_empty() => Err(Error::binding(BindingError {
            field_name: name,
            problem: SubstitutionFail::Blank,
        })),
        Some(v) => Ok(v),
    }
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl<T: Display> QueryParameter for Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => builder.query(&[(name, v.to_string())]),
        }
    }
}

impl<T: Display> QueryParameter for Vec<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        self.into_iter()
            .fold(builder, |builder, v| builder.query(&[(name, v.to_string())]))
    }
}

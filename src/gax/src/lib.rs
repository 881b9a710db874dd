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

//! Oracle Cloud Infrastructure API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the OCI client libraries for Rust: the error type
//! returned by every operation, the retry and polling policies, and the
//! request options shared by all the generated clients.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping REST operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Defines a type to iterate over paginated list operations as a Stream.
pub mod paginator;

pub mod options;
pub mod response;

pub mod backoff_policy;
pub mod exponential_backoff;
pub mod fixed_backoff;
pub mod retry_policy;
pub mod retry_result;

pub mod polling_backoff_policy;
pub mod polling_error_policy;

pub mod client_builder;

#[doc(hidden)]
pub mod retry_loop_internal;

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

//! Oracle Cloud Infrastructure Client Libraries for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate applications
//! with OCI services. The SDK clients consume an implementation of
//! [credentials::Credentials] and use these credentials to sign each request
//! issued by the application.
//!
//! OCI requests are authenticated with [HTTP signatures]: the client computes
//! an RSA-SHA256 signature over a canonical subset of the request headers and
//! sends it in the `authorization` header. The key id identifies the tenancy,
//! the user, and the fingerprint of the API signing key.
//!
//! [HTTP signatures]: https://docs.oracle.com/en-us/iaas/Content/API/Concepts/signingrequests.htm

pub mod build_errors;
pub mod config;
pub mod errors;

/// Types and functions to sign OCI requests.
pub mod credentials;

pub(crate) mod signer;

/// A `Result` alias where the `Err` case is
/// `oci_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

/// A `Result` alias where the `Err` case is `oci_auth::build_errors::Error`.
pub(crate) type BuildResult<T> = std::result::Result<T, crate::build_errors::Error>;

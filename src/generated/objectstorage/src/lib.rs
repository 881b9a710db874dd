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

//! Oracle Cloud Infrastructure Client Libraries for Rust - Object Storage
//!
//! This crate contains traits, types, and functions to interact with the OCI
//! Object Storage service. Most applications will use the structs defined in
//! the [client] module. More specifically:
//!
//! * [ObjectStorage](client/struct.ObjectStorage.html)
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use oci_objectstorage::client::ObjectStorage;
//!
//! let client = ObjectStorage::builder().with_region("us-ashburn-1").build().await?;
//! let namespace = client.get_namespace().send().await?.into_body();
//! client
//!     .put_object()
//!     .set_namespace_name(&namespace)
//!     .set_bucket_name("reports")
//!     .set_object_name("2024/summary.txt")
//!     .set_content_type("text/plain")
//!     .set_body("hello world")
//!     .send()
//!     .await?;
//! let data = client
//!     .get_object()
//!     .set_namespace_name(&namespace)
//!     .set_bucket_name("reports")
//!     .set_object_name("2024/summary.txt")
//!     .send()
//!     .await?
//!     .into_body();
//! assert_eq!(data.as_ref(), b"hello world");
//! # Ok(()) }
//! ```

pub use gax::Result;
pub use gax::error::Error;

/// The request builders for each operation.
pub mod builder;

/// The client to interact with the service.
pub mod client;

/// The messages and enums that are part of this client library.
pub mod model;

pub mod stub;

pub(crate) mod transport;

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub(crate) const CLIENT_INFO: gaxi::options::ClientInfo = gaxi::options::ClientInfo {
        service_name: "objectstorage",
        client_version: VERSION,
        client_artifact: NAME,
        endpoint_template: "https://objectstorage.{region}.oraclecloud.com",
    };
}

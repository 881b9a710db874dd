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

//! Oracle Cloud Infrastructure Client Libraries for Rust - DNS
//!
//! This crate contains traits, types, and functions to interact with the OCI
//! DNS service. Most applications will use the structs defined in the
//! [client] module. More specifically:
//!
//! * [Dns](client/struct.Dns.html)
//!
//! The client manages DNS zones, the records in each zone, steering policies,
//! and the attachments between steering policies and zone domains.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use oci_dns::client::Dns;
//! use oci_dns::model::{CreateZoneDetails, ZoneLifecycleState, ZoneType};
//! use oci_dns::Waiter;
//!
//! let client = Dns::builder().with_region("us-ashburn-1").build().await?;
//! let completed = client
//!     .create_zone()
//!     .set_body(
//!         CreateZoneDetails::new()
//!             .set_name("example.com")
//!             .set_zone_type(ZoneType::Primary)
//!             .set_compartment_id("ocid1.compartment.oc1..aaaa"),
//!     )
//!     .send_and_wait_for_state([ZoneLifecycleState::Active], Waiter::new())
//!     .await?;
//! println!("zone = {:?}", completed.outcome().resource());
//! # Ok(()) }
//! ```

pub use gax::Result;
pub use gax::error::Error;
pub use waiter::{Completed, OperationError, OperationResult, TargetStates, WaitOutcome, Waiter};

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
        service_name: "dns",
        client_version: VERSION,
        client_artifact: NAME,
        endpoint_template: "https://dns.{region}.oraclecloud.com/20180115",
    };
}

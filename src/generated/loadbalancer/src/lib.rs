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

//! Oracle Cloud Infrastructure Client Libraries for Rust - Load Balancer
//!
//! This crate contains traits, types, and functions to interact with the OCI
//! Load Balancer service. Most applications will use the structs defined in
//! the [client] module. More specifically:
//!
//! * [LoadBalancer](client/struct.LoadBalancer.html)
//!
//! Changes to a load balancer are asynchronous. The mutating operations
//! return the OCID of a work request, and their `send_and_wait_for_state()`
//! variants poll the work request until it completes.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use oci_loadbalancer::client::LoadBalancer;
//! use oci_loadbalancer::model::{CreateLoadBalancerDetails, ShapeDetails, WorkRequestLifecycleState};
//! use oci_loadbalancer::Waiter;
//!
//! let client = LoadBalancer::builder().with_region("us-ashburn-1").build().await?;
//! let completed = client
//!     .create_load_balancer()
//!     .set_body(
//!         CreateLoadBalancerDetails::new()
//!             .set_compartment_id("ocid1.compartment.oc1..aaaa")
//!             .set_display_name("web")
//!             .set_shape_name("flexible")
//!             .set_shape_details(
//!                 ShapeDetails::new()
//!                     .set_minimum_bandwidth_in_mbps(10)
//!                     .set_maximum_bandwidth_in_mbps(100),
//!             )
//!             .set_subnet_ids(["ocid1.subnet.oc1..cccc"]),
//!     )
//!     .send_and_wait_for_state(
//!         [WorkRequestLifecycleState::Succeeded, WorkRequestLifecycleState::Failed],
//!         Waiter::new(),
//!     )
//!     .await?;
//! println!("work request = {:?}", completed.outcome().resource());
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
        service_name: "loadbalancer",
        client_version: VERSION,
        client_artifact: NAME,
        endpoint_template: "https://iaas.{region}.oraclecloud.com/20170115",
    };
}

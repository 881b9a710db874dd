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

//! Contains the LoadBalancer client and related types.

/// Implements a client for the Load Balancer API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use oci_loadbalancer::client::LoadBalancer;
/// let client = LoadBalancer::builder().with_region("us-ashburn-1").build().await?;
/// let lbs = client.list_load_balancers().set_compartment_id("ocid1.compartment.oc1..aaaa").send().await?;
/// println!("{lbs:?}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `LoadBalancer` use the `with_*` methods in the type returned
/// by [builder()][LoadBalancer::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_region()]: the region hosting the resources. The client uses
///   the regional endpoint (`https://iaas.{region}.oraclecloud.com/20170115`).
/// * [with_endpoint()]: applications running in restricted networks may want
///   to override the regional endpoint.
/// * [with_credentials()]: by default this client uses the API signing key
///   from the `DEFAULT` profile in `~/.oci/config`. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `LoadBalancer` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `LoadBalancer` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// # Service Description
///
/// The Load Balancer service distributes traffic from listeners to sets of
/// backend servers. Changes to a load balancer are asynchronous, each
/// mutating call returns a work request tracking its progress.
///
/// [with_region()]: super::builder::load_balancer::ClientBuilder::with_region
/// [with_endpoint()]: super::builder::load_balancer::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::load_balancer::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct LoadBalancer {
    inner: std::sync::Arc<dyn super::stub::LoadBalancer>,
}

impl LoadBalancer {
    /// Returns a builder for [LoadBalancer].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use oci_loadbalancer::client::LoadBalancer;
    /// let client = LoadBalancer::builder().with_region("us-phoenix-1").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::load_balancer::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::load_balancer::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::LoadBalancer + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::LoadBalancer::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Lists the load balancers in a compartment.
    pub fn list_load_balancers(&self) -> super::builder::load_balancer::ListLoadBalancers {
        super::builder::load_balancer::ListLoadBalancers::new(self.inner.clone())
    }

    /// Gets a load balancer.
    pub fn get_load_balancer(&self) -> super::builder::load_balancer::GetLoadBalancer {
        super::builder::load_balancer::GetLoadBalancer::new(self.inner.clone())
    }

    /// Creates a load balancer.
    ///
    /// The service creates the load balancer asynchronously. Use
    /// [send_and_wait_for_state()][super::builder::load_balancer::CreateLoadBalancer::send_and_wait_for_state]
    /// to wait for the work request.
    pub fn create_load_balancer(&self) -> super::builder::load_balancer::CreateLoadBalancer {
        super::builder::load_balancer::CreateLoadBalancer::new(self.inner.clone())
    }

    /// Updates the display name and tags of a load balancer.
    pub fn update_load_balancer(&self) -> super::builder::load_balancer::UpdateLoadBalancer {
        super::builder::load_balancer::UpdateLoadBalancer::new(self.inner.clone())
    }

    /// Deletes a load balancer.
    pub fn delete_load_balancer(&self) -> super::builder::load_balancer::DeleteLoadBalancer {
        super::builder::load_balancer::DeleteLoadBalancer::new(self.inner.clone())
    }

    /// Gets a work request.
    pub fn get_work_request(&self) -> super::builder::load_balancer::GetWorkRequest {
        super::builder::load_balancer::GetWorkRequest::new(self.inner.clone())
    }

    /// Lists the work requests of a load balancer.
    pub fn list_work_requests(&self) -> super::builder::load_balancer::ListWorkRequests {
        super::builder::load_balancer::ListWorkRequests::new(self.inner.clone())
    }
}

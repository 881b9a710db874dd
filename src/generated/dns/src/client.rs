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

//! Contains the Dns client and related types.

/// Implements a client for the DNS API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use oci_dns::client::Dns;
/// let client = Dns::builder().with_region("us-ashburn-1").build().await?;
/// let zones = client.list_zones().set_compartment_id("ocid1.compartment.oc1..aaaa").send().await?;
/// println!("{zones:?}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `Dns` use the `with_*` methods in the type returned
/// by [builder()][Dns::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_region()]: the region hosting the resources. The client uses
///   the regional endpoint (`https://dns.{region}.oraclecloud.com/20180115`).
/// * [with_endpoint()]: applications running in restricted networks may want
///   to override the regional endpoint.
/// * [with_credentials()]: by default this client uses the API signing key
///   from the `DEFAULT` profile in `~/.oci/config`. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `Dns` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `Dns` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// # Service Description
///
/// The DNS service manages zones, resource record sets, and traffic steering
/// policies. Zones are identified by name or OCID. Records are grouped in
/// RRSets, identified by the zone, the domain name, and the record type.
///
/// [with_region()]: super::builder::dns::ClientBuilder::with_region
/// [with_endpoint()]: super::builder::dns::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::dns::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct Dns {
    inner: std::sync::Arc<dyn super::stub::Dns>,
}

impl Dns {
    /// Returns a builder for [Dns].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use oci_dns::client::Dns;
    /// let client = Dns::builder().with_region("us-phoenix-1").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::dns::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::dns::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Dns + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::Dns::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Lists the zones in a compartment.
    ///
    /// The results are paginated, use [by_page()][super::builder::dns::ListZones::by_page]
    /// to iterate over all the pages.
    pub fn list_zones(&self) -> super::builder::dns::ListZones {
        super::builder::dns::ListZones::new(self.inner.clone())
    }

    /// Gets a zone by name or OCID.
    pub fn get_zone(&self) -> super::builder::dns::GetZone {
        super::builder::dns::GetZone::new(self.inner.clone())
    }

    /// Creates a new zone.
    ///
    /// Use [send_and_wait_for_state()][super::builder::dns::CreateZone::send_and_wait_for_state]
    /// to wait until the zone is `ACTIVE`.
    pub fn create_zone(&self) -> super::builder::dns::CreateZone {
        super::builder::dns::CreateZone::new(self.inner.clone())
    }

    /// Updates a zone.
    pub fn update_zone(&self) -> super::builder::dns::UpdateZone {
        super::builder::dns::UpdateZone::new(self.inner.clone())
    }

    /// Deletes a zone.
    pub fn delete_zone(&self) -> super::builder::dns::DeleteZone {
        super::builder::dns::DeleteZone::new(self.inner.clone())
    }

    /// Gets the records for a domain and record type.
    pub fn get_rr_set(&self) -> super::builder::dns::GetRrSet {
        super::builder::dns::GetRrSet::new(self.inner.clone())
    }

    /// Replaces the records for a domain and record type.
    pub fn update_rr_set(&self) -> super::builder::dns::UpdateRrSet {
        super::builder::dns::UpdateRrSet::new(self.inner.clone())
    }

    /// Deletes all the records for a domain and record type.
    pub fn delete_rr_set(&self) -> super::builder::dns::DeleteRrSet {
        super::builder::dns::DeleteRrSet::new(self.inner.clone())
    }

    /// Lists the steering policies in a compartment.
    pub fn list_steering_policies(&self) -> super::builder::dns::ListSteeringPolicies {
        super::builder::dns::ListSteeringPolicies::new(self.inner.clone())
    }

    /// Gets a steering policy.
    pub fn get_steering_policy(&self) -> super::builder::dns::GetSteeringPolicy {
        super::builder::dns::GetSteeringPolicy::new(self.inner.clone())
    }

    /// Creates a steering policy.
    pub fn create_steering_policy(&self) -> super::builder::dns::CreateSteeringPolicy {
        super::builder::dns::CreateSteeringPolicy::new(self.inner.clone())
    }

    /// Updates a steering policy.
    pub fn update_steering_policy(&self) -> super::builder::dns::UpdateSteeringPolicy {
        super::builder::dns::UpdateSteeringPolicy::new(self.inner.clone())
    }

    /// Deletes a steering policy.
    ///
    /// The service rejects the request if the policy has attachments.
    pub fn delete_steering_policy(&self) -> super::builder::dns::DeleteSteeringPolicy {
        super::builder::dns::DeleteSteeringPolicy::new(self.inner.clone())
    }

    /// Lists the steering policy attachments in a compartment.
    pub fn list_steering_policy_attachments(&self) -> super::builder::dns::ListSteeringPolicyAttachments {
        super::builder::dns::ListSteeringPolicyAttachments::new(self.inner.clone())
    }

    /// Gets a steering policy attachment.
    pub fn get_steering_policy_attachment(&self) -> super::builder::dns::GetSteeringPolicyAttachment {
        super::builder::dns::GetSteeringPolicyAttachment::new(self.inner.clone())
    }

    /// Attaches a steering policy to a domain in a zone.
    pub fn create_steering_policy_attachment(&self) -> super::builder::dns::CreateSteeringPolicyAttachment {
        super::builder::dns::CreateSteeringPolicyAttachment::new(self.inner.clone())
    }

    /// Updates a steering policy attachment.
    pub fn update_steering_policy_attachment(&self) -> super::builder::dns::UpdateSteeringPolicyAttachment {
        super::builder::dns::UpdateSteeringPolicyAttachment::new(self.inner.clone())
    }

    /// Deletes a steering policy attachment.
    pub fn delete_steering_policy_attachment(&self) -> super::builder::dns::DeleteSteeringPolicyAttachment {
        super::builder::dns::DeleteSteeringPolicyAttachment::new(self.inner.clone())
    }
}

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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

use gax::options::RequestOptions;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{PollingErrorPolicy, TransientOnly};
use gax::response::Response;
use std::sync::Arc;

/// Defines the trait used to implement [crate::client::Dns].
///
/// Application developers may need to implement this trait to mock
/// `client::Dns`. In other cases, applications create and use a
/// `client::Dns` directly.
///
/// All the methods have default implementations that panic. Mocks only need
/// to implement the methods used by the code under test.
#[async_trait::async_trait]
pub trait Dns: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Dns::list_zones].
    async fn list_zones(
        &self,
        _req: crate::model::ListZonesRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<Vec<crate::model::Zone>>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::get_zone].
    async fn get_zone(
        &self,
        _req: crate::model::GetZoneRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::Zone>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::create_zone].
    async fn create_zone(
        &self,
        _req: crate::model::CreateZoneRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::Zone>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::update_zone].
    async fn update_zone(
        &self,
        _req: crate::model::UpdateZoneRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::Zone>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::delete_zone].
    async fn delete_zone(
        &self,
        _req: crate::model::DeleteZoneRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::get_rr_set].
    async fn get_rr_set(
        &self,
        _req: crate::model::GetRRSetRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::RRSet>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::update_rr_set].
    async fn update_rr_set(
        &self,
        _req: crate::model::UpdateRRSetRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::RRSet>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::delete_rr_set].
    async fn delete_rr_set(
        &self,
        _req: crate::model::DeleteRRSetRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::list_steering_policies].
    async fn list_steering_policies(
        &self,
        _req: crate::model::ListSteeringPoliciesRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<Vec<crate::model::SteeringPolicy>>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::get_steering_policy].
    async fn get_steering_policy(
        &self,
        _req: crate::model::GetSteeringPolicyRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::SteeringPolicy>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::create_steering_policy].
    async fn create_steering_policy(
        &self,
        _req: crate::model::CreateSteeringPolicyRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::SteeringPolicy>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::update_steering_policy].
    async fn update_steering_policy(
        &self,
        _req: crate::model::UpdateSteeringPolicyRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::SteeringPolicy>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::delete_steering_policy].
    async fn delete_steering_policy(
        &self,
        _req: crate::model::DeleteSteeringPolicyRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::list_steering_policy_attachments].
    async fn list_steering_policy_attachments(
        &self,
        _req: crate::model::ListSteeringPolicyAttachmentsRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<Vec<crate::model::SteeringPolicyAttachment>>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::get_steering_policy_attachment].
    async fn get_steering_policy_attachment(
        &self,
        _req: crate::model::GetSteeringPolicyAttachmentRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::SteeringPolicyAttachment>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::create_steering_policy_attachment].
    async fn create_steering_policy_attachment(
        &self,
        _req: crate::model::CreateSteeringPolicyAttachmentRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::SteeringPolicyAttachment>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::update_steering_policy_attachment].
    async fn update_steering_policy_attachment(
        &self,
        _req: crate::model::UpdateSteeringPolicyAttachmentRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::SteeringPolicyAttachment>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::Dns::delete_steering_policy_attachment].
    async fn delete_steering_policy_attachment(
        &self,
        _req: crate::model::DeleteSteeringPolicyAttachmentRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Returns the polling error policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to
    /// verify it is called by your mocks.
    fn get_polling_error_policy(&self, _options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        Arc::new(TransientOnly)
    }

    /// Returns the polling backoff policy, if any.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to
    /// verify it is called by your mocks.
    fn get_polling_backoff_policy(
        &self,
        _options: &RequestOptions,
    ) -> Option<Arc<dyn PollingBackoffPolicy>> {
        None
    }
}

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

/// Defines the trait used to implement [crate::client::LoadBalancer].
///
/// Application developers may need to implement this trait to mock
/// `client::LoadBalancer`. In other cases, applications create and use a
/// `client::LoadBalancer` directly.
///
/// All the methods have default implementations that panic. Mocks only need
/// to implement the methods used by the code under test.
#[async_trait::async_trait]
pub trait LoadBalancer: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::LoadBalancer::list_load_balancers].
    async fn list_load_balancers(
        &self,
        _req: crate::model::ListLoadBalancersRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<Vec<crate::model::LoadBalancer>>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::LoadBalancer::get_load_balancer].
    async fn get_load_balancer(
        &self,
        _req: crate::model::GetLoadBalancerRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::LoadBalancer>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::LoadBalancer::create_load_balancer].
    async fn create_load_balancer(
        &self,
        _req: crate::model::CreateLoadBalancerRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::LoadBalancer::update_load_balancer].
    async fn update_load_balancer(
        &self,
        _req: crate::model::UpdateLoadBalancerRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::LoadBalancer::delete_load_balancer].
    async fn delete_load_balancer(
        &self,
        _req: crate::model::DeleteLoadBalancerRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::LoadBalancer::get_work_request].
    async fn get_work_request(
        &self,
        _req: crate::model::GetWorkRequestRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::WorkRequest>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::LoadBalancer::list_work_requests].
    async fn list_work_requests(
        &self,
        _req: crate::model::ListWorkRequestsRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<Vec<crate::model::WorkRequest>>> {
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

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

use crate::Result;
use crate::model;
use gax::options::RequestOptions;
use gax::options::internal::set_default_idempotency;
use gax::response::{OPC_REQUEST_ID, Response};
use gaxi::enums::require_known;
use gaxi::header_parameter::{self as header, IF_MATCH, IF_NONE_MATCH};
use gaxi::http::{NoBody, ReqwestClient};
use gaxi::path_parameter::{missing, required};
use gaxi::query_parameter::{self, QueryParameter};
use gaxi::retry_token::{OPC_RETRY_TOKEN, token_or_generate};
use reqwest::Method;

/// Implements [LoadBalancer](crate::stub::LoadBalancer) using a [ReqwestClient].
#[derive(Clone)]
pub struct LoadBalancer {
    inner: ReqwestClient,
}

impl std::fmt::Debug for LoadBalancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("LoadBalancer")
            .field("inner", &self.inner)
            .finish()
    }
}

impl LoadBalancer {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, &crate::info::CLIENT_INFO).await?;
        Ok(Self { inner })
    }
}

fn load_balancer_path(load_balancer_id: Option<&str>) -> Result<String> {
    Ok(format!(
        "/loadBalancers/{}",
        required("loadBalancerId", load_balancer_id)?
    ))
}

#[async_trait::async_trait]
impl crate::stub::LoadBalancer for LoadBalancer {
    async fn list_load_balancers(
        &self,
        req: model::ListLoadBalancersRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<model::LoadBalancer>>> {
        require_known("sortBy", req.sort_by.as_ref())?;
        require_known("sortOrder", req.sort_order.as_ref())?;
        require_known("lifecycleState", req.lifecycle_state.as_ref())?;
        let compartment_id = query_parameter::required("compartmentId", req.compartment_id.as_deref())?;
        let builder = self
            .inner
            .builder(Method::GET, "/loadBalancers".to_string())
            .query(&[("compartmentId", compartment_id)]);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.detail.add(builder, "detail");
        let builder = req.sort_by.add(builder, "sortBy");
        let builder = req.sort_order.add(builder, "sortOrder");
        let builder = req.display_name.add(builder, "displayName");
        let builder = req.lifecycle_state.add(builder, "lifecycleState");
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn get_load_balancer(
        &self,
        req: model::GetLoadBalancerRequest,
        options: RequestOptions,
    ) -> Result<Response<model::LoadBalancer>> {
        let path = load_balancer_path(req.load_balancer_id.as_deref())?;
        let builder = self.inner.builder(Method::GET, path);
        let builder = header::add(builder, IF_NONE_MATCH, req.if_none_match.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn create_load_balancer(
        &self,
        req: model::CreateLoadBalancerRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let body = req.body.ok_or_else(|| missing("createLoadBalancerDetails"))?;
        let builder = self.inner.builder(Method::POST, "/loadBalancers".to_string());
        let builder = header::add(builder, OPC_RETRY_TOKEN, Some(&token_or_generate(req.opc_retry_token.as_deref())))?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_empty(builder, Some(body), set_default_idempotency(options, true))
            .await
    }

    async fn update_load_balancer(
        &self,
        req: model::UpdateLoadBalancerRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = load_balancer_path(req.load_balancer_id.as_deref())?;
        let body = req.body.ok_or_else(|| missing("updateLoadBalancerDetails"))?;
        let builder = self.inner.builder(Method::PUT, path);
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, OPC_RETRY_TOKEN, Some(&token_or_generate(req.opc_retry_token.as_deref())))?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_empty(builder, Some(body), set_default_idempotency(options, true))
            .await
    }

    async fn delete_load_balancer(
        &self,
        req: model::DeleteLoadBalancerRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = load_balancer_path(req.load_balancer_id.as_deref())?;
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_empty(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn get_work_request(
        &self,
        req: model::GetWorkRequestRequest,
        options: RequestOptions,
    ) -> Result<Response<model::WorkRequest>> {
        let path = format!(
            "/loadBalancerWorkRequests/{}",
            required("workRequestId", req.work_request_id.as_deref())?
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn list_work_requests(
        &self,
        req: model::ListWorkRequestsRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<model::WorkRequest>>> {
        let path = format!(
            "{}/workRequests",
            load_balancer_path(req.load_balancer_id.as_deref())?
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    fn get_polling_error_policy(
        &self,
        options: &RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Option<std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy>> {
        self.inner.get_polling_backoff_policy(options)
    }
}

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
use gaxi::header_parameter::{self as header, IF_MATCH, IF_MODIFIED_SINCE, IF_NONE_MATCH, IF_UNMODIFIED_SINCE};
use gaxi::http::{NoBody, ReqwestClient};
use gaxi::path_parameter::{missing, required};
use gaxi::query_parameter::{self, QueryParameter};
use gaxi::retry_token::{OPC_RETRY_TOKEN, token_or_generate};
use reqwest::Method;

/// Implements [Dns](crate::stub::Dns) using a [ReqwestClient].
#[derive(Clone)]
pub struct Dns {
    inner: ReqwestClient,
}

impl std::fmt::Debug for Dns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Dns").field("inner", &self.inner).finish()
    }
}

impl Dns {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, &crate::info::CLIENT_INFO).await?;
        Ok(Self { inner })
    }
}

// Zones and RRSets accept the same query parameters to select the zone view.
fn zone_view(
    builder: reqwest::RequestBuilder,
    compartment_id: Option<String>,
    scope: Option<model::Scope>,
    view_id: Option<String>,
) -> Result<reqwest::RequestBuilder> {
    require_known("scope", scope.as_ref())?;
    let builder = compartment_id.add(builder, "compartmentId");
    let builder = scope.add(builder, "scope");
    Ok(view_id.add(builder, "viewId"))
}

fn rr_set_path(zone_name_or_id: Option<&str>, domain: Option<&str>, rtype: Option<&str>) -> Result<String> {
    Ok(format!(
        "/zones/{}/records/{}/{}",
        required("zoneNameOrId", zone_name_or_id)?,
        required("domain", domain)?,
        required("rtype", rtype)?,
    ))
}

#[async_trait::async_trait]
impl crate::stub::Dns for Dns {
    async fn list_zones(
        &self,
        req: model::ListZonesRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<model::Zone>>> {
        require_known("zoneType", req.zone_type.as_ref())?;
        require_known("lifecycleState", req.lifecycle_state.as_ref())?;
        require_known("sortBy", req.sort_by.as_ref())?;
        require_known("sortOrder", req.sort_order.as_ref())?;
        let compartment_id = query_parameter::required("compartmentId", req.compartment_id.as_deref())?;
        let builder = self
            .inner
            .builder(Method::GET, "/zones".to_string())
            .query(&[("compartmentId", compartment_id)]);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.name.add(builder, "name");
        let builder = req.name_contains.add(builder, "nameContains");
        let builder = req.zone_type.add(builder, "zoneType");
        let builder = zone_view(builder, None, req.scope, req.view_id)?;
        let builder = req
            .time_created_greater_than_or_equal_to
            .add(builder, "timeCreatedGreaterThanOrEqualTo");
        let builder = req.time_created_less_than.add(builder, "timeCreatedLessThan");
        let builder = req.lifecycle_state.add(builder, "lifecycleState");
        let builder = req.sort_by.add(builder, "sortBy");
        let builder = req.sort_order.add(builder, "sortOrder");
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn get_zone(
        &self,
        req: model::GetZoneRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Zone>> {
        let path = format!("/zones/{}", required("zoneNameOrId", req.zone_name_or_id.as_deref())?);
        let builder = self.inner.builder(Method::GET, path);
        let builder = zone_view(builder, req.compartment_id, req.scope, req.view_id)?;
        let builder = header::add(builder, IF_NONE_MATCH, req.if_none_match.as_deref())?;
        let builder = header::add(builder, IF_MODIFIED_SINCE, req.if_modified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn create_zone(
        &self,
        req: model::CreateZoneRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Zone>> {
        let body = req.body.ok_or_else(|| missing("createZoneDetails"))?;
        let builder = self.inner.builder(Method::POST, "/zones".to_string());
        let builder = zone_view(builder, req.compartment_id, req.scope, req.view_id)?;
        let builder = header::add(builder, OPC_RETRY_TOKEN, Some(&token_or_generate(req.opc_retry_token.as_deref())))?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, Some(body), set_default_idempotency(options, true))
            .await
    }

    async fn update_zone(
        &self,
        req: model::UpdateZoneRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Zone>> {
        let path = format!("/zones/{}", required("zoneNameOrId", req.zone_name_or_id.as_deref())?);
        let body = req.body.ok_or_else(|| missing("updateZoneDetails"))?;
        let builder = self.inner.builder(Method::PUT, path);
        let builder = zone_view(builder, req.compartment_id, req.scope, req.view_id)?;
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_UNMODIFIED_SINCE, req.if_unmodified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, Some(body), set_default_idempotency(options, true))
            .await
    }

    async fn delete_zone(
        &self,
        req: model::DeleteZoneRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = format!("/zones/{}", required("zoneNameOrId", req.zone_name_or_id.as_deref())?);
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = zone_view(builder, req.compartment_id, req.scope, req.view_id)?;
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_UNMODIFIED_SINCE, req.if_unmodified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_empty(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn get_rr_set(
        &self,
        req: model::GetRRSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RRSet>> {
        let path = rr_set_path(
            req.zone_name_or_id.as_deref(),
            req.domain.as_deref(),
            req.rtype.as_deref(),
        )?;
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.zone_version.add(builder, "zoneVersion");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = zone_view(builder, req.compartment_id, req.scope, req.view_id)?;
        let builder = header::add(builder, IF_NONE_MATCH, req.if_none_match.as_deref())?;
        let builder = header::add(builder, IF_MODIFIED_SINCE, req.if_modified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn update_rr_set(
        &self,
        req: model::UpdateRRSetRequest,
        options: RequestOptions,
    ) -> Result<Response<model::RRSet>> {
        let path = rr_set_path(
            req.zone_name_or_id.as_deref(),
            req.domain.as_deref(),
            req.rtype.as_deref(),
        )?;
        let body = req.body.ok_or_else(|| missing("updateRRSetDetails"))?;
        let builder = self.inner.builder(Method::PUT, path);
        let builder = zone_view(builder, req.compartment_id, req.scope, req.view_id)?;
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_UNMODIFIED_SINCE, req.if_unmodified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, Some(body), set_default_idempotency(options, true))
            .await
    }

    async fn delete_rr_set(
        &self,
        req: model::DeleteRRSetRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = rr_set_path(
            req.zone_name_or_id.as_deref(),
            req.domain.as_deref(),
            req.rtype.as_deref(),
        )?;
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = zone_view(builder, req.compartment_id, req.scope, req.view_id)?;
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_UNMODIFIED_SINCE, req.if_unmodified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_empty(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn list_steering_policies(
        &self,
        req: model::ListSteeringPoliciesRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<model::SteeringPolicy>>> {
        require_known("template", req.template.as_ref())?;
        require_known("lifecycleState", req.lifecycle_state.as_ref())?;
        require_known("sortBy", req.sort_by.as_ref())?;
        require_known("sortOrder", req.sort_order.as_ref())?;
        let compartment_id = query_parameter::required("compartmentId", req.compartment_id.as_deref())?;
        let builder = self
            .inner
            .builder(Method::GET, "/steeringPolicies".to_string())
            .query(&[("compartmentId", compartment_id)]);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.id.add(builder, "id");
        let builder = req.display_name.add(builder, "displayName");
        let builder = req.display_name_contains.add(builder, "displayNameContains");
        let builder = req.health_check_monitor_id.add(builder, "healthCheckMonitorId");
        let builder = req.template.add(builder, "template");
        let builder = req.lifecycle_state.add(builder, "lifecycleState");
        let builder = req.sort_by.add(builder, "sortBy");
        let builder = req.sort_order.add(builder, "sortOrder");
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn get_steering_policy(
        &self,
        req: model::GetSteeringPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::SteeringPolicy>> {
        let path = format!(
            "/steeringPolicies/{}",
            required("steeringPolicyId", req.steering_policy_id.as_deref())?
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = header::add(builder, IF_NONE_MATCH, req.if_none_match.as_deref())?;
        let builder = header::add(builder, IF_MODIFIED_SINCE, req.if_modified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn create_steering_policy(
        &self,
        req: model::CreateSteeringPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::SteeringPolicy>> {
        let body = req.body.ok_or_else(|| missing("createSteeringPolicyDetails"))?;
        let builder = self.inner.builder(Method::POST, "/steeringPolicies".to_string());
        let builder = header::add(builder, OPC_RETRY_TOKEN, Some(&token_or_generate(req.opc_retry_token.as_deref())))?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, Some(body), set_default_idempotency(options, true))
            .await
    }

    async fn update_steering_policy(
        &self,
        req: model::UpdateSteeringPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<model::SteeringPolicy>> {
        let path = format!(
            "/steeringPolicies/{}",
            required("steeringPolicyId", req.steering_policy_id.as_deref())?
        );
        let body = req.body.ok_or_else(|| missing("updateSteeringPolicyDetails"))?;
        let builder = self.inner.builder(Method::PUT, path);
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_UNMODIFIED_SINCE, req.if_unmodified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, Some(body), set_default_idempotency(options, true))
            .await
    }

    async fn delete_steering_policy(
        &self,
        req: model::DeleteSteeringPolicyRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = format!(
            "/steeringPolicies/{}",
            required("steeringPolicyId", req.steering_policy_id.as_deref())?
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_UNMODIFIED_SINCE, req.if_unmodified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_empty(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn list_steering_policy_attachments(
        &self,
        req: model::ListSteeringPolicyAttachmentsRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<model::SteeringPolicyAttachment>>> {
        require_known("lifecycleState", req.lifecycle_state.as_ref())?;
        require_known("sortBy", req.sort_by.as_ref())?;
        require_known("sortOrder", req.sort_order.as_ref())?;
        let compartment_id = query_parameter::required("compartmentId", req.compartment_id.as_deref())?;
        let builder = self
            .inner
            .builder(Method::GET, "/steeringPolicyAttachments".to_string())
            .query(&[("compartmentId", compartment_id)]);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.id.add(builder, "id");
        let builder = req.display_name.add(builder, "displayName");
        let builder = req.steering_policy_id.add(builder, "steeringPolicyId");
        let builder = req.zone_id.add(builder, "zoneId");
        let builder = req.domain.add(builder, "domain");
        let builder = req.domain_contains.add(builder, "domainContains");
        let builder = req.lifecycle_state.add(builder, "lifecycleState");
        let builder = req.sort_by.add(builder, "sortBy");
        let builder = req.sort_order.add(builder, "sortOrder");
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn get_steering_policy_attachment(
        &self,
        req: model::GetSteeringPolicyAttachmentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::SteeringPolicyAttachment>> {
        let path = format!(
            "/steeringPolicyAttachments/{}",
            required("steeringPolicyAttachmentId", req.steering_policy_attachment_id.as_deref())?
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = header::add(builder, IF_NONE_MATCH, req.if_none_match.as_deref())?;
        let builder = header::add(builder, IF_MODIFIED_SINCE, req.if_modified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn create_steering_policy_attachment(
        &self,
        req: model::CreateSteeringPolicyAttachmentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::SteeringPolicyAttachment>> {
        let body = req
            .body
            .ok_or_else(|| missing("createSteeringPolicyAttachmentDetails"))?;
        let builder = self
            .inner
            .builder(Method::POST, "/steeringPolicyAttachments".to_string());
        let builder = header::add(builder, OPC_RETRY_TOKEN, Some(&token_or_generate(req.opc_retry_token.as_deref())))?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, Some(body), set_default_idempotency(options, true))
            .await
    }

    async fn update_steering_policy_attachment(
        &self,
        req: model::UpdateSteeringPolicyAttachmentRequest,
        options: RequestOptions,
    ) -> Result<Response<model::SteeringPolicyAttachment>> {
        let path = format!(
            "/steeringPolicyAttachments/{}",
            required("steeringPolicyAttachmentId", req.steering_policy_attachment_id.as_deref())?
        );
        let body = req
            .body
            .ok_or_else(|| missing("updateSteeringPolicyAttachmentDetails"))?;
        let builder = self.inner.builder(Method::PUT, path);
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_UNMODIFIED_SINCE, req.if_unmodified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, Some(body), set_default_idempotency(options, true))
            .await
    }

    async fn delete_steering_policy_attachment(
        &self,
        req: model::DeleteSteeringPolicyAttachmentRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = format!(
            "/steeringPolicyAttachments/{}",
            required("steeringPolicyAttachmentId", req.steering_policy_attachment_id.as_deref())?
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_UNMODIFIED_SINCE, req.if_unmodified_since.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_empty(builder, None::<NoBody>, set_default_idempotency(options, true))
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

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
use auth::credentials::SigningStrategy;
use gax::options::RequestOptions;
use gax::options::internal::set_default_idempotency;
use gax::response::{OPC_REQUEST_ID, Response};
use gaxi::enums::require_known;
use gaxi::header_parameter::{self as header, IF_MATCH, IF_NONE_MATCH};
use gaxi::http::{NoBody, ReqwestClient};
use gaxi::path_parameter::{missing, required};
use gaxi::query_parameter::{self, QueryParameter};
use reqwest::Method;

const OPC_META_PREFIX: &str = "opc-meta-";

/// Implements [ObjectStorage](crate::stub::ObjectStorage) using a [ReqwestClient].
#[derive(Clone)]
pub struct ObjectStorage {
    inner: ReqwestClient,
}

impl std::fmt::Debug for ObjectStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("ObjectStorage")
            .field("inner", &self.inner)
            .finish()
    }
}

impl ObjectStorage {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, &crate::info::CLIENT_INFO).await?;
        Ok(Self { inner })
    }
}

fn bucket_path(namespace_name: Option<&str>, bucket_name: Option<&str>) -> Result<String> {
    Ok(format!(
        "/n/{}/b/{}",
        required("namespaceName", namespace_name)?,
        required("bucketName", bucket_name)?,
    ))
}

fn object_path(
    namespace_name: Option<&str>,
    bucket_name: Option<&str>,
    object_name: Option<&str>,
) -> Result<String> {
    Ok(format!(
        "{}/o/{}",
        bucket_path(namespace_name, bucket_name)?,
        required("objectName", object_name)?,
    ))
}

#[async_trait::async_trait]
impl crate::stub::ObjectStorage for ObjectStorage {
    async fn get_namespace(
        &self,
        req: model::GetNamespaceRequest,
        options: RequestOptions,
    ) -> Result<Response<String>> {
        let builder = self.inner.builder(Method::GET, "/n/".to_string());
        let builder = req.compartment_id.add(builder, "compartmentId");
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn list_buckets(
        &self,
        req: model::ListBucketsRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<model::BucketSummary>>> {
        let path = format!("/n/{}/b/", required("namespaceName", req.namespace_name.as_deref())?);
        let compartment_id = query_parameter::required("compartmentId", req.compartment_id.as_deref())?;
        let builder = self
            .inner
            .builder(Method::GET, path)
            .query(&[("compartmentId", compartment_id)]);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.fields.add(builder, "fields");
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn get_bucket(
        &self,
        req: model::GetBucketRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Bucket>> {
        let path = bucket_path(req.namespace_name.as_deref(), req.bucket_name.as_deref())?;
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.fields.add(builder, "fields");
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_NONE_MATCH, req.if_none_match.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn create_bucket(
        &self,
        req: model::CreateBucketRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Bucket>> {
        let path = format!("/n/{}/b/", required("namespaceName", req.namespace_name.as_deref())?);
        let body = req.body.ok_or_else(|| missing("createBucketDetails"))?;
        let builder = self.inner.builder(Method::POST, path);
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, Some(body), set_default_idempotency(options, false))
            .await
    }

    async fn update_bucket(
        &self,
        req: model::UpdateBucketRequest,
        options: RequestOptions,
    ) -> Result<Response<model::Bucket>> {
        let path = bucket_path(req.namespace_name.as_deref(), req.bucket_name.as_deref())?;
        let body = req.body.ok_or_else(|| missing("updateBucketDetails"))?;
        let builder = self.inner.builder(Method::POST, path);
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        let idempotent = req.if_match.is_some();
        self.inner
            .execute(builder, Some(body), set_default_idempotency(options, idempotent))
            .await
    }

    async fn delete_bucket(
        &self,
        req: model::DeleteBucketRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = bucket_path(req.namespace_name.as_deref(), req.bucket_name.as_deref())?;
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_empty(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn list_objects(
        &self,
        req: model::ListObjectsRequest,
        options: RequestOptions,
    ) -> Result<Response<model::ListObjects>> {
        let path = format!(
            "{}/o",
            bucket_path(req.namespace_name.as_deref(), req.bucket_name.as_deref())?
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.prefix.add(builder, "prefix");
        let builder = req.start.add(builder, "start");
        let builder = req.end.add(builder, "end");
        let builder = req.limit.add(builder, "limit");
        let builder = req.delimiter.add(builder, "delimiter");
        let builder = req.fields.add(builder, "fields");
        let builder = req.start_after.add(builder, "startAfter");
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn put_object(
        &self,
        req: model::PutObjectRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = object_path(
            req.namespace_name.as_deref(),
            req.bucket_name.as_deref(),
            req.object_name.as_deref(),
        )?;
        let body = req.body.ok_or_else(|| missing("putObjectBody"))?;
        require_known("storageTier", req.storage_tier.as_ref())?;
        let builder = self.inner.builder(Method::PUT, path);
        let builder = header::add(builder, "content-type", req.content_type.as_deref())?;
        let builder = header::add(builder, "content-md5", req.content_md5.as_deref())?;
        let builder = header::add(builder, "content-language", req.content_language.as_deref())?;
        let builder = header::add(builder, "content-encoding", req.content_encoding.as_deref())?;
        let builder = header::add(builder, "content-disposition", req.content_disposition.as_deref())?;
        let builder = header::add(builder, "cache-control", req.cache_control.as_deref())?;
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_NONE_MATCH, req.if_none_match.as_deref())?;
        let builder = header::add(
            builder,
            "storage-tier",
            req.storage_tier.as_ref().map(model::StorageTier::as_str),
        )?;
        let builder = header::add_prefixed(
            builder,
            "opcMeta",
            OPC_META_PREFIX,
            req.opc_meta.into_iter().flatten(),
        )?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        let response = self
            .inner
            .execute_raw(
                builder,
                Some(body),
                SigningStrategy::ExcludeBody,
                set_default_idempotency(options, true),
            )
            .await?;
        Ok(response.map(|_| ()))
    }

    async fn get_object(
        &self,
        req: model::GetObjectRequest,
        options: RequestOptions,
    ) -> Result<Response<bytes::Bytes>> {
        let path = object_path(
            req.namespace_name.as_deref(),
            req.bucket_name.as_deref(),
            req.object_name.as_deref(),
        )?;
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.version_id.add(builder, "versionId");
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_NONE_MATCH, req.if_none_match.as_deref())?;
        let builder = header::add(builder, "range", req.range.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_raw(
                builder,
                None,
                SigningStrategy::Standard,
                set_default_idempotency(options, true),
            )
            .await
    }

    async fn head_object(
        &self,
        req: model::HeadObjectRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = object_path(
            req.namespace_name.as_deref(),
            req.bucket_name.as_deref(),
            req.object_name.as_deref(),
        )?;
        let builder = self.inner.builder(Method::HEAD, path);
        let builder = req.version_id.add(builder, "versionId");
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, IF_NONE_MATCH, req.if_none_match.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        let response = self
            .inner
            .execute_raw(
                builder,
                None,
                SigningStrategy::Standard,
                set_default_idempotency(options, true),
            )
            .await?;
        Ok(response.map(|_| ()))
    }

    async fn delete_object(
        &self,
        req: model::DeleteObjectRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = object_path(
            req.namespace_name.as_deref(),
            req.bucket_name.as_deref(),
            req.object_name.as_deref(),
        )?;
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = req.version_id.add(builder, "versionId");
        let builder = header::add(builder, IF_MATCH, req.if_match.as_deref())?;
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_empty(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn create_preauthenticated_request(
        &self,
        req: model::CreatePreauthenticatedRequestRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PreauthenticatedRequest>> {
        let path = format!(
            "{}/p/",
            bucket_path(req.namespace_name.as_deref(), req.bucket_name.as_deref())?
        );
        let body = req
            .body
            .ok_or_else(|| missing("createPreauthenticatedRequestDetails"))?;
        let builder = self.inner.builder(Method::POST, path);
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, Some(body), set_default_idempotency(options, false))
            .await
    }

    async fn get_preauthenticated_request(
        &self,
        req: model::GetPreauthenticatedRequestRequest,
        options: RequestOptions,
    ) -> Result<Response<model::PreauthenticatedRequestSummary>> {
        let path = format!(
            "{}/p/{}",
            bucket_path(req.namespace_name.as_deref(), req.bucket_name.as_deref())?,
            required("parId", req.par_id.as_deref())?,
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn list_preauthenticated_requests(
        &self,
        req: model::ListPreauthenticatedRequestsRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<model::PreauthenticatedRequestSummary>>> {
        let path = format!(
            "{}/p/",
            bucket_path(req.namespace_name.as_deref(), req.bucket_name.as_deref())?
        );
        let builder = self.inner.builder(Method::GET, path);
        let builder = req.object_name_prefix.add(builder, "objectNamePrefix");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }

    async fn delete_preauthenticated_request(
        &self,
        req: model::DeletePreauthenticatedRequestRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = format!(
            "{}/p/{}",
            bucket_path(req.namespace_name.as_deref(), req.bucket_name.as_deref())?,
            required("parId", req.par_id.as_deref())?,
        );
        let builder = self.inner.builder(Method::DELETE, path);
        let builder = header::add(builder, OPC_REQUEST_ID, req.opc_request_id.as_deref())?;
        self.inner
            .execute_empty(builder, None::<NoBody>, set_default_idempotency(options, true))
            .await
    }
}

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
use gax::response::Response;

/// Defines the trait used to implement [crate::client::ObjectStorage].
///
/// Application developers may need to implement this trait to mock
/// `client::ObjectStorage`. In other cases, applications create and use a
/// `client::ObjectStorage` directly.
///
/// All the methods have default implementations that panic. Mocks only need
/// to implement the methods used by the code under test.
#[async_trait::async_trait]
pub trait ObjectStorage: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::ObjectStorage::get_namespace].
    async fn get_namespace(
        &self,
        _req: crate::model::GetNamespaceRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<String>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::list_buckets].
    async fn list_buckets(
        &self,
        _req: crate::model::ListBucketsRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<Vec<crate::model::BucketSummary>>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::get_bucket].
    async fn get_bucket(
        &self,
        _req: crate::model::GetBucketRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::Bucket>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::create_bucket].
    async fn create_bucket(
        &self,
        _req: crate::model::CreateBucketRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::Bucket>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::update_bucket].
    async fn update_bucket(
        &self,
        _req: crate::model::UpdateBucketRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::Bucket>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::delete_bucket].
    async fn delete_bucket(
        &self,
        _req: crate::model::DeleteBucketRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::list_objects].
    async fn list_objects(
        &self,
        _req: crate::model::ListObjectsRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::ListObjects>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::put_object].
    async fn put_object(
        &self,
        _req: crate::model::PutObjectRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::get_object].
    async fn get_object(
        &self,
        _req: crate::model::GetObjectRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<bytes::Bytes>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::head_object].
    async fn head_object(
        &self,
        _req: crate::model::HeadObjectRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::delete_object].
    async fn delete_object(
        &self,
        _req: crate::model::DeleteObjectRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::create_preauthenticated_request].
    async fn create_preauthenticated_request(
        &self,
        _req: crate::model::CreatePreauthenticatedRequestRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::PreauthenticatedRequest>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::get_preauthenticated_request].
    async fn get_preauthenticated_request(
        &self,
        _req: crate::model::GetPreauthenticatedRequestRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<crate::model::PreauthenticatedRequestSummary>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::list_preauthenticated_requests].
    async fn list_preauthenticated_requests(
        &self,
        _req: crate::model::ListPreauthenticatedRequestsRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<Vec<crate::model::PreauthenticatedRequestSummary>>> {
        gaxi::unimplemented::unimplemented_stub().await
    }

    /// Implements [crate::client::ObjectStorage::delete_preauthenticated_request].
    async fn delete_preauthenticated_request(
        &self,
        _req: crate::model::DeletePreauthenticatedRequestRequest,
        _options: RequestOptions,
    ) -> crate::Result<Response<()>> {
        gaxi::unimplemented::unimplemented_stub().await
    }
}

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

//! Contains the ObjectStorage client and related types.

/// Implements a client for the Object Storage API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use oci_objectstorage::client::ObjectStorage;
/// let client = ObjectStorage::builder().with_region("us-ashburn-1").build().await?;
/// let namespace = client.get_namespace().send().await?.into_body();
/// println!("{namespace}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `ObjectStorage` use the `with_*` methods in the type returned
/// by [builder()][ObjectStorage::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_region()]: the region hosting the resources. The client uses
///   the regional endpoint (`https://objectstorage.{region}.oraclecloud.com`).
/// * [with_endpoint()]: applications running in restricted networks may want
///   to override the regional endpoint.
/// * [with_credentials()]: by default this client uses the API signing key
///   from the `DEFAULT` profile in `~/.oci/config`. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `ObjectStorage` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `ObjectStorage` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// # Service Description
///
/// Object Storage stores unstructured data as objects in buckets. Buckets
/// live in a compartment, and their names are unique within the Object
/// Storage namespace of the tenancy. Objects are stored and returned as raw
/// bytes.
///
/// [with_region()]: super::builder::object_storage::ClientBuilder::with_region
/// [with_endpoint()]: super::builder::object_storage::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::object_storage::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct ObjectStorage {
    inner: std::sync::Arc<dyn super::stub::ObjectStorage>,
}

impl ObjectStorage {
    /// Returns a builder for [ObjectStorage].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use oci_objectstorage::client::ObjectStorage;
    /// let client = ObjectStorage::builder().with_region("us-phoenix-1").build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::object_storage::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::object_storage::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ObjectStorage + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::ObjectStorage::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Gets the Object Storage namespace of the tenancy.
    pub fn get_namespace(&self) -> super::builder::object_storage::GetNamespace {
        super::builder::object_storage::GetNamespace::new(self.inner.clone())
    }

    /// Lists the buckets in a compartment.
    pub fn list_buckets(&self) -> super::builder::object_storage::ListBuckets {
        super::builder::object_storage::ListBuckets::new(self.inner.clone())
    }

    /// Gets the metadata of a bucket.
    pub fn get_bucket(&self) -> super::builder::object_storage::GetBucket {
        super::builder::object_storage::GetBucket::new(self.inner.clone())
    }

    /// Creates a bucket.
    pub fn create_bucket(&self) -> super::builder::object_storage::CreateBucket {
        super::builder::object_storage::CreateBucket::new(self.inner.clone())
    }

    /// Updates a bucket. Only the fields set in the body change.
    pub fn update_bucket(&self) -> super::builder::object_storage::UpdateBucket {
        super::builder::object_storage::UpdateBucket::new(self.inner.clone())
    }

    /// Deletes a bucket.
    ///
    /// The bucket must be empty, the service rejects the request otherwise.
    pub fn delete_bucket(&self) -> super::builder::object_storage::DeleteBucket {
        super::builder::object_storage::DeleteBucket::new(self.inner.clone())
    }

    /// Lists the objects in a bucket.
    ///
    /// Use [by_page()][super::builder::object_storage::ListObjects::by_page]
    /// to iterate over all the pages.
    pub fn list_objects(&self) -> super::builder::object_storage::ListObjects {
        super::builder::object_storage::ListObjects::new(self.inner.clone())
    }

    /// Uploads an object, replacing any object with the same name.
    ///
    /// The object data is sent as-is. The request signature does not cover the
    /// body.
    pub fn put_object(&self) -> super::builder::object_storage::PutObject {
        super::builder::object_storage::PutObject::new(self.inner.clone())
    }

    /// Downloads an object.
    ///
    /// The body of the response is the object data, the metadata is in the
    /// response headers.
    pub fn get_object(&self) -> super::builder::object_storage::GetObject {
        super::builder::object_storage::GetObject::new(self.inner.clone())
    }

    /// Gets the metadata of an object, without its data.
    pub fn head_object(&self) -> super::builder::object_storage::HeadObject {
        super::builder::object_storage::HeadObject::new(self.inner.clone())
    }

    /// Deletes an object.
    pub fn delete_object(&self) -> super::builder::object_storage::DeleteObject {
        super::builder::object_storage::DeleteObject::new(self.inner.clone())
    }

    /// Creates a pre-authenticated request for a bucket or an object.
    pub fn create_preauthenticated_request(&self) -> super::builder::object_storage::CreatePreauthenticatedRequest {
        super::builder::object_storage::CreatePreauthenticatedRequest::new(self.inner.clone())
    }

    /// Gets a pre-authenticated request. The access URI is not included.
    pub fn get_preauthenticated_request(&self) -> super::builder::object_storage::GetPreauthenticatedRequest {
        super::builder::object_storage::GetPreauthenticatedRequest::new(self.inner.clone())
    }

    /// Lists the pre-authenticated requests of a bucket.
    pub fn list_preauthenticated_requests(&self) -> super::builder::object_storage::ListPreauthenticatedRequests {
        super::builder::object_storage::ListPreauthenticatedRequests::new(self.inner.clone())
    }

    /// Deletes a pre-authenticated request, revoking the access it grants.
    pub fn delete_preauthenticated_request(&self) -> super::builder::object_storage::DeletePreauthenticatedRequest {
        super::builder::object_storage::DeletePreauthenticatedRequest::new(self.inner.clone())
    }
}

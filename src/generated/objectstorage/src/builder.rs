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

pub mod object_storage {
    use crate::Result;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use std::sync::Arc;

    /// A builder for [ObjectStorage][crate::client::ObjectStorage].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_objectstorage::*;
    /// # use builder::object_storage::ClientBuilder;
    /// # use client::ObjectStorage;
    /// let builder : ClientBuilder = ObjectStorage::builder();
    /// let client = builder
    ///     .with_endpoint("https://objectstorage.us-ashburn-1.oraclecloud.com")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use crate::client::ObjectStorage;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ObjectStorage;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::ObjectStorage] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::ObjectStorage>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
            }
        }
    }

    /// The request builder for [ObjectStorage::get_namespace][crate::client::ObjectStorage::get_namespace] calls.
    #[derive(Clone, Debug)]
    pub struct GetNamespace(RequestBuilder<crate::model::GetNamespaceRequest>);

    impl GetNamespace {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetNamespaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<String>> {
            (*self.0.stub)
                .get_namespace(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [compartment_id][crate::model::GetNamespaceRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetNamespaceRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetNamespace {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::list_buckets][crate::client::ObjectStorage::list_buckets] calls.
    #[derive(Clone, Debug)]
    pub struct ListBuckets(RequestBuilder<crate::model::ListBucketsRequest>);

    impl ListBuckets {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListBucketsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<Vec<crate::model::BucketSummary>>> {
            (*self.0.stub)
                .list_buckets(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream starts at the current `page` value, and follows the
        /// `opc-next-page` header until the last page.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<Response<Vec<crate::model::BucketSummary>>, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Sets the value of [namespace_name][crate::model::ListBucketsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListBucketsRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListBucketsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListBucketsRequest::page].
        pub fn set_page<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [fields][crate::model::ListBucketsRequest::fields].
        pub fn set_fields<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.fields = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListBucketsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListBuckets {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::get_bucket][crate::client::ObjectStorage::get_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct GetBucket(RequestBuilder<crate::model::GetBucketRequest>);

    impl GetBucket {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetBucketRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::Bucket>> {
            (*self.0.stub)
                .get_bucket(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetBucketRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::GetBucketRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::GetBucketRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_none_match][crate::model::GetBucketRequest::if_none_match].
        pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets the value of [fields][crate::model::GetBucketRequest::fields].
        pub fn set_fields<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.fields = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetBucketRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetBucket {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::create_bucket][crate::client::ObjectStorage::create_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct CreateBucket(RequestBuilder<crate::model::CreateBucketRequest>);

    impl CreateBucket {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateBucketRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::Bucket>> {
            (*self.0.stub)
                .create_bucket(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateBucketRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [body][crate::model::CreateBucketRequest::body].
        pub fn set_body<T: Into<crate::model::CreateBucketDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateBucketRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateBucket {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::update_bucket][crate::client::ObjectStorage::update_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateBucket(RequestBuilder<crate::model::UpdateBucketRequest>);

    impl UpdateBucket {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateBucketRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::Bucket>> {
            (*self.0.stub)
                .update_bucket(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateBucketRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::UpdateBucketRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [body][crate::model::UpdateBucketRequest::body].
        pub fn set_body<T: Into<crate::model::UpdateBucketDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateBucketRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateBucketRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateBucket {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::delete_bucket][crate::client::ObjectStorage::delete_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteBucket(RequestBuilder<crate::model::DeleteBucketRequest>);

    impl DeleteBucket {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteBucketRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<()>> {
            (*self.0.stub)
                .delete_bucket(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteBucketRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::DeleteBucketRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteBucketRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteBucketRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteBucket {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::list_objects][crate::client::ObjectStorage::list_objects] calls.
    #[derive(Clone, Debug)]
    pub struct ListObjects(RequestBuilder<crate::model::ListObjectsRequest>);

    impl ListObjects {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListObjectsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ListObjects>> {
            (*self.0.stub)
                .list_objects(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream starts at the current `start` value. The token for
        /// each page is part of the previous page.
        pub fn by_page(self) -> gax::paginator::Paginator<crate::model::ListObjects, gax::error::Error> {
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Sets the value of [namespace_name][crate::model::ListObjectsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::ListObjectsRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [prefix][crate::model::ListObjectsRequest::prefix].
        pub fn set_prefix<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.prefix = Some(v.into());
            self
        }

        /// Sets the value of [start][crate::model::ListObjectsRequest::start].
        pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets the value of [end][crate::model::ListObjectsRequest::end].
        pub fn set_end<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.end = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListObjectsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [delimiter][crate::model::ListObjectsRequest::delimiter].
        pub fn set_delimiter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.delimiter = Some(v.into());
            self
        }

        /// Sets the value of [fields][crate::model::ListObjectsRequest::fields].
        pub fn set_fields<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.fields = Some(v.into());
            self
        }

        /// Sets the value of [start_after][crate::model::ListObjectsRequest::start_after].
        pub fn set_start_after<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start_after = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListObjectsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListObjects {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::put_object][crate::client::ObjectStorage::put_object] calls.
    #[derive(Clone, Debug)]
    pub struct PutObject(RequestBuilder<crate::model::PutObjectRequest>);

    impl PutObject {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PutObjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<()>> {
            (*self.0.stub)
                .put_object(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::PutObjectRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::PutObjectRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [object_name][crate::model::PutObjectRequest::object_name].
        pub fn set_object_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.object_name = Some(v.into());
            self
        }

        /// Sets the value of [body][crate::model::PutObjectRequest::body].
        pub fn set_body<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [content_type][crate::model::PutObjectRequest::content_type].
        pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.content_type = Some(v.into());
            self
        }

        /// Sets the value of [content_md5][crate::model::PutObjectRequest::content_md5].
        pub fn set_content_md5<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.content_md5 = Some(v.into());
            self
        }

        /// Sets the value of [content_language][crate::model::PutObjectRequest::content_language].
        pub fn set_content_language<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.content_language = Some(v.into());
            self
        }

        /// Sets the value of [content_encoding][crate::model::PutObjectRequest::content_encoding].
        pub fn set_content_encoding<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.content_encoding = Some(v.into());
            self
        }

        /// Sets the value of [content_disposition][crate::model::PutObjectRequest::content_disposition].
        pub fn set_content_disposition<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.content_disposition = Some(v.into());
            self
        }

        /// Sets the value of [cache_control][crate::model::PutObjectRequest::cache_control].
        pub fn set_cache_control<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cache_control = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::PutObjectRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_none_match][crate::model::PutObjectRequest::if_none_match].
        pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets the value of [storage_tier][crate::model::PutObjectRequest::storage_tier].
        pub fn set_storage_tier<T: Into<crate::model::StorageTier>>(mut self, v: T) -> Self {
            self.0.request.storage_tier = Some(v.into());
            self
        }

        /// Sets the value of [opc_meta][crate::model::PutObjectRequest::opc_meta].
        pub fn set_opc_meta<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request.opc_meta = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::PutObjectRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PutObject {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::get_object][crate::client::ObjectStorage::get_object] calls.
    #[derive(Clone, Debug)]
    pub struct GetObject(RequestBuilder<crate::model::GetObjectRequest>);

    impl GetObject {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetObjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<bytes::Bytes>> {
            (*self.0.stub)
                .get_object(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetObjectRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::GetObjectRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [object_name][crate::model::GetObjectRequest::object_name].
        pub fn set_object_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.object_name = Some(v.into());
            self
        }

        /// Sets the value of [version_id][crate::model::GetObjectRequest::version_id].
        pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.version_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::GetObjectRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_none_match][crate::model::GetObjectRequest::if_none_match].
        pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets the value of [range][crate::model::GetObjectRequest::range].
        pub fn set_range<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.range = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetObjectRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetObject {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::head_object][crate::client::ObjectStorage::head_object] calls.
    #[derive(Clone, Debug)]
    pub struct HeadObject(RequestBuilder<crate::model::HeadObjectRequest>);

    impl HeadObject {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::HeadObjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<()>> {
            (*self.0.stub)
                .head_object(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::HeadObjectRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::HeadObjectRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [object_name][crate::model::HeadObjectRequest::object_name].
        pub fn set_object_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.object_name = Some(v.into());
            self
        }

        /// Sets the value of [version_id][crate::model::HeadObjectRequest::version_id].
        pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.version_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::HeadObjectRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_none_match][crate::model::HeadObjectRequest::if_none_match].
        pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::HeadObjectRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for HeadObject {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::delete_object][crate::client::ObjectStorage::delete_object] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteObject(RequestBuilder<crate::model::DeleteObjectRequest>);

    impl DeleteObject {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteObjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<()>> {
            (*self.0.stub)
                .delete_object(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteObjectRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::DeleteObjectRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [object_name][crate::model::DeleteObjectRequest::object_name].
        pub fn set_object_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.object_name = Some(v.into());
            self
        }

        /// Sets the value of [version_id][crate::model::DeleteObjectRequest::version_id].
        pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.version_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteObjectRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteObjectRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteObject {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::create_preauthenticated_request][crate::client::ObjectStorage::create_preauthenticated_request] calls.
    #[derive(Clone, Debug)]
    pub struct CreatePreauthenticatedRequest(RequestBuilder<crate::model::CreatePreauthenticatedRequestRequest>);

    impl CreatePreauthenticatedRequest {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreatePreauthenticatedRequestRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::PreauthenticatedRequest>> {
            (*self.0.stub)
                .create_preauthenticated_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreatePreauthenticatedRequestRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::CreatePreauthenticatedRequestRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [body][crate::model::CreatePreauthenticatedRequestRequest::body].
        pub fn set_body<T: Into<crate::model::CreatePreauthenticatedRequestDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreatePreauthenticatedRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreatePreauthenticatedRequest {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::get_preauthenticated_request][crate::client::ObjectStorage::get_preauthenticated_request] calls.
    #[derive(Clone, Debug)]
    pub struct GetPreauthenticatedRequest(RequestBuilder<crate::model::GetPreauthenticatedRequestRequest>);

    impl GetPreauthenticatedRequest {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetPreauthenticatedRequestRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::PreauthenticatedRequestSummary>> {
            (*self.0.stub)
                .get_preauthenticated_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetPreauthenticatedRequestRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::GetPreauthenticatedRequestRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [par_id][crate::model::GetPreauthenticatedRequestRequest::par_id].
        pub fn set_par_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.par_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetPreauthenticatedRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetPreauthenticatedRequest {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::list_preauthenticated_requests][crate::client::ObjectStorage::list_preauthenticated_requests] calls.
    #[derive(Clone, Debug)]
    pub struct ListPreauthenticatedRequests(RequestBuilder<crate::model::ListPreauthenticatedRequestsRequest>);

    impl ListPreauthenticatedRequests {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListPreauthenticatedRequestsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<Vec<crate::model::PreauthenticatedRequestSummary>>> {
            (*self.0.stub)
                .list_preauthenticated_requests(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream starts at the current `page` value, and follows the
        /// `opc-next-page` header until the last page.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<Response<Vec<crate::model::PreauthenticatedRequestSummary>>, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Sets the value of [namespace_name][crate::model::ListPreauthenticatedRequestsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::ListPreauthenticatedRequestsRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [object_name_prefix][crate::model::ListPreauthenticatedRequestsRequest::object_name_prefix].
        pub fn set_object_name_prefix<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.object_name_prefix = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListPreauthenticatedRequestsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListPreauthenticatedRequestsRequest::page].
        pub fn set_page<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListPreauthenticatedRequestsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListPreauthenticatedRequests {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStorage::delete_preauthenticated_request][crate::client::ObjectStorage::delete_preauthenticated_request] calls.
    #[derive(Clone, Debug)]
    pub struct DeletePreauthenticatedRequest(RequestBuilder<crate::model::DeletePreauthenticatedRequestRequest>);

    impl DeletePreauthenticatedRequest {
        pub(crate) fn new(stub: Arc<dyn crate::stub::ObjectStorage>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeletePreauthenticatedRequestRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<()>> {
            (*self.0.stub)
                .delete_preauthenticated_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeletePreauthenticatedRequestRequest::namespace_name].
        pub fn set_namespace_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = Some(v.into());
            self
        }

        /// Sets the value of [bucket_name][crate::model::DeletePreauthenticatedRequestRequest::bucket_name].
        pub fn set_bucket_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        /// Sets the value of [par_id][crate::model::DeletePreauthenticatedRequestRequest::par_id].
        pub fn set_par_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.par_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeletePreauthenticatedRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeletePreauthenticatedRequest {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

}

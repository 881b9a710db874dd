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

pub mod load_balancer {
    use crate::Result;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use std::sync::Arc;

    /// A builder for [LoadBalancer][crate::client::LoadBalancer].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_loadbalancer::*;
    /// # use builder::load_balancer::ClientBuilder;
    /// # use client::LoadBalancer;
    /// let builder : ClientBuilder = LoadBalancer::builder();
    /// let client = builder
    ///     .with_endpoint("https://iaas.us-ashburn-1.oraclecloud.com/20170115")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use crate::client::LoadBalancer;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LoadBalancer;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::LoadBalancer] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::LoadBalancer>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::LoadBalancer>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
            }
        }

        // Composite operations poll with the request options, without a
        // retry loop. The polling error policy decides what happens on errors.
        fn polling(
            &self,
            waiter: waiter::Waiter,
        ) -> (Arc<dyn crate::stub::LoadBalancer>, RequestOptions, waiter::Waiter) {
            let waiter = waiter.or_policies(
                self.stub.get_polling_error_policy(&self.options),
                self.stub.get_polling_backoff_policy(&self.options),
            );
            let mut options = self.options.clone();
            options.set_retry_policy(gax::retry_policy::NeverRetry);
            (self.stub.clone(), options, waiter)
        }
    }

    /// The request builder for [LoadBalancer::list_load_balancers][crate::client::LoadBalancer::list_load_balancers] calls.
    #[derive(Clone, Debug)]
    pub struct ListLoadBalancers(RequestBuilder<crate::model::ListLoadBalancersRequest>);

    impl ListLoadBalancers {
        pub(crate) fn new(stub: Arc<dyn crate::stub::LoadBalancer>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLoadBalancersRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<Vec<crate::model::LoadBalancer>>> {
            (*self.0.stub)
                .list_load_balancers(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream starts at the current `page` value, and follows the
        /// `opc-next-page` header until the last page.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<Response<Vec<crate::model::LoadBalancer>>, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Sets the value of [compartment_id][crate::model::ListLoadBalancersRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLoadBalancersRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLoadBalancersRequest::page].
        pub fn set_page<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [detail][crate::model::ListLoadBalancersRequest::detail].
        pub fn set_detail<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.detail = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLoadBalancersRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::ListLoadBalancersSortBy>>(mut self, v: T) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLoadBalancersRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [display_name][crate::model::ListLoadBalancersRequest::display_name].
        pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.display_name = Some(v.into());
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListLoadBalancersRequest::lifecycle_state].
        pub fn set_lifecycle_state<T: Into<crate::model::LoadBalancerLifecycleState>>(mut self, v: T) -> Self {
            self.0.request.lifecycle_state = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLoadBalancersRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLoadBalancers {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LoadBalancer::get_load_balancer][crate::client::LoadBalancer::get_load_balancer] calls.
    #[derive(Clone, Debug)]
    pub struct GetLoadBalancer(RequestBuilder<crate::model::GetLoadBalancerRequest>);

    impl GetLoadBalancer {
        pub(crate) fn new(stub: Arc<dyn crate::stub::LoadBalancer>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLoadBalancerRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::LoadBalancer>> {
            (*self.0.stub)
                .get_load_balancer(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [load_balancer_id][crate::model::GetLoadBalancerRequest::load_balancer_id].
        pub fn set_load_balancer_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.load_balancer_id = Some(v.into());
            self
        }

        /// Sets the value of [if_none_match][crate::model::GetLoadBalancerRequest::if_none_match].
        pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLoadBalancerRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLoadBalancer {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LoadBalancer::create_load_balancer][crate::client::LoadBalancer::create_load_balancer] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLoadBalancer(RequestBuilder<crate::model::CreateLoadBalancerRequest>);

    impl CreateLoadBalancer {
        pub(crate) fn new(stub: Arc<dyn crate::stub::LoadBalancer>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLoadBalancerRequest>>(mut self, v: V) -> Self {
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
                .create_load_balancer(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [body][crate::model::CreateLoadBalancerRequest::body].
        pub fn set_body<T: Into<crate::model::CreateLoadBalancerDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateLoadBalancerRequest::opc_retry_token].
        pub fn set_opc_retry_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateLoadBalancerRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the work request reaches one of
        /// `targets`.
        ///
        /// The service creates the load balancer asynchronously, and returns the
        /// OCID of a work request in the `opc-work-request-id` header. The work
        /// request is polled until its lifecycle state is one of `targets`,
        /// typically `SUCCEEDED` and `FAILED`.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<()>, Response<crate::model::WorkRequest>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let accepted = self.send().await?;
            wait_for_work_request(stub, options, accepted, targets.into(), waiter).await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLoadBalancer {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LoadBalancer::update_load_balancer][crate::client::LoadBalancer::update_load_balancer] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLoadBalancer(RequestBuilder<crate::model::UpdateLoadBalancerRequest>);

    impl UpdateLoadBalancer {
        pub(crate) fn new(stub: Arc<dyn crate::stub::LoadBalancer>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLoadBalancerRequest>>(mut self, v: V) -> Self {
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
                .update_load_balancer(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [load_balancer_id][crate::model::UpdateLoadBalancerRequest::load_balancer_id].
        pub fn set_load_balancer_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.load_balancer_id = Some(v.into());
            self
        }

        /// Sets the value of [body][crate::model::UpdateLoadBalancerRequest::body].
        pub fn set_body<T: Into<crate::model::UpdateLoadBalancerDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLoadBalancerRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::UpdateLoadBalancerRequest::opc_retry_token].
        pub fn set_opc_retry_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLoadBalancerRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the work request reaches one of
        /// `targets`.
        ///
        /// The service updates the load balancer asynchronously, and returns the
        /// OCID of a work request in the `opc-work-request-id` header. The work
        /// request is polled until its lifecycle state is one of `targets`,
        /// typically `SUCCEEDED` and `FAILED`.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<()>, Response<crate::model::WorkRequest>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let accepted = self.send().await?;
            wait_for_work_request(stub, options, accepted, targets.into(), waiter).await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLoadBalancer {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LoadBalancer::delete_load_balancer][crate::client::LoadBalancer::delete_load_balancer] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLoadBalancer(RequestBuilder<crate::model::DeleteLoadBalancerRequest>);

    impl DeleteLoadBalancer {
        pub(crate) fn new(stub: Arc<dyn crate::stub::LoadBalancer>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLoadBalancerRequest>>(mut self, v: V) -> Self {
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
                .delete_load_balancer(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [load_balancer_id][crate::model::DeleteLoadBalancerRequest::load_balancer_id].
        pub fn set_load_balancer_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.load_balancer_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLoadBalancerRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLoadBalancerRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the work request reaches one of
        /// `targets`.
        ///
        /// The service deletes the load balancer asynchronously, and returns the
        /// OCID of a work request in the `opc-work-request-id` header. The work
        /// request is polled until its lifecycle state is one of `targets`,
        /// typically `SUCCEEDED` and `FAILED`.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<()>, Response<crate::model::WorkRequest>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let accepted = self.send().await?;
            wait_for_work_request(stub, options, accepted, targets.into(), waiter).await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLoadBalancer {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LoadBalancer::get_work_request][crate::client::LoadBalancer::get_work_request] calls.
    #[derive(Clone, Debug)]
    pub struct GetWorkRequest(RequestBuilder<crate::model::GetWorkRequestRequest>);

    impl GetWorkRequest {
        pub(crate) fn new(stub: Arc<dyn crate::stub::LoadBalancer>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetWorkRequestRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::WorkRequest>> {
            (*self.0.stub)
                .get_work_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [work_request_id][crate::model::GetWorkRequestRequest::work_request_id].
        pub fn set_work_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetWorkRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetWorkRequest {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LoadBalancer::list_work_requests][crate::client::LoadBalancer::list_work_requests] calls.
    #[derive(Clone, Debug)]
    pub struct ListWorkRequests(RequestBuilder<crate::model::ListWorkRequestsRequest>);

    impl ListWorkRequests {
        pub(crate) fn new(stub: Arc<dyn crate::stub::LoadBalancer>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListWorkRequestsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<Vec<crate::model::WorkRequest>>> {
            (*self.0.stub)
                .list_work_requests(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream starts at the current `page` value, and follows the
        /// `opc-next-page` header until the last page.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<Response<Vec<crate::model::WorkRequest>>, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Sets the value of [load_balancer_id][crate::model::ListWorkRequestsRequest::load_balancer_id].
        pub fn set_load_balancer_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.load_balancer_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListWorkRequestsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListWorkRequestsRequest::page].
        pub fn set_page<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListWorkRequestsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListWorkRequests {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    // Polls the work request named in the `opc-work-request-id` header of a
    // mutating call.
    async fn wait_for_work_request(
        stub: Arc<dyn crate::stub::LoadBalancer>,
        options: RequestOptions,
        accepted: Response<()>,
        targets: waiter::TargetStates,
        waiter: waiter::Waiter,
    ) -> waiter::OperationResult<Response<()>, Response<crate::model::WorkRequest>> {
        if targets.is_empty() {
            return Ok(waiter::Completed::new(accepted, waiter::WaitOutcome::Skipped));
        }
        let Some(id) = accepted.opc_work_request_id().map(str::to_string) else {
            let error = gax::error::Error::deser(format!(
                "the response has no {} header",
                gax::response::OPC_WORK_REQUEST_ID
            ));
            return Err(waiter::CompositeError::new(accepted, error).into());
        };
        tracing::debug!("waiting for work request {id} to reach one of {targets}");
        let mut request = crate::model::GetWorkRequestRequest::default();
        request.work_request_id = Some(id);
        let fetch = async || stub.get_work_request(request.clone(), options.clone()).await;
        Ok(waiter::wait_until(accepted, &targets, &waiter, fetch).await?)
    }
}

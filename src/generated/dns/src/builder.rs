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

pub mod dns {
    use crate::Result;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use std::sync::Arc;

    /// A builder for [Dns][crate::client::Dns].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use oci_dns::*;
    /// # use builder::dns::ClientBuilder;
    /// # use client::Dns;
    /// let builder : ClientBuilder = Dns::builder();
    /// let client = builder
    ///     .with_endpoint("https://dns.us-ashburn-1.oraclecloud.com")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use crate::client::Dns;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Dns;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Dns] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::Dns>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
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
        ) -> (Arc<dyn crate::stub::Dns>, RequestOptions, waiter::Waiter) {
            let waiter = waiter.or_policies(
                self.stub.get_polling_error_policy(&self.options),
                self.stub.get_polling_backoff_policy(&self.options),
            );
            let mut options = self.options.clone();
            options.set_retry_policy(gax::retry_policy::NeverRetry);
            (self.stub.clone(), options, waiter)
        }
    }

    /// The request builder for [Dns::list_zones][crate::client::Dns::list_zones] calls.
    #[derive(Clone, Debug)]
    pub struct ListZones(RequestBuilder<crate::model::ListZonesRequest>);

    impl ListZones {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListZonesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<Vec<crate::model::Zone>>> {
            (*self.0.stub)
                .list_zones(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream starts at the current `page` value, and follows the
        /// `opc-next-page` header until the last page.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<Response<Vec<crate::model::Zone>>, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Sets the value of [compartment_id][crate::model::ListZonesRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListZonesRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListZonesRequest::page].
        pub fn set_page<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [name][crate::model::ListZonesRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets the value of [name_contains][crate::model::ListZonesRequest::name_contains].
        pub fn set_name_contains<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name_contains = Some(v.into());
            self
        }

        /// Sets the value of [zone_type][crate::model::ListZonesRequest::zone_type].
        pub fn set_zone_type<T: Into<crate::model::ZoneType>>(mut self, v: T) -> Self {
            self.0.request.zone_type = Some(v.into());
            self
        }

        /// Sets the value of [scope][crate::model::ListZonesRequest::scope].
        pub fn set_scope<T: Into<crate::model::Scope>>(mut self, v: T) -> Self {
            self.0.request.scope = Some(v.into());
            self
        }

        /// Sets the value of [view_id][crate::model::ListZonesRequest::view_id].
        pub fn set_view_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.view_id = Some(v.into());
            self
        }

        /// Sets the value of [time_created_greater_than_or_equal_to][crate::model::ListZonesRequest::time_created_greater_than_or_equal_to].
        pub fn set_time_created_greater_than_or_equal_to<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.time_created_greater_than_or_equal_to = Some(v.into());
            self
        }

        /// Sets the value of [time_created_less_than][crate::model::ListZonesRequest::time_created_less_than].
        pub fn set_time_created_less_than<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.time_created_less_than = Some(v.into());
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListZonesRequest::lifecycle_state].
        pub fn set_lifecycle_state<T: Into<crate::model::ZoneLifecycleState>>(mut self, v: T) -> Self {
            self.0.request.lifecycle_state = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListZonesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::ListZonesSortBy>>(mut self, v: T) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListZonesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListZonesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListZones {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::get_zone][crate::client::Dns::get_zone] calls.
    #[derive(Clone, Debug)]
    pub struct GetZone(RequestBuilder<crate::model::GetZoneRequest>);

    impl GetZone {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetZoneRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::Zone>> {
            (*self.0.stub)
                .get_zone(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_name_or_id][crate::model::GetZoneRequest::zone_name_or_id].
        pub fn set_zone_name_or_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_name_or_id = Some(v.into());
            self
        }

        /// Sets the value of [if_none_match][crate::model::GetZoneRequest::if_none_match].
        pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets the value of [if_modified_since][crate::model::GetZoneRequest::if_modified_since].
        pub fn set_if_modified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_modified_since = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetZoneRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [scope][crate::model::GetZoneRequest::scope].
        pub fn set_scope<T: Into<crate::model::Scope>>(mut self, v: T) -> Self {
            self.0.request.scope = Some(v.into());
            self
        }

        /// Sets the value of [view_id][crate::model::GetZoneRequest::view_id].
        pub fn set_view_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.view_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetZoneRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetZone {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::create_zone][crate::client::Dns::create_zone] calls.
    #[derive(Clone, Debug)]
    pub struct CreateZone(RequestBuilder<crate::model::CreateZoneRequest>);

    impl CreateZone {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateZoneRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::Zone>> {
            (*self.0.stub)
                .create_zone(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [body][crate::model::CreateZoneRequest::body].
        pub fn set_body<T: Into<crate::model::CreateZoneDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::CreateZoneRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [scope][crate::model::CreateZoneRequest::scope].
        pub fn set_scope<T: Into<crate::model::Scope>>(mut self, v: T) -> Self {
            self.0.request.scope = Some(v.into());
            self
        }

        /// Sets the value of [view_id][crate::model::CreateZoneRequest::view_id].
        pub fn set_view_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.view_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateZoneRequest::opc_retry_token].
        pub fn set_opc_retry_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateZoneRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the zone reaches one of `targets`.
        ///
        /// The result contains the response to the create request, and the
        /// last snapshot of the zone. On errors after the zone is created
        /// the error still carries the create response.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<crate::model::Zone>, Response<crate::model::Zone>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let mut request = crate::model::GetZoneRequest::default();
            request.compartment_id = self.0.request.compartment_id.clone();
            request.scope = self.0.request.scope.clone();
            request.view_id = self.0.request.view_id.clone();
            let created = self.send().await?;
            request.zone_name_or_id = created.body().id.clone();
            let targets = targets.into();
            tracing::debug!("waiting for zone {} to reach one of {targets}", created.body().id.as_deref().unwrap_or_default());
            let fetch = async || stub.get_zone(request.clone(), options.clone()).await;
            Ok(waiter::wait_until(created, &targets, &waiter, fetch).await?)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateZone {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::update_zone][crate::client::Dns::update_zone] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateZone(RequestBuilder<crate::model::UpdateZoneRequest>);

    impl UpdateZone {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateZoneRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::Zone>> {
            (*self.0.stub)
                .update_zone(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_name_or_id][crate::model::UpdateZoneRequest::zone_name_or_id].
        pub fn set_zone_name_or_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_name_or_id = Some(v.into());
            self
        }

        /// Sets the value of [body][crate::model::UpdateZoneRequest::body].
        pub fn set_body<T: Into<crate::model::UpdateZoneDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateZoneRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_unmodified_since][crate::model::UpdateZoneRequest::if_unmodified_since].
        pub fn set_if_unmodified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_unmodified_since = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::UpdateZoneRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [scope][crate::model::UpdateZoneRequest::scope].
        pub fn set_scope<T: Into<crate::model::Scope>>(mut self, v: T) -> Self {
            self.0.request.scope = Some(v.into());
            self
        }

        /// Sets the value of [view_id][crate::model::UpdateZoneRequest::view_id].
        pub fn set_view_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.view_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateZoneRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the zone reaches one of `targets`.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<crate::model::Zone>, Response<crate::model::Zone>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let mut request = crate::model::GetZoneRequest::default();
            request.zone_name_or_id = self.0.request.zone_name_or_id.clone();
            request.compartment_id = self.0.request.compartment_id.clone();
            request.scope = self.0.request.scope.clone();
            request.view_id = self.0.request.view_id.clone();
            let updated = self.send().await?;
            if let Some(id) = updated.body().id.clone() {
                request.zone_name_or_id = Some(id);
            }
            let fetch = async || stub.get_zone(request.clone(), options.clone()).await;
            Ok(waiter::wait_until(updated, &targets.into(), &waiter, fetch).await?)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateZone {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::delete_zone][crate::client::Dns::delete_zone] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteZone(RequestBuilder<crate::model::DeleteZoneRequest>);

    impl DeleteZone {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteZoneRequest>>(mut self, v: V) -> Self {
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
                .delete_zone(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_name_or_id][crate::model::DeleteZoneRequest::zone_name_or_id].
        pub fn set_zone_name_or_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_name_or_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteZoneRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_unmodified_since][crate::model::DeleteZoneRequest::if_unmodified_since].
        pub fn set_if_unmodified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_unmodified_since = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::DeleteZoneRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [scope][crate::model::DeleteZoneRequest::scope].
        pub fn set_scope<T: Into<crate::model::Scope>>(mut self, v: T) -> Self {
            self.0.request.scope = Some(v.into());
            self
        }

        /// Sets the value of [view_id][crate::model::DeleteZoneRequest::view_id].
        pub fn set_view_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.view_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteZoneRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the zone reaches one of `targets`.
        ///
        /// The zone is fetched before sending the delete request, and then
        /// polled using its OCID. The wait completes with
        /// [WaitOutcome::Gone][waiter::WaitOutcome::Gone] if the zone is
        /// no longer found.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<()>, Response<crate::model::Zone>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let waiter = waiter.with_succeed_on_not_found(true);
            let mut request = crate::model::GetZoneRequest::default();
            request.zone_name_or_id = self.0.request.zone_name_or_id.clone();
            request.compartment_id = self.0.request.compartment_id.clone();
            request.scope = self.0.request.scope.clone();
            request.view_id = self.0.request.view_id.clone();
            let snapshot = stub.get_zone(request.clone(), options.clone()).await?;
            if let Some(id) = snapshot.body().id.clone() {
                request.zone_name_or_id = Some(id);
            }
            let deleted = self.send().await?;
            let fetch = async || stub.get_zone(request.clone(), options.clone()).await;
            Ok(waiter::wait_until(deleted, &targets.into(), &waiter, fetch).await?)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteZone {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::get_rr_set][crate::client::Dns::get_rr_set] calls.
    #[derive(Clone, Debug)]
    pub struct GetRrSet(RequestBuilder<crate::model::GetRRSetRequest>);

    impl GetRrSet {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetRRSetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::RRSet>> {
            (*self.0.stub)
                .get_rr_set(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream starts at the current `page` value, and follows the
        /// `opc-next-page` header until the last page.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<Response<crate::model::RRSet>, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Sets the value of [zone_name_or_id][crate::model::GetRRSetRequest::zone_name_or_id].
        pub fn set_zone_name_or_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_name_or_id = Some(v.into());
            self
        }

        /// Sets the value of [domain][crate::model::GetRRSetRequest::domain].
        pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.domain = Some(v.into());
            self
        }

        /// Sets the value of [rtype][crate::model::GetRRSetRequest::rtype].
        pub fn set_rtype<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.rtype = Some(v.into());
            self
        }

        /// Sets the value of [if_none_match][crate::model::GetRRSetRequest::if_none_match].
        pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets the value of [if_modified_since][crate::model::GetRRSetRequest::if_modified_since].
        pub fn set_if_modified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_modified_since = Some(v.into());
            self
        }

        /// Sets the value of [zone_version][crate::model::GetRRSetRequest::zone_version].
        pub fn set_zone_version<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_version = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::GetRRSetRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::GetRRSetRequest::page].
        pub fn set_page<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetRRSetRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [scope][crate::model::GetRRSetRequest::scope].
        pub fn set_scope<T: Into<crate::model::Scope>>(mut self, v: T) -> Self {
            self.0.request.scope = Some(v.into());
            self
        }

        /// Sets the value of [view_id][crate::model::GetRRSetRequest::view_id].
        pub fn set_view_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.view_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetRRSetRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetRrSet {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::update_rr_set][crate::client::Dns::update_rr_set] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateRrSet(RequestBuilder<crate::model::UpdateRRSetRequest>);

    impl UpdateRrSet {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateRRSetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::RRSet>> {
            (*self.0.stub)
                .update_rr_set(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_name_or_id][crate::model::UpdateRRSetRequest::zone_name_or_id].
        pub fn set_zone_name_or_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_name_or_id = Some(v.into());
            self
        }

        /// Sets the value of [domain][crate::model::UpdateRRSetRequest::domain].
        pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.domain = Some(v.into());
            self
        }

        /// Sets the value of [rtype][crate::model::UpdateRRSetRequest::rtype].
        pub fn set_rtype<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.rtype = Some(v.into());
            self
        }

        /// Sets the value of [body][crate::model::UpdateRRSetRequest::body].
        pub fn set_body<T: Into<crate::model::UpdateRRSetDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateRRSetRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_unmodified_since][crate::model::UpdateRRSetRequest::if_unmodified_since].
        pub fn set_if_unmodified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_unmodified_since = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::UpdateRRSetRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [scope][crate::model::UpdateRRSetRequest::scope].
        pub fn set_scope<T: Into<crate::model::Scope>>(mut self, v: T) -> Self {
            self.0.request.scope = Some(v.into());
            self
        }

        /// Sets the value of [view_id][crate::model::UpdateRRSetRequest::view_id].
        pub fn set_view_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.view_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateRRSetRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateRrSet {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::delete_rr_set][crate::client::Dns::delete_rr_set] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteRrSet(RequestBuilder<crate::model::DeleteRRSetRequest>);

    impl DeleteRrSet {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteRRSetRequest>>(mut self, v: V) -> Self {
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
                .delete_rr_set(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [zone_name_or_id][crate::model::DeleteRRSetRequest::zone_name_or_id].
        pub fn set_zone_name_or_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_name_or_id = Some(v.into());
            self
        }

        /// Sets the value of [domain][crate::model::DeleteRRSetRequest::domain].
        pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.domain = Some(v.into());
            self
        }

        /// Sets the value of [rtype][crate::model::DeleteRRSetRequest::rtype].
        pub fn set_rtype<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.rtype = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteRRSetRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_unmodified_since][crate::model::DeleteRRSetRequest::if_unmodified_since].
        pub fn set_if_unmodified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_unmodified_since = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::DeleteRRSetRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [scope][crate::model::DeleteRRSetRequest::scope].
        pub fn set_scope<T: Into<crate::model::Scope>>(mut self, v: T) -> Self {
            self.0.request.scope = Some(v.into());
            self
        }

        /// Sets the value of [view_id][crate::model::DeleteRRSetRequest::view_id].
        pub fn set_view_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.view_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteRRSetRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteRrSet {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::list_steering_policies][crate::client::Dns::list_steering_policies] calls.
    #[derive(Clone, Debug)]
    pub struct ListSteeringPolicies(RequestBuilder<crate::model::ListSteeringPoliciesRequest>);

    impl ListSteeringPolicies {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSteeringPoliciesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<Vec<crate::model::SteeringPolicy>>> {
            (*self.0.stub)
                .list_steering_policies(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream starts at the current `page` value, and follows the
        /// `opc-next-page` header until the last page.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<Response<Vec<crate::model::SteeringPolicy>>, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Sets the value of [compartment_id][crate::model::ListSteeringPoliciesRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSteeringPoliciesRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSteeringPoliciesRequest::page].
        pub fn set_page<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [id][crate::model::ListSteeringPoliciesRequest::id].
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets the value of [display_name][crate::model::ListSteeringPoliciesRequest::display_name].
        pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.display_name = Some(v.into());
            self
        }

        /// Sets the value of [display_name_contains][crate::model::ListSteeringPoliciesRequest::display_name_contains].
        pub fn set_display_name_contains<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.display_name_contains = Some(v.into());
            self
        }

        /// Sets the value of [health_check_monitor_id][crate::model::ListSteeringPoliciesRequest::health_check_monitor_id].
        pub fn set_health_check_monitor_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.health_check_monitor_id = Some(v.into());
            self
        }

        /// Sets the value of [template][crate::model::ListSteeringPoliciesRequest::template].
        pub fn set_template<T: Into<crate::model::SteeringPolicyTemplate>>(mut self, v: T) -> Self {
            self.0.request.template = Some(v.into());
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListSteeringPoliciesRequest::lifecycle_state].
        pub fn set_lifecycle_state<T: Into<crate::model::SteeringPolicyLifecycleState>>(mut self, v: T) -> Self {
            self.0.request.lifecycle_state = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSteeringPoliciesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::ListSteeringPoliciesSortBy>>(mut self, v: T) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSteeringPoliciesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSteeringPoliciesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSteeringPolicies {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::get_steering_policy][crate::client::Dns::get_steering_policy] calls.
    #[derive(Clone, Debug)]
    pub struct GetSteeringPolicy(RequestBuilder<crate::model::GetSteeringPolicyRequest>);

    impl GetSteeringPolicy {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSteeringPolicyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::SteeringPolicy>> {
            (*self.0.stub)
                .get_steering_policy(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [steering_policy_id][crate::model::GetSteeringPolicyRequest::steering_policy_id].
        pub fn set_steering_policy_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.steering_policy_id = Some(v.into());
            self
        }

        /// Sets the value of [if_none_match][crate::model::GetSteeringPolicyRequest::if_none_match].
        pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets the value of [if_modified_since][crate::model::GetSteeringPolicyRequest::if_modified_since].
        pub fn set_if_modified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_modified_since = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetSteeringPolicyRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSteeringPolicy {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::create_steering_policy][crate::client::Dns::create_steering_policy] calls.
    #[derive(Clone, Debug)]
    pub struct CreateSteeringPolicy(RequestBuilder<crate::model::CreateSteeringPolicyRequest>);

    impl CreateSteeringPolicy {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateSteeringPolicyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::SteeringPolicy>> {
            (*self.0.stub)
                .create_steering_policy(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [body][crate::model::CreateSteeringPolicyRequest::body].
        pub fn set_body<T: Into<crate::model::CreateSteeringPolicyDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateSteeringPolicyRequest::opc_retry_token].
        pub fn set_opc_retry_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateSteeringPolicyRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the steering policy reaches one of `targets`.
        ///
        /// The result contains the response to the create request, and the
        /// last snapshot of the steering policy. On errors after the steering policy is created
        /// the error still carries the create response.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<crate::model::SteeringPolicy>, Response<crate::model::SteeringPolicy>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let mut request = crate::model::GetSteeringPolicyRequest::default();
            let created = self.send().await?;
            request.steering_policy_id = created.body().id.clone();
            let targets = targets.into();
            tracing::debug!("waiting for steering policy {} to reach one of {targets}", created.body().id.as_deref().unwrap_or_default());
            let fetch = async || stub.get_steering_policy(request.clone(), options.clone()).await;
            Ok(waiter::wait_until(created, &targets, &waiter, fetch).await?)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateSteeringPolicy {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::update_steering_policy][crate::client::Dns::update_steering_policy] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateSteeringPolicy(RequestBuilder<crate::model::UpdateSteeringPolicyRequest>);

    impl UpdateSteeringPolicy {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateSteeringPolicyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::SteeringPolicy>> {
            (*self.0.stub)
                .update_steering_policy(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [steering_policy_id][crate::model::UpdateSteeringPolicyRequest::steering_policy_id].
        pub fn set_steering_policy_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.steering_policy_id = Some(v.into());
            self
        }

        /// Sets the value of [body][crate::model::UpdateSteeringPolicyRequest::body].
        pub fn set_body<T: Into<crate::model::UpdateSteeringPolicyDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateSteeringPolicyRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_unmodified_since][crate::model::UpdateSteeringPolicyRequest::if_unmodified_since].
        pub fn set_if_unmodified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_unmodified_since = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateSteeringPolicyRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the steering policy reaches one of `targets`.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<crate::model::SteeringPolicy>, Response<crate::model::SteeringPolicy>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let mut request = crate::model::GetSteeringPolicyRequest::default();
            request.steering_policy_id = self.0.request.steering_policy_id.clone();
            let updated = self.send().await?;
            if let Some(id) = updated.body().id.clone() {
                request.steering_policy_id = Some(id);
            }
            let fetch = async || stub.get_steering_policy(request.clone(), options.clone()).await;
            Ok(waiter::wait_until(updated, &targets.into(), &waiter, fetch).await?)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateSteeringPolicy {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::delete_steering_policy][crate::client::Dns::delete_steering_policy] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteSteeringPolicy(RequestBuilder<crate::model::DeleteSteeringPolicyRequest>);

    impl DeleteSteeringPolicy {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteSteeringPolicyRequest>>(mut self, v: V) -> Self {
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
                .delete_steering_policy(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [steering_policy_id][crate::model::DeleteSteeringPolicyRequest::steering_policy_id].
        pub fn set_steering_policy_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.steering_policy_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteSteeringPolicyRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_unmodified_since][crate::model::DeleteSteeringPolicyRequest::if_unmodified_since].
        pub fn set_if_unmodified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_unmodified_since = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteSteeringPolicyRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the steering policy reaches one of `targets`.
        ///
        /// The steering policy is fetched before sending the delete request, and then
        /// polled using its OCID. The wait completes with
        /// [WaitOutcome::Gone][waiter::WaitOutcome::Gone] if the steering policy is
        /// no longer found.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<()>, Response<crate::model::SteeringPolicy>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let waiter = waiter.with_succeed_on_not_found(true);
            let mut request = crate::model::GetSteeringPolicyRequest::default();
            request.steering_policy_id = self.0.request.steering_policy_id.clone();
            let snapshot = stub.get_steering_policy(request.clone(), options.clone()).await?;
            if let Some(id) = snapshot.body().id.clone() {
                request.steering_policy_id = Some(id);
            }
            let deleted = self.send().await?;
            let fetch = async || stub.get_steering_policy(request.clone(), options.clone()).await;
            Ok(waiter::wait_until(deleted, &targets.into(), &waiter, fetch).await?)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteSteeringPolicy {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::list_steering_policy_attachments][crate::client::Dns::list_steering_policy_attachments] calls.
    #[derive(Clone, Debug)]
    pub struct ListSteeringPolicyAttachments(RequestBuilder<crate::model::ListSteeringPolicyAttachmentsRequest>);

    impl ListSteeringPolicyAttachments {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSteeringPolicyAttachmentsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<Vec<crate::model::SteeringPolicyAttachment>>> {
            (*self.0.stub)
                .list_steering_policy_attachments(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// The stream starts at the current `page` value, and follows the
        /// `opc-next-page` header until the last page.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<Response<Vec<crate::model::SteeringPolicyAttachment>>, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Sets the value of [compartment_id][crate::model::ListSteeringPolicyAttachmentsRequest::compartment_id].
        pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSteeringPolicyAttachmentsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSteeringPolicyAttachmentsRequest::page].
        pub fn set_page<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [id][crate::model::ListSteeringPolicyAttachmentsRequest::id].
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.id = Some(v.into());
            self
        }

        /// Sets the value of [display_name][crate::model::ListSteeringPolicyAttachmentsRequest::display_name].
        pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.display_name = Some(v.into());
            self
        }

        /// Sets the value of [steering_policy_id][crate::model::ListSteeringPolicyAttachmentsRequest::steering_policy_id].
        pub fn set_steering_policy_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.steering_policy_id = Some(v.into());
            self
        }

        /// Sets the value of [zone_id][crate::model::ListSteeringPolicyAttachmentsRequest::zone_id].
        pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.zone_id = Some(v.into());
            self
        }

        /// Sets the value of [domain][crate::model::ListSteeringPolicyAttachmentsRequest::domain].
        pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.domain = Some(v.into());
            self
        }

        /// Sets the value of [domain_contains][crate::model::ListSteeringPolicyAttachmentsRequest::domain_contains].
        pub fn set_domain_contains<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.domain_contains = Some(v.into());
            self
        }

        /// Sets the value of [lifecycle_state][crate::model::ListSteeringPolicyAttachmentsRequest::lifecycle_state].
        pub fn set_lifecycle_state<T: Into<crate::model::SteeringPolicyAttachmentLifecycleState>>(mut self, v: T) -> Self {
            self.0.request.lifecycle_state = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSteeringPolicyAttachmentsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::ListSteeringPolicyAttachmentsSortBy>>(mut self, v: T) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSteeringPolicyAttachmentsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSteeringPolicyAttachmentsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSteeringPolicyAttachments {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::get_steering_policy_attachment][crate::client::Dns::get_steering_policy_attachment] calls.
    #[derive(Clone, Debug)]
    pub struct GetSteeringPolicyAttachment(RequestBuilder<crate::model::GetSteeringPolicyAttachmentRequest>);

    impl GetSteeringPolicyAttachment {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSteeringPolicyAttachmentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::SteeringPolicyAttachment>> {
            (*self.0.stub)
                .get_steering_policy_attachment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [steering_policy_attachment_id][crate::model::GetSteeringPolicyAttachmentRequest::steering_policy_attachment_id].
        pub fn set_steering_policy_attachment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.steering_policy_attachment_id = Some(v.into());
            self
        }

        /// Sets the value of [if_none_match][crate::model::GetSteeringPolicyAttachmentRequest::if_none_match].
        pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets the value of [if_modified_since][crate::model::GetSteeringPolicyAttachmentRequest::if_modified_since].
        pub fn set_if_modified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_modified_since = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetSteeringPolicyAttachmentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSteeringPolicyAttachment {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::create_steering_policy_attachment][crate::client::Dns::create_steering_policy_attachment] calls.
    #[derive(Clone, Debug)]
    pub struct CreateSteeringPolicyAttachment(RequestBuilder<crate::model::CreateSteeringPolicyAttachmentRequest>);

    impl CreateSteeringPolicyAttachment {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateSteeringPolicyAttachmentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::SteeringPolicyAttachment>> {
            (*self.0.stub)
                .create_steering_policy_attachment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [body][crate::model::CreateSteeringPolicyAttachmentRequest::body].
        pub fn set_body<T: Into<crate::model::CreateSteeringPolicyAttachmentDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [opc_retry_token][crate::model::CreateSteeringPolicyAttachmentRequest::opc_retry_token].
        pub fn set_opc_retry_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateSteeringPolicyAttachmentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the attachment reaches one of `targets`.
        ///
        /// The result contains the response to the create request, and the
        /// last snapshot of the attachment. On errors after the attachment is created
        /// the error still carries the create response.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<crate::model::SteeringPolicyAttachment>, Response<crate::model::SteeringPolicyAttachment>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let mut request = crate::model::GetSteeringPolicyAttachmentRequest::default();
            let created = self.send().await?;
            request.steering_policy_attachment_id = created.body().id.clone();
            let targets = targets.into();
            tracing::debug!("waiting for attachment {} to reach one of {targets}", created.body().id.as_deref().unwrap_or_default());
            let fetch = async || stub.get_steering_policy_attachment(request.clone(), options.clone()).await;
            Ok(waiter::wait_until(created, &targets, &waiter, fetch).await?)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateSteeringPolicyAttachment {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::update_steering_policy_attachment][crate::client::Dns::update_steering_policy_attachment] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateSteeringPolicyAttachment(RequestBuilder<crate::model::UpdateSteeringPolicyAttachmentRequest>);

    impl UpdateSteeringPolicyAttachment {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateSteeringPolicyAttachmentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::SteeringPolicyAttachment>> {
            (*self.0.stub)
                .update_steering_policy_attachment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [steering_policy_attachment_id][crate::model::UpdateSteeringPolicyAttachmentRequest::steering_policy_attachment_id].
        pub fn set_steering_policy_attachment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.steering_policy_attachment_id = Some(v.into());
            self
        }

        /// Sets the value of [body][crate::model::UpdateSteeringPolicyAttachmentRequest::body].
        pub fn set_body<T: Into<crate::model::UpdateSteeringPolicyAttachmentDetails>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateSteeringPolicyAttachmentRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_unmodified_since][crate::model::UpdateSteeringPolicyAttachmentRequest::if_unmodified_since].
        pub fn set_if_unmodified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_unmodified_since = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateSteeringPolicyAttachmentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the attachment reaches one of `targets`.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<crate::model::SteeringPolicyAttachment>, Response<crate::model::SteeringPolicyAttachment>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let mut request = crate::model::GetSteeringPolicyAttachmentRequest::default();
            request.steering_policy_attachment_id = self.0.request.steering_policy_attachment_id.clone();
            let updated = self.send().await?;
            if let Some(id) = updated.body().id.clone() {
                request.steering_policy_attachment_id = Some(id);
            }
            let fetch = async || stub.get_steering_policy_attachment(request.clone(), options.clone()).await;
            Ok(waiter::wait_until(updated, &targets.into(), &waiter, fetch).await?)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateSteeringPolicyAttachment {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Dns::delete_steering_policy_attachment][crate::client::Dns::delete_steering_policy_attachment] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteSteeringPolicyAttachment(RequestBuilder<crate::model::DeleteSteeringPolicyAttachmentRequest>);

    impl DeleteSteeringPolicyAttachment {
        pub(crate) fn new(stub: Arc<dyn crate::stub::Dns>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteSteeringPolicyAttachmentRequest>>(mut self, v: V) -> Self {
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
                .delete_steering_policy_attachment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [steering_policy_attachment_id][crate::model::DeleteSteeringPolicyAttachmentRequest::steering_policy_attachment_id].
        pub fn set_steering_policy_attachment_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.steering_policy_attachment_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteSteeringPolicyAttachmentRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [if_unmodified_since][crate::model::DeleteSteeringPolicyAttachmentRequest::if_unmodified_since].
        pub fn set_if_unmodified_since<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_unmodified_since = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteSteeringPolicyAttachmentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sends the request and waits until the attachment reaches one of `targets`.
        ///
        /// The attachment is fetched before sending the delete request, and then
        /// polled using its OCID. The wait completes with
        /// [WaitOutcome::Gone][waiter::WaitOutcome::Gone] if the attachment is
        /// no longer found.
        pub async fn send_and_wait_for_state<V: Into<waiter::TargetStates>>(
            self,
            targets: V,
            waiter: waiter::Waiter,
        ) -> waiter::OperationResult<Response<()>, Response<crate::model::SteeringPolicyAttachment>> {
            let (stub, options, waiter) = self.0.polling(waiter);
            let waiter = waiter.with_succeed_on_not_found(true);
            let mut request = crate::model::GetSteeringPolicyAttachmentRequest::default();
            request.steering_policy_attachment_id = self.0.request.steering_policy_attachment_id.clone();
            let snapshot = stub.get_steering_policy_attachment(request.clone(), options.clone()).await?;
            if let Some(id) = snapshot.body().id.clone() {
                request.steering_policy_attachment_id = Some(id);
            }
            let deleted = self.send().await?;
            let fetch = async || stub.get_steering_policy_attachment(request.clone(), options.clone()).await;
            Ok(waiter::wait_until(deleted, &targets.into(), &waiter, fetch).await?)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteSteeringPolicyAttachment {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

}

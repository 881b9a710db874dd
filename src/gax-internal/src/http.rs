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

use crate::observability;
use crate::options::{ClientConfig, ClientInfo};
use auth::credentials::{Credentials, SigningRequest, SigningStrategy};
use bytes::Bytes;
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::{Error, ServiceError};
use gax::exponential_backoff::ExponentialBackoff;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{PollingErrorPolicy, TransientOnly};
use gax::response::{OPC_REQUEST_ID, Parts, Response};
use gax::retry_policy::RetryPolicy;
use std::sync::Arc;
use tracing::Instrument;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    info: ClientInfo,
    tracing: bool,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl ReqwestClient {
    pub async fn new(config: ClientConfig, info: &ClientInfo) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let endpoint = crate::endpoint::resolve(
            config.endpoint.as_deref(),
            config.region.as_deref(),
            info.endpoint_template,
        )?;
        let cred = Self::make_credentials(&config)?;
        let inner = reqwest::Client::builder()
            .user_agent(info.user_agent())
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            endpoint,
            info: *info,
            tracing,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            polling_error_policy: config.polling_error_policy,
            polling_backoff_policy: config.polling_backoff_policy,
        })
    }

    /// The resolved endpoint, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Sends a request with a JSON body, and parses the response as JSON.
    ///
    /// An empty response body parses as `O::default()`.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: gax::options::RequestOptions,
    ) -> Result<Response<O>> {
        let body = match body {
            None => None,
            Some(b) => {
                builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json");
                Some(Bytes::from(serde_json::to_vec(&b).map_err(Error::ser)?))
            }
        };
        let response = self
            .execute_raw(builder, body, SigningStrategy::Standard, options)
            .await?;
        let (parts, content) = response.into_parts();
        let body = match content {
            c if c.is_empty() => O::default(),
            c => serde_json::from_slice::<O>(&c).map_err(Error::deser)?,
        };
        Ok(Response::from_parts(parts, body))
    }

    /// Sends a request with a JSON body, and discards the response body.
    pub async fn execute_empty<I: serde::ser::Serialize>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let response = self
            .execute::<I, serde_json::Value>(builder, body, options)
            .await?;
        Ok(response.map(|_| ()))
    }

    /// Sends a request with an opaque body, and returns the response body
    /// without parsing it.
    pub async fn execute_raw(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<Bytes>,
        strategy: SigningStrategy,
        options: gax::options::RequestOptions,
    ) -> Result<Response<Bytes>> {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        let pending = async move {
            match self.get_retry_policy(&options) {
                None => {
                    self.request_attempt(builder, body.as_ref(), strategy, &options, None)
                        .await
                }
                Some(policy) => {
                    self.retry_loop(builder, body, strategy, options, policy)
                        .await
                }
            }
        };
        if self.tracing {
            pending
                .instrument(observability::request_span(&self.info))
                .await
        } else {
            pending.await
        }
    }

    fn make_credentials(config: &ClientConfig) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    async fn retry_loop(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<Bytes>,
        strategy: SigningStrategy,
        options: gax::options::RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<Response<Bytes>> {
        let idempotent = options.idempotent().unwrap_or(false);
        let backoff = self.get_backoff_policy(&options);
        let this = self.clone();
        let inner = async move |d| {
            let builder = builder
                .try_clone()
                .ok_or_else(|| Error::ser("cannot clone the request builder"))?;
            this.request_attempt(builder, body.as_ref(), strategy, &options, d)
                .await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(inner, sleep, idempotent, retry_policy, backoff).await
    }

    async fn request_attempt(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<&Bytes>,
        strategy: SigningStrategy,
        options: &gax::options::RequestOptions,
        remaining_time: Option<std::time::Duration>,
    ) -> Result<Response<Bytes>> {
        let builder = gax::retry_loop_internal::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let builder = match body {
            Some(b) => builder.body(b.clone()),
            None => builder,
        };
        let mut request = builder.build().map_err(Error::ser)?;
        tracing::debug!("sending {} {}", request.method(), request.url());
        observability::record_request(request.method(), request.url());

        let signing = SigningRequest::new(request.method(), request.url(), request.headers())
            .with_strategy(strategy);
        let signing = match body {
            Some(b) => signing.with_body(b),
            None => signing,
        };
        let auth_headers = self
            .cred
            .headers(signing)
            .await
            .map_err(Error::authentication)?;
        request.headers_mut().extend(auth_headers);

        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        observability::record_response(
            response.status().as_u16(),
            response
                .headers()
                .get(OPC_REQUEST_ID)
                .and_then(|v| v.to_str().ok()),
        );
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }

        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
    }

    pub(crate) fn get_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }

    pub fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Arc<dyn PollingErrorPolicy> {
        options
            .polling_error_policy()
            .clone()
            .or_else(|| self.polling_error_policy.clone())
            .unwrap_or_else(|| Arc::new(TransientOnly))
    }

    /// The polling backoff policy, if the request or the client set one.
    ///
    /// Waiters use their own default schedule otherwise.
    pub fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> Option<Arc<dyn PollingBackoffPolicy>> {
        options
            .polling_backoff_policy()
            .clone()
            .or_else(|| self.polling_backoff_policy.clone())
    }
}

/// The request body type for operations without a body.
#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let error = match ServiceError::try_from(&body) {
        Ok(status) => Error::service(
            status
                .with_http_status_code(status_code)
                .with_headers(headers),
        ),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response(response: reqwest::Response) -> Result<Response<Bytes>> {
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;
    Ok(Response::from_parts(Parts::new().set_headers(headers), body))
}

#[cfg(test)]
mod test {
    use http::{HeaderMap, HeaderValue};
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        assert!(response.is_err(), "{response:?}");
        let err = response.err().unwrap();
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        let body = serde_json::json!({
            "code": "NotAuthorizedOrNotFound",
            "message": "Authorization failed or requested resource not found.",
        });
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .header("opc-request-id", "req-123")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        let status = err.status().expect("service error");
        assert_eq!(status.code(), "NotAuthorizedOrNotFound");
        assert_eq!(
            status.message(),
            "Authorization failed or requested resource not found."
        );
        assert_eq!(status.opc_request_id(), Some("req-123"));
        assert_eq!(err.http_status_code(), Some(404_u16));
        assert!(err.is_not_found(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    #[test_case(reqwest::StatusCode::OK, "binary\x00data"; "200 with opaque content")]
    async fn client_raw_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let http_resp = http::Response::builder()
            .header("etag", "abc123")
            .status(code)
            .body(content.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let response = super::to_http_response(response).await?;
        assert_eq!(response.etag(), Some("abc123"));
        assert_eq!(response.body(), &bytes::Bytes::from(content.to_string()));
        Ok(())
    }
}

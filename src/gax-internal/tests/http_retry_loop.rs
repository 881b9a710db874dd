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

//! These tests verify the client uses the retry and backoff policies as
//! expected. They do not test the policy implementations, that is done in the
//! unit tests.
//!
//! The tests use an HTTP server that returns a sequence of responses. The
//! sequence is specific to each test, intended to drive the retry loop as
//! needed for that test.

#[cfg(test)]
mod tests {
    use gax::backoff_policy::BackoffPolicy;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::fixed_backoff::FixedBackoff;
    use gax::options::*;
    use gax::retry_policy::{AlwaysRetry, DefaultRetryable, RetryPolicyExt};
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use oci_gax_internal::http::{NoBody, ReqwestClient};
    use oci_gax_internal::options::{ClientConfig, ClientInfo};
    use serde_json::json;
    use std::time::{Duration, Instant};

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    const INFO: ClientInfo = ClientInfo {
        service_name: "test",
        client_version: "0.0.0",
        client_artifact: "oci-gax-internal-tests",
        endpoint_template: "https://test.{region}.oraclecloud.com",
    };

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_no_policy_immediate_success() -> Result<()> {
        let server = start(vec![success()]);
        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await;
        let response = response?.into_body();
        assert_eq!(response, json!({"lifecycleState": "ACTIVE"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_no_policy_single_attempt() -> Result<()> {
        // Without a retry policy a transient error is returned immediately.
        let server = start(vec![transient()]);
        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let options = {
            let mut options = RequestOptions::default();
            options.set_backoff_policy(test_backoff());
            options.set_idempotency(true);
            options
        };
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        assert!(!err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_immediate_failure() -> Result<()> {
        let server = start(vec![permanent()]);
        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let options = {
            let mut options = RequestOptions::default();
            options.set_retry_policy(DefaultRetryable.with_attempt_limit(5));
            options.set_backoff_policy(test_backoff());
            options.set_idempotency(true);
            options
        };
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(StatusCode::BAD_REQUEST.as_u16()));
        let status = err.status().expect("service error");
        assert_eq!(status.code(), "InvalidParameter");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_retry_success() -> Result<()> {
        // The server returns two transient errors and then succeeds.
        let server = start(vec![transient(), transient(), success()]);
        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let options = {
            let mut options = RequestOptions::default();
            options.set_retry_policy(DefaultRetryable.with_attempt_limit(3));
            options.set_backoff_policy(test_backoff());
            options.set_idempotency(true);
            options
        };
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await;
        let response = response?.into_body();
        assert_eq!(response, json!({"lifecycleState": "ACTIVE"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_fixed_delay_between_attempts() -> Result<()> {
        // Three attempts with a fixed 10ms delay, the first two fail.
        let server = start(vec![transient(), transient(), success()]);
        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let options = {
            let mut options = RequestOptions::default();
            options.set_retry_policy(AlwaysRetry.with_attempt_limit(3));
            options.set_backoff_policy(FixedBackoff::new(Duration::from_millis(10)));
            options
        };
        let start = Instant::now();
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await?;
        let elapsed = start.elapsed();
        assert_eq!(response.into_body(), json!({"lifecycleState": "ACTIVE"}));
        assert!(elapsed >= Duration::from_millis(20), "{elapsed:?}");
        // The server verifies it received exactly three requests when dropped.
        drop(server);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_too_many_transients() -> Result<()> {
        let server = start(vec![transient(), transient(), transient()]);
        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());

        let options = {
            let mut options = RequestOptions::default();
            options.set_retry_policy(DefaultRetryable.with_attempt_limit(3));
            options.set_backoff_policy(test_backoff());
            options.set_idempotency(true);
            options
        };
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_non_idempotent() -> Result<()> {
        // Transient errors are not retried when the request is not idempotent.
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/retry"))
                .times(1)
                .respond_with(cycle(vec![to_responder(transient())])),
        );
        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::POST, "/retry".into());

        let options = {
            let mut options = RequestOptions::default();
            options.set_retry_policy(DefaultRetryable.with_attempt_limit(3));
            options.set_backoff_policy(test_backoff());
            options
        };
        let err = client
            .execute::<_, serde_json::Value>(builder, Some(json!({"name": "test"})), options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    fn success() -> (StatusCode, String) {
        let response = json!({
            "lifecycleState": "ACTIVE"
        });
        (StatusCode::OK, response.to_string())
    }

    fn transient() -> (StatusCode, String) {
        let status = json!({
            "code": "ServiceUnavailable",
            "message": "try-again",
        });
        (StatusCode::SERVICE_UNAVAILABLE, status.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let status = json!({
            "code": "InvalidParameter",
            "message": "uh-oh",
        });
        (StatusCode::BAD_REQUEST, status.to_string())
    }

    fn test_config(server: &Server) -> ClientConfig {
        use auth::credentials::anonymous::Builder as Anonymous;
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.cred = Some(Anonymous::new().build());
        config
    }

    fn test_backoff() -> impl BackoffPolicy {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/retry"))
                .times(responses.len())
                .respond_with(cycle(responses.into_iter().map(to_responder).collect())),
        );
        server
    }

    fn to_responder((status, response): (StatusCode, String)) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(response),
        )
    }
}

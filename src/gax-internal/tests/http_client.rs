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

#[cfg(test)]
mod tests {
    use auth::credentials::SigningStrategy;
    use auth::credentials::anonymous::Builder as Anonymous;
    use auth::credentials::api_key::Builder as ApiKey;
    use gax::options::RequestOptions;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use oci_gax_internal::http::{NoBody, ReqwestClient};
    use oci_gax_internal::options::{ClientConfig, ClientInfo};
    use oci_gax_internal::query_parameter::QueryParameter;
    use oci_gax_internal::retry_token::OPC_RETRY_TOKEN;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    const PRIVATE_KEY: &str = include_str!("../../auth/testdata/private_key.pem");

    const INFO: ClientInfo = ClientInfo {
        service_name: "test",
        client_version: "1.2.3",
        client_artifact: "oci-gax-internal-tests",
        endpoint_template: "https://test.{region}.oraclecloud.com",
    };

    fn config(server: &Server) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.cred = Some(Anonymous::new().build());
        config
    }

    fn signed_config(server: &Server) -> Result<ClientConfig> {
        let mut config = config(server);
        config.cred = Some(
            ApiKey::new()
                .with_tenancy("ocid1.tenancy.oc1..aaaa")
                .with_user("ocid1.user.oc1..bbbb")
                .with_fingerprint("20:3b:97:13:55:1c:5b:0d:d3:37:d8:50:4e:c5:3a:34")
                .with_private_key_pem(PRIVATE_KEY)
                .build()?,
        );
        Ok(config)
    }

    #[tokio::test]
    async fn signed_get() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/zones"),
                request::headers(contains(key("date"))),
                request::headers(contains((
                    "authorization",
                    matches("^Signature version=\"1\",keyId=\"ocid1.tenancy.oc1..aaaa/ocid1.user.oc1..bbbb/20:3b:97:13:55:1c:5b:0d:d3:37:d8:50:4e:c5:3a:34\",algorithm=\"rsa-sha256\",headers=\"date \\(request-target\\) host\",signature=\".+\"$"),
                ))),
                request::headers(not(contains(key("x-content-sha256")))),
            ])
            .respond_with(json_encoded(json!({"items": []}))),
        );
        let client = ReqwestClient::new(signed_config(&server)?, &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/zones".into());
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), json!({"items": []}));
        Ok(())
    }

    #[tokio::test]
    async fn signed_post_covers_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/zones"),
                request::headers(contains((
                    "x-content-sha256",
                    "rOQP2b+zxwxe26MK9md8/m3Pk4YgfI2ftKxt8gVZzFo="
                ))),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains((
                    "authorization",
                    matches("headers=\"date \\(request-target\\) host content-length content-type x-content-sha256\""),
                ))),
                request::body(json_decoded(eq(json!({"name": "example.com"})))),
            ])
            .respond_with(json_encoded(json!({"name": "example.com"}))),
        );
        let client = ReqwestClient::new(signed_config(&server)?, &INFO).await?;
        let builder = client.builder(reqwest::Method::POST, "/zones".into());
        // The serialized body must match the known digest byte for byte.
        let body = json!({"name": "example.com"});
        let response = client
            .execute::<_, serde_json::Value>(builder, Some(body), RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), json!({"name": "example.com"}));
        Ok(())
    }

    #[tokio::test]
    async fn signed_put_exclude_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/n/ns/b/bucket/o/object"),
                request::headers(not(contains(key("x-content-sha256")))),
                request::headers(contains((
                    "authorization",
                    matches("headers=\"date \\(request-target\\) host\""),
                ))),
                request::body("raw object data"),
            ])
            .respond_with(status_code(200).insert_header("etag", "etag-1")),
        );
        let client = ReqwestClient::new(signed_config(&server)?, &INFO).await?;
        let builder = client.builder(reqwest::Method::PUT, "/n/ns/b/bucket/o/object".into());
        let response = client
            .execute_raw(
                builder,
                Some(bytes::Bytes::from_static(b"raw object data")),
                SigningStrategy::ExcludeBody,
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.etag(), Some("etag-1"));
        assert!(response.body().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn query_and_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/zones"),
                request::query(url_decoded(contains(("compartmentId", "ocid1.compartment.oc1..aaa")))),
                request::query(url_decoded(contains(("limit", "10")))),
                request::query(url_decoded(not(contains(key("page"))))),
                request::headers(contains((OPC_RETRY_TOKEN, "token-123"))),
                request::headers(contains(("user-agent", "my-app/1.0"))),
            ])
            .respond_with(
                json_encoded(json!([{"name": "example.com"}]))
                    .insert_header("opc-next-page", "page-2")
                    .insert_header("opc-request-id", "req-abc"),
            ),
        );
        let client = ReqwestClient::new(config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/zones".into());
        let builder = Some("ocid1.compartment.oc1..aaa").add(builder, "compartmentId");
        let builder = Some(10).add(builder, "limit");
        let builder = None::<String>.add(builder, "page");
        let builder = builder.header(OPC_RETRY_TOKEN, "token-123");
        let mut options = RequestOptions::default();
        options.set_user_agent("my-app/1.0");
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await?;
        assert_eq!(response.opc_next_page(), Some("page-2"));
        assert_eq!(response.opc_request_id(), Some("req-abc"));
        Ok(())
    }

    #[tokio::test]
    async fn default_user_agent() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/zones/example.com"),
                request::headers(contains((
                    "user-agent",
                    "oci-rust-sdk oci-gax-internal-tests/1.2.3"
                ))),
            ])
            .respond_with(status_code(204)),
        );
        let client = ReqwestClient::new(config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::DELETE, "/zones/example.com".into());
        let response = client
            .execute_empty::<NoBody>(builder, None, RequestOptions::default())
            .await?;
        assert!(response.headers().get("opc-request-id").is_none());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempt_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/slow")).respond_with(
                delay_and_then(Duration::from_secs(2), json_encoded(json!({}))),
            ),
        );
        let client = ReqwestClient::new(config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/slow".into());
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn bad_json() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/bad"))
                .respond_with(status_code(200).body("not json")),
        );
        let client = ReqwestClient::new(config(&server), &INFO).await?;
        let builder = client.builder(reqwest::Method::GET, "/bad".into());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn endpoint_from_region() -> Result<()> {
        let mut config = ClientConfig::default();
        config.region = Some("us-phoenix-1".into());
        config.cred = Some(Anonymous::new().build());
        let client = ReqwestClient::new(config, &INFO).await?;
        assert_eq!(client.endpoint(), "https://test.us-phoenix-1.oraclecloud.com");
        Ok(())
    }

    #[tokio::test]
    async fn missing_region() {
        let mut config = ClientConfig::default();
        config.region = Some(String::new());
        config.cred = Some(Anonymous::new().build());
        let err = ReqwestClient::new(config, &INFO).await.unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
    }
}

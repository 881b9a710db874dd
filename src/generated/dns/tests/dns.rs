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
    use auth::credentials::anonymous::Builder as Anonymous;
    use futures::stream::StreamExt;
    use gax::fixed_backoff::FixedBackoff;
    use gax::options::RequestOptionsBuilder;
    use gax::retry_policy::{AlwaysRetry, DefaultRetryable, RetryPolicyExt};
    use httptest::{Expectation, Server, cycle, matchers::*, responders::*};
    use oci_dns::client::Dns;
    use oci_dns::model::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::{Duration, Instant};
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    const COMPARTMENT: &str = "ocid1.compartment.oc1..aaaa";
    const ZONE_ID: &str = "ocid1.dns-zone.oc1..bbbb";

    async fn client(server: &Server) -> Result<Dns> {
        let client = Dns::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn zone(state: &str) -> serde_json::Value {
        json!({
            "id": ZONE_ID,
            "name": "example.com",
            "compartmentId": COMPARTMENT,
            "zoneType": "PRIMARY",
            "lifecycleState": state,
            "serial": 2,
        })
    }

    #[tokio::test]
    async fn list_zones() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/zones"),
                request::query(url_decoded(contains(("compartmentId", COMPARTMENT)))),
                request::query(url_decoded(contains(("zoneType", "PRIMARY")))),
                request::query(url_decoded(contains(("sortBy", "timeCreated")))),
                request::query(url_decoded(contains(("sortOrder", "DESC")))),
                request::query(url_decoded(not(contains(key("page"))))),
            ])
            .respond_with(
                json_encoded(json!([zone("ACTIVE")])).insert_header("opc-request-id", "req-1"),
            ),
        );
        let client = client(&server).await?;
        let response = client
            .list_zones()
            .set_compartment_id(COMPARTMENT)
            .set_zone_type(ZoneType::Primary)
            .set_sort_by(ListZonesSortBy::TimeCreated)
            .set_sort_order(SortOrder::Desc)
            .send()
            .await?;
        assert_eq!(response.opc_request_id(), Some("req-1"));
        let zones = response.into_body();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].id.as_deref(), Some(ZONE_ID));
        assert_eq!(zones[0].lifecycle_state, Some(ZoneLifecycleState::Active));
        Ok(())
    }

    #[tokio::test]
    async fn list_zones_by_page() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/zones"),
                request::query(url_decoded(not(contains(key("page"))))),
            ])
            .respond_with(
                json_encoded(json!([zone("ACTIVE"), zone("CREATING")]))
                    .insert_header("opc-next-page", "page-2"),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/zones"),
                request::query(url_decoded(contains(("page", "page-2")))),
            ])
            .respond_with(json_encoded(json!([zone("DELETING")]))),
        );
        let client = client(&server).await?;
        let mut pages = client
            .list_zones()
            .set_compartment_id(COMPARTMENT)
            .by_page();
        let mut states = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page?;
            states.extend(page.into_body().into_iter().filter_map(|z| z.lifecycle_state));
        }
        assert_eq!(
            states,
            vec![
                ZoneLifecycleState::Active,
                ZoneLifecycleState::Creating,
                ZoneLifecycleState::Deleting
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_zones_requires_compartment() -> Result<()> {
        let server = Server::run();
        let client = client(&server).await?;
        let err = client.list_zones().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("compartmentId"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn list_zones_rejects_unknown_enums() -> Result<()> {
        let server = Server::run();
        let client = client(&server).await?;
        let err = client
            .list_zones()
            .set_compartment_id(COMPARTMENT)
            .set_sort_by("zoneSize")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("sortBy"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn get_zone_conditional() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/zones/example.com"),
                request::query(url_decoded(contains(("scope", "PRIVATE")))),
                request::query(url_decoded(contains(("viewId", "ocid1.dnsview.oc1..cccc")))),
                request::headers(contains(("if-none-match", "etag-1"))),
                request::headers(contains(("opc-request-id", "my-request"))),
            ])
            .respond_with(json_encoded(zone("ACTIVE")).insert_header("etag", "etag-2")),
        );
        let client = client(&server).await?;
        let response = client
            .get_zone()
            .set_zone_name_or_id("example.com")
            .set_scope(Scope::Private)
            .set_view_id("ocid1.dnsview.oc1..cccc")
            .set_if_none_match("etag-1")
            .set_opc_request_id("my-request")
            .send()
            .await?;
        assert_eq!(response.etag(), Some("etag-2"));
        assert_eq!(response.body().name.as_deref(), Some("example.com"));
        Ok(())
    }

    #[tokio::test]
    async fn get_zone_missing_name() -> Result<()> {
        let server = Server::run();
        let client = client(&server).await?;
        let err = client.get_zone().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");

        let err = client
            .get_zone()
            .set_zone_name_or_id("  ")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_zone_not_found() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/zones/missing.com")).respond_with(
                status_code(404)
                    .insert_header("opc-request-id", "req-404")
                    .body(
                        json!({"code": "NotAuthorizedOrNotFound", "message": "zone not found"})
                            .to_string(),
                    ),
            ),
        );
        let client = client(&server).await?;
        let err = client
            .get_zone()
            .set_zone_name_or_id("missing.com")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().expect("service errors have a status");
        assert_eq!(status.code(), "NotAuthorizedOrNotFound");
        Ok(())
    }

    #[tokio::test]
    async fn create_zone() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/zones"),
                request::headers(contains(("opc-retry-token", "retry-1"))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "name": "example.com",
                    "zoneType": "PRIMARY",
                    "compartmentId": COMPARTMENT,
                })))),
            ])
            .respond_with(json_encoded(zone("CREATING"))),
        );
        let client = client(&server).await?;
        let details = CreateZoneDetails::new()
            .set_name("example.com")
            .set_zone_type(ZoneType::Primary)
            .set_compartment_id(COMPARTMENT);
        let response = client
            .create_zone()
            .set_body(details)
            .set_opc_retry_token("retry-1")
            .send()
            .await?;
        assert_eq!(
            response.body().lifecycle_state,
            Some(ZoneLifecycleState::Creating)
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_zone_generates_retry_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/zones"),
                request::headers(contains(key("opc-retry-token"))),
            ])
            .respond_with(json_encoded(zone("CREATING"))),
        );
        let client = client(&server).await?;
        client
            .create_zone()
            .set_body(CreateZoneDetails::new().set_name("example.com"))
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn create_zone_requires_body() -> Result<()> {
        let server = Server::run();
        let client = client(&server).await?;
        let err = client.create_zone().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("createZoneDetails"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn update_rr_set() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/zones/example.com/records/www.example.com/A"),
                request::headers(contains(("if-match", "etag-1"))),
                request::body(json_decoded(eq(json!({
                    "items": [{"domain": "www.example.com", "rtype": "A", "rdata": "192.0.2.1", "ttl": 300}]
                })))),
            ])
            .respond_with(json_encoded(json!({
                "items": [{
                    "domain": "www.example.com",
                    "rtype": "A",
                    "rdata": "192.0.2.1",
                    "ttl": 300,
                    "recordHash": "hash-1",
                    "isProtected": false,
                }]
            }))),
        );
        let client = client(&server).await?;
        let record = RecordDetails::new()
            .set_domain("www.example.com")
            .set_rtype("A")
            .set_rdata("192.0.2.1")
            .set_ttl(300);
        let response = client
            .update_rr_set()
            .set_zone_name_or_id("example.com")
            .set_domain("www.example.com")
            .set_rtype("A")
            .set_if_match("etag-1")
            .set_body(UpdateRRSetDetails::new().set_items([record]))
            .send()
            .await?;
        let items = &response.body().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].record_hash.as_deref(), Some("hash-1"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_steering_policy() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/steeringPolicies/ocid1.dnspolicy.oc1..dddd"),
                request::headers(contains(("if-match", "etag-1"))),
            ])
            .respond_with(status_code(204).insert_header("opc-request-id", "req-del")),
        );
        let client = client(&server).await?;
        let response = client
            .delete_steering_policy()
            .set_steering_policy_id("ocid1.dnspolicy.oc1..dddd")
            .set_if_match("etag-1")
            .send()
            .await?;
        assert_eq!(response.opc_request_id(), Some("req-del"));
        Ok(())
    }

    #[test_case(None; "no retry policy")]
    #[test_case(Some(4); "with retry policy")]
    #[tokio::test]
    async fn invalid_header_value(attempts: Option<u32>) -> Result<()> {
        let server = Server::run();
        server.expect(Expectation::matching(any()).times(0).respond_with(status_code(500)));
        let client = client(&server).await?;
        let builder = client
            .delete_zone()
            .set_zone_name_or_id("example.com")
            .set_if_match("bad\nvalue");
        let builder = match attempts {
            None => builder,
            Some(n) => builder
                .with_idempotency(true)
                .with_retry_policy(DefaultRetryable.with_attempt_limit(n))
                .with_backoff_policy(FixedBackoff::new(Duration::from_millis(1))),
        };
        let err = builder.send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("if-match"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn retry_transient_errors() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/zones/example.com"))
                .times(3)
                .respond_with(cycle![
                    status_code(503).body(
                        json!({"code": "ServiceUnavailable", "message": "try again"}).to_string()
                    ),
                    status_code(503).body(
                        json!({"code": "ServiceUnavailable", "message": "try again"}).to_string()
                    ),
                    json_encoded(zone("ACTIVE")),
                ]),
        );
        let client = client(&server).await?;
        let start = Instant::now();
        let response = client
            .get_zone()
            .set_zone_name_or_id("example.com")
            .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
            .with_backoff_policy(FixedBackoff::new(Duration::from_millis(10)))
            .send()
            .await?;
        assert!(start.elapsed() >= Duration::from_millis(20), "{:?}", start.elapsed());
        assert_eq!(response.body().id.as_deref(), Some(ZONE_ID));
        Ok(())
    }

    #[tokio::test]
    async fn no_retry_policy_single_attempt() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/zones/example.com"))
                .times(1)
                .respond_with(status_code(503).body(
                    json!({"code": "ServiceUnavailable", "message": "try again"}).to_string(),
                )),
        );
        let client = client(&server).await?;
        let err = client
            .get_zone()
            .set_zone_name_or_id("example.com")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }
}

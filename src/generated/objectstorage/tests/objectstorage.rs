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
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use oci_objectstorage::client::ObjectStorage;
    use oci_objectstorage::model::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    const NAMESPACE: &str = "axaxnpcrorw5";
    const COMPARTMENT: &str = "ocid1.compartment.oc1..aaaa";

    async fn client(server: &Server) -> Result<ObjectStorage> {
        let client = ObjectStorage::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get_namespace() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/n/"),
                request::query(url_decoded(contains(("compartmentId", COMPARTMENT)))),
            ])
            .respond_with(json_encoded(json!(NAMESPACE))),
        );
        let client = client(&server).await?;
        let namespace = client
            .get_namespace()
            .set_compartment_id(COMPARTMENT)
            .send()
            .await?
            .into_body();
        assert_eq!(namespace, NAMESPACE);
        Ok(())
    }

    #[tokio::test]
    async fn list_buckets_requires_compartment() -> Result<()> {
        let server = Server::run();
        let client = client(&server).await?;
        let err = client
            .list_buckets()
            .set_namespace_name(NAMESPACE)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("compartmentId"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn list_buckets_by_page() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/n/{NAMESPACE}/b/")),
                request::query(url_decoded(not(contains(key("page"))))),
            ])
            .respond_with(
                json_encoded(json!([{"name": "a"}, {"name": "b"}]))
                    .insert_header("opc-next-page", "p2"),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/n/{NAMESPACE}/b/")),
                request::query(url_decoded(contains(("page", "p2")))),
            ])
            .respond_with(json_encoded(json!([{"name": "c"}]))),
        );
        let client = client(&server).await?;
        let mut pages = client
            .list_buckets()
            .set_namespace_name(NAMESPACE)
            .set_compartment_id(COMPARTMENT)
            .by_page();
        let mut names = Vec::new();
        while let Some(page) = pages.next().await {
            names.extend(page?.into_body().into_iter().filter_map(|b| b.name));
        }
        assert_eq!(names, vec!["a", "b", "c"]);
        Ok(())
    }

    #[tokio::test]
    async fn create_bucket() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/n/{NAMESPACE}/b/")),
                request::body(json_decoded(eq(json!({
                    "name": "reports",
                    "compartmentId": COMPARTMENT,
                    "storageTier": "Standard",
                    "versioning": "Enabled",
                })))),
            ])
            .respond_with(
                json_encoded(json!({
                    "namespace": NAMESPACE,
                    "name": "reports",
                    "compartmentId": COMPARTMENT,
                    "storageTier": "Standard",
                    "versioning": "Enabled",
                    "etag": "e-1",
                }))
                .insert_header("etag", "e-1"),
            ),
        );
        let client = client(&server).await?;
        let response = client
            .create_bucket()
            .set_namespace_name(NAMESPACE)
            .set_body(
                CreateBucketDetails::new()
                    .set_name("reports")
                    .set_compartment_id(COMPARTMENT)
                    .set_storage_tier(BucketStorageTier::Standard)
                    .set_versioning(Versioning::Enabled),
            )
            .send()
            .await?;
        assert_eq!(response.etag(), Some("e-1"));
        let bucket = response.into_body();
        assert_eq!(bucket.name.as_deref(), Some("reports"));
        assert_eq!(bucket.versioning, Some(Versioning::Enabled));
        Ok(())
    }

    #[tokio::test]
    async fn create_bucket_requires_body() -> Result<()> {
        let server = Server::run();
        let client = client(&server).await?;
        let err = client
            .create_bucket()
            .set_namespace_name(NAMESPACE)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn put_object() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", format!("/n/{NAMESPACE}/b/reports/o/summary.txt")),
                request::headers(contains(("content-type", "text/plain"))),
                request::headers(contains(("if-none-match", "*"))),
                request::headers(contains(("storage-tier", "InfrequentAccess"))),
                request::headers(contains(("opc-meta-owner", "alice"))),
                request::body("hello world"),
            ])
            .respond_with(status_code(200).insert_header("etag", "obj-1")),
        );
        let client = client(&server).await?;
        let response = client
            .put_object()
            .set_namespace_name(NAMESPACE)
            .set_bucket_name("reports")
            .set_object_name("summary.txt")
            .set_content_type("text/plain")
            .set_if_none_match("*")
            .set_storage_tier(StorageTier::InfrequentAccess)
            .set_opc_meta([("owner", "alice")])
            .set_body("hello world")
            .send()
            .await?;
        assert_eq!(response.etag(), Some("obj-1"));
        Ok(())
    }

    #[tokio::test]
    async fn put_object_missing_object_name() -> Result<()> {
        let server = Server::run();
        let client = client(&server).await?;
        let err = client
            .put_object()
            .set_namespace_name(NAMESPACE)
            .set_bucket_name("reports")
            .set_body("hello world")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("objectName"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn put_object_rejects_unknown_storage_tier() -> Result<()> {
        let server = Server::run();
        let client = client(&server).await?;
        let err = client
            .put_object()
            .set_namespace_name(NAMESPACE)
            .set_bucket_name("reports")
            .set_object_name("summary.txt")
            .set_storage_tier(StorageTier::from("Glacier"))
            .set_body("hello world")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_object() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/n/{NAMESPACE}/b/reports/o/summary.txt")),
                request::headers(contains(("range", "bytes=0-4"))),
            ])
            .respond_with(
                status_code(206)
                    .insert_header("etag", "obj-1")
                    .insert_header("opc-request-id", "req-7")
                    .body("hello"),
            ),
        );
        let client = client(&server).await?;
        let response = client
            .get_object()
            .set_namespace_name(NAMESPACE)
            .set_bucket_name("reports")
            .set_object_name("summary.txt")
            .set_range("bytes=0-4")
            .send()
            .await?;
        assert_eq!(response.etag(), Some("obj-1"));
        assert_eq!(response.opc_request_id(), Some("req-7"));
        assert_eq!(response.into_body().as_ref(), b"hello");
        Ok(())
    }

    #[tokio::test]
    async fn head_object_not_found() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "HEAD",
                format!("/n/{NAMESPACE}/b/reports/o/missing.txt"),
            ))
            .respond_with(status_code(404)),
        );
        let client = client(&server).await?;
        let err = client
            .head_object()
            .set_namespace_name(NAMESPACE)
            .set_bucket_name("reports")
            .set_object_name("missing.txt")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn list_objects_by_page() -> Result<()> {
        let server = Server::run();
        let path = format!("/n/{NAMESPACE}/b/reports/o");
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", path.clone()),
                request::query(url_decoded(contains(("prefix", "2024/")))),
                request::query(url_decoded(not(contains(key("start"))))),
            ])
            .respond_with(json_encoded(json!({
                "objects": [{"name": "2024/a.txt", "size": 10}],
                "nextStartWith": "2024/b.txt",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", path),
                request::query(url_decoded(contains(("prefix", "2024/")))),
                request::query(url_decoded(contains(("start", "2024/b.txt")))),
            ])
            .respond_with(json_encoded(json!({
                "objects": [{"name": "2024/b.txt", "size": 20}],
            }))),
        );
        let client = client(&server).await?;
        let mut pages = client
            .list_objects()
            .set_namespace_name(NAMESPACE)
            .set_bucket_name("reports")
            .set_prefix("2024/")
            .by_page();
        let mut sizes = Vec::new();
        while let Some(page) = pages.next().await {
            sizes.extend(page?.objects.into_iter().flatten().filter_map(|o| o.size));
        }
        assert_eq!(sizes, vec![10, 20]);
        Ok(())
    }

    #[tokio::test]
    async fn preauthenticated_requests() -> Result<()> {
        let server = Server::run();
        let base = format!("/n/{NAMESPACE}/b/reports/p/");
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", base.clone()),
                request::body(json_decoded(eq(json!({
                    "name": "share",
                    "objectName": "summary.txt",
                    "accessType": "ObjectRead",
                    "timeExpires": "2030-01-01T00:00:00Z",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "id": "par-1",
                "name": "share",
                "accessUri": "/p/secret/n/ns/b/reports/o/summary.txt",
                "objectName": "summary.txt",
                "accessType": "ObjectRead",
                "timeExpires": "2030-01-01T00:00:00Z",
                "timeCreated": "2024-01-01T00:00:00Z",
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path("DELETE", format!("{base}par-1")))
                .respond_with(status_code(204)),
        );
        let client = client(&server).await?;
        let par = client
            .create_preauthenticated_request()
            .set_namespace_name(NAMESPACE)
            .set_bucket_name("reports")
            .set_body(
                CreatePreauthenticatedRequestDetails::new()
                    .set_name("share")
                    .set_object_name("summary.txt")
                    .set_access_type(AccessType::ObjectRead)
                    .set_time_expires("2030-01-01T00:00:00Z"),
            )
            .send()
            .await?
            .into_body();
        assert_eq!(par.id.as_deref(), Some("par-1"));
        assert_eq!(par.access_type, Some(AccessType::ObjectRead));

        client
            .delete_preauthenticated_request()
            .set_namespace_name(NAMESPACE)
            .set_bucket_name("reports")
            .set_par_id(par.id.as_deref().unwrap_or_default())
            .send()
            .await?;
        Ok(())
    }
}

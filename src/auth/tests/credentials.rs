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
    use http::HeaderMap;
    use http::header::{AUTHORIZATION, DATE};
    use oci_auth::config::CONFIG_FILE_ENV;
    use oci_auth::credentials::{Builder, SigningRequest, SigningStrategy, anonymous};
    use scoped_env::ScopedEnv;

    type TestResult = anyhow::Result<()>;

    const PRIVATE_KEY: &str = include_str!("../testdata/private_key.pem");

    fn write_config(dir: &std::path::Path) -> anyhow::Result<std::path::PathBuf> {
        let key_path = dir.join("oci_api_key.pem");
        std::fs::write(&key_path, PRIVATE_KEY)?;
        let config_path = dir.join("config");
        std::fs::write(
            &config_path,
            format!(
                r#"
[DEFAULT]
user=ocid1.user.oc1..default
fingerprint=11:22:33
key_file={key}
tenancy=ocid1.tenancy.oc1..tenancy
region=us-ashburn-1

[ADMIN]
user=ocid1.user.oc1..admin
fingerprint=44:55:66
"#,
                key = key_path.display()
            ),
        )?;
        Ok(config_path)
    }

    async fn sign(credentials: &oci_auth::credentials::Credentials) -> anyhow::Result<HeaderMap> {
        let url = url::Url::parse(
            "https://objectstorage.us-ashburn-1.oraclecloud.com/n/my-namespace/b/",
        )?;
        let headers = HeaderMap::new();
        let request = SigningRequest::new(&http::Method::POST, &url, &headers)
            .with_body(br#"{"name":"bucket"}"#)
            .with_strategy(SigningStrategy::Standard);
        Ok(credentials.headers(request).await?)
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_profile_from_env() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config = write_config(dir.path())?;
        let _e = ScopedEnv::set(CONFIG_FILE_ENV, config.to_str().unwrap());

        let credentials = Builder::default().build()?;
        let headers = sign(&credentials).await?;
        let authorization = headers.get(AUTHORIZATION).unwrap().to_str()?;
        assert!(
            authorization
                .contains(r#"keyId="ocid1.tenancy.oc1..tenancy/ocid1.user.oc1..default/11:22:33""#),
            "{authorization}"
        );
        assert!(headers.get(DATE).is_some(), "{headers:?}");
        assert!(headers.get("x-content-sha256").is_some(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn named_profile() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config = write_config(dir.path())?;

        let credentials = Builder::default()
            .with_config_file(config)
            .with_profile("ADMIN")
            .build()?;
        let headers = sign(&credentials).await?;
        let authorization = headers.get(AUTHORIZATION).unwrap().to_str()?;
        assert!(
            authorization
                .contains(r#"keyId="ocid1.tenancy.oc1..tenancy/ocid1.user.oc1..admin/44:55:66""#),
            "{authorization}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn anonymous() -> TestResult {
        let credentials = anonymous::Builder::new().build();
        let headers = sign(&credentials).await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }
}

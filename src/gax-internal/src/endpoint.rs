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

use auth::config::{ConfigFile, DEFAULT_PROFILE};
use gax::client_builder::Error as BuilderError;

const REGION_PLACEHOLDER: &str = "{region}";

/// Calculate the endpoint from the client configuration.
///
/// An explicit endpoint wins. Otherwise the region, from the configuration or
/// from the `DEFAULT` profile in the OCI configuration file, is substituted in
/// the service's endpoint template.
pub(crate) fn resolve(
    endpoint: Option<&str>,
    region: Option<&str>,
    template: &str,
) -> gax::client_builder::Result<String> {
    if let Some(e) = endpoint {
        let parsed = url::Url::parse(e).map_err(BuilderError::config)?;
        if parsed.host_str().is_none() {
            return Err(BuilderError::config(format!("missing host in endpoint {e}")));
        }
        return Ok(e.trim_end_matches('/').to_string());
    }
    let region = match region {
        Some(r) => r.to_string(),
        None => region_from_config_file().ok_or_else(|| {
            BuilderError::config("neither an endpoint nor a region is configured")
        })?,
    };
    if region.trim().is_empty() {
        return Err(BuilderError::config("the region cannot be empty"));
    }
    Ok(template.replace(REGION_PLACEHOLDER, region.trim()))
}

fn region_from_config_file() -> Option<String> {
    let config = match ConfigFile::load_default() {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("cannot load the OCI configuration file: {e}");
            return None;
        }
    };
    config
        .profile(DEFAULT_PROFILE)
        .ok()
        .and_then(|p| p.region().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::config::CONFIG_FILE_ENV;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    const TEMPLATE: &str = "https://dns.{region}.oraclecloud.com/20180115";

    #[test_case(Some("http://127.0.0.1:1234"), None, "http://127.0.0.1:1234"; "endpoint")]
    #[test_case(Some("https://dns.example.com/20180115/"), Some("us-ashburn-1"), "https://dns.example.com/20180115"; "endpoint wins")]
    #[test_case(None, Some("eu-frankfurt-1"), "https://dns.eu-frankfurt-1.oraclecloud.com/20180115"; "region")]
    fn resolved(endpoint: Option<&str>, region: Option<&str>, want: &str) -> anyhow::Result<()> {
        let got = resolve(endpoint, region, TEMPLATE)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn bad_endpoint() {
        let err = resolve(Some("not a url"), None, TEMPLATE).unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
    }

    #[test]
    fn empty_region() {
        let err = resolve(None, Some("  "), TEMPLATE).unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
    }

    #[test]
    #[serial_test::serial]
    fn region_from_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config");
        std::fs::write(&path, "[DEFAULT]\nregion=ap-tokyo-1\n")?;
        let _e = ScopedEnv::set(CONFIG_FILE_ENV, path.to_str().unwrap());
        let got = resolve(None, None, TEMPLATE)?;
        assert_eq!(got, "https://dns.ap-tokyo-1.oraclecloud.com/20180115");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn no_region() {
        let _e = ScopedEnv::set(CONFIG_FILE_ENV, "/does/not/exist/oci-config");
        let err = resolve(None, None, TEMPLATE).unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
    }
}

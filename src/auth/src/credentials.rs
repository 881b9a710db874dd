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

use crate::config::{ConfigFile, DEFAULT_PROFILE};
use crate::{BuildResult, Result};
use http::HeaderMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

pub mod anonymous;
pub mod api_key;

/// Selects which parts of a request are covered by the signature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum SigningStrategy {
    /// Sign the standard headers, and for requests with a body, the body
    /// headers (`content-length`, `content-type`, `x-content-sha256`).
    #[default]
    Standard,
    /// Sign only the standard headers, used for binary uploads where the body
    /// is not hashed.
    ExcludeBody,
}

/// The parts of a request used to compute its signature.
#[derive(Clone, Copy, Debug)]
pub struct SigningRequest<'a> {
    method: &'a http::Method,
    url: &'a url::Url,
    headers: &'a HeaderMap,
    body: Option<&'a [u8]>,
    strategy: SigningStrategy,
}

impl<'a> SigningRequest<'a> {
    pub fn new(method: &'a http::Method, url: &'a url::Url, headers: &'a HeaderMap) -> Self {
        Self {
            method,
            url,
            headers,
            body: None,
            strategy: SigningStrategy::Standard,
        }
    }

    pub fn with_body(mut self, body: &'a [u8]) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_strategy(mut self, strategy: SigningStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn method(&self) -> &http::Method {
        self.method
    }

    pub fn url(&self) -> &url::Url {
        self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body
    }

    pub fn strategy(&self) -> SigningStrategy {
        self.strategy
    }
}

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents a [Credentials] used to sign requests to OCI services.
///
/// OCI client libraries use `Credentials` to compute the headers that
/// authenticate each request. The headers include the `authorization` header
/// with the signature, and any header covered by the signature that the
/// request does not already have (e.g. `date`, or `x-content-sha256`).
///
/// Applications can obtain `Credentials` from the configuration file with
/// [Builder], from explicit values with [api_key::Builder], or create
/// [anonymous::Builder] credentials for pre-authenticated requests.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: crate::credentials::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Computes the headers that authenticate `request`.
    pub async fn headers(&self, request: SigningRequest<'_>) -> Result<HeaderMap> {
        self.inner.headers(request).await
    }
}

/// Represents a [Credentials] used to sign requests to OCI services.
///
/// Implement this trait to mock the credentials in tests, or to sign requests
/// with a mechanism not supported by this crate.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Computes the headers that authenticate `request`.
    fn headers(
        &self,
        request: SigningRequest<'_>,
    ) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::{Result, SigningRequest};
    use http::HeaderMap;

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self, request: SigningRequest<'_>) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self, request: SigningRequest<'_>) -> Result<HeaderMap> {
            T::headers(self, request).await
        }
    }
}

/// A builder for the default credentials.
///
/// The default credentials use the API signing key configured in a profile of
/// the OCI configuration file. By default, that is the `DEFAULT` profile in
/// `~/.oci/config`.
///
/// # Example
/// ```no_run
/// # use oci_auth::credentials::Builder;
/// let credentials = Builder::default().with_profile("STAGING").build()?;
/// # Ok::<(), oci_auth::build_errors::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Builder {
    profile: Option<String>,
    config_file: Option<PathBuf>,
}

impl Builder {
    /// Selects the profile, the default is `DEFAULT`.
    pub fn with_profile<V: Into<String>>(mut self, v: V) -> Self {
        self.profile = Some(v.into());
        self
    }

    /// Overrides the location of the configuration file.
    pub fn with_config_file<V: Into<PathBuf>>(mut self, v: V) -> Self {
        self.config_file = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance signing with the profile's API key.
    pub fn build(self) -> BuildResult<Credentials> {
        let config = match self.config_file {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::load_default()?,
        };
        let name = self.profile.as_deref().unwrap_or(DEFAULT_PROFILE);
        let profile = config.profile(name)?;
        api_key::Builder::from_profile(&profile)?.build()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    type TestResult = anyhow::Result<()>;

    pub(crate) const PRIVATE_KEY: &str = include_str!("../testdata/private_key.pem");

    #[derive(Debug)]
    struct FakeProvider;

    impl CredentialsProvider for FakeProvider {
        async fn headers(&self, request: SigningRequest<'_>) -> Result<HeaderMap> {
            let mut headers = HeaderMap::new();
            let value = format!("test-only {}", request.method());
            headers.insert(
                http::header::AUTHORIZATION,
                http::HeaderValue::from_str(&value).map_err(crate::errors::non_retryable)?,
            );
            Ok(headers)
        }
    }

    #[tokio::test]
    async fn custom_provider() -> TestResult {
        let credentials = Credentials::from(FakeProvider);
        let url = url::Url::parse("https://dns.us-ashburn-1.oraclecloud.com/20180115/zones")?;
        let headers = HeaderMap::new();
        let request = SigningRequest::new(&http::Method::GET, &url, &headers);
        let got = credentials.headers(request).await?;
        assert_eq!(
            got.get(http::header::AUTHORIZATION),
            Some(&http::HeaderValue::from_static("test-only GET"))
        );
        Ok(())
    }

    #[test]
    fn signing_request() -> TestResult {
        let url = url::Url::parse("https://objectstorage.us-ashburn-1.oraclecloud.com/n/ns/b")?;
        let headers = HeaderMap::new();
        let request = SigningRequest::new(&http::Method::PUT, &url, &headers)
            .with_body(b"abc")
            .with_strategy(SigningStrategy::ExcludeBody);
        assert_eq!(request.method(), http::Method::PUT);
        assert_eq!(request.url(), &url);
        assert!(request.headers().is_empty());
        assert_eq!(request.body(), Some(b"abc".as_slice()));
        assert_eq!(request.strategy(), SigningStrategy::ExcludeBody);
        Ok(())
    }

    #[tokio::test]
    async fn default_builder_from_config() -> TestResult {
        let dir = tempfile::tempdir()?;
        let key_path = dir.path().join("key.pem");
        std::fs::write(&key_path, PRIVATE_KEY)?;
        let config_path = dir.path().join("config");
        let mut file = std::fs::File::create(&config_path)?;
        write!(
            file,
            "[DEFAULT]\nuser=ocid1.user.oc1..u\ntenancy=ocid1.tenancy.oc1..t\nfingerprint=aa:bb\nkey_file={}\n",
            key_path.display()
        )?;

        let credentials = Builder::default()
            .with_config_file(&config_path)
            .build()?;
        let url = url::Url::parse("https://dns.us-ashburn-1.oraclecloud.com/20180115/zones")?;
        let headers = HeaderMap::new();
        let got = credentials
            .headers(SigningRequest::new(&http::Method::GET, &url, &headers))
            .await?;
        let authorization = got
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(
            authorization.contains(r#"keyId="ocid1.tenancy.oc1..t/ocid1.user.oc1..u/aa:bb""#),
            "{authorization}"
        );
        Ok(())
    }

    #[test]
    fn default_builder_unknown_profile() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"[DEFAULT]\nregion=us-ashburn-1\n")?;
        let err = Builder::default()
            .with_config_file(file.path())
            .with_profile("MISSING")
            .build()
            .unwrap_err();
        assert!(err.is_unknown_profile(), "{err:?}");

        let err = Builder::default()
            .with_config_file(file.path())
            .build()
            .unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        Ok(())
    }
}

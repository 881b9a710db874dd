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

//! Anonymous credentials.
//!
//! These credentials do not sign the request. They are useful for accessing
//! objects through pre-authenticated requests, and in tests.

use crate::Result;
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{Credentials, SigningRequest};
use http::HeaderMap;
use std::sync::Arc;

#[derive(Debug)]
struct AnonymousCredentials;

/// A builder for creating anonymous credentials.
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> Credentials {
        Credentials {
            inner: Arc::new(AnonymousCredentials),
        }
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for AnonymousCredentials {
    async fn headers(&self, _request: SigningRequest<'_>) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn create_anonymous_credentials() -> TestResult {
        let creds = Builder::new().build();
        let url = url::Url::parse("https://objectstorage.us-ashburn-1.oraclecloud.com/p/abc/n/ns/b/bucket/o/obj")?;
        let headers = HeaderMap::new();
        let got = creds
            .headers(SigningRequest::new(&http::Method::GET, &url, &headers))
            .await?;
        assert!(got.is_empty(), "{got:?}");
        Ok(())
    }
}

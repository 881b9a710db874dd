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

//! Computes the OCI flavor of the draft-cavage HTTP signatures.

use crate::Result;
use crate::credentials::{SigningRequest, SigningStrategy};
use crate::errors::non_retryable;
use base64::{Engine, prelude::BASE64_STANDARD};
use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha2::{Digest, Sha256};

pub(crate) const X_CONTENT_SHA256: &str = "x-content-sha256";
const REQUEST_TARGET: &str = "(request-target)";
const HOST: &str = "host";
const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const DEFAULT_CONTENT_TYPE: &str = "application/json";

pub(crate) struct RequestSigner {
    key_id: String,
    signing_key: SigningKey<Sha256>,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("key_id", &self.key_id)
            .field("signing_key", &"[censored]")
            .finish()
    }
}

impl RequestSigner {
    pub(crate) fn new(key_id: String, private_key: RsaPrivateKey) -> Self {
        Self {
            key_id,
            signing_key: SigningKey::<Sha256>::new(private_key),
        }
    }

    pub(crate) fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Returns the `authorization` header, and any signed header missing from
    /// the request.
    pub(crate) fn sign(&self, request: SigningRequest<'_>) -> Result<HeaderMap> {
        let mut added = HeaderMap::new();
        let mut signed = Vec::new();

        let date = match header_str(request.headers(), DATE.as_str()) {
            Some(d) => d.to_string(),
            None => {
                let d = chrono::Utc::now().format(DATE_FORMAT).to_string();
                added.insert(DATE, header_value(&d)?);
                d
            }
        };
        signed.push((DATE.as_str(), date));
        signed.push((REQUEST_TARGET, request_target(&request)));
        signed.push((HOST, host(request.url())?));

        if covers_body(&request) {
            let body = request.body().unwrap_or_default();
            let length = body_header(&request, &mut added, CONTENT_LENGTH, || {
                body.len().to_string()
            })?;
            let content_type = body_header(&request, &mut added, CONTENT_TYPE, || {
                DEFAULT_CONTENT_TYPE.to_string()
            })?;
            let sha = body_header(
                &request,
                &mut added,
                HeaderName::from_static(X_CONTENT_SHA256),
                || BASE64_STANDARD.encode(Sha256::digest(body)),
            )?;
            signed.push((CONTENT_LENGTH.as_str(), length));
            signed.push((CONTENT_TYPE.as_str(), content_type));
            signed.push((X_CONTENT_SHA256, sha));
        }

        let signing_string = signed
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        let signature = self
            .signing_key
            .try_sign(signing_string.as_bytes())
            .map_err(non_retryable)?;
        let names = signed
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(" ");
        let authorization = format!(
            r#"Signature version="1",keyId="{}",algorithm="rsa-sha256",headers="{names}",signature="{}""#,
            self.key_id,
            BASE64_STANDARD.encode(signature.to_bytes())
        );
        let mut authorization = header_value(&authorization)?;
        authorization.set_sensitive(true);
        added.insert(AUTHORIZATION, authorization);
        tracing::trace!(key_id = %self.key_id, headers = %names, "signed request");
        Ok(added)
    }
}

fn covers_body(request: &SigningRequest<'_>) -> bool {
    request.strategy() == SigningStrategy::Standard
        && matches!(
            *request.method(),
            Method::POST | Method::PUT | Method::PATCH
        )
}

fn body_header<F>(
    request: &SigningRequest<'_>,
    added: &mut HeaderMap,
    name: HeaderName,
    default: F,
) -> Result<String>
where
    F: FnOnce() -> String,
{
    if let Some(v) = header_str(request.headers(), name.as_str()) {
        return Ok(v.to_string());
    }
    let v = default();
    added.insert(name, header_value(&v)?);
    Ok(v)
}

fn request_target(request: &SigningRequest<'_>) -> String {
    let url = request.url();
    let method = request.method().as_str().to_ascii_lowercase();
    match url.query() {
        Some(q) => format!("{method} {}?{q}", url.path()),
        None => format!("{method} {}", url.path()),
    }
}

fn host(url: &url::Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or_else(|| crate::errors::non_retryable_from_str(format!("missing host in {url}")))?;
    Ok(match url.port() {
        Some(p) => format!("{host}:{p}"),
        None => host.to_string(),
    })
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(non_retryable)
}

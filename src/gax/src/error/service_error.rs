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

use http::HeaderMap;

/// The name of the header carrying the service-assigned request id.
pub const OPC_REQUEST_ID: &str = "opc-request-id";

/// An error returned by an OCI service.
///
/// OCI services report errors as a JSON object with a `code` (e.g.
/// `NotAuthorizedOrNotFound`, `IncorrectState`, `TooManyRequests`) and a
/// human-readable `message`. Errors received via HTTP also carry the status
/// code, and the headers. The `opc-request-id` header is the most useful
/// information when contacting support.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServiceError {
    code: String,
    message: String,
    http_status_code: Option<u16>,
    headers: Option<HeaderMap>,
}

impl ServiceError {
    /// Creates a new service error with the given code and message.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::error::ServiceError;
    /// let e = ServiceError::new("NotAuthorizedOrNotFound", "zone not found");
    /// assert_eq!(e.code(), "NotAuthorizedOrNotFound");
    /// ```
    pub fn new<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// The service-defined error code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        self.http_status_code
    }

    /// The response headers, if any, associated with this error.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    /// The `opc-request-id` assigned by the service, if any.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|h| h.get(OPC_REQUEST_ID))
            .and_then(|v| v.to_str().ok())
    }

    /// Sets the HTTP status code for this service error.
    pub fn with_http_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        self.http_status_code = Some(v.into());
        self
    }

    /// Sets the headers for this error.
    pub fn with_headers<T: Into<HeaderMap>>(mut self, v: T) -> Self {
        self.headers = Some(v.into());
        self
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    code: String,
    #[serde(default)]
    message: String,
}

impl TryFrom<&bytes::Bytes> for ServiceError {
    type Error = serde_json::Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let body = serde_json::from_slice::<ErrorBody>(value)?;
        Ok(Self::new(body.code, body.message))
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the service returned an error: code={}, message={}",
            self.code, self.message
        )?;
        if let Some(c) = &self.http_status_code {
            write!(f, ", http_status_code={c}")?;
        }
        if let Some(id) = self.opc_request_id() {
            write!(f, ", opc-request-id={id}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use serde_json::json;

    #[test]
    fn new() {
        let error = ServiceError::new("IncorrectState", "the zone is being updated");
        assert_eq!(error.code(), "IncorrectState");
        assert_eq!(error.message(), "the zone is being updated");
        assert_eq!(error.http_status_code(), None);
        assert!(error.headers().is_none(), "{error:?}");
        assert!(error.opc_request_id().is_none(), "{error:?}");

        let got = format!("{error}");
        assert!(got.contains("IncorrectState"), "{got}");
        assert!(!got.contains("http_status_code"), "{got}");
    }

    #[test]
    fn with_metadata() {
        let mut headers = HeaderMap::new();
        headers.insert(OPC_REQUEST_ID, HeaderValue::from_static("ABC/123"));
        let error = ServiceError::new("NotAuthorizedOrNotFound", "missing")
            .with_http_status_code(404_u16)
            .with_headers(headers.clone());
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.headers(), Some(&headers));
        assert_eq!(error.opc_request_id(), Some("ABC/123"));

        let got = format!("{error}");
        assert!(got.contains("http_status_code=404"), "{got}");
        assert!(got.contains("opc-request-id=ABC/123"), "{got}");
    }

    #[test]
    fn try_from_payload() -> anyhow::Result<()> {
        let payload = json!({"code": "TooManyRequests", "message": "slow down"}).to_string();
        let payload = bytes::Bytes::from(payload);
        let error = ServiceError::try_from(&payload)?;
        assert_eq!(error, ServiceError::new("TooManyRequests", "slow down"));
        Ok(())
    }

    #[test]
    fn try_from_payload_without_message() -> anyhow::Result<()> {
        let payload = bytes::Bytes::from_static(br#"{"code": "InternalServerError"}"#);
        let error = ServiceError::try_from(&payload)?;
        assert_eq!(error.code(), "InternalServerError");
        assert_eq!(error.message(), "");
        Ok(())
    }

    #[test]
    fn try_from_bad_payload() {
        let payload = bytes::Bytes::from_static(b"<html>bad gateway</html>");
        let error = ServiceError::try_from(&payload);
        assert!(error.is_err(), "{error:?}");
    }
}

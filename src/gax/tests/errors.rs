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
    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue};
    use oci_gax::error::{Error, ServiceError};
    use oci_gax::retry_policy::DefaultRetryable;
    use std::error::Error as _;
    use test_case::test_case;

    #[test]
    fn service_error_from_body() -> anyhow::Result<()> {
        let body = Bytes::from_static(
            br#"{"code": "NotAuthorizedOrNotFound", "message": "zone not found"}"#,
        );
        let mut headers = HeaderMap::new();
        headers.insert("opc-request-id", HeaderValue::from_static("req-42"));
        let status = ServiceError::try_from(&body)?
            .with_http_status_code(404_u16)
            .with_headers(headers);
        let error = Error::service(status);
        assert!(error.is_not_found(), "{error:?}");
        let status = error.status().expect("a service error");
        assert_eq!(status.code(), "NotAuthorizedOrNotFound");
        assert_eq!(status.message(), "zone not found");
        assert_eq!(status.opc_request_id(), Some("req-42"));
        assert!(error.to_string().contains("zone not found"), "{error}");
        Ok(())
    }

    #[test]
    fn http_error_without_body() {
        let error = Error::http(502, HeaderMap::new(), Bytes::from_static(b"<html>bad gateway</html>"));
        assert_eq!(error.http_status_code(), Some(502));
        assert!(error.status().is_none(), "{error:?}");
        assert_eq!(error.http_payload().map(|b| b.as_ref()), Some(b"<html>bad gateway</html>".as_ref()));
        assert!(DefaultRetryable::is_transient(&error), "{error:?}");
    }

    #[test]
    fn binding_error() {
        let error = Error::binding("missing required parameter zoneNameOrId");
        assert!(error.is_binding(), "{error:?}");
        assert!(!error.is_not_found(), "{error:?}");
        assert_eq!(error.http_status_code(), None);
        assert!(error.source().is_some(), "{error:?}");
    }

    #[test_case(429, true; "too many requests")]
    #[test_case(500, true; "internal")]
    #[test_case(501, false; "not implemented")]
    #[test_case(503, true; "unavailable")]
    #[test_case(400, false; "bad request")]
    #[test_case(404, false; "not found")]
    fn transient_status(code: u16, want: bool) {
        let error = Error::service(ServiceError::new("Code", "msg").with_http_status_code(code));
        assert_eq!(DefaultRetryable::is_transient(&error), want, "{error:?}");
    }

    #[test]
    fn incorrect_state_conflict() {
        let retryable = Error::service(
            ServiceError::new("IncorrectState", "busy").with_http_status_code(409_u16),
        );
        assert!(DefaultRetryable::is_transient(&retryable), "{retryable:?}");
        let conflict = Error::service(
            ServiceError::new("Conflict", "etag mismatch").with_http_status_code(409_u16),
        );
        assert!(!DefaultRetryable::is_transient(&conflict), "{conflict:?}");
    }
}

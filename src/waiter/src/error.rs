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

use gax::error::Error;

/// The mutating call succeeded, but waiting for the lifecycle state failed.
///
/// Composite operations return this error when the wait times out, or when
/// polling the resource fails with an error that does not recover. The error
/// holds the response of the mutating call, so applications can find what was
/// created or modified.
///
/// # Example
/// ```
/// # use oci_waiter::CompositeError;
/// fn handle(e: CompositeError<String>) {
///     if e.is_timeout() {
///         println!("{} is still changing, try again later", e.partial());
///     } else {
///         println!("cannot get the state of {}: {}", e.partial(), e.error());
///     }
/// }
/// ```
#[derive(thiserror::Error, Debug)]
#[error("the operation succeeded, but waiting for the target lifecycle state failed: {source}")]
pub struct CompositeError<P> {
    partial: P,
    #[source]
    source: Error,
}

impl<P> CompositeError<P> {
    pub fn new(partial: P, source: Error) -> Self {
        Self { partial, source }
    }

    /// The response of the mutating call.
    pub fn partial(&self) -> &P {
        &self.partial
    }

    /// The error that stopped the wait.
    pub fn error(&self) -> &Error {
        &self.source
    }

    /// If true, the resource did not reach a target state in time.
    pub fn is_timeout(&self) -> bool {
        self.source.is_timeout()
    }

    pub fn into_parts(self) -> (P, Error) {
        (self.partial, self.source)
    }
}

/// The error returned by composite operations.
///
/// A composite operation makes a mutating call and then waits for a lifecycle
/// state. If the mutating call fails there is no partial result, and the
/// error is [OperationError::Request]. If the wait fails, the error is
/// [OperationError::Wait] and holds the response of the mutating call.
///
/// # Example
/// ```
/// # use oci_waiter::OperationError;
/// fn handle(e: OperationError<String>) {
///     match e.partial() {
///         None => println!("nothing changed: {e}"),
///         Some(p) => println!("{p} changed, but the wait failed: {e}"),
///     }
/// }
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum OperationError<P> {
    /// The mutating call failed.
    #[error(transparent)]
    Request(#[from] Error),
    /// The mutating call succeeded, waiting for the lifecycle state failed.
    #[error(transparent)]
    Wait(#[from] CompositeError<P>),
}

impl<P> OperationError<P> {
    /// The response of the mutating call, if it succeeded.
    pub fn partial(&self) -> Option<&P> {
        match self {
            Self::Request(_) => None,
            Self::Wait(e) => Some(e.partial()),
        }
    }

    /// The underlying error, from the mutating call or from the wait.
    pub fn error(&self) -> &Error {
        match self {
            Self::Request(e) => e,
            Self::Wait(e) => e.error(),
        }
    }

    /// If true, the mutation succeeded but the resource did not reach a
    /// target state in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Wait(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::ServiceError;
    use std::error::Error as _;

    #[test]
    fn timeout() {
        let e = CompositeError::new("zone", Error::timeout("not yet"));
        assert!(e.is_timeout(), "{e:?}");
        assert_eq!(e.partial(), &"zone");
        assert!(e.to_string().contains("not yet"), "{e}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(source.is_some_and(|e| e.is_timeout()), "{e:?}");
    }

    #[test]
    fn service() {
        let status = ServiceError::new("NotAuthorizedOrNotFound", "gone").with_http_status_code(404_u16);
        let e = CompositeError::new(42, Error::service(status));
        assert!(!e.is_timeout(), "{e:?}");
        assert!(e.error().is_not_found(), "{e:?}");
        let (partial, error) = e.into_parts();
        assert_eq!(partial, 42);
        assert_eq!(error.http_status_code(), Some(404));
    }

    #[test]
    fn operation_request() {
        let e = OperationError::<String>::from(Error::timeout("slow create"));
        assert!(e.partial().is_none(), "{e:?}");
        assert!(e.error().is_timeout(), "{e:?}");
        // A timeout in the mutating call is not a wait timeout.
        assert!(!e.is_timeout(), "{e:?}");
    }

    #[test]
    fn operation_wait() {
        let wait = CompositeError::new("zone".to_string(), Error::timeout("not yet"));
        let e = OperationError::from(wait);
        assert_eq!(e.partial().map(String::as_str), Some("zone"));
        assert!(e.is_timeout(), "{e:?}");
        assert!(e.to_string().contains("not yet"), "{e}");
    }
}

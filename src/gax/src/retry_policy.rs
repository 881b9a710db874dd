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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries can automatically retry operations when they fail due
//! to transient errors and the operation is idempotent, that is, it is safe to
//! perform the operation more than once. Create operations become idempotent
//! once they carry an `opc-retry-token`.
//!
//! Clients do not retry by default: without a retry policy each operation is
//! attempted exactly once. Applications configure a retry policy on the client
//! builder, or on each request.
//!
//! # Example
//! ```
//! # use oci_gax::retry_policy::*;
//! use std::time::Duration;
//! // Retry transient failures for at most 30 seconds or at most 5 attempts:
//! // whichever limit is reached first stops the retry loop.
//! let policy = DefaultRetryable
//!     .with_time_limit(Duration::from_secs(30))
//!     .with_attempt_limit(5);
//! ```

use crate::error::Error;
use crate::retry_result::RetryResult;
use std::error::Error as _;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method is called after the first attempt, so the value
    ///   is always non-zero.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many more
    ///   errors are retryable on idempotent operations.
    /// * `error` - the last error when attempting the request.
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next request
    /// timeout. For policies that are not time based this returns `None`.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This method is called before
    ///   the first attempt, so the first value is zero.
    fn remaining_time(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
    ) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// # Example
    /// ```
    /// # use oci_gax::retry_policy::*;
    /// # use oci_gax::error::Error;
    /// use std::time::{Duration, Instant};
    /// let policy = AlwaysRetry.with_time_limit(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// assert!(policy.on_error(start, 1, true, transient_error()).is_exhausted());
    ///
    /// fn transient_error() -> Error { Error::io("simulated") }
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// The policy passes through the results from the inner policy as long as
    /// `attempt_count < maximum_attempts`. Once the maximum number of attempts
    /// is reached, the policy returns [Exhausted][RetryResult::Exhausted] if
    /// the inner policy returns [Continue][RetryResult::Continue]. A call that
    /// always fails is attempted exactly `maximum_attempts` times.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::retry_policy::*;
    /// # use oci_gax::error::Error;
    /// use std::time::Instant;
    /// let policy = AlwaysRetry.with_attempt_limit(3);
    /// assert!(policy.on_error(Instant::now(), 1, true, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 2, true, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, true, transient_error()).is_exhausted());
    ///
    /// fn transient_error() -> Error { Error::io("simulated") }
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// The default classification of transient errors in OCI services.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// Only idempotent operations are retried. The retryable failures are:
/// - I/O errors, where the request may not have reached the service.
/// - Transient authentication errors, which happen before the request is sent.
/// - HTTP `429 Too Many Requests`.
/// - HTTP `5xx` errors, except `501 Not Implemented`.
/// - HTTP `409 Conflict` with the `IncorrectState` code, the resource is busy
///   with another operation.
///
/// # Example
/// ```
/// # use oci_gax::retry_policy::*;
/// # use oci_gax::error::{Error, ServiceError};
/// use std::time::Instant;
/// let policy = DefaultRetryable;
/// assert!(policy.on_error(Instant::now(), 1, true, throttled()).is_continue());
/// assert!(policy.on_error(Instant::now(), 1, false, throttled()).is_permanent());
///
/// fn throttled() -> Error {
///     Error::service(ServiceError::new("TooManyRequests", "slow down").with_http_status_code(429_u16))
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DefaultRetryable;

impl DefaultRetryable {
    /// Returns true if the error is transient, regardless of idempotency.
    pub fn is_transient(error: &Error) -> bool {
        if error.is_io() || error.is_timeout() {
            return true;
        }
        if error.is_authentication() {
            return error
                .source()
                .and_then(|e| e.downcast_ref::<crate::error::CredentialsError>())
                .is_some_and(|e| e.is_transient());
        }
        match error.http_status_code() {
            Some(429) => true,
            Some(501) => false,
            Some(code) if (500..600).contains(&code) => true,
            Some(409) => error
                .status()
                .is_some_and(|s| s.code() == INCORRECT_STATE),
            _ => false,
        }
    }
}

const INCORRECT_STATE: &str = "IncorrectState";

impl RetryPolicy for DefaultRetryable {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if idempotent && Self::is_transient(&error) {
            RetryResult::Continue(error)
        } else {
            RetryResult::Permanent(error)
        }
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// The policy retries all errors. This may be useful if the service guarantees
/// idempotency, maybe through the use of `opc-retry-token` values.
///
/// # Example
/// ```
/// # use oci_gax::retry_policy::*;
/// # use oci_gax::error::{Error, ServiceError};
/// use std::time::Instant;
/// let policy = AlwaysRetry.with_attempt_limit(3);
/// assert!(policy.on_error(Instant::now(), 1, false, permanent_error()).is_continue());
///
/// fn permanent_error() -> Error {
///     Error::service(ServiceError::new("NotAuthorizedOrNotFound", "uh-oh").with_http_status_code(404_u16))
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that never retries.
///
/// This policy is useful when the client already has (or may already have) a
/// retry policy configured, and you want to avoid retrying a particular
/// request.
///
/// # Example
/// ```
/// # use oci_gax::retry_policy::*;
/// # use oci_gax::error::Error;
/// use std::time::Instant;
/// let policy = NeverRetry;
/// assert!(policy.on_error(Instant::now(), 1, true, Error::io("transient")).is_exhausted());
/// ```
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy driven by an application-provided predicate.
///
/// The predicate classifies each failure: `true` means the failure is
/// retryable. The operation's idempotency is ignored, the predicate owns the
/// decision. This policy must be decorated to limit the number of retry
/// attempts or the duration of the retry loop.
///
/// # Example
/// ```
/// # use oci_gax::retry_policy::*;
/// # use oci_gax::error::Error;
/// use std::time::Instant;
/// let policy = RetryIf::new(|e: &Error| e.http_status_code() == Some(503)).with_attempt_limit(4);
/// assert!(policy.on_error(Instant::now(), 1, false, Error::io("transient")).is_permanent());
/// ```
pub struct RetryIf<F> {
    predicate: F,
}

impl<F> RetryIf<F>
where
    F: Fn(&Error) -> bool + Send + Sync,
{
    /// Creates a new policy from the given predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> std::fmt::Debug for RetryIf<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryIf").finish_non_exhaustive()
    }
}

impl<F> RetryPolicy for RetryIf<F>
where
    F: Fn(&Error) -> bool + Send + Sync,
{
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if (self.predicate)(&error) {
            RetryResult::Continue(error)
        } else {
            RetryResult::Permanent(error)
        }
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. While the time spent in the retry loop (including time in backoff)
/// is less than the prescribed duration the `on_error()` method returns the
/// results of the inner policy. After that time it returns
/// [Exhausted][RetryResult::Exhausted] if the inner policy returns
/// [Continue][RetryResult::Continue].
///
/// The `remaining_time()` function returns the remaining time. This is always
/// [Duration::ZERO] once or after the policy's deadline is reached.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [DefaultRetryable].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = DefaultRetryable>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: DefaultRetryable,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(
        &self,
        start: std::time::Instant,
        count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(start, count, idempotent, error) {
            RetryResult::Continue(e) if std::time::Instant::now() >= start + self.maximum_duration => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time(&self, start: std::time::Instant, count: u32) -> Option<Duration> {
        let deadline = start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        if let Some(inner) = self.inner.remaining_time(start, count) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// The policy passes through the results from the inner policy as long as
/// `attempt_count < maximum_attempts`. However, once the maximum number of
/// attempts is reached, the policy replaces any
/// [Continue][RetryResult::Continue] result with
/// [Exhausted][RetryResult::Exhausted].
///
/// # Parameters
/// * `P` - the inner retry policy.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = DefaultRetryable>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: DefaultRetryable,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        start: std::time::Instant,
        count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(start, count, idempotent, error) {
            RetryResult::Continue(e) if count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time(&self, start: std::time::Instant, count: u32) -> Option<Duration> {
        self.inner.remaining_time(start, count)
    }
}

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

//! Defines the types for polling error policies.
//!
//! # Example
//! ```
//! # use oci_gax::polling_error_policy::*;
//! use std::time::Duration;
//! // Poll for at most 15 minutes or at most 50 attempts: whichever limit is
//! // reached first stops the polling loop.
//! let policy = TransientOnly
//!     .with_time_limit(Duration::from_secs(15 * 60))
//!     .with_attempt_limit(50);
//! ```
//!
//! The wait-for-state helpers poll a resource until it reaches a lifecycle
//! state. They need to distinguish between transient and permanent errors
//! while polling, and provide a mechanism to limit the polling loop duration.
//!
//! To configure the default polling error policy for a client, use
//! [ClientBuilder::with_polling_error_policy].
//!
//! [ClientBuilder::with_polling_error_policy]: crate::client_builder::ClientBuilder::with_polling_error_policy

use crate::error::Error;
use crate::retry_policy::DefaultRetryable;
use crate::retry_result::RetryResult;
use std::sync::Arc;

/// Determines how errors are handled in the polling loop.
///
/// Implementations of this trait determine if polling errors may resolve in
/// future attempts, and for how long the polling loop may continue.
pub trait PollingErrorPolicy: Send + Sync + std::fmt::Debug {
    /// Query the polling policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the polling loop started.
    /// * `attempt_count` - the number of poll attempts, always non-zero.
    /// * `error` - the last error when polling the resource.
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        error: Error,
    ) -> RetryResult;

    /// Called when the resource is successfully polled, but it has not reached
    /// any of the target states.
    ///
    /// Returning an error stops the polling loop.
    fn on_in_progress(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _resource_name: &str,
    ) -> Option<Error> {
        None
    }
}

/// A helper type to use [PollingErrorPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingErrorPolicyArg(pub(crate) Arc<dyn PollingErrorPolicy>);

impl<T> std::convert::From<T> for PollingErrorPolicyArg
where
    T: PollingErrorPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn PollingErrorPolicy>> for PollingErrorPolicyArg {
    fn from(value: Arc<dyn PollingErrorPolicy>) -> Self {
        Self(value)
    }
}

impl From<PollingErrorPolicyArg> for Arc<dyn PollingErrorPolicy> {
    fn from(value: PollingErrorPolicyArg) -> Arc<dyn PollingErrorPolicy> {
        value.0
    }
}

/// Extension trait for [PollingErrorPolicy]
pub trait PollingErrorPolicyExt: PollingErrorPolicy + Sized {
    /// Decorate a [PollingErrorPolicy] to limit the total elapsed time in the
    /// polling loop.
    ///
    /// While the time spent in the polling loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// # Example
    /// ```
    /// # use oci_gax::*;
    /// use polling_error_policy::*;
    /// use std::time::{Duration, Instant};
    /// let policy = TransientOnly.with_time_limit(Duration::from_secs(10)).with_attempt_limit(3);
    /// let attempt_count = 4;
    /// assert!(policy.on_error(Instant::now(), attempt_count, transient_error()).is_exhausted());
    ///
    /// use oci_gax::error::Error;
    /// fn transient_error() -> Error { Error::io("connection reset") }
    /// ```
    fn with_time_limit(self, maximum_duration: std::time::Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [PollingErrorPolicy] to limit the number of poll attempts.
    ///
    /// The policy passes through the results from the inner policy as long as
    /// `attempt_count < maximum_attempts`. Once the maximum number of attempts
    /// is reached, the policy returns [Exhausted][RetryResult::Exhausted] if
    /// the inner policy returns [Continue][RetryResult::Continue], and passes
    /// the inner policy result otherwise.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::*;
    /// use polling_error_policy::*;
    /// use std::time::Instant;
    /// let policy = TransientOnly.with_attempt_limit(3);
    /// assert!(policy.on_error(Instant::now(), 1, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 2, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, transient_error()).is_exhausted());
    ///
    /// use oci_gax::error::Error;
    /// fn transient_error() -> Error { Error::io("connection reset") }
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: PollingErrorPolicy> PollingErrorPolicyExt for T {}

/// A polling policy that continues only on transient errors.
///
/// This policy must be decorated to limit the number of polling attempts or the
/// duration of the polling loop.
///
/// Polling is always idempotent, the policy uses the same classification as
/// [DefaultRetryable] for idempotent operations.
///
/// # Example
/// ```
/// # use oci_gax::*;
/// # use oci_gax::polling_error_policy::*;
/// # use oci_gax::error::{Error, ServiceError};
/// use std::time::Instant;
/// let policy = TransientOnly;
/// assert!(policy.on_error(Instant::now(), 1, Error::io("reset")).is_continue());
/// assert!(policy.on_error(Instant::now(), 1, not_found()).is_permanent());
///
/// fn not_found() -> Error {
///     Error::service(ServiceError::new("NotAuthorizedOrNotFound", "gone").with_http_status_code(404_u16))
/// }
/// ```
#[derive(Clone, Debug)]
pub struct TransientOnly;

impl PollingErrorPolicy for TransientOnly {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        error: Error,
    ) -> RetryResult {
        if DefaultRetryable::is_transient(&error) {
            RetryResult::Continue(error)
        } else {
            RetryResult::Permanent(error)
        }
    }
}

/// A polling policy that continues on any error.
///
/// This policy must be decorated to limit the number of polling attempts or the
/// duration of the polling loop.
///
/// # Example
/// ```
/// # use oci_gax::*;
/// # use oci_gax::polling_error_policy::*;
/// # use oci_gax::error::{Error, ServiceError};
/// use std::time::Instant;
/// let policy = AlwaysContinue;
/// assert!(policy.on_error(Instant::now(), 1, permanent_error()).is_continue());
///
/// fn permanent_error() -> Error {
///     Error::service(ServiceError::new("InvalidParameter", "bad").with_http_status_code(400_u16))
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AlwaysContinue;

impl PollingErrorPolicy for AlwaysContinue {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A polling policy decorator that limits the total time in the polling loop.
///
/// This policy decorates an inner policy and limits the duration of polling
/// loops. While the time spent in the polling loop (including time in backoff)
/// is less than the prescribed duration the `on_error()` method returns the
/// results of the inner policy. After that time it returns
/// [Exhausted][RetryResult::Exhausted] if the inner policy returns
/// [Continue][RetryResult::Continue].
///
/// # Parameters
/// * `P` - the inner polling policy, defaults to [TransientOnly].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = TransientOnly>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_duration: std::time::Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::*;
    /// # use oci_gax::polling_error_policy::*;
    /// use std::time::{Duration, Instant};
    /// let policy = LimitedElapsedTime::new(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// assert!(policy.on_error(start, 1, transient_error()).is_exhausted());
    ///
    /// use oci_gax::error::Error;
    /// fn transient_error() -> Error { Error::io("connection reset") }
    /// ```
    pub fn new(maximum_duration: std::time::Duration) -> Self {
        Self {
            inner: TransientOnly,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: std::time::Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn in_progress_impl(&self, start: std::time::Instant, resource_name: &str) -> Option<Error> {
        let elapsed = start.elapsed();
        if elapsed < self.maximum_duration {
            return None;
        }
        Some(Error::exhausted(Exhausted::new(
            resource_name,
            "elapsed time",
            format!("{elapsed:?}"),
            format!("{:?}", self.maximum_duration),
        )))
    }
}

impl<P> PollingErrorPolicy for LimitedElapsedTime<P>
where
    P: PollingErrorPolicy + 'static,
{
    fn on_error(&self, start: std::time::Instant, count: u32, error: Error) -> RetryResult {
        match self.inner.on_error(start, count, error) {
            RetryResult::Continue(e) if start.elapsed() >= self.maximum_duration => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn on_in_progress(
        &self,
        start: std::time::Instant,
        count: u32,
        resource_name: &str,
    ) -> Option<Error> {
        self.inner
            .on_in_progress(start, count, resource_name)
            .or_else(|| self.in_progress_impl(start, resource_name))
    }
}

/// A polling policy decorator that limits the number of attempts.
///
/// The policy passes through the results from the inner policy as long as
/// `attempt_count < maximum_attempts`. However, once the maximum number of
/// attempts is reached, the policy replaces any
/// [Continue][RetryResult::Continue] result with
/// [Exhausted][RetryResult::Exhausted].
///
/// # Parameters
/// * `P` - the inner polling policy.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = TransientOnly>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: TransientOnly,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    /// Creates a new instance with a custom inner policy.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::polling_error_policy::*;
    /// # use oci_gax::error::{Error, ServiceError};
    /// use std::time::Instant;
    /// let policy = LimitedAttemptCount::custom(AlwaysContinue, 2);
    /// assert!(policy.on_error(Instant::now(), 1, permanent_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 2, permanent_error()).is_exhausted());
    ///
    /// fn permanent_error() -> Error { Error::service(ServiceError::new("InvalidParameter", "bad")) }
    /// ```
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }

    fn in_progress_impl(&self, count: u32, resource_name: &str) -> Option<Error> {
        if count < self.maximum_attempts {
            return None;
        }
        Some(Error::exhausted(Exhausted::new(
            resource_name,
            "attempt count",
            count.to_string(),
            self.maximum_attempts.to_string(),
        )))
    }
}

impl<P> PollingErrorPolicy for LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    fn on_error(&self, start: std::time::Instant, count: u32, error: Error) -> RetryResult {
        match self.inner.on_error(start, count, error) {
            RetryResult::Continue(e) if count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn on_in_progress(
        &self,
        start: std::time::Instant,
        count: u32,
        resource_name: &str,
    ) -> Option<Error> {
        self.inner
            .on_in_progress(start, count, resource_name)
            .or_else(|| self.in_progress_impl(count, resource_name))
    }
}

/// Indicates that a polling loop has been exhausted.
#[derive(Debug)]
pub struct Exhausted {
    resource_name: String,
    limit_name: &'static str,
    value: String,
    limit: String,
}

impl Exhausted {
    pub fn new(
        resource_name: &str,
        limit_name: &'static str,
        value: String,
        limit: String,
    ) -> Self {
        Self {
            resource_name: resource_name.to_string(),
            limit_name,
            value,
            limit,
        }
    }
}

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "polling loop for {} exhausted, {} value ({}) exceeds limit ({})",
            self.resource_name, self.limit_name, self.value, self.limit
        )
    }
}

impl std::error::Error for Exhausted {}

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

//! Per-request overrides for OCI client calls.
//!
//! Each client method returns a request builder. Besides the request fields,
//! the builder accepts overrides for the client defaults: the retry and
//! backoff policies, the per-attempt timeout, the idempotency of the call, and
//! the policies used while waiting for a resource state. See
//! [RequestOptionsBuilder].

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// The overrides attached to one OCI request.
///
/// Stubs receive this type with each call, mocks can inspect it.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl RequestOptions {
    /// Whether the call is retried as idempotent, `None` if not decided yet.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Marks the call as idempotent, or not.
    ///
    /// Retry policies see this flag with each error. Without an override,
    /// `GET`, `PUT`, `HEAD` and `DELETE` calls are idempotent, as is any call
    /// carrying an `opc-retry-token`.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    // Used by the transports, an explicit override wins.
    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Sets a prefix for the `user-agent` header.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// The `user-agent` prefix, if any.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Limits the duration of each attempt.
    ///
    /// The retry policy bounds the total time across attempts.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// The per-attempt timeout, if any.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// The retry policy override, if any.
    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Overrides the client retry policy.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    /// The backoff policy override, if any.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Overrides the delay between retry attempts.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    /// The error policy used by `send_and_wait_for_state()`, if any.
    pub fn polling_error_policy(&self) -> &Option<Arc<dyn PollingErrorPolicy>> {
        &self.polling_error_policy
    }

    /// Overrides which errors a state wait tolerates.
    pub fn set_polling_error_policy<V: Into<PollingErrorPolicyArg>>(&mut self, v: V) {
        self.polling_error_policy = Some(v.into().0);
    }

    /// The delay policy used by `send_and_wait_for_state()`, if any.
    pub fn polling_backoff_policy(&self) -> &Option<Arc<dyn PollingBackoffPolicy>> {
        &self.polling_backoff_policy
    }

    /// Overrides the delay between state checks.
    pub fn set_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(&mut self, v: V) {
        self.polling_backoff_policy = Some(v.into().0);
    }
}

/// Chainable overrides, available on every request builder.
///
/// ```
/// # use oci_gax::options::RequestOptionsBuilder;
/// # use oci_gax::retry_policy::LimitedAttemptCount;
/// # fn sample<B: RequestOptionsBuilder>(builder: B) -> B {
/// builder
///     .with_idempotency(true)
///     .with_attempt_timeout(std::time::Duration::from_secs(10))
///     .with_retry_policy(LimitedAttemptCount::new(3))
/// # }
/// ```
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// See [RequestOptions::set_idempotency].
    fn with_idempotency(self, v: bool) -> Self;

    /// See [RequestOptions::set_user_agent].
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// See [RequestOptions::set_attempt_timeout].
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// See [RequestOptions::set_retry_policy].
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// See [RequestOptions::set_backoff_policy].
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// See [RequestOptions::set_polling_error_policy].
    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(self, v: V) -> Self;

    /// See [RequestOptions::set_polling_backoff_policy].
    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! Hooks for the generated clients. Not a stable API.
    use super::RequestOptions;

    /// Gives [super::RequestOptionsBuilder] access to a builder's options.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_error_policy(v);
        self
    }

    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_backoff_policy(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::polling_error_policy::TransientOnly;
    use crate::retry_policy::LimitedAttemptCount;
    use test_case::test_case;

    #[derive(Debug, Default)]
    struct DeleteZone {
        options: RequestOptions,
    }
    impl RequestBuilder for DeleteZone {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    #[test]
    fn defaults() {
        let opts = RequestOptions::default();
        assert_eq!(opts.idempotent(), None);
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);
        assert!(opts.retry_policy().is_none(), "{opts:?}");
        assert!(opts.backoff_policy().is_none(), "{opts:?}");
        assert!(opts.polling_error_policy().is_none(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_none(), "{opts:?}");
    }

    #[test_case(true, false; "explicit true")]
    #[test_case(false, true; "explicit false")]
    fn explicit_idempotency_wins(explicit: bool, default: bool) {
        let mut opts = RequestOptions::default();
        opts.set_idempotency(explicit);
        let opts = set_default_idempotency(opts, default);
        assert_eq!(opts.idempotent(), Some(explicit));
    }

    #[test_case(true)]
    #[test_case(false)]
    fn default_idempotency(default: bool) {
        let opts = set_default_idempotency(RequestOptions::default(), default);
        assert_eq!(opts.idempotent(), Some(default));
    }

    #[test]
    fn setters() {
        let mut opts = RequestOptions::default();
        opts.set_user_agent("oci-cli/3.0");
        opts.set_attempt_timeout(Duration::from_secs(30));
        opts.set_retry_policy(LimitedAttemptCount::new(3));
        opts.set_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        opts.set_polling_error_policy(TransientOnly);
        opts.set_polling_backoff_policy(ExponentialBackoffBuilder::new().clamp());

        assert_eq!(opts.user_agent().as_deref(), Some("oci-cli/3.0"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(30)));
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        assert!(opts.polling_error_policy().is_some(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
    }

    #[test]
    fn chained_builder() -> anyhow::Result<()> {
        let mut builder = DeleteZone::default()
            .with_idempotency(false)
            .with_user_agent("oci-cli/3.0")
            .with_attempt_timeout(Duration::from_secs(30))
            .with_retry_policy(LimitedAttemptCount::new(3))
            .with_backoff_policy(ExponentialBackoffBuilder::new().build()?)
            .with_polling_error_policy(TransientOnly)
            .with_polling_backoff_policy(ExponentialBackoffBuilder::new().build()?);

        let opts = builder.request_options();
        assert_eq!(opts.idempotent(), Some(false));
        assert_eq!(opts.user_agent().as_deref(), Some("oci-cli/3.0"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(30)));
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        assert!(opts.polling_error_policy().is_some(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
        Ok(())
    }
}

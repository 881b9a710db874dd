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

use gax::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use gax::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg, TransientOnly};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_INITIAL_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(30);
const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(1200);

/// Configures how [wait_until][crate::wait_until] polls a resource.
///
/// The interval between polls starts at `initial_interval` and doubles after
/// each poll, up to `max_interval`. The wait stops with a timeout error if the
/// next poll would start after `max_wait`.
///
/// # Example
/// ```
/// # use oci_waiter::Waiter;
/// use std::time::Duration;
/// let waiter = Waiter::new()
///     .with_initial_interval(Duration::from_secs(2))
///     .with_max_interval(Duration::from_secs(10))
///     .with_max_wait(Duration::from_secs(300));
/// assert_eq!(waiter.max_wait(), Duration::from_secs(300));
/// ```
#[derive(Clone, Debug)]
pub struct Waiter {
    initial_interval: Duration,
    max_interval: Duration,
    max_wait: Duration,
    succeed_on_not_found: bool,
    error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl Default for Waiter {
    fn default() -> Self {
        Self {
            initial_interval: DEFAULT_INITIAL_INTERVAL,
            max_interval: DEFAULT_MAX_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
            succeed_on_not_found: false,
            error_policy: None,
            backoff_policy: None,
        }
    }
}

impl Waiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The interval before the second poll.
    pub fn with_initial_interval<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_interval = v.into();
        self
    }

    /// The maximum interval between polls.
    pub fn with_max_interval<V: Into<Duration>>(mut self, v: V) -> Self {
        self.max_interval = v.into();
        self
    }

    /// The maximum time waiting for the resource.
    pub fn with_max_wait<V: Into<Duration>>(mut self, v: V) -> Self {
        self.max_wait = v.into();
        self
    }

    /// Complete the wait when the resource is not found.
    ///
    /// Deleted resources eventually disappear, composite delete operations
    /// set this to true.
    pub fn with_succeed_on_not_found(mut self, v: bool) -> Self {
        self.succeed_on_not_found = v;
        self
    }

    /// Decides if the wait continues after a failed poll.
    ///
    /// The default policy continues only after transient errors.
    pub fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.error_policy = Some(v.into().into());
        self
    }

    /// Replaces the doubling interval between polls.
    ///
    /// `max_interval` does not apply to the intervals returned by this
    /// policy. `max_wait` still does.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.backoff_policy = Some(v.into().into());
        self
    }

    pub fn initial_interval(&self) -> Duration {
        self.initial_interval
    }

    pub fn max_interval(&self) -> Duration {
        self.max_interval
    }

    pub fn max_wait(&self) -> Duration {
        self.max_wait
    }

    pub fn succeed_on_not_found(&self) -> bool {
        self.succeed_on_not_found
    }

    /// Fills the policies not set in this waiter.
    ///
    /// Not part of the public API, subject to change without notice. The
    /// client libraries use this function to apply the client and request
    /// defaults.
    #[doc(hidden)]
    pub fn or_policies(
        mut self,
        error_policy: Arc<dyn PollingErrorPolicy>,
        backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
    ) -> Self {
        self.error_policy.get_or_insert(error_policy);
        self.backoff_policy = self.backoff_policy.or(backoff_policy);
        self
    }

    pub(crate) fn error_policy(&self) -> Arc<dyn PollingErrorPolicy> {
        self.error_policy
            .clone()
            .unwrap_or_else(|| Arc::new(TransientOnly))
    }

    /// The interval after `attempt_count` polls.
    pub(crate) fn interval(&self, loop_start: std::time::Instant, attempt_count: u32) -> Duration {
        if let Some(p) = &self.backoff_policy {
            return p.wait_period(loop_start, attempt_count);
        }
        let exponent = attempt_count.saturating_sub(1).min(31);
        self.initial_interval
            .saturating_mul(1_u32 << exponent)
            .min(self.max_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::Error;
    use gax::fixed_backoff::FixedBackoff;
    use gax::polling_error_policy::AlwaysContinue;
    use std::time::Instant;
    use test_case::test_case;

    #[test]
    fn defaults() {
        let waiter = Waiter::default();
        assert_eq!(waiter.initial_interval(), Duration::from_secs(1));
        assert_eq!(waiter.max_interval(), Duration::from_secs(30));
        assert_eq!(waiter.max_wait(), Duration::from_secs(1200));
        assert!(!waiter.succeed_on_not_found());
        let e = Error::timeout("slow");
        assert!(
            waiter
                .error_policy()
                .on_error(Instant::now(), 1, e)
                .is_continue()
        );
    }

    #[test]
    fn setters() {
        let waiter = Waiter::new()
            .with_initial_interval(Duration::from_millis(5))
            .with_max_interval(Duration::from_millis(50))
            .with_max_wait(Duration::from_secs(2))
            .with_succeed_on_not_found(true);
        assert_eq!(waiter.initial_interval(), Duration::from_millis(5));
        assert_eq!(waiter.max_interval(), Duration::from_millis(50));
        assert_eq!(waiter.max_wait(), Duration::from_secs(2));
        assert!(waiter.succeed_on_not_found());
    }

    #[test_case(1, 1)]
    #[test_case(2, 2)]
    #[test_case(3, 4)]
    #[test_case(5, 16)]
    #[test_case(6, 30)]
    #[test_case(100, 30)]
    fn doubling_interval(attempt_count: u32, want_secs: u64) {
        let waiter = Waiter::new();
        let got = waiter.interval(Instant::now(), attempt_count);
        assert_eq!(got, Duration::from_secs(want_secs));
    }

    #[test]
    fn backoff_policy_interval() {
        let waiter =
            Waiter::new().with_polling_backoff_policy(FixedBackoff::new(Duration::from_secs(45)));
        let got = waiter.interval(Instant::now(), 7);
        assert_eq!(got, Duration::from_secs(45));
    }

    #[test]
    fn or_policies() {
        let waiter = Waiter::new().or_policies(
            Arc::new(AlwaysContinue),
            Some(Arc::new(FixedBackoff::new(Duration::from_secs(3)))),
        );
        assert_eq!(waiter.interval(Instant::now(), 1), Duration::from_secs(3));
        let e = Error::deser("bad");
        assert!(
            waiter
                .error_policy()
                .on_error(Instant::now(), 1, e)
                .is_continue()
        );

        // The values in the waiter win.
        let waiter = Waiter::new()
            .with_polling_backoff_policy(FixedBackoff::new(Duration::from_secs(5)))
            .or_policies(
                Arc::new(TransientOnly),
                Some(Arc::new(FixedBackoff::new(Duration::from_secs(3)))),
            );
        assert_eq!(waiter.interval(Instant::now(), 1), Duration::from_secs(5));
    }
}

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

//! A backoff policy with a constant delay.

use std::time::Duration;

/// Waits the same amount of time after every failure.
///
/// It implements the [BackoffPolicy][crate::backoff_policy::BackoffPolicy]
/// and [PollingBackoffPolicy][crate::polling_backoff_policy::PollingBackoffPolicy]
/// traits.
///
/// # Example
/// ```
/// # use oci_gax::fixed_backoff::FixedBackoff;
/// # use oci_gax::backoff_policy::BackoffPolicy;
/// use std::time::{Duration, Instant};
/// let policy = FixedBackoff::new(Duration::from_millis(10));
/// assert_eq!(policy.on_failure(Instant::now(), 1), Duration::from_millis(10));
/// assert_eq!(policy.on_failure(Instant::now(), 7), Duration::from_millis(10));
/// ```
#[derive(Clone, Debug)]
pub struct FixedBackoff {
    delay: Duration,
}

impl FixedBackoff {
    /// Creates a new policy, sleeping `delay` between attempts.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The delay between attempts.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl crate::backoff_policy::BackoffPolicy for FixedBackoff {
    fn on_failure(&self, _loop_start: std::time::Instant, _attempt_count: u32) -> Duration {
        self.delay
    }
}

impl crate::polling_backoff_policy::PollingBackoffPolicy for FixedBackoff {
    fn wait_period(&self, _loop_start: std::time::Instant, _attempt_count: u32) -> Duration {
        self.delay
    }
}

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

//! Types and functions to wait until a resource reaches a lifecycle state.
//!
//! Many OCI operations return before the work they start is complete. The
//! resource they create, update, or delete moves through a series of
//! lifecycle states (`CREATING`, `ACTIVE`, `UPDATING`, `DELETING`, `DELETED`,
//! or `FAILED`) on the service side. Applications that need the resource in a
//! given state poll the resource until it gets there.
//!
//! The client libraries offer *composite operations* that chain the mutating
//! call with this polling loop. They are implemented with [wait_until], which
//! applications can also use directly.
//!
//! # Example
//! ```
//! # use oci_waiter::*;
//! # use std::time::Duration;
//! #[derive(Clone, Debug)]
//! struct Zone { state: String }
//! impl Lifecycle for Zone {
//!     fn lifecycle_state(&self) -> Option<&str> { Some(&self.state) }
//! }
//!
//! # tokio_test::block_on(async {
//! let created = Zone { state: "CREATING".into() };
//! let waiter = Waiter::new().with_initial_interval(Duration::from_millis(1));
//! let completed = wait_until(created, &TargetStates::from(["ACTIVE"]), &waiter, async || {
//!     Ok(Zone { state: "ACTIVE".into() })
//! }).await?;
//! assert!(completed.outcome().is_reached());
//! # Ok::<(), CompositeError<Zone>>(()) });
//! ```

mod config;
mod details;
mod error;
mod targets;

pub use config::Waiter;
pub use error::{CompositeError, OperationError};
pub use targets::TargetStates;

/// The result of a composite operation.
pub type OperationResult<P, T> = std::result::Result<Completed<P, T>, OperationError<P>>;

/// Implemented by resources with a lifecycle state.
pub trait Lifecycle {
    /// The wire name of the lifecycle state, if the resource reports one.
    fn lifecycle_state(&self) -> Option<&str>;
}

impl<T: Lifecycle> Lifecycle for gax::response::Response<T> {
    fn lifecycle_state(&self) -> Option<&str> {
        self.body().lifecycle_state()
    }
}

/// How the wait for a lifecycle state ended.
#[derive(Clone, Debug, PartialEq)]
pub enum WaitOutcome<T> {
    /// No target states were requested, the resource was not polled.
    Skipped,
    /// The resource reached one of the target states. This is the last
    /// snapshot of the resource.
    Reached(T),
    /// The resource no longer exists.
    ///
    /// Only returned when the [Waiter] is configured with
    /// [succeed_on_not_found][Waiter::with_succeed_on_not_found].
    Gone,
}

impl<T> WaitOutcome<T> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Reached(_))
    }

    pub fn is_gone(&self) -> bool {
        matches!(self, Self::Gone)
    }

    /// The final snapshot, if the resource reached a target state.
    pub fn resource(&self) -> Option<&T> {
        match self {
            Self::Reached(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_resource(self) -> Option<T> {
        match self {
            Self::Reached(r) => Some(r),
            _ => None,
        }
    }
}

/// The result of a composite operation.
///
/// Holds the response of the mutating call, and how the wait for the target
/// lifecycle states ended.
///
/// # Parameters
/// * `P` - the type returned by the mutating call.
/// * `T` - the type of the polled resource.
#[derive(Clone, Debug)]
pub struct Completed<P, T> {
    partial: P,
    outcome: WaitOutcome<T>,
}

impl<P, T> Completed<P, T> {
    pub fn new(partial: P, outcome: WaitOutcome<T>) -> Self {
        Self { partial, outcome }
    }

    /// The response of the mutating call.
    pub fn partial(&self) -> &P {
        &self.partial
    }

    pub fn outcome(&self) -> &WaitOutcome<T> {
        &self.outcome
    }

    pub fn into_parts(self) -> (P, WaitOutcome<T>) {
        (self.partial, self.outcome)
    }
}

/// Polls a resource until its lifecycle state is one of `targets`.
///
/// `partial` is the response of the mutating call that started the change. It
/// is returned with the outcome, and with any error: the mutation succeeded
/// even if the wait failed.
///
/// The function returns immediately, without calling `fetch`, if `targets` is
/// empty. Otherwise it calls `fetch` and compares the lifecycle state of the
/// snapshot against `targets`, ignoring ASCII case. Between polls it sleeps
/// for a growing interval, capped by [Waiter::max_interval].
///
/// The wait fails with a timeout if the next poll would happen after
/// [Waiter::max_wait] elapses. Errors from `fetch` are classified by the
/// waiter's polling error policy; by default only transient errors keep the
/// loop going. A not found error completes the wait with
/// [WaitOutcome::Gone] if the waiter is configured to succeed on not found.
pub async fn wait_until<P, T, F>(
    partial: P,
    targets: &TargetStates,
    waiter: &Waiter,
    fetch: F,
) -> Result<Completed<P, T>, CompositeError<P>>
where
    T: Lifecycle,
    F: AsyncFnMut() -> gax::Result<T>,
{
    if targets.is_empty() {
        return Ok(Completed::new(partial, WaitOutcome::Skipped));
    }
    match details::poll_loop(targets, waiter, fetch).await {
        Ok(outcome) => Ok(Completed::new(partial, outcome)),
        Err(e) => Err(CompositeError::new(partial, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::response::Response;

    #[derive(Clone, Debug, PartialEq)]
    struct Fake(&'static str);

    impl Lifecycle for Fake {
        fn lifecycle_state(&self) -> Option<&str> {
            Some(self.0)
        }
    }

    #[test]
    fn response_lifecycle() {
        let response = Response::from(Fake("ACTIVE"));
        assert_eq!(response.lifecycle_state(), Some("ACTIVE"));
    }

    #[test]
    fn outcome() {
        let o = WaitOutcome::Reached(Fake("ACTIVE"));
        assert!(o.is_reached(), "{o:?}");
        assert_eq!(o.resource(), Some(&Fake("ACTIVE")));
        assert_eq!(o.into_resource(), Some(Fake("ACTIVE")));

        let o = WaitOutcome::<Fake>::Gone;
        assert!(o.is_gone(), "{o:?}");
        assert!(o.resource().is_none(), "{o:?}");

        let o = WaitOutcome::<Fake>::Skipped;
        assert!(o.is_skipped(), "{o:?}");
        assert!(o.into_resource().is_none());
    }

    #[test]
    fn completed() {
        let c = Completed::new("created", WaitOutcome::Reached(Fake("ACTIVE")));
        assert_eq!(c.partial(), &"created");
        assert!(c.outcome().is_reached());
        let (p, o) = c.into_parts();
        assert_eq!(p, "created");
        assert_eq!(o, WaitOutcome::Reached(Fake("ACTIVE")));
    }

    #[tokio::test]
    async fn empty_targets_do_not_poll() -> anyhow::Result<()> {
        let mut calls = 0;
        let completed = wait_until(
            "created",
            &TargetStates::new(),
            &Waiter::new(),
            async || -> gax::Result<Fake> {
                calls += 1;
                Ok(Fake("ACTIVE"))
            },
        )
        .await?;
        assert_eq!(calls, 0);
        assert_eq!(completed.partial(), &"created");
        assert!(completed.outcome().is_skipped(), "{completed:?}");
        Ok(())
    }
}

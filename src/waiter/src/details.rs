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

//! Simplifies the implementation of `wait_until`

use super::*;
use gax::error::Error;
use gax::retry_result::RetryResult;

pub(crate) async fn poll_loop<T, F>(
    targets: &TargetStates,
    waiter: &Waiter,
    mut fetch: F,
) -> gax::Result<WaitOutcome<T>>
where
    T: Lifecycle,
    F: AsyncFnMut() -> gax::Result<T>,
{
    let start = tokio::time::Instant::now();
    let loop_start = start.into_std();
    let error_policy = waiter.error_policy();
    let mut attempt_count = 0_u32;
    let mut last_state = None;
    loop {
        attempt_count += 1;
        match fetch().await {
            Ok(snapshot) => {
                let state = snapshot.lifecycle_state().unwrap_or_default();
                tracing::debug!("poll {attempt_count} found lifecycle state {state:?}, waiting for {targets}");
                if targets.matches(state) {
                    tracing::info!("lifecycle state {state:?} reached after {attempt_count} polls");
                    return Ok(WaitOutcome::Reached(snapshot));
                }
                let description = format!("resource in lifecycle state {state:?}");
                if let Some(e) = error_policy.on_in_progress(loop_start, attempt_count, &description) {
                    return Err(e);
                }
                last_state = Some(state.to_string());
            }
            Err(e) if waiter.succeed_on_not_found() && e.is_not_found() => {
                tracing::info!("resource not found after {attempt_count} polls");
                return Ok(WaitOutcome::Gone);
            }
            Err(e) => match error_policy.on_error(loop_start, attempt_count, e) {
                RetryResult::Continue(e) => {
                    tracing::debug!("poll {attempt_count} failed, continuing: {e}");
                }
                RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
            },
        }
        let delay = waiter.interval(loop_start, attempt_count);
        if start.elapsed() + delay > waiter.max_wait() {
            let last = last_state.as_deref().unwrap_or("unknown");
            tracing::info!("timeout waiting for {targets}, last lifecycle state {last:?}");
            return Err(Error::timeout(format!(
                "the resource did not reach any of {targets} within {:?}, last lifecycle state {last:?}",
                waiter.max_wait()
            )));
        }
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::ServiceError;
    use gax::polling_error_policy::{AlwaysContinue, PollingErrorPolicyExt, TransientOnly};
    use std::collections::VecDeque;
    use std::time::Duration;

    #[derive(Clone, Debug, PartialEq)]
    struct Fake(Option<&'static str>);

    impl Lifecycle for Fake {
        fn lifecycle_state(&self) -> Option<&str> {
            self.0
        }
    }

    fn sequence(
        items: Vec<gax::Result<Fake>>,
    ) -> (impl AsyncFnMut() -> gax::Result<Fake>, std::rc::Rc<std::cell::Cell<u32>>) {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = calls.clone();
        let mut items = VecDeque::from(items);
        let fetch = async move || {
            counter.set(counter.get() + 1);
            items
                .pop_front()
                .unwrap_or_else(|| Err(Error::deser("no more responses")))
        };
        (fetch, calls)
    }

    fn unavailable() -> Error {
        Error::service(
            ServiceError::new("ServiceUnavailable", "try-again").with_http_status_code(503_u16),
        )
    }

    fn not_found() -> Error {
        Error::service(
            ServiceError::new("NotAuthorizedOrNotFound", "gone").with_http_status_code(404_u16),
        )
    }

    fn fast() -> Waiter {
        Waiter::new()
            .with_initial_interval(Duration::from_millis(10))
            .with_max_interval(Duration::from_millis(40))
    }

    #[tokio::test(start_paused = true)]
    async fn reaches_state() -> anyhow::Result<()> {
        let (fetch, calls) = sequence(vec![
            Ok(Fake(Some("CREATING"))),
            Ok(Fake(Some("CREATING"))),
            Ok(Fake(Some("active"))),
        ]);
        let start = tokio::time::Instant::now();
        let outcome = poll_loop(&TargetStates::from(["ACTIVE"]), &fast(), fetch).await?;
        assert_eq!(outcome, WaitOutcome::Reached(Fake(Some("active"))));
        assert_eq!(calls.get(), 3);
        // Two sleeps: 10ms and 20ms.
        assert_eq!(start.elapsed(), Duration::from_millis(30));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn interval_is_capped() -> anyhow::Result<()> {
        let (fetch, calls) = sequence(vec![
            Ok(Fake(Some("UPDATING"))),
            Ok(Fake(Some("UPDATING"))),
            Ok(Fake(Some("UPDATING"))),
            Ok(Fake(Some("UPDATING"))),
            Ok(Fake(Some("ACTIVE"))),
        ]);
        let start = tokio::time::Instant::now();
        let outcome = poll_loop(&TargetStates::from(["ACTIVE"]), &fast(), fetch).await?;
        assert!(outcome.is_reached(), "{outcome:?}");
        assert_eq!(calls.get(), 5);
        // 10ms + 20ms + 40ms + 40ms
        assert_eq!(start.elapsed(), Duration::from_millis(110));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn missing_state_never_matches() -> anyhow::Result<()> {
        let (fetch, calls) = sequence(vec![Ok(Fake(None)), Ok(Fake(Some("ACTIVE")))]);
        let outcome = poll_loop(&TargetStates::from(["ACTIVE"]), &fast(), fetch).await?;
        assert!(outcome.is_reached(), "{outcome:?}");
        assert_eq!(calls.get(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_is_gone() -> anyhow::Result<()> {
        let (fetch, calls) = sequence(vec![Ok(Fake(Some("DELETING"))), Err(not_found())]);
        let waiter = fast().with_succeed_on_not_found(true);
        let outcome = poll_loop(&TargetStates::from(["DELETED"]), &waiter, fetch).await?;
        assert_eq!(outcome, WaitOutcome::Gone);
        assert_eq!(calls.get(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_is_error_by_default() {
        let (fetch, calls) = sequence(vec![Err(not_found())]);
        let err = poll_loop(&TargetStates::from(["DELETED"]), &fast(), fetch)
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn transient_errors_continue() -> anyhow::Result<()> {
        let (fetch, calls) = sequence(vec![
            Err(unavailable()),
            Err(Error::io("connection reset")),
            Ok(Fake(Some("ACTIVE"))),
        ]);
        let outcome = poll_loop(&TargetStates::from(["ACTIVE"]), &fast(), fetch).await?;
        assert!(outcome.is_reached(), "{outcome:?}");
        assert_eq!(calls.get(), 3);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn permanent_error_stops() {
        let (fetch, calls) = sequence(vec![
            Ok(Fake(Some("CREATING"))),
            Err(Error::deser("bad json")),
            Ok(Fake(Some("ACTIVE"))),
        ]);
        let err = poll_loop(&TargetStates::from(["ACTIVE"]), &fast(), fetch)
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn error_policy_continues() -> anyhow::Result<()> {
        let (fetch, calls) = sequence(vec![
            Err(Error::deser("bad json")),
            Ok(Fake(Some("ACTIVE"))),
        ]);
        let waiter = fast().with_polling_error_policy(AlwaysContinue);
        let outcome = poll_loop(&TargetStates::from(["ACTIVE"]), &waiter, fetch).await?;
        assert!(outcome.is_reached(), "{outcome:?}");
        assert_eq!(calls.get(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn error_policy_limits_attempts() {
        let (fetch, calls) = sequence(vec![
            Ok(Fake(Some("CREATING"))),
            Ok(Fake(Some("CREATING"))),
            Ok(Fake(Some("CREATING"))),
            Ok(Fake(Some("ACTIVE"))),
        ]);
        let waiter = fast().with_polling_error_policy(TransientOnly.with_attempt_limit(2));
        let err = poll_loop(&TargetStates::from(["ACTIVE"]), &waiter, fetch)
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout() {
        let responses = (0..100).map(|_| Ok(Fake(Some("CREATING")))).collect();
        let (fetch, calls) = sequence(responses);
        let waiter = fast().with_max_wait(Duration::from_millis(100));
        let start = tokio::time::Instant::now();
        let err = poll_loop(&TargetStates::from(["ACTIVE"]), &waiter, fetch)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert!(err.to_string().contains("CREATING"), "{err}");
        // Polls at 0, 10, 30 and 70ms, the next poll would be at 110ms.
        assert_eq!(calls.get(), 4);
        assert_eq!(start.elapsed(), Duration::from_millis(70));
    }
}

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
    use gax::error::{Error, ServiceError};
    use oci_waiter::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Clone, Debug, PartialEq)]
    struct Zone {
        id: String,
        state: String,
    }

    impl Lifecycle for Zone {
        fn lifecycle_state(&self) -> Option<&str> {
            Some(&self.state)
        }
    }

    fn zone(state: &str) -> Zone {
        Zone {
            id: "ocid1.dns-zone.oc1..aaaa".into(),
            state: state.into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn create_then_wait() -> anyhow::Result<()> {
        let states = Arc::new(Mutex::new(vec!["ACTIVE", "CREATING"]));
        let fetch = {
            let states = states.clone();
            async move || {
                let state = states.lock().unwrap().pop().unwrap_or("ACTIVE");
                Ok(zone(state))
            }
        };
        let completed = wait_until(
            zone("CREATING"),
            &TargetStates::from(["active"]),
            &Waiter::new(),
            fetch,
        )
        .await?;
        let (partial, outcome) = completed.into_parts();
        assert_eq!(partial, zone("CREATING"));
        assert_eq!(outcome, WaitOutcome::Reached(zone("ACTIVE")));
        assert!(states.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn delete_then_not_found() -> anyhow::Result<()> {
        let mut calls = 0;
        let completed = wait_until(
            (),
            &TargetStates::from(["DELETED"]),
            &Waiter::new().with_succeed_on_not_found(true),
            async || -> gax::Result<Zone> {
                calls += 1;
                if calls < 3 {
                    return Ok(zone("DELETING"));
                }
                Err(Error::service(
                    ServiceError::new("NotAuthorizedOrNotFound", "not found")
                        .with_http_status_code(404_u16),
                ))
            },
        )
        .await?;
        assert!(completed.outcome().is_gone(), "{completed:?}");
        assert_eq!(calls, 3);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_carries_partial() {
        let waiter = Waiter::new().with_max_wait(Duration::from_secs(60));
        let start = tokio::time::Instant::now();
        let err = wait_until(
            zone("PROVISIONING"),
            &TargetStates::from(["ACTIVE"]),
            &waiter,
            async || Ok(zone("CREATING")),
        )
        .await
        .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert_eq!(err.partial(), &zone("PROVISIONING"));
        // Polls at 0, 1, 3, 7, 15 and 31 seconds, the next one would be at 61.
        assert_eq!(start.elapsed(), Duration::from_secs(31));
    }

    #[tokio::test(start_paused = true)]
    async fn permanent_error_carries_partial() {
        let err = wait_until(
            "update-response",
            &TargetStates::from(["ACTIVE"]),
            &Waiter::new(),
            async || -> gax::Result<Zone> {
                Err(Error::service(
                    ServiceError::new("NotAuthorized", "denied").with_http_status_code(401_u16),
                ))
            },
        )
        .await
        .unwrap_err();
        assert!(!err.is_timeout(), "{err:?}");
        assert_eq!(err.partial(), &"update-response");
        assert_eq!(err.error().http_status_code(), Some(401));
    }

    #[tokio::test]
    async fn empty_targets_return_partial() -> anyhow::Result<()> {
        let completed = wait_until(
            zone("CREATING"),
            &TargetStates::new(),
            &Waiter::new(),
            async || -> gax::Result<Zone> { panic!("fetch must not be called") },
        )
        .await?;
        assert_eq!(completed.partial(), &zone("CREATING"));
        assert!(completed.outcome().is_skipped(), "{completed:?}");
        Ok(())
    }
}

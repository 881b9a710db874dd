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

use std::collections::BTreeSet;

/// The lifecycle states that complete a wait.
///
/// States are compared ignoring ASCII case, `"ACTIVE"` matches a resource in
/// the `"active"` state.
///
/// # Example
/// ```
/// # use oci_waiter::TargetStates;
/// let targets = TargetStates::from(["ACTIVE", "FAILED"]);
/// assert!(targets.matches("active"));
/// assert!(!targets.matches("CREATING"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetStates(BTreeSet<String>);

impl TargetStates {
    /// Creates an empty set. Waiting for an empty set returns immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a state to the set.
    pub fn with<V: AsRef<str>>(mut self, state: V) -> Self {
        self.0.insert(state.as_ref().to_ascii_uppercase());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if `state` is in the set, ignoring ASCII case.
    pub fn matches(&self, state: &str) -> bool {
        self.0.contains(&state.to_ascii_uppercase())
    }

    /// Iterates over the states, in upper case.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<V: AsRef<str>> FromIterator<V> for TargetStates {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl<V: AsRef<str>, const N: usize> From<[V; N]> for TargetStates {
    fn from(value: [V; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<V: AsRef<str>> From<Vec<V>> for TargetStates {
    fn from(value: Vec<V>) -> Self {
        value.into_iter().collect()
    }
}

impl std::fmt::Display for TargetStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let states = self.iter().collect::<Vec<_>>();
        write!(f, "[{}]", states.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("ACTIVE", "active")]
    #[test_case("active", "ACTIVE")]
    #[test_case("Active", "aCTIVE")]
    #[test_case("SUCCEEDED", "Succeeded")]
    fn case_insensitive(target: &str, observed: &str) {
        let targets = TargetStates::from([target]);
        assert!(targets.matches(observed), "{targets} vs {observed}");
    }

    #[test]
    fn no_match() {
        let targets = TargetStates::from(["ACTIVE", "FAILED"]);
        assert!(!targets.matches("CREATING"));
        assert!(!targets.matches(""));
        assert!(!targets.matches("ACTIVE "));
    }

    #[test]
    fn empty() {
        let targets = TargetStates::new();
        assert!(targets.is_empty());
        assert_eq!(targets.len(), 0);
        assert!(!targets.matches("ACTIVE"));
        let targets = TargetStates::from(Vec::<String>::new());
        assert!(targets.is_empty());
    }

    #[test]
    fn duplicates() {
        let targets = TargetStates::from(vec!["active", "ACTIVE", "Active"]);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets.iter().collect::<Vec<_>>(), vec!["ACTIVE"]);
        assert_eq!(targets.to_string(), "[ACTIVE]");
    }

    #[test]
    fn builder() {
        let targets = TargetStates::new().with("deleted").with("FAILED");
        assert_eq!(targets.to_string(), "[DELETED, FAILED]");
    }
}

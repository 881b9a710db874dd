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

/// A failure to build a request from the values in a request builder.
///
/// The client cannot send a request when a required parameter is missing, or
/// when it is set to a value the service can never accept (e.g. a blank path
/// parameter).
#[derive(Debug, PartialEq)]
pub struct BindingError {
    /// The name of the field, using the service's naming convention.
    pub field_name: &'static str,
    /// Why the value was rejected.
    pub problem: SubstitutionFail,
}

/// Ways a request field can fail validation.
#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum SubstitutionFail {
    /// A required field was not set.
    Unset,
    /// A required string field was set, but it is empty or only whitespace.
    Blank,
    /// A field was set to a value outside the accepted set.
    ///
    /// # Parameters
    ///
    /// - self.0 - the actual value of the field
    /// - self.1 - a description of the accepted values
    Invalid(String, &'static str),
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.problem {
            SubstitutionFail::Unset => {
                write!(f, "missing required parameter `{}`", self.field_name)
            }
            SubstitutionFail::Blank => {
                write!(
                    f,
                    "parameter `{}` cannot be empty, whitespace or blank",
                    self.field_name
                )
            }
            SubstitutionFail::Invalid(actual, expected) => {
                write!(
                    f,
                    "parameter `{}` should be {expected}; found: '{actual}'",
                    self.field_name
                )
            }
        }
    }
}

impl std::error::Error for BindingError {}

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

//! Idempotency tokens for create operations.
//!
//! Operations that create resources accept an `opc-retry-token` header. The
//! service remembers the token for some time, and a repeated request with the
//! same token returns the original result instead of creating a second
//! resource. With a token every attempt of the request is safe to retry.

/// The header carrying the idempotency token.
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";

/// Returns the application-supplied token, or generates a new one.
pub fn token_or_generate(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => generate(),
    }
}

pub fn generate() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

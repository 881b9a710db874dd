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

//! Support for enums sent as strings.
//!
//! OCI services send enums as strings, and add new values over time. The
//! client libraries represent each enum as a closed Rust enum with an
//! `UnknownValue(String)` variant. Deserializing a value unknown to this
//! version of the library never fails, the value is preserved in the
//! `UnknownValue` variant and serializes back unchanged.

use gax::error::Error;
use gax::error::binding::{BindingError, SubstitutionFail};

#[doc(hidden)]
pub use serde;

/// Implemented by all the enums in the client libraries.
pub trait WireEnum {
    /// The name of the value on the wire.
    fn as_str(&self) -> &str;

    /// True if the value is not known to this version of the library.
    fn is_unknown(&self) -> bool;
}

/// Logs enum values not known to this version of the library.
#[doc(hidden)]
pub fn unknown_value(enum_name: &str, value: &str) {
    tracing::warn!("unknown value {value:?} for enum {enum_name}, keeping it as `UnknownValue`");
}

/// Rejects enum values not known to this version of the library.
///
/// Query parameters accept a closed set of values. Sending any other value
/// fails in the service, and the client libraries detect this locally.
pub fn require_known<E: WireEnum>(field_name: &'static str, value: Option<&E>) -> gax::Result<()> {
    match value {
        Some(v) if v.is_unknown() => Err(Error::binding(BindingError {
            field_name,
            problem: SubstitutionFail::Invalid(v.as_str().to_string(), "one of the documented values"),
        })),
        _ => Ok(()),
    }
}

/// Defines an enum serialized as a string, with a variant for unknown values.
///
/// # Example
/// ```
/// oci_gax_internal::wire_enum! {
///     /// The lifecycle state of a zone.
///     ZoneLifecycleState {
///         Active => "ACTIVE",
///         Creating => "CREATING",
///     }
/// }
/// let s = ZoneLifecycleState::from("ACTIVE");
/// assert_eq!(s, ZoneLifecycleState::Active);
/// assert_eq!(ZoneLifecycleState::from("MIGRATING").as_str(), "MIGRATING");
/// ```
#[macro_export]
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A value not known to this version of the client library.
            UnknownValue(String),
        }

        impl $name {
            /// The name of the value on the wire.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::UnknownValue(v) => v.as_str(),
                }
            }
        }

        impl $crate::enums::WireEnum for $name {
            fn as_str(&self) -> &str {
                $name::as_str(self)
            }
            fn is_unknown(&self) -> bool {
                matches!(self, Self::UnknownValue(_))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)+
                    other => Self::UnknownValue(other.to_string()),
                }
            }
        }

        impl std::convert::From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl $crate::enums::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: $crate::enums::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::enums::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: $crate::enums::serde::Deserializer<'de>,
            {
                let value = <String as $crate::enums::serde::Deserialize>::deserialize(deserializer)?;
                let e = Self::from(value.as_str());
                if let Self::UnknownValue(v) = &e {
                    $crate::enums::unknown_value(stringify!($name), v);
                }
                Ok(e)
            }
        }
    };
}

//! Domain records shown by the reservation dashboard.

use std::fmt::Display;
use std::str::FromStr;

/// Status enums offered in list screen drop-downs.
pub trait StatusKind: Copy + PartialEq + Display + FromStr + 'static {
    /// Every variant, in drop-down order.
    fn all() -> &'static [Self];

    /// Stable key used in query strings.
    fn key(self) -> &'static str;

    /// Human readable label.
    fn label(self) -> &'static str;
}

/// Generates a status enum with stable snake_case keys and display labels.
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in drop-down order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable key used in query strings.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Human readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl $crate::domain::StatusKind for $name {
            fn all() -> &'static [Self] {
                $name::ALL
            }

            fn key(self) -> &'static str {
                $name::key(self)
            }

            fn label(self) -> &'static str {
                $name::label(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::types::TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($key => Ok($name::$variant),)+
                    other => Err($crate::domain::types::TypeConstraintError::InvalidValue(
                        other.to_string(),
                    )),
                }
            }
        }
    };
}

pub mod alert;
pub mod booking;
pub mod call;
pub mod conversation;
pub mod shop;
pub mod types;

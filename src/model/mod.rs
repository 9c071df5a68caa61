//! Request and response types shared by the server and the API client.

use thiserror::Error;

/// Returned when a string does not name a variant of one of the status enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("must be one of: {}", .allowed.join(", "))]
pub struct ParseEnumError {
    pub allowed: &'static [&'static str],
}

/// Declares a closed set of wire values with `FromStr`/`Display` conversions.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted wire value, in declaration order
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    _ => Err($crate::model::ParseEnumError {
                        allowed: Self::VALUES,
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;

pub mod api;
pub mod application;
pub mod internship;
pub mod startup;
pub mod student;
pub mod user;

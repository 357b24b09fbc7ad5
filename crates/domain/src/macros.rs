//! Macro for implementing Display and FromStr for wire tag enums
//!
//! The REST API identifies several things by short lowercase tags (advanced
//! search query types, resource kinds in error messages). This macro keeps
//! the enum and its tag table in one place and makes parsing failures an
//! [`ObsidianError::InvalidInput`](crate::ObsidianError::InvalidInput).
//!
//! # Example
//!
//! ```rust
//! use obsidian_rest_domain::impl_wire_tag_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Flavor {
//!     Plain,
//!     Fancy,
//! }
//!
//! impl_wire_tag_conversions!(Flavor {
//!     Plain => "plain",
//!     Fancy => "fancy",
//! });
//!
//! assert_eq!("fancy".parse::<Flavor>().unwrap(), Flavor::Fancy);
//! assert!("FANCY".parse::<Flavor>().is_err());
//! ```

/// Implements Display and FromStr traits for wire tag enums
///
/// This macro generates:
/// - Display trait: writes the tag
/// - FromStr trait: parses the exact tag, returning
///   `ObsidianError::InvalidInput` for anything else
///
/// Matching is case-sensitive; the server compares tags verbatim.
#[macro_export]
macro_rules! impl_wire_tag_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// The tag as it appears on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::ObsidianError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::ObsidianError::InvalidInput(format!(
                        "invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}

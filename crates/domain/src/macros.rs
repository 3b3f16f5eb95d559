//! Macro for implementing Display and FromStr for label enums
//!
//! Domain enums that cross the UI boundary as plain strings (decisions,
//! experience levels, relationship types) share one conversion scheme:
//! lowercase snake_case labels on output, case-insensitive parsing on input.
//!
//! # Example
//!
//! ```rust
//! use inferno_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum CardSide {
//!     Front,
//!     Back,
//! }
//!
//! impl_domain_label_conversions!(CardSide {
//!     Front => "front",
//!     Back => "back",
//! });
//!
//! assert_eq!(CardSide::ALL.len(), 2);
//! assert_eq!("BACK".parse::<CardSide>().unwrap(), CardSide::Back);
//! ```

/// Implements Display, FromStr and an `ALL` variant list for label enums
///
/// This macro generates:
/// - `Display`: writes the variant's label
/// - `FromStr`: parses case-insensitive labels back into variants
/// - `ALL`: every variant in declaration order
///
/// Labels must be lowercase for parsing to round-trip.
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable label used in logs and at the UI boundary
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Swipe {
        Left,
        Right,
        Up,
    }

    impl_domain_label_conversions!(Swipe {
        Left => "left",
        Right => "right",
        Up => "up",
    });

    #[test]
    fn display_uses_label() {
        assert_eq!(Swipe::Left.to_string(), "left");
        assert_eq!(Swipe::Up.label(), "up");
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(Swipe::from_str("RIGHT").unwrap(), Swipe::Right);
        assert_eq!(Swipe::from_str("Left").unwrap(), Swipe::Left);
    }

    #[test]
    fn parsing_rejects_unknown_labels() {
        let err = Swipe::from_str("down").unwrap_err();
        assert!(err.contains("Invalid Swipe: down"));
        assert!(Swipe::from_str("").is_err());
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(Swipe::ALL, &[Swipe::Left, Swipe::Right, Swipe::Up]);
    }
}

//! Display/FromStr boilerplate for label-style status enums.
//!
//! # Example
//!
//! ```rust
//! use genieflow_domain::impl_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum SweepPhase {
//!     Idle,
//!     Running,
//! }
//!
//! impl_status_conversions!(SweepPhase {
//!     Idle => "idle",
//!     Running => "running",
//! });
//!
//! assert_eq!(SweepPhase::Running.to_string(), "running");
//! assert_eq!("IDLE".parse::<SweepPhase>(), Ok(SweepPhase::Idle));
//! ```

/// Implements `Display` (fixed label) and case-insensitive `FromStr` for a
/// fieldless enum.
#[macro_export]
macro_rules! impl_status_conversions {
    ($enum_name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($label),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {s}", stringify!($enum_name))),
                }
            }
        }
    };
}

//! # vatnum
//!
//! Validation of EU VAT identification numbers.
//!
//! Each check makes one call to the EU VIES service. If that call fails for
//! any reason (network, timeout, service fault, unexpected response), the
//! number is checked against a structural pattern for its country instead.
//! A VIES answer, positive or negative, is never second-guessed.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatnum::core::matches_structure;
//!
//! assert_eq!(matches_structure("at", "ATU12345678"), Some(true));
//! assert_eq!(matches_structure("PL", "PL123456789"), Some(false));
//! assert_eq!(matches_structure("ZZ", "ZZ123"), None);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Country codes, pattern table, validator, record adapter |
//! | `vies` (default) | VIES REST client (`reqwest`) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod vat;

// Re-export the main entry points at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::{CountryCode, RemoteError, ValidatorConfig, VatError};
#[cfg(feature = "core")]
pub use crate::vat::{Outcome, VatValidator, Verdict, VerdictSource, validate_vat_number};

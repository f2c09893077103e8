//! VAT number validation with VIES lookup and structural fallback.
//!
//! # Example
//!
//! ```ignore
//! use vatnum::vat::*;
//! use vatnum::core::ViesConfig;
//!
//! let validator = VatValidator::vies(ViesConfig::default())?;
//! let outcome = validator.validate("AT", "ATU12345678").await?;
//! if outcome.source == VerdictSource::Structural {
//!     // VIES was unreachable; only the format was checked
//! }
//! assert!(outcome.is_accepted());
//! ```

mod record;
mod validator;
mod verifier;
#[cfg(feature = "vies")]
mod vies;

pub use record::{VatRecord, validate_record};
pub use validator::{Outcome, VatValidator, Verdict, VerdictSource, validate_vat_number};
pub use verifier::{
    VatVerifier, VerificationRequest, VerificationResponse, strip_country_prefix,
};
#[cfg(feature = "vies")]
pub use vies::{ViesClient, check_vies};

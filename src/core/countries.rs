//! Country codes with a VAT number pattern.
//!
//! These are the VIES member-state prefixes, not strictly ISO 3166-1:
//! Greece is `EL`, and `GB` is kept for pre-2021 registrations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A VAT member-state prefix known to the pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CountryCode {
    AT,
    BE,
    BG,
    CY,
    CZ,
    DE,
    DK,
    EE,
    EL,
    ES,
    FI,
    FR,
    GB,
    HU,
    IE,
    IT,
    LT,
    LU,
    LV,
    MT,
    NL,
    PL,
    PT,
    RO,
    SE,
    SI,
    SK,
}

impl CountryCode {
    /// All supported codes, sorted.
    pub const ALL: [CountryCode; 27] = [
        Self::AT,
        Self::BE,
        Self::BG,
        Self::CY,
        Self::CZ,
        Self::DE,
        Self::DK,
        Self::EE,
        Self::EL,
        Self::ES,
        Self::FI,
        Self::FR,
        Self::GB,
        Self::HU,
        Self::IE,
        Self::IT,
        Self::LT,
        Self::LU,
        Self::LV,
        Self::MT,
        Self::NL,
        Self::PL,
        Self::PT,
        Self::RO,
        Self::SE,
        Self::SI,
        Self::SK,
    ];

    /// The uppercase two-letter prefix.
    pub fn as_str(self) -> &'static str {
        CODES[self as usize]
    }

    /// Parse a code, ignoring ASCII case. Surrounding whitespace is not
    /// trimmed and non-ASCII letters never fold onto a code, so `" DE"` and
    /// `"ıt"` do not parse.
    pub fn parse(code: &str) -> Option<Self> {
        let upper = code.to_ascii_uppercase();
        CODES
            .binary_search(&upper.as_str())
            .ok()
            .map(|idx| Self::ALL[idx])
    }
}

/// Check whether `code` (any case) has a VAT number pattern.
pub fn is_supported_country(code: &str) -> bool {
    CountryCode::parse(code).is_some()
}

/// Sorted for binary search; index matches the enum discriminant.
static CODES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "GB", "HU", "IE", "IT",
    "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];

/// Error returned when a string is not a supported country code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported country code '{0}'")]
pub struct UnknownCountryCode(pub String);

impl FromStr for CountryCode {
    type Err = UnknownCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCountryCode(s.to_string()))
    }
}

impl TryFrom<String> for CountryCode {
    type Error = UnknownCountryCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

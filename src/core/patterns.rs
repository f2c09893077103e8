//! Structural VAT number patterns per country.
//!
//! Used when the VIES service cannot be reached. Each pattern describes the
//! full lexical form including the two-letter prefix, so it is matched
//! against the VAT number exactly as the caller supplied it.
//!
//! Letters in fixed positions (the prefix, `U`, `X`, `S`, `L`, `B`, `GD`,
//! `HA`) are case-sensitive. Free alphanumeric positions accept both cases.

use std::sync::LazyLock;

use regex::Regex;

use super::countries::CountryCode;

/// A compiled structural pattern for one country.
#[derive(Debug)]
pub struct VatPattern {
    country: CountryCode,
    source: &'static str,
    regex: Regex,
}

impl VatPattern {
    /// The country this pattern belongs to.
    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// The regular expression source.
    pub fn as_str(&self) -> &'static str {
        self.source
    }

    /// Test `vat_number` against the pattern.
    pub fn is_match(&self, vat_number: &str) -> bool {
        self.regex.is_match(vat_number)
    }
}

// PT is only anchored at the start, so trailing characters are accepted.
// Every other entry must match the whole value.
const SOURCES: [(CountryCode, &str); 27] = [
    (CountryCode::AT, r"^ATU[0-9A-Za-z]{8}$"),
    (CountryCode::BE, r"^BE0[0-9]{9}$"),
    (CountryCode::BG, r"^BG[0-9]{9,10}$"),
    (CountryCode::CY, r"^CY[0-9A-Za-z]{8}L$"),
    (CountryCode::CZ, r"^CZ[0-9]{8,10}$"),
    (CountryCode::DE, r"^DE[0-9]{9}$"),
    (CountryCode::DK, r"^DK[0-9]{2} [0-9]{2} [0-9]{2} [0-9]{2}$"),
    (CountryCode::EE, r"^EE[0-9]{9}$"),
    (CountryCode::EL, r"^EL[0-9]{9}$"),
    (CountryCode::ES, r"^ESX[0-9]{7}X$"),
    (CountryCode::FI, r"^FI[0-9]{8}$"),
    (CountryCode::FR, r"^FR[0-9A-Za-z]{2} [0-9]{9}$"),
    (
        CountryCode::GB,
        r"^GB([0-9]{3} [0-9]{4} [0-9]{2}|[0-9]{3} [0-9]{4} [0-9]{2} [0-9]{3}|GD[0-9]{3}|HA[0-9]{3})$",
    ),
    (CountryCode::HU, r"^HU[0-9]{8}$"),
    (CountryCode::IE, r"^IE[0-9A-Za-z]S[0-9A-Za-z]{5}L$"),
    (CountryCode::IT, r"^IT[0-9]{11}$"),
    (CountryCode::LT, r"^LT([0-9]{9}|[0-9]{12})$"),
    (CountryCode::LU, r"^LU[0-9]{8}$"),
    (CountryCode::LV, r"^LV[0-9]{12}$"),
    (CountryCode::MT, r"^MT[0-9]{8}$"),
    (CountryCode::NL, r"^NL[0-9A-Za-z]{9}B[0-9A-Za-z]{2}$"),
    (CountryCode::PL, r"^PL[0-9]{10}$"),
    (CountryCode::PT, r"^PT[0-9]{9}"),
    (CountryCode::RO, r"^RO[0-9]{2,10}$"),
    (CountryCode::SE, r"^SE[0-9]{12}$"),
    (CountryCode::SI, r"^SI[0-9]{8}$"),
    (CountryCode::SK, r"^SK[0-9]{10}$"),
];

/// Compiled once on first use; indexed by `CountryCode` discriminant.
static PATTERNS: LazyLock<Vec<VatPattern>> = LazyLock::new(|| {
    SOURCES
        .iter()
        .map(|&(country, source)| VatPattern {
            country,
            source,
            regex: Regex::new(source).expect("valid VAT pattern"),
        })
        .collect()
});

/// Pattern for a supported country.
pub fn pattern_for(country: CountryCode) -> &'static VatPattern {
    &PATTERNS[country as usize]
}

/// Look up the pattern for `country_code`, ASCII-uppercasing it first.
///
/// Whitespace is not stripped; `"de "` yields `None`.
pub fn lookup_pattern(country_code: &str) -> Option<&'static VatPattern> {
    CountryCode::parse(country_code).map(pattern_for)
}

/// Structural check of `vat_number` for `country_code`.
///
/// Returns `None` when no pattern exists for the country.
pub fn matches_structure(country_code: &str, vat_number: &str) -> Option<bool> {
    lookup_pattern(country_code).map(|p| p.is_match(vat_number))
}

/// All patterns in country-code order.
pub fn patterns() -> impl Iterator<Item = &'static VatPattern> {
    PATTERNS.iter()
}

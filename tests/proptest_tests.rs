//! Property-based tests for the pattern table and the fallback policy.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use async_trait::async_trait;
use proptest::prelude::*;
use vatnum::core::*;
use vatnum::vat::*;

struct FailingVerifier;

#[async_trait]
impl VatVerifier for FailingVerifier {
    async fn check_vat(
        &self,
        _request: &VerificationRequest,
    ) -> Result<VerificationResponse, RemoteError> {
        Err(RemoteError::Timeout(1))
    }
}

struct ValidVerifier;

#[async_trait]
impl VatVerifier for ValidVerifier {
    async fn check_vat(
        &self,
        _request: &VerificationRequest,
    ) -> Result<VerificationResponse, RemoteError> {
        Ok(VerificationResponse::with_valid(true))
    }
}

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(fut)
}

/// One well-formed sample generator per country.
fn well_formed() -> impl Strategy<Value = (CountryCode, String)> {
    prop_oneof![
        "ATU[0-9A-Za-z]{8}".prop_map(|s| (CountryCode::AT, s)),
        "BE0[0-9]{9}".prop_map(|s| (CountryCode::BE, s)),
        "BG[0-9]{9,10}".prop_map(|s| (CountryCode::BG, s)),
        "CY[0-9A-Za-z]{8}L".prop_map(|s| (CountryCode::CY, s)),
        "CZ[0-9]{8,10}".prop_map(|s| (CountryCode::CZ, s)),
        "DE[0-9]{9}".prop_map(|s| (CountryCode::DE, s)),
        "DK[0-9]{2} [0-9]{2} [0-9]{2} [0-9]{2}".prop_map(|s| (CountryCode::DK, s)),
        "EE[0-9]{9}".prop_map(|s| (CountryCode::EE, s)),
        "EL[0-9]{9}".prop_map(|s| (CountryCode::EL, s)),
        "ESX[0-9]{7}X".prop_map(|s| (CountryCode::ES, s)),
        "FI[0-9]{8}".prop_map(|s| (CountryCode::FI, s)),
        "FR[0-9A-Za-z]{2} [0-9]{9}".prop_map(|s| (CountryCode::FR, s)),
        "GB([0-9]{3} [0-9]{4} [0-9]{2}( [0-9]{3})?|GD[0-9]{3}|HA[0-9]{3})"
            .prop_map(|s| (CountryCode::GB, s)),
        "HU[0-9]{8}".prop_map(|s| (CountryCode::HU, s)),
        "IE[0-9A-Za-z]S[0-9A-Za-z]{5}L".prop_map(|s| (CountryCode::IE, s)),
        "IT[0-9]{11}".prop_map(|s| (CountryCode::IT, s)),
        "LT([0-9]{9}|[0-9]{12})".prop_map(|s| (CountryCode::LT, s)),
        "LU[0-9]{8}".prop_map(|s| (CountryCode::LU, s)),
        "LV[0-9]{12}".prop_map(|s| (CountryCode::LV, s)),
        "MT[0-9]{8}".prop_map(|s| (CountryCode::MT, s)),
        "NL[0-9A-Za-z]{9}B[0-9A-Za-z]{2}".prop_map(|s| (CountryCode::NL, s)),
        "PL[0-9]{10}".prop_map(|s| (CountryCode::PL, s)),
        "PT[0-9]{9}".prop_map(|s| (CountryCode::PT, s)),
        "RO[0-9]{2,10}".prop_map(|s| (CountryCode::RO, s)),
        "SE[0-9]{12}".prop_map(|s| (CountryCode::SE, s)),
        "SI[0-9]{8}".prop_map(|s| (CountryCode::SI, s)),
        "SK[0-9]{10}".prop_map(|s| (CountryCode::SK, s)),
    ]
}

fn any_country() -> impl Strategy<Value = CountryCode> {
    prop::sample::select(CountryCode::ALL.to_vec())
}

proptest! {
    #[test]
    fn well_formed_accepted_offline((country, vat) in well_formed()) {
        let outcome = block_on(validate_vat_number(
            &FailingVerifier,
            country.as_str(),
            &vat,
            &ValidatorConfig::default(),
        ))
        .unwrap();
        prop_assert!(outcome.is_accepted(), "{} {}", country, vat);
        prop_assert_eq!(outcome.source, VerdictSource::Structural);
    }

    #[test]
    fn foreign_number_rejected_offline((origin, vat) in well_formed(), country in any_country()) {
        // The prefix always identifies the issuing country, so a number
        // formed for one country never matches another's pattern.
        prop_assume!(origin != country);
        let outcome = block_on(validate_vat_number(
            &FailingVerifier,
            country.as_str(),
            &vat,
            &ValidatorConfig::default(),
        ))
        .unwrap();
        prop_assert!(!outcome.is_accepted(), "{} accepted {}", country, vat);
    }

    #[test]
    fn remote_valid_always_accepted(country in "[A-Za-z]{0,3}", vat in ".{0,20}") {
        let outcome = block_on(validate_vat_number(
            &ValidVerifier,
            &country,
            &vat,
            &ValidatorConfig::default(),
        ))
        .unwrap();
        prop_assert!(outcome.is_accepted());
        prop_assert_eq!(outcome.source, VerdictSource::Remote);
    }

    #[test]
    fn unsupported_country_never_yields_verdict(country in "[A-Z]{2}", vat in "[A-Z0-9 ]{0,16}") {
        prop_assume!(!is_supported_country(&country));
        let result = block_on(validate_vat_number(
            &FailingVerifier,
            &country,
            &vat,
            &ValidatorConfig::default(),
        ));
        let is_unknown_country = matches!(result, Err(VatError::UnknownCountry { .. }));
        prop_assert!(is_unknown_country);
    }

    #[test]
    fn lookup_ignores_case(country in any_country()) {
        let lower = country.as_str().to_lowercase();
        let pattern = lookup_pattern(&lower).unwrap();
        prop_assert_eq!(pattern.country(), country);
    }

    #[test]
    fn matching_never_panics(country in ".{0,3}", vat in ".{0,40}") {
        let _ = matches_structure(&country, &vat);
    }
}

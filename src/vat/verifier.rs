//! The remote verification seam.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::RemoteError;

/// Request sent to the verification service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// Country code exactly as the caller supplied it.
    pub country_code: String,
    /// VAT number without the leading country prefix.
    pub vat_number: String,
}

impl VerificationRequest {
    /// Build a request, stripping `country_code` from the start of
    /// `vat_number` if it is there.
    pub fn new(country_code: &str, vat_number: &str) -> Self {
        Self {
            country_code: country_code.to_string(),
            vat_number: strip_country_prefix(country_code, vat_number).to_string(),
        }
    }
}

/// Remove `country_code` from the start of `vat_number`.
///
/// Only an exact, case-sensitive leading occurrence is removed. Anything
/// else returns the input unchanged.
pub fn strip_country_prefix<'a>(country_code: &str, vat_number: &'a str) -> &'a str {
    vat_number.strip_prefix(country_code).unwrap_or(vat_number)
}

/// Answer from the verification service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResponse {
    /// Whether the VAT number is currently valid.
    pub valid: bool,
    /// Date of the request (YYYY-MM-DD).
    pub request_date: Option<String>,
    /// Registered company name (if available).
    pub name: Option<String>,
    /// Registered address (if available).
    pub address: Option<String>,
}

impl VerificationResponse {
    /// A bare verdict without registration details.
    pub fn with_valid(valid: bool) -> Self {
        Self {
            valid,
            ..Self::default()
        }
    }
}

/// Authoritative VAT number verification.
///
/// Any `Err` is a remote failure and makes the validator fall back to the
/// structural pattern table.
#[async_trait]
pub trait VatVerifier: Send + Sync {
    /// Ask the service whether `request` names a valid VAT number.
    async fn check_vat(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResponse, RemoteError>;
}

#[async_trait]
impl<T: VatVerifier + ?Sized> VatVerifier for Arc<T> {
    async fn check_vat(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResponse, RemoteError> {
        (**self).check_vat(request).await
    }
}

#[async_trait]
impl<T: VatVerifier + ?Sized> VatVerifier for Box<T> {
    async fn check_vat(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResponse, RemoteError> {
        (**self).check_vat(request).await
    }
}

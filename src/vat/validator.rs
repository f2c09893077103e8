//! Two-tier VAT number validation: remote check first, structural fallback
//! when the remote check fails.

use crate::core::{RemoteError, ValidatorConfig, VatError, lookup_pattern};

use super::verifier::{VatVerifier, VerificationRequest, VerificationResponse};

/// Accept/reject decision for one VAT number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The VAT number is valid.
    Accepted,
    /// The VAT number is not valid.
    Rejected {
        /// The configured rejection message.
        message: String,
    },
}

/// Which tier produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictSource {
    /// The verification service answered.
    Remote,
    /// The service failed and the country pattern decided.
    Structural,
}

/// Result of a single validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Accept or reject.
    pub verdict: Verdict,
    /// The tier that decided.
    pub source: VerdictSource,
    /// The service's answer, when it gave one.
    pub response: Option<VerificationResponse>,
    /// The remote failure that was recovered from, for structural verdicts.
    pub remote_error: Option<RemoteError>,
}

impl Outcome {
    /// Whether the VAT number was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self.verdict, Verdict::Accepted)
    }

    /// The rejection message, if rejected.
    pub fn rejection(&self) -> Option<&str> {
        match &self.verdict {
            Verdict::Accepted => None,
            Verdict::Rejected { message } => Some(message),
        }
    }
}

/// Validate `vat_number` for `country_code`.
///
/// Makes exactly one call to `verifier`. A successful answer is final:
/// `valid == true` accepts, anything else rejects with `config.message`.
/// A failed call falls back to the pattern for the uppercased country code,
/// matched against the original `vat_number` (prefix included).
///
/// # Errors
///
/// - [`VatError::Remote`] with the original error when the call fails and
///   `country_code` is blank.
/// - [`VatError::UnknownCountry`] when the call fails and no pattern exists
///   for `country_code`.
pub async fn validate_vat_number<V: VatVerifier + ?Sized>(
    verifier: &V,
    country_code: &str,
    vat_number: &str,
    config: &ValidatorConfig,
) -> Result<Outcome, VatError> {
    let request = VerificationRequest::new(country_code, vat_number);
    tracing::debug!(
        country_code = %request.country_code,
        vat_number = %request.vat_number,
        "checking VAT number"
    );

    let remote_error = match verifier.check_vat(&request).await {
        Ok(response) => {
            tracing::debug!(valid = response.valid, "result from VAT check");
            return Ok(Outcome {
                verdict: verdict(response.valid, config),
                source: VerdictSource::Remote,
                response: Some(response),
                remote_error: None,
            });
        }
        Err(e) => e,
    };

    if country_code.trim().is_empty() {
        tracing::warn!(
            error = %remote_error,
            "VAT check failed and no country code to fall back on"
        );
        return Err(VatError::Remote(remote_error));
    }

    let Some(pattern) = lookup_pattern(country_code) else {
        tracing::warn!(
            country_code,
            error = %remote_error,
            "VAT check failed and no pattern for country code"
        );
        return Err(VatError::UnknownCountry {
            country_code: country_code.to_string(),
            source: remote_error,
        });
    };

    tracing::warn!(
        country = %pattern.country(),
        error = %remote_error,
        "VAT check failed, falling back to structural check"
    );
    let matched = pattern.is_match(vat_number);
    tracing::debug!(matched, pattern = pattern.as_str(), "structural VAT check");

    Ok(Outcome {
        verdict: verdict(matched, config),
        source: VerdictSource::Structural,
        response: None,
        remote_error: Some(remote_error),
    })
}

fn verdict(valid: bool, config: &ValidatorConfig) -> Verdict {
    if valid {
        Verdict::Accepted
    } else {
        Verdict::Rejected {
            message: config.message.clone(),
        }
    }
}

/// A verifier bound to a validation config.
///
/// Holds no per-call state; one instance can serve concurrent validations.
#[derive(Debug, Clone)]
pub struct VatValidator<V> {
    verifier: V,
    config: ValidatorConfig,
}

impl<V: VatVerifier> VatValidator<V> {
    /// Validator with the default config.
    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            config: ValidatorConfig::default(),
        }
    }

    /// Replace the config.
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// The config applied to every validation.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The remote verifier.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// See [`validate_vat_number`].
    pub async fn validate(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<Outcome, VatError> {
        validate_vat_number(&self.verifier, country_code, vat_number, &self.config).await
    }
}

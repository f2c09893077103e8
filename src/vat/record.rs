//! Adapter for validating a VAT number attribute on a host record.

use std::collections::HashMap;

use crate::core::{ValidationError, ValidatorConfig, VatError};

use super::validator::{VatValidator, Verdict, validate_vat_number};
use super::verifier::VatVerifier;

/// A host entity exposing string attributes by name.
pub trait VatRecord {
    /// Value of the attribute called `name`, or `None` if the record has none.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl VatRecord for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Validate the VAT number in `field`, reading the country code from the
/// `config.scope` attribute. Missing attributes are treated as empty.
///
/// Returns an empty list when accepted and one error keyed to `field` when
/// rejected.
///
/// # Errors
///
/// Propagates [`VatError`] when no verdict can be reached.
pub async fn validate_record<R, V>(
    record: &R,
    field: &str,
    verifier: &V,
    config: &ValidatorConfig,
) -> Result<Vec<ValidationError>, VatError>
where
    R: VatRecord + ?Sized,
    V: VatVerifier + ?Sized,
{
    let country_code = record.attribute(&config.scope).unwrap_or_default();
    let vat_number = record.attribute(field).unwrap_or_default();

    let outcome = validate_vat_number(verifier, country_code, vat_number, config).await?;
    Ok(match outcome.verdict {
        Verdict::Accepted => Vec::new(),
        Verdict::Rejected { message } => vec![ValidationError::new(field, message)],
    })
}

impl<V: VatVerifier> VatValidator<V> {
    /// See [`validate_record`].
    pub async fn validate_record<R: VatRecord + ?Sized>(
        &self,
        record: &R,
        field: &str,
    ) -> Result<Vec<ValidationError>, VatError> {
        validate_record(record, field, self.verifier(), self.config()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashmap_attributes() {
        let mut record = HashMap::new();
        record.insert("country_code".to_string(), "DE".to_string());
        assert_eq!(record.attribute("country_code"), Some("DE"));
        assert_eq!(record.attribute("vat_number"), None);
    }
}

use thiserror::Error;

/// Failure of the remote verification attempt.
///
/// Every variant is treated the same way by the validator: it triggers the
/// structural fallback. The payloads are plain strings so the error stays
/// `Clone` and can be carried inside an [`Outcome`](crate::vat::Outcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RemoteError {
    /// Connection, DNS, TLS or other transport error.
    #[error("VIES network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("VIES request timed out after {0} ms")]
    Timeout(u64),

    /// The service answered with a fault (HTTP error, member state unavailable).
    #[error("VIES API error: {0}")]
    Api(String),

    /// The response did not have the expected shape.
    #[error("VIES parse error: {0}")]
    Parse(String),
}

/// Errors surfaced to the caller instead of a verdict.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VatError {
    /// The remote check failed and there was no country code to fall back on.
    /// Carries the original remote error unchanged.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The remote check failed and the country code has no structural pattern.
    #[error("no VAT number pattern for country code '{country_code}'")]
    UnknownCountry {
        /// The country code as supplied by the caller.
        country_code: String,
        /// The remote failure that triggered the fallback.
        #[source]
        source: RemoteError,
    },

    /// Configuration could not be loaded or applied.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A failed validation keyed to the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the validated attribute (e.g. "vat_number").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

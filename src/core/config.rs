//! Validator and VIES client configuration.
//!
//! Both structs deserialize from partial JSON; missing fields take their
//! defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::VatError;

/// Default rejection message attached to the validated field.
pub const DEFAULT_MESSAGE: &str = "is not valid Vat EU number";

/// Default name of the record attribute holding the country code.
pub const DEFAULT_SCOPE: &str = "country_code";

/// EU VIES REST endpoint for single VAT number checks.
pub const DEFAULT_VIES_ENDPOINT: &str =
    "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// Default VIES request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Options for a VAT number validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Message recorded on rejection.
    pub message: String,
    /// Record attribute the country code is read from.
    pub scope: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.into(),
            scope: DEFAULT_SCOPE.into(),
        }
    }
}

impl ValidatorConfig {
    /// Set the rejection message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the country code attribute name.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Parse from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, VatError> {
        serde_json::from_str(json).map_err(|e| VatError::Config(e.to_string()))
    }
}

/// Options for the VIES HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViesConfig {
    /// URL the check request is POSTed to.
    pub endpoint: String,
    /// Request timeout in milliseconds. Expiry counts as a remote failure.
    pub timeout_ms: u64,
}

impl Default for ViesConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_VIES_ENDPOINT.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ViesConfig {
    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout, rounded down to whole milliseconds and
    /// clamped to at least 1 ms.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis())
            .unwrap_or(u64::MAX)
            .max(1);
        self
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Parse from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, VatError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| VatError::Config(e.to_string()))?;
        if config.timeout_ms == 0 {
            return Err(VatError::Config("timeout_ms must be greater than zero".into()));
        }
        Ok(config)
    }
}

//! EU VIES REST API client for VAT number validation.

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::{RemoteError, ViesConfig};

use super::validator::VatValidator;
use super::verifier::{VatVerifier, VerificationRequest, VerificationResponse};

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViesApiResponse {
    valid: Option<bool>,
    request_date: Option<String>,
    name: Option<String>,
    address: Option<String>,
    // Error fields
    error_wrappers: Option<Vec<ViesErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
struct ViesErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

/// HTTP client for the VIES check endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ViesClient {
    http: reqwest::Client,
    config: ViesConfig,
}

impl ViesClient {
    /// Build a client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Network` if the TLS backend cannot be initialised.
    pub fn new(config: ViesConfig) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// The endpoint and timeout this client was built with.
    pub fn config(&self) -> &ViesConfig {
        &self.config
    }

    fn map_transport(&self, e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            RemoteError::Timeout(self.config.timeout_ms)
        } else {
            RemoteError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl VatVerifier for ViesClient {
    async fn check_vat(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResponse, RemoteError> {
        let resp = self
            .http
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.map_transport(e))?;

        if !status.is_success() {
            return Err(RemoteError::Api(format!("HTTP {status}: {body}")));
        }

        parse_response(&body)
    }
}

/// Turn a 2xx response body into a verification answer.
fn parse_response(body: &str) -> Result<VerificationResponse, RemoteError> {
    let api_resp: ViesApiResponse = serde_json::from_str(body)
        .map_err(|e: serde_json::Error| RemoteError::Parse(e.to_string()))?;

    // Check for API-level errors
    if let Some(ref errors) = api_resp.error_wrappers {
        if let Some(err) = errors.first() {
            let msg = err
                .message
                .clone()
                .or_else(|| err.error.clone())
                .unwrap_or_else(|| "unknown error".into());
            return Err(RemoteError::Api(msg));
        }
    }

    Ok(VerificationResponse {
        valid: api_resp.valid == Some(true),
        request_date: api_resp.request_date,
        name: api_resp.name.filter(|n| n != "---" && !n.is_empty()),
        address: api_resp.address.filter(|a| a != "---" && !a.is_empty()),
    })
}

/// Check a VAT number against the EU VIES API with the default config.
///
/// `country_code` is the 2-letter prefix (e.g. "DE").
/// `vat_number` is the number part without the country prefix.
///
/// # Errors
///
/// Returns `RemoteError::Network` or `RemoteError::Timeout` on connection
/// issues, `RemoteError::Api` if a member state is unavailable,
/// `RemoteError::Parse` on unexpected response formats.
pub async fn check_vies(
    country_code: &str,
    vat_number: &str,
) -> Result<VerificationResponse, RemoteError> {
    let client = ViesClient::new(ViesConfig::default())?;
    let request = VerificationRequest {
        country_code: country_code.to_string(),
        vat_number: vat_number.to_string(),
    };
    client.check_vat(&request).await
}

impl VatValidator<ViesClient> {
    /// Validator backed by a VIES client.
    pub fn vies(config: ViesConfig) -> Result<Self, RemoteError> {
        Ok(Self::new(ViesClient::new(config)?))
    }
}

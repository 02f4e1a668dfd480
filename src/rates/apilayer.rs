//! HTTP exchange-rate provider
//!
//! Queries an exchangerates_data compatible endpoint:
//! `GET {base}/latest?symbols=RUB&base={CODE}` with the key in the `apikey`
//! header, and reads `rates.RUB` from the JSON body.

use crate::core::traits::RateProvider;
use crate::types::{OperationsError, RateError, REFERENCE_CURRENCY};
use log::debug;
use reqwest::blocking::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;

/// Default service root
pub const DEFAULT_BASE_URL: &str = "https://api.apilayer.com/exchangerates_data";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking client for the exchange-rate API
pub struct ApiLayerRates {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiLayerRates {
    /// Create a client
    ///
    /// # Arguments
    ///
    /// * `base_url` - Service root, without the `/latest` suffix
    /// * `api_key` - API key; without one every lookup fails with
    ///   [`RateError::MissingApiKey`] and no request is sent
    /// * `timeout` - Whole-request timeout
    ///
    /// # Returns
    ///
    /// * `Ok(ApiLayerRates)` - ready client
    /// * `Err(OperationsError::RateClient)` - the HTTP client could not be built
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, OperationsError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OperationsError::RateClient {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }
}

impl RateProvider for ApiLayerRates {
    fn rate(&self, currency: &str) -> Result<Decimal, RateError> {
        let api_key = self.api_key.as_deref().ok_or(RateError::MissingApiKey)?;
        let url = format!("{}/latest", self.base_url);
        debug!("Requesting {} rate from {}", currency, url);

        let response = self
            .client
            .get(&url)
            .query(&[("symbols", REFERENCE_CURRENCY), ("base", currency)])
            .header("apikey", api_key)
            .send()
            .map_err(RateError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(RateError::network)?;
        parse_rate_response(&body, currency)
    }
}

/// Extract the RUB rate from a response body
///
/// # Returns
///
/// * `Ok(Decimal)` - the positive rate
/// * `Err(RateError::Malformed)` - the body is not JSON or the rate is not a number
/// * `Err(RateError::RateNotFound)` - no rate, or a zero rate
pub fn parse_rate_response(body: &str, currency: &str) -> Result<Decimal, RateError> {
    let document: Value = serde_json::from_str(body).map_err(RateError::malformed)?;

    let rate = match document.get("rates").and_then(|rates| rates.get(REFERENCE_CURRENCY)) {
        None | Some(Value::Null) => return Err(RateError::rate_not_found(currency)),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| RateError::malformed(format!("rate is not a number: {}", value)))?,
    };

    if rate == 0.0 {
        return Err(RateError::rate_not_found(currency));
    }

    Decimal::try_from(rate).map_err(RateError::malformed)
}

use serde::Deserialize;

use crate::error::AppError;

/// Reverse-geocoding lookup against a Nominatim-shaped endpoint. Failures
/// become [`AppError::Geocode`] and are shown to the user; there is no
/// automatic retry.
#[derive(Clone)]
pub struct Geocoder {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: String,
}

impl Geocoder {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<String, AppError> {
        let url = format!(
            "{}/reverse?format=json&lat={lat}&lon={lon}",
            self.base_url.trim_end_matches('/')
        );

        let resp = self
            .http
            .get(&url)
            // Nominatim rejects requests without an identifying agent.
            .header(reqwest::header::USER_AGENT, "waybill/0.1")
            .send()
            .await
            .map_err(|err| AppError::Geocode(err.to_string()))?;

        if !resp.status().is_success() {
            return Err(AppError::Geocode(format!(
                "geocoder responded with {}",
                resp.status()
            )));
        }

        let body: ReverseResponse = resp
            .json()
            .await
            .map_err(|err| AppError::Geocode(format!("unexpected geocoder payload: {err}")))?;

        Ok(body.display_name)
    }
}

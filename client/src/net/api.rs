//! REST call to the prediction service.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the request is only
//! issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` and end up in the predictor's failed
//! state; nothing here panics during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use schema::{CveModel, CvePrediction};

/// Base URL used when `PUBLIC_CVEPRED_URL` was not set at build time.
pub const DEFAULT_PREDICT_BASE_URL: &str = "http://localhost:8000";

/// Prediction service base URL, captured from `PUBLIC_CVEPRED_URL` at build time.
#[must_use]
pub fn predict_base_url() -> &'static str {
    resolve_base_url(option_env!("PUBLIC_CVEPRED_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_PREDICT_BASE_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn predict_failed_message(status: u16) -> String {
    format!("predict request failed: {status}")
}

/// Submit a batch to `POST /predict`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent, the service answers
/// with a non-OK status, or the body does not match the response schema.
pub async fn predict(batch: &[CveModel]) -> Result<Vec<CvePrediction>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = schema::predict_url(predict_base_url());
        let body = schema::PredictRequest { data: batch.to_vec() };
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(predict_failed_message(resp.status()));
        }
        let body: schema::PredictResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = batch;
        Err("not available on server".to_owned())
    }
}

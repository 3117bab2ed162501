//! HTTP routes for the pricing engine.

use axum::{body::Bytes, routing::post, Json, Router};

use super::responses::PriceResultResponse;
use super::services::{predict_from_body, PriceOutcome};

/// Pricing routes, mounted at the root
pub fn router() -> Router {
    Router::new().route("/predict", post(predict))
}

/// Seasonal price prediction.
///
/// Always answers 200; failures are reported in the body.
pub async fn predict(body: Bytes) -> Json<PriceResultResponse> {
    tracing::info!(payload = %String::from_utf8_lossy(&body), "Request received");

    let outcome = predict_from_body(&body);
    let response = PriceResultResponse::from(&outcome);

    match &outcome {
        PriceOutcome::Priced { predicted_price, season } => {
            tracing::info!(
                predicted_price = %predicted_price,
                multiplier = %season.multiplier(),
                reason = season.reason(),
                "Prediction succeeded"
            );
        }
        PriceOutcome::Fallback { predicted_price, error } => {
            tracing::warn!(
                predicted_price = %predicted_price,
                error = %error,
                "Prediction failed, returning fallback price"
            );
        }
    }

    Json(response)
}

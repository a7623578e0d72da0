use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::rating::expected_score;

#[derive(Debug, Deserialize)]
pub struct PredictParams {
    pub rating_a: f64,
    pub rating_b: f64,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub rating_a: f64,
    pub rating_b: f64,
    pub expected_a: f64,
    pub expected_b: f64,
}

/// Expected-score diagnostic: the predicted outcome probability for each
/// side of a hypothetical pairing.
pub async fn predict(
    Query(params): Query<PredictParams>,
) -> Result<Json<PredictResponse>, ApiError> {
    if !params.rating_a.is_finite() || !params.rating_b.is_finite() {
        return Err(ApiError::BadRequest("ratings must be finite".to_string()));
    }

    Ok(Json(PredictResponse {
        rating_a: params.rating_a,
        rating_b: params.rating_b,
        expected_a: expected_score(params.rating_a, params.rating_b),
        expected_b: expected_score(params.rating_b, params.rating_a),
    }))
}

use axum::body::Bytes;
use axum::Json;
use contracts::usecases::u001_generate_table::GenerateResponse;

use crate::shared::config::config;
use crate::shared::error::ApiError;
use crate::usecases::u001_generate_table::{generate_table, GenerateParams};

/// POST /api/generate
///
/// The body is parsed by hand so a malformed payload is reported the same
/// way as any other generator failure (500 + detail).
pub async fn generate(body: Bytes) -> Result<Json<GenerateResponse>, ApiError> {
    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidPayload(e.to_string()))?;

    let generator = &config().generator;
    let params = GenerateParams::from_payload(&payload, generator.max_rows)?;

    tracing::debug!("generate: model={} rows={}", params.model, params.rows);

    Ok(Json(generate_table(&params, generator.seed)))
}

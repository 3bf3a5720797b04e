//! 健康检查

use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AppState;
use crate::core::error::{CoreError, ErrorResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "healthy",
    "store": "connected",
    "version": "0.1.0",
    "timestamp": "2024-05-01T12:00:00Z"
}))]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// 健康检查，同时探测文档存储
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Serviço saudável", body = HealthResponse),
        (status = 500, description = "Armazenamento indisponível", body = ErrorResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, CoreError> {
    state.store.ping().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        store: "connected".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    }))
}

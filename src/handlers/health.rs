use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub technicians: usize,
    pub homes: usize,
    pub businesses: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Service health and directory load summary
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let directory = &state.directory;

    Json(HealthResponse {
        status: "ok",
        technicians: directory.technicians.len(),
        homes: directory.homes.len(),
        businesses: directory.businesses.len(),
        loaded_at: directory.loaded_at,
    })
}

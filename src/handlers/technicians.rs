use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::entities::technician::{Technician, TechnicianStatus};
use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TechnicianFilter {
    pub specialty: Option<String>,
    pub status: Option<TechnicianStatus>,
}

/// List technicians, optionally filtered by specialty and status
pub async fn list_technicians(
    State(state): State<AppState>,
    Query(filter): Query<TechnicianFilter>,
) -> Json<Vec<Technician>> {
    let technicians = state
        .directory
        .technicians
        .iter()
        .filter(|t| {
            filter
                .specialty
                .as_deref()
                .map_or(true, |specialty| t.specialty.eq_ignore_ascii_case(specialty))
        })
        .filter(|t| filter.status.map_or(true, |status| t.status == status))
        .cloned()
        .collect();

    Json(technicians)
}

/// Get a single technician by name
pub async fn get_technician(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Technician>> {
    state
        .directory
        .technicians
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(&name))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Technician '{}' not found", name)))
}

/// List the distinct specialties in the directory, for the filter dropdown
pub async fn list_specialties(State(state): State<AppState>) -> Json<Vec<String>> {
    let mut specialties: Vec<String> = Vec::new();

    for technician in &state.directory.technicians {
        if !specialties
            .iter()
            .any(|s| s.eq_ignore_ascii_case(&technician.specialty))
        {
            specialties.push(technician.specialty.clone());
        }
    }

    specialties.sort();
    Json(specialties)
}

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::entities::technician::Technician;
use crate::error::{AppError, AppResult};
use crate::utils::dispatch::{self, Selection};
use crate::utils::geo::Coordinate;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AssignNearestRequest {
    #[serde(flatten)]
    pub position: Coordinate,
    pub specialty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssignedTechnician {
    pub technician: Technician,
    pub distance_km: f64,
    pub eta_minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct AssignNearestResponse {
    pub assigned: Option<AssignedTechnician>,
    pub message: String,
}

/// Assign the nearest available technician to the caller's position.
///
/// An empty candidate set is not an error: the response carries
/// `assigned: null` and an informational message for the frontend.
pub async fn assign_nearest(
    State(state): State<AppState>,
    Json(payload): Json<AssignNearestRequest>,
) -> AppResult<Json<AssignNearestResponse>> {
    if !payload.position.is_valid() {
        return Err(AppError::BadRequest(
            "Position must be a valid latitude/longitude pair".to_string(),
        ));
    }

    let technicians = &state.directory.technicians;
    let selection = match payload.specialty.as_deref() {
        Some(specialty) => dispatch::select_nearest(
            payload.position,
            technicians
                .iter()
                .filter(|t| t.specialty.eq_ignore_ascii_case(specialty)),
        ),
        None => dispatch::select_nearest(payload.position, technicians.iter()),
    };

    let response = match selection {
        Some(selection) => assignment_response(&state, selection),
        None => AssignNearestResponse {
            assigned: None,
            message: "No technicians are currently available".to_string(),
        },
    };

    Ok(Json(response))
}

fn assignment_response(state: &AppState, selection: Selection<'_>) -> AssignNearestResponse {
    let eta_minutes =
        dispatch::eta_minutes(selection.distance_km, state.config.speed_km_per_minute());

    tracing::info!(
        technician = %selection.technician.name,
        distance_km = selection.distance_km,
        eta_minutes,
        "Assigned nearest technician"
    );

    AssignNearestResponse {
        message: format!(
            "{} is {:.2} km away, about {} min",
            selection.technician.name, selection.distance_km, eta_minutes
        ),
        assigned: Some(AssignedTechnician {
            technician: selection.technician.clone(),
            distance_km: selection.distance_km,
            eta_minutes,
        }),
    }
}

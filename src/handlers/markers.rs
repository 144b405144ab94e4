use axum::{extract::State, Json};
use serde::Serialize;

use crate::entities::place::Place;
use crate::entities::technician::{Technician, TechnicianStatus};
use crate::utils::geo::Coordinate;
use crate::AppState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Technician,
    Home,
    Business,
}

#[derive(Debug, Serialize)]
pub struct MarkerResponse {
    pub kind: MarkerKind,
    pub name: String,
    #[serde(flatten)]
    pub position: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TechnicianStatus>,
}

/// List every marker shown on the map
pub async fn list_markers(State(state): State<AppState>) -> Json<Vec<MarkerResponse>> {
    let directory = &state.directory;

    let mut responses = Vec::with_capacity(
        directory.technicians.len() + directory.homes.len() + directory.businesses.len(),
    );

    for technician in &directory.technicians {
        responses.push(technician_marker(technician));
    }
    for home in &directory.homes {
        responses.push(place_marker(home, MarkerKind::Home));
    }
    for business in &directory.businesses {
        responses.push(place_marker(business, MarkerKind::Business));
    }

    Json(responses)
}

fn technician_marker(technician: &Technician) -> MarkerResponse {
    MarkerResponse {
        kind: MarkerKind::Technician,
        name: technician.name.clone(),
        position: technician.position,
        specialty: Some(technician.specialty.clone()),
        status: Some(technician.status),
    }
}

fn place_marker(place: &Place, kind: MarkerKind) -> MarkerResponse {
    MarkerResponse {
        kind,
        name: place.name.clone(),
        position: place.position,
        specialty: None,
        status: None,
    }
}

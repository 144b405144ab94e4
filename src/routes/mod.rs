use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{dispatch, health, markers, technicians};
use crate::middleware::rate_limit::{create_public_governor, log_request};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // IP-based governor for the public map routes
    let public_governor = create_public_governor();

    // Public routes consumed by the map frontend; the health endpoint is
    // added after the governor so it stays outside the rate limiter
    let public_routes = Router::new()
        .route("/markers", get(markers::list_markers))
        .route("/technicians", get(technicians::list_technicians))
        .route("/technicians/{name}", get(technicians::get_technician))
        .route("/specialties", get(technicians::list_specialties))
        .route("/dispatch/nearest", post(dispatch::assign_nearest))
        .layer(public_governor)
        .route("/health", get(health::health));

    Router::new()
        .nest("/api", public_routes)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

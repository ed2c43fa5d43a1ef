// src/api/mod.rs

pub mod handler;

use crate::models::AppState;
use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use handler::{
    health_handler, list_appointments_handler, set_appointment_status_handler,
    update_appointment_handler,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/appointments", get(list_appointments_handler))
        .route("/appointments/{id}", patch(update_appointment_handler))
        .route(
            "/appointments/{id}/status",
            patch(set_appointment_status_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

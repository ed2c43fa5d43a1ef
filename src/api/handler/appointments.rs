use crate::error::ApiError;
use crate::models::{
    Appointment, AppointmentDetailsUpdate, AppointmentFilters, AppState, StatusUpdateRequest,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

pub async fn list_appointments_handler(
    State(state): State<Arc<AppState>>,
    filters: Result<Query<AppointmentFilters>, QueryRejection>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let Query(filters) = filters?;
    let service = state.appointments.lock().await;

    Ok(Json(service.list_appointments(Some(&filters))))
}

pub async fn set_appointment_status_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<StatusUpdateRequest>, JsonRejection>,
) -> Result<Json<Appointment>, ApiError> {
    let Json(payload) = payload?;
    let mut service = state.appointments.lock().await;

    service
        .set_appointment_status(&id, payload.status)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(id))
}

pub async fn update_appointment_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<AppointmentDetailsUpdate>, JsonRejection>,
) -> Result<Json<Appointment>, ApiError> {
    let Json(update) = payload?;
    let mut service = state.appointments.lock().await;

    service
        .update_appointment_details(&id, update)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(id))
}

// src/models/mod.rs

pub mod api;
pub mod app;
pub mod appointments;

pub use api::StatusUpdateRequest;
pub use app::AppState;
pub use appointments::{Appointment, AppointmentDetailsUpdate, AppointmentFilters, Tab};

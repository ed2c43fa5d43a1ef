pub mod appointments;
pub mod health;

pub use appointments::{
    list_appointments_handler, set_appointment_status_handler, update_appointment_handler,
};
pub use health::health_handler;

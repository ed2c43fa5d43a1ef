pub mod appointment;

pub use appointment::{Appointment, AppointmentDetailsUpdate, AppointmentFilters, Tab};

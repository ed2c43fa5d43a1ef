use crate::config::Config;
use crate::db::AppointmentStore;
use crate::services::AppointmentService;
use tokio::sync::Mutex;

/// Shared state handed to every handler.
///
/// A single lock serializes access so a lookup and the mutation that follows
/// it cannot interleave with another request.
pub struct AppState {
    pub appointments: Mutex<AppointmentService>,
}

impl AppState {
    pub fn new(service: AppointmentService) -> Self {
        Self {
            appointments: Mutex::new(service),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(AppointmentService::new(
            AppointmentStore::seeded(),
            config.today,
        ))
    }
}

// src/services/appointment_service/mod.rs

pub mod effects;
pub mod list;
pub mod set;
pub mod update;

use crate::db::AppointmentStore;
use chrono::NaiveDate;
use std::sync::Arc;

pub use effects::{
    AppointmentChange, ChangeKind, EffectError, LogNotifier, LogPersister, Notifier, Persister,
    UPDATE_TOPIC,
};
pub use list::filter_appointments;

/// Query and update operations over one appointment store.
///
/// The service owns the store outright. Mutations run the persister and
/// notifier after the in-memory change.
pub struct AppointmentService {
    store: AppointmentStore,
    today: String,
    persister: Arc<dyn Persister>,
    notifier: Arc<dyn Notifier>,
}

impl AppointmentService {
    pub fn new(store: AppointmentStore, today: NaiveDate) -> Self {
        Self {
            store,
            today: today.format("%Y-%m-%d").to_string(),
            persister: Arc::new(LogPersister),
            notifier: Arc::new(LogNotifier),
        }
    }

    pub fn with_collaborators(
        mut self,
        persister: Arc<dyn Persister>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        self.persister = persister;
        self.notifier = notifier;
        self
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    /// Reference date for tab filtering, as `YYYY-MM-DD`.
    pub fn today(&self) -> &str {
        &self.today
    }
}

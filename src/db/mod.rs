// src/db/mod.rs

pub mod seed;

use crate::models::{Appointment, AppointmentDetailsUpdate};
use std::collections::HashSet;
use thiserror::Error;

pub use seed::seed_appointments;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate appointment id: {0}")]
    DuplicateId(String),
}

/// In-memory backing collection for appointments.
///
/// Records keep their insertion order for the lifetime of the store. Nothing
/// is ever added or removed after construction; only fields of existing
/// records change, addressed by id.
#[derive(Debug, Clone)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new(appointments: Vec<Appointment>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for appointment in &appointments {
            if !seen.insert(appointment.id.as_str()) {
                return Err(StoreError::DuplicateId(appointment.id.clone()));
            }
        }

        Ok(Self { appointments })
    }

    /// The fixed seed the process starts with.
    pub fn seeded() -> Self {
        Self {
            appointments: seed_appointments(),
        }
    }

    pub fn records(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Appointment> {
        self.appointments.iter_mut().find(|a| a.id == id)
    }

    pub fn set_status(&mut self, id: &str, status: String) -> Option<&Appointment> {
        let appointment = self.get_mut(id)?;
        appointment.status = status;
        Some(&*appointment)
    }

    pub fn apply_details(
        &mut self,
        id: &str,
        update: AppointmentDetailsUpdate,
    ) -> Option<&Appointment> {
        let appointment = self.get_mut(id)?;
        update.apply_to(appointment);
        Some(&*appointment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_ten_records_with_unique_ids() {
        let store = AppointmentStore::seeded();
        assert_eq!(store.len(), 10);
        assert!(AppointmentStore::new(store.records().to_vec()).is_ok());

        let ids: Vec<&str> = store.records().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut records = seed_appointments();
        records[3].id = "1".to_string();

        let err = AppointmentStore::new(records).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("1".to_string()));
    }

    #[test]
    fn set_status_mutates_the_stored_record() {
        let mut store = AppointmentStore::seeded();

        let updated = store.set_status("3", "Completed".to_string()).cloned();

        assert_eq!(updated.map(|a| a.status), Some("Completed".to_string()));
        assert_eq!(store.get("3").unwrap().status, "Completed");
    }

    #[test]
    fn set_status_on_missing_id_changes_nothing() {
        let mut store = AppointmentStore::seeded();

        assert!(store.set_status("999", "Cancelled".to_string()).is_none());
        assert_eq!(store.records(), seed_appointments().as_slice());
    }

    #[test]
    fn apply_details_keeps_id() {
        let mut store = AppointmentStore::seeded();
        let update = AppointmentDetailsUpdate {
            date: Some("2023-11-02".to_string()),
            ..Default::default()
        };

        let updated = store.apply_details("5", update).cloned().unwrap();

        assert_eq!(updated.id, "5");
        assert_eq!(updated.date, "2023-11-02");
        assert_eq!(updated.patient_name, "Evan Wright");
    }
}

use super::effects::{commit_change, ChangeKind};
use super::AppointmentService;
use crate::models::Appointment;

impl AppointmentService {
    /// Overwrite the status of the appointment with `id`.
    ///
    /// Returns the stored record after the change, or `None` when no
    /// appointment has that id. The status string is not checked against
    /// any list of known values.
    pub fn set_appointment_status(&mut self, id: &str, status: String) -> Option<&Appointment> {
        let Some(appointment) = self.store.set_status(id, status) else {
            log::debug!("set_appointment_status: no appointment with id {}", id);
            return None;
        };

        log::info!(
            "appointment {} status set to {}",
            appointment.id,
            appointment.status
        );
        commit_change(
            self.persister.as_ref(),
            self.notifier.as_ref(),
            ChangeKind::StatusChanged,
            appointment,
        );
        Some(appointment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed_appointments;
    use crate::models::AppointmentFilters;
    use crate::services::appointment_service::effects::testing::{
        RecordingNotifier, RecordingPersister,
    };
    use crate::services::appointment_service::testing::{recording_service, seeded_service};
    use std::sync::Arc;

    #[test]
    fn cancels_alice_and_lists_her_as_cancelled() {
        let mut service = seeded_service();

        let updated = service
            .set_appointment_status("1", "Cancelled".to_string())
            .cloned()
            .unwrap();

        assert_eq!(updated.patient_name, "Alice Johnson");
        assert_eq!(updated.status, "Cancelled");

        let cancelled = service.list_appointments(Some(&AppointmentFilters::by_status("Cancelled")));
        assert_eq!(cancelled, vec![updated]);
    }

    #[test]
    fn only_the_status_field_of_one_record_changes() {
        let mut service = seeded_service();

        service.set_appointment_status("7", "Completed".to_string());

        let mut expected = seed_appointments();
        expected[6].status = "Completed".to_string();
        assert_eq!(service.store().records(), expected.as_slice());
    }

    #[test]
    fn returns_the_record_living_in_the_store() {
        let mut service = seeded_service();

        let returned = service
            .set_appointment_status("4", "Completed".to_string())
            .map(|a| a as *const Appointment);

        let stored = service.store().get("4").map(|a| a as *const Appointment);
        assert_eq!(returned, stored);
    }

    #[test]
    fn unknown_id_is_a_miss_not_an_error() {
        let (mut service, persister, notifier) = recording_service(RecordingPersister::default());

        assert!(service
            .set_appointment_status("999", "Cancelled".to_string())
            .is_none());

        assert_eq!(service.store().records(), seed_appointments().as_slice());
        assert!(service.store().get("999").is_none());
        assert!(persister.saved().is_empty());
        assert!(notifier.changes().is_empty());
    }

    #[test]
    fn same_status_twice_is_idempotent() {
        let mut once = seeded_service();
        let mut twice = seeded_service();

        once.set_appointment_status("2", "Confirmed".to_string());
        twice.set_appointment_status("2", "Confirmed".to_string());
        twice.set_appointment_status("2", "Confirmed".to_string());

        assert_eq!(once.store().records(), twice.store().records());
    }

    #[test]
    fn accepts_statuses_outside_the_usual_set() {
        let mut service = seeded_service();

        let updated = service.set_appointment_status("3", "No-Show".to_string());

        assert_eq!(updated.map(|a| a.status.as_str()), Some("No-Show"));
    }

    #[test]
    fn persists_then_notifies() {
        let (mut service, persister, notifier) = recording_service(RecordingPersister::default());

        service.set_appointment_status("5", "Cancelled".to_string());

        let saved = persister.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, "5");
        assert_eq!(saved[0].status, "Cancelled");

        let changes = notifier.changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::StatusChanged);
        assert_eq!(changes[0].appointment, saved[0]);
    }

    #[test]
    fn persist_failure_keeps_local_change() {
        let (mut service, _persister, notifier) = recording_service(RecordingPersister::failing());

        let updated = service.set_appointment_status("6", "Cancelled".to_string());

        assert_eq!(updated.map(|a| a.status.as_str()), Some("Cancelled"));
        assert_eq!(service.store().get("6").unwrap().status, "Cancelled");
        assert!(notifier.changes().is_empty());
    }

    #[test]
    fn notify_failure_keeps_local_change() {
        let notifier = Arc::new(RecordingNotifier::failing());
        let mut service = seeded_service()
            .with_collaborators(Arc::new(RecordingPersister::default()), notifier.clone());

        let updated = service.set_appointment_status("9", "Cancelled".to_string());

        assert!(updated.is_some());
        assert_eq!(notifier.changes().len(), 1);
        assert_eq!(service.store().get("9").unwrap().status, "Cancelled");
    }
}

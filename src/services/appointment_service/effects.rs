use crate::models::Appointment;
use serde::Serialize;
use thiserror::Error;

/// Subscription topic connected UIs listen on for appointment changes.
pub const UPDATE_TOPIC: &str = "onUpdateAppointment";

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("failed to persist appointment {id}: {reason}")]
    Persist { id: String, reason: String },
    #[error("failed to publish on {topic}: {reason}")]
    Notify { topic: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    StatusChanged,
    DetailsChanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentChange {
    pub topic: &'static str,
    pub kind: ChangeKind,
    pub appointment: Appointment,
}

impl AppointmentChange {
    pub fn new(kind: ChangeKind, appointment: &Appointment) -> Self {
        Self {
            topic: UPDATE_TOPIC,
            kind,
            appointment: appointment.clone(),
        }
    }
}

/// Durable write of a mutated appointment.
///
/// Called after the in-memory mutation. A failure is reported but does not
/// roll the mutation back.
pub trait Persister: Send + Sync {
    fn persist(&self, appointment: &Appointment) -> Result<(), EffectError>;
}

/// Broadcast of a committed change to subscribed listeners.
///
/// Only called once the persister has accepted the write.
pub trait Notifier: Send + Sync {
    fn notify(&self, change: &AppointmentChange) -> Result<(), EffectError>;
}

/// Logs the write a database-backed persister would issue.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPersister;

impl Persister for LogPersister {
    fn persist(&self, appointment: &Appointment) -> Result<(), EffectError> {
        log::debug!(
            "persist: UPDATE appointments SET status = '{}' WHERE id = '{}'",
            appointment.status,
            appointment.id
        );
        Ok(())
    }
}

/// Logs the payload a subscription backend would push to clients.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, change: &AppointmentChange) -> Result<(), EffectError> {
        let payload = serde_json::to_string(change).map_err(|e| EffectError::Notify {
            topic: change.topic.to_string(),
            reason: e.to_string(),
        })?;
        log::info!("publish {}: {}", change.topic, payload);
        Ok(())
    }
}

/// Runs the collaborators for a mutation that already happened in memory.
pub(crate) fn commit_change(
    persister: &dyn Persister,
    notifier: &dyn Notifier,
    kind: ChangeKind,
    appointment: &Appointment,
) {
    if let Err(e) = persister.persist(appointment) {
        log::warn!("{}; skipping {} notification", e, UPDATE_TOPIC);
        return;
    }

    if let Err(e) = notifier.notify(&AppointmentChange::new(kind, appointment)) {
        log::warn!("{}", e);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{RecordingNotifier, RecordingPersister};
    use super::*;
    use crate::db::seed_appointments;

    #[test]
    fn notifies_after_successful_persist() {
        let persister = RecordingPersister::default();
        let notifier = RecordingNotifier::default();
        let appointment = &seed_appointments()[0];

        commit_change(&persister, &notifier, ChangeKind::StatusChanged, appointment);

        assert_eq!(persister.saved(), vec![appointment.clone()]);
        let changes = notifier.changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].topic, UPDATE_TOPIC);
        assert_eq!(changes[0].kind, ChangeKind::StatusChanged);
    }

    #[test]
    fn persist_failure_skips_notification() {
        let persister = RecordingPersister::failing();
        let notifier = RecordingNotifier::default();

        commit_change(
            &persister,
            &notifier,
            ChangeKind::StatusChanged,
            &seed_appointments()[0],
        );

        assert!(notifier.changes().is_empty());
    }

    #[test]
    fn change_serializes_for_subscribers() {
        let change = AppointmentChange::new(ChangeKind::DetailsChanged, &seed_appointments()[1]);
        let value = serde_json::to_value(&change).unwrap();

        assert_eq!(value["topic"], "onUpdateAppointment");
        assert_eq!(value["kind"], "details_changed");
        assert_eq!(value["appointment"]["patientName"], "Bob Williams");
    }

    #[test]
    fn log_collaborators_accept_every_change() {
        let appointment = &seed_appointments()[2];
        assert!(LogPersister.persist(appointment).is_ok());
        assert!(LogNotifier
            .notify(&AppointmentChange::new(ChangeKind::StatusChanged, appointment))
            .is_ok());
    }
}

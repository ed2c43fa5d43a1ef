use super::effects::{commit_change, ChangeKind};
use super::AppointmentService;
use crate::models::{Appointment, AppointmentDetailsUpdate};

impl AppointmentService {
    /// Overwrite every field present in `update` on the appointment with `id`.
    pub fn update_appointment_details(
        &mut self,
        id: &str,
        update: AppointmentDetailsUpdate,
    ) -> Option<&Appointment> {
        let Some(appointment) = self.store.apply_details(id, update) else {
            log::debug!("update_appointment_details: no appointment with id {}", id);
            return None;
        };

        log::info!("appointment {} details updated", appointment.id);
        commit_change(
            self.persister.as_ref(),
            self.notifier.as_ref(),
            ChangeKind::DetailsChanged,
            appointment,
        );
        Some(appointment)
    }
}

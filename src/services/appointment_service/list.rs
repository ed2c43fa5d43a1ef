use super::AppointmentService;
use crate::models::{Appointment, AppointmentFilters, Tab};

impl AppointmentService {
    /// Appointments matching every non-empty filter, in store order.
    ///
    /// `None` or empty filters return the whole store.
    pub fn list_appointments(&self, filters: Option<&AppointmentFilters>) -> Vec<Appointment> {
        let records = self.store.records();
        let appointments: Vec<Appointment> = match filters {
            Some(filters) if !filters.is_empty() => {
                filter_appointments(records, filters, &self.today)
                    .into_iter()
                    .cloned()
                    .collect()
            }
            _ => records.to_vec(),
        };

        log::debug!(
            "list_appointments: {} of {} records match {:?}",
            appointments.len(),
            records.len(),
            filters
        );
        appointments
    }
}

/// Linear scan over `records`. Dates are compared as ISO strings against `today`.
pub fn filter_appointments<'a>(
    records: &'a [Appointment],
    filters: &AppointmentFilters,
    today: &str,
) -> Vec<&'a Appointment> {
    let search = filters.search().map(str::to_lowercase);

    records
        .iter()
        .filter(|a| filters.date().map_or(true, |date| a.date == date))
        .filter(|a| filters.status().map_or(true, |status| a.status == status))
        .filter(|a| {
            search
                .as_deref()
                .map_or(true, |query| a.patient_name.to_lowercase().contains(query))
        })
        .filter(|a| match filters.tab {
            Some(tab) => matches_tab(a, tab, today, filters.date().is_some()),
            None => true,
        })
        .collect()
}

fn matches_tab(appointment: &Appointment, tab: Tab, today: &str, has_date: bool) -> bool {
    let date = appointment.date.as_str();
    match tab {
        // an explicit date wins over the implied "today"
        Tab::Today => has_date || date == today,
        Tab::Upcoming => date > today || (date == today && appointment.status == "Upcoming"),
        Tab::Past => date < today,
    }
}

use serde::de::{value::StrDeserializer, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub doctor_name: String,
    pub status: String,
    pub mode: String,
}

// Today / Upcoming / Past selector from the scheduling UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    Today,
    Upcoming,
    Past,
}

/// Optional predicates for listing appointments.
///
/// Every field is optional, and an empty string counts as "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppointmentFilters {
    pub date: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_tab_as_none")]
    pub tab: Option<Tab>,
}

impl AppointmentFilters {
    pub fn by_date(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    pub fn by_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = Some(tab);
        self
    }

    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    pub fn status(&self) -> Option<&str> {
        non_empty(&self.status)
    }

    pub fn search(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    /// True when no field would narrow the result.
    pub fn is_empty(&self) -> bool {
        self.date().is_none()
            && self.status().is_none()
            && self.search().is_none()
            && self.tab.is_none()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn empty_tab_as_none<'de, D>(deserializer: D) -> Result<Option<Tab>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => {
            let raw: StrDeserializer<D::Error> = raw.into_deserializer();
            Tab::deserialize(raw).map(Some)
        }
    }
}

/// Partial overwrite of an appointment. The id is not part of it and never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetailsUpdate {
    pub patient_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub doctor_name: Option<String>,
    pub status: Option<String>,
    pub mode: Option<String>,
}

impl AppointmentDetailsUpdate {
    pub fn apply_to(self, appointment: &mut Appointment) {
        let fields = [
            (self.patient_name, &mut appointment.patient_name),
            (self.date, &mut appointment.date),
            (self.time, &mut appointment.time),
            (self.duration, &mut appointment.duration),
            (self.doctor_name, &mut appointment.doctor_name),
            (self.status, &mut appointment.status),
            (self.mode, &mut appointment.mode),
        ];

        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

use crate::models::Appointment;

// (id, patient, date, time, duration, doctor, status, mode)
const SEED: [(&str, &str, &str, &str, &str, &str, &str, &str); 10] = [
    ("1", "Alice Johnson", "2023-10-27", "09:00", "30 min", "Dr. Rath", "Scheduled", "In-Person"),
    ("2", "Bob Williams", "2023-10-27", "10:30", "45 min", "Dr. Rath", "Scheduled", "Virtual"),
    ("3", "Charlie Brown", "2023-10-28", "14:00", "30 min", "Dr. Rath", "Scheduled", "In-Person"),
    ("4", "Diana Prince", "2023-10-26", "11:00", "60 min", "Dr. Rath", "Scheduled", "In-Person"),
    ("5", "Evan Wright", "2023-10-29", "09:30", "30 min", "Dr. Rath", "Scheduled", "Virtual"),
    ("6", "Fiona Gallagher", "2023-10-27", "16:00", "30 min", "Dr. Rath", "Scheduled", "Virtual"),
    ("7", "George Martin", "2023-10-30", "13:00", "45 min", "Dr. Rath", "Scheduled", "In-Person"),
    ("8", "Hannah Abbott", "2023-10-27", "08:00", "15 min", "Dr. Rath", "Scheduled", "In-Person"),
    ("9", "Ian Somerhalder", "2023-11-01", "10:00", "60 min", "Dr. Rath", "Scheduled", "Virtual"),
    ("10", "Jane Doe", "2023-10-25", "15:00", "30 min", "Dr. Rath", "Scheduled", "In-Person"),
];

pub fn seed_appointments() -> Vec<Appointment> {
    SEED.iter()
        .map(
            |&(id, patient_name, date, time, duration, doctor_name, status, mode)| Appointment {
                id: id.to_string(),
                patient_name: patient_name.to_string(),
                date: date.to_string(),
                time: time.to_string(),
                duration: duration.to_string(),
                doctor_name: doctor_name.to_string(),
                status: status.to_string(),
                mode: mode.to_string(),
            },
        )
        .collect()
}

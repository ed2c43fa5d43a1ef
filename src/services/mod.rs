pub mod appointment_service;

pub use appointment_service::{
    AppointmentChange, AppointmentService, ChangeKind, EffectError, LogNotifier, LogPersister,
    Notifier, Persister,
};

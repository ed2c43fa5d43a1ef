//! In-memory appointment records for a scheduling UI.
//!
//! [`services::AppointmentService`] holds the query and update operations;
//! [`api::router`] exposes them over HTTP.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

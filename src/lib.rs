#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
pub mod configuration;
pub mod domain;
pub mod error;
pub mod routes;
pub mod startup;
pub mod telemetry;

pub use startup::Application;

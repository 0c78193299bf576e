//! Data models for the climate API
//!
//! This module contains the response shapes organized by concern:
//! - Observation: per-date readings and the fixed reporting window
//! - Statistics: min/avg/max temperature aggregates

pub mod observation;
pub mod statistics;

// Re-export all public types for convenient access
pub use observation::{DateReading, ObservationKind, ObservationWindow};
pub use statistics::TemperatureStats;

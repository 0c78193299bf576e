//! Hawaii climate API
//!
//! Read-only JSON endpoints over a pre-populated dataset of daily
//! precipitation and temperature observations from Hawaiian weather stations.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::ClimateApiConfig;
pub use error::ClimateApiError;
pub use models::{DateReading, ObservationKind, ObservationWindow, TemperatureStats};
pub use store::{ClimateStore, SqliteClimateStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ClimateApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

//! Temperature aggregate model

use serde::{Deserialize, Serialize};

/// `MIN`/`AVG`/`MAX` of `tobs` over a set of measurements.
///
/// All three are `None` when the set was empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    #[must_use]
    pub fn new(min: Option<f64>, avg: Option<f64>, max: Option<f64>) -> Self {
        Self { min, avg, max }
    }

    /// True when no measurement matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

impl From<(Option<f64>, Option<f64>, Option<f64>)> for TemperatureStats {
    fn from((min, avg, max): (Option<f64>, Option<f64>, Option<f64>)) -> Self {
        Self { min, avg, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_key_order() {
        let stats = TemperatureStats::new(Some(60.0), Some(70.0), Some(80.0));
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"min":60.0,"avg":70.0,"max":80.0}"#);
    }

    #[test]
    fn test_empty_stats_serialize_as_nulls() {
        let stats = TemperatureStats::default();
        assert!(stats.is_empty());
        let json = serde_json::to_string(&[stats]).unwrap();
        assert_eq!(json, r#"[{"min":null,"avg":null,"max":null}]"#);
    }
}

//! Per-date measurement readings

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Inclusive date range, bounds in `YYYY-MM-DD` form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationWindow {
    pub start: &'static str,
    pub end: &'static str,
}

impl ObservationWindow {
    /// The last year of the dataset. Fixed, not derived from the data or the clock.
    pub const PREVIOUS_YEAR: ObservationWindow = ObservationWindow {
        start: "2016-08-23",
        end: "2017-08-23",
    };

    /// String comparison, matching how the store filters
    #[must_use]
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Which `measurement` column a per-date listing projects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationKind {
    Precipitation,
    Temperature,
}

impl ObservationKind {
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            ObservationKind::Precipitation => "prcp",
            ObservationKind::Temperature => "tobs",
        }
    }
}

/// A single reading keyed by its date.
///
/// Serializes as a one-entry object, `{"2017-08-23": 0.45}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DateReading {
    pub date: String,
    pub value: Option<f64>,
}

impl DateReading {
    #[must_use]
    pub fn new(date: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

impl From<(String, Option<f64>)> for DateReading {
    fn from((date, value): (String, Option<f64>)) -> Self {
        Self { date, value }
    }
}

impl Serialize for DateReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.value)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_serializes_as_single_entry_object() {
        let reading = DateReading::new("2017-08-23", Some(0.45));
        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"{"2017-08-23":0.45}"#);
    }

    #[test]
    fn test_missing_value_serializes_as_null() {
        let reading = DateReading::new("2017-08-22", None);
        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"{"2017-08-22":null}"#);
    }

    #[test]
    fn test_whole_number_keeps_decimal_point() {
        let readings = vec![
            DateReading::new("2017-08-23", Some(81.0)),
            DateReading::new("2017-08-22", Some(82.0)),
        ];
        let json = serde_json::to_string(&readings).unwrap();
        assert_eq!(json, r#"[{"2017-08-23":81.0},{"2017-08-22":82.0}]"#);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = ObservationWindow::PREVIOUS_YEAR;
        assert!(window.contains("2016-08-23"));
        assert!(window.contains("2017-08-23"));
        assert!(!window.contains("2016-08-22"));
        assert!(!window.contains("2017-08-24"));
    }

    #[test]
    fn test_kind_columns() {
        assert_eq!(ObservationKind::Precipitation.column(), "prcp");
        assert_eq!(ObservationKind::Temperature.column(), "tobs");
    }
}

//! Weekly opening hours.
//!
//! The table is stored as JSON keyed by weekday name:
//!
//! ```json
//! { "Monday": { "open": true, "hours": "7:00 AM - 7:00 PM" } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{BakeryError, Result};

/// Opening status for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Whether the bakery opens at all.
    pub open: bool,

    /// Free-form opening hours, e.g. "7:00 AM - 7:00 PM" or "Closed".
    pub hours: String,
}

/// Mapping from weekday name to opening status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoursTable {
    days: BTreeMap<String, DayHours>,
}

impl HoursTable {
    /// Parse a table from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BakeryError::Parse {
            context: "hours table".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BakeryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Look up a day. Weekday names match case-insensitively.
    pub fn day(&self, weekday: Weekday) -> Option<&DayHours> {
        let name = weekday_name(weekday);
        self.days
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, hours)| hours)
    }

    /// Whether the bakery opens on `weekday`. Unlisted days count as closed.
    pub fn is_open(&self, weekday: Weekday) -> bool {
        self.day(weekday).is_some_and(|d| d.open)
    }

    /// Days marked open, Monday first.
    pub fn open_days(&self) -> Vec<Weekday> {
        WEEK.into_iter().filter(|d| self.is_open(*d)).collect()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "Monday": { "open": true, "hours": "7:00 AM - 7:00 PM" },
        "tuesday": { "open": true, "hours": "7:00 AM - 7:00 PM" },
        "Sunday": { "open": false, "hours": "Closed" }
    }"#;

    #[test]
    fn test_parse_and_lookup() {
        let table = HoursTable::from_json(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.day(Weekday::Mon).unwrap().hours, "7:00 AM - 7:00 PM");
        assert!(table.is_open(Weekday::Tue));
        assert!(!table.is_open(Weekday::Sun));
        // Missing day counts as closed.
        assert!(!table.is_open(Weekday::Wed));
        assert_eq!(table.open_days(), vec![Weekday::Mon, Weekday::Tue]);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let err = HoursTable::from_json(r#"{"Monday": {"open": "yes"}}"#).unwrap_err();
        assert!(matches!(err, BakeryError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = HoursTable::load(file.path()).unwrap();
        assert!(table.is_open(Weekday::Mon));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = HoursTable::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, BakeryError::Io { .. }));
    }

    #[test]
    fn test_bundled_table() {
        let json = include_str!("../../../bakery_hours.json");
        let table = HoursTable::from_json(json).unwrap();
        assert_eq!(table.len(), 7);
        assert_eq!(
            table.open_days(),
            vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat
            ]
        );
    }
}

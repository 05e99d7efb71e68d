use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format of the calendar-day key used for a lake's measurements.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// One day's water level for a lake, in metres above sea level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub date: NaiveDate,
    pub min: f64,
    pub max: f64,
}

impl Measurement {
    pub fn new(date: NaiveDate, min: f64, max: f64) -> Self {
        Self { date, min, max }
    }

    /// A single published reading, used where the page reports one figure per day.
    pub fn single(date: NaiveDate, level: f64) -> Self {
        Self::new(date, level, level)
    }

    pub fn key(&self) -> String {
        self.date.format(DAY_KEY_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lake {
    pub name: String,
    /// Nominal maximum operating level.
    pub capacity_level: f64,
    pub measures: BTreeMap<NaiveDate, Measurement>,
}

impl Lake {
    pub fn new(name: impl Into<String>, capacity_level: f64) -> Self {
        Self {
            name: name.into(),
            capacity_level,
            measures: BTreeMap::new(),
        }
    }

    /// Insert a measurement, replacing any earlier one for the same day.
    pub fn record(&mut self, measurement: Measurement) {
        self.measures.insert(measurement.date, measurement);
    }

    /// Merge a series in order; later entries win on duplicate days.
    pub fn merge(&mut self, series: impl IntoIterator<Item = Measurement>) {
        for measurement in series {
            self.record(measurement);
        }
    }

    pub fn measure(&self, date: NaiveDate) -> Option<&Measurement> {
        self.measures.get(&date)
    }

    pub fn latest(&self) -> Option<&Measurement> {
        self.measures.values().next_back()
    }
}

/// Every lake of one scrape, keyed by display name.
pub type Lakes = BTreeMap<String, Lake>;

/// Serialize a scrape result as pretty-printed JSON.
pub fn lakes_to_json(lakes: &Lakes) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(lakes)
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

pub mod config;
pub mod controller;
pub mod dashboard;
pub mod energy_chart;
pub mod error;

pub use config::ApiConfig;
pub use controller::{EnergyApi, RequestSequence};
pub use dashboard::{DashboardAction, DashboardState, ViewMode};
pub use energy_chart::{ChartSegment, DayChart, Rgb};
pub use error::{ChartDataError, DashboardError, FetchOutcome, RawResponse, RequestKind};

/// Key of the aggregate clean-energy share stored alongside the per-source values
pub const CLEAN_ENERGY_KEY: &str = "cleanEnergyPercent";

/// Inclusive horizon covered by an energy mix response.
///
/// Bounds are accepted as plain dates or as timestamps; a timestamp keeps the
/// calendar date it was written with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    #[serde(deserialize_with = "deserialize_period_bound")]
    pub from: NaiveDate,
    #[serde(deserialize_with = "deserialize_period_bound")]
    pub to: NaiveDate,
}

fn deserialize_period_bound<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_period_bound(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid period bound: {}", raw)))
}

fn parse_period_bound(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.date_naive());
    }
    raw.parse::<NaiveDateTime>().ok().map(|local| local.date())
}

/// Multi-day generation mix returned by `GET /energy-mix`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyMixResponse {
    pub period: Period,
    /// Chronological, starting from today. May be empty.
    #[serde(default)]
    pub days: Vec<DayMix>,
}

/// Generation mix for a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMix {
    /// Calendar date identifier, unique within a response
    pub date: String,
    pub averages: RawAverages,
}

impl DayMix {
    /// Decode this day's averages, whichever form they arrived in
    pub fn averages(&self) -> Result<Averages, ChartDataError> {
        self.averages
            .decode()
            .map_err(|e| ChartDataError::InvalidAverages {
                date: self.date.clone(),
                reason: e.to_string(),
            })
    }
}

/// Per-day averages as they appear on the wire: either a JSON object or a
/// string containing an encoded JSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAverages {
    Mapping(Averages),
    Encoded(String),
}

impl RawAverages {
    pub fn decode(&self) -> Result<Averages, serde_json::Error> {
        match self {
            RawAverages::Mapping(averages) => Ok(averages.clone()),
            RawAverages::Encoded(encoded) => serde_json::from_str(encoded),
        }
    }
}

/// Percentage share per generation source, in the order the service sent them.
///
/// The aggregate `cleanEnergyPercent` lives in the same mapping; use
/// [`Averages::sources`] to iterate only the generation sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Averages(IndexMap<String, f64>);

impl Averages {
    pub fn new(values: IndexMap<String, f64>) -> Self {
        Self(values)
    }

    pub fn get(&self, source: &str) -> Option<f64> {
        self.0.get(source).copied()
    }

    pub fn clean_energy_percent(&self) -> Option<f64> {
        self.get(CLEAN_ENERGY_KEY)
    }

    /// Generation sources in wire order, excluding the clean-energy aggregate
    pub fn sources(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0
            .iter()
            .filter(|(name, _)| name.as_str() != CLEAN_ENERGY_KEY)
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Averages {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Result of `GET /optimal-charging-window?hours=N`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingWindowResponse {
    /// Requested duration echoed back by the service
    pub hours: u8,
    pub optimal_window: OptimalWindow,
}

/// Best contiguous window found by the service. `end_time - start_time` is
/// expected to equal the requested hours but is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalWindow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub average_clean_energy_percent: f64,
}

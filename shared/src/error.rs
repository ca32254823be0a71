use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;

use crate::config::{ENERGY_MIX_PATH, OPTIMAL_WINDOW_PATH};

/// Failure turning one day's raw averages into chart data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartDataError {
    #[error("Invalid generation mix for {date}: {reason}")]
    InvalidAverages { date: String, reason: String },
    #[error("Missing clean energy percentage for {date}")]
    MissingCleanEnergy { date: String },
}

/// Every failure the dashboard can surface. The `Display` text is what the
/// error page shows after "Error: ".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// The request never completed; carries the transport's own message
    #[error("{0}")]
    Transport(String),
    #[error("Failed to fetch energy mix data")]
    EnergyMixUnavailable,
    #[error("Failed to fetch optimal charging window")]
    ChargingWindowUnavailable,
    #[error("Failed to decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },
    #[error(transparent)]
    Chart(#[from] ChartDataError),
}

/// The two read-only calls made against the energy-data service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    EnergyMix,
    ChargingWindow,
}

impl RequestKind {
    pub fn path(&self) -> &'static str {
        match self {
            RequestKind::EnergyMix => ENERGY_MIX_PATH,
            RequestKind::ChargingWindow => OPTIMAL_WINDOW_PATH,
        }
    }

    fn payload_name(&self) -> &'static str {
        match self {
            RequestKind::EnergyMix => "energy mix data",
            RequestKind::ChargingWindow => "optimal charging window",
        }
    }

    fn unavailable(&self) -> DashboardError {
        match self {
            RequestKind::EnergyMix => DashboardError::EnergyMixUnavailable,
            RequestKind::ChargingWindow => DashboardError::ChargingWindowUnavailable,
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A completed HTTP exchange, before any interpretation of its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Same range the browser's `Response.ok` accepts
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What a completed response turned out to be
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    HttpFailure { status: u16 },
    DecodeFailure { raw: String, reason: String },
}

impl<T: DeserializeOwned> FetchOutcome<T> {
    /// Status is checked before the body, so an error page with a non-JSON
    /// body still reports as an HTTP failure.
    pub fn classify(response: RawResponse) -> Self {
        if !response.is_success() {
            return FetchOutcome::HttpFailure {
                status: response.status,
            };
        }

        match serde_json::from_str::<T>(&response.body) {
            Ok(value) => FetchOutcome::Success(value),
            Err(e) => FetchOutcome::DecodeFailure {
                raw: response.body,
                reason: e.to_string(),
            },
        }
    }
}

impl<T> FetchOutcome<T> {
    pub fn into_result(self, kind: RequestKind) -> Result<T, DashboardError> {
        match self {
            FetchOutcome::Success(value) => Ok(value),
            FetchOutcome::HttpFailure { status } => {
                log::warn!("{} answered with status {}", kind, status);
                Err(kind.unavailable())
            }
            FetchOutcome::DecodeFailure { raw, reason } => {
                log::warn!("{} returned an undecodable body ({} bytes)", kind, raw.len());
                Err(DashboardError::Decode {
                    what: kind.payload_name(),
                    reason,
                })
            }
        }
    }
}

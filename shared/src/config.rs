/// Charging duration shown in the input before the user touches it
pub const DEFAULT_CHARGING_HOURS: u8 = 3;
pub const MIN_CHARGING_HOURS: u8 = 1;
pub const MAX_CHARGING_HOURS: u8 = 6;

pub const ENERGY_MIX_PATH: &str = "/energy-mix";
pub const OPTIMAL_WINDOW_PATH: &str = "/optimal-charging-window";

/// Where the energy-data service lives. An empty base URL means same-origin
/// relative requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Build from an optional override such as a compile-time environment variable
    pub fn from_env_value(value: Option<&str>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }

    pub fn energy_mix_url(&self) -> String {
        format!("{}{}", self.base_url, ENERGY_MIX_PATH)
    }

    pub fn optimal_window_url(&self, hours: u8) -> String {
        format!("{}{}?hours={}", self.base_url, OPTIMAL_WINDOW_PATH, hours)
    }
}

/// Parse the duration input. Anything that is not a whole number of hours
/// inside the allowed range is rejected.
pub fn parse_charging_hours(input: &str) -> Option<u8> {
    input
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|hours| (MIN_CHARGING_HOURS..=MAX_CHARGING_HOURS).contains(hours))
}

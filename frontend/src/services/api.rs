use async_trait::async_trait;
use gloo::net::http::Request;
use shared::{ApiConfig, DashboardError, EnergyApi, RawResponse};

/// API client for the energy-data service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client for the configured service. `ENERGY_API_BASE_URL` is read
    /// at build time; without it requests go to the page's own origin.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::from_env_value(option_env!("ENERGY_API_BASE_URL")),
        }
    }

    /// Plain GET with no body and no custom headers. Only a request that never
    /// completes is an error here; status codes are left to the caller.
    async fn get(&self, url: &str) -> Result<RawResponse, DashboardError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        Ok(RawResponse::new(status, body))
    }
}

#[async_trait(?Send)]
impl EnergyApi for ApiClient {
    async fn fetch_energy_mix(&self) -> Result<RawResponse, DashboardError> {
        self.get(&self.config.energy_mix_url()).await
    }

    async fn fetch_optimal_window(&self, hours: u8) -> Result<RawResponse, DashboardError> {
        self.get(&self.config.optimal_window_url(hours)).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

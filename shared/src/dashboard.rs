use crate::config::DEFAULT_CHARGING_HOURS;
use crate::{ChargingWindowResponse, DashboardError, DayChart, EnergyMixResponse};

/// Everything the dashboard view renders from. Each transition produces a
/// new state; nothing mutates it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub energy_mix: Option<EnergyMixResponse>,
    /// Derived from `energy_mix` whenever a new mix is stored
    pub day_charts: Vec<DayChart>,
    pub charging_window: Option<ChargingWindowResponse>,
    pub requested_hours: u8,
    pub loading: bool,
    pub error: Option<String>,
    /// Sequence number of the most recently issued window request
    pub latest_window_request: u64,
    /// Bumped on every accepted window result; the view scrolls when it changes
    pub scroll_request: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            energy_mix: None,
            day_charts: Vec::new(),
            charging_window: None,
            requested_hours: DEFAULT_CHARGING_HOURS,
            // the mix request starts as soon as the dashboard mounts
            loading: true,
            error: None,
            latest_window_request: 0,
            scroll_request: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    MixRequested,
    MixLoaded(EnergyMixResponse),
    MixFailed(String),
    HoursChanged(u8),
    WindowRequested { seq: u64 },
    WindowLoaded { seq: u64, response: ChargingWindowResponse },
    WindowFailed { seq: u64, message: String },
}

/// Which of the three page layouts to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode<'a> {
    Loading,
    Error(&'a str),
    Dashboard,
}

impl DashboardState {
    pub fn apply(&self, action: DashboardAction) -> Self {
        let mut next = self.clone();

        match action {
            DashboardAction::MixRequested => {
                next.loading = true;
            }
            DashboardAction::MixLoaded(mix) => {
                match mix.day_charts() {
                    Ok(charts) => next.day_charts = charts,
                    Err(e) => {
                        next.day_charts = Vec::new();
                        next.error = Some(DashboardError::from(e).to_string());
                    }
                }
                next.energy_mix = Some(mix);
                next.loading = false;
            }
            DashboardAction::MixFailed(message) => {
                next.error = Some(message);
                next.loading = false;
            }
            DashboardAction::HoursChanged(hours) => {
                next.requested_hours = hours;
            }
            DashboardAction::WindowRequested { seq } => {
                next.latest_window_request = seq;
                next.loading = true;
            }
            DashboardAction::WindowLoaded { seq, response } => {
                if !self.is_current_window_request(seq) {
                    return next;
                }
                next.charging_window = Some(response);
                next.scroll_request = next.scroll_request.wrapping_add(1);
                next.loading = false;
            }
            DashboardAction::WindowFailed { seq, message } => {
                if !self.is_current_window_request(seq) {
                    return next;
                }
                next.error = Some(message);
                next.loading = false;
            }
        }

        next
    }

    fn is_current_window_request(&self, seq: u64) -> bool {
        if seq != self.latest_window_request {
            log::debug!(
                "discarding window response #{} (latest is #{})",
                seq,
                self.latest_window_request
            );
            return false;
        }
        true
    }

    /// A window request in flight after the mix has loaded keeps the
    /// dashboard visible; only the initial load takes over the page.
    pub fn view_mode(&self) -> ViewMode<'_> {
        if self.loading && self.energy_mix.is_none() {
            ViewMode::Loading
        } else if let Some(error) = self.error.as_deref() {
            ViewMode::Error(error)
        } else {
            ViewMode::Dashboard
        }
    }

    pub fn can_request_window(&self) -> bool {
        !self.loading
    }
}

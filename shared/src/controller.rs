//! Sequencing of the two dashboard requests.
//!
//! The functions here talk to an [`EnergyApi`] and report every state change
//! through a dispatch callback, so the same flow drives the browser app and
//! the tests.

use async_trait::async_trait;
use std::cell::Cell;

use crate::{
    ChargingWindowResponse, DashboardAction, DashboardError, EnergyMixResponse, FetchOutcome,
    RawResponse, RequestKind,
};

/// Transport to the energy-data service. Implementations only move bytes;
/// status and body interpretation happen in this module.
#[async_trait(?Send)]
pub trait EnergyApi {
    /// `GET /energy-mix`
    async fn fetch_energy_mix(&self) -> Result<RawResponse, DashboardError>;

    /// `GET /optimal-charging-window?hours=N`
    async fn fetch_optimal_window(&self, hours: u8) -> Result<RawResponse, DashboardError>;
}

/// Hands out increasing sequence numbers for window requests
#[derive(Debug, Default)]
pub struct RequestSequence(Cell<u64>);

impl RequestSequence {
    pub fn next(&self) -> u64 {
        let seq = self.0.get().wrapping_add(1);
        self.0.set(seq);
        seq
    }
}

pub async fn load_energy_mix<A>(api: &A) -> Result<EnergyMixResponse, DashboardError>
where
    A: EnergyApi + ?Sized,
{
    let response = api.fetch_energy_mix().await?;
    FetchOutcome::classify(response).into_result(RequestKind::EnergyMix)
}

pub async fn load_optimal_window<A>(
    api: &A,
    hours: u8,
) -> Result<ChargingWindowResponse, DashboardError>
where
    A: EnergyApi + ?Sized,
{
    let response = api.fetch_optimal_window(hours).await?;
    FetchOutcome::classify(response).into_result(RequestKind::ChargingWindow)
}

/// Load the multi-day mix. Runs once when the dashboard mounts.
pub async fn initialize_mix<A, D>(api: &A, dispatch: D)
where
    A: EnergyApi + ?Sized,
    D: Fn(DashboardAction),
{
    dispatch(DashboardAction::MixRequested);
    log::debug!("requesting {}", RequestKind::EnergyMix);

    match load_energy_mix(api).await {
        Ok(mix) => {
            log::debug!("energy mix loaded with {} day(s)", mix.days.len());
            dispatch(DashboardAction::MixLoaded(mix));
        }
        Err(e) => {
            log::warn!("energy mix request failed: {}", e);
            dispatch(DashboardAction::MixFailed(e.to_string()));
        }
    }
}

/// Ask for the best window of `hours`. `seq` must come from the dashboard's
/// [`RequestSequence`]; responses to superseded requests are dropped by the
/// reducer.
pub async fn request_optimal_window<A, D>(api: &A, hours: u8, seq: u64, dispatch: D)
where
    A: EnergyApi + ?Sized,
    D: Fn(DashboardAction),
{
    dispatch(DashboardAction::WindowRequested { seq });
    log::debug!("requesting {} for {} hour(s), #{}", RequestKind::ChargingWindow, hours, seq);

    match load_optimal_window(api, hours).await {
        Ok(response) => dispatch(DashboardAction::WindowLoaded { seq, response }),
        Err(e) => {
            log::warn!("optimal window request #{} failed: {}", seq, e);
            dispatch(DashboardAction::WindowFailed {
                seq,
                message: e.to_string(),
            });
        }
    }
}

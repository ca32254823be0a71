use shared::{DashboardState, ViewMode};
use yew::prelude::*;

use super::{ChargingWindowPanel, EnergyPieChart};

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub state: DashboardState,
    pub on_hours_change: Callback<InputEvent>,
    pub on_hours_commit: Callback<Event>,
    pub on_submit: Callback<()>,
}

/// Whole-page layout: loading, error, or the charts with the search panel
#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let state = &props.state;

    match state.view_mode() {
        ViewMode::Loading => html! {
            <div class="page-loading" style="display: flex; justify-content: center; align-items: center; height: 100vh; font-size: 20px;">
                {"Loading..."}
            </div>
        },
        ViewMode::Error(message) => html! {
            <div class="page-error" style="padding: 20px; color: red; text-align: center;">
                {format!("Error: {}", message)}
            </div>
        },
        ViewMode::Dashboard => html! {
            <div class="dashboard">
                <h1 class="dashboard-title">{"Energy Mix Dashboard"}</h1>

                <div class="main-content">
                    <section class="charts-section">
                        {for state.day_charts.iter().map(|chart| html! {
                            <EnergyPieChart key={chart.date.clone()} chart={chart.clone()} />
                        })}
                    </section>

                    <aside class="sidebar">
                        <ChargingWindowPanel
                            hours={state.requested_hours}
                            loading={state.loading}
                            window={state.charging_window.clone()}
                            scroll_request={state.scroll_request}
                            on_hours_change={props.on_hours_change.clone()}
                            on_hours_commit={props.on_hours_commit.clone()}
                            on_submit={props.on_submit.clone()}
                        />
                    </aside>
                </div>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use shared::{
        Averages, ChargingWindowResponse, DashboardAction, DayMix, EnergyMixResponse,
        OptimalWindow, Period, RawAverages,
    };
    use std::time::Duration;
    use web_sys::Element;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mix() -> EnergyMixResponse {
        EnergyMixResponse {
            period: Period {
                from: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2025, 12, 2).unwrap(),
            },
            days: vec![
                DayMix {
                    date: "2025-12-01".to_string(),
                    averages: RawAverages::Mapping(
                        [("wind", 40.0), ("gas", 60.0), ("cleanEnergyPercent", 40.0)]
                            .into_iter()
                            .collect::<Averages>(),
                    ),
                },
                DayMix {
                    date: "2025-12-02".to_string(),
                    averages: RawAverages::Encoded(
                        r#"{"solar":12.5,"cleanEnergyPercent":12.5}"#.to_string(),
                    ),
                },
            ],
        }
    }

    fn window() -> ChargingWindowResponse {
        ChargingWindowResponse {
            hours: 3,
            optimal_window: OptimalWindow {
                start_time: Utc.with_ymd_and_hms(2025, 12, 2, 0, 0, 0).unwrap(),
                end_time: Utc.with_ymd_and_hms(2025, 12, 2, 3, 0, 0).unwrap(),
                average_clean_energy_percent: 65.5,
            },
        }
    }

    fn loaded() -> DashboardState {
        DashboardState::default().apply(DashboardAction::MixLoaded(mix()))
    }

    async fn mount(state: DashboardState) -> Element {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        let props = DashboardViewProps {
            state,
            on_hours_change: Callback::noop(),
            on_hours_commit: Callback::noop(),
            on_submit: Callback::noop(),
        };
        yew::Renderer::<DashboardView>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::from_millis(20)).await;
        root
    }

    #[wasm_bindgen_test]
    async fn test_loading_page_before_the_mix_arrives() {
        let root = mount(DashboardState::default()).await;

        assert_eq!(root.text_content().unwrap_or_default(), "Loading...");
        assert!(root.query_selector(".dashboard").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_error_page_shows_message() {
        let state = DashboardState::default()
            .apply(DashboardAction::MixFailed("Network error".to_string()));
        let root = mount(state).await;

        let page = root.query_selector(".page-error").unwrap().unwrap();
        assert_eq!(page.text_content().unwrap_or_default(), "Error: Network error");
    }

    #[wasm_bindgen_test]
    async fn test_error_page_replaces_loaded_data() {
        let state = loaded()
            .apply(DashboardAction::WindowRequested { seq: 1 })
            .apply(DashboardAction::WindowLoaded { seq: 1, response: window() })
            .apply(DashboardAction::WindowRequested { seq: 2 })
            .apply(DashboardAction::WindowFailed {
                seq: 2,
                message: "Failed to fetch optimal charging window".to_string(),
            });
        assert!(state.energy_mix.is_some());
        assert!(state.charging_window.is_some());

        let root = mount(state).await;

        let text = root.text_content().unwrap_or_default();
        assert_eq!(text, "Error: Failed to fetch optimal charging window");
        assert!(root.query_selector("canvas").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_dashboard_lists_every_day_and_the_panel() {
        let root = mount(loaded()).await;

        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Energy Mix Dashboard"));
        assert!(text.contains("Today (2025-12-01)"));
        assert!(text.contains("Clean Energy: 40.00%"));
        assert!(text.contains("Tomorrow (2025-12-02)"));
        assert!(text.contains("solar: 12.5%"));
        assert!(text.contains("Find Optimal Window"));
        assert!(!text.contains("Optimal Charging Window Found!"));
        assert_eq!(root.query_selector_all(".energy-pie-chart").unwrap().length(), 2);
    }

    #[wasm_bindgen_test]
    async fn test_dashboard_stays_up_while_searching() {
        let state = loaded().apply(DashboardAction::WindowRequested { seq: 1 });
        let root = mount(state).await;

        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Energy Mix Dashboard"));
        assert!(text.contains("Calculating..."));
        assert!(!text.contains("Loading..."));
    }
}

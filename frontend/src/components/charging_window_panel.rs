use shared::config::{MAX_CHARGING_HOURS, MIN_CHARGING_HOURS};
use shared::ChargingWindowResponse;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::services::date_utils::format_instant;

#[derive(Properties, PartialEq)]
pub struct ChargingWindowPanelProps {
    pub hours: u8,
    pub loading: bool,
    pub window: Option<ChargingWindowResponse>,
    /// Changes every time a new window result arrives
    pub scroll_request: u64,
    pub on_hours_change: Callback<InputEvent>,
    pub on_hours_commit: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(ChargingWindowPanel)]
pub fn charging_window_panel(props: &ChargingWindowPanelProps) -> Html {
    let result_ref = use_node_ref();

    // Runs after the render that mounted the new result
    use_effect_with(props.scroll_request, {
        let result_ref = result_ref.clone();
        move |request| {
            if *request > 0 {
                scroll_into_view(&result_ref);
            }
            || ()
        }
    });

    let onclick = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    html! {
        <div class="charging-window-card">
            <h2 class="section-title">{"Find Optimal Charging Window"}</h2>

            <div class="input-section">
                <label for="hours" class="input-label">{"Charging Duration (hours):"}</label>
                <input
                    id="hours"
                    type="number"
                    class="hours-input"
                    min={MIN_CHARGING_HOURS.to_string()}
                    max={MAX_CHARGING_HOURS.to_string()}
                    step="1"
                    value={props.hours.to_string()}
                    oninput={props.on_hours_change.clone()}
                    onchange={props.on_hours_commit.clone()}
                />
            </div>

            <button class="submit-button" onclick={onclick} disabled={props.loading}>
                {if props.loading { "Calculating..." } else { "Find Optimal Window" }}
            </button>

            {if let Some(window) = props.window.as_ref() {
                let optimal = &window.optimal_window;
                html! {
                    <div ref={result_ref} class="result-card">
                        <h3 class="result-title">{"Optimal Charging Window Found!"}</h3>
                        <div class="result-content">
                            <p>
                                <strong>{"Start Time:"}</strong>{" "}
                                {format_instant(&optimal.start_time)}
                            </p>
                            <p>
                                <strong>{"End Time:"}</strong>{" "}
                                {format_instant(&optimal.end_time)}
                            </p>
                            <p>
                                <strong>{"Average Clean Energy:"}</strong>{" "}
                                <span class="clean-energy-percent">
                                    {format!("{}%", optimal.average_clean_energy_percent)}
                                </span>
                            </p>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

/// Bring the result card into view; does nothing if it is not mounted
fn scroll_into_view(node: &NodeRef) {
    match node.cast::<Element>() {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::End);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => gloo::console::debug!("Charging window result not mounted, skipping scroll"),
    }
}

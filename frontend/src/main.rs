use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::DashboardView;
use hooks::{use_dashboard, UseDashboardResult};
use services::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let UseDashboardResult { state, actions } = use_dashboard(&api_client);

    html! {
        <DashboardView
            state={state}
            on_hours_change={actions.on_hours_change}
            on_hours_commit={actions.on_hours_commit}
            on_submit={actions.find_optimal_window}
        />
    }
}

fn main() {
    services::logging::init();
    yew::Renderer::<App>::new().render();
}

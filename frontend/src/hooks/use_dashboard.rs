use std::rc::Rc;

use shared::config::parse_charging_hours;
use shared::controller::{initialize_mix, request_optimal_window};
use shared::{DashboardAction, DashboardState, RequestSequence};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Yew reducer wrapper around the platform-independent dashboard state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStore(DashboardState);

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.apply(action)))
    }
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub actions: UseDashboardActions,
}

#[derive(Clone)]
pub struct UseDashboardActions {
    pub find_optimal_window: Callback<()>,
    pub on_hours_change: Callback<InputEvent>,
    pub on_hours_commit: Callback<Event>,
}

/// Hook owning the dashboard's state and both of its requests
#[hook]
pub fn use_dashboard(api_client: &ApiClient) -> UseDashboardResult {
    let store = use_reducer(DashboardStore::default);
    let sequence = use_memo((), |_| RequestSequence::default());

    // Load the energy mix once on mount
    use_effect_with((), {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();

        move |_| {
            spawn_local(async move {
                initialize_mix(&api_client, move |action| dispatcher.dispatch(action)).await;
            });

            || ()
        }
    });

    let find_optimal_window = {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();
        let sequence = sequence.clone();

        use_callback(store.0.requested_hours, move |_: (), hours: &u8| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let hours = *hours;
            let seq = sequence.next();

            spawn_local(async move {
                request_optimal_window(&api_client, hours, seq, move |action| {
                    dispatcher.dispatch(action)
                })
                .await;
            });
        })
    };

    let on_hours_change = {
        let dispatcher = store.dispatcher();

        use_callback(store.0.requested_hours, move |e: InputEvent, current: &u8| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(hours) = read_hours_input(&input, *current, true) {
                dispatcher.dispatch(DashboardAction::HoursChanged(hours));
            }
        })
    };

    // Fires when the box loses focus, before a click on the submit button
    let on_hours_commit = {
        let dispatcher = store.dispatcher();

        use_callback(store.0.requested_hours, move |e: Event, current: &u8| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(hours) = read_hours_input(&input, *current, false) {
                dispatcher.dispatch(DashboardAction::HoursChanged(hours));
            }
        })
    };

    UseDashboardResult {
        state: store.0.clone(),
        actions: UseDashboardActions {
            find_optimal_window,
            on_hours_change,
            on_hours_commit,
        },
    }
}

/// Parse the duration box. Rejected input is replaced with `current`, so the
/// box never shows a duration other than the one a search would request.
/// An empty box is left alone while the user is still `editing`.
pub(crate) fn read_hours_input(input: &HtmlInputElement, current: u8, editing: bool) -> Option<u8> {
    let value = input.value();
    if let Some(hours) = parse_charging_hours(&value) {
        return Some(hours);
    }
    if editing && value.trim().is_empty() {
        return None;
    }

    gloo::console::debug!("Resetting rejected charging duration input:", value);
    input.set_value(&current.to_string());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::charging_window_panel::{ChargingWindowPanel, ChargingWindowPanelProps};
    use std::cell::RefCell;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, EventInit, HtmlButtonElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn hours_box(value: &str) -> HtmlInputElement {
        let input: HtmlInputElement = gloo::utils::document()
            .create_element("input")
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_type("number");
        input.set_value(value);
        input
    }

    fn fire(target: &Element, kind: &str) {
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict(kind, &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_valid_hours_input_is_kept() {
        let input = hours_box("5");
        assert_eq!(read_hours_input(&input, 3, true), Some(5));
        assert_eq!(input.value(), "5");
    }

    #[wasm_bindgen_test]
    fn test_rejected_hours_input_snaps_back() {
        for rejected in ["7", "0", "-2"] {
            let input = hours_box(rejected);
            assert_eq!(read_hours_input(&input, 3, true), None);
            assert_eq!(input.value(), "3", "input {:?} was left on screen", rejected);
        }
    }

    #[wasm_bindgen_test]
    fn test_empty_hours_input_restored_on_commit() {
        let input = hours_box("");
        assert_eq!(read_hours_input(&input, 4, true), None);
        assert_eq!(input.value(), "");

        assert_eq!(read_hours_input(&input, 4, false), None);
        assert_eq!(input.value(), "4");
    }

    #[wasm_bindgen_test]
    async fn test_search_requests_the_displayed_duration() {
        let requested: Rc<RefCell<Vec<u8>>> = Rc::default();
        let current = 3;

        let props = ChargingWindowPanelProps {
            hours: current,
            loading: false,
            window: None,
            scroll_request: 0,
            on_hours_change: Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                read_hours_input(&input, current, true);
            }),
            on_hours_commit: Callback::noop(),
            on_submit: {
                let requested = requested.clone();
                Callback::from(move |_| requested.borrow_mut().push(current))
            },
        };

        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        yew::Renderer::<ChargingWindowPanel>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::from_millis(20)).await;

        let input: HtmlInputElement = root
            .query_selector("#hours")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_value("7");
        fire(&input, "input");
        yew::platform::time::sleep(Duration::from_millis(20)).await;

        let button: HtmlButtonElement = root
            .query_selector("button")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        button.click();
        yew::platform::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(*requested.borrow(), vec![3]);
        assert_eq!(input.value(), "3");
    }

    #[wasm_bindgen_test]
    fn test_store_reduces_through_dashboard_state() {
        let store = Rc::new(DashboardStore::default());
        assert!(store.0.loading);

        let store = store.reduce(DashboardAction::HoursChanged(5));
        assert_eq!(store.0.requested_hours, 5);

        let store = store.reduce(DashboardAction::MixFailed("Network error".to_string()));
        assert_eq!(store.0.error.as_deref(), Some("Network error"));
        assert!(!store.0.loading);
    }
}

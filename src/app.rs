use gloo::console::error;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::BackendHandle;
use crate::config::Config;
use crate::roster::{Loads, RemovalKey, Roster, RosterAction};
use crate::status::{StatusAction, StatusArea};
use crate::view;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub backend: BackendHandle,
    pub config: Config,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let roster = use_reducer(Roster::default);
    let status = use_reducer(StatusArea::default);
    let loads = use_state(Loads::default);
    let form = use_node_ref();
    let email = use_node_ref();
    let activity = use_node_ref();

    // Fetch the whole collection again and hand it to the roster.
    let reload = {
        let backend = props.backend.clone();
        let roster = roster.clone();
        let loads = (*loads).clone();
        Callback::from(move |_: ()| {
            let request = loads.issue();
            let loads = loads.clone();
            let roster = roster.clone();
            let pending = backend.list_activities();
            spawn_local(async move {
                let result = pending.await;
                if !loads.is_current(request) {
                    return;
                }
                match result {
                    Ok(activities) => roster.dispatch(RosterAction::Loaded(activities)),
                    Err(e) => {
                        error!(format!("Error fetching activities: {e}"));
                        roster.dispatch(RosterAction::Failed);
                    }
                }
            });
        })
    };

    // Initial load
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    // Each shown message gets its own hide timer. A newer ticket drops the
    // older timer, and the reducer ignores hides for stale tickets anyway.
    {
        let status = status.clone();
        let hide_ms = props.config.status_hide_ms;
        use_effect_with(status.ticket, move |ticket| {
            let ticket = *ticket;
            let timer = status.visible.then(|| {
                let status = status.clone();
                Timeout::new(hide_ms, move || status.dispatch(StatusAction::Hide { ticket }))
            });
            move || drop(timer)
        });
    }

    let on_submit = {
        let backend = props.backend.clone();
        let status = status.clone();
        let form = form.clone();
        let email = email.clone();
        let activity = activity.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let address = email
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let name = activity
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();

            let status = status.clone();
            let form = form.clone();
            let reload = reload.clone();
            let pending = backend.signup(&name, &address);
            spawn_local(async move {
                let result = pending.await;
                match &result {
                    Ok(_) => {
                        if let Some(form) = form.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                        reload.emit(());
                    }
                    Err(e) if e.is_transport() => error!(format!("Error signing up: {e}")),
                    Err(_) => {}
                }
                status.dispatch(StatusAction::for_signup(&result));
            });
        })
    };

    let on_remove = {
        let backend = props.backend.clone();
        let status = status.clone();
        let reload = reload.clone();
        Callback::from(move |key: RemovalKey| {
            let status = status.clone();
            let reload = reload.clone();
            let pending = backend.unregister(&key.activity, &key.email);
            spawn_local(async move {
                match pending.await {
                    Ok(()) => reload.emit(()),
                    Err(e) => match StatusAction::for_removal_failure(&e) {
                        Some(action) => status.dispatch(action),
                        // Left silent for the user, unlike signup.
                        None => error!(format!("Error removing participant: {e}")),
                    },
                }
            });
        })
    };

    html! {
        <main>
            <section id="activities-container">
                <h3>{"Available Activities"}</h3>
                <div id="activities-list">
                    { view::activity_list(&roster.listing, &on_remove) }
                </div>
            </section>

            <section id="signup-container">
                <h3>{"Sign Up for an Activity"}</h3>
                <form id="signup-form" ref={form} onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Student Email:"}</label>
                        <input
                            ref={email}
                            type="email"
                            id="email"
                            required=true
                            placeholder="your-email@mergington.edu"
                        />
                    </div>
                    <div class="form-group">
                        <label for="activity">{"Select Activity:"}</label>
                        <select ref={activity} id="activity" required=true>
                            { view::activity_options(&roster.options) }
                        </select>
                    </div>
                    <button type="submit">{"Sign Up"}</button>
                </form>
                { view::status_banner(&status) }
            </section>
        </main>
    }
}

//! Markup for the roster. Everything here goes through the virtual DOM as
//! text nodes or attribute values, so server data is never parsed as markup.

use yew::prelude::*;

use crate::model::Activity;
use crate::roster::{Listing, RemovalKey};
use crate::status::StatusArea;

pub const LOADING: &str = "Loading activities...";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

pub fn activity_list(listing: &Listing, on_remove: &Callback<RemovalKey>) -> Html {
    match listing {
        Listing::Loading => html! { <p>{ LOADING }</p> },
        Listing::Failed => html! { <p>{ LOAD_FAILED }</p> },
        Listing::Ready(activities) => html! {
            <>
                { for activities.iter().map(|(name, activity)| activity_card(name, activity, on_remove)) }
            </>
        },
    }
}

fn activity_card(name: &str, activity: &Activity, on_remove: &Callback<RemovalKey>) -> Html {
    html! {
        <div class="activity-card">
            <h4>{ name.to_string() }</h4>
            <p>{ activity.description.clone() }</p>
            <p><strong>{"Schedule:"}</strong>{ format!(" {}", activity.schedule) }</p>
            <p><strong>{"Availability:"}</strong>{ format!(" {} spots left", activity.spots_left()) }</p>
            <div class="participants-section">
                <div class="participants-title">{"Participants"}</div>
                { participants(name, activity, on_remove) }
            </div>
        </div>
    }
}

fn participants(name: &str, activity: &Activity, on_remove: &Callback<RemovalKey>) -> Html {
    let keys = RemovalKey::for_activity(name, activity);
    if keys.is_empty() {
        return html! { <div class="participants-empty">{ NO_PARTICIPANTS }</div> };
    }

    html! {
        <ul class="participants-list">
            { for keys.into_iter().map(|key| {
                let email = key.email.clone();
                let on_click = {
                    let on_remove = on_remove.clone();
                    Callback::from(move |_: MouseEvent| on_remove.emit(key.clone()))
                };
                html! {
                    <li data-email={email.clone()}>
                        <span class="participant-email">{ email.clone() }</span>
                        <button
                            type="button"
                            class="participant-delete"
                            title={format!("Unregister {email}")}
                            onclick={on_click}
                        >
                            {"✖"}
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}

/// Options for the signup select. The placeholder always stays first and is
/// the default a form reset returns to.
pub fn activity_options(options: &[String]) -> Html {
    html! {
        <>
            <option value="" disabled=true selected=true>{ SELECT_PLACEHOLDER }</option>
            { for options.iter().map(|name| html! {
                <option value={name.clone()}>{ name.clone() }</option>
            }) }
        </>
    }
}

pub fn status_banner(status: &StatusArea) -> Html {
    let class = classes!(status.tone.class(), (!status.visible).then_some("hidden"));
    html! {
        <div id="message" class={class}>{ status.text.clone() }</div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use std::time::Duration;

    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    use super::*;
    use crate::model::Activities;
    use crate::status::{StatusAction, Tone};

    #[derive(Properties, PartialEq)]
    struct ListProps {
        listing: Listing,
    }

    #[function_component(ListHarness)]
    fn list_harness(props: &ListProps) -> Html {
        html! {
            <div id="activities-list">{ activity_list(&props.listing, &Callback::from(|_| ())) }</div>
        }
    }

    #[derive(Properties, PartialEq)]
    struct StatusProps {
        status: StatusArea,
    }

    #[function_component(StatusHarness)]
    fn status_harness(props: &StatusProps) -> Html {
        status_banner(&props.status)
    }

    fn mount_root() -> Element {
        let doc = web_sys::window().unwrap().document().unwrap();
        let root = doc.create_element("div").unwrap();
        doc.body().unwrap().append_child(&root).unwrap();
        root
    }

    async fn render_list(listing: Listing) -> Element {
        let root = mount_root();
        yew::Renderer::<ListHarness>::with_root_and_props(root.clone(), ListProps { listing })
            .render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;
        root
    }

    fn count(root: &Element, selector: &str) -> u32 {
        root.query_selector_all(selector).unwrap().length()
    }

    fn text(root: &Element, selector: &str) -> String {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap_or_default()
    }

    fn ready(body: &str) -> Listing {
        Listing::Ready(Activities::from_json(body).unwrap())
    }

    #[wasm_bindgen_test]
    async fn test_card_shows_details_and_spots_left() {
        let root = render_list(ready(
            r#"{"Chess Club": {"description": "Learn strategies", "schedule": "Fridays, 3:30 PM - 5:00 PM",
                "max_participants": 12, "participants": ["michael@mergington.edu", "daniel@mergington.edu"]}}"#,
        ))
        .await;

        assert_eq!(count(&root, ".activity-card"), 1);
        assert_eq!(text(&root, ".activity-card h4"), "Chess Club");
        assert!(root.text_content().unwrap().contains("10 spots left"));
        assert!(root
            .text_content()
            .unwrap()
            .contains("Schedule: Fridays, 3:30 PM - 5:00 PM"));
    }

    #[wasm_bindgen_test]
    async fn test_over_full_activity_shows_negative_spots() {
        let root = render_list(ready(
            r#"{"Tiny": {"description": "d", "schedule": "s", "max_participants": 1, "participants": ["a@x", "b@x"]}}"#,
        ))
        .await;
        assert!(root.text_content().unwrap().contains("-1 spots left"));
    }

    #[wasm_bindgen_test]
    async fn test_empty_activity_shows_notice_and_no_list() {
        let root = render_list(ready(
            r#"{"Art Club": {"description": "d", "schedule": "s", "max_participants": 18, "participants": []}}"#,
        ))
        .await;
        assert_eq!(count(&root, ".participants-empty"), 1);
        assert_eq!(text(&root, ".participants-empty"), NO_PARTICIPANTS);
        assert_eq!(count(&root, ".participants-list"), 0);
    }

    #[wasm_bindgen_test]
    async fn test_one_entry_per_participant_in_order() {
        let root = render_list(ready(
            r#"{"Soccer Team": {"description": "d", "schedule": "s", "max_participants": 22,
                "participants": ["alex@mergington.edu", "maria@mergington.edu", "zoe@mergington.edu"]}}"#,
        ))
        .await;
        let items = root.query_selector_all(".participants-list li").unwrap();
        assert_eq!(items.length(), 3);
        let emails: Vec<String> = (0..items.length())
            .map(|i| {
                items
                    .item(i)
                    .unwrap()
                    .dyn_into::<Element>()
                    .unwrap()
                    .get_attribute("data-email")
                    .unwrap()
            })
            .collect();
        assert_eq!(
            emails,
            vec![
                "alex@mergington.edu",
                "maria@mergington.edu",
                "zoe@mergington.edu"
            ]
        );
        assert_eq!(count(&root, ".participant-delete"), 3);
        let first_button = root.query_selector(".participant-delete").unwrap().unwrap();
        assert_eq!(
            first_button.get_attribute("title").unwrap(),
            "Unregister alex@mergington.edu"
        );
    }

    #[wasm_bindgen_test]
    async fn test_markup_in_server_data_stays_text() {
        let root = render_list(ready(
            r#"{"<script>alert('x')</script>": {
                "description": "<b>bold</b> & \"quoted\"",
                "schedule": "<i>never</i>",
                "max_participants": 3,
                "participants": ["<img src=x onerror=alert(1)>@x"]}}"#,
        ))
        .await;

        assert_eq!(count(&root, "script"), 0);
        assert_eq!(count(&root, "b"), 0);
        assert_eq!(count(&root, "i"), 0);
        assert_eq!(count(&root, "img"), 0);
        assert_eq!(text(&root, "h4"), "<script>alert('x')</script>");
        assert_eq!(
            text(&root, ".participant-email"),
            "<img src=x onerror=alert(1)>@x"
        );
        let html = root.inner_html();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp;"));
    }

    #[wasm_bindgen_test]
    async fn test_failed_load_shows_only_notice() {
        let root = render_list(Listing::Failed).await;
        assert_eq!(count(&root, ".activity-card"), 0);
        assert_eq!(text(&root, "#activities-list"), LOAD_FAILED);
    }

    #[wasm_bindgen_test]
    async fn test_status_banner_classes() {
        let shown = std::rc::Rc::new(StatusArea::default()).reduce(StatusAction::success("Signed up"));
        let root = mount_root();
        yew::Renderer::<StatusHarness>::with_root_and_props(
            root.clone(),
            StatusProps {
                status: (*shown).clone(),
            },
        )
        .render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let banner = root.query_selector("#message").unwrap().unwrap();
        assert_eq!(banner.text_content().unwrap(), "Signed up");
        assert_eq!(banner.class_name(), Tone::Success.class());

        let hidden = (*shown).clone();
        let hidden = StatusArea {
            visible: false,
            ..hidden
        };
        let root = mount_root();
        yew::Renderer::<StatusHarness>::with_root_and_props(root.clone(), StatusProps { status: hidden })
            .render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;
        let banner = root.query_selector("#message").unwrap().unwrap();
        assert_eq!(banner.class_name(), "success hidden");
    }
}

//! In-browser tests for interaction and the widget's timers.
//!
//! Run with `wasm-pack test --headless --firefox crates/chat-ui`.

#![cfg(target_arch = "wasm32")]

use async_trait::async_trait;
use gloo_timers::future::sleep;
use helpdesk_chat_ui::components::{ChatWidgetProps, ExplanationList, ExplanationListProps};
use helpdesk_chat_ui::{ChatError, ChatReply, ChatService, ChatWidget, ServiceHandle};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use yew::Classes;

wasm_bindgen_test_configure!(run_in_browser);

/// Answers every message with the same reply after a fixed delay
struct DelayedService {
    delay: Duration,
    reply: ChatReply,
}

#[async_trait(?Send)]
impl ChatService for DelayedService {
    async fn send(&self, _message: &str) -> Result<ChatReply, ChatError> {
        sleep(self.delay).await;
        Ok(self.reply.clone())
    }
}

fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .expect("element to click")
        .unchecked_into::<HtmlElement>()
        .click();
}

fn is_loading(root: &Element) -> bool {
    root.query_selector(r#"[role="status"]"#).unwrap().is_some()
}

fn text(root: &Element) -> String {
    root.text_content().unwrap_or_default()
}

fn mount_widget(delay_ms: u64) -> Element {
    let root = mount_point();
    let service = ServiceHandle::new(DelayedService {
        delay: Duration::from_millis(delay_ms),
        reply: ChatReply::text("Use the self service portal").with_followups(["I am locked out"]),
    });
    yew::Renderer::<ChatWidget>::with_root_and_props(
        root.clone(),
        ChatWidgetProps {
            service,
            config: Default::default(),
            viewport: None,
            title: None,
            class: Classes::new(),
        },
    )
    .render();
    root
}

#[wasm_bindgen_test]
async fn test_explanation_toggle_opens_list() {
    let root = mount_point();
    yew::Renderer::<ExplanationList>::with_root_and_props(
        root.clone(),
        ExplanationListProps {
            explanations: vec!["Matched the password reset article".to_string()],
        },
    )
    .render();
    sleep(Duration::from_millis(10)).await;

    assert_eq!(root.query_selector_all("li").unwrap().length(), 0);
    click(&root, "button");
    sleep(Duration::from_millis(10)).await;

    let items = root.query_selector_all("li").unwrap();
    assert_eq!(items.length(), 1);
    assert!(text(&root).contains("Matched the password reset article"));
    let button = root.query_selector("button").unwrap().unwrap();
    assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
async fn test_fast_reply_never_shows_loading_indicator() {
    let root = mount_widget(50);
    sleep(Duration::from_millis(10)).await;

    // First starter chip
    click(&root, "button");
    sleep(Duration::from_millis(20)).await;
    assert!(!is_loading(&root));

    // Past the 400 ms delay: the reply already cancelled it
    sleep(Duration::from_millis(480)).await;
    assert!(!is_loading(&root));

    sleep(Duration::from_millis(1000)).await;
    assert!(text(&root).contains("Use the self service portal"));
    assert!(text(&root).contains("I am locked out"));
}

#[wasm_bindgen_test]
async fn test_slow_reply_shows_loading_then_reveals_by_word() {
    let root = mount_widget(800);
    sleep(Duration::from_millis(10)).await;

    click(&root, "button");
    sleep(Duration::from_millis(200)).await;
    assert!(!is_loading(&root));

    sleep(Duration::from_millis(400)).await;
    assert!(is_loading(&root));
    let input = root.query_selector("input").unwrap().unwrap();
    assert!(input.has_attribute("disabled"));

    // Reply lands at ~800 ms; the first word follows one tick later
    sleep(Duration::from_millis(280)).await;
    assert!(!is_loading(&root));
    assert!(!text(&root).contains("Use the self service portal"));
    assert!(!text(&root).contains("I am locked out"));

    sleep(Duration::from_millis(1200)).await;
    assert!(text(&root).contains("Use the self service portal"));
    assert!(text(&root).contains("I am locked out"));
    assert!(!input.has_attribute("disabled"));
}

use crate::client::ChatService;
use crate::components::viewport::{ElementViewport, ViewportHandle};
use crate::components::{ChatInput, LoadingIndicator, TurnList};
use crate::config::ChatConfig;
use crate::state::{ChatAction, ChatState, PendingSubmission};
use crate::styles::{
    CARD_BG, CONTAINER_BG, FLEX_COL, HEADER_PADDING, PRIMARY_BORDER, ROUNDED_STANDARD,
    SECONDARY_TEXT, combine_styles,
};
use gloo_timers::callback::{Interval, Timeout};
use std::ops::Deref;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Shared chat service that can be passed as a component property
#[derive(Clone)]
pub struct ServiceHandle(Rc<dyn ChatService>);

impl ServiceHandle {
    pub fn new(service: impl ChatService + 'static) -> Self {
        Self(Rc::new(service))
    }
}

impl Deref for ServiceHandle {
    type Target = dyn ChatService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ChatWidgetProps {
    pub service: ServiceHandle,
    #[prop_or_default]
    pub config: Rc<ChatConfig>,
    /// Scroll target for new turns; defaults to the widget's own pane
    #[prop_or_default]
    pub viewport: Option<ViewportHandle>,
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let ChatWidgetProps {
        service,
        config,
        viewport,
        title,
        class,
    } = props;

    let state = use_reducer({
        let config = config.clone();
        move || ChatState::new(config)
    });
    let pane_ref = use_node_ref();

    // One submission at a time: call the service and arm the loading delay.
    // The effect tears down when the submission settles, which drops (and so
    // cancels) the delay timer.
    {
        let dispatcher = state.dispatcher();
        let service = service.clone();
        let delay_ms = config.loading_delay_ms;
        use_effect_with(state.pending().cloned(), move |pending| {
            let loading_delay = pending.clone().map(|PendingSubmission { id, text }| {
                let timeout = {
                    let dispatcher = dispatcher.clone();
                    Timeout::new(delay_ms, move || {
                        dispatcher.dispatch(ChatAction::LoadingDelayElapsed(id));
                    })
                };
                spawn_local(async move {
                    let result = service.send(&text).await;
                    dispatcher.dispatch(ChatAction::Replied { id, result });
                });
                timeout
            });
            move || drop(loading_delay)
        });
    }

    // Reveal ticks; the interval lives exactly as long as the active reveal
    {
        let dispatcher = state.dispatcher();
        let interval_ms = config.reveal_interval_ms;
        use_effect_with(state.active_reveal(), move |reveal| {
            let interval = reveal.map(|id| {
                Interval::new(interval_ms, move || {
                    dispatcher.dispatch(ChatAction::RevealTick(id));
                })
            });
            move || drop(interval)
        });
    }

    let on_draft_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(ChatAction::DraftChanged(text)))
    };

    let on_submit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(ChatAction::Submit(text)))
    };

    let on_followup = {
        let dispatcher = state.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(ChatAction::SelectFollowup(text)))
    };

    let viewport = viewport
        .clone()
        .unwrap_or_else(|| ViewportHandle::new(ElementViewport::new(pane_ref.clone())));
    let loading = state.is_loading();

    html! {
        <div class={classes!(FLEX_COL, "h-full", CONTAINER_BG, ROUNDED_STANDARD, "overflow-hidden", class.clone())}>
            if let Some(title) = title {
                <div class={combine_styles(&[CARD_BG, "border-b", PRIMARY_BORDER, HEADER_PADDING, "flex-shrink-0"])}>
                    <span class={combine_styles(&["font-semibold", SECONDARY_TEXT])}>{title}</span>
                </div>
            }

            <div ref={pane_ref} class="flex-1 overflow-y-auto">
                <TurnList
                    transcript={state.transcript().clone()}
                    viewport={viewport}
                    on_followup={on_followup}
                    followups_disabled={loading}
                />
            </div>

            if loading {
                <LoadingIndicator />
            }

            <div class="flex-shrink-0">
                <ChatInput
                    value={state.draft().to_string()}
                    on_change={on_draft_change}
                    on_submit={on_submit}
                    disabled={loading}
                />
            </div>
        </div>
    }
}

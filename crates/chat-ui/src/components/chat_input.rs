use crate::styles::{
    CARD_BG, FLEX_CENTER_GAP_2, INPUT_BASE, INPUT_COLORS, PRIMARY_BORDER, PRIMARY_BUTTON,
    STANDARD_PADDING, combine_styles,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Controlled text input; the draft itself lives in the widget state
#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub value: String,
    pub on_change: Callback<String>,
    pub on_submit: Callback<String>,
    #[prop_or_else(|| "Ask an IT question...".to_string())]
    pub placeholder: String,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let ChatInputProps {
        value,
        on_change,
        on_submit,
        placeholder,
        disabled,
    } = props;

    let handle_input = {
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let handle_submit = {
        let on_submit = on_submit.clone();
        let value = value.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(value.clone());
        })
    };

    let is_empty = value.trim().is_empty();

    html! {
        <form
            class={combine_styles(&[FLEX_CENTER_GAP_2, STANDARD_PADDING, CARD_BG, "border-t", PRIMARY_BORDER])}
            onsubmit={handle_submit}
        >
            <input
                type="text"
                class={combine_styles(&[INPUT_BASE, INPUT_COLORS])}
                placeholder={placeholder.clone()}
                value={value.clone()}
                oninput={handle_input}
                disabled={*disabled}
                aria-label="Message"
            />
            <button
                type="submit"
                class={combine_styles(&[PRIMARY_BUTTON, "flex-shrink-0"])}
                disabled={is_empty || *disabled}
            >
                {"Send"}
            </button>
        </form>
    }
}

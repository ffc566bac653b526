use crate::styles::{FLEX_CENTER_GAP_2, TERTIARY_TEXT, combine_styles};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingIndicatorProps {
    #[prop_or_else(|| "Assistant is typing".to_string())]
    pub label: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    let LoadingIndicatorProps { label, class } = props;

    html! {
        <div
            class={classes!(FLEX_CENTER_GAP_2, "py-2", "px-4", "mx-4", "mb-2", class.clone())}
            role="status"
            aria-live="polite"
        >
            <div class="flex gap-1">
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse-dot" style="animation-delay: -0.32s;"></span>
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse-dot" style="animation-delay: -0.16s;"></span>
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse-dot"></span>
            </div>
            <span class={combine_styles(&[TERTIARY_TEXT, "text-xs"])}>{label}</span>
        </div>
    }
}

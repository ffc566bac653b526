use crate::styles::{LINK_BUTTON, TERTIARY_TEXT, combine_styles};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ExplanationListProps {
    pub explanations: Vec<String>,
}

/// Collapsible "why this answer" list, closed until the user opens it
#[function_component(ExplanationList)]
pub fn explanation_list(props: &ExplanationListProps) -> Html {
    let expanded = use_state(|| false);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    html! {
        <div class="mt-1">
            <button
                type="button"
                class={LINK_BUTTON}
                onclick={toggle}
                aria-expanded={(*expanded).to_string()}
            >
                {if *expanded { "Hide explanation" } else { "Why this answer?" }}
            </button>
            if *expanded {
                <ul class={combine_styles(&["mt-1 ml-4 list-disc text-xs", TERTIARY_TEXT])}>
                    {for props.explanations.iter().map(|explanation| html! {
                        <li>{explanation}</li>
                    })}
                </ul>
            }
        </div>
    }
}

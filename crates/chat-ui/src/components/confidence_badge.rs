use crate::styles::{BADGE_BASE, confidence_colors, combine_styles};
use crate::types::Confidence;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfidenceBadgeProps {
    pub confidence: Confidence,
}

#[function_component(ConfidenceBadge)]
pub fn confidence_badge(props: &ConfidenceBadgeProps) -> Html {
    let category = props.confidence.category();
    let class = combine_styles(&[
        BADGE_BASE,
        confidence_colors(&category),
        &format!("confidence-{category}"),
    ]);

    html! {
        <span class={class} data-category={category.clone()} title="Confidence">
            {format!("Confidence: {}", props.confidence.label())}
        </span>
    }
}

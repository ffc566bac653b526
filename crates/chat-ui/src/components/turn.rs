use crate::components::{ConfidenceBadge, ExplanationList, FollowupChips};
use crate::styles::{
    BOT_BUBBLE_COLORS, BUBBLE_BASE, FLEX_COL_GAP_2, TERTIARY_TEXT, USER_BUBBLE_COLORS,
    combine_styles,
};
use crate::types::Turn;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TurnViewProps {
    pub turn: Turn,
    pub on_followup: Callback<String>,
    #[prop_or_default]
    pub followups_disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TurnView)]
pub fn turn_view(props: &TurnViewProps) -> Html {
    let TurnViewProps {
        turn,
        on_followup,
        followups_disabled,
        class,
    } = props;

    let label = combine_styles(&["text-xs font-semibold mb-1", TERTIARY_TEXT]);

    html! {
        <div class={classes!(FLEX_COL_GAP_2, class.clone())}>
            if let Some(user) = &turn.user {
                <div class={combine_styles(&[BUBBLE_BASE, USER_BUBBLE_COLORS])}>
                    <div class={label.clone()}>{"You"}</div>
                    <div>{user}</div>
                </div>
            }

            <div class={combine_styles(&[BUBBLE_BASE, BOT_BUBBLE_COLORS])}>
                <div class={classes!(label.clone(), "flex", "items-center", "gap-2")}>
                    <span>{"Assistant"}</span>
                    if let Some(confidence) = &turn.confidence {
                        <ConfidenceBadge confidence={confidence.clone()} />
                    }
                </div>
                <div>{&turn.bot}</div>
                if !turn.explanations.is_empty() {
                    <ExplanationList explanations={turn.explanations.clone()} />
                }
            </div>

            if !turn.followups.is_empty() {
                <FollowupChips
                    followups={turn.followups.clone()}
                    on_select={on_followup.clone()}
                    disabled={*followups_disabled}
                />
            }
        </div>
    }
}

use crate::components::TurnView;
use crate::components::viewport::ViewportHandle;
use crate::styles::{FLEX_COL_GAP_4, STANDARD_PADDING};
use crate::types::Transcript;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TurnListProps {
    pub transcript: Transcript,
    pub viewport: ViewportHandle,
    pub on_followup: Callback<String>,
    #[prop_or_default]
    pub followups_disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TurnList)]
pub fn turn_list(props: &TurnListProps) -> Html {
    let TurnListProps {
        transcript,
        viewport,
        on_followup,
        followups_disabled,
        class,
    } = props;

    // Follow the newest turn, including every revealed word
    use_effect_with(transcript.clone(), {
        let viewport = viewport.clone();
        move |_| viewport.scroll_to_latest()
    });

    html! {
        <div class={classes!(STANDARD_PADDING, FLEX_COL_GAP_4, class.clone())}>
            {for transcript.turns().iter().enumerate().map(|(index, turn)| {
                html! {
                    <TurnView
                        key={index}
                        turn={turn.clone()}
                        on_followup={on_followup.clone()}
                        followups_disabled={*followups_disabled}
                    />
                }
            })}
        </div>
    }
}

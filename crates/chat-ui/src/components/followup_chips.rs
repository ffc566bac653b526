use crate::styles::CHIP;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FollowupChipsProps {
    pub followups: Vec<String>,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(FollowupChips)]
pub fn followup_chips(props: &FollowupChipsProps) -> Html {
    let FollowupChipsProps {
        followups,
        on_select,
        disabled,
    } = props;

    html! {
        <div class="flex flex-wrap gap-2 mt-2 mr-10 md:mr-20">
            {for followups.iter().map(|followup| {
                let onclick = {
                    let on_select = on_select.clone();
                    let followup = followup.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(followup.clone()))
                };
                html! {
                    <button type="button" class={CHIP} {onclick} disabled={*disabled}>
                        {followup}
                    </button>
                }
            })}
        </div>
    }
}

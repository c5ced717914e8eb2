//! Hover lift for theme and prize cards: pointer enter raises the card,
//! pointer leave settles it back. The stylesheet interpolates the movement,
//! so rapid hover churn just retargets the running transition.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LiftCardProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(LiftCard)]
pub fn lift_card(props: &LiftCardProps) -> Html {
    let lifted = use_state(|| false);

    let onmouseenter = {
        let lifted = lifted.clone();
        Callback::from(move |_: MouseEvent| lifted.set(true))
    };
    let onmouseleave = {
        let lifted = lifted.clone();
        Callback::from(move |_: MouseEvent| lifted.set(false))
    };

    html! {
        <div
            class={classes!(props.class.clone(), lifted.then_some("lifted"))}
            {onmouseenter}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}

use yew::prelude::*;

use crate::models::StatusTier;

#[derive(Properties, PartialEq)]
pub struct StatusIndicatorProps {
    pub status: AttrValue,
}

/// Coloured dot followed by the status label.
#[function_component(StatusIndicator)]
pub fn status_indicator(props: &StatusIndicatorProps) -> Html {
    let tier = StatusTier::from_status(&props.status);

    html! {
        <div class="status">
            <span class={classes!("status-ring", tier.ring_class())}>
                <span class={classes!("status-dot", tier.dot_class())}></span>
            </span>
            <span class="status-label">{props.status.clone()}</span>
        </div>
    }
}

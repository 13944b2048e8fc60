// ============================================================================
// TOAST CONTAINER - top-right notifications, dismissed after a delay
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_toasts;
use crate::models::Notification;

#[derive(Properties, PartialEq)]
struct ToastProps {
    id: u32,
    notification: Notification,
    on_dismiss: Callback<u32>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(CONFIG.toast_duration_ms, move || on_dismiss.emit(id));
            // Dropping the timeout cancels it
            move || drop(timeout)
        });
    }

    let onclick = {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={props.notification.class()} role="alert" {onclick}>
            {props.notification.message.clone()}
        </div>
    }
}

#[function_component(ToastContainer)]
pub fn toast_container() -> Html {
    let Some(handle) = use_toasts() else {
        return html! {};
    };

    html! {
        <div class="toast-container">
            { for handle.store.toasts.iter().map(|(id, notification)| html! {
                <Toast
                    key={*id}
                    id={*id}
                    notification={notification.clone()}
                    on_dismiss={handle.dismiss.clone()}
                />
            }) }
        </div>
    }
}

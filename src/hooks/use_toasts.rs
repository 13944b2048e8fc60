// ============================================================================
// TOASTS - notification queue shared through context
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::{Notification, NotificationLevel};
use crate::stores::{ToastAction, ToastStore};

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub store: Rc<ToastStore>,
    pub notify: Callback<Notification>,
    pub dismiss: Callback<u32>,
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastStore::default);

    let notify = {
        let dispatcher = state.dispatcher();
        Callback::from(move |notification: Notification| {
            match notification.level {
                NotificationLevel::Success => log::info!("🔔 {}", notification.message),
                NotificationLevel::Error => log::warn!("🔔 {}", notification.message),
            }
            dispatcher.dispatch(ToastAction::Push(notification));
        })
    };

    let dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let handle = ToastHandle {
        store: Rc::new((*state).clone()),
        notify,
        dismiss,
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<ToastHandle>>
    }
}

/// Callback that shows a toast. Outside a `ToastProvider` it only logs.
#[hook]
pub fn use_notify() -> Callback<Notification> {
    match use_context::<ToastHandle>() {
        Some(handle) => handle.notify,
        None => Callback::from(|notification: Notification| {
            log::warn!("🔔 (no ToastProvider) {}", notification.message);
        }),
    }
}

#[hook]
pub fn use_toasts() -> Option<ToastHandle> {
    use_context::<ToastHandle>()
}

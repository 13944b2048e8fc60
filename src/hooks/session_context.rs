// ============================================================================
// SESSION CONTEXT - one session shared by the bar and the browser
// ============================================================================
// The provider owns the only copy of the access token. It refreshes it on
// mount; dependent fetches publish newer tokens back through `publish`.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::Session;
use crate::stores::{SessionAction, SessionStore};
use crate::utils::redirect_to_entry;
use crate::viewmodels::{LogoutOutcome, RefreshOutcome, SessionViewModel};

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub store: Rc<SessionStore>,
    /// Replaces the shared session with a freshly issued one.
    pub publish: Callback<Session>,
    pub logout: Callback<()>,
}

impl SessionHandle {
    /// Handle used outside a `SessionProvider`: empty, and every action is
    /// only logged.
    fn detached() -> Self {
        Self {
            store: Rc::new(SessionStore::default()),
            publish: Callback::from(|_: Session| {
                log::warn!("⚠️ Session published outside SessionProvider");
            }),
            logout: Callback::from(|_| {
                log::warn!("⚠️ Logout requested outside SessionProvider");
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionStore::default);

    // Mount-time refresh
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let vm = SessionViewModel::new();
            wasm_bindgen_futures::spawn_local(async move {
                match vm.refresh().await {
                    RefreshOutcome::Authenticated(session) => {
                        log::info!("👤 Signed in as {}", session.claims.name);
                        dispatcher.dispatch(SessionAction::Authenticated(session));
                    }
                    RefreshOutcome::Redirect => redirect_to_entry(),
                    RefreshOutcome::Ignored => {}
                }
            });
            || ()
        });
    }

    let publish = {
        let dispatcher = state.dispatcher();
        Callback::from(move |session: Session| {
            dispatcher.dispatch(SessionAction::Authenticated(session));
        })
    };

    let logout = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| {
            dispatcher.dispatch(SessionAction::LogoutStarted);
            let dispatcher = dispatcher.clone();
            let vm = SessionViewModel::new();
            wasm_bindgen_futures::spawn_local(async move {
                match vm.logout().await {
                    LogoutOutcome::LoggedOut => {
                        dispatcher.dispatch(SessionAction::LoggedOut);
                        redirect_to_entry();
                    }
                    LogoutOutcome::Failed(_) => dispatcher.dispatch(SessionAction::LogoutFailed),
                }
            });
        })
    };

    let handle = SessionHandle {
        store: Rc::new((*state).clone()),
        publish,
        logout,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session_context() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_else(SessionHandle::detached)
}

// ============================================================================
// SESSION BAR - brand, signed-in user and logout menu
// ============================================================================

use yew::prelude::*;

use crate::components::LoadingOverlay;
use crate::hooks::use_session_context;
use crate::utils::{BRAND_NAME, LOGO_PATH};

#[function_component(SessionBar)]
pub fn session_bar() -> Html {
    let session = use_session_context();
    let menu_open = use_state(|| false);

    if session.store.logging_out {
        return html! { <LoadingOverlay /> };
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_logout = {
        let logout = session.logout.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            logout.emit(());
        })
    };

    html! {
        <header class="session-bar">
            <div class="brand">
                <img src={LOGO_PATH} alt={BRAND_NAME} class="brand-logo" />
                <span class="brand-name">{BRAND_NAME}</span>
            </div>
            <div class="user">
                <button class="user-button" onclick={toggle_menu}>
                    <span class="user-name">{session.store.name().to_string()}</span>
                    <span class="user-email">{session.store.email().to_string()}</span>
                </button>
                if *menu_open {
                    <div class="user-menu">
                        <button class="menu-item" onclick={on_logout}>{"Logout"}</button>
                    </div>
                }
            </div>
        </header>
    }
}

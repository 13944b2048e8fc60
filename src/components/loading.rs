use yew::prelude::*;

/// Full-screen overlay that blocks input while a request is in flight.
#[function_component(LoadingOverlay)]
pub fn loading_overlay() -> Html {
    html! {
        <div class="loading-overlay" role="status" aria-live="polite">
            <div class="spinner"></div>
            <span class="sr-only">{"Loading..."}</span>
        </div>
    }
}

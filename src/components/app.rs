use yew::prelude::*;

use crate::components::{SessionBar, ToastContainer, TransactionBrowser};
use crate::hooks::{SessionProvider, ToastProvider};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <SessionProvider>
                <div class="dashboard">
                    <SessionBar />
                    <main class="content">
                        <h1 class="page-title">{"Overnight Transactions"}</h1>
                        <TransactionBrowser />
                    </main>
                </div>
                <ToastContainer />
            </SessionProvider>
        </ToastProvider>
    }
}

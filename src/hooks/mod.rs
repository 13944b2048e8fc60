pub mod session_context;
pub mod use_toasts;
pub mod use_transactions;

pub use session_context::{use_session_context, SessionHandle, SessionProvider};
pub use use_toasts::{use_notify, use_toasts, ToastHandle, ToastProvider};
pub use use_transactions::{use_transactions, UseTransactionsHandle};

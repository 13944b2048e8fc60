pub mod filter_store;
pub mod upload_store;
pub mod session_store;
pub mod transaction_store;
pub mod toast_store;

pub use filter_store::{DateRange, Filter, PageSize};
pub use upload_store::UploadDraft;
pub use session_store::{SessionAction, SessionStore};
pub use transaction_store::{RequestSequence, RequestTicket, TransactionAction, TransactionStore};
pub use toast_store::{ToastAction, ToastStore};

pub mod session_viewmodel;
pub mod transaction_viewmodel;

pub use session_viewmodel::{LogoutOutcome, RefreshOutcome, SessionViewModel};
pub use transaction_viewmodel::{ExportJob, ExportOutcome, PageLoad, PageSettlement, TransactionViewModel};

pub mod app;
pub mod date_range;
pub mod loading;
pub mod pagination;
pub mod session_bar;
pub mod status_indicator;
pub mod toast_container;
pub mod transaction_browser;
pub mod transaction_table;
pub mod upload_dialog;

pub use app::App;
pub use date_range::DateRangePicker;
pub use loading::LoadingOverlay;
pub use pagination::Pagination;
pub use session_bar::SessionBar;
pub use status_indicator::StatusIndicator;
pub use toast_container::ToastContainer;
pub use transaction_browser::TransactionBrowser;
pub use transaction_table::TransactionTable;
pub use upload_dialog::UploadDialog;

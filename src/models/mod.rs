pub mod session;
pub mod transaction;
pub mod upload;
pub mod notification;

pub use session::{Claims, Session, TokenResponse};
pub use transaction::{RefLocation, StatusTier, TransactionPage, TransactionQuery, TransactionRecord};
pub use upload::{FileSource, UploadFile, UploadOutcome, SPREADSHEET_MIME_TYPES};
pub use notification::{Notification, NotificationLevel};

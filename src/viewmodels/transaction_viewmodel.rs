// ============================================================================
// TRANSACTION VIEWMODEL - listing, export and bulk import
// ============================================================================
// Holds no state: the store is passed in, outcomes are handed back to the
// hook which dispatches them.
// ============================================================================

use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{Notification, Session, TransactionPage, UploadFile, UploadOutcome};
use crate::services::{ApiClient, DashboardApi};
use crate::stores::{Filter, RequestSequence, RequestTicket};
use crate::utils::{export_file_name, messages};
use crate::viewmodels::{RefreshOutcome, SessionViewModel};

/// Result of fetching one page of the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoad {
    Loaded { session: Session, page: TransactionPage },
    /// Token refreshed but the listing call failed; the old page stays.
    Failed { session: Session, error: ApiError },
    Redirect,
    /// Token refresh got no response; nothing to do.
    Skipped,
}

/// Shared-state changes a finished page load is allowed to make.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageSettlement {
    pub publish: Option<Session>,
    pub page: Option<TransactionPage>,
    pub redirect: bool,
}

impl PageLoad {
    /// Only the response to the most recently issued ticket may touch the
    /// shared session, the displayed page or navigation. Anything older
    /// settles to nothing.
    pub fn settle(self, ticket: RequestTicket, sequence: &RequestSequence) -> PageSettlement {
        if !sequence.is_current(ticket) {
            log::debug!("⏭️ Dropping stale response {:?}", ticket);
            return PageSettlement::default();
        }
        match self {
            PageLoad::Loaded { session, page } => PageSettlement {
                publish: Some(session),
                page: Some(page),
                redirect: false,
            },
            PageLoad::Failed { session, .. } => PageSettlement {
                publish: Some(session),
                ..PageSettlement::default()
            },
            PageLoad::Redirect => PageSettlement {
                redirect: true,
                ..PageSettlement::default()
            },
            PageLoad::Skipped => PageSettlement::default(),
        }
    }
}

/// A validated export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub location_code: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Ready(Vec<u8>),
    Empty,
    Failed(ApiError),
}

impl ExportOutcome {
    pub fn notification(&self) -> Notification {
        match self {
            ExportOutcome::Ready(_) => Notification::success(messages::EXPORT_SUCCESS),
            ExportOutcome::Empty => Notification::error(messages::EXPORT_EMPTY),
            ExportOutcome::Failed(_) => Notification::error(messages::EXPORT_ERROR),
        }
    }
}

#[derive(Clone)]
pub struct TransactionViewModel {
    api: Rc<dyn DashboardApi>,
    session: SessionViewModel,
}

impl TransactionViewModel {
    pub fn new() -> Self {
        Self::with_api(Rc::new(ApiClient::new()))
    }

    pub fn with_api(api: Rc<dyn DashboardApi>) -> Self {
        Self {
            session: SessionViewModel::with_api(Rc::clone(&api)),
            api,
        }
    }

    /// Refreshes the token, then fetches the page described by `filter`
    /// for the location carried by the new token.
    pub async fn load_page(&self, filter: &Filter) -> PageLoad {
        let session = match self.session.refresh().await {
            RefreshOutcome::Authenticated(session) => session,
            RefreshOutcome::Redirect => return PageLoad::Redirect,
            RefreshOutcome::Ignored => return PageLoad::Skipped,
        };

        let query = filter.query(session.location_code().unwrap_or_default());
        log::info!("📋 Fetching transactions: {}", query.to_query_string());

        match self.api.fetch_transactions(&session.bearer(), &query).await {
            Ok(page) => {
                log::info!(
                    "✅ {} rows on page {} ({} total)",
                    page.rows.len(),
                    query.page,
                    page.total_items
                );
                PageLoad::Loaded { session, page }
            }
            Err(error) => {
                log::error!("❌ Fetching transactions failed: {}", error);
                PageLoad::Failed { session, error }
            }
        }
    }

    /// Checks that an export can be issued for `location_code`. Never
    /// touches the network.
    pub fn prepare_export(&self, location_code: Option<&str>) -> Result<ExportJob, Notification> {
        match location_code.map(str::trim).filter(|code| !code.is_empty()) {
            Some(code) => Ok(ExportJob {
                location_code: code.to_string(),
                file_name: export_file_name(code),
            }),
            None => {
                log::warn!("⚠️ Export refused: no location code");
                Err(Notification::error(messages::LOCATION_REQUIRED))
            }
        }
    }

    pub async fn export(&self, job: &ExportJob) -> ExportOutcome {
        log::info!("📥 Exporting transactions of {}", job.location_code);
        match self.api.export_transactions(&job.location_code).await {
            Ok(bytes) if bytes.is_empty() => {
                log::warn!("⚠️ Export of {} returned no data", job.location_code);
                ExportOutcome::Empty
            }
            Ok(bytes) => ExportOutcome::Ready(bytes),
            Err(e) => {
                log::error!("❌ Export failed: {}", e);
                ExportOutcome::Failed(e)
            }
        }
    }

    /// Sends a staged spreadsheet for the session's location.
    pub async fn submit_upload(&self, session: &Session, file: &UploadFile) -> UploadOutcome {
        let location_code = session.location_code().unwrap_or_default();
        log::info!("📤 Uploading {} for {}", file.name, location_code);

        match self
            .api
            .upload_transactions(&session.bearer(), location_code, file)
            .await
        {
            Ok(status) => {
                let outcome = UploadOutcome::from_status(status);
                if outcome != UploadOutcome::Uploaded {
                    log::warn!("⚠️ Upload rejected with status {}", status);
                }
                outcome
            }
            Err(e) => {
                log::error!("❌ Upload failed: {}", e);
                UploadOutcome::Failed(e)
            }
        }
    }
}

impl Default for TransactionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

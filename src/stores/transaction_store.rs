// ============================================================================
// TRANSACTION STORE - everything the transaction browser displays
// ============================================================================
// Driven through `use_reducer`: async completions dispatch actions, so they
// always apply to the latest state instead of a snapshot captured at spawn.
// ============================================================================

use std::rc::Rc;

use chrono::NaiveDate;
use yew::Reducible;

use crate::models::{TransactionPage, UploadFile, UploadOutcome};
use crate::stores::{Filter, PageSize, UploadDraft};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionStore {
    pub filter: Filter,
    /// Last page received; kept on fetch errors.
    pub page: TransactionPage,
    /// `Some` while the upload dialog is open.
    pub upload: Option<UploadDraft>,
    /// Blocking overlay during export and upload.
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransactionAction {
    ChangePageSize(PageSize),
    ChangePage(usize),
    ChangeSearch(String),
    ChangeDateRange(Option<NaiveDate>, Option<NaiveDate>),
    PageLoaded(TransactionPage),
    SetLoading(bool),
    OpenUpload,
    CloseUpload,
    SelectFile(Option<UploadFile>),
    /// Inline dialog error that does not come from the server.
    UploadInvalid(String),
    UploadFinished(UploadOutcome),
}

impl TransactionStore {
    pub fn apply(&mut self, action: TransactionAction) {
        match action {
            TransactionAction::ChangePageSize(size) => {
                self.filter.change_page_size(size, self.page.total_items);
            }
            TransactionAction::ChangePage(index) => self.filter.change_page(index),
            TransactionAction::ChangeSearch(text) => self.filter.change_search(text),
            TransactionAction::ChangeDateRange(start, end) => {
                self.filter.change_date_range(start, end);
            }
            TransactionAction::PageLoaded(page) => self.page = page,
            TransactionAction::SetLoading(loading) => self.loading = loading,
            TransactionAction::OpenUpload => self.upload = Some(UploadDraft::default()),
            TransactionAction::CloseUpload => self.upload = None,
            TransactionAction::SelectFile(file) => {
                if let Some(draft) = self.upload.as_mut() {
                    draft.select(file);
                }
            }
            TransactionAction::UploadInvalid(message) => {
                if let Some(draft) = self.upload.as_mut() {
                    draft.fail(message);
                }
            }
            TransactionAction::UploadFinished(outcome) => {
                self.loading = false;
                match outcome.dialog_error() {
                    None => {
                        self.upload = None;
                        self.filter.refresh();
                    }
                    Some(message) => {
                        if let Some(draft) = self.upload.as_mut() {
                            draft.fail(message);
                        }
                    }
                }
            }
        }
    }
}

impl Reducible for TransactionStore {
    type Action = TransactionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Identifies one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic counter of page requests. Only the response to the most
/// recently issued ticket may replace the displayed page.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

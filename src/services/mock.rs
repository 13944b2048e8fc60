//! In-memory `DashboardApi` used by view model tests.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{TransactionPage, TransactionQuery, UploadFile};
use crate::services::DashboardApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    RefreshToken,
    Logout,
    FetchTransactions { bearer: String, query: TransactionQuery },
    Export { location_code: String },
    Upload { bearer: String, location_code: String, file_name: String },
}

pub struct MockApi {
    pub token: RefCell<Result<String, ApiError>>,
    pub logout: RefCell<Result<(), ApiError>>,
    pub page: RefCell<Result<TransactionPage, ApiError>>,
    pub export: RefCell<Result<Vec<u8>, ApiError>>,
    pub upload: RefCell<Result<u16, ApiError>>,
    pub calls: RefCell<Vec<Call>>,
}

impl MockApi {
    pub fn with_token(token: String) -> Self {
        Self {
            token: RefCell::new(Ok(token)),
            logout: RefCell::new(Ok(())),
            page: RefCell::new(Ok(TransactionPage::default())),
            export: RefCell::new(Ok(vec![0x50, 0x4b, 0x03, 0x04])),
            upload: RefCell::new(Ok(200)),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn fetches(&self) -> Vec<TransactionQuery> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::FetchTransactions { query, .. } => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl DashboardApi for MockApi {
    async fn refresh_token(&self) -> Result<String, ApiError> {
        self.record(Call::RefreshToken);
        self.token.borrow().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record(Call::Logout);
        self.logout.borrow().clone()
    }

    async fn fetch_transactions(
        &self,
        bearer: &str,
        query: &TransactionQuery,
    ) -> Result<TransactionPage, ApiError> {
        self.record(Call::FetchTransactions {
            bearer: bearer.to_string(),
            query: query.clone(),
        });
        self.page.borrow().clone()
    }

    async fn export_transactions(&self, location_code: &str) -> Result<Vec<u8>, ApiError> {
        self.record(Call::Export { location_code: location_code.to_string() });
        self.export.borrow().clone()
    }

    async fn upload_transactions(
        &self,
        bearer: &str,
        location_code: &str,
        file: &UploadFile,
    ) -> Result<u16, ApiError> {
        self.record(Call::Upload {
            bearer: bearer.to_string(),
            location_code: location_code.to_string(),
            file_name: file.name.clone(),
        });
        self.upload.borrow().clone()
    }
}

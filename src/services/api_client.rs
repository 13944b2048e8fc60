// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No UI decisions here: callers get typed results and decide what to do.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use web_sys::RequestCredentials;

use crate::config::{AppConfig, CONFIG};
use crate::error::ApiError;
use crate::models::{TokenResponse, TransactionPage, TransactionQuery, UploadFile};
use crate::services::upload::post_multipart;

/// Remote API consumed by the dashboard.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// Fresh access token from the session cookie.
    async fn refresh_token(&self) -> Result<String, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    async fn fetch_transactions(
        &self,
        bearer: &str,
        query: &TransactionQuery,
    ) -> Result<TransactionPage, ApiError>;

    /// Spreadsheet with every record of the location.
    async fn export_transactions(&self, location_code: &str) -> Result<Vec<u8>, ApiError>;

    /// Returns the HTTP status of the upload, whatever it is.
    async fn upload_transactions(
        &self,
        bearer: &str,
        location_code: &str,
        file: &UploadFile,
    ) -> Result<u16, ApiError>;
}

#[derive(Clone)]
pub struct ApiClient {
    config: &'static AppConfig,
}

impl ApiClient {
    pub fn new() -> Self {
        Self { config: &CONFIG }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns a non-2xx response into `ApiError::Http`.
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .filter(|body| !body.is_empty())
        .unwrap_or_else(|| response.status_text());
    Err(ApiError::Http { status, message })
}

#[async_trait(?Send)]
impl DashboardApi for ApiClient {
    async fn refresh_token(&self) -> Result<String, ApiError> {
        let response = Request::get(&self.config.token_url())
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        let body = ensure_ok(response).await?.json::<TokenResponse>().await?;
        log::debug!("🔑 Access token refreshed");
        Ok(body.access_token)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = Request::get(&self.config.logout_url())
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        ensure_ok(response).await?;
        log::info!("👋 Session closed on the server");
        Ok(())
    }

    async fn fetch_transactions(
        &self,
        bearer: &str,
        query: &TransactionQuery,
    ) -> Result<TransactionPage, ApiError> {
        let url = format!("{}?{}", self.config.transactions_url(), query.to_query_string());
        log::debug!("📋 GET {}", url);

        let response = Request::get(&url)
            .header("Authorization", bearer)
            .send()
            .await?;
        let page = ensure_ok(response).await?.json::<TransactionPage>().await?;

        log::info!(
            "✅ {} transactions received (page {}/{}, {} total)",
            page.rows.len(),
            query.page,
            page.total_pages,
            page.total_items
        );
        Ok(page)
    }

    async fn export_transactions(&self, location_code: &str) -> Result<Vec<u8>, ApiError> {
        let url = format!(
            "{}?LocationCode={}",
            self.config.export_url(),
            urlencoding::encode(location_code)
        );

        let response = Request::get(&url).send().await?;
        let bytes = ensure_ok(response).await?.binary().await?;
        log::info!("✅ Export received: {} bytes", bytes.len());
        Ok(bytes)
    }

    async fn upload_transactions(
        &self,
        bearer: &str,
        location_code: &str,
        file: &UploadFile,
    ) -> Result<u16, ApiError> {
        let url = format!(
            "{}?locationCode={}",
            self.config.upload_url(),
            urlencoding::encode(location_code)
        );
        log::debug!("📤 POST {}", url);
        post_multipart(&url, bearer, file).await
    }
}

// ============================================================================
// SESSION VIEWMODEL - token refresh and logout
// ============================================================================
// Returns outcomes; the session context decides what to render or where to go.
// ============================================================================

use std::rc::Rc;

use crate::error::FailureKind;
use crate::models::Session;
use crate::services::{ApiClient, DashboardApi};

/// What a token refresh means for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Authenticated(Session),
    /// The server answered but the session is gone.
    Redirect,
    /// No response from the server; keep whatever is displayed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogoutOutcome {
    LoggedOut,
    Failed(String),
}

#[derive(Clone)]
pub struct SessionViewModel {
    api: Rc<dyn DashboardApi>,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self::with_api(Rc::new(ApiClient::new()))
    }

    pub fn with_api(api: Rc<dyn DashboardApi>) -> Self {
        Self { api }
    }

    /// Asks for a fresh access token and decodes its claims.
    pub async fn refresh(&self) -> RefreshOutcome {
        let result = self
            .api
            .refresh_token()
            .await
            .and_then(Session::from_token);

        match result {
            Ok(session) => {
                log::debug!("🔑 Token refreshed for {:?}", session.claims.email);
                RefreshOutcome::Authenticated(session)
            }
            Err(e) => match e.token_refresh_kind() {
                FailureKind::Authentication => {
                    log::warn!("🔒 Session expired: {}", e);
                    RefreshOutcome::Redirect
                }
                FailureKind::Network => {
                    log::debug!("📴 Token refresh got no response: {}", e);
                    RefreshOutcome::Ignored
                }
            },
        }
    }

    pub async fn logout(&self) -> LogoutOutcome {
        log::info!("🚪 Logging out...");
        match self.api.logout().await {
            Ok(()) => {
                log::info!("✅ Logged out");
                LogoutOutcome::LoggedOut
            }
            Err(e) => {
                log::error!("❌ Logout failed: {}", e);
                LogoutOutcome::Failed(e.to_string())
            }
        }
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::session::encode_test_token;
    use crate::services::mock::{Call, MockApi};
    use futures::executor::block_on;
    use serde_json::json;

    fn viewmodel(api: &Rc<MockApi>) -> SessionViewModel {
        SessionViewModel::with_api(api.clone())
    }

    #[test]
    fn refresh_decodes_the_new_token() {
        let token = encode_test_token(&json!({
            "name": "Sari",
            "email": "sari@example.test",
            "locationCode": "LOC02"
        }));
        let api = Rc::new(MockApi::with_token(token.clone()));

        match block_on(viewmodel(&api).refresh()) {
            RefreshOutcome::Authenticated(session) => {
                assert_eq!(session.access_token, token);
                assert_eq!(session.claims.name, "Sari");
                assert_eq!(session.location_code(), Some("LOC02"));
            }
            other => panic!("expected a session, got {:?}", other),
        }
        assert_eq!(api.calls(), vec![Call::RefreshToken]);
    }

    #[test]
    fn refresh_rejected_by_server_redirects() {
        let api = Rc::new(MockApi::with_token(String::new()));
        *api.token.borrow_mut() = Err(ApiError::Http { status: 401, message: "Unauthorized".into() });

        assert_eq!(block_on(viewmodel(&api).refresh()), RefreshOutcome::Redirect);
    }

    #[test]
    fn undecodable_token_redirects() {
        let api = Rc::new(MockApi::with_token("garbage".into()));
        assert_eq!(block_on(viewmodel(&api).refresh()), RefreshOutcome::Redirect);
    }

    #[test]
    fn refresh_without_response_is_ignored() {
        let api = Rc::new(MockApi::with_token(String::new()));
        *api.token.borrow_mut() = Err(ApiError::Network("Failed to fetch".into()));

        assert_eq!(block_on(viewmodel(&api).refresh()), RefreshOutcome::Ignored);
    }

    #[test]
    fn logout_reports_failures() {
        let api = Rc::new(MockApi::with_token(String::new()));
        assert_eq!(block_on(viewmodel(&api).logout()), LogoutOutcome::LoggedOut);

        *api.logout.borrow_mut() = Err(ApiError::Http { status: 500, message: "down".into() });
        assert!(matches!(block_on(viewmodel(&api).logout()), LogoutOutcome::Failed(_)));
        assert_eq!(api.calls(), vec![Call::Logout, Call::Logout]);
    }
}

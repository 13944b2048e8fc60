// ============================================================================
// SESSION STORE - single source of truth for the access token
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::Session;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStore {
    pub session: Option<Session>,
    /// A logout request is in flight.
    pub logging_out: bool,
}

impl SessionStore {
    pub fn name(&self) -> &str {
        self.session.as_ref().map(|s| s.claims.name.as_str()).unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.session.as_ref().map(|s| s.claims.email.as_str()).unwrap_or_default()
    }

    pub fn location_code(&self) -> Option<String> {
        self.session.as_ref().and_then(|s| s.location_code()).map(str::to_string)
    }

    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Authenticated(session) => self.session = Some(session),
            SessionAction::LogoutStarted => self.logging_out = true,
            SessionAction::LogoutFailed => self.logging_out = false,
            SessionAction::LoggedOut => {
                self.session = None;
                self.logging_out = false;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// A token was issued; replaces the previous session.
    Authenticated(Session),
    LogoutStarted,
    LogoutFailed,
    LoggedOut,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let SessionAction::Authenticated(session) = &action {
            if self.session.as_ref() == Some(session) {
                return self;
            }
        }
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

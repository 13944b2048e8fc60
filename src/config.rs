use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "https://dev-valetapi.skyparking.online/api";
const DEFAULT_ENTRY_ROUTE: &str = "/login";
const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub api_base_url: String,
    /// Route the browser is sent to when the session is gone.
    pub entry_route: String,
    pub log_level: String,
    pub toast_duration_ms: u32,
    pub endpoints: Endpoints,
}

/// Paths of the remote API, relative to `api_base_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub token: String,
    pub logout: String,
    pub transactions: String,
    pub export: String,
    pub upload: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token: "/token".to_string(),
            logout: "/logout".to_string(),
            transactions: "/getAllOverNight".to_string(),
            export: "/exportDataOn".to_string(),
            upload: "/upload/dataOverNight".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            entry_route: DEFAULT_ENTRY_ROUTE.to_string(),
            log_level: "info".to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            endpoints: Endpoints::default(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from variables captured at compile time
    /// (see `build.rs`, which forwards `.env` entries).
    pub fn from_env() -> Self {
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            entry_route: option_env!("ENTRY_ROUTE")
                .unwrap_or(DEFAULT_ENTRY_ROUTE).to_string(),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .unwrap_or("4000").parse().unwrap_or(DEFAULT_TOAST_DURATION_MS),
            endpoints: Endpoints::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    pub fn token_url(&self) -> String {
        self.url(&self.endpoints.token)
    }

    pub fn logout_url(&self) -> String {
        self.url(&self.endpoints.logout)
    }

    pub fn transactions_url(&self) -> String {
        self.url(&self.endpoints.transactions)
    }

    pub fn export_url(&self) -> String {
        self.url(&self.endpoints.export)
    }

    pub fn upload_url(&self) -> String {
        self.url(&self.endpoints.upload)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

// ============================================================================
// OVERNIGHT DASHBOARD - Yew front end for overnight parking transactions
// ============================================================================
// - Models: wire types and the session decoded from the access token
// - Services: remote API, multipart upload, file downloads, template
// - Stores: plain state + reducers (filter, upload draft, session, toasts)
// - ViewModels: async flows returning outcomes, no UI state
// - Hooks/Components: Yew glue
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

pub use components::App;

#[cfg(test)]
#[path = "../env_file.rs"]
mod env_file;

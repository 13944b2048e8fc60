pub mod api_client;
pub mod download;
pub mod template;
pub mod upload;

pub use api_client::{ApiClient, DashboardApi};
pub use download::save_bytes;
pub use template::{download_template, template_workbook};

#[cfg(test)]
pub mod mock;

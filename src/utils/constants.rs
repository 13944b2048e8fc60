/// User-facing messages.
pub mod messages {
    pub const EXPORT_SUCCESS: &str = "Data downloaded successfully!";
    pub const EXPORT_EMPTY: &str = "Failed to download data.";
    pub const EXPORT_ERROR: &str = "An error occurred while downloading data.";
    pub const LOCATION_REQUIRED: &str = "Location is required.";

    pub const ONLY_EXCEL: &str = "Only Excel files are allowed.";
    pub const SELECT_FILE: &str = "Please select a valid Excel file.";
    pub const UPLOAD_SUCCESS: &str = "File uploaded successfully!";
    pub const UPLOAD_REJECTED: &str = "File upload failed. Please try again.";
    pub const UPLOAD_ERROR: &str = "An error occurred during file upload. Please try again.";

    pub const NO_DATA: &str = "Data Not Found";
}

pub const BRAND_NAME: &str = "SKY Parking";
pub const LOGO_PATH: &str = "/logo.png";

pub const TEMPLATE_FILE_NAME: &str = "Template.xlsx";
pub const TEMPLATE_SHEET_NAME: &str = "Template";
pub const TEMPLATE_HEADERS: [&str; 4] = ["No", "Ticket Number", "License Plate", "InTime"];

pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Name of the file produced by an export.
pub fn export_file_name(location_code: &str) -> String {
    format!("{}_alldata.xlsx", location_code)
}

// ============================================================================
// IMPORT TEMPLATE - blank spreadsheet with the expected header row
// ============================================================================

use rust_xlsxwriter::Workbook;

use crate::error::ApiError;
use crate::services::download::save_bytes;
use crate::utils::{TEMPLATE_FILE_NAME, TEMPLATE_HEADERS, TEMPLATE_SHEET_NAME, XLSX_MIME_TYPE};

/// Builds `Template.xlsx`: one sheet, one header row, nothing else.
pub fn template_workbook() -> Result<Vec<u8>, ApiError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(TEMPLATE_SHEET_NAME)?;
    for (column, header) in TEMPLATE_HEADERS.iter().enumerate() {
        sheet.write_string(0, column as u16, *header)?;
    }
    Ok(workbook.save_to_buffer()?)
}

/// Generates the template locally and hands it to the browser. No network.
pub fn download_template() -> Result<(), ApiError> {
    let bytes = template_workbook()?;
    save_bytes(&bytes, TEMPLATE_FILE_NAME, XLSX_MIME_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_from_rs, Reader, Xlsx};
    use std::io::Cursor;

    #[test]
    fn template_contains_only_the_header_row() {
        let bytes = template_workbook().unwrap();
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();

        assert_eq!(workbook.sheet_names(), vec![TEMPLATE_SHEET_NAME.to_string()]);

        let range = workbook.worksheet_range(TEMPLATE_SHEET_NAME).unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        assert_eq!(rows, vec![vec!["No", "Ticket Number", "License Plate", "InTime"]]);
    }
}

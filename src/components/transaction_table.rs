// ============================================================================
// TRANSACTION TABLE - one page of overnight transactions
// ============================================================================

use yew::prelude::*;

use crate::components::StatusIndicator;
use crate::models::{TransactionPage, TransactionRecord};
use crate::stores::Filter;
use crate::utils::{format_timestamp, messages};

pub const COLUMNS: [&str; 10] = [
    "No",
    "Date",
    "Locations",
    "Transaction No",
    "Reference No",
    "Vehicle Plate",
    "Photo Image",
    "In Time",
    "Last Update by",
    "Status",
];

const MISSING: &str = "-";

/// Display values of one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub number: u64,
    pub date: String,
    pub location: String,
    pub transaction_no: String,
    pub reference_no: String,
    pub vehicle_plate: String,
    pub photo_url: Option<String>,
    pub in_time: String,
    pub modified_by: String,
    pub status: String,
}

impl RowView {
    pub fn new(number: u64, record: &TransactionRecord) -> Self {
        let timestamp = |value: &str| format_timestamp(value).unwrap_or_else(|| MISSING.to_string());
        Self {
            number,
            date: timestamp(&record.modified_on),
            location: record.location_name().unwrap_or(MISSING).to_string(),
            transaction_no: record.transaction_no.clone(),
            reference_no: MISSING.to_string(),
            vehicle_plate: record.vehicle_plate_no.clone(),
            photo_url: record.photo_url().map(str::to_string),
            in_time: record.in_time.as_deref().map(timestamp).unwrap_or_else(|| MISSING.to_string()),
            modified_by: record.modified_by().unwrap_or(MISSING).to_string(),
            status: record.status.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// A single "Data Not Found" row spanning every column.
    Empty,
    Rows(Vec<RowView>),
}

pub fn table_body(page: &TransactionPage, filter: &Filter) -> TableBody {
    if page.is_empty() {
        return TableBody::Empty;
    }
    TableBody::Rows(
        page.rows
            .iter()
            .enumerate()
            .map(|(index, record)| RowView::new(filter.row_number(index), record))
            .collect(),
    )
}

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub page: TransactionPage,
    pub filter: Filter,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let body = match table_body(&props.page, &props.filter) {
        TableBody::Empty => html! {
            <tr>
                <td colspan={COLUMNS.len().to_string()} class="no-data">{messages::NO_DATA}</td>
            </tr>
        },
        TableBody::Rows(rows) => rows.into_iter().map(render_row).collect::<Html>(),
    };

    html! {
        <table class="transactions">
            <thead>
                <tr>
                    { for COLUMNS.iter().map(|column| html! { <th>{*column}</th> }) }
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

fn render_row(row: RowView) -> Html {
    html! {
        <tr key={row.number.to_string()}>
            <td>{row.number.to_string()}</td>
            <td>{row.date}</td>
            <td>{row.location}</td>
            <td>{row.transaction_no}</td>
            <td>{row.reference_no}</td>
            <td>{row.vehicle_plate}</td>
            <td>
                if let Some(url) = row.photo_url {
                    <img src={url} alt="vehicle" class="photo" loading="lazy" />
                }
            </td>
            <td>{row.in_time}</td>
            <td>{row.modified_by}</td>
            <td><StatusIndicator status={row.status} /></td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RefLocation;
    use crate::stores::PageSize;

    #[test]
    fn empty_page_renders_a_single_placeholder_row() {
        assert_eq!(table_body(&TransactionPage::default(), &Filter::default()), TableBody::Empty);
        assert_eq!(COLUMNS.len(), 10);
    }

    #[test]
    fn rows_are_numbered_across_pages() {
        let mut filter = Filter::default();
        filter.change_page_size(PageSize::Fifty, 500);
        filter.change_page(2);

        let page = TransactionPage {
            rows: vec![TransactionRecord::default(); 2],
            total_pages: 10,
            total_items: 500,
        };
        match table_body(&page, &filter) {
            TableBody::Rows(rows) => {
                assert_eq!(rows[0].number, 101);
                assert_eq!(rows[1].number, 102);
            }
            TableBody::Empty => panic!("expected rows"),
        }
    }

    #[test]
    fn missing_values_render_as_dash() {
        let row = RowView::new(1, &TransactionRecord {
            transaction_no: "TRX-9".into(),
            status: "Checked Out".into(),
            ..TransactionRecord::default()
        });
        assert_eq!(row.date, "-");
        assert_eq!(row.location, "-");
        assert_eq!(row.reference_no, "-");
        assert_eq!(row.in_time, "-");
        assert_eq!(row.modified_by, "-");
        assert_eq!(row.photo_url, None);
        assert_eq!(row.transaction_no, "TRX-9");
    }

    #[test]
    fn present_values_are_formatted() {
        let row = RowView::new(1, &TransactionRecord {
            modified_on: "2024-03-01T22:15:00Z".into(),
            location_code: Some("LOC01".into()),
            ref_location: Some(RefLocation { name: "Mall".into() }),
            in_time: Some("2024-03-01T20:00:00Z".into()),
            modified_by: Some("admin".into()),
            ..TransactionRecord::default()
        });
        assert_ne!(row.date, "-");
        assert_ne!(row.in_time, "-");
        assert_eq!(row.location, "Mall");
        assert_eq!(row.modified_by, "admin");
    }
}

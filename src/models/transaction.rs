use serde::{Deserialize, Serialize};

// ============================================================================
// TRANSACTIONS - overnight parking records as served by the listing endpoint
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RefLocation {
    #[serde(default)]
    pub name: String,
}

/// One overnight transaction. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionRecord {
    #[serde(default)]
    pub modified_on: String,
    #[serde(default)]
    pub location_code: Option<String>,
    #[serde(default)]
    pub ref_location: Option<RefLocation>,
    #[serde(default)]
    pub transaction_no: String,
    #[serde(default)]
    pub vehicle_plate_no: String,
    #[serde(default)]
    pub photo_image: Option<String>,
    #[serde(default)]
    pub path_photo_image: Option<String>,
    #[serde(default)]
    pub in_time: Option<String>,
    #[serde(default)]
    pub modified_by: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl TransactionRecord {
    /// Location shown in the table; only known when the record carries a code.
    pub fn location_name(&self) -> Option<&str> {
        let has_code = self.location_code.as_deref().is_some_and(|c| !c.is_empty());
        if !has_code {
            return None;
        }
        self.ref_location.as_ref().map(|l| l.name.as_str())
    }

    /// Photo URL, only when the record says it has a photo.
    pub fn photo_url(&self) -> Option<&str> {
        match self.photo_image.as_deref() {
            Some(photo) if !photo.is_empty() => self.path_photo_image.as_deref(),
            _ => None,
        }
    }

    pub fn modified_by(&self) -> Option<&str> {
        self.modified_by.as_deref().filter(|m| !m.is_empty())
    }

    pub fn status_tier(&self) -> StatusTier {
        StatusTier::from_status(&self.status)
    }
}

/// One page of the listing endpoint. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    #[serde(default, rename = "data")]
    pub rows: Vec<TransactionRecord>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
}

impl TransactionPage {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Colour tier of the status indicator. Exact, case-sensitive match on the
/// status label; every other label lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    InArea,
    NoVehicle,
    Other,
}

impl StatusTier {
    pub const IN_AREA: &'static str = "In Area";
    pub const NO_VEHICLE: &'static str = "No vehicle";

    pub fn from_status(status: &str) -> Self {
        match status {
            Self::IN_AREA => StatusTier::InArea,
            Self::NO_VEHICLE => StatusTier::NoVehicle,
            _ => StatusTier::Other,
        }
    }

    /// Classes of the outer ring of the indicator.
    pub fn ring_class(self) -> &'static str {
        match self {
            StatusTier::InArea => "bg-green-100",
            StatusTier::NoVehicle => "bg-red-100",
            StatusTier::Other => "bg-blue-100",
        }
    }

    /// Classes of the inner dot of the indicator.
    pub fn dot_class(self) -> &'static str {
        match self {
            StatusTier::InArea => "bg-green-600",
            StatusTier::NoVehicle => "bg-red-600",
            StatusTier::Other => "bg-blue-600",
        }
    }
}

/// Query parameters of the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    pub limit: u32,
    pub location: String,
    pub page: u32,
    pub keyword: String,
    /// `yyyy-MM-dd`, empty when unbounded.
    pub start_date: String,
    pub end_date: String,
}

impl TransactionQuery {
    pub fn to_query_string(&self) -> String {
        format!(
            "limit={}&location={}&page={}&keyword={}&startDate={}&endDate={}",
            self.limit,
            urlencoding::encode(&self.location),
            self.page,
            urlencoding::encode(&self.keyword),
            urlencoding::encode(&self.start_date),
            urlencoding::encode(&self.end_date),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_listing_payload() {
        let payload = json!({
            "data": [{
                "ModifiedOn": "2024-03-01T22:15:00.000Z",
                "LocationCode": "LOC01",
                "RefLocation": { "Name": "Mall Parking" },
                "TransactionNo": "TRX-1",
                "VehiclePlateNo": "B 1234 XYZ",
                "PhotoImage": "photo.jpg",
                "PathPhotoImage": "https://cdn.example.test/photo.jpg",
                "InTime": "2024-03-01T20:00:00.000Z",
                "ModifiedBy": null,
                "Status": "In Area"
            }],
            "totalPages": 3,
            "totalItems": 21
        });

        let page: TransactionPage = serde_json::from_value(payload).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 21);

        let row = &page.rows[0];
        assert_eq!(row.location_name(), Some("Mall Parking"));
        assert_eq!(row.photo_url(), Some("https://cdn.example.test/photo.jpg"));
        assert_eq!(row.modified_by(), None);
        assert_eq!(row.status_tier(), StatusTier::InArea);
    }

    #[test]
    fn location_needs_a_code() {
        let row = TransactionRecord {
            location_code: None,
            ref_location: Some(RefLocation { name: "Hidden".into() }),
            ..TransactionRecord::default()
        };
        assert_eq!(row.location_name(), None);
    }

    #[test]
    fn photo_path_is_ignored_without_photo_flag() {
        let row = TransactionRecord {
            photo_image: None,
            path_photo_image: Some("https://cdn.example.test/x.jpg".into()),
            ..TransactionRecord::default()
        };
        assert_eq!(row.photo_url(), None);
    }

    #[test]
    fn status_tiers_match_exactly_with_fallback() {
        assert_eq!(StatusTier::from_status("In Area"), StatusTier::InArea);
        assert_eq!(StatusTier::from_status("No vehicle"), StatusTier::NoVehicle);
        assert_eq!(StatusTier::from_status("no vehicle"), StatusTier::Other);
        assert_eq!(StatusTier::from_status("Checked Out"), StatusTier::Other);
        assert_eq!(StatusTier::from_status(""), StatusTier::Other);
        assert_eq!(StatusTier::Other.dot_class(), "bg-blue-600");
    }

    #[test]
    fn query_string_encodes_keyword_and_keeps_empty_dates() {
        let query = TransactionQuery {
            limit: 10,
            location: "LOC 01".into(),
            page: 2,
            keyword: "B 12&3".into(),
            start_date: "2024-03-01".into(),
            end_date: String::new(),
        };
        assert_eq!(
            query.to_query_string(),
            "limit=10&location=LOC%2001&page=2&keyword=B%2012%263&startDate=2024-03-01&endDate="
        );
    }
}

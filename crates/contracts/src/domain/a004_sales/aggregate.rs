use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesStatus {
    #[serde(rename = "Selesai")]
    Completed,
    #[serde(rename = "Dikirim")]
    Shipped,
    #[serde(rename = "Dibayar")]
    Paid,
}

impl SalesStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SalesStatus::Completed => "Selesai",
            SalesStatus::Shipped => "Dikirim",
            SalesStatus::Paid => "Dibayar",
        }
    }

    /// CSS modifier of the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            SalesStatus::Completed => "badge--success",
            SalesStatus::Shipped => "badge--info",
            SalesStatus::Paid => "badge--warning",
        }
    }
}

/// Completed checkout; also the input of the dashboard revenue summary
///
/// `product_count` is the quantity summed by the dashboard order totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub id: String,
    pub user_name: String,
    pub status: SalesStatus,
    pub product_count: u32,
    /// DD/MM/YYYY
    pub order_date: String,
    pub receipt_number: String,
    pub price: f64,
}

impl Record for SalesRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "sales"
    }

    fn element_name() -> &'static str {
        "Penjualan"
    }

    fn list_name() -> &'static str {
        "Penjualan"
    }

    fn id_prefix() -> &'static str {
        "E"
    }
}

impl Searchable for SalesRecord {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.user_name.clone(),
            self.status.label().to_string(),
            self.order_date.clone(),
            self.receipt_number.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_round_trip_through_wire_names() {
        for status in [SalesStatus::Completed, SalesStatus::Shipped, SalesStatus::Paid] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }
}

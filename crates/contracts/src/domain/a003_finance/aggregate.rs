use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::search::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisbursementStatus {
    #[default]
    #[serde(rename = "Setuju")]
    Approved,
}

impl DisbursementStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DisbursementStatus::Approved => "Setuju",
        }
    }
}

/// Disbursement of merchant income to their bank account
///
/// `balance` is a snapshot taken when the record was made. The amount is not
/// checked against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceRecord {
    pub id: String,
    #[serde(rename = "umkm")]
    pub merchant: String,
    pub total_products: u32,
    pub balance: f64,
    pub disbursement: f64,
    pub bank: String,
    pub account_number: String,
    /// DD/MM/YYYY
    pub date: String,
    pub status: DisbursementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_reference: Option<String>,
}

impl Record for FinanceRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "finance"
    }

    fn element_name() -> &'static str {
        "Pencairan Dana"
    }

    fn list_name() -> &'static str {
        "Kelola Keuangan"
    }

    fn id_prefix() -> &'static str {
        "B"
    }
}

impl Searchable for FinanceRecord {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.merchant.clone(),
            self.bank.clone(),
            self.account_number.clone(),
            self.date.clone(),
            self.status.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_label() {
        let json = serde_json::to_string(&DisbursementStatus::Approved).unwrap();
        assert_eq!(json, "\"Setuju\"");
        assert_eq!(DisbursementStatus::default().label(), "Setuju");
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::search::Searchable;

/// Registered small merchant (UMKM)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: String,
    pub name: String,
    pub total_products: u32,
    pub contact: String,
    pub balance: f64,
    pub bank: String,
    pub account_number: String,
}

impl Record for Merchant {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "umkm"
    }

    fn element_name() -> &'static str {
        "UMKM"
    }

    fn list_name() -> &'static str {
        "Kelola UMKM"
    }

    fn id_prefix() -> &'static str {
        "C"
    }
}

impl Searchable for Merchant {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.contact.clone(),
            self.bank.clone(),
            self.account_number.clone(),
        ]
    }
}

/// Bank details of a merchant, looked up by merchant name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAccount {
    pub bank: String,
    pub account_number: String,
    pub total_income: f64,
}

/// Merchant name -> bank details
pub type MerchantDirectory = BTreeMap<String, MerchantAccount>;

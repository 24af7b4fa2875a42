use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::search::Searchable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRecord {
    pub id: String,
    pub user_name: String,
    pub product_count: u32,
    /// DD/MM/YYYY
    pub shipping_date: String,
    pub receipt_number: String,
}

impl Record for ShippingRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "shipping"
    }

    fn element_name() -> &'static str {
        "Pengiriman"
    }

    fn list_name() -> &'static str {
        "Pengiriman"
    }

    fn id_prefix() -> &'static str {
        "E"
    }
}

impl Searchable for ShippingRecord {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.user_name.clone(),
            self.shipping_date.clone(),
            self.receipt_number.clone(),
        ]
    }
}

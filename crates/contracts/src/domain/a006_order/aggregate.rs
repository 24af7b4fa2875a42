use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::search::Searchable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub user_name: String,
    pub product_count: u32,
    pub total_price: f64,
    /// DD/MM/YYYY
    pub date: String,
    pub email: String,
    pub address: String,
}

impl Record for OrderRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Pesanan"
    }

    fn list_name() -> &'static str {
        "Pesanan"
    }

    fn id_prefix() -> &'static str {
        "E"
    }
}

impl Searchable for OrderRecord {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.user_name.clone(),
            self.date.clone(),
            self.email.clone(),
            self.address.clone(),
        ]
    }
}

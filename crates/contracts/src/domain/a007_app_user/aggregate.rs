use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::search::Searchable;

/// Avatar service used for users created from the form
pub const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/40?u=";

/// Buyer account of the marketplace app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub email: String,
    pub total_orders: u32,
    /// DD/MM/YYYY
    pub join_date: String,
}

impl Record for AppUser {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "app_user"
    }

    fn element_name() -> &'static str {
        "Pengguna"
    }

    fn list_name() -> &'static str {
        "Daftar Pengguna"
    }

    fn id_prefix() -> &'static str {
        "U"
    }
}

impl Searchable for AppUser {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.join_date.clone(),
        ]
    }
}

use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Top-level screens selected from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Products,
    Finance,
    Merchants,
    Users,
    Help,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Products,
        Page::Finance,
        Page::Merchants,
        Page::Users,
        Page::Help,
    ];

    /// Key used in the URL query
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "d100_revenue_summary",
            Page::Products => "a001_product",
            Page::Finance => "a003_finance",
            Page::Merchants => "a002_umkm",
            Page::Users => "a007_app_user",
            Page::Help => "help_center",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Products => "Kelola Produk",
            Page::Finance => "Kelola Keuangan",
            Page::Merchants => "Kelola UMKM",
            Page::Users => "Kelola Pengguna",
            Page::Help => "Bantuan",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Products => "products",
            Page::Finance => "wallet",
            Page::Merchants => "store",
            Page::Users => "users",
            Page::Help => "help",
        }
    }

    /// Unknown keys fall back to the dashboard
    pub fn from_key(key: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|page| page.key() == key)
            .unwrap_or_default()
    }
}

/// Screens nested under "Kelola Pengguna"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSubPage {
    #[default]
    UserList,
    Orders,
    Shipping,
    Sales,
}

impl UserSubPage {
    pub const ALL: [UserSubPage; 4] = [
        UserSubPage::UserList,
        UserSubPage::Orders,
        UserSubPage::Shipping,
        UserSubPage::Sales,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            UserSubPage::UserList => "users",
            UserSubPage::Orders => "orders",
            UserSubPage::Shipping => "shipping",
            UserSubPage::Sales => "sales",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserSubPage::UserList => "Daftar Pengguna",
            UserSubPage::Orders => "Pesanan",
            UserSubPage::Shipping => "Pengiriman",
            UserSubPage::Sales => "Penjualan",
        }
    }

    pub fn from_key(key: &str) -> UserSubPage {
        UserSubPage::ALL
            .into_iter()
            .find(|sub| sub.key() == key)
            .unwrap_or_default()
    }
}

/// `?page=...&sub=...`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl NavQuery {
    pub fn parse(search: &str) -> NavQuery {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn for_location(page: Page, sub: UserSubPage) -> NavQuery {
        NavQuery {
            page: Some(page.key().to_string()),
            sub: (page == Page::Users).then(|| sub.key().to_string()),
        }
    }

    pub fn page(&self) -> Page {
        self.page.as_deref().map(Page::from_key).unwrap_or_default()
    }

    pub fn sub(&self) -> UserSubPage {
        self.sub.as_deref().map(UserSubPage::from_key).unwrap_or_default()
    }

    pub fn to_search(&self) -> String {
        format!("?{}", serde_qs::to_string(self).unwrap_or_default())
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
    pub user_sub_page: RwSignal<UserSubPage>,
    pub left_open: RwSignal<bool>,
    /// "Kelola Pengguna" submenu expanded
    pub users_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::Dashboard),
            user_sub_page: RwSignal::new(UserSubPage::UserList),
            left_open: RwSignal::new(true),
            users_menu_open: RwSignal::new(false),
        }
    }

    /// Restore the screen from the URL query and mirror later changes back into it
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query = NavQuery::parse(&search);
        self.active_page.set(query.page());
        self.user_sub_page.set(query.sub());
        self.users_menu_open.set(query.page() == Page::Users);

        let this = *self;
        Effect::new(move |_| {
            let new_url =
                NavQuery::for_location(this.active_page.get(), this.user_sub_page.get()).to_search();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        leptos::logging::log!("navigate: page='{}'", page.key());
        self.active_page.set(page);
    }

    pub fn navigate_user_sub_page(&self, sub: UserSubPage) {
        leptos::logging::log!("navigate: users/{}", sub.key());
        self.user_sub_page.set(sub);
        self.active_page.set(Page::Users);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_users_menu(&self) {
        self.users_menu_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), page);
        }
        for sub in UserSubPage::ALL {
            assert_eq!(UserSubPage::from_key(sub.key()), sub);
        }
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        assert_eq!(Page::from_key("a099_unknown"), Page::Dashboard);
        assert_eq!(UserSubPage::from_key(""), UserSubPage::UserList);
    }

    #[test]
    fn test_nav_query() {
        let query = NavQuery::parse("?page=a007_app_user&sub=sales");
        assert_eq!(query.page(), Page::Users);
        assert_eq!(query.sub(), UserSubPage::Sales);

        let empty = NavQuery::parse("");
        assert_eq!(empty.page(), Page::Dashboard);
    }

    #[test]
    fn test_sub_only_written_for_users_page() {
        let search = NavQuery::for_location(Page::Products, UserSubPage::Sales).to_search();
        assert_eq!(search, "?page=a001_product");

        let search = NavQuery::for_location(Page::Users, UserSubPage::Orders).to_search();
        assert_eq!(search, "?page=a007_app_user&sub=orders");
    }
}

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use contracts::shared::config::AppConfig;
use contracts::shared::data::{DataSource, MockDataSource};
use contracts::shared::date_utils::CalendarDay;
use leptos::prelude::*;
use std::sync::Arc;

/// Id of the optional `<script type="application/toml">` holding a config override
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Seed provider shared by all pages
#[derive(Clone)]
pub struct DataContext(pub Arc<dyn DataSource>);

pub fn use_data_source() -> Arc<dyn DataSource> {
    expect_context::<DataContext>().0
}

pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}

fn read_config_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// Browser-local calendar day
pub fn today() -> CalendarDay {
    let now = js_sys::Date::new_0();
    CalendarDay::new(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

#[component]
pub fn App() -> impl IntoView {
    let config = match AppConfig::load(read_config_override().as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("configuration: {e:#}");
            return view! {
                <div class="fatal-error">
                    <h1>"Aplikasi gagal dimuat"</h1>
                    <p>{format!("Konfigurasi tidak valid: {e}")}</p>
                </div>
            }
            .into_any();
        }
    };

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new(config.notifications.toast_lifetime_ms));
    provide_context(DataContext(Arc::new(MockDataSource)));
    provide_context(config);

    view! {
        <AppRoutes />
        <ToastHost />
    }
    .into_any()
}

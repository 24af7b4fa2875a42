use leptos::prelude::*;

/// Record status chip; the modifier class comes from the status itself
#[component]
pub fn StatusBadge(
    label: &'static str,
    /// e.g. `SalesStatus::badge_class()`
    modifier: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status {modifier}")>{label}</span>
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard revenue card
///
/// `on_calendar` adds the calendar button; the picker itself is passed as children
/// and positioned under the card.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Formatted primary value
    #[prop(into)]
    value: Signal<String>,
    /// Secondary line, e.g. "0.1k pesanan"
    #[prop(into)]
    detail: Signal<String>,
    #[prop(optional)] on_calendar: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__top">
                <div class="stat-card__icon">
                    {icon(icon_name)}
                </div>
                {on_calendar.map(|on_calendar| view! {
                    <button
                        class="button button--icon stat-card__calendar"
                        title="Pilih tanggal"
                        on:click=move |_| on_calendar.run(())
                    >
                        {icon("calendar")}
                    </button>
                })}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__subtitle">{move || detail.get()}</div>
            </div>
            {children.map(|children| children())}
        </div>
    }
}

use leptos::prelude::*;

/// Title row of a list page; children go to the action area on the right
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Search box, add button... (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="header__subtitle">{s}</div>
                })}
            </div>
            <div class="header__actions">
                {children()}
            </div>
        </div>
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Stops `Err` values rendered below it from reaching the app root
///
/// Every fault is logged and the subtree is replaced by a diagnostic panel.
#[component]
pub fn FaultBoundary(
    /// Shown as the panel heading
    #[prop(into)]
    context: String,
    children: Children,
) -> impl IntoView {
    let context = StoredValue::new(context);

    view! {
        <ErrorBoundary fallback=move |errors| {
            let messages: Vec<String> = errors
                .get()
                .into_iter()
                .map(|(_, error)| error.to_string())
                .collect();
            for message in &messages {
                log::error!("{}: {}", context.get_value(), message);
            }
            view! {
                <div class="fault-panel" role="alert">
                    <div class="fault-panel__title">
                        {icon("alert")}
                        <span>{format!("Terjadi kesalahan: {}", context.get_value())}</span>
                    </div>
                    <ul class="fault-panel__details">
                        {messages
                            .into_iter()
                            .map(|message| view! { <li>{message}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}

pub mod badge;
pub mod input;
pub mod textarea;

pub use badge::StatusBadge;
pub use input::Input;
pub use textarea::Textarea;

use leptos::prelude::*;

/// Inline validation message under a field
pub(crate) fn field_error(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <div class="form__error">{message}</div> })
    }
}

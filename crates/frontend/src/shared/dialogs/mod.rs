//! Confirmation and success dialogs
//!
//! Both render on top of any open form (higher z-index than `Modal`).
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;

const DIALOG_Z_INDEX: i32 = 1100;

/// Purpose of a confirmation; picks the confirm button text and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmVariant {
    #[default]
    Save,
    Delete,
    Logout,
}

impl ConfirmVariant {
    pub fn default_confirm_text(&self) -> &'static str {
        match self {
            ConfirmVariant::Save => "Simpan Data",
            ConfirmVariant::Delete => "Hapus",
            ConfirmVariant::Logout => "Keluar",
        }
    }

    pub fn button_class(&self) -> &'static str {
        match self {
            ConfirmVariant::Save => "button button--primary",
            ConfirmVariant::Delete | ConfirmVariant::Logout => "button button--danger",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ConfirmVariant::Save => "info",
            ConfirmVariant::Delete => "alert",
            ConfirmVariant::Logout => "log-out",
        }
    }
}

pub const DEFAULT_CANCEL_TEXT: &str = "Batal";

/// Second step of a two-phase commit
#[component]
pub fn ConfirmationDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] body: Signal<String>,
    /// Defaults to the variant's text
    #[prop(optional, into)]
    confirm_text: Option<String>,
    #[prop(optional, into)] cancel_text: Option<String>,
    #[prop(optional)] variant: ConfirmVariant,
    on_confirm: Callback<()>,
    /// Also fired by a click on the overlay
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label =
        StoredValue::new(confirm_text.unwrap_or_else(|| variant.default_confirm_text().to_string()));
    let cancel_label =
        StoredValue::new(cancel_text.unwrap_or_else(|| DEFAULT_CANCEL_TEXT.to_string()));

    view! {
        <Show when=move || is_open.get()>
            <ModalFrame on_close=on_cancel modal_class="dialog" z_index=DIALOG_Z_INDEX>
                <div class={format!("dialog__icon dialog__icon--{:?}", variant).to_lowercase()}>
                    {icon(variant.icon_name())}
                </div>
                <h3 class="dialog__title">{move || title.get()}</h3>
                <p class="dialog__body">{move || body.get()}</p>
                <div class="dialog__actions">
                    <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                        {cancel_label.get_value()}
                    </button>
                    <button class=variant.button_class() on:click=move |_| {
                        leptos::logging::log!("confirmation: {:?} confirmed", variant);
                        on_confirm.run(())
                    }>
                        {confirm_label.get_value()}
                    </button>
                </div>
            </ModalFrame>
        </Show>
    }
}

/// "Operation completed" notice with a single acknowledge button
#[component]
pub fn SuccessDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] body: Signal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <ModalFrame on_close=on_close modal_class="dialog" z_index=DIALOG_Z_INDEX>
                <div class="dialog__icon dialog__icon--success">{icon("check")}</div>
                <h3 class="dialog__title">{move || title.get()}</h3>
                <p class="dialog__body">{move || body.get()}</p>
                <div class="dialog__actions dialog__actions--single">
                    <button class="button button--primary" on:click=move |_| on_close.run(())>
                        "Okay"
                    </button>
                </div>
            </ModalFrame>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_confirm_texts() {
        assert_eq!(ConfirmVariant::default(), ConfirmVariant::Save);
        assert_eq!(ConfirmVariant::Save.default_confirm_text(), "Simpan Data");
        assert_eq!(ConfirmVariant::Delete.default_confirm_text(), "Hapus");
        assert_eq!(ConfirmVariant::Logout.default_confirm_text(), "Keluar");
        assert_eq!(DEFAULT_CANCEL_TEXT, "Batal");
    }

    #[test]
    fn test_destructive_variants_use_danger_button() {
        assert_eq!(ConfirmVariant::Save.button_class(), "button button--primary");
        assert_eq!(ConfirmVariant::Delete.button_class(), "button button--danger");
        assert_eq!(ConfirmVariant::Logout.button_class(), "button button--danger");
    }
}

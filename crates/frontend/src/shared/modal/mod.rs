use crate::shared::icons::icon;
use crate::shared::modal_frame::{defer_close, ModalFrame};
use leptos::ev;
use leptos::prelude::*;

/// Generic modal: renders nothing while closed, overlay + titled panel while open.
///
/// The close button, a click on the overlay and the Escape key all request
/// `on_close`. Clicks inside the panel do not reach the overlay.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    /// Callback when modal should close
    on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    /// Wider surface for long forms
    #[prop(optional)]
    wide: bool,
    /// z-index of the overlay; dialogs stacked on a form pass a higher one
    #[prop(optional)]
    z_index: Option<i32>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);

    let handle = window_event_listener(ev::keydown, move |event| {
        if is_open.get_untracked() && event.key() == "Escape" {
            leptos::logging::log!("modal: Escape pressed, closing");
            defer_close(on_close);
        }
    });
    on_cleanup(move || handle.remove());

    let handle_close = move |_| {
        defer_close(on_close);
    };

    view! {
        <Show when=move || is_open.get()>
            <ModalFrame
                on_close=on_close
                modal_class={if wide { "modal--wide" } else { "modal--narrow" }}
                z_index=z_index.unwrap_or(1000)
            >
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=handle_close title="Tutup">
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children.with_value(|children| children())}
                </div>
            </ModalFrame>
        </Show>
    }
}

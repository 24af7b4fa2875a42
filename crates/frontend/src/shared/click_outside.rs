use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Set `is_open` to false on any mousedown outside `container`
///
/// The listener lives as long as the calling component.
pub fn close_on_outside_click(container: NodeRef<html::Div>, is_open: RwSignal<bool>) {
    let handle = window_event_listener(ev::mousedown, move |event| {
        if !is_open.get_untracked() {
            return;
        }
        let Some(container) = container.get_untracked() else {
            return;
        };
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(|node| container.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            is_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());
}

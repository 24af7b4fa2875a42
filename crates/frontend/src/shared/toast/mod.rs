//! Toast notifications
//!
//! `ToastService` wraps the `ToastQueue` state machine in a signal and is provided
//! through context by `App`. Every toast schedules its own removal; a timer firing
//! after a manual dismissal finds nothing to remove.
use crate::shared::icons::icon;
use contracts::shared::toast::{Severity, Toast, ToastId, ToastQueue};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new(lifetime_ms: u64) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(lifetime_ms)),
        }
    }

    pub fn add(&self, message: impl Into<String>, severity: Severity) -> Option<ToastId> {
        let now_ms = js_sys::Date::now() as u64;
        let id = self
            .queue
            .try_update(|queue| queue.push(message, severity, now_ms))?;
        let lifetime_ms = self.queue.with_untracked(|queue| queue.lifetime_ms());
        leptos::logging::log!("toast: #{} shown for {}ms", id, lifetime_ms);

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(u32::try_from(lifetime_ms).unwrap_or(u32::MAX)).await;
            // The app may have been torn down in the meantime.
            queue.try_update(|queue| queue.dismiss(id));
        });
        Some(id)
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(message, Severity::Error);
    }

    pub fn remove(&self, id: ToastId) {
        self.queue.update(|queue| {
            if !queue.dismiss(id) {
                leptos::logging::log!("toast: #{} already gone", id);
            }
        });
    }

    /// Visible toasts (tracked)
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.visible().to_vec())
    }
}

pub fn use_toast() -> ToastService {
    expect_context::<ToastService>()
}

fn severity_icon(severity: Severity) -> AnyView {
    match severity {
        Severity::Success => icon("check"),
        Severity::Error => icon("alert"),
        Severity::Info => icon("info"),
    }
}

/// Fixed stack of visible toasts, newest at the bottom
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || service.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.severity.css_class()) role="status">
                            <span class="toast__icon">{severity_icon(toast.severity)}</span>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Tutup"
                                on:click=move |_| service.remove(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Transient notification queue
//!
//! Time is passed in by the caller (milliseconds since epoch), so the queue has no
//! clock of its own. Entries leave either through `dismiss` or once `expire` sees
//! their lifetime elapsed.
use serde::{Deserialize, Serialize};

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
    Info,
}

impl Severity {
    /// CSS modifier used by the toast host
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast--success",
            Severity::Error => "toast--error",
            Severity::Info => "toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub created_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    lifetime_ms: u64,
    last_id: ToastId,
}

impl ToastQueue {
    pub fn new(lifetime_ms: u64) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime_ms,
            last_id: 0,
        }
    }

    pub fn lifetime_ms(&self) -> u64 {
        self.lifetime_ms
    }

    /// Append a toast; the id is the creation timestamp, bumped when two toasts
    /// share a millisecond so ids stay strictly increasing.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now_ms: u64) -> ToastId {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            created_at_ms: now_ms,
        });
        id
    }

    /// Remove by id. Removing an absent id is a no-op; returns whether something
    /// was removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    /// Drop every toast whose lifetime has elapsed at `now_ms`
    pub fn expire(&mut self, now_ms: u64) {
        let lifetime = self.lifetime_ms;
        self.toasts
            .retain(|toast| now_ms.saturating_sub(toast.created_at_ms) < lifetime);
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.iter().any(|toast| toast.id == id)
    }

    /// Visible toasts, oldest first
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_expire() {
        let mut queue = ToastQueue::new(5000);
        let id = queue.push("x", Severity::default(), 1_000);
        assert!(queue.contains(id));
        assert_eq!(queue.visible()[0].severity, Severity::Success);

        queue.expire(5_999);
        assert!(queue.contains(id));
        queue.expire(6_000);
        assert!(!queue.contains(id));
    }

    #[test]
    fn test_dismiss_before_timer_then_timer_is_noop() {
        let mut queue = ToastQueue::new(5000);
        let id = queue.push("x", Severity::Info, 1_000);
        assert!(queue.dismiss(id));
        assert!(queue.is_empty());

        // late timer firing
        assert!(!queue.dismiss(id));
        queue.expire(10_000);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_strictly_increasing_within_same_millisecond() {
        let mut queue = ToastQueue::new(5000);
        let a = queue.push("a", Severity::Success, 42);
        let b = queue.push("b", Severity::Error, 42);
        let c = queue.push("c", Severity::Info, 41);
        assert!(a < b && b < c);
        assert_eq!(queue.visible().len(), 3);
    }

    #[test]
    fn test_concurrent_toasts_expire_independently() {
        let mut queue = ToastQueue::new(5000);
        let first = queue.push("first", Severity::Success, 0);
        let second = queue.push("second", Severity::Success, 3_000);
        queue.expire(5_000);
        assert!(!queue.contains(first));
        assert!(queue.contains(second));
    }
}

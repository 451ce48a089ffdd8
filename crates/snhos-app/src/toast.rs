//! Transient notifications stacked in the bottom-right corner

use std::time::{Duration, Instant};

use snhos_core::Severity;

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

/// A toast waiting for its show time
#[derive(Debug, Clone)]
struct Scheduled {
    due: Instant,
    title: String,
    message: String,
    severity: Severity,
}

/// Live toasts, oldest first, plus toasts scheduled for later
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    scheduled: Vec<Scheduled>,
    next_id: ToastId,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            scheduled: Vec::new(),
            next_id: 0,
            duration,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            message: message.into(),
            severity,
            created_at: now,
        });
        id
    }

    /// Show a toast once `delay` has passed
    pub fn schedule(
        &mut self,
        delay: Duration,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) {
        self.scheduled.push(Scheduled {
            due: now + delay,
            title: title.into(),
            message: message.into(),
            severity,
        });
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn dismiss_newest(&mut self) -> Option<ToastId> {
        self.toasts.pop().map(|t| t.id)
    }

    /// Show due scheduled toasts and drop expired ones
    pub fn tick(&mut self, now: Instant) {
        let (due, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.scheduled).into_iter().partition(|s| s.due <= now);
        self.scheduled = waiting;
        for s in due {
            self.push(s.title, s.message, s.severity, s.due);
        }

        let duration = self.duration;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at) < duration);
    }
}

//! Transient toast notifications.

use std::time::{Duration, Instant};

/// How long a toast stays up before the expiry sweep removes it.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Ceiling on simultaneously visible toasts; older ones drop first.
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub level: ToastLevel,
    pub message: String,
    created_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= TOAST_LIFETIME
    }
}

/// Owns the visible toast stack.
///
/// The expiry sweep runs on a timer subscription that only exists while
/// this is non-empty, so an idle app schedules nothing.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn push(
        &mut self,
        level: ToastLevel,
        message: impl Into<String>,
        now: Instant,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
            created_at: now,
        });

        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }

        id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drop every toast past its lifetime.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

//! User-facing notifications raised by the auth action wrappers.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Fire-and-forget success/error notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
}

/// Notifier that queues toasts into a shared `ToastState` signal.
///
/// In the browser each toast is dismissed after `duration_ms`; elsewhere toasts
/// stay queued until dismissed explicitly.
#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>, duration_ms: u32) -> Self {
        Self { toasts, duration_ms }
    }

    pub fn toasts(&self) -> RwSignal<ToastState> {
        self.toasts
    }

    fn notify(&self, kind: ToastKind, text: &str) {
        let Some(id) = self.toasts.try_update(|t| t.push(kind, text)).flatten() else {
            leptos::logging::warn!("toast dropped: blank text or disposed queue");
            return;
        };
        schedule_dismiss(self.toasts, id, self.duration_ms);
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, text: &str) {
        self.notify(ToastKind::Success, text);
    }

    fn error(&self, text: &str) {
        self.notify(ToastKind::Error, text);
    }
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64, duration_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(duration_ms, move || {
            let _ = toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id, duration_ms);
    }
}

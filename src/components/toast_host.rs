//! Toast stack rendered from the shared `ToastState` queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToastNotifier` writes into the queue; this component only displays it.
//! Place it anywhere under `AuthProvider`.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Shared toast queue for the current subtree, created on first use.
pub fn use_toast_queue() -> RwSignal<ToastState> {
    use_context::<RwSignal<ToastState>>().unwrap_or_else(|| {
        let queue = RwSignal::new(ToastState::default());
        provide_context(queue);
        queue
    })
}

/// Click handler body: drop one toast from the queue.
fn dismiss_toast(toasts: RwSignal<ToastState>, id: u64) -> bool {
    toasts.try_update(|t| t.dismiss(id)).unwrap_or(false)
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast_queue();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast.kind.css_class()
                                on:click=move |_| {
                                    dismiss_toast(toasts, id);
                                }
                            >
                                {toast.text}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

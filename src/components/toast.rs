//! Toast Notifications
//!
//! Transient success and error messages raised after load.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                success.get().map(|message| view! {
                    <ToastMessage message=message kind=ToastKind::Success />
                })
            }}
            {move || {
                error.get().map(|message| view! {
                    <ToastMessage message=message kind=ToastKind::Error />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastKind {
    Success,
    Error,
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    kind: ToastKind,
) -> impl IntoView {
    let (icon, bg_class) = match kind {
        ToastKind::Success => ("✓", "bg-green-600"),
        ToastKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}

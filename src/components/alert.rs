//! Flash Alerts
//!
//! Server flash messages present at load. Each alert fades out after five
//! seconds and is removed from the document half a second later. Messages
//! raised after load go through the toast channel instead and are not
//! covered by this schedule.

use gloo_timers::callback::Timeout;
use leptos::*;

/// Delay before an alert starts fading, in milliseconds
const DISMISS_DELAY_MS: u32 = 5000;
/// Fade duration before removal, in milliseconds
const FADE_MS: u32 = 500;

#[derive(Clone, Copy, PartialEq)]
enum AlertPhase {
    Visible,
    Fading,
    Removed,
}

/// Stack of flash alerts embedded in the page at load
#[component]
pub fn FlashAlerts(messages: Vec<String>) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {messages
                .into_iter()
                .map(|message| view! { <FlashAlert message=message /> })
                .collect_view()}
        </div>
    }
}

/// A single auto-dismissing alert
#[component]
fn FlashAlert(#[prop(into)] message: String) -> impl IntoView {
    let (phase, set_phase) = create_signal(AlertPhase::Visible);

    Timeout::new(DISMISS_DELAY_MS, move || {
        set_phase.set(AlertPhase::Fading);
        Timeout::new(FADE_MS, move || {
            set_phase.set(AlertPhase::Removed);
        })
        .forget();
    })
    .forget();

    view! {
        {move || {
            (phase.get() != AlertPhase::Removed).then(|| {
                let opacity = if phase.get() == AlertPhase::Fading {
                    "opacity-0"
                } else {
                    "opacity-100"
                };

                view! {
                    <div class=format!(
                        "bg-blue-900/60 border border-blue-700 text-blue-100 px-4 py-3 \
                         rounded-lg transition-opacity duration-500 {}",
                        opacity
                    )>
                        {message.clone()}
                    </div>
                }
            })
        }}
    }
}

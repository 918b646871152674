//! Summary Card Component
//!
//! Dashboard stat cards with a staggered entrance transition.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::tooltip::Tooltip;

/// Per-card entrance delay step, in milliseconds
const ENTRANCE_STEP_MS: u32 = 100;

/// Summary stat card. Cards settle in one after another, offset by their
/// position on the page.
#[component]
pub fn SummaryCard(
    /// Card title
    label: &'static str,
    /// Formatted value to display
    #[prop(into)]
    value: Signal<String>,
    /// Position on the page, used for the entrance offset
    index: usize,
    /// Optional hover explanation
    #[prop(optional)]
    hint: Option<&'static str>,
) -> impl IntoView {
    let (settled, set_settled) = create_signal(false);

    Timeout::new(index as u32 * ENTRANCE_STEP_MS, move || {
        set_settled.set(true);
    })
    .forget();

    let card = view! {
        <div class=move || {
            let base = "bg-gray-800 rounded-lg p-4 border border-gray-700 \
                        transition-all duration-500";
            if settled.get() {
                format!("{} opacity-100 translate-y-0", base)
            } else {
                format!("{} opacity-0 translate-y-5", base)
            }
        }>
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
        </div>
    };

    match hint {
        Some(hint) => view! { <Tooltip text=hint>{card}</Tooltip> }.into_view(),
        None => card.into_view(),
    }
}

//! Delete Confirmation
//!
//! Interactive confirmation gate on destructive navigation.

use leptos::*;

const CONFIRM_PROMPT: &str = "Are you sure you want to delete this item?";

/// Anchor to a delete route. Navigation proceeds only after the user
/// confirms; declining cancels it entirely.
#[component]
pub fn DeleteLink(
    /// Target delete URL
    #[prop(into)]
    href: String,
    #[prop(default = "Delete")]
    label: &'static str,
) -> impl IntoView {
    let on_click = move |ev: web_sys::MouseEvent| {
        let confirmed = web_sys::window()
            .map(|window| window.confirm_with_message(CONFIRM_PROMPT).unwrap_or(false))
            .unwrap_or(false);

        if !confirmed {
            ev.prevent_default();
        }
    };

    view! {
        <a
            href=href
            rel="external"
            on:click=on_click
            class="text-red-400 hover:text-red-300 text-sm font-medium transition-colors"
        >
            {label}
        </a>
    }
}

//! Tooltip Component
//!
//! Hover label wrapper, bound once per wrapped element.

use leptos::*;

/// Wrap children with a hover tooltip
#[component]
pub fn Tooltip(
    /// Label shown while hovered
    #[prop(into)]
    text: String,
    children: Children,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    view! {
        <div
            class="relative"
            on:mouseenter=move |_| set_visible.set(true)
            on:mouseleave=move |_| set_visible.set(false)
        >
            {children()}
            {move || {
                visible.get().then(|| view! {
                    <span class="absolute bottom-full left-1/2 -translate-x-1/2 mb-2 px-3 py-1
                                 bg-gray-700 text-white text-xs rounded-lg whitespace-nowrap
                                 shadow-lg z-10">
                        {text.clone()}
                    </span>
                })
            }}
        </div>
    }
}

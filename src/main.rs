//! FinTrack Dashboard
//!
//! Personal finance dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Category breakdown and monthly trend charts
//! - Custom date range totals
//! - Expense entry with dependent subcategory selection
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The hosting page embeds dashboard data as a JSON block and
//! the app talks to the expense-tracker REST API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Server-embedded page data, read once before mount
    let bootstrap = state::global::read_bootstrap();

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App bootstrap=bootstrap.clone() /> });
}

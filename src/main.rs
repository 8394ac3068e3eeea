//! RateTrend Dashboard
//!
//! Weekly interest-rate chart page built with Leptos (WASM).
//!
//! This is a client-side rendered (CSR) application that compiles to
//! WebAssembly and mounts directly to the document body; the chart data is
//! embedded in the app shell.

use leptos::*;

use ratetrend_ui::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <App /> });
}

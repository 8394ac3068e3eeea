//! App Root Component
//!
//! Page shell hosting the rate chart with its sample dataset.

use leptos::*;

use crate::chart::RateRecord;
use crate::components::RateLineChart;

/// Weekly rate records shown on the landing page, in the wire format the
/// chart accepts from any caller
const SAMPLE_RATES: &str = r#"[
    { "month": "1", "weekOfMonth": "1", "avgInterestRate": "3.77" },
    { "month": "1", "weekOfMonth": "2", "avgInterestRate": "3.59" },
    { "month": "1", "weekOfMonth": "3", "avgInterestRate": "3.59" },
    { "month": "1", "weekOfMonth": "4", "avgInterestRate": "4.26" },
    { "month": "1", "weekOfMonth": "5", "avgInterestRate": "5.54" },
    { "month": "2", "weekOfMonth": "1", "avgInterestRate": "4.37" },
    { "month": "2", "weekOfMonth": "2", "avgInterestRate": "4.21" },
    { "month": "2", "weekOfMonth": "3", "avgInterestRate": "4.55" }
]"#;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let records: Vec<RateRecord> =
        serde_json::from_str(SAMPLE_RATES).expect("sample rates are valid JSON");
    let (data, _set_data) = create_signal(records);

    view! {
        <div class="min-h-screen bg-gray-100 text-gray-900 flex flex-col">
            // Page header
            <header class="bg-white border-b border-gray-200 py-4 px-6">
                <h1 class="text-2xl font-bold">"주간 평균 금리"</h1>
                <p class="text-gray-500 text-sm mt-1">
                    "Weekly average interest rate by month"
                </p>
            </header>

            // Centered chart card, fixed 600px like the source layout
            <main class="flex-1 flex justify-center py-12">
                <section class="bg-white rounded-xl p-6 shadow" style="width: 600px;">
                    <RateLineChart data=data />
                </section>
            </main>
        </div>
    }
}

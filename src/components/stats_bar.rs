use leptos::prelude::*;

use crate::state::dashboard::DashboardStore;

/// Aggregate stats over the authoritative collection, plus the size of the
/// current view. Filtering never changes the aggregates.
#[component]
pub fn StatsBar(store: RwSignal<DashboardStore>) -> impl IntoView {
    view! {
        <div class="stats-bar">
            <div class="stat-card">
                <span class="stat-value">{move || store.with(|s| s.total())}</span>
                <span class="stat-label">"Resumes"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || store.with(|s| s.displayed().len())}</span>
                <span class="stat-label">"Showing"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || store.with(|s| s.distinct_cities())}</span>
                <span class="stat-label">"Cities"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || store.with(|s| s.distinct_skills())}</span>
                <span class="stat-label">"Skills"</span>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::components::progress_chart::ProgressChart;
use crate::state::use_app;

#[component]
pub fn ProgressPage() -> impl IntoView {
    let profile = use_app().profile;
    let logs = Signal::derive(move || {
        profile.with(|p| p.as_ref().map(|p| p.logs().to_vec()).unwrap_or_default())
    });

    view! {
        <Show
            when=move || logs.with(|l| !l.is_empty())
            fallback=|| view! {
                <div class="page page-centered empty-state">
                    <h2>"No Progress Data Yet"</h2>
                    <p class="page-description">"Start logging your daily progress to see your charts here."</p>
                </div>
            }
        >
            <div class="page progress-page">
                <h1>"Your Progress"</h1>
                <ProgressChart logs=logs />
            </div>
        </Show>
    }
}

use leptos::prelude::*;
use sanamana_core::ProgressStats;

#[component]
pub fn StatsCard(stats: Signal<ProgressStats>) -> impl IntoView {
    let goal_text = move || match stats.get().goal_progress {
        Some(p) => format!("{:.0}%", p),
        None => "\u{2014}".to_string(),
    };
    // The bar cannot go negative even when weight went up.
    let goal_width = move || {
        let p = stats.get().goal_progress.unwrap_or(0.0).clamp(0.0, 100.0);
        format!("{:.1}%", p)
    };

    view! {
        <div class="card stats-card">
            <h3>"Your Progress"</h3>

            <div class="stats-grid">
                <div class="stat stat-weight">
                    <div class="stat-label">"Weight Loss"</div>
                    <div class="stat-value">
                        {move || format!("{:.1}", stats.get().weight_loss)}
                        <span class="stat-unit">"kg"</span>
                    </div>
                    <div class="stat-trend">{move || format!("{:.1}%", stats.get().weight_loss_percent)}</div>
                </div>
                <div class="stat stat-waist">
                    <div class="stat-label">"Waist Reduction"</div>
                    <div class="stat-value">
                        {move || format!("{:.1}", stats.get().waist_loss)}
                        <span class="stat-unit">"cm"</span>
                    </div>
                    <div class="stat-trend">{move || format!("{:.1}%", stats.get().waist_loss_percent)}</div>
                </div>
            </div>

            <div class="goal">
                <div class="goal-row">
                    <span>"Goal Progress"</span>
                    <span>{goal_text}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill fill-detox" style:width=goal_width></div>
                </div>
                <div class="progress-legend">
                    <span>{move || format!("{:.1} kg", stats.get().initial_weight)}</span>
                    <span>{move || format!("{:.1} kg", stats.get().goal_weight)}</span>
                </div>
            </div>
        </div>
    }
}

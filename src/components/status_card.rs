use leptos::prelude::*;
use sanamana_core::Phase;

#[component]
pub fn StatusCard(
    phase: Signal<Phase>,
    day_number: Signal<u32>,
    /// Percent of the phase elapsed, already capped at 100.
    progress: Signal<f64>,
    on_phase_change: Callback<()>,
) -> impl IntoView {
    let pill_class = move || match phase.get() {
        Phase::Detox => "progress-pill pill-detox",
        Phase::Stabilization => "progress-pill pill-stabilization",
    };

    view! {
        <div class="card status-card">
            <div class="card-header-row">
                <span class=pill_class>{move || phase.get().label()}</span>
                <button class="btn btn-link" on:click=move |_| on_phase_change.run(())>
                    "Switch Phase \u{2192}"
                </button>
            </div>

            <h3 class="day-title">{move || format!("Day {}", day_number.get())}</h3>

            <div class="progress-track">
                <div
                    class=move || format!("progress-fill fill-{}", phase_slug(phase.get()))
                    style:width=move || format!("{:.1}%", progress.get())
                ></div>
            </div>
            <div class="progress-legend">
                <span>"Day 1"</span>
                <span>{move || format!("Day {}", phase.get().duration_days())}</span>
            </div>
        </div>
    }
}

fn phase_slug(phase: Phase) -> &'static str {
    match phase {
        Phase::Detox => "detox",
        Phase::Stabilization => "stabilization",
    }
}

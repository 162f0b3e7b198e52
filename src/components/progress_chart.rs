use chrono::{Local, Utc};
use leptos::prelude::*;
use sanamana_core::chart::{ChartMetric, ChartSeries};
use sanamana_core::window::sorted_by_date;
use sanamana_core::{LogEntry, TimeWindow};

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 180.0;

#[component]
pub fn ProgressChart(logs: Signal<Vec<LogEntry>>) -> impl IntoView {
    let (window, set_window) = signal(TimeWindow::default());
    let (metric, set_metric) = signal(ChartMetric::default());

    let series = Memo::new(move |_| {
        let sorted = logs.with(|l| sorted_by_date(l));
        let shown = window.get().filter(&sorted, Utc::now());
        ChartSeries::build(metric.get(), shown, &Local)
    });

    let window_button = move |w: TimeWindow| {
        view! {
            <button
                class=move || if window.get() == w { "chip chip-active" } else { "chip" }
                on:click=move |_| set_window.set(w)
            >
                {w.label()}
            </button>
        }
    };
    let metric_tab = move |m: ChartMetric| {
        view! {
            <button
                class=move || if metric.get() == m { "tab tab-active" } else { "tab" }
                on:click=move |_| set_metric.set(m)
            >
                {m.label()}
            </button>
        }
    };

    view! {
        <div class="card chart-card">
            <div class="card-header-row">
                <h2>"Progress Charts"</h2>
                <div class="chip-row">
                    {TimeWindow::ALL.into_iter().map(window_button).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="tab-row">
                {metric_tab(ChartMetric::Weight)}
                {metric_tab(ChartMetric::Waist)}
            </div>

            {move || {
                let s = series.get();
                if s.points.is_empty() {
                    return view! { <p class="chart-empty">"No entries in this range."</p> }.into_any();
                }
                let coords = s.polyline(WIDTH, HEIGHT);
                let line = coords
                    .iter()
                    .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ");
                let (lo, hi) = s.domain.unwrap_or_default();
                let stroke = match s.metric {
                    ChartMetric::Weight => "#9DC88D",
                    ChartMetric::Waist => "#E8A87C",
                };
                view! {
                    <svg
                        class="chart"
                        viewBox=format!("-40 -10 {} {}", WIDTH + 60.0, HEIGHT + 50.0)
                        role="img"
                    >
                        <text class="axis-label" x="-8" y="4" text-anchor="end">{format!("{:.0} {}", hi, s.metric.unit())}</text>
                        <text class="axis-label" x="-8" y=HEIGHT.to_string() text-anchor="end">{format!("{:.0}", lo)}</text>
                        <polyline fill="none" stroke=stroke stroke-width="2" points=line />
                        {coords
                            .iter()
                            .zip(s.points.iter())
                            .map(|((x, y), p)| {
                                view! {
                                    <circle cx=x.to_string() cy=y.to_string() r="3" fill=stroke></circle>
                                    <text
                                        class="axis-label"
                                        x=x.to_string()
                                        y=(HEIGHT + 20.0).to_string()
                                        text-anchor="middle"
                                    >
                                        {p.label.clone()}
                                    </text>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </svg>
                }
                .into_any()
            }}
        </div>
    }
}

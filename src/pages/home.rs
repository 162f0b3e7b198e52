use chrono::{Local, Utc};
use leptos::prelude::*;
use sanamana_core::actions::{log_reading, switch_phase};
use sanamana_core::{Phase, Reading, Upsert};
use tracing::warn;

use crate::components::logo::Logo;
use crate::components::quick_log_card::QuickLogCard;
use crate::components::stats_card::StatsCard;
use crate::components::status_card::StatusCard;
use crate::state::use_app;

#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app();
    let profile = app.profile;
    let limits = app.config.limits;
    let (status, set_status) = signal::<Option<(bool, String)>>(None);

    let greeting = move || {
        profile.with(|p| {
            p.as_ref()
                .map(|p| format!("Welcome back, {}", p.first_name()))
                .unwrap_or_default()
        })
    };
    let phase = Signal::derive(move || profile.with(|p| p.as_ref().map_or(Phase::Detox, |p| p.phase)));
    let day_number = Signal::derive(move || {
        profile.with(|p| p.as_ref().map_or(1, |p| p.day_number(Utc::now())))
    });
    let phase_progress = Signal::derive(move || {
        profile.with(|p| p.as_ref().map_or(0.0, |p| p.phase_progress(Utc::now())))
    });
    let stats = Signal::derive(move || {
        profile.with(|p| p.as_ref().map(|p| p.stats())).unwrap_or_default()
    });

    let on_phase_change = {
        let app = app.clone();
        Callback::new(move |()| match switch_phase(&app.records) {
            Ok(Some((updated, phase))) => {
                app.profile.set(Some(updated));
                set_status.set(Some((true, format!("Switched to {}", phase))));
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Phase switch failed: {}", e);
                set_status.set(Some((false, e.to_string())));
            }
        })
    };

    let on_log_submit = Callback::new(move |reading: Reading| {
        match log_reading(&app.records, reading, &app.config.limits, &Local::now()) {
            Ok(Some((updated, outcome))) => {
                app.profile.set(Some(updated));
                let message = match outcome {
                    Upsert::Replaced(_) => "Today's entry updated!",
                    Upsert::Appended => "Progress logged successfully!",
                };
                set_status.set(Some((true, message.to_string())));
            }
            Ok(None) => {}
            Err(e) => set_status.set(Some((false, e.to_string()))),
        }
    });

    view! {
        <Show
            when=move || profile.with(Option::is_some)
            fallback=|| view! { <div class="page page-centered"><Logo /></div> }
        >
            <div class="page home-page">
                <Logo class="logo-header" />
                <h2>{greeting}</h2>
                <p class="page-description">"Let's continue your cleanse journey"</p>

                <StatusCard
                    phase=phase
                    day_number=day_number
                    progress=phase_progress
                    on_phase_change=on_phase_change
                />
                <QuickLogCard
                    current_weight=profile.with_untracked(|p| p.as_ref().map_or(0.0, |p| p.current_weight))
                    current_waist=profile.with_untracked(|p| p.as_ref().map_or(0.0, |p| p.waist_measurement))
                    limits=limits
                    on_submit=on_log_submit
                />
                {move || status.get().map(|(ok, msg)| {
                    let class = if ok { "status-text status-saved" } else { "status-text status-error" };
                    view! { <span class=class>{msg}</span> }
                })}
                <StatsCard stats=stats />
            </div>
        </Show>
    }
}

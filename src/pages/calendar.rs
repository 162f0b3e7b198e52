use leptos::prelude::*;

use crate::components::calendar_view::CalendarView;
use crate::state::use_app;

#[component]
pub fn CalendarPage() -> impl IntoView {
    let profile = use_app().profile;
    let logs = Signal::derive(move || {
        profile.with(|p| p.as_ref().map(|p| p.logs().to_vec()).unwrap_or_default())
    });

    view! {
        <Show
            when=move || profile.with(Option::is_some)
            fallback=|| view! {
                <div class="page page-centered">
                    <p class="page-description">"Loading calendar data..."</p>
                </div>
            }
        >
            <div class="page calendar-page">
                <h1>"Progress Calendar"</h1>
                <CalendarView logs=logs />
            </div>
        </Show>
    }
}

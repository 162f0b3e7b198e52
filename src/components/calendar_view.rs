use chrono::Local;
use leptos::prelude::*;
use sanamana_core::calendar::{Month, MonthView};
use sanamana_core::LogEntry;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn CalendarView(logs: Signal<Vec<LogEntry>>) -> impl IntoView {
    let today = Local::now().date_naive();
    let (month, set_month) = signal(Month::containing(today));
    let (selected, set_selected) = signal::<Option<u32>>(None);

    let view_model = Memo::new(move |_| logs.with(|l| MonthView::build(month.get(), l, today, &Local)));

    let shift = move |forward: bool| {
        set_month.update(|m| *m = if forward { m.next() } else { m.previous() });
        set_selected.set(None);
    };

    view! {
        <div class="card calendar-card">
            <div class="calendar-nav">
                <button class="btn btn-icon" on:click=move |_| shift(false)>"\u{2039}"</button>
                <div class="calendar-title">{move || month.get().title()}</div>
                <button class="btn btn-icon" on:click=move |_| shift(true)>"\u{203A}"</button>
            </div>

            <div class="calendar-grid weekdays">
                {WEEKDAYS.iter().map(|d| view! { <div class="weekday">{*d}</div> }).collect::<Vec<_>>()}
            </div>

            <div class="calendar-grid">
                {move || {
                    let vm = view_model.get();
                    let blanks = (0..vm.leading_blanks)
                        .map(|_| view! { <div class="calendar-blank"></div> }.into_any());
                    let days = vm.days.into_iter().map(|d| {
                        let day = d.day;
                        let class = move || {
                            let mut c = String::from("calendar-day");
                            if d.is_today {
                                c.push_str(" today");
                            }
                            if selected.get() == Some(day) {
                                c.push_str(" selected");
                            }
                            if d.log.is_some() {
                                c.push_str(" has-log");
                            }
                            c
                        };
                        view! {
                            <div class=class on:click=move |_| set_selected.set(Some(day))>
                                <span>{day}</span>
                            </div>
                        }
                        .into_any()
                    });
                    blanks.chain(days).collect::<Vec<_>>()
                }}
            </div>

            {move || {
                let day = selected.get()?;
                let entry = view_model.with(|vm| vm.day(day).and_then(|d| d.log.clone()))?;
                let heading = entry.date.with_timezone(&Local).format("%B %-d, %Y").to_string();
                Some(view! {
                    <div class="calendar-detail">
                        <h3>{heading}</h3>
                        <div class="stats-grid">
                            <div>
                                <div class="stat-label">"Weight"</div>
                                <div class="stat-value">{format!("{} kg", entry.weight)}</div>
                            </div>
                            <div>
                                <div class="stat-label">"Waist"</div>
                                <div class="stat-value">{format!("{} cm", entry.waist)}</div>
                            </div>
                        </div>
                    </div>
                })
            }}
        </div>
    }
}

use leptos::prelude::*;
use sanamana_core::config::Limits;
use sanamana_core::Reading;

#[component]
pub fn QuickLogCard(
    current_weight: f64,
    current_waist: f64,
    limits: Limits,
    on_submit: Callback<Reading>,
) -> impl IntoView {
    let (weight, set_weight) = signal(current_weight);
    let (waist, set_waist) = signal(current_waist);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(Reading::new(weight.get_untracked(), waist.get_untracked()));
    };

    view! {
        <div class="card quick-log-card">
            <h3>"Log Today's Progress"</h3>
            <form on:submit=submit>
                <div class="form-group">
                    <label for="weight">"Weight (kg)"</label>
                    <input
                        id="weight"
                        type="number"
                        class="input"
                        required=true
                        min=limits.weight[0].to_string()
                        max=limits.weight[1].to_string()
                        step="0.1"
                        prop:value=move || weight.get().to_string()
                        on:input=move |ev| set_weight.set(event_target_value(&ev).parse().unwrap_or(0.0))
                    />
                </div>
                <div class="form-group">
                    <label for="waist">"Waist (cm)"</label>
                    <input
                        id="waist"
                        type="number"
                        class="input"
                        required=true
                        min=limits.waist[0].to_string()
                        max=limits.waist[1].to_string()
                        step="0.1"
                        prop:value=move || waist.get().to_string()
                        on:input=move |ev| set_waist.set(event_target_value(&ev).parse().unwrap_or(0.0))
                    />
                </div>
                <button type="submit" class="btn btn-primary">"Save Progress"</button>
            </form>
        </div>
    }
}

use chrono::Utc;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use sanamana_core::actions::complete_onboarding;
use sanamana_core::ProfileDetails;
use tracing::warn;

use crate::components::details_form::{DetailsForm, NumberField, PhasePicker, TextField};
use crate::components::logo::Logo;
use crate::state::use_app;

const STEPS: u8 = 3;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let limits = app.config.limits;

    let form = DetailsForm::new(ProfileDetails::default());
    let (step, set_step) = signal(1u8);
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match complete_onboarding(&app.records, form.details(), &app.config.limits, Utc::now()) {
            Ok(profile) => {
                app.profile.set(Some(profile));
                navigate("/", Default::default());
            }
            Err(e) => {
                warn!("Onboarding rejected: {}", e);
                set_error_message.set(Some(e.to_string()));
            }
        }
    };

    let back = move |_| set_step.update(|s| *s = s.saturating_sub(1).max(1));
    let next = move |_| set_step.update(|s| *s = (*s + 1).min(STEPS));

    let title = move || match step.get() {
        1 => "Personal Details",
        2 => "Body Measurements",
        _ => "Select Your Phase",
    };

    view! {
        <div class="page onboarding-page">
            <Logo />

            <div class="card onboarding-card">
                <div class="card-header-row">
                    <h2>{title}</h2>
                    <span class="step-counter">{move || format!("Step {}/{}", step.get(), STEPS)}</span>
                </div>

                <form on:submit=submit>
                    <Show when=move || step.get() == 1>
                        <TextField id="name" label="Full Name" value=form.name />
                        <NumberField id="age" label="Age" value=form.age range=[limits.age[0] as f64, limits.age[1] as f64] />
                        <NumberField id="height" label="Height (cm)" value=form.height range=limits.height />
                        <div class="button-row">
                            <button type="button" class="btn btn-primary btn-wide" on:click=next>"Continue"</button>
                        </div>
                    </Show>

                    <Show when=move || step.get() == 2>
                        <NumberField id="currentWeight" label="Current Weight (kg)" value=form.current_weight range=limits.weight step="0.1" />
                        <NumberField id="waistMeasurement" label="Waist Measurement (cm)" value=form.waist_measurement range=limits.waist step="0.1" />
                        <NumberField id="goalWeight" label="Goal Weight (kg)" value=form.goal_weight range=limits.goal_weight step="0.1" />
                        <div class="button-row">
                            <button type="button" class="btn btn-secondary" on:click=back>"Back"</button>
                            <button type="button" class="btn btn-primary" on:click=next>"Continue"</button>
                        </div>
                    </Show>

                    <Show when=move || step.get() == STEPS>
                        <p class="page-description">"Choose which phase of the Sanamana cleanse you're currently in:"</p>
                        <PhasePicker phase=form.phase describe=true />
                        <div class="button-row">
                            <button type="button" class="btn btn-secondary" on:click=back>"Back"</button>
                            <button type="submit" class="btn btn-primary">"Complete Setup"</button>
                        </div>
                    </Show>
                </form>

                <Show when=move || error_message.get().is_some()>
                    <span class="status-text status-error">{move || error_message.get().unwrap_or_default()}</span>
                </Show>
            </div>
        </div>
    }
}

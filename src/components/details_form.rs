//! Questionnaire fields shared by onboarding and the profile editor.

use leptos::prelude::*;
use sanamana_core::{Phase, ProfileDetails};

/// One signal per questionnaire field.
#[derive(Clone, Copy)]
pub struct DetailsForm {
    pub name: RwSignal<String>,
    pub age: RwSignal<f64>,
    pub height: RwSignal<f64>,
    pub current_weight: RwSignal<f64>,
    pub waist_measurement: RwSignal<f64>,
    pub goal_weight: RwSignal<f64>,
    pub phase: RwSignal<Phase>,
}

impl DetailsForm {
    pub fn new(details: ProfileDetails) -> Self {
        Self {
            name: RwSignal::new(details.name),
            age: RwSignal::new(details.age as f64),
            height: RwSignal::new(details.height),
            current_weight: RwSignal::new(details.current_weight),
            waist_measurement: RwSignal::new(details.waist_measurement),
            goal_weight: RwSignal::new(details.goal_weight),
            phase: RwSignal::new(details.phase),
        }
    }

    pub fn details(&self) -> ProfileDetails {
        ProfileDetails {
            name: self.name.get_untracked().trim().to_string(),
            age: self.age.get_untracked().round().max(0.0) as u32,
            height: self.height.get_untracked(),
            current_weight: self.current_weight.get_untracked(),
            waist_measurement: self.waist_measurement.get_untracked(),
            goal_weight: self.goal_weight.get_untracked(),
            phase: self.phase.get_untracked(),
        }
    }
}

/// Empty for zero so blank fields show their placeholder.
fn display_number(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type="text"
                class="input"
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn NumberField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<f64>,
    range: [f64; 2],
    #[prop(default = "1")] step: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type="number"
                class="input"
                required=true
                min=range[0].to_string()
                max=range[1].to_string()
                step=step
                prop:value=move || display_number(value.get())
                on:input=move |ev| {
                    value.set(event_target_value(&ev).parse().unwrap_or(0.0));
                }
            />
        </div>
    }
}

#[component]
pub fn PhasePicker(phase: RwSignal<Phase>, #[prop(optional)] describe: bool) -> impl IntoView {
    let option = move |choice: Phase, blurb: &'static str| {
        view! {
            <div
                class=move || if phase.get() == choice { "phase-option selected" } else { "phase-option" }
                on:click=move |_| phase.set(choice)
            >
                <span class="phase-radio"></span>
                <h3 class="phase-name">{choice.label()}</h3>
                {describe.then(|| view! { <p class="phase-blurb">{blurb}</p> })}
            </div>
        }
    };

    view! {
        <div class="phase-picker">
            {option(
                Phase::Detox,
                "The initial phase focusing on cleansing your liver with our signature shake.",
            )}
            {option(
                Phase::Stabilization,
                "The follow-up phase that consolidates your results and prepares you for long-term success.",
            )}
        </div>
    }
}

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use sanamana_core::actions::edit_profile;
use sanamana_core::session::sign_out;
use sanamana_core::Profile;
use tracing::{info, warn};

use crate::components::details_form::{DetailsForm, NumberField, PhasePicker, TextField};
use crate::state::use_app;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let profile = app.profile;

    let logout = {
        let app = app.clone();
        move |_| {
            match sign_out(&app.records) {
                Ok(next) => {
                    app.session.set(None);
                    info!("Logged out");
                    navigate(next.path(), Default::default());
                }
                Err(e) => warn!("Logout failed: {}", e),
            }
        }
    };

    view! {
        <div class="page profile-page">
            <div class="card-header-row">
                <h1>"Your Profile"</h1>
                <button class="btn btn-link btn-logout" on:click=logout>"Logout"</button>
            </div>

            {move || match profile.get() {
                Some(p) => view! { <ProfileForm profile=p /> }.into_any(),
                None => view! {
                    <p class="page-description">"Loading profile data..."</p>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileForm(profile: Profile) -> impl IntoView {
    let app = use_app();
    let limits = app.config.limits;
    let form = DetailsForm::new(profile.details());
    let (status, set_status) = signal::<Option<(bool, String)>>(None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match edit_profile(&app.records, form.details(), &app.config.limits) {
            Ok(Some(updated)) => {
                app.profile.set(Some(updated));
                set_status.set(Some((true, "Profile updated successfully!".to_string())));
            }
            Ok(None) => {}
            Err(e) => set_status.set(Some((false, e.to_string()))),
        }
    };

    view! {
        <div class="card profile-card">
            <h2>"Edit Profile"</h2>
            <form on:submit=submit>
                <TextField id="name" label="Full Name" value=form.name />
                <NumberField id="age" label="Age" value=form.age range=[limits.age[0] as f64, limits.age[1] as f64] />
                <NumberField id="height" label="Height (cm)" value=form.height range=limits.height />
                <NumberField id="currentWeight" label="Current Weight (kg)" value=form.current_weight range=limits.weight step="0.1" />
                <NumberField id="waistMeasurement" label="Waist Measurement (cm)" value=form.waist_measurement range=limits.waist step="0.1" />
                <NumberField id="goalWeight" label="Goal Weight (kg)" value=form.goal_weight range=limits.goal_weight step="0.1" />

                <div class="form-group">
                    <label>"Current Phase"</label>
                    <PhasePicker phase=form.phase />
                </div>

                <button type="submit" class="btn btn-primary btn-wide">"Save Changes"</button>
            </form>
            {move || status.get().map(|(ok, msg)| {
                let class = if ok { "status-text status-saved" } else { "status-text status-error" };
                view! { <span class=class>{msg}</span> }
            })}
        </div>
    }
}

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use sanamana_core::session::authenticate;
use sanamana_core::{AuthMode, Credentials, SanamanaError};
use tracing::error;

use crate::components::logo::Logo;
use crate::state::use_app;

/// Login and signup share one form; `mode` picks the wording and whether
/// the session is marked as a new user.
#[component]
pub fn AuthPage(mode: AuthMode) -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal::<Option<String>>(None);
    let (status, set_status) = signal::<Option<String>>(None);
    let min_password_len = app.config.auth.min_password_len.to_string();

    let submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let credentials = Credentials {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            if let Err(e) = credentials.validate(&app.config.auth) {
                set_error_message.set(Some(e.to_string()));
                return;
            }

            set_is_loading.set(true);
            set_error_message.set(None);

            let app = app.clone();
            let navigate = navigate.clone();
            let delay = Duration::from_millis(app.config.auth.mock_delay_ms);
            set_timeout(
                move || {
                    match authenticate(&app.records, &credentials, mode, &app.config.auth) {
                        Ok(next) => {
                            app.session.set(app.records.load_session().ok().flatten());
                            set_status.set(Some(mode.success_message().to_string()));
                            navigate(next.path(), Default::default());
                        }
                        Err(SanamanaError::Validation { field, reason }) => {
                            set_error_message.set(Some(format!("Invalid {}: {}", field, reason)));
                        }
                        Err(e) => {
                            error!("Auth error: {}", e);
                            set_error_message
                                .set(Some("Authentication failed. Please try again.".to_string()));
                        }
                    }
                    set_is_loading.set(false);
                },
                delay,
            );
        }
    };

    let other = mode.other();
    let switch_prompt = match mode {
        AuthMode::Login => "Don't have an account? ",
        AuthMode::Signup => "Already have an account? ",
    };

    view! {
        <div class="page auth-page">
            <Logo class="logo-large" />

            <div class="card auth-card">
                <h2>{mode.title()}</h2>

                <form on:submit=submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            class="input"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            class="input input-password"
                            required=true
                            minlength=min_password_len
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn btn-primary btn-wide" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Processing..." } else { mode.submit_label() }}
                    </button>
                </form>

                <Show when=move || error_message.get().is_some()>
                    <span class="status-text status-error">{move || error_message.get().unwrap_or_default()}</span>
                </Show>
                <Show when=move || status.get().is_some()>
                    <span class="status-text status-saved">{move || status.get().unwrap_or_default()}</span>
                </Show>

                <p class="auth-switch">
                    {switch_prompt}
                    <button
                        class="btn btn-link"
                        on:click=move |_| navigate(other.route().path(), Default::default())
                    >
                        {other.submit_label()}
                    </button>
                </p>
            </div>
        </div>
    }
}

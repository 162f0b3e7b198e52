//! Mock sign-in.
//!
//! No credential is verified anywhere. Signing in only records who is using
//! the app so the route guard can let them through.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::{Result, SanamanaError};
use crate::routes::AppRoute;
use crate::store::{KeyValueStore, Records};

/// The session marker stored under the session key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub is_new_user: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Your Account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Log In",
            AuthMode::Signup => "Sign Up",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Login successful!",
            AuthMode::Signup => "Account created!",
        }
    }

    /// The other form, for the "switch" link under the form.
    pub fn other(self) -> AuthMode {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn route(self) -> AppRoute {
        match self {
            AuthMode::Login => AppRoute::Login,
            AuthMode::Signup => AppRoute::Signup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self, auth: &AuthConfig) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(SanamanaError::Validation {
                field: "email",
                reason: "enter a valid email address".to_string(),
            });
        }
        if self.password.chars().count() < auth.min_password_len {
            return Err(SanamanaError::Validation {
                field: "password",
                reason: format!("must be at least {} characters", auth.min_password_len),
            });
        }
        Ok(())
    }
}

/// Record a session and pick where the user goes next.
///
/// Both login and signup land on onboarding when no profile is stored yet,
/// and on home when one is.
pub fn authenticate<S: KeyValueStore>(
    records: &Records<S>,
    credentials: &Credentials,
    mode: AuthMode,
    auth: &AuthConfig,
) -> Result<AppRoute> {
    credentials.validate(auth)?;

    let session = Session {
        email: credentials.email.trim().to_string(),
        is_new_user: mode == AuthMode::Signup,
    };
    records.save_session(&session).map_err(|e| {
        warn!("Could not persist session: {}", e);
        SanamanaError::Auth(e.to_string())
    })?;

    let destination = if records.has_profile()? {
        AppRoute::Home
    } else {
        AppRoute::Onboarding
    };
    info!("{:?} for {} -> {}", mode, session.email, destination.path());
    Ok(destination)
}

pub fn sign_out<S: KeyValueStore>(records: &Records<S>) -> Result<AppRoute> {
    records.clear_session()?;
    Ok(AppRoute::Login)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::model::{Phase, Profile, ProfileDetails};
    use crate::routes::Access;
    use crate::store::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn stored_profile() -> String {
        let details = ProfileDetails {
            name: "Sam Rivera".to_string(),
            age: 40,
            height: 180.0,
            current_weight: 90.0,
            waist_measurement: 100.0,
            goal_weight: 82.0,
            phase: Phase::Detox,
        };
        let profile = Profile::create(details, Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap());
        serde_json::to_string(&profile).unwrap()
    }

    #[test]
    fn test_credentials_validation() {
        let auth = default_config().auth;
        assert!(creds("sam@example.com", "secret").validate(&auth).is_ok());
        assert!(creds("", "secret").validate(&auth).is_err());
        assert!(creds("sam.example.com", "secret").validate(&auth).is_err());

        let err = creds("sam@example.com", "12345").validate(&auth).unwrap_err();
        assert!(err.to_string().contains("at least 6"), "{}", err);
    }

    #[test]
    fn test_signup_without_profile_goes_to_onboarding() {
        let config = default_config();
        let records = Records::new(MemoryStore::new(), config.storage);

        let to = authenticate(&records, &creds(" sam@example.com ", "secret"), AuthMode::Signup, &config.auth)
            .unwrap();

        assert_eq!(to, AppRoute::Onboarding);
        let session = records.load_session().unwrap().unwrap();
        assert_eq!(session.email, "sam@example.com");
        assert!(session.is_new_user);
    }

    #[test]
    fn test_login_with_profile_goes_home() {
        let config = default_config();
        let records = Records::new(MemoryStore::new(), config.storage.clone());
        records
            .store()
            .save(&config.storage.profile_key, &stored_profile())
            .unwrap();

        let to = authenticate(&records, &creds("sam@example.com", "secret"), AuthMode::Login, &config.auth)
            .unwrap();

        assert_eq!(to, AppRoute::Home);
        assert!(!records.load_session().unwrap().unwrap().is_new_user);
    }

    #[test]
    fn test_signup_with_existing_profile_goes_home() {
        let config = default_config();
        let records = Records::new(MemoryStore::new(), config.storage.clone());
        records
            .store()
            .save(&config.storage.profile_key, &stored_profile())
            .unwrap();

        let to = authenticate(&records, &creds("sam@example.com", "secret"), AuthMode::Signup, &config.auth)
            .unwrap();
        assert_eq!(to, AppRoute::Home);
    }

    #[test]
    fn test_login_with_malformed_profile_goes_to_onboarding() {
        let config = default_config();
        let records = Records::new(MemoryStore::new(), config.storage.clone());
        records
            .store()
            .save(&config.storage.profile_key, "{not json")
            .unwrap();

        let to = authenticate(&records, &creds("sam@example.com", "secret"), AuthMode::Login, &config.auth)
            .unwrap();

        assert_eq!(to, AppRoute::Onboarding);
        assert_eq!(AppRoute::Onboarding.guard(true, records.has_profile().unwrap()), Access::Allow);
    }

    #[test]
    fn test_invalid_credentials_write_nothing() {
        let config = default_config();
        let records = Records::new(MemoryStore::new(), config.storage);
        let result = authenticate(&records, &creds("sam", "secret"), AuthMode::Login, &config.auth);
        assert!(result.is_err());
        assert!(!records.has_session().unwrap());
    }

    #[test]
    fn test_sign_out_clears_session() {
        let config = default_config();
        let records = Records::new(MemoryStore::new(), config.storage);
        authenticate(&records, &creds("sam@example.com", "secret"), AuthMode::Login, &config.auth).unwrap();

        assert_eq!(sign_out(&records).unwrap(), AppRoute::Login);
        assert!(!records.has_session().unwrap());
    }

    #[test]
    fn test_auth_mode_switch() {
        assert_eq!(AuthMode::Login.other(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.other().route(), AppRoute::Login);
    }
}

use leptos::prelude::*;
use sanamana_core::{AppConfig, Profile, Records, Session};
use tracing::warn;

use crate::storage::BrowserStorage;

/// Shared app state: the persistence handle plus reactive copies of the
/// two stored records.
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub records: Records<BrowserStorage>,
    pub session: RwSignal<Option<Session>>,
    pub profile: RwSignal<Option<Profile>>,
}

impl AppContext {
    pub fn load(config: AppConfig) -> Self {
        let records = Records::new(BrowserStorage, config.storage.clone());

        // Unreadable records are treated as absent, matching the post-login
        // destination, so a bad profile leads back through onboarding.
        let session = records.load_session().unwrap_or_else(|e| {
            warn!("Ignoring stored session: {}", e);
            None
        });
        let profile = records.readable_profile().unwrap_or_else(|e| {
            warn!("Ignoring stored profile: {}", e);
            None
        });

        Self {
            config,
            records,
            session: RwSignal::new(session),
            profile: RwSignal::new(profile),
        }
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

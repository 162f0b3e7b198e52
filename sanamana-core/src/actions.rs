//! Profile writes triggered from the UI. Each validates, mutates and persists.

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::config::Limits;
use crate::error::Result;
use crate::model::{Phase, Profile, ProfileDetails, Reading};
use crate::store::{KeyValueStore, Records};
use crate::tracking::Upsert;

/// Create and store the profile at the end of onboarding.
pub fn complete_onboarding<S: KeyValueStore>(
    records: &Records<S>,
    details: ProfileDetails,
    limits: &Limits,
    now: DateTime<Utc>,
) -> Result<Profile> {
    details.validate(limits)?;
    let profile = Profile::create(details, now);
    records.save_profile(&profile)?;
    info!("Onboarding complete for {} in {}", profile.name, profile.phase);
    Ok(profile)
}

/// Upsert today's reading. `Ok(None)` when no profile exists yet.
pub fn log_reading<S: KeyValueStore, Tz: TimeZone>(
    records: &Records<S>,
    reading: Reading,
    limits: &Limits,
    now: &DateTime<Tz>,
) -> Result<Option<(Profile, Upsert)>> {
    reading.validate(limits)?;
    let result = records.update_profile(|profile| profile.record_reading(reading, now))?;
    if let Some((_, outcome)) = &result {
        info!("Logged reading {:.1} kg / {:.1} cm: {:?}", reading.weight, reading.waist, outcome);
    }
    Ok(result)
}

pub fn switch_phase<S: KeyValueStore>(records: &Records<S>) -> Result<Option<(Profile, Phase)>> {
    records.update_profile(|profile| profile.toggle_phase())
}

pub fn edit_profile<S: KeyValueStore>(
    records: &Records<S>,
    details: ProfileDetails,
    limits: &Limits,
) -> Result<Option<Profile>> {
    details.validate(limits)?;
    let result = records.update_profile(|profile| profile.apply_details(details))?;
    Ok(result.map(|(profile, ())| profile))
}

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Limits;
use crate::error::{Result, SanamanaError};

/// Program stage. Each phase has a fixed length used for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Detox,
    Stabilization,
}

impl Phase {
    pub fn duration_days(self) -> u32 {
        match self {
            Phase::Detox => 14,
            Phase::Stabilization => 21,
        }
    }

    pub fn toggled(self) -> Phase {
        match self {
            Phase::Detox => Phase::Stabilization,
            Phase::Stabilization => Phase::Detox,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Detox => "Detox Phase",
            Phase::Stabilization => "Stabilization Phase",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One day's recorded measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: DateTime<Utc>,
    pub weight: f64,
    pub waist: f64,
}

/// A weight/waist pair submitted from the quick-log form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub weight: f64,
    pub waist: f64,
}

impl Reading {
    pub fn new(weight: f64, waist: f64) -> Self {
        Self { weight, waist }
    }

    pub fn validate(&self, limits: &Limits) -> Result<()> {
        check_range("weight", self.weight, limits.weight)?;
        check_range("waist", self.waist, limits.waist)
    }
}

/// The questionnaire answers. Used both for onboarding and for profile edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    pub name: String,
    pub age: u32,
    pub height: f64,
    pub current_weight: f64,
    pub waist_measurement: f64,
    pub goal_weight: f64,
    pub phase: Phase,
}

impl ProfileDetails {
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SanamanaError::Validation {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        let [age_min, age_max] = limits.age;
        if !(age_min..=age_max).contains(&self.age) {
            return Err(SanamanaError::Validation {
                field: "age",
                reason: format!("{} is outside {}..={}", self.age, age_min, age_max),
            });
        }
        check_range("height", self.height, limits.height)?;
        check_range("current weight", self.current_weight, limits.weight)?;
        check_range("waist measurement", self.waist_measurement, limits.waist)?;
        check_range("goal weight", self.goal_weight, limits.goal_weight)
    }
}

impl Default for ProfileDetails {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 0,
            height: 0.0,
            current_weight: 0.0,
            waist_measurement: 0.0,
            goal_weight: 0.0,
            phase: Phase::Detox,
        }
    }
}

/// The single stored user record.
///
/// Field names serialize in camelCase so records written by earlier builds of
/// the app keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub height: f64,
    pub current_weight: f64,
    pub waist_measurement: f64,
    pub goal_weight: f64,
    pub phase: Phase,
    start_date: DateTime<Utc>,
    #[serde(default)]
    pub(crate) logs: Vec<LogEntry>,
}

impl Profile {
    /// Build the profile at the end of onboarding, seeding the first log
    /// entry from the onboarding measurements.
    pub fn create(details: ProfileDetails, now: DateTime<Utc>) -> Self {
        let first = LogEntry {
            date: now,
            weight: details.current_weight,
            waist: details.waist_measurement,
        };
        Self {
            name: details.name,
            age: details.age,
            height: details.height,
            current_weight: details.current_weight,
            waist_measurement: details.waist_measurement,
            goal_weight: details.goal_weight,
            phase: details.phase,
            start_date: now,
            logs: vec![first],
        }
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// First name for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn details(&self) -> ProfileDetails {
        ProfileDetails {
            name: self.name.clone(),
            age: self.age,
            height: self.height,
            current_weight: self.current_weight,
            waist_measurement: self.waist_measurement,
            goal_weight: self.goal_weight,
            phase: self.phase,
        }
    }

    /// Overwrite the editable fields. Start date and logs are untouched.
    pub fn apply_details(&mut self, details: ProfileDetails) {
        self.name = details.name;
        self.age = details.age;
        self.height = details.height;
        self.current_weight = details.current_weight;
        self.waist_measurement = details.waist_measurement;
        self.goal_weight = details.goal_weight;
        self.phase = details.phase;
    }

    pub fn toggle_phase(&mut self) -> Phase {
        self.phase = self.phase.toggled();
        self.phase
    }
}

fn check_range(field: &'static str, value: f64, [min, max]: [f64; 2]) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(SanamanaError::Validation {
            field,
            reason: format!("{} is outside {}..={}", value, min, max),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use chrono::TimeZone;

    fn sample_details() -> ProfileDetails {
        ProfileDetails {
            name: "Ana Maria Lopez".to_string(),
            age: 34,
            height: 168.0,
            current_weight: 80.0,
            waist_measurement: 92.0,
            goal_weight: 70.0,
            phase: Phase::Detox,
        }
    }

    #[test]
    fn test_phase_durations() {
        assert_eq!(Phase::Detox.duration_days(), 14);
        assert_eq!(Phase::Stabilization.duration_days(), 21);
        assert_eq!(Phase::Detox.toggled(), Phase::Stabilization);
        assert_eq!(Phase::Stabilization.toggled(), Phase::Detox);
    }

    #[test]
    fn test_create_seeds_first_log() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
        let profile = Profile::create(sample_details(), now);

        assert_eq!(profile.start_date(), now);
        assert_eq!(profile.logs().len(), 1);
        assert_eq!(profile.logs()[0].date, now);
        assert_eq!(profile.logs()[0].weight, 80.0);
        assert_eq!(profile.logs()[0].waist, 92.0);
        assert_eq!(profile.first_name(), "Ana");
    }

    #[test]
    fn test_apply_details_keeps_start_date_and_logs() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
        let mut profile = Profile::create(sample_details(), now);

        let mut edited = profile.details();
        edited.name = "Ana".to_string();
        edited.goal_weight = 68.0;
        edited.phase = Phase::Stabilization;
        profile.apply_details(edited);

        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.goal_weight, 68.0);
        assert_eq!(profile.phase, Phase::Stabilization);
        assert_eq!(profile.start_date(), now);
        assert_eq!(profile.logs().len(), 1);
    }

    #[test]
    fn test_toggle_phase() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
        let mut profile = Profile::create(sample_details(), now);
        assert_eq!(profile.toggle_phase(), Phase::Stabilization);
        assert_eq!(profile.toggle_phase(), Phase::Detox);
    }

    #[test]
    fn test_serialized_layout() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
        let profile = Profile::create(sample_details(), now);
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["currentWeight"], 80.0);
        assert_eq!(value["waistMeasurement"], 92.0);
        assert_eq!(value["goalWeight"], 70.0);
        assert_eq!(value["phase"], "detox");
        assert!(value["startDate"].as_str().unwrap().starts_with("2025-03-01T08:30:00"));
        assert_eq!(value["logs"][0]["weight"], 80.0);
    }

    #[test]
    fn test_reads_browser_written_record() {
        let json = r#"{
            "name": "Sam",
            "age": 40,
            "height": 180,
            "currentWeight": 95.5,
            "waistMeasurement": 101,
            "goalWeight": 85,
            "phase": "stabilization",
            "startDate": "2025-01-10T07:15:22.481Z",
            "logs": [
                { "date": "2025-01-10T07:15:22.481Z", "weight": 97, "waist": 103 },
                { "date": "2025-01-11T06:02:10.000Z", "weight": 95.5, "waist": 101 }
            ]
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.phase, Phase::Stabilization);
        assert_eq!(profile.logs().len(), 2);
        assert_eq!(profile.logs()[1].weight, 95.5);
        assert_eq!(
            profile.start_date(),
            Utc.with_ymd_and_hms(2025, 1, 10, 7, 15, 22).unwrap()
                + chrono::Duration::milliseconds(481)
        );
    }

    #[test]
    fn test_validate_accepts_sample() {
        let limits = default_config().limits;
        assert!(sample_details().validate(&limits).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let limits = default_config().limits;

        let mut young = sample_details();
        young.age = 17;
        let err = young.validate(&limits).unwrap_err();
        assert!(err.to_string().contains("age"), "{}", err);

        let mut tall = sample_details();
        tall.height = 251.0;
        assert!(tall.validate(&limits).is_err());

        let mut unnamed = sample_details();
        unnamed.name = "   ".to_string();
        assert!(unnamed.validate(&limits).is_err());

        let mut goal = sample_details();
        goal.goal_weight = f64::NAN;
        assert!(goal.validate(&limits).is_err());
    }

    #[test]
    fn test_reading_validate() {
        let limits = default_config().limits;
        assert!(Reading::new(75.0, 88.0).validate(&limits).is_ok());
        assert!(Reading::new(29.9, 88.0).validate(&limits).is_err());
        assert!(Reading::new(75.0, 200.1).validate(&limits).is_err());
    }
}

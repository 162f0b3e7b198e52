//! Daily logging and program-day arithmetic.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{LogEntry, Profile, Reading};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// What a reading did to the log sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// An entry already existed for that calendar day and was overwritten.
    Replaced(usize),
    Appended,
}

impl Profile {
    /// Record a reading for the calendar day of `now`.
    ///
    /// Days are compared in `now`'s time zone, so an entry logged late in the
    /// evening is not confused with the next morning's after a UTC rollover.
    /// The profile's current weight and waist follow the reading.
    pub fn record_reading<Tz: TimeZone>(&mut self, reading: Reading, now: &DateTime<Tz>) -> Upsert {
        let today = now.date_naive();
        let tz = now.timezone();
        let entry = LogEntry {
            date: now.with_timezone(&Utc),
            weight: reading.weight,
            waist: reading.waist,
        };

        let existing = self
            .logs
            .iter()
            .position(|log| log.date.with_timezone(&tz).date_naive() == today);

        let outcome = match existing {
            Some(index) => {
                self.logs[index] = entry;
                Upsert::Replaced(index)
            }
            None => {
                self.logs.push(entry);
                Upsert::Appended
            }
        };

        self.current_weight = reading.weight;
        self.waist_measurement = reading.waist;
        outcome
    }

    /// Program day, counting the start day as day 1.
    pub fn day_number(&self, now: DateTime<Utc>) -> u32 {
        day_number(self.start_date(), now)
    }

    /// Percentage of the current phase elapsed, capped at 100.
    pub fn phase_progress(&self, now: DateTime<Utc>) -> f64 {
        let duration = self.phase.duration_days() as f64;
        (self.day_number(now) as f64 / duration * 100.0).min(100.0)
    }
}

/// Ceiling of the whole days between `start` and `now`, never below 1.
pub fn day_number(start: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let elapsed = (now - start).num_milliseconds().abs();
    let days = (elapsed + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Phase, ProfileDetails};
    use chrono::{Duration, FixedOffset};

    fn profile_started(start: DateTime<Utc>) -> Profile {
        Profile::create(
            ProfileDetails {
                name: "Sam".to_string(),
                age: 40,
                height: 180.0,
                current_weight: 80.0,
                waist_measurement: 95.0,
                goal_weight: 70.0,
                phase: Phase::Detox,
            },
            start,
        )
    }

    #[test]
    fn test_same_day_reading_replaces() {
        let start = Utc.with_ymd_and_hms(2025, 4, 2, 7, 0, 0).unwrap();
        let mut profile = profile_started(start);

        let later = start + Duration::hours(5);
        let outcome = profile.record_reading(Reading::new(79.4, 94.0), &later);

        assert_eq!(outcome, Upsert::Replaced(0));
        assert_eq!(profile.logs().len(), 1);
        assert_eq!(profile.logs()[0].weight, 79.4);
        assert_eq!(profile.logs()[0].date, later);
        assert_eq!(profile.current_weight, 79.4);
        assert_eq!(profile.waist_measurement, 94.0);
    }

    #[test]
    fn test_new_day_reading_appends() {
        let start = Utc.with_ymd_and_hms(2025, 4, 2, 7, 0, 0).unwrap();
        let mut profile = profile_started(start);

        let next_day = start + Duration::days(1);
        let outcome = profile.record_reading(Reading::new(79.0, 94.5), &next_day);

        assert_eq!(outcome, Upsert::Appended);
        assert_eq!(profile.logs().len(), 2);
        assert_eq!(profile.logs()[1].weight, 79.0);
    }

    #[test]
    fn test_two_submissions_same_day_keep_latest() {
        let start = Utc.with_ymd_and_hms(2025, 4, 2, 7, 0, 0).unwrap();
        let mut profile = profile_started(start);
        let day_two = start + Duration::days(1);

        profile.record_reading(Reading::new(79.8, 94.0), &day_two);
        profile.record_reading(Reading::new(79.1, 93.5), &(day_two + Duration::hours(3)));

        assert_eq!(profile.logs().len(), 2);
        assert_eq!(profile.logs()[1].weight, 79.1);
        assert_eq!(profile.logs()[1].waist, 93.5);
    }

    #[test]
    fn test_day_boundary_uses_local_calendar() {
        // 23:30 at UTC-5 is already the next UTC day.
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let evening = offset.with_ymd_and_hms(2025, 4, 2, 23, 30, 0).unwrap();
        let start = offset
            .with_ymd_and_hms(2025, 4, 2, 8, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let mut profile = profile_started(start);

        let outcome = profile.record_reading(Reading::new(79.5, 94.0), &evening);
        assert_eq!(outcome, Upsert::Replaced(0));

        let next_morning = offset.with_ymd_and_hms(2025, 4, 3, 0, 30, 0).unwrap();
        let outcome = profile.record_reading(Reading::new(79.3, 94.0), &next_morning);
        assert_eq!(outcome, Upsert::Appended);
        assert_eq!(profile.logs().len(), 2);
    }

    #[test]
    fn test_day_number_minimum_one() {
        let start = Utc.with_ymd_and_hms(2025, 4, 2, 7, 0, 0).unwrap();
        assert_eq!(day_number(start, start), 1);
        assert_eq!(day_number(start, start + Duration::minutes(1)), 1);
        assert_eq!(day_number(start, start + Duration::days(1)), 1);
        assert_eq!(day_number(start, start + Duration::days(1) + Duration::seconds(1)), 2);
        assert_eq!(day_number(start, start + Duration::days(30)), 30);
    }

    #[test]
    fn test_day_number_with_start_in_future() {
        let start = Utc.with_ymd_and_hms(2025, 4, 10, 7, 0, 0).unwrap();
        let now = start - Duration::hours(36);
        assert_eq!(day_number(start, now), 2);
    }

    #[test]
    fn test_detox_day_one_progress() {
        let start = Utc.with_ymd_and_hms(2025, 4, 2, 7, 0, 0).unwrap();
        let profile = profile_started(start);
        let progress = profile.phase_progress(start + Duration::days(1));
        assert!((progress - 100.0 / 14.0).abs() < 1e-9);
        assert_eq!(progress.round(), 7.0);
    }

    #[test]
    fn test_phase_progress_caps_at_hundred() {
        let start = Utc.with_ymd_and_hms(2025, 4, 2, 7, 0, 0).unwrap();
        let mut profile = profile_started(start);
        assert_eq!(profile.phase_progress(start + Duration::days(20)), 100.0);

        profile.toggle_phase();
        let progress = profile.phase_progress(start + Duration::days(20));
        assert!((progress - 20.0 / 21.0 * 100.0).abs() < 1e-9);
    }
}

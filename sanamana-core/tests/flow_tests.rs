use chrono::{Duration, TimeZone, Utc};

use sanamana_core::actions::{complete_onboarding, edit_profile, log_reading, switch_phase};
use sanamana_core::calendar::{Month, MonthView};
use sanamana_core::chart::{ChartMetric, ChartSeries};
use sanamana_core::session::{authenticate, sign_out};
use sanamana_core::window::sorted_by_date;
use sanamana_core::*;

fn details() -> ProfileDetails {
    ProfileDetails {
        name: "Jordan Lee".to_string(),
        age: 45,
        height: 175.0,
        current_weight: 80.0,
        waist_measurement: 98.0,
        goal_weight: 70.0,
        phase: Phase::Detox,
    }
}

fn credentials() -> Credentials {
    Credentials {
        email: "jordan@example.com".to_string(),
        password: "hunter22".to_string(),
    }
}

#[test]
fn test_signup_onboard_and_track() {
    let config = default_config();
    let records = Records::new(MemoryStore::new(), config.storage.clone());
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 7, 30, 0).unwrap();

    // Fresh browser: the guard sends everything protected to login.
    assert_eq!(
        AppRoute::Progress.guard(records.has_session().unwrap(), false),
        Access::Redirect(AppRoute::Login)
    );

    let next = authenticate(&records, &credentials(), AuthMode::Signup, &config.auth).unwrap();
    assert_eq!(next, AppRoute::Onboarding);
    assert_eq!(
        AppRoute::Login.guard(records.has_session().unwrap(), false),
        Access::Redirect(AppRoute::Home)
    );

    let profile = complete_onboarding(&records, details(), &config.limits, start).unwrap();
    assert_eq!(profile.logs().len(), 1);
    assert_eq!(
        AppRoute::Onboarding.guard(true, records.has_profile().unwrap()),
        Access::Redirect(AppRoute::Home)
    );

    // Five days of readings, two on the last day.
    for day in 1..=4 {
        let at = start + Duration::days(day);
        let weight = 80.0 - day as f64;
        log_reading(&records, Reading::new(weight, 98.0 - day as f64), &config.limits, &at).unwrap();
    }
    let last_day = start + Duration::days(5);
    log_reading(&records, Reading::new(75.8, 93.5), &config.limits, &last_day).unwrap();
    let (profile, outcome) = log_reading(
        &records,
        Reading::new(75.0, 93.0),
        &config.limits,
        &(last_day + Duration::hours(2)),
    )
    .unwrap()
    .unwrap();

    assert_eq!(outcome, Upsert::Replaced(5));
    assert_eq!(profile.logs().len(), 6);
    assert_eq!(profile.logs()[5].weight, 75.0);

    let stats = profile.stats();
    assert_eq!(stats.weight_loss, 5.0);
    assert_eq!(stats.goal_progress, Some(50.0));
    assert_eq!(stats.waist_loss, 5.0);

    let now = last_day + Duration::hours(2);
    assert_eq!(profile.day_number(now), 6);

    // Chart and calendar read the same stored logs.
    let stored = records.load_profile().unwrap().unwrap();
    let sorted = sorted_by_date(stored.logs());
    let week = TimeWindow::SevenDays.filter(&sorted, now);
    let series = ChartSeries::build(ChartMetric::Weight, week, &Utc);
    assert_eq!(series.points.len(), 6);
    assert_eq!(series.domain, Some((74.0, 81.0)));

    let view = MonthView::build(Month { year: 2025, month: 3 }, stored.logs(), now.date_naive(), &Utc);
    let logged: Vec<u32> = view.days.iter().filter(|d| d.log.is_some()).map(|d| d.day).collect();
    assert_eq!(logged, vec![1, 2, 3, 4, 5, 6]);
    assert!(view.day(6).unwrap().is_today);
}

#[test]
fn test_profile_edits_and_logout() {
    let config = default_config();
    let records = Records::new(MemoryStore::new(), config.storage.clone());
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 7, 30, 0).unwrap();

    authenticate(&records, &credentials(), AuthMode::Signup, &config.auth).unwrap();
    complete_onboarding(&records, details(), &config.limits, start).unwrap();

    let (_, phase) = switch_phase(&records).unwrap().unwrap();
    assert_eq!(phase, Phase::Stabilization);

    let mut edited = records.load_profile().unwrap().unwrap().details();
    edited.goal_weight = 80.0;
    let profile = edit_profile(&records, edited, &config.limits).unwrap().unwrap();
    assert_eq!(profile.phase, Phase::Stabilization);
    assert_eq!(profile.stats().goal_progress, None);
    assert_eq!(profile.start_date(), start);

    // Logging back in after logout goes straight home.
    assert_eq!(sign_out(&records).unwrap(), AppRoute::Login);
    assert!(!records.has_session().unwrap());
    let next = authenticate(&records, &credentials(), AuthMode::Login, &config.auth).unwrap();
    assert_eq!(next, AppRoute::Home);
}

#[test]
fn test_profile_key_is_configurable() {
    let doc = r#"
        [storage]
        session_key = "s"
        profile_key = "p"

        [auth]
        min_password_len = 8
        mock_delay_ms = 0

        [limits]
        age = [18, 100]
        height = [100.0, 250.0]
        weight = [30.0, 300.0]
        waist = [40.0, 200.0]
        goal_weight = [30.0, 200.0]

        [logging]
        filter = "debug"
    "#;
    let config = AppConfig::from_toml_str(doc).unwrap();
    let store = MemoryStore::new();
    let records = Records::new(store.clone(), config.storage.clone());

    // "hunter22" is exactly 8 characters.
    authenticate(&records, &credentials(), AuthMode::Login, &config.auth).unwrap();
    complete_onboarding(&records, details(), &config.limits, Utc::now()).unwrap();

    assert!(store.load("s").unwrap().is_some());
    assert!(store.load("p").unwrap().is_some());
    assert!(store.load("sanamana-user-data").unwrap().is_none());
}

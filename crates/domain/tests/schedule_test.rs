use chrono::NaiveTime;
use seer_domain::{is_now_in_schedule, Schedule};

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_daytime_window() {
    let schedule = Schedule::new("09:00", "17:00");

    assert!(schedule.contains(at(12, 0)));
    assert!(!schedule.contains(at(20, 0)));
    assert!(!schedule.contains(at(8, 59)));
    assert!(!schedule.contains(at(17, 1)));
    assert!(!schedule.wraps_midnight());
}

#[test]
fn test_window_endpoints_are_inclusive() {
    let schedule = Schedule::new("09:00", "17:00");

    assert!(schedule.contains(at(9, 0)));
    assert!(schedule.contains(at(17, 0)));
    assert!(schedule.contains(NaiveTime::from_hms_opt(17, 0, 59).unwrap()));
}

#[test]
fn test_window_wrapping_midnight() {
    let schedule = Schedule::new("22:00", "06:00");

    assert!(schedule.wraps_midnight());
    assert!(schedule.contains(at(23, 30)));
    assert!(schedule.contains(at(2, 0)));
    assert!(schedule.contains(at(0, 0)));
    assert!(schedule.contains(at(6, 0)));
    assert!(!schedule.contains(at(12, 0)));
    assert!(!schedule.contains(at(21, 59)));
}

#[test]
fn test_all_day_window_always_contains() {
    let schedule = Schedule::all_day();

    for hour in 0..24 {
        assert!(schedule.contains(at(hour, 0)));
    }
    assert!(schedule.contains(NaiveTime::from_hms_opt(23, 59, 59).unwrap()));
}

#[test]
fn test_single_minute_window() {
    let schedule = Schedule::new("12:00", "12:00");

    assert!(schedule.contains(at(12, 0)));
    assert!(!schedule.contains(at(12, 1)));
    assert!(!schedule.contains(at(11, 59)));
}

#[test]
fn test_empty_endpoints_default_to_all_day() {
    let schedule = Schedule::new("", "");

    assert_eq!(schedule.start_minute(), 0);
    assert_eq!(schedule.end_minute(), 23 * 60 + 59);
    assert!(schedule.contains(at(3, 0)));
}

#[test]
fn test_malformed_endpoint_reads_as_midnight() {
    let schedule = Schedule::new("ab:cd", "01:00");

    assert_eq!(schedule.start_minute(), 0);
    assert!(schedule.contains(at(0, 30)));
    assert!(!schedule.contains(at(2, 0)));
}

#[test]
fn test_absent_schedule_is_always_in_window() {
    assert!(is_now_in_schedule(None, at(4, 0)));
    assert!(!is_now_in_schedule(
        Some(&Schedule::new("09:00", "17:00")),
        at(4, 0)
    ));
}

#[test]
fn test_with_defaults_fills_missing_parts() {
    let schedule = Schedule::with_defaults(Some("08:00"), None);
    assert_eq!(schedule, Schedule::new("08:00", "23:59"));

    let schedule = Schedule::with_defaults(Some("  "), Some("18:00"));
    assert_eq!(schedule, Schedule::new("00:00", "18:00"));
}

#[test]
fn test_parse_range_display_form() {
    assert_eq!(
        Schedule::parse_range("08:00 to 18:00"),
        Schedule::new("08:00", "18:00")
    );
    assert_eq!(Schedule::parse_range("08:00"), Schedule::new("08:00", "23:59"));
}

#[test]
fn test_parse_strict_rejects_invalid_times() {
    assert!(Schedule::parse_strict("25:00", "18:00").is_err());
    assert!(Schedule::parse_strict("08:00", "noon").is_err());
    assert_eq!(
        Schedule::parse_strict("", "").unwrap(),
        Schedule::all_day()
    );
    assert_eq!(
        Schedule::parse_strict("22:00", "06:00").unwrap(),
        Schedule::new("22:00", "06:00")
    );
}

#[test]
fn test_display() {
    assert_eq!(Schedule::new("09:00", "17:00").to_string(), "09:00 to 17:00");
    assert_eq!(Schedule::new("", "").to_string(), "All Day");
    assert_eq!(Schedule::new("09:00", "").to_string(), "09:00 to 23:59");
}

use activity_analytics_core::{format_duration, format_interval, mmp_landmark};

#[test]
fn duration_minutes_and_hours() {
    assert_eq!(format_duration(0.0, false), "00:00");
    assert_eq!(format_duration(65.9, false), "01:05");
    assert_eq!(format_duration(3599.0, false), "59:59");
    assert_eq!(format_duration(3600.0, false), "01:00:00");
    assert_eq!(format_duration(125.0, true), "00:02:05");
}

#[test]
fn duration_invalid_input() {
    assert_eq!(format_duration(-1.0, false), "00:00");
    assert_eq!(format_duration(f64::NAN, true), "00:00:00");
}

#[test]
fn interval_labels() {
    assert_eq!(format_interval(5), "5 sec");
    assert_eq!(format_interval(59), "59 sec");
    assert_eq!(format_interval(60), "1 min");
    assert_eq!(format_interval(90), "1.5 min");
    assert_eq!(format_interval(1800), "30 min");
}

#[test]
fn landmarks_only_on_key_durations() {
    assert_eq!(mmp_landmark(1200).map(|l| l.name), Some("Threshold"));
    assert_eq!(mmp_landmark(3600).map(|l| l.short), Some("60m"));
    assert!(mmp_landmark(90).is_none());
}

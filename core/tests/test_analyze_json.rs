use activity_analytics_core::{
    analyze_activity, analyze_activity_json, best_efforts_json, mmp_curve_json,
    power_distribution_json, ActivityRecord, DEFAULT_BIN_SIZE, DEFAULT_MMP_DURATIONS,
};
use serde_json::{json, Value};

fn records_json(n: usize, watts: f64) -> String {
    let records: Vec<_> = (0..n)
        .map(|i| json!({
            "record_id": i, "activity_id": 7, "timestamp": format!("2024-05-01T10:{:02}:{:02}Z", i / 60, i % 60),
            "power": watts, "heart_rate": 140.0, "altitude": 100.0
        }))
        .collect();
    serde_json::to_string(&records).unwrap()
}

#[test]
fn all_entry_points_return_empty_arrays_for_no_records() {
    assert_eq!(best_efforts_json("[]", Some(70.0)).unwrap(), "[]");
    assert_eq!(mmp_curve_json("[]", &DEFAULT_MMP_DURATIONS).unwrap(), "[]");
    assert_eq!(power_distribution_json("[]", DEFAULT_BIN_SIZE).unwrap(), "[]");

    let v: Value = serde_json::from_str(&analyze_activity_json(r#"{"records": []}"#).unwrap()).unwrap();
    assert_eq!(v["has_power_data"], false);
    assert_eq!(v["best_efforts"], json!([]));
    assert_eq!(v["mmp_curve"], json!([]));
    assert_eq!(v["power_distribution"], json!([]));
}

#[test]
fn best_efforts_json_shape() {
    let out = best_efforts_json(&records_json(30, 220.0), Some(80.0)).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v.as_array().unwrap().len(), 3, "5s, 15s, 30s");
    assert_eq!(v[2]["interval"], 30);
    assert_eq!(v[2]["power"], 220);
    assert_eq!(v[2]["wattsPerKg"], 2.75);
    assert_eq!(v[2]["avgHr"], 140);
}

#[test]
fn unknown_fields_and_nulls_are_tolerated() {
    let payload = r#"[
        {"power": null, "heart_rate": 120, "left_right_balance": 51},
        {"power": 300, "cadence": 90}
    ]"#;
    let out = mmp_curve_json(payload, &[1, 2]).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v, json!([{"duration": 1, "power": 300}, {"duration": 2, "power": 150}]));
}

#[test]
fn parse_error_names_path() {
    let err = power_distribution_json(r#"[{"power": 100}, {"altitude": "høyt"}]"#, 25).unwrap_err();
    assert!(err.to_string().contains("[1].altitude"), "{err}");
}

#[test]
fn analyze_payload_uses_aliases_and_defaults() {
    let payload = json!({
        "records": serde_json::from_str::<Value>(&records_json(120, 180.0)).unwrap(),
        "athleteWeight": 60.0,
        "binSize": 100,
        "intervals": [60, 120, 600]
    })
    .to_string();

    let v: Value = serde_json::from_str(&analyze_activity_json(&payload).unwrap()).unwrap();
    assert_eq!(v["has_power_data"], true);
    assert_eq!(v["best_efforts"][0]["wattsPerKg"], 3.0);
    assert_eq!(v["mmp_curve"], json!([{"duration": 60, "power": 180}, {"duration": 120, "power": 180}]));
    assert_eq!(v["power_distribution"], json!([{"range": "101-200", "time": 120}]));
}

#[test]
fn analyze_activity_matches_individual_calls() {
    let records: Vec<ActivityRecord> = (0..400)
        .map(|i| ActivityRecord::with_power(((i * 7) % 300) as f64))
        .collect();
    let a = analyze_activity(&records, None, 25, &DEFAULT_MMP_DURATIONS);

    assert!(a.has_power_data);
    assert_eq!(a.best_efforts, activity_analytics_core::compute_best_efforts(&records, None));
    assert_eq!(a.mmp_curve, activity_analytics_core::compute_mmp_curve(&records, &DEFAULT_MMP_DURATIONS));
    assert_eq!(a.power_distribution, activity_analytics_core::compute_power_distribution(&records, 25));
}

#[test]
fn power_distribution_json_handles_extreme_watts() {
    let out = power_distribution_json(r#"[{"power": 200}, {"power": 1e300}]"#, 25).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 2);
    assert_eq!(v[0], json!({"range": "176-200", "time": 1}));
}

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::types::{ActivityLap, ActivityRecord, ChartPoint, LapBounds};

/// Maks tidssteg (sek) som teller med i distanse; lengre hull regnes som pause.
pub const MAX_DISTANCE_GAP_S: f64 = 10.0;

/// Tolerant tidsstempel-parser: RFC 3339 først, så naiv ISO-8601 (antas UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}

/// Bygger graf-serien: tid fra start, akkumulert distanse (km) og fart i km/t.
///
/// Distanse summeres som `speed * dt` mot forrige record, kun når `0 < dt < 10` s.
/// Records uten lesbart tidsstempel får indeks som tid (1 Hz) og gir ingen distanse.
pub fn build_chart_series(records: &[ActivityRecord], start_time: &str) -> Vec<ChartPoint> {
    if records.is_empty() {
        return Vec::new();
    }

    let stamps: Vec<Option<DateTime<Utc>>> = records
        .iter()
        .map(|r| r.timestamp.as_deref().and_then(parse_timestamp))
        .collect();

    // Ugyldig starttid => første lesbare record
    let start = parse_timestamp(start_time).or_else(|| stamps.iter().flatten().next().copied());

    let mut cumulative_m = 0.0_f64;
    let mut out = Vec::with_capacity(records.len());

    for (i, r) in records.iter().enumerate() {
        let time = match (start, stamps[i]) {
            (Some(s), Some(t)) => seconds_between(s, t),
            _ => i as f64,
        };

        if i > 0 {
            if let (Some(v), Some(prev), Some(cur)) = (r.speed, stamps[i - 1], stamps[i]) {
                let dt = seconds_between(prev, cur);
                if v > 0.0 && dt > 0.0 && dt < MAX_DISTANCE_GAP_S {
                    cumulative_m += v * dt;
                }
            }
        }

        out.push(ChartPoint {
            time,
            distance: cumulative_m / 1000.0,
            power: r.power,
            heart_rate: r.heart_rate,
            cadence: r.cadence,
            altitude: r.altitude,
            speed: r.speed.filter(|v| *v > 0.0).map(|v| v * 3.6),
        });
    }

    out
}

/// Distansen til punktet med tid nærmest `time` (første vinner ved likhet).
fn closest_distance(series: &[ChartPoint], time: f64) -> f64 {
    let mut best = &series[0];
    for p in &series[1..] {
        if (p.time - time).abs() < (best.time - time).abs() {
            best = p;
        }
    }
    best.distance
}

/// Legger rundene etter hverandre (akkumulert varighet fra 0) og slår opp
/// start-/sluttdistanse i serien.
pub fn resolve_lap_bounds(laps: &[ActivityLap], series: &[ChartPoint]) -> Vec<LapBounds> {
    if laps.is_empty() || series.is_empty() {
        return Vec::new();
    }

    let mut cumulative = 0.0_f64;
    laps.iter()
        .map(|lap| {
            let start = cumulative;
            let end = start + lap.duration.unwrap_or(0.0);
            cumulative = end;
            LapBounds {
                lap_number: lap.lap_number,
                start,
                end,
                start_distance: closest_distance(series, start),
                end_distance: closest_distance(series, end),
            }
        })
        .collect()
}

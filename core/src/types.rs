use serde::{Deserialize, Serialize};

/// Én sample i aktivitetens tidsserie (speiler backend-skjemaet).
/// Alle målinger er valgfrie; indeks i sekvensen = antall sekunder fra start (1 Hz).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default)]
    pub record_id: Option<i64>,
    #[serde(default)]
    pub activity_id: Option<i64>,
    /// RFC 3339 eller naiv ISO-8601, tolkes tolerant i `series`
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub power: Option<f64>,      // watt
    #[serde(default)]
    pub heart_rate: Option<f64>, // bpm
    #[serde(default)]
    pub cadence: Option<f64>,    // rpm
    #[serde(default)]
    pub speed: Option<f64>,      // m/s
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,   // meter
}

impl ActivityRecord {
    /// Record med kun effekt satt; øvrige felt er tomme.
    pub fn with_power(power: f64) -> Self {
        Self { power: Some(power), ..Default::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityLap {
    #[serde(default)]
    pub lap_id: Option<i64>,
    #[serde(default)]
    pub activity_id: Option<i64>,
    #[serde(default)]
    pub lap_number: u32,
    #[serde(default)]
    pub duration: Option<f64>, // sek
    #[serde(default)]
    pub distance: Option<f64>, // meter
    #[serde(default)]
    pub average_power: Option<f64>,
    #[serde(default)]
    pub average_heart_rate: Option<f64>,
}

/// Beste snitteffekt for ett fast intervall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestEffort {
    pub interval: u32,
    pub power: u32,
    pub watts_per_kg: Option<f64>,
    pub avg_hr: u32,
    pub elevation_gain: u32,
    pub start_index: usize,
    pub end_index: usize, // inklusiv
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MmpPoint {
    pub duration: u32,
    pub power: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerDistributionBin {
    pub range: String,
    pub time: u32,
}

/// Ett punkt i graf-serien (tid/distanse-akse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: f64,     // sek fra start
    pub distance: f64, // km
    pub power: Option<f64>,
    pub heart_rate: Option<f64>,
    pub cadence: Option<f64>,
    pub altitude: Option<f64>,
    pub speed: Option<f64>, // km/t
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapBounds {
    pub lap_number: u32,
    pub start: f64,
    pub end: f64,
    pub start_distance: f64,
    pub end_distance: f64,
}

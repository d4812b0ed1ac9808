use serde::{Deserialize, Serialize};

use crate::best_efforts::compute_best_efforts;
use crate::distribution::{compute_power_distribution, DEFAULT_BIN_SIZE};
use crate::error::{from_json_str, Result};
use crate::metrics::has_power_data;
use crate::mmp::{compute_mmp_curve, DEFAULT_MMP_DURATIONS};
use crate::types::{ActivityRecord, BestEffort, MmpPoint, PowerDistributionBin};

/// Samlet input for én økt: records + valgfrie parametre.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub records: Vec<ActivityRecord>,
    #[serde(default, alias = "weight", alias = "athleteWeight")]
    pub athlete_weight: Option<f64>,
    #[serde(default, alias = "binSize")]
    pub bin_size: Option<u32>,
    #[serde(default, alias = "mmpDurations", alias = "intervals")]
    pub mmp_durations: Option<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityAnalysis {
    pub has_power_data: bool,
    pub best_efforts: Vec<BestEffort>,
    pub mmp_curve: Vec<MmpPoint>,
    pub power_distribution: Vec<PowerDistributionBin>,
}

/// Kjører alle tre analysene på samme records.
pub fn analyze_activity(
    records: &[ActivityRecord],
    athlete_weight: Option<f64>,
    bin_size: u32,
    mmp_durations: &[u32],
) -> ActivityAnalysis {
    ActivityAnalysis {
        has_power_data: has_power_data(records),
        best_efforts: compute_best_efforts(records, athlete_weight),
        mmp_curve: compute_mmp_curve(records, mmp_durations),
        power_distribution: compute_power_distribution(records, bin_size),
    }
}

pub fn best_efforts_json(records_json: &str, athlete_weight: Option<f64>) -> Result<String> {
    let records: Vec<ActivityRecord> = from_json_str(records_json, "records")?;
    Ok(serde_json::to_string(&compute_best_efforts(&records, athlete_weight))?)
}

pub fn mmp_curve_json(records_json: &str, durations: &[u32]) -> Result<String> {
    let records: Vec<ActivityRecord> = from_json_str(records_json, "records")?;
    Ok(serde_json::to_string(&compute_mmp_curve(&records, durations))?)
}

pub fn power_distribution_json(records_json: &str, bin_size: u32) -> Result<String> {
    let records: Vec<ActivityRecord> = from_json_str(records_json, "records")?;
    Ok(serde_json::to_string(&compute_power_distribution(&records, bin_size))?)
}

/// `{ records, athlete_weight?, bin_size?, mmp_durations? }` -> `ActivityAnalysis` som JSON.
pub fn analyze_activity_json(payload: &str) -> Result<String> {
    let req: AnalyzeRequest = from_json_str(payload, "AnalyzeRequest")?;
    let durations = req
        .mmp_durations
        .unwrap_or_else(|| DEFAULT_MMP_DURATIONS.to_vec());
    let out = analyze_activity(
        &req.records,
        req.athlete_weight,
        req.bin_size.unwrap_or(DEFAULT_BIN_SIZE),
        &durations,
    );
    Ok(serde_json::to_string(&out)?)
}

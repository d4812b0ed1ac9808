use std::path::Path;

use crate::analyze::ActivityAnalysis;
use crate::error::{from_json_str, Result};
use crate::formatters::{format_interval, mmp_landmark};
use crate::types::ActivityRecord;

/// Leser records fra `.csv` (header-rad) eller JSON-array (alt annet).
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ActivityRecord>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        let mut rdr = csv::Reader::from_path(path)?;
        let records = rdr.deserialize().collect::<std::result::Result<Vec<ActivityRecord>, _>>()?;
        Ok(records)
    } else {
        let contents = std::fs::read_to_string(path)?;
        from_json_str(&contents, "records")
    }
}

/// Tekstrapport for én økt.
pub fn render_report(analysis: &ActivityAnalysis) -> String {
    let mut out = String::new();

    if !analysis.has_power_data {
        out.push_str("No power data available for this activity.\n");
        return out;
    }

    out.push_str("--- Best Efforts ---\n");
    if analysis.best_efforts.is_empty() {
        out.push_str("Not enough power data to calculate best efforts.\n");
    }
    for e in &analysis.best_efforts {
        let wpk = e
            .watts_per_kg
            .map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"));
        out.push_str(&format!(
            "{:>8}  {:>4} W  {:>5} W/kg  {:>3} bpm  {:>4} m\n",
            format_interval(e.interval),
            e.power,
            wpk,
            e.avg_hr,
            e.elevation_gain
        ));
    }

    out.push_str("--- MMP Curve ---\n");
    for p in &analysis.mmp_curve {
        let label = mmp_landmark(p.duration).map(|l| format!("  ({} {})", l.short, l.name));
        out.push_str(&format!(
            "{:>8}  {:>4} W{}\n",
            format_interval(p.duration),
            p.power,
            label.unwrap_or_default()
        ));
    }

    out.push_str("--- Power Distribution ---\n");
    for b in &analysis.power_distribution {
        out.push_str(&format!("{:>9} W  {:>5} s\n", b.range, b.time));
    }

    out
}

pub fn print_analysis_report(analysis: &ActivityAnalysis) {
    print!("{}", render_report(analysis));
}

use log::debug;

use crate::metrics::{power_series, round_u32};
use crate::types::{ActivityRecord, MmpPoint};
use crate::window::best_window;

/// Standard varigheter (sek) for MMP-kurven i effektanalysen.
pub const DEFAULT_MMP_DURATIONS: [u32; 19] = [
    1, 5, 10, 15, 30, 60, 90, 120, 180, 240, 300, 360, 480, 600, 900, 1200, 1800, 2700, 3600,
];

/// Mean-maximal-power: beste snitteffekt per oppgitt varighet.
/// Rekkefølgen følger `durations`; varigheter som er 0 eller lengre enn økten utelates.
pub fn compute_mmp_curve(records: &[ActivityRecord], durations: &[u32]) -> Vec<MmpPoint> {
    if records.is_empty() {
        return Vec::new();
    }

    let power = power_series(records);

    durations
        .iter()
        .filter_map(|&duration| {
            let best = best_window(&power, duration as usize);
            if best.is_none() {
                debug!("mmp: hopper over {duration}s ({} records)", records.len());
            }
            best.map(|b| MmpPoint { duration, power: round_u32(b.avg) })
        })
        .collect()
}

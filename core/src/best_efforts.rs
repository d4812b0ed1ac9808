use log::debug;

use crate::metrics::{elevation_gain, mean_heart_rate, power_series, round_u32, watts_per_kg};
use crate::types::{ActivityRecord, BestEffort};
use crate::window::best_window;

/// Faste intervaller (sek) for beste-innsats-tabellen.
pub const BEST_EFFORT_INTERVALS: [u32; 12] =
    [5, 15, 30, 60, 120, 180, 300, 480, 600, 900, 1200, 1800];

/// Beste snitteffekt per fast intervall, med puls og stigning for vinnervinduet.
///
/// Intervaller lengre enn antall records hoppes over. Tom/for kort økt gir tom liste.
/// `athlete_weight_kg` brukes kun til W/kg; mangler den blir feltet `None`.
pub fn compute_best_efforts(
    records: &[ActivityRecord],
    athlete_weight_kg: Option<f64>,
) -> Vec<BestEffort> {
    if records.is_empty() {
        debug!("best_efforts: ingen records");
        return Vec::new();
    }

    let power = power_series(records);
    let mut out = Vec::with_capacity(BEST_EFFORT_INTERVALS.len());

    for interval in BEST_EFFORT_INTERVALS {
        let width = interval as usize;
        let Some(best) = best_window(&power, width) else {
            debug!("best_efforts: hopper over {interval}s ({} records)", records.len());
            continue;
        };

        let end = best.end(width);
        let window = &records[best.start..=end];

        out.push(BestEffort {
            interval,
            power: round_u32(best.avg),
            watts_per_kg: watts_per_kg(best.avg, athlete_weight_kg),
            avg_hr: round_u32(mean_heart_rate(window)),
            elevation_gain: round_u32(elevation_gain(window)),
            start_index: best.start,
            end_index: end,
        });
    }

    out
}

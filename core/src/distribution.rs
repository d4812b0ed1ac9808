use std::collections::BTreeMap;

use log::debug;

use crate::types::{ActivityRecord, PowerDistributionBin};

pub const DEFAULT_BIN_SIZE: u32 = 25;

/// Histogram over positive effektsampler i bøtter på `bin_size` watt.
///
/// Bøtte `i` dekker `(i*bin, (i+1)*bin]` og merkes `"{i*bin+1}-{(i+1)*bin}"`.
/// 0/manglende/negative watt telles ikke. Tomme bøtter utelates.
/// Ingen positiv effekt (eller `bin_size == 0`) gir tom liste.
pub fn compute_power_distribution(
    records: &[ActivityRecord],
    bin_size: u32,
) -> Vec<PowerDistributionBin> {
    if bin_size == 0 {
        debug!("power_distribution: bin_size=0, returnerer tomt");
        return Vec::new();
    }

    let bin = bin_size as f64;
    // Glissen telling: ingen allokering proporsjonal med maks watt
    let mut counts: BTreeMap<u64, u32> = BTreeMap::new();

    for p in records.iter().filter_map(|r| r.power) {
        if p > 0.0 {
            // (0, 1) havner i første bøtte
            let idx = ((p - 1.0) / bin).floor().max(0.0) as u64;
            *counts.entry(idx).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(i, time)| {
            let lo = i as u128 * bin_size as u128 + 1;
            let hi = (i as u128 + 1) * bin_size as u128;
            PowerDistributionBin { range: format!("{lo}-{hi}"), time }
        })
        .collect()
}

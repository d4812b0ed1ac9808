use crate::types::ActivityRecord;

// --- RoundTo trait (offentlig, brukt av best_efforts/formatters) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Avrund til nærmeste hele tall; negative/ikke-endelige verdier gir 0.
#[inline]
pub fn round_u32(x: f64) -> u32 {
    if x.is_finite() && x > 0.0 { x.round() as u32 } else { 0 }
}

/// Kraftserie der manglende watt erstattes med 0.
pub fn power_series(records: &[ActivityRecord]) -> Vec<f64> {
    records.iter().map(|r| r.power.unwrap_or(0.0)).collect()
}

/// Snittpuls over vinduet. Manglende puls teller som 0 bpm (trekker snittet ned
/// ved sensorutfall); nevneren er alltid vinduslengden.
pub fn mean_heart_rate(window: &[ActivityRecord]) -> f64 {
    if window.is_empty() { return 0.0; }
    let sum: f64 = window.iter().map(|r| r.heart_rate.unwrap_or(0.0)).sum();
    sum / window.len() as f64
}

/// Total stigning i vinduet: kun positive høydeendringer mellom nabosampler
/// der begge har høyde.
pub fn elevation_gain(window: &[ActivityRecord]) -> f64 {
    window
        .windows(2)
        .filter_map(|pair| match (pair[0].altitude, pair[1].altitude) {
            (Some(a0), Some(a1)) if a1 > a0 => Some(a1 - a0),
            _ => None,
        })
        .sum()
}

/// W/kg med 2 desimaler. `None` hvis vekt mangler eller ikke er positiv.
pub fn watts_per_kg(avg_power: f64, weight_kg: Option<f64>) -> Option<f64> {
    match weight_kg {
        Some(w) if w.is_finite() && w > 0.0 => Some((avg_power / w).round_to(2)),
        _ => None,
    }
}

/// Finnes det minst én sample med positiv effekt?
pub fn has_power_data(records: &[ActivityRecord]) -> bool {
    records.iter().any(|r| r.power.map_or(false, |p| p > 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt(a: Option<f64>) -> ActivityRecord {
        ActivityRecord { altitude: a, ..Default::default() }
    }

    #[test]
    fn round_to_two_decimals() {
        assert_eq!(3.14159_f64.round_to(2), 3.14);
        assert_eq!(2.5_f64.round_to(0), 3.0);
    }

    #[test]
    fn elevation_ignores_descents_and_gaps() {
        let w = vec![
            alt(Some(100.0)),
            alt(Some(103.0)),
            alt(Some(101.0)),
            alt(None),
            alt(Some(110.0)),
            alt(Some(112.5)),
        ];
        assert!((elevation_gain(&w) - 5.5).abs() < 1e-9);
    }

    #[test]
    fn missing_hr_counts_as_zero() {
        let w = vec![
            ActivityRecord { heart_rate: Some(150.0), ..Default::default() },
            ActivityRecord::default(),
        ];
        assert!((mean_heart_rate(&w) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn wpk_requires_positive_weight() {
        assert_eq!(watts_per_kg(300.0, None), None);
        assert_eq!(watts_per_kg(300.0, Some(0.0)), None);
        assert_eq!(watts_per_kg(300.0, Some(-70.0)), None);
        assert_eq!(watts_per_kg(300.0, Some(80.0)), Some(3.75));
    }

    #[test]
    fn with_power_sets_only_power() {
        let r = ActivityRecord::with_power(180.0);
        assert_eq!(r.power, Some(180.0));
        assert_eq!(r, ActivityRecord { power: Some(180.0), ..Default::default() });
    }
}

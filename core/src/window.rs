/// Vinneren av et glidende vindu: startindeks og snitt (ikke avrundet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestWindow {
    pub start: usize,
    pub avg: f64,
}

impl BestWindow {
    /// Siste indeks i vinduet (inklusiv).
    #[inline]
    pub fn end(&self, width: usize) -> usize {
        self.start + width - 1
    }
}

/// Høyeste snitt over et sammenhengende vindu med bredde `width`.
///
/// Rullende sum: O(n) uansett bredde. Beste vindu byttes kun ved streng
/// forbedring (`>`), så ved likhet vinner tidligste start.
/// `None` når `width == 0` eller serien er kortere enn vinduet.
pub fn best_window(values: &[f64], width: usize) -> Option<BestWindow> {
    if width == 0 || values.len() < width {
        return None;
    }

    let w = width as f64;
    let mut sum: f64 = values[..width].iter().sum();
    let mut best = BestWindow { start: 0, avg: sum / w };

    for i in 1..=values.len() - width {
        sum = sum - values[i - 1] + values[i + width - 1];
        let avg = sum / w;
        if avg > best.avg {
            best = BestWindow { start: i, avg };
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_late_block() {
        let v = [0.0, 0.0, 0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 100.0];
        let b = best_window(&v, 5).unwrap();
        assert_eq!(b.start, 5);
        assert_eq!(b.end(5), 9);
        assert!((b.avg - 100.0).abs() < 1e-9);
    }

    #[test]
    fn ties_keep_earliest_start() {
        let v = vec![50.0; 40];
        for width in [1, 5, 17, 40] {
            assert_eq!(best_window(&v, width).unwrap().start, 0);
        }
    }

    #[test]
    fn too_short_or_zero_width() {
        assert!(best_window(&[1.0, 2.0], 3).is_none());
        assert!(best_window(&[1.0, 2.0], 0).is_none());
        assert!(best_window(&[], 1).is_none());
    }

    #[test]
    fn full_width_is_plain_mean() {
        let v = [10.0, 20.0, 30.0];
        let b = best_window(&v, 3).unwrap();
        assert_eq!(b.start, 0);
        assert!((b.avg - 20.0).abs() < 1e-9);
    }
}

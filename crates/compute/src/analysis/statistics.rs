pub struct Statistics;

impl Statistics {
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let mut sum = 0.0;
        for &v in values {
            sum += v;
        }
        Some(sum / values.len() as f64)
    }

    pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
        let first = *values.first()?;
        let mut min = first;
        let mut max = first;
        for &v in values.iter().skip(1) {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }

    /// Min/max over strictly positive values only.
    ///
    /// Zeros and negatives are excluded so a mostly-empty column does not
    /// collapse the scale domain. Returns `None` if nothing is positive.
    pub fn positive_min_max(values: &[f64]) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for &v in values {
            if v <= 0.0 {
                continue;
            }
            range = Some(match range {
                None => (v, v),
                Some((min, max)) => (min.min(v), max.max(v)),
            });
        }
        range
    }

    /// Position of `v` within `[lo, hi]` as a unit fraction, clamped.
    ///
    /// Returns `None` for a degenerate interval (`hi <= lo`); the caller
    /// decides what a collapsed domain means.
    pub fn unit_position(v: f64, lo: f64, hi: f64) -> Option<f64> {
        if hi <= lo {
            return None;
        }
        Some(((v - lo) / (hi - lo)).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;

    #[test]
    fn mean_works() {
        let m = Statistics::mean(&[1.0, 2.0, 3.0]).unwrap();
        assert!((m - 2.0).abs() < 1e-9);
        assert_eq!(Statistics::mean(&[]), None);
    }

    #[test]
    fn positive_min_max_skips_zeros() {
        let got = Statistics::positive_min_max(&[0.0, 5.0, 0.0, 2.0, 9.0]);
        assert_eq!(got, Some((2.0, 9.0)));
        assert_eq!(Statistics::positive_min_max(&[0.0, 0.0]), None);
        assert_eq!(Statistics::positive_min_max(&[]), None);
    }

    #[test]
    fn unit_position_clamps_and_rejects_degenerate() {
        assert_eq!(Statistics::unit_position(5.0, 0.0, 10.0), Some(0.5));
        assert_eq!(Statistics::unit_position(-1.0, 0.0, 10.0), Some(0.0));
        assert_eq!(Statistics::unit_position(11.0, 0.0, 10.0), Some(1.0));
        assert_eq!(Statistics::unit_position(3.0, 7.0, 7.0), None);
    }
}

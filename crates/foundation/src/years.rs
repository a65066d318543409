/// The fixed years for which migration counts are sampled.
///
/// Ordering contract: ascending, and `SampleYear::index` is the position in
/// this array.
pub const SAMPLE_YEARS: [u16; 8] = [1990, 1995, 2000, 2005, 2010, 2015, 2020, 2024];

/// A year constrained to the sampled set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleYear(u16);

impl SampleYear {
    pub const EARLIEST: SampleYear = SampleYear(SAMPLE_YEARS[0]);
    pub const LATEST: SampleYear = SampleYear(SAMPLE_YEARS[SAMPLE_YEARS.len() - 1]);

    /// Returns `None` if `year` is not one of the sampled years.
    pub fn new(year: u16) -> Option<Self> {
        SAMPLE_YEARS.contains(&year).then_some(SampleYear(year))
    }

    /// Snaps an arbitrary year to the closest sampled year.
    ///
    /// Ties resolve toward the earlier year.
    pub fn nearest(year: u16) -> Self {
        let mut best = SAMPLE_YEARS[0];
        let mut best_dist = u16::MAX;
        for &candidate in &SAMPLE_YEARS {
            let dist = candidate.abs_diff(year);
            if dist < best_dist {
                best = candidate;
                best_dist = dist;
            }
        }
        SampleYear(best)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Position of this year within [`SAMPLE_YEARS`].
    pub fn index(self) -> usize {
        SAMPLE_YEARS
            .iter()
            .position(|&y| y == self.0)
            .unwrap_or(0)
    }

    /// Iterates all sampled years in ascending order.
    pub fn all() -> impl Iterator<Item = SampleYear> {
        SAMPLE_YEARS.iter().map(|&y| SampleYear(y))
    }
}

impl Default for SampleYear {
    fn default() -> Self {
        SampleYear::LATEST
    }
}

impl std::fmt::Display for SampleYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{SAMPLE_YEARS, SampleYear};

    #[test]
    fn new_accepts_only_sampled_years() {
        assert_eq!(SampleYear::new(2024), Some(SampleYear::LATEST));
        assert_eq!(SampleYear::new(2023), None);
        assert_eq!(SampleYear::new(0), None);
    }

    #[test]
    fn nearest_snaps_with_ties_toward_earlier() {
        assert_eq!(SampleYear::nearest(1991).get(), 1990);
        assert_eq!(SampleYear::nearest(1994).get(), 1995);
        // 2022 is equidistant from 2020 and 2024.
        assert_eq!(SampleYear::nearest(2022).get(), 2020);
        assert_eq!(SampleYear::nearest(3000).get(), 2024);
    }

    #[test]
    fn index_matches_position() {
        for (i, &y) in SAMPLE_YEARS.iter().enumerate() {
            assert_eq!(SampleYear::new(y).unwrap().index(), i);
        }
    }
}

use foundation::{DemographicFilter, Dimension, SAMPLE_YEARS, SampleYear};

/// The six Hofstede scores for one country, indexed by [`Dimension`].
///
/// Scores are 0-100; a score absent from the source data is 0 (the loader
/// contract maps unparseable numeric cells to 0).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CulturalProfile {
    values: [f64; 6],
}

impl CulturalProfile {
    pub fn new(values: [f64; 6]) -> Self {
        Self { values }
    }

    pub fn value(&self, dim: Dimension) -> f64 {
        self.values[dim.index()]
    }

    pub fn set(&mut self, dim: Dimension, value: f64) {
        self.values[dim.index()] = value;
    }

    pub fn values(&self) -> [f64; 6] {
        self.values
    }
}

/// Migration counts for one country across the sampled years, per
/// demographic filter. Missing samples are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MigrationSeries {
    all: [f64; SAMPLE_YEARS.len()],
    male: [f64; SAMPLE_YEARS.len()],
    female: [f64; SAMPLE_YEARS.len()],
}

impl MigrationSeries {
    pub fn get(&self, filter: DemographicFilter, year: SampleYear) -> f64 {
        self.slice(filter)[year.index()]
    }

    pub fn set(&mut self, filter: DemographicFilter, year: SampleYear, count: f64) {
        let idx = year.index();
        match filter {
            DemographicFilter::All => self.all[idx] = count,
            DemographicFilter::Male => self.male[idx] = count,
            DemographicFilter::Female => self.female[idx] = count,
        }
    }

    /// Counts in ascending [`SAMPLE_YEARS`] order.
    pub fn slice(&self, filter: DemographicFilter) -> &[f64; SAMPLE_YEARS.len()] {
        match filter {
            DemographicFilter::All => &self.all,
            DemographicFilter::Male => &self.male,
            DemographicFilter::Female => &self.female,
        }
    }
}

/// One row of the master dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryRecord {
    /// Unique within a dataset.
    pub name: String,
    pub region: String,
    pub continent: String,
    pub culture: CulturalProfile,
    pub migration: MigrationSeries,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn migration_count(&self, filter: DemographicFilter, year: SampleYear) -> f64 {
        self.migration.get(filter, year)
    }

    pub fn dimension(&self, dim: Dimension) -> f64 {
        self.culture.value(dim)
    }
}

#[cfg(test)]
mod tests {
    use super::{CountryRecord, MigrationSeries};
    use foundation::{DemographicFilter, Dimension, SampleYear};

    #[test]
    fn series_defaults_to_zero_per_filter() {
        let mut s = MigrationSeries::default();
        let y2020 = SampleYear::new(2020).unwrap();
        assert_eq!(s.get(DemographicFilter::All, y2020), 0.0);

        s.set(DemographicFilter::Male, y2020, 42.0);
        assert_eq!(s.get(DemographicFilter::Male, y2020), 42.0);
        assert_eq!(s.get(DemographicFilter::All, y2020), 0.0);
        assert_eq!(s.get(DemographicFilter::Female, y2020), 0.0);
    }

    #[test]
    fn record_reads_dimensions_through_profile() {
        let mut r = CountryRecord::new("Japan");
        r.culture.set(Dimension::PowerDistance, 54.0);
        assert_eq!(r.dimension(Dimension::PowerDistance), 54.0);
        assert_eq!(r.dimension(Dimension::Indulgence), 0.0);
    }
}

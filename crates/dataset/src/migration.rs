use std::collections::HashMap;

use foundation::{DemographicFilter, SAMPLE_YEARS, SampleYear};

use crate::collection::Dataset;
use crate::record::MigrationSeries;

/// Derived country-name → filter → year → count mapping.
///
/// Built once from a loaded [`Dataset`]; read-only afterwards. Lookups for
/// unknown countries yield 0, matching the loader's missing-sample rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationIndex {
    by_country: HashMap<String, MigrationSeries>,
}

impl MigrationIndex {
    pub fn build(dataset: &Dataset) -> Self {
        let mut by_country = HashMap::with_capacity(dataset.len());
        for record in dataset.iter() {
            by_country.insert(record.name.clone(), record.migration);
        }
        Self { by_country }
    }

    pub fn count(&self, country: &str, filter: DemographicFilter, year: SampleYear) -> f64 {
        self.by_country
            .get(country)
            .map(|s| s.get(filter, year))
            .unwrap_or(0.0)
    }

    /// Counts across all sampled years, ascending, or `None` for an
    /// unknown country.
    pub fn series(
        &self,
        country: &str,
        filter: DemographicFilter,
    ) -> Option<[f64; SAMPLE_YEARS.len()]> {
        self.by_country.get(country).map(|s| *s.slice(filter))
    }

    pub fn len(&self) -> usize {
        self.by_country.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_country.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::MigrationIndex;
    use crate::collection::Dataset;
    use crate::record::CountryRecord;
    use foundation::{DemographicFilter, SampleYear};

    #[test]
    fn indexes_every_country_once() {
        let mut japan = CountryRecord::new("Japan");
        let y = SampleYear::new(2024).unwrap();
        japan.migration.set(DemographicFilter::All, y, 100.0);
        japan.migration.set(DemographicFilter::Female, y, 45.0);

        let ds = Dataset::from_records(vec![japan, CountryRecord::new("Brazil")]);
        let index = MigrationIndex::build(&ds);

        assert_eq!(index.len(), 2);
        assert_eq!(index.count("Japan", DemographicFilter::All, y), 100.0);
        assert_eq!(index.count("Japan", DemographicFilter::Female, y), 45.0);
        assert_eq!(index.count("Brazil", DemographicFilter::All, y), 0.0);
        assert_eq!(index.count("Atlantis", DemographicFilter::All, y), 0.0);
    }

    #[test]
    fn series_is_none_for_unknown_country() {
        let ds = Dataset::from_records(vec![CountryRecord::new("Japan")]);
        let index = MigrationIndex::build(&ds);
        assert!(index.series("Japan", DemographicFilter::Male).is_some());
        assert!(index.series("Atlantis", DemographicFilter::Male).is_none());
    }
}

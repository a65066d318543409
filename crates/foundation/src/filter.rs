/// Demographic slice of the migration counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DemographicFilter {
    #[default]
    All,
    Male,
    Female,
}

impl DemographicFilter {
    pub const ALL_FILTERS: [DemographicFilter; 3] = [
        DemographicFilter::All,
        DemographicFilter::Male,
        DemographicFilter::Female,
    ];

    /// Unknown strings fall back to the total count.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => DemographicFilter::Male,
            "female" | "f" => DemographicFilter::Female,
            _ => DemographicFilter::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DemographicFilter::All => "all",
            DemographicFilter::Male => "male",
            DemographicFilter::Female => "female",
        }
    }

    /// Suffix appended to a year column header, e.g. `2024_male`.
    /// The total column has no suffix.
    pub fn column_suffix(self) -> Option<&'static str> {
        match self {
            DemographicFilter::All => None,
            DemographicFilter::Male => Some("male"),
            DemographicFilter::Female => Some("female"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DemographicFilter;

    #[test]
    fn from_str_round_trips_and_defaults() {
        for f in DemographicFilter::ALL_FILTERS {
            assert_eq!(DemographicFilter::from_str(f.as_str()), f);
        }
        assert_eq!(
            DemographicFilter::from_str(" FEMALE "),
            DemographicFilter::Female
        );
        assert_eq!(DemographicFilter::from_str("bogus"), DemographicFilter::All);
    }
}

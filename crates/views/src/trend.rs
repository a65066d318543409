use foundation::{Color, SAMPLE_YEARS};
use store::StoreUpdate;

use crate::symbology::series_color;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub country: String,
    pub color: Color,
    /// Counts in ascending [`SAMPLE_YEARS`] order for the current filter.
    pub values: [f64; SAMPLE_YEARS.len()],
}

/// Migration trend lines for up to two countries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSnapshot {
    pub series: Vec<TrendSeries>,
    /// Largest count across all series; 0 when the selection is empty or
    /// every sample is 0. Renderers should floor the axis max at 1 to
    /// keep the scale drawable.
    pub y_max: f64,
}

impl TrendSnapshot {
    pub fn years() -> [u16; SAMPLE_YEARS.len()] {
        SAMPLE_YEARS
    }

    /// Empty-selection placeholder state.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

pub struct TrendView;

impl TrendView {
    pub fn extract(update: &StoreUpdate<'_>) -> TrendSnapshot {
        let filter = update.selection.filter;
        let mut series = Vec::new();
        let mut y_max: f64 = 0.0;

        for (i, name) in update.selection.selected_names().into_iter().enumerate() {
            let Some(values) = update.migration.series(name, filter) else {
                continue;
            };
            for &v in &values {
                y_max = y_max.max(v);
            }
            series.push(TrendSeries {
                country: name.to_string(),
                color: series_color(i),
                values,
            });
        }

        TrendSnapshot { series, y_max }
    }
}

#[cfg(test)]
mod tests {
    use super::TrendView;
    use dataset::{CountryRecord, Dataset};
    use foundation::{DemographicFilter, SampleYear};
    use store::DashboardStore;

    fn store() -> DashboardStore {
        let mut japan = CountryRecord::new("Japan");
        let mut brazil = CountryRecord::new("Brazil");
        for (year, count) in [(1990u16, 20.0), (2024, 100.0)] {
            let y = SampleYear::new(year).unwrap();
            japan.migration.set(DemographicFilter::All, y, count);
            brazil.migration.set(DemographicFilter::All, y, count / 2.0);
            brazil.migration.set(DemographicFilter::Female, y, count / 4.0);
        }
        DashboardStore::new(Dataset::from_records(vec![japan, brazil]))
    }

    #[test]
    fn empty_selection_has_no_series() {
        let s = store();
        let snap = TrendView::extract(&s.update());
        assert!(snap.is_empty());
        assert_eq!(snap.y_max, 0.0);
    }

    #[test]
    fn series_follow_selection_and_share_a_y_domain() {
        let mut s = store();
        s.select_country("Japan");
        s.select_country("Brazil");
        let snap = TrendView::extract(&s.update());

        assert_eq!(snap.series.len(), 2);
        assert_eq!(snap.series[0].values[0], 20.0);
        assert_eq!(snap.series[1].values[7], 50.0);
        assert_eq!(snap.y_max, 100.0);
    }

    #[test]
    fn filter_selects_the_demographic_slice() {
        let mut s = store();
        s.select_country("Brazil");
        s.set_filter(DemographicFilter::Female);
        let snap = TrendView::extract(&s.update());

        assert_eq!(snap.series[0].values[7], 25.0);
        assert_eq!(snap.y_max, 25.0);
    }

    #[test]
    fn transitions_between_selections_without_clearing() {
        let mut s = store();
        s.select_country("Japan");
        let first = TrendView::extract(&s.update());
        assert_eq!(first.series[0].country, "Japan");

        s.clear_selection();
        s.select_country("Brazil");
        let second = TrendView::extract(&s.update());
        assert_eq!(second.series.len(), 1);
        assert_eq!(second.series[0].country, "Brazil");
    }
}

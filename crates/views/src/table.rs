use foundation::Dimension;
use store::StoreUpdate;

/// What a comparison row measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Migration count for the current year and filter.
    Migration,
    Dimension(Dimension),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub metric: Metric,
    pub label: String,
    pub description: Option<&'static str>,
    pub primary: Option<f64>,
    pub secondary: Option<f64>,
    /// `primary - secondary`, present only when both countries are set.
    pub delta: Option<f64>,
}

/// Side-by-side comparison of the selected countries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSnapshot {
    pub primary_header: Option<String>,
    pub secondary_header: Option<String>,
    pub rows: Vec<TableRow>,
}

impl TableSnapshot {
    /// Empty-selection placeholder state.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct TableView;

impl TableView {
    pub fn extract(update: &StoreUpdate<'_>) -> TableSnapshot {
        let selection = update.selection;
        let primary = selection
            .primary
            .as_deref()
            .and_then(|n| update.dataset.get(n));
        let secondary = selection
            .secondary
            .as_deref()
            .and_then(|n| update.dataset.get(n));

        if primary.is_none() && secondary.is_none() {
            return TableSnapshot::default();
        }

        let mut rows = Vec::with_capacity(1 + Dimension::ALL.len());

        let migration = |r: &dataset::CountryRecord| {
            r.migration_count(selection.filter, selection.year)
        };
        rows.push(row(
            Metric::Migration,
            format!("Migration ({})", selection.year),
            Some("Migrant count for the selected year and demographic filter"),
            primary.map(migration),
            secondary.map(migration),
        ));

        for dim in Dimension::ALL {
            rows.push(row(
                Metric::Dimension(dim),
                dim.display_name().to_string(),
                Some(dim.description()),
                primary.map(|r| r.dimension(dim)),
                secondary.map(|r| r.dimension(dim)),
            ));
        }

        TableSnapshot {
            primary_header: primary.map(|r| r.name.clone()),
            secondary_header: secondary.map(|r| r.name.clone()),
            rows,
        }
    }
}

fn row(
    metric: Metric,
    label: String,
    description: Option<&'static str>,
    primary: Option<f64>,
    secondary: Option<f64>,
) -> TableRow {
    let delta = match (primary, secondary) {
        (Some(a), Some(b)) => Some(a - b),
        _ => None,
    };
    TableRow {
        metric,
        label,
        description,
        primary,
        secondary,
        delta,
    }
}

#[cfg(test)]
mod tests {
    use super::{Metric, TableView};
    use dataset::{CountryRecord, Dataset};
    use foundation::{DemographicFilter, Dimension, SampleYear};
    use store::DashboardStore;

    fn store() -> DashboardStore {
        let y = SampleYear::new(2024).unwrap();
        let mut japan = CountryRecord::new("Japan");
        japan.culture.set(Dimension::PowerDistance, 54.0);
        japan.migration.set(DemographicFilter::All, y, 100.0);
        let mut brazil = CountryRecord::new("Brazil");
        brazil.culture.set(Dimension::PowerDistance, 69.0);
        brazil.migration.set(DemographicFilter::All, y, 50.0);
        DashboardStore::new(Dataset::from_records(vec![japan, brazil]))
    }

    #[test]
    fn empty_selection_yields_placeholder() {
        let s = store();
        assert!(TableView::extract(&s.update()).is_empty());
    }

    #[test]
    fn single_country_has_no_delta_column() {
        let mut s = store();
        s.select_country("Japan");
        let snap = TableView::extract(&s.update());

        assert_eq!(snap.primary_header.as_deref(), Some("Japan"));
        assert_eq!(snap.secondary_header, None);
        assert!(snap.rows.iter().all(|r| r.delta.is_none()));
        assert_eq!(snap.rows[0].metric, Metric::Migration);
        assert_eq!(snap.rows[0].primary, Some(100.0));
    }

    #[test]
    fn two_countries_compare_with_delta() {
        let mut s = store();
        s.select_country("Japan");
        s.select_country("Brazil");
        let snap = TableView::extract(&s.update());

        // One migration row plus one per dimension.
        assert_eq!(snap.rows.len(), 7);
        assert_eq!(snap.rows[0].delta, Some(50.0));

        let pdi = snap
            .rows
            .iter()
            .find(|r| r.metric == Metric::Dimension(Dimension::PowerDistance))
            .unwrap();
        assert_eq!(pdi.primary, Some(54.0));
        assert_eq!(pdi.secondary, Some(69.0));
        assert_eq!(pdi.delta, Some(-15.0));
    }

    #[test]
    fn migration_row_tracks_year_label() {
        let mut s = store();
        s.select_country("Japan");
        s.set_year(SampleYear::new(1995).unwrap());
        let snap = TableView::extract(&s.update());
        assert_eq!(snap.rows[0].label, "Migration (1995)");
        assert_eq!(snap.rows[0].primary, Some(0.0));
    }
}

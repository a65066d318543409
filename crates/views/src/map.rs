use compute::Statistics;
use foundation::Color;
use store::StoreUpdate;

use crate::symbology::choropleth_fill;

/// Per-country shading for the current year and filter.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryShade {
    pub country: String,
    pub value: f64,
    pub fill: Color,
    pub selected: bool,
}

/// Everything the map renderer needs, in dataset row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSnapshot {
    pub shades: Vec<CountryShade>,
    /// Min/max over strictly positive values; `None` when nothing is
    /// positive for the current slice.
    pub domain: Option<(f64, f64)>,
}

impl MapSnapshot {
    pub fn shade_for(&self, country: &str) -> Option<&CountryShade> {
        self.shades.iter().find(|s| s.country == country)
    }
}

/// Stateless choropleth extractor.
pub struct MapView;

impl MapView {
    pub fn extract(update: &StoreUpdate<'_>) -> MapSnapshot {
        let year = update.selection.year;
        let filter = update.selection.filter;

        let values: Vec<f64> = update
            .dataset
            .iter()
            .map(|r| r.migration_count(filter, year))
            .collect();
        let domain = Statistics::positive_min_max(&values);

        let shades = update
            .dataset
            .iter()
            .zip(&values)
            .map(|(record, &value)| CountryShade {
                country: record.name.clone(),
                value,
                fill: choropleth_fill(value, domain),
                selected: update.selection.is_selected(&record.name),
            })
            .collect();

        MapSnapshot { shades, domain }
    }
}

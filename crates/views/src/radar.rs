use foundation::{Color, Dimension};
use store::StoreUpdate;

use crate::symbology::series_color;

/// Grid rings for the radar chart; the score domain is 0-100 so each ring
/// is worth 20 points.
pub const RADAR_LEVELS: usize = 5;
pub const RADAR_DOMAIN_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub country: String,
    pub color: Color,
    /// Scores in [`Dimension::ALL`] order.
    pub values: [f64; 6],
}

impl RadarSeries {
    /// Closed polygon vertices for this series, axis 0 at twelve o'clock,
    /// proceeding clockwise. Values clamp to the score domain.
    pub fn polygon_points(&self, center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
        let step = std::f64::consts::TAU / self.values.len() as f64;
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let angle = i as f64 * step - std::f64::consts::FRAC_PI_2;
                let r = radius * (v.clamp(0.0, RADAR_DOMAIN_MAX) / RADAR_DOMAIN_MAX);
                (center.0 + r * angle.cos(), center.1 + r * angle.sin())
            })
            .collect()
    }
}

/// Radar chart over the six cultural dimensions for up to two countries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadarSnapshot {
    pub series: Vec<RadarSeries>,
}

impl RadarSnapshot {
    pub fn axes() -> [Dimension; 6] {
        Dimension::ALL
    }

    /// Empty-selection placeholder state.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

pub struct RadarView;

impl RadarView {
    /// Pure extraction; transitions directly between any two selections
    /// because the snapshot is rebuilt from scratch each time.
    pub fn extract(update: &StoreUpdate<'_>) -> RadarSnapshot {
        let mut series = Vec::new();
        for (i, name) in update.selection.selected_names().into_iter().enumerate() {
            let Some(record) = update.dataset.get(name) else {
                continue;
            };
            let mut values = [0.0; 6];
            for dim in Dimension::ALL {
                values[dim.index()] = record.dimension(dim);
            }
            series.push(RadarSeries {
                country: record.name.clone(),
                color: series_color(i),
                values,
            });
        }
        RadarSnapshot { series }
    }
}

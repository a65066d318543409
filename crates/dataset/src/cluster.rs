use std::collections::BTreeMap;

use foundation::{Color, Dimension};
use serde::{Deserialize, Serialize};

/// Averaged cultural profile of a cluster, as emitted by the offline
/// clustering pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterProfile {
    #[serde(default)]
    pub power_distance: f64,
    #[serde(default)]
    pub individualism: f64,
    #[serde(default)]
    pub masculinity: f64,
    #[serde(default)]
    pub uncertainty_avoidance: f64,
    #[serde(default)]
    pub long_term_orientation: f64,
    #[serde(default)]
    pub indulgence: f64,
}

impl ClusterProfile {
    pub fn value(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::PowerDistance => self.power_distance,
            Dimension::Individualism => self.individualism,
            Dimension::Masculinity => self.masculinity,
            Dimension::UncertaintyAvoidance => self.uncertainty_avoidance,
            Dimension::LongTermOrientation => self.long_term_orientation,
            Dimension::Indulgence => self.indulgence,
        }
    }
}

/// One pre-computed cluster: display metadata plus aggregate stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterDescriptor {
    pub name: String,
    /// `#rrggbb` hex string.
    pub color: String,
    pub size: u32,
    #[serde(default)]
    pub migration_level: String,
    /// Absent when the pipeline had no population data for the cluster.
    #[serde(default)]
    pub immigration_ratio_per_1000: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub cultural_profile: ClusterProfile,
}

impl ClusterDescriptor {
    /// Parsed card color; malformed hex falls back to a neutral grey.
    pub fn display_color(&self) -> Color {
        Color::from_hex(&self.color).unwrap_or(Color::rgb(0.58, 0.64, 0.72))
    }
}

/// One country's cluster assignment with its 2-D projection coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryProjection {
    pub country: String,
    pub cluster: u32,
    pub pca_x: f64,
    pub pca_y: f64,
}

/// Pre-computed clustering output, treated as an opaque input.
///
/// Recomputing clusters (k-means/PCA) is out of scope; this type only
/// carries what the offline pipeline wrote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterModel {
    pub clusters: BTreeMap<u32, ClusterDescriptor>,
    pub countries: Vec<CountryProjection>,
}

impl ClusterModel {
    /// Cluster id of a dataset country, by exact name.
    pub fn cluster_of(&self, country: &str) -> Option<u32> {
        self.countries
            .iter()
            .find(|p| p.country == country)
            .map(|p| p.cluster)
    }

    pub fn descriptor(&self, id: u32) -> Option<&ClusterDescriptor> {
        self.clusters.get(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClusterDescriptor, ClusterModel, CountryProjection};

    fn model() -> ClusterModel {
        let mut m = ClusterModel::default();
        m.clusters.insert(
            2,
            ClusterDescriptor {
                name: "Competitive Nations".to_string(),
                color: "#dc2626".to_string(),
                size: 2,
                countries: vec!["Japan".to_string(), "Brazil".to_string()],
                ..ClusterDescriptor::default()
            },
        );
        m.countries.push(CountryProjection {
            country: "Japan".to_string(),
            cluster: 2,
            pca_x: 0.5,
            pca_y: -1.0,
        });
        m
    }

    #[test]
    fn resolves_cluster_by_country_name() {
        let m = model();
        assert_eq!(m.cluster_of("Japan"), Some(2));
        assert_eq!(m.cluster_of("Atlantis"), None);
        assert_eq!(m.descriptor(2).unwrap().size, 2);
        assert!(m.descriptor(9).is_none());
    }

    #[test]
    fn malformed_color_falls_back_to_grey() {
        let mut d = ClusterDescriptor::default();
        d.color = "not-a-color".to_string();
        let c = d.display_color();
        assert!(c.r > 0.0 && c.a == 1.0);
    }
}

use std::collections::BTreeSet;

use compute::Statistics;
use dataset::ClusterModel;
use foundation::{Color, Dimension};

/// How many member names a summary card previews.
const CARD_EXAMPLE_COUNT: usize = 3;

/// Margin around the PCA scatter viewport, in pixels.
const SCATTER_MARGIN: f64 = 20.0;

/// Single-selection expand state: at most one cluster shows its detail
/// view, and expanding one collapses any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded(u32),
}

/// Summary card for one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterCard {
    pub id: u32,
    pub name: String,
    pub color: Color,
    pub size: u32,
    pub migration_level: String,
    pub immigration_ratio_per_1000: Option<f64>,
    /// First few member countries for the card footer.
    pub examples: Vec<String>,
    /// More members exist than the examples show.
    pub truncated: bool,
    pub highlighted: bool,
    pub expanded: bool,
}

/// One profile bar in the detail view; labels come from the dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionBar {
    pub dimension: Dimension,
    /// 0-100 cluster average.
    pub value: f64,
}

impl DimensionBar {
    /// Which pole label should be emphasized.
    pub fn leans_high(&self) -> bool {
        self.value > 50.0
    }
}

/// Expanded detail view for a single cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterDetail {
    pub id: u32,
    pub name: String,
    pub color: Color,
    pub size: u32,
    pub migration_level: String,
    pub immigration_ratio_per_1000: Option<f64>,
    pub description: String,
    pub extended_description: String,
    pub bars: Vec<DimensionBar>,
    pub members: Vec<String>,
}

/// One country dot in the PCA scatter plot, in viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub country: String,
    pub cluster: u32,
    pub color: Color,
    pub x: f64,
    pub y: f64,
    pub highlighted: bool,
}

/// Interactive state of the clustering explorer.
///
/// The cluster model itself is immutable input; this only tracks which
/// card is expanded and which clusters the dashboard selection highlights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterExplorer {
    expand: ExpandState,
    highlighted: BTreeSet<u32>,
}

impl ClusterExplorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand_state(&self) -> ExpandState {
        self.expand
    }

    /// Expands `id`, collapsing any other expanded cluster.
    ///
    /// Returns `true` if the state changed; unknown ids are ignored.
    pub fn expand(&mut self, id: u32, model: &ClusterModel) -> bool {
        if model.descriptor(id).is_none() {
            return false;
        }
        if self.expand == ExpandState::Expanded(id) {
            return false;
        }
        self.expand = ExpandState::Expanded(id);
        true
    }

    /// Returns `true` if a detail view was open.
    pub fn collapse(&mut self) -> bool {
        if self.expand == ExpandState::Collapsed {
            return false;
        }
        self.expand = ExpandState::Collapsed;
        true
    }

    /// Resolves the dashboard-selected countries to cluster ids and marks
    /// those cards highlighted. An empty list clears all highlighting.
    ///
    /// Idempotent: repeating the same input reports no change, so callers
    /// can re-invoke it on every selection notification.
    pub fn highlight_countries(&mut self, model: &ClusterModel, names: &[&str]) -> bool {
        let next: BTreeSet<u32> = names.iter().filter_map(|n| model.cluster_of(n)).collect();
        if next == self.highlighted {
            return false;
        }
        self.highlighted = next;
        true
    }

    pub fn highlighted(&self) -> &BTreeSet<u32> {
        &self.highlighted
    }

    /// Summary cards in ascending cluster-id order.
    pub fn cards(&self, model: &ClusterModel) -> Vec<ClusterCard> {
        model
            .clusters
            .iter()
            .map(|(&id, c)| ClusterCard {
                id,
                name: c.name.clone(),
                color: c.display_color(),
                size: c.size,
                migration_level: c.migration_level.clone(),
                immigration_ratio_per_1000: c.immigration_ratio_per_1000,
                examples: c
                    .countries
                    .iter()
                    .take(CARD_EXAMPLE_COUNT)
                    .cloned()
                    .collect(),
                truncated: c.countries.len() > CARD_EXAMPLE_COUNT,
                highlighted: self.highlighted.contains(&id),
                expanded: self.expand == ExpandState::Expanded(id),
            })
            .collect()
    }

    /// Detail view for the expanded cluster, if any.
    pub fn detail(&self, model: &ClusterModel) -> Option<ClusterDetail> {
        let ExpandState::Expanded(id) = self.expand else {
            return None;
        };
        let c = model.descriptor(id)?;
        let bars = Dimension::ALL
            .iter()
            .map(|&dimension| DimensionBar {
                dimension,
                value: c.cultural_profile.value(dimension),
            })
            .collect();
        Some(ClusterDetail {
            id,
            name: c.name.clone(),
            color: c.display_color(),
            size: c.size,
            migration_level: c.migration_level.clone(),
            immigration_ratio_per_1000: c.immigration_ratio_per_1000,
            description: c.description.clone(),
            extended_description: extended_description(&c.name).to_string(),
            bars,
            members: c.countries.clone(),
        })
    }

    /// Projects the per-country PCA coordinates into a pixel viewport.
    ///
    /// A degenerate extent (single point, or identical coordinates)
    /// centers the dots instead of dividing by zero.
    pub fn scatter(&self, model: &ClusterModel, width: f64, height: f64) -> Vec<ScatterPoint> {
        let xs: Vec<f64> = model.countries.iter().map(|p| p.pca_x).collect();
        let ys: Vec<f64> = model.countries.iter().map(|p| p.pca_y).collect();
        let x_extent = Statistics::min_max(&xs);
        let y_extent = Statistics::min_max(&ys);

        let place = |v: f64, extent: Option<(f64, f64)>, span: f64| -> f64 {
            let t = extent
                .and_then(|(lo, hi)| Statistics::unit_position(v, lo, hi))
                .unwrap_or(0.5);
            SCATTER_MARGIN + t * (span - 2.0 * SCATTER_MARGIN)
        };

        model
            .countries
            .iter()
            .map(|p| {
                let color = model
                    .descriptor(p.cluster)
                    .map(|c| c.display_color())
                    .unwrap_or(Color::rgb(0.58, 0.64, 0.72));
                ScatterPoint {
                    country: p.country.clone(),
                    cluster: p.cluster,
                    color,
                    x: place(p.pca_x, x_extent, width),
                    // Screen y grows downward; PCA y grows upward.
                    y: height - place(p.pca_y, y_extent, height),
                    highlighted: self.highlighted.contains(&p.cluster),
                }
            })
            .collect()
    }
}

/// Longer-form blurb for the known cluster archetypes, with a generic
/// fallback for anything the offline pipeline renames.
pub fn extended_description(cluster_name: &str) -> &'static str {
    match cluster_name {
        "Family-First Countries" => {
            "These countries prioritize strong family bonds and community ties. People enjoy \
             celebrating life while maintaining close relationships. Think of places where \
             extended families gather often, festivals are community-wide events, and personal \
             happiness is valued alongside collective harmony."
        }
        "Competitive Nations" => {
            "Countries where individual achievement and success drive society forward. People \
             work hard to get ahead, value personal accomplishments, and believe in earning \
             their place through effort. Education, career advancement, and measurable \
             achievements are highly respected."
        }
        "Respectful Communities" => {
            "Societies built on respect for authority and group cooperation. People work \
             together toward common goals, follow established hierarchies, and value group \
             harmony over individual desires. Decision-making often involves consultation and \
             consensus-building."
        }
        "Social Living Countries" => {
            "Places where community life is central to daily existence. Everyone knows their \
             neighbors, local traditions are actively preserved, and social gatherings are \
             frequent and meaningful. People prefer face-to-face relationships and collective \
             celebrations."
        }
        "Structured Societies" => {
            "Well-organized countries with clear rules, efficient systems, and strong \
             institutional leadership. People appreciate predictability, proper procedures, \
             and systematic approaches to solving problems. Government and social structures \
             provide stability and order."
        }
        "Quality-of-Life Nations" => {
            "Countries that prioritize work-life balance, environmental quality, and citizen \
             wellbeing. People value time with family, personal fulfillment, and creating \
             supportive communities. Success is measured not just by wealth, but by happiness \
             and life satisfaction."
        }
        "Business-Minded Countries" => {
            "Global hubs where entrepreneurship, innovation, and commercial success thrive. \
             These places attract international talent, foster startup cultures, and \
             encourage risk-taking in business. Economic opportunity and financial \
             achievement are central to the culture."
        }
        "Traditional Mindset" => {
            "Countries deeply rooted in historical customs, established ways of life, and \
             time-tested approaches. People value continuity, respect for elders, and \
             preserving cultural heritage. Change happens gradually, with careful \
             consideration of traditional values."
        }
        _ => {
            "This cluster represents a unique combination of cultural characteristics that \
             shape how people in these countries approach life, work, and relationships."
        }
    }
}

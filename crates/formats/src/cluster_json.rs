use dataset::ClusterModel;

/// Errors loading the pre-computed cluster assignments.
///
/// These are degraded-mode errors: the dashboard keeps running and the
/// clustering features report themselves unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterDataError {
    Parse(String),
    /// Structurally valid JSON with an empty `clusters` object.
    NoClusters,
}

impl std::fmt::Display for ClusterDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterDataError::Parse(msg) => write!(f, "cluster data parse error: {msg}"),
            ClusterDataError::NoClusters => write!(f, "cluster data contains no clusters"),
        }
    }
}

impl std::error::Error for ClusterDataError {}

pub fn parse_cluster_json(text: &str) -> Result<ClusterModel, ClusterDataError> {
    let model: ClusterModel =
        serde_json::from_str(text).map_err(|e| ClusterDataError::Parse(e.to_string()))?;
    if model.is_empty() {
        return Err(ClusterDataError::NoClusters);
    }
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::{ClusterDataError, parse_cluster_json};

    const CLUSTER_JSON: &str = r##"{
        "clusters": {
            "0": {
                "name": "Competitive Nations",
                "color": "#dc2626",
                "size": 2,
                "migration_level": "High",
                "immigration_ratio_per_1000": 12.5,
                "description": "Achievement-driven societies.",
                "countries": ["Japan", "Brazil"],
                "cultural_profile": {
                    "power_distance": 60.5,
                    "individualism": 42.0,
                    "masculinity": 70.0,
                    "uncertainty_avoidance": 80.0,
                    "long_term_orientation": 65.0,
                    "indulgence": 40.0
                }
            }
        },
        "countries": [
            {"country": "Japan", "cluster": 0, "pca_x": 1.2, "pca_y": -0.4},
            {"country": "Brazil", "cluster": 0, "pca_x": -0.8, "pca_y": 0.9}
        ],
        "pca_explained_variance": [0.41, 0.22]
    }"##;

    #[test]
    fn parses_pipeline_output_shape() {
        let model = parse_cluster_json(CLUSTER_JSON).unwrap();
        let c = model.descriptor(0).unwrap();
        assert_eq!(c.name, "Competitive Nations");
        assert_eq!(c.size, 2);
        assert_eq!(c.immigration_ratio_per_1000, Some(12.5));
        assert_eq!(c.cultural_profile.masculinity, 70.0);
        assert_eq!(model.cluster_of("Brazil"), Some(0));
    }

    #[test]
    fn missing_ratio_is_none_not_an_error() {
        let json = r##"{
            "clusters": {"1": {"name": "X", "color": "#000000", "size": 1}},
            "countries": []
        }"##;
        let model = parse_cluster_json(json).unwrap();
        assert_eq!(model.descriptor(1).unwrap().immigration_ratio_per_1000, None);
    }

    #[test]
    fn empty_clusters_object_is_rejected() {
        let err = parse_cluster_json(r#"{"clusters": {}, "countries": []}"#).unwrap_err();
        assert_eq!(err, ClusterDataError::NoClusters);
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        assert!(matches!(
            parse_cluster_json("not json"),
            Err(ClusterDataError::Parse(_))
        ));
    }
}

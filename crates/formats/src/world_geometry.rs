use serde_json::Value;

use foundation::normalize_country_name;

/// One named country outline from the third-party world geometry.
///
/// Only outer rings are kept; the dashboard fills silhouettes and never
/// renders holes. Coordinates are `[lon_deg, lat_deg]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryFeature {
    pub name: String,
    /// Pre-computed [`normalize_country_name`] key for dataset matching.
    pub normalized: String,
    pub rings: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldGeometry {
    pub features: Vec<CountryFeature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldGeometryError {
    NotAFeatureCollection,
    Parse(String),
}

impl std::fmt::Display for WorldGeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldGeometryError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            WorldGeometryError::Parse(msg) => write!(f, "world geometry parse error: {msg}"),
        }
    }
}

impl std::error::Error for WorldGeometryError {}

impl WorldGeometry {
    /// Parses a GeoJSON FeatureCollection of country polygons.
    ///
    /// This reader is deliberately lenient at the feature level: features
    /// with a missing name, missing geometry, or a non-polygon geometry
    /// are skipped rather than failing the whole collection, since
    /// unmatched geometry only degrades to a neutral fill downstream.
    pub fn from_geojson_str(payload: &str) -> Result<Self, WorldGeometryError> {
        let value: Value =
            serde_json::from_str(payload).map_err(|e| WorldGeometryError::Parse(e.to_string()))?;
        Self::from_geojson_value(&value)
    }

    pub fn from_geojson_value(value: &Value) -> Result<Self, WorldGeometryError> {
        let obj = value
            .as_object()
            .ok_or(WorldGeometryError::NotAFeatureCollection)?;
        if obj.get("type").and_then(|v| v.as_str()) != Some("FeatureCollection") {
            return Err(WorldGeometryError::NotAFeatureCollection);
        }
        let features_val = obj
            .get("features")
            .and_then(|v| v.as_array())
            .ok_or(WorldGeometryError::NotAFeatureCollection)?;

        let mut features = Vec::with_capacity(features_val.len());
        for feat in features_val {
            let Some(feat) = feat.as_object() else {
                continue;
            };
            let Some(name) = feature_name(feat) else {
                continue;
            };
            let Some(geometry) = feat.get("geometry").and_then(|g| g.as_object()) else {
                continue;
            };
            let rings = match geometry.get("type").and_then(|t| t.as_str()) {
                Some("Polygon") => polygon_outer_ring(geometry.get("coordinates"))
                    .into_iter()
                    .collect(),
                Some("MultiPolygon") => multi_polygon_outer_rings(geometry.get("coordinates")),
                _ => continue,
            };
            if rings.is_empty() {
                continue;
            }
            let normalized = normalize_country_name(&name);
            features.push(CountryFeature {
                name,
                normalized,
                rings,
            });
        }

        Ok(Self { features })
    }

    /// Feature lookup by normalized dataset country name.
    pub fn find_normalized(&self, normalized: &str) -> Option<&CountryFeature> {
        self.features.iter().find(|f| f.normalized == normalized)
    }
}

/// The upstream atlas exposes the display name under several property
/// keys depending on the release; try them in the order the original
/// consumer did.
fn feature_name(feature: &serde_json::Map<String, Value>) -> Option<String> {
    let props = feature.get("properties")?.as_object()?;
    for key in ["NAME", "NAME_EN", "name"] {
        if let Some(name) = props.get(key).and_then(|v| v.as_str()) {
            if !name.trim().is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}

fn parse_ring(ring: &Value) -> Option<Vec<[f64; 2]>> {
    let pts = ring.as_array()?;
    let mut out = Vec::with_capacity(pts.len());
    for pt in pts {
        let pair = pt.as_array()?;
        let lon = pair.first()?.as_f64()?;
        let lat = pair.get(1)?.as_f64()?;
        out.push([lon, lat]);
    }
    (out.len() >= 3).then_some(out)
}

fn polygon_outer_ring(coords: Option<&Value>) -> Option<Vec<[f64; 2]>> {
    parse_ring(coords?.as_array()?.first()?)
}

fn multi_polygon_outer_rings(coords: Option<&Value>) -> Vec<Vec<[f64; 2]>> {
    let Some(polys) = coords.and_then(|c| c.as_array()) else {
        return Vec::new();
    };
    polys
        .iter()
        .filter_map(|poly| parse_ring(poly.as_array()?.first()?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{WorldGeometry, WorldGeometryError};
    use pretty_assertions::assert_eq;

    const WORLD: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"NAME": "Japan"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[139.0, 35.0], [140.0, 35.0], [140.0, 36.0]]],
                        [[[135.0, 34.0], [136.0, 34.0], [136.0, 35.0]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": {"name": "Brazil"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-50.0, -10.0], [-49.0, -10.0], [-49.0, -9.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]}
            },
            {
                "type": "Feature",
                "properties": {"NAME": "Point Place"},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
            }
        ]
    }"#;

    #[test]
    fn keeps_named_polygon_features_only() {
        let world = WorldGeometry::from_geojson_str(WORLD).unwrap();
        let names: Vec<&str> = world.features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Japan", "Brazil"]);
        assert_eq!(world.features[0].rings.len(), 2);
        assert_eq!(world.features[1].rings.len(), 1);
    }

    #[test]
    fn lookup_uses_normalized_names() {
        let world = WorldGeometry::from_geojson_str(WORLD).unwrap();
        assert!(world.find_normalized("japan").is_some());
        assert!(world.find_normalized("Japan").is_none());
    }

    #[test]
    fn non_collections_are_rejected() {
        assert_eq!(
            WorldGeometry::from_geojson_str("{\"type\": \"Feature\"}"),
            Err(WorldGeometryError::NotAFeatureCollection)
        );
        assert!(matches!(
            WorldGeometry::from_geojson_str("nope"),
            Err(WorldGeometryError::Parse(_))
        ));
    }
}

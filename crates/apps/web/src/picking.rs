//! Hit-testing for the equirectangular map canvas.

use formats::{CountryFeature, WorldGeometry};

/// Projects `(lon, lat)` degrees into canvas pixels.
pub fn project(lon: f64, lat: f64, width: f64, height: f64) -> (f64, f64) {
    (
        (lon + 180.0) / 360.0 * width,
        (90.0 - lat) / 180.0 * height,
    )
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    (x / width * 360.0 - 180.0, 90.0 - y / height * 180.0)
}

/// Even-odd ray cast against one ring.
fn point_in_ring(lon: f64, lat: f64, ring: &[[f64; 2]]) -> bool {
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];
        if (yi > lat) != (yj > lat) && lon < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// First feature whose outline contains the point, if any.
///
/// Misses are expected (ocean clicks, unmatched geometry) and mean "no
/// selection", never an error.
pub fn feature_at(world: &WorldGeometry, lon: f64, lat: f64) -> Option<&CountryFeature> {
    world
        .features
        .iter()
        .find(|f| f.rings.iter().any(|ring| point_in_ring(lon, lat, ring)))
}

#[cfg(test)]
mod tests {
    use super::{feature_at, project, unproject};
    use formats::WorldGeometry;

    #[test]
    fn projection_round_trips() {
        let (x, y) = project(139.0, 35.0, 800.0, 400.0);
        let (lon, lat) = unproject(x, y, 800.0, 400.0);
        assert!((lon - 139.0).abs() < 1e-9);
        assert!((lat - 35.0).abs() < 1e-9);
        // Corners of the world land on the canvas corners.
        assert_eq!(project(-180.0, 90.0, 800.0, 400.0), (0.0, 0.0));
        assert_eq!(project(180.0, -90.0, 800.0, 400.0), (800.0, 400.0));
    }

    #[test]
    fn hit_test_finds_the_containing_country() {
        let world = WorldGeometry::from_geojson_str(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {"NAME": "Squareland"},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]]
                    }
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(feature_at(&world, 5.0, 5.0).map(|f| f.name.as_str()), Some("Squareland"));
        assert!(feature_at(&world, 15.0, 5.0).is_none());
        assert!(feature_at(&world, -5.0, -5.0).is_none());
    }
}

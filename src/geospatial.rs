//! Bounding-box helpers for building the `Area_Of_Interest` request value.
//!
//! These are thin convenience wrappers; coordinates are taken as-is and must
//! already be in EPSG:4326 (the only CRS the service accepts as input).

use anyhow::{Context, Result, bail};
use geo_types::{Coord, Polygon};
use serde_json::Value;
use std::path::Path;

/// Supported file formats for [`bbox_from_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeospatialDriver {
    GeoJson,
    Shapefile,
}

impl GeospatialDriver {
    /// Infers the driver from the file extension. Extensionless paths are
    /// read as shapefiles.
    fn infer(path: &Path) -> GeospatialDriver {
        match path.extension().and_then(|e| e.to_str()) {
            Some("geojson") | Some("json") => GeospatialDriver::GeoJson,
            _ => GeospatialDriver::Shapefile,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    seen: bool,
}

impl Bounds {
    fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
            seen: false,
        }
    }

    fn add(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.seen = true;
    }

    fn into_bbox(self) -> Result<String> {
        if !self.seen {
            bail!("no coordinates found in input");
        }
        Ok(format!(
            "{} {} {} {}",
            self.min_x, self.min_y, self.max_x, self.max_y
        ))
    }
}

/// Converts a polygon to a `"min_x min_y max_x max_y"` bounding-box string.
pub fn bbox_from_polygon(polygon: &Polygon<f64>) -> Result<String> {
    let mut bounds = Bounds::new();
    let coords = polygon
        .exterior()
        .coords()
        .chain(polygon.interiors().iter().flat_map(|ring| ring.coords()));
    for &Coord { x, y } in coords {
        bounds.add(x, y);
    }
    bounds.into_bbox()
}

/// Converts all features in a file to one `"min_x min_y max_x max_y"`
/// bounding-box string. When no driver is given it is inferred from the
/// file extension.
pub fn bbox_from_file(path: &Path, driver: Option<GeospatialDriver>) -> Result<String> {
    let driver = driver.unwrap_or_else(|| GeospatialDriver::infer(path));
    match driver {
        GeospatialDriver::GeoJson => bbox_from_geojson(path),
        GeospatialDriver::Shapefile => bbox_from_shapefile(path),
    }
}

fn bbox_from_geojson(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid GeoJSON", path.display()))?;

    let mut bounds = Bounds::new();
    walk_geojson(&value, &mut bounds);
    bounds.into_bbox()
}

/// Walks any GeoJSON nesting (FeatureCollection, Feature, bare geometry,
/// GeometryCollection) down to `coordinates` members.
fn walk_geojson(value: &Value, bounds: &mut Bounds) {
    match value {
        Value::Object(map) => {
            if let Some(coords) = map.get("coordinates") {
                collect_positions(coords, bounds);
            }
            for key in ["features", "geometry", "geometries"] {
                if let Some(inner) = map.get(key) {
                    walk_geojson(inner, bounds);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_geojson(item, bounds);
            }
        }
        _ => {}
    }
}

fn collect_positions(value: &Value, bounds: &mut Bounds) {
    if let Value::Array(items) = value {
        // A position is an array starting with two numbers.
        if let (Some(x), Some(y)) = (
            items.first().and_then(Value::as_f64),
            items.get(1).and_then(Value::as_f64),
        ) {
            bounds.add(x, y);
            return;
        }
        for item in items {
            collect_positions(item, bounds);
        }
    }
}

fn bbox_from_shapefile(path: &Path) -> Result<String> {
    let shapes = shapefile::read_shapes(path)
        .with_context(|| format!("failed to read shapefile {}", path.display()))?;

    let mut bounds = Bounds::new();
    for shape in &shapes {
        match shape {
            shapefile::Shape::Point(p) => bounds.add(p.x, p.y),
            shapefile::Shape::Multipoint(mp) => {
                for p in mp.points() {
                    bounds.add(p.x, p.y);
                }
            }
            shapefile::Shape::Polyline(pl) => {
                for part in pl.parts() {
                    for p in part {
                        bounds.add(p.x, p.y);
                    }
                }
            }
            shapefile::Shape::Polygon(poly) => {
                for ring in poly.rings() {
                    for p in ring.points() {
                        bounds.add(p.x, p.y);
                    }
                }
            }
            shapefile::Shape::NullShape => {}
            _ => bail!("unsupported shape type in {}", path.display()),
        }
    }
    bounds.into_bbox()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::LineString;
    use std::io::Write as _;

    fn fixture_polygon() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (-107.70894964879554, 47.34869094341488),
                (-107.70894964879554, 46.5679909433598),
                (-106.0271812378708, 46.5679909433598),
                (-106.0271812378708, 47.34869094341488),
                (-107.70894964879554, 47.34869094341488),
            ]),
            vec![],
        )
    }

    fn assert_fixture_bbox(bbox: &str) {
        let rounded: Vec<String> = bbox
            .split(' ')
            .map(|v| format!("{:.2}", v.parse::<f64>().unwrap()))
            .collect();
        assert_eq!(rounded, vec!["-107.71", "46.57", "-106.03", "47.35"]);
    }

    #[test]
    fn polygon_bbox() {
        assert_fixture_bbox(&bbox_from_polygon(&fixture_polygon()).unwrap());
    }

    #[test]
    fn empty_polygon_is_an_error() {
        let empty = Polygon::new(LineString::new(vec![]), vec![]);
        assert!(bbox_from_polygon(&empty).is_err());
    }

    #[test]
    fn geojson_feature_collection_bbox() {
        let geojson = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "aoi"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-107.70894964879554, 47.34869094341488],
                        [-107.70894964879554, 46.5679909433598],
                        [-106.0271812378708, 46.5679909433598],
                        [-106.0271812378708, 47.34869094341488],
                        [-107.70894964879554, 47.34869094341488]
                    ]]
                }
            }]
        }"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aoi.geojson");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(geojson.as_bytes()).unwrap();

        assert_fixture_bbox(&bbox_from_file(&path, None).unwrap());
        assert_fixture_bbox(&bbox_from_file(&path, Some(GeospatialDriver::GeoJson)).unwrap());
    }

    #[test]
    fn geojson_bare_geometry_bbox() {
        let geojson = r#"{"type":"Point","coordinates":[-106.5, 47.0]}"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("point.json");
        std::fs::write(&path, geojson).unwrap();
        assert_eq!(bbox_from_file(&path, None).unwrap(), "-106.5 47 -106.5 47");
    }

    #[test]
    fn driver_inference() {
        assert_eq!(GeospatialDriver::infer(Path::new("a.geojson")), GeospatialDriver::GeoJson);
        assert_eq!(GeospatialDriver::infer(Path::new("a.json")), GeospatialDriver::GeoJson);
        assert_eq!(GeospatialDriver::infer(Path::new("a.shp")), GeospatialDriver::Shapefile);
        assert_eq!(GeospatialDriver::infer(Path::new("a")), GeospatialDriver::Shapefile);
    }
}

//! Point-of-interest layer loaded from KML.
//!
//! Holds the scene-center placemarks displayed on the map and answers
//! nearest-feature queries against them.

use crate::geo::sphere::great_circle_distance;
use geo_types::Coord;
use kml::{types::Geometry, Kml};

/// A point feature parsed from a KML placemark.
#[derive(Debug, Clone)]
pub struct PoiFeature {
    /// Position as (lon, lat) degrees
    pub coord: Coord<f64>,
    /// Placemark name, if the document provided one
    pub label: Option<String>,
}

/// Result of a nearest-feature query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoi {
    /// Index into [`PoiLayer::features`]
    pub index: usize,
    /// Great-circle distance from the query point in meters
    pub distance_m: f64,
}

/// A layer of point features with an optional highlighted member.
#[derive(Debug, Clone)]
pub struct PoiLayer {
    /// Point features in document order
    pub features: Vec<PoiFeature>,
    /// Whether the layer is drawn on the canvas
    pub visible: bool,
    /// Feature emphasized by the most recent nearest-feature query
    pub highlighted: Option<usize>,
}

impl Default for PoiLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PoiLayer {
    /// Creates a new empty layer.
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
            visible: true,
            highlighted: None,
        }
    }

    /// Loads point placemarks from a KML document string.
    ///
    /// Non-point geometries are skipped. Returns the number of features
    /// added.
    pub fn load_from_kml(&mut self, kml_str: &str) -> Result<usize, String> {
        let document: Kml = kml_str
            .parse()
            .map_err(|e| format!("Failed to parse KML: {}", e))?;

        let before = self.features.len();
        self.collect_node(&document);
        Ok(self.features.len() - before)
    }

    fn collect_node(&mut self, node: &Kml) {
        match node {
            Kml::KmlDocument(document) => {
                for element in &document.elements {
                    self.collect_node(element);
                }
            }
            Kml::Document { elements, .. } | Kml::Folder { elements, .. } => {
                for element in elements {
                    self.collect_node(element);
                }
            }
            Kml::Placemark(placemark) => {
                if let Some(ref geometry) = placemark.geometry {
                    self.collect_geometry(geometry, placemark.name.clone());
                }
            }
            // Bare points outside a placemark carry no name
            Kml::Point(point) => self.push_point(point, None),
            _ => {}
        }
    }

    fn collect_geometry(&mut self, geometry: &Geometry, label: Option<String>) {
        match geometry {
            Geometry::Point(point) => self.push_point(point, label),
            Geometry::MultiGeometry(multi) => {
                for inner in &multi.geometries {
                    self.collect_geometry(inner, label.clone());
                }
            }
            _ => {}
        }
    }

    fn push_point(&mut self, point: &kml::types::Point, label: Option<String>) {
        self.features.push(PoiFeature {
            coord: Coord {
                x: point.coord.x,
                y: point.coord.y,
            },
            label,
        });
    }

    /// Finds the feature closest to a (lon, lat) query point.
    ///
    /// Linear scan over all features by great-circle distance.
    pub fn nearest(&self, query: Coord<f64>) -> Option<NearestPoi> {
        let mut closest: Option<NearestPoi> = None;

        for (index, feature) in self.features.iter().enumerate() {
            let distance_m = great_circle_distance(query, feature.coord);
            if closest.is_none_or(|c| distance_m < c.distance_m) {
                closest = Some(NearestPoi { index, distance_m });
            }
        }

        closest
    }

    /// Finds the nearest feature and marks it as highlighted.
    ///
    /// Clears the highlight when the layer is empty.
    pub fn highlight_nearest(&mut self, query: Coord<f64>) -> Option<NearestPoi> {
        let nearest = self.nearest(query);
        self.highlighted = nearest.map(|n| n.index);

        if let Some(n) = nearest {
            let label = self.features[n.index].label.as_deref().unwrap_or("(unnamed)");
            log::debug!("Closest scene center: {} at {:.0} m", label, n.distance_m);
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTERS_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Alpha</name>
      <Point><coordinates>-79.40,44.60,0</coordinates></Point>
    </Placemark>
    <Placemark>
      <name>Beta</name>
      <Point><coordinates>-61.99,51.35,0</coordinates></Point>
    </Placemark>
    <Placemark>
      <name>Track</name>
      <LineString><coordinates>-79.0,44.0,0 -78.0,44.5,0</coordinates></LineString>
    </Placemark>
    <Folder>
      <Placemark>
        <name>Gamma</name>
        <Point><coordinates>-58.86,49.17,0</coordinates></Point>
      </Placemark>
    </Folder>
  </Document>
</kml>"#;

    #[test]
    fn test_load_skips_non_point_geometries() {
        let mut layer = PoiLayer::new();
        let added = layer.load_from_kml(CENTERS_KML).unwrap();

        assert_eq!(added, 3);
        assert_eq!(layer.features.len(), 3);
        assert_eq!(layer.features[0].label.as_deref(), Some("Alpha"));
        assert_eq!(layer.features[1].label.as_deref(), Some("Beta"));
        assert_eq!(layer.features[2].label.as_deref(), Some("Gamma"));
    }

    #[test]
    fn test_load_parses_lon_lat_order() {
        let mut layer = PoiLayer::new();
        layer.load_from_kml(CENTERS_KML).unwrap();

        let alpha = &layer.features[0];
        assert!((alpha.coord.x - -79.40).abs() < 1e-9);
        assert!((alpha.coord.y - 44.60).abs() < 1e-9);
    }

    #[test]
    fn test_load_rejects_malformed_document() {
        let mut layer = PoiLayer::new();
        assert!(layer.load_from_kml("not kml at all").is_err());
        assert!(layer.features.is_empty());
    }

    #[test]
    fn test_nearest_picks_closest_feature() {
        let mut layer = PoiLayer::new();
        layer.load_from_kml(CENTERS_KML).unwrap();

        // Query near the default scene center, closest to Alpha
        let nearest = layer
            .nearest(Coord {
                x: -79.457808,
                y: 44.593214,
            })
            .unwrap();

        assert_eq!(nearest.index, 0);
        assert!(nearest.distance_m > 0.0);
    }

    #[test]
    fn test_nearest_on_empty_layer() {
        let layer = PoiLayer::new();
        assert!(layer.nearest(Coord { x: 0.0, y: 0.0 }).is_none());
    }

    #[test]
    fn test_highlight_nearest_marks_winner() {
        let mut layer = PoiLayer::new();
        layer.load_from_kml(CENTERS_KML).unwrap();

        let nearest = layer
            .highlight_nearest(Coord { x: -61.9, y: 51.3 })
            .unwrap();

        assert_eq!(nearest.index, 1);
        assert_eq!(layer.highlighted, Some(1));

        // A later query moves the highlight
        layer.highlight_nearest(Coord { x: -58.9, y: 49.2 });
        assert_eq!(layer.highlighted, Some(2));
    }
}

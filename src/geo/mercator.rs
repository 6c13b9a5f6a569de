//! Web Mercator (EPSG:3857) projection and view transform.
//!
//! Handles converting between geographic coordinates (lon/lat degrees),
//! projected map coordinates (meters), and screen coordinates for
//! rendering on the canvas.

use eframe::egui::{Pos2, Rect, Vec2};
use geo_types::Coord;

/// WGS84 semi-major axis in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the projected world width in meters (PI * EARTH_RADIUS).
pub const HALF_WORLD: f64 = 20_037_508.342789244;

/// Latitude beyond which the projection is clamped, in degrees.
///
/// This is the latitude at which the projected world becomes square.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

const TILE_SIZE_PX: f64 = 256.0;

/// Projects (lon, lat) degrees to Web Mercator meters.
///
/// Latitude is clamped to [`MAX_LATITUDE`] so the result stays finite.
pub fn from_lon_lat(lon_lat: Coord<f64>) -> Coord<f64> {
    let lat = lon_lat.y.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let lat_rad = lat.to_radians();

    Coord {
        x: EARTH_RADIUS * lon_lat.x.to_radians(),
        y: EARTH_RADIUS * (std::f64::consts::FRAC_PI_4 + lat_rad / 2.0).tan().ln(),
    }
}

/// Unprojects Web Mercator meters back to (lon, lat) degrees.
pub fn to_lon_lat(point: Coord<f64>) -> Coord<f64> {
    Coord {
        x: (point.x / EARTH_RADIUS).to_degrees(),
        y: (2.0 * (point.y / EARTH_RADIUS).exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees(),
    }
}

/// Meters per screen pixel at the given zoom level.
///
/// Matches the standard 256px slippy-map tile pyramid.
pub fn resolution(zoom: u8) -> f64 {
    2.0 * HALF_WORLD / (TILE_SIZE_PX * f64::from(1u32 << zoom))
}

/// View transform between map coordinates and the canvas.
///
/// Rebuilt each frame from the current view state and canvas rect.
#[derive(Debug, Clone)]
pub struct MapTransform {
    /// View center in Web Mercator meters
    pub center: Coord<f64>,
    /// Current zoom level
    pub zoom: u8,
    /// Screen rectangle of the canvas
    pub screen_rect: Rect,
}

impl MapTransform {
    /// Creates a transform centered on a (lon, lat) point.
    pub fn new(center_lon_lat: Coord<f64>, zoom: u8, screen_rect: Rect) -> Self {
        Self {
            center: from_lon_lat(center_lon_lat),
            zoom,
            screen_rect,
        }
    }

    /// Converts Web Mercator meters to a screen position.
    pub fn map_to_screen(&self, point: Coord<f64>) -> Pos2 {
        let res = resolution(self.zoom);
        let center_px = self.screen_rect.center();

        Pos2::new(
            center_px.x + ((point.x - self.center.x) / res) as f32,
            // Screen Y increases downward
            center_px.y - ((point.y - self.center.y) / res) as f32,
        )
    }

    /// Converts a screen position to Web Mercator meters.
    pub fn screen_to_map(&self, pos: Pos2) -> Coord<f64> {
        let res = resolution(self.zoom);
        let center_px = self.screen_rect.center();

        Coord {
            x: self.center.x + f64::from(pos.x - center_px.x) * res,
            y: self.center.y - f64::from(pos.y - center_px.y) * res,
        }
    }

    /// Converts (lon, lat) degrees to a screen position.
    pub fn geo_to_screen(&self, lon_lat: Coord<f64>) -> Pos2 {
        self.map_to_screen(from_lon_lat(lon_lat))
    }

    /// Converts a screen position to (lon, lat) degrees.
    pub fn screen_to_geo(&self, pos: Pos2) -> Coord<f64> {
        to_lon_lat(self.screen_to_map(pos))
    }

    /// Current view center as (lon, lat) degrees.
    pub fn center_lon_lat(&self) -> Coord<f64> {
        to_lon_lat(self.center)
    }

    /// Shifts the view center by a screen-space delta.
    pub fn translate(&mut self, delta: Vec2) {
        let res = resolution(self.zoom);
        self.center.x += f64::from(delta.x) * res;
        self.center.y -= f64::from(delta.y) * res;
    }

    /// Changes the zoom level while keeping the map point under `anchor`
    /// fixed at the same screen position.
    pub fn zoom_about(&mut self, anchor: Pos2, zoom: u8) {
        let anchor_map = self.screen_to_map(anchor);
        self.zoom = zoom;

        let res = resolution(zoom);
        let center_px = self.screen_rect.center();
        self.center = Coord {
            x: anchor_map.x - f64::from(anchor.x - center_px.x) * res,
            y: anchor_map.y + f64::from(anchor.y - center_px.y) * res,
        };
    }

    /// Visible extent as (min, max) corners in Web Mercator meters.
    pub fn visible_extent(&self) -> (Coord<f64>, Coord<f64>) {
        (
            self.screen_to_map(self.screen_rect.left_bottom()),
            self.screen_to_map(self.screen_rect.right_top()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE_CENTER: Coord<f64> = Coord {
        x: -79.457808,
        y: 44.593214,
    };

    fn test_rect() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_forward_projection_origin() {
        let projected = from_lon_lat(Coord { x: 0.0, y: 0.0 });
        assert!(projected.x.abs() < 1e-9);
        assert!(projected.y.abs() < 1e-9);
    }

    #[test]
    fn test_forward_projection_known_point() {
        // EPSG:3857 reference values for (90, 45)
        let projected = from_lon_lat(Coord { x: 90.0, y: 45.0 });
        assert!((projected.x - 10_018_754.171_394_622).abs() < 1e-3);
        assert!((projected.y - 5_621_521.486_192_335).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        for coord in [
            SCENE_CENTER,
            Coord { x: 151.2, y: -33.87 },
            Coord { x: -0.1276, y: 51.5072 },
        ] {
            let round_trip = to_lon_lat(from_lon_lat(coord));
            assert!((round_trip.x - coord.x).abs() < 1e-9);
            assert!((round_trip.y - coord.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_latitude_clamped_to_square_world() {
        let clamped = from_lon_lat(Coord { x: 0.0, y: 89.0 });
        let limit = from_lon_lat(Coord { x: 0.0, y: MAX_LATITUDE });
        assert!((clamped.y - limit.y).abs() < 1e-6);
        // At the clamp latitude the world is square
        assert!((limit.y - HALF_WORLD).abs() < 1.0);
    }

    #[test]
    fn test_resolution_at_zoom_zero() {
        assert!((resolution(0) - 156_543.033_928_040_97).abs() < 1e-6);
        assert!((resolution(1) - resolution(0) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_screen_center_maps_to_view_center() {
        let transform = MapTransform::new(SCENE_CENTER, 14, test_rect());
        let geo = transform.screen_to_geo(test_rect().center());
        assert!((geo.x - SCENE_CENTER.x).abs() < 1e-9);
        assert!((geo.y - SCENE_CENTER.y).abs() < 1e-9);
    }

    #[test]
    fn test_screen_round_trip() {
        let transform = MapTransform::new(SCENE_CENTER, 14, test_rect());
        let pos = Pos2::new(123.0, 456.0);
        let back = transform.map_to_screen(transform.screen_to_map(pos));
        assert!((back.x - pos.x).abs() < 0.01);
        assert!((back.y - pos.y).abs() < 0.01);
    }

    #[test]
    fn test_screen_y_axis_points_north() {
        let transform = MapTransform::new(SCENE_CENTER, 14, test_rect());
        let above = transform.screen_to_geo(Pos2::new(400.0, 100.0));
        let below = transform.screen_to_geo(Pos2::new(400.0, 500.0));
        assert!(above.y > below.y);
    }

    #[test]
    fn test_translate_follows_drag() {
        let mut transform = MapTransform::new(SCENE_CENTER, 14, test_rect());
        let before = transform.center;

        // Dragging content right pans the view west
        transform.translate(Vec2::new(-50.0, 0.0));
        assert!(transform.center.x < before.x);

        // Dragging content down pans the view north
        transform.translate(Vec2::new(0.0, -50.0));
        assert!(transform.center.y > before.y);
    }

    #[test]
    fn test_zoom_about_keeps_anchor_fixed() {
        let mut transform = MapTransform::new(SCENE_CENTER, 14, test_rect());
        let anchor = Pos2::new(600.0, 150.0);
        let anchor_map = transform.screen_to_map(anchor);

        transform.zoom_about(anchor, 15);

        let after = transform.screen_to_map(anchor);
        assert!((after.x - anchor_map.x).abs() < 0.01);
        assert!((after.y - anchor_map.y).abs() < 0.01);
    }

    #[test]
    fn test_visible_extent_ordering() {
        let transform = MapTransform::new(SCENE_CENTER, 14, test_rect());
        let (min, max) = transform.visible_extent();
        assert!(min.x < max.x);
        assert!(min.y < max.y);
        assert!(min.x < transform.center.x && transform.center.x < max.x);
        assert!(min.y < transform.center.y && transform.center.y < max.y);
    }
}

//! Map viewport state.

use crate::geo::{DEFAULT_ZOOM, SCENE_CENTER};
use geo_types::Coord;

/// Zoom bounds for the basemap. OSM serves tiles up to zoom 19.
pub const MIN_ZOOM: u8 = 3;
pub const MAX_ZOOM: u8 = 19;

/// Pan/zoom state of the map canvas plus the acquisition marker.
pub struct MapViewState {
    /// View center, lon/lat degrees.
    pub center: Coord<f64>,
    pub zoom: u8,
    /// Target location marker, lon/lat degrees.
    pub marker: Coord<f64>,
    pub show_scene_centers: bool,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl MapViewState {
    pub fn new() -> Self {
        Self {
            center: SCENE_CENTER,
            zoom: DEFAULT_ZOOM,
            marker: SCENE_CENTER,
            show_scene_centers: true,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Returns the view to the default scene center and zoom.
    pub fn reset(&mut self) {
        self.center = SCENE_CENTER;
        self.zoom = DEFAULT_ZOOM;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_center_on_scene() {
        let view = MapViewState::new();
        assert_eq!(view.center, SCENE_CENTER);
        assert_eq!(view.marker, SCENE_CENTER);
        assert_eq!(view.zoom, DEFAULT_ZOOM);
        assert!(view.show_scene_centers);
    }

    #[test]
    fn test_zoom_clamps_at_bounds() {
        let mut view = MapViewState::new();

        view.zoom = MAX_ZOOM;
        view.zoom_in();
        assert_eq!(view.zoom, MAX_ZOOM);

        view.zoom = MIN_ZOOM;
        view.zoom_out();
        assert_eq!(view.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut view = MapViewState::new();
        view.center = Coord { x: 10.0, y: 20.0 };
        view.zoom = 5;
        view.reset();

        assert_eq!(view.center, SCENE_CENTER);
        assert_eq!(view.zoom, DEFAULT_ZOOM);
    }
}

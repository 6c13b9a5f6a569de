//! Application state management.
//!
//! This module contains all state structures used throughout the application.
//! State is organized by workspace: the band selection workspace and the map
//! workspace each own their own piece, with shared pieces at the root.

mod bands;
mod filters;
mod location;
mod view;

pub use bands::{BandDescriptor, BandSelectionState, BAND_CATALOG, BAND_COUNT};
pub use filters::{ImageSize, QueryFilters, CLOUD_COVERAGE_RANGE};
pub use location::{LeadTime, LocationFormState, SubmitOutcome, SubmitPlan};
pub use view::{MapViewState, MAX_ZOOM, MIN_ZOOM};

use crate::geo::PoiLayer;
use geo_types::Coord;

/// The two workspaces of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkspaceView {
    /// Spectral band selection and imagery fetching.
    #[default]
    Bands,
    /// Map-based target location and notification sign-up.
    Map,
}

impl WorkspaceView {
    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceView::Bands => "Bands",
            WorkspaceView::Map => "Map",
        }
    }

    pub fn all() -> &'static [WorkspaceView] {
        &[WorkspaceView::Bands, WorkspaceView::Map]
    }
}

/// Root application state containing all sub-states.
#[derive(Default)]
pub struct AppState {
    /// Which workspace is shown in the central area
    pub active_view: WorkspaceView,

    /// Band checkbox state for the bands workspace
    pub band_selection: BandSelectionState,

    /// Date range, image size, and cloud coverage filters
    pub filters: QueryFilters,

    /// Last imagery fetch error; replaces the band grid while set
    pub band_error: Option<String>,

    /// Validation message for the filter form
    pub band_message: String,

    /// Imagery requests still in flight
    pub pending_fetches: u8,

    /// Location and notification form state for the map workspace
    pub location_form: LocationFormState,

    /// Map viewport, marker, and overlay toggles
    pub map_view: MapViewState,

    /// Application status message displayed in top bar
    pub status_message: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            band_selection: BandSelectionState::new(),
            filters: QueryFilters::new(),
            location_form: LocationFormState::new(),
            map_view: MapViewState::new(),
            status_message: "Ready".to_string(),
            ..Default::default()
        }
    }

    /// True while any imagery request is outstanding.
    pub fn fetch_in_progress(&self) -> bool {
        self.pending_fetches > 0
    }

    /// Moves the acquisition marker to a (lon, lat) point and syncs the
    /// location form inputs and nearest scene-center highlight to it.
    pub fn place_marker(&mut self, poi: &mut PoiLayer, lon_lat: Coord<f64>) {
        self.map_view.marker = lon_lat;
        self.location_form.set_point(lon_lat);
        poi.highlight_nearest(lon_lat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::PoiFeature;

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.active_view, WorkspaceView::Bands);
        assert_eq!(state.status_message, "Ready");
        assert!(!state.fetch_in_progress());
        assert!(state.band_error.is_none());
    }

    #[test]
    fn test_place_marker_syncs_form_and_highlight() {
        let mut state = AppState::new();
        let mut poi = PoiLayer::new();
        poi.features.push(PoiFeature {
            coord: Coord { x: -79.4, y: 44.6 },
            label: Some("Alpha".to_string()),
        });
        poi.features.push(PoiFeature {
            coord: Coord { x: -62.0, y: 51.4 },
            label: Some("Beta".to_string()),
        });

        state.place_marker(&mut poi, Coord { x: -61.9, y: 51.3 });

        assert_eq!(state.map_view.marker, Coord { x: -61.9, y: 51.3 });
        assert_eq!(state.location_form.lat_input, "51.300000");
        assert_eq!(state.location_form.lng_input, "-61.900000");
        assert_eq!(poi.highlighted, Some(1));
    }
}

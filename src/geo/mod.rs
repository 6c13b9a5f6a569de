//! Geographic math and map feature data.
//!
//! This module provides the Web Mercator projection used by the map view,
//! spherical distance math, the fixed scene geometry, and the KML-backed
//! point-of-interest layer.

pub mod mercator;
mod poi;
mod scene;
pub mod sphere;

pub use mercator::MapTransform;
pub use poi::{NearestPoi, PoiFeature, PoiLayer};
pub use scene::{DEFAULT_ZOOM, SCENE_CENTER, SCENE_FOOTPRINT};

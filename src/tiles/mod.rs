//! OpenStreetMap raster tile layer.
//!
//! This module provides functionality for:
//! - Mapping the visible extent to slippy-map tile coordinates
//! - Downloading tiles off the UI thread
//! - Caching decoded tiles as egui textures

mod cache;
mod coords;
mod fetch;

pub use cache::TileTextureCache;
pub use coords::{tiles_in_extent, TileCoord};
pub use fetch::{TileFetchChannel, TileFetchResult};

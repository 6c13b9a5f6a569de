//! Texture cache for downloaded map tiles.
//!
//! Stores decoded tiles as egui textures so the canvas can redraw the
//! basemap every frame without re-fetching or re-uploading anything.

use super::coords::TileCoord;
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use std::collections::{HashMap, HashSet};

/// Cache of tile textures keyed by tile coordinate.
///
/// In-flight and failed fetches are tracked so the canvas does not
/// re-request the same tile every frame.
pub struct TileTextureCache {
    textures: HashMap<TileCoord, TextureHandle>,
    pending: HashSet<TileCoord>,
    failed: HashSet<TileCoord>,
}

impl Default for TileTextureCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TileTextureCache {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Returns the texture for a tile if it has been loaded.
    pub fn texture(&self, coord: &TileCoord) -> Option<&TextureHandle> {
        self.textures.get(coord)
    }

    /// Whether this tile is loaded, in flight, or known to have failed.
    pub fn is_requested(&self, coord: &TileCoord) -> bool {
        self.textures.contains_key(coord)
            || self.pending.contains(coord)
            || self.failed.contains(coord)
    }

    /// Marks a tile as having an in-flight fetch.
    pub fn mark_pending(&mut self, coord: TileCoord) {
        self.pending.insert(coord);
    }

    /// Uploads a decoded tile image and stores its texture.
    pub fn insert(&mut self, ctx: &egui::Context, coord: TileCoord, image: ColorImage) {
        let texture = ctx.load_texture(
            format!("tile_{}_{}_{}", coord.zoom, coord.x, coord.y),
            image,
            TextureOptions {
                magnification: egui::TextureFilter::Linear,
                minification: egui::TextureFilter::Linear,
                ..Default::default()
            },
        );

        self.pending.remove(&coord);
        self.textures.insert(coord, texture);
    }

    /// Records a failed fetch so the tile is not retried this session.
    pub fn mark_failed(&mut self, coord: TileCoord) {
        self.pending.remove(&coord);
        self.failed.insert(coord);
    }

    /// Drops textures more than one zoom level away from the active one.
    ///
    /// Keeps GPU memory bounded while zooming around. Failed markers for
    /// other levels are dropped too so those tiles get a fresh attempt.
    pub fn prune(&mut self, active_zoom: u8) {
        let before = self.textures.len();
        self.textures
            .retain(|coord, _| coord.zoom.abs_diff(active_zoom) <= 1);
        self.failed.retain(|coord| coord.zoom == active_zoom);

        if self.textures.len() < before {
            log::debug!(
                "Pruned tile cache: {} -> {} textures",
                before,
                self.textures.len()
            );
        }
    }
}

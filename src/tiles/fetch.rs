//! Tile download pipeline for the OpenStreetMap raster layer.
//!
//! Uses channel-based communication to bridge async downloads
//! with egui's synchronous update loop.

use super::coords::TileCoord;
use eframe::egui::{self, ColorImage};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Result of a tile fetch operation.
pub enum TileFetchResult {
    /// Tile downloaded and decoded successfully
    Loaded { coord: TileCoord, image: ColorImage },
    /// Fetch failed with an error message
    Error { coord: TileCoord, message: String },
}

/// Channel-based downloader for map tiles.
///
/// Fetches run off the UI thread and post their results back through
/// an mpsc channel polled from update().
pub struct TileFetchChannel {
    sender: Sender<TileFetchResult>,
    receiver: Receiver<TileFetchResult>,
}

impl Default for TileFetchChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl TileFetchChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Spawns an async fetch for a single tile.
    #[cfg(target_arch = "wasm32")]
    pub fn fetch(&self, ctx: egui::Context, coord: TileCoord) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_tile(coord).await;
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Native fetch on a background thread.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn fetch(&self, ctx: egui::Context, coord: TileCoord) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = fetch_tile_blocking(coord);
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed fetch.
    pub fn try_recv(&self) -> Option<TileFetchResult> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_tile(coord: TileCoord) -> TileFetchResult {
    let url = coord.url();
    log::debug!("Fetching tile {}", url);

    let response = match reqwest::get(&url).await {
        Ok(response) => response,
        Err(e) => {
            return TileFetchResult::Error {
                coord,
                message: format!("Request failed: {}", e),
            }
        }
    };

    if !response.status().is_success() {
        return TileFetchResult::Error {
            coord,
            message: format!("HTTP {}", response.status()),
        };
    }

    match response.bytes().await {
        Ok(bytes) => decode_tile(coord, &bytes),
        Err(e) => TileFetchResult::Error {
            coord,
            message: format!("Read failed: {}", e),
        },
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_tile_blocking(coord: TileCoord) -> TileFetchResult {
    let url = coord.url();
    log::debug!("Fetching tile {}", url);

    // The OSM tile server requires an identifying user agent
    let client = match reqwest::blocking::Client::builder()
        .user_agent(concat!("landsat-workbench/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            return TileFetchResult::Error {
                coord,
                message: format!("Client setup failed: {}", e),
            }
        }
    };

    let response = match client.get(&url).send() {
        Ok(response) => response,
        Err(e) => {
            return TileFetchResult::Error {
                coord,
                message: format!("Request failed: {}", e),
            }
        }
    };

    if !response.status().is_success() {
        return TileFetchResult::Error {
            coord,
            message: format!("HTTP {}", response.status()),
        };
    }

    match response.bytes() {
        Ok(bytes) => decode_tile(coord, &bytes),
        Err(e) => TileFetchResult::Error {
            coord,
            message: format!("Read failed: {}", e),
        },
    }
}

/// Decodes PNG tile bytes into an egui color image.
fn decode_tile(coord: TileCoord, bytes: &[u8]) -> TileFetchResult {
    let decoded = match image::load_from_memory(bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            return TileFetchResult::Error {
                coord,
                message: format!("Decode failed: {}", e),
            }
        }
    };

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

    TileFetchResult::Loaded { coord, image }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_garbage() {
        let coord = TileCoord {
            zoom: 1,
            x: 0,
            y: 0,
        };
        match decode_tile(coord, b"definitely not a png") {
            TileFetchResult::Error { message, .. } => {
                assert!(message.starts_with("Decode failed"));
            }
            TileFetchResult::Loaded { .. } => panic!("garbage bytes decoded as an image"),
        }
    }

    #[test]
    fn test_decode_minimal_png() {
        // 1x1 opaque red pixel
        let mut png = Vec::new();
        {
            use image::{ImageBuffer, Rgba};
            let pixel = ImageBuffer::from_pixel(1, 1, Rgba([255u8, 0, 0, 255]));
            image::DynamicImage::ImageRgba8(pixel)
                .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
                .unwrap();
        }

        let coord = TileCoord {
            zoom: 0,
            x: 0,
            y: 0,
        };
        match decode_tile(coord, &png) {
            TileFetchResult::Loaded { image, .. } => {
                assert_eq!(image.width(), 1);
                assert_eq!(image.height(), 1);
            }
            TileFetchResult::Error { message, .. } => panic!("decode failed: {}", message),
        }
    }
}

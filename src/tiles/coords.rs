//! Slippy-map tile coordinates and grid math.

use crate::geo::mercator::{HALF_WORLD, MAX_LATITUDE};
use geo_types::Coord;

/// OpenStreetMap raster tile endpoint.
const TILE_URL_BASE: &str = "https://tile.openstreetmap.org";

/// Identifies one tile in the slippy-map pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    /// Returns the tile containing a (lon, lat) point.
    ///
    /// Longitude wraps across the antimeridian; latitude is clamped to
    /// the Web Mercator range.
    pub fn from_lon_lat(lon_lat: Coord<f64>, zoom: u8) -> Self {
        let n = f64::from(tile_count(zoom));
        let lat_rad = lon_lat.y.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

        let x_raw = ((lon_lat.x + 180.0) / 360.0 * n).floor() as i64;
        let y_raw = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI)
            / 2.0
            * n)
            .floor() as i64;

        let count = i64::from(tile_count(zoom));
        Self {
            zoom,
            x: (((x_raw % count) + count) % count) as u32,
            y: y_raw.clamp(0, count - 1) as u32,
        }
    }

    /// URL of this tile on the OSM tile server.
    pub fn url(&self) -> String {
        format!("{}/{}/{}/{}.png", TILE_URL_BASE, self.zoom, self.x, self.y)
    }

    /// Web Mercator extent of this tile as (min, max) corners in meters.
    pub fn mercator_extent(&self) -> (Coord<f64>, Coord<f64>) {
        let span = tile_span(self.zoom);
        let min_x = -HALF_WORLD + f64::from(self.x) * span;
        let max_y = HALF_WORLD - f64::from(self.y) * span;

        (
            Coord {
                x: min_x,
                y: max_y - span,
            },
            Coord {
                x: min_x + span,
                y: max_y,
            },
        )
    }
}

/// Number of tiles along one axis at the given zoom.
pub fn tile_count(zoom: u8) -> u32 {
    1u32 << zoom
}

/// Width of one tile in Web Mercator meters at the given zoom.
fn tile_span(zoom: u8) -> f64 {
    2.0 * HALF_WORLD / f64::from(tile_count(zoom))
}

/// Returns the tiles covering a Web Mercator extent at the given zoom,
/// in row-major order.
///
/// Indices are clamped to the grid; the extent is assumed not to cross
/// the antimeridian.
pub fn tiles_in_extent(min: Coord<f64>, max: Coord<f64>, zoom: u8) -> Vec<TileCoord> {
    let span = tile_span(zoom);
    let max_index = i64::from(tile_count(zoom)) - 1;

    let clamp_index = |value: f64| (value.floor() as i64).clamp(0, max_index) as u32;

    let x_min = clamp_index((min.x + HALF_WORLD) / span);
    let x_max = clamp_index((max.x + HALF_WORLD) / span);
    // Tile rows count down from the north edge
    let y_min = clamp_index((HALF_WORLD - max.y) / span);
    let y_max = clamp_index((HALF_WORLD - min.y) / span);

    let mut tiles = Vec::with_capacity(((x_max - x_min + 1) * (y_max - y_min + 1)) as usize);
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            tiles.push(TileCoord { zoom, x, y });
        }
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::mercator;

    #[test]
    fn test_tile_count_doubles_per_zoom() {
        assert_eq!(tile_count(0), 1);
        assert_eq!(tile_count(1), 2);
        assert_eq!(tile_count(14), 16_384);
    }

    #[test]
    fn test_zoom_zero_has_single_tile() {
        for lon_lat in [
            Coord { x: 0.0, y: 0.0 },
            Coord {
                x: -79.457808,
                y: 44.593214,
            },
            Coord { x: 179.9, y: -85.0 },
        ] {
            let tile = TileCoord::from_lon_lat(lon_lat, 0);
            assert_eq!((tile.x, tile.y), (0, 0));
        }
    }

    #[test]
    fn test_origin_lands_in_southeast_quadrant_at_zoom_one() {
        let tile = TileCoord::from_lon_lat(Coord { x: 0.0, y: 0.0 }, 1);
        assert_eq!((tile.x, tile.y), (1, 1));
    }

    #[test]
    fn test_longitude_wraps() {
        let wrapped = TileCoord::from_lon_lat(Coord { x: 190.0, y: 10.0 }, 2);
        let direct = TileCoord::from_lon_lat(Coord { x: -170.0, y: 10.0 }, 2);
        assert_eq!(wrapped, direct);
    }

    #[test]
    fn test_extent_contains_projected_point() {
        let lon_lat = Coord {
            x: -79.457808,
            y: 44.593214,
        };
        let tile = TileCoord::from_lon_lat(lon_lat, 14);
        let projected = mercator::from_lon_lat(lon_lat);
        let (min, max) = tile.mercator_extent();

        assert!(min.x <= projected.x && projected.x < max.x);
        assert!(min.y <= projected.y && projected.y < max.y);
    }

    #[test]
    fn test_root_tile_covers_world() {
        let (min, max) = TileCoord {
            zoom: 0,
            x: 0,
            y: 0,
        }
        .mercator_extent();
        assert!((min.x + HALF_WORLD).abs() < 1e-6);
        assert!((min.y + HALF_WORLD).abs() < 1e-6);
        assert!((max.x - HALF_WORLD).abs() < 1e-6);
        assert!((max.y - HALF_WORLD).abs() < 1e-6);
    }

    #[test]
    fn test_tiles_in_extent_around_origin() {
        // A small box straddling the origin touches all four center tiles
        let tiles = tiles_in_extent(
            Coord { x: -1.0, y: -1.0 },
            Coord { x: 1.0, y: 1.0 },
            1,
        );
        assert_eq!(tiles.len(), 4);
        assert!(tiles.contains(&TileCoord { zoom: 1, x: 0, y: 0 }));
        assert!(tiles.contains(&TileCoord { zoom: 1, x: 1, y: 1 }));
    }

    #[test]
    fn test_tiles_in_extent_clamps_to_grid() {
        let tiles = tiles_in_extent(
            Coord {
                x: -HALF_WORLD * 2.0,
                y: -HALF_WORLD * 2.0,
            },
            Coord {
                x: HALF_WORLD * 2.0,
                y: HALF_WORLD * 2.0,
            },
            1,
        );
        assert_eq!(tiles.len(), 4);
    }

    #[test]
    fn test_url_format() {
        let tile = TileCoord {
            zoom: 14,
            x: 4575,
            y: 5891,
        };
        assert_eq!(
            tile.url(),
            "https://tile.openstreetmap.org/14/4575/5891.png"
        );
    }
}

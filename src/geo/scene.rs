//! Fixed geometry for the default Landsat acquisition scene.

use geo_types::Coord;

/// Default view center (lon, lat).
pub const SCENE_CENTER: Coord<f64> = Coord {
    x: -79.457808,
    y: 44.593214,
};

/// Default zoom level for the scene view.
pub const DEFAULT_ZOOM: u8 = 14;

/// Corner coordinates (lon, lat) of the highlighted scene footprint.
pub const SCENE_FOOTPRINT: [Coord<f64>; 4] = [
    Coord {
        x: -61.99896,
        y: 51.35789,
    },
    Coord {
        x: -58.67466,
        y: 51.28223,
    },
    Coord {
        x: -58.8617,
        y: 49.17268,
    },
    Coord {
        x: -62.04239,
        y: 49.2429,
    },
];

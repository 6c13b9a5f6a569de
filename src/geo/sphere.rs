//! Great-circle distance on a spherical earth.

use geo_types::Coord;

/// Mean earth radius in meters (IUGG).
pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// Returns the great-circle distance in meters between two (lon, lat)
/// points, using the haversine formula on a sphere of
/// [`MEAN_EARTH_RADIUS`].
pub fn great_circle_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let half_delta_lat = (b.y - a.y).to_radians() / 2.0;
    let half_delta_lon = (b.x - a.x).to_radians() / 2.0;

    let h = half_delta_lat.sin().powi(2)
        + half_delta_lon.sin().powi(2) * lat_a.cos() * lat_b.cos();

    2.0 * MEAN_EARTH_RADIUS * h.sqrt().atan2((1.0 - h).sqrt())
}

use crate::models::TransportMode;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Estimate a one-way commute in minutes from the straight-line distance
/// between two points and the average speed of the chosen transport mode.
///
/// This is the geometry path used when real coordinates are known; the
/// synthetic generator fabricates commute minutes directly instead.
#[inline]
pub fn estimate_commute_minutes(
    from_lat: f64,
    from_lon: f64,
    to_lat: f64,
    to_lon: f64,
    mode: TransportMode,
) -> u32 {
    let distance_km = haversine_distance(from_lat, from_lon, to_lat, to_lon);
    (distance_km / mode.speed_kmh() * 60.0).round() as u32
}

//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two latitude/longitude pairs
/// given in degrees.
///
/// Symmetric, and exactly zero when both coordinates are identical.
///
/// # Examples
///
/// ```
/// use open_route::distance::haversine_km;
///
/// // One degree of latitude along a meridian.
/// let d = haversine_km(0.0, 0.0, 1.0, 0.0);
/// assert!((d - 111.195).abs() < 1e-3);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let half_dlat = (dlat / 2.0).sin();
    let half_dlon = (dlon / 2.0).sin();
    let a = half_dlat * half_dlat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * half_dlon * half_dlon;
    // Rounding can push `a` just past 1 for antipodal points.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

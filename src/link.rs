//! Navigation deep links.

use crate::models::Point;

const GOOGLE_MAPS_DIR: &str = "https://www.google.com/maps/dir/?api=1";

fn coords(p: &Point) -> String {
    format!("{},{}", p.lat(), p.lon())
}

/// Renders an ordered stop list as a Google Maps directions link.
///
/// The first point is the origin, the last the destination, and any points
/// in between are `|`-separated waypoints. Fewer than two points yield an
/// empty string.
///
/// # Examples
///
/// ```
/// use open_route::link::google_maps_url;
/// use open_route::models::Point;
///
/// let stops = vec![
///     Point::new("A", "", 50.85, 4.37),
///     Point::new("B", "", 50.83, 4.36),
///     Point::new("C", "", 50.81, 4.38),
/// ];
/// assert_eq!(
///     google_maps_url(&stops),
///     "https://www.google.com/maps/dir/?api=1&origin=50.85,4.37\
///      &destination=50.81,4.38&waypoints=50.83,4.36"
/// );
/// assert_eq!(google_maps_url(&stops[..1]), "");
/// ```
pub fn google_maps_url(points: &[Point]) -> String {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => (first, last),
        _ => return String::new(),
    };

    let mut url = format!(
        "{GOOGLE_MAPS_DIR}&origin={}&destination={}",
        coords(first),
        coords(last)
    );

    let waypoints: Vec<String> = points[1..points.len() - 1].iter().map(coords).collect();
    if !waypoints.is_empty() {
        url.push_str("&waypoints=");
        url.push_str(&waypoints.join("|"));
    }
    url
}

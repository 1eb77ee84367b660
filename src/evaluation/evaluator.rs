//! Open-route length evaluation.

use crate::distance::DistanceMatrix;
use crate::models::Point;

/// Sums matrix distances between consecutive entries of `route`.
///
/// Routes are open: there is no return leg from the last stop to the first.
/// Empty and single-stop routes have length zero.
///
/// # Panics
///
/// Panics if any index is out of bounds for the matrix.
///
/// # Examples
///
/// ```
/// use open_route::distance::DistanceMatrix;
/// use open_route::evaluation::route_length;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 4.0,
///     1.0, 0.0, 2.0,
///     4.0, 2.0, 0.0,
/// ]).unwrap();
/// assert_eq!(route_length(&dm, &[0, 1, 2]), 3.0);
/// assert_eq!(route_length(&dm, &[0, 2, 1]), 6.0);
/// ```
pub fn route_length(distances: &DistanceMatrix, route: &[usize]) -> f64 {
    route
        .windows(2)
        .map(|pair| distances.get(pair[0], pair[1]))
        .sum()
}

/// Sums direct haversine distances between consecutive points.
///
/// Used when the caller fixes the order, so no matrix is built.
pub fn path_length<'a, I>(points: I) -> f64
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut total = 0.0;
    let mut prev: Option<&Point> = None;
    for p in points {
        if let Some(q) = prev {
            total += q.distance_to(p);
        }
        prev = Some(p);
    }
    total
}

//! Fixed-end repair for constructed routes.

/// Moves `end` to the tail of `route`, keeping the relative order of every
/// other index.
///
/// This is a structural repair, not a re-optimization: it may lengthen the
/// route, leaving the refiner to recover. A route that already ends at
/// `end`, or that does not contain it, is returned unchanged.
///
/// # Examples
///
/// ```
/// use open_route::constructive::force_end;
///
/// assert_eq!(force_end(vec![0, 2, 1, 3], 2), vec![0, 1, 3, 2]);
/// assert_eq!(force_end(vec![0, 1, 2], 2), vec![0, 1, 2]);
/// ```
pub fn force_end(mut route: Vec<usize>, end: usize) -> Vec<usize> {
    if route.last() == Some(&end) {
        return route;
    }
    if let Some(pos) = route.iter().position(|&i| i == end) {
        let moved = route.remove(pos);
        route.push(moved);
    }
    route
}

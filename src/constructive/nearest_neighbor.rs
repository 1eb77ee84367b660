//! Nearest-neighbor constructive heuristic for open routes.
//!
//! Builds a path greedily: starting from the designated start, always append
//! the closest stop not yet on the path.
//!
//! # Complexity
//!
//! O(n²) time, O(n) extra space.
//!
//! # Tie-breaking
//!
//! Among equally distant candidates the lowest index wins, so the result is
//! fully determined by the matrix and the start index.

use crate::distance::DistanceMatrix;

/// Constructs an open route over all matrix indices, starting at `start`.
///
/// Returns a permutation of `0..distances.size()` whose first element is
/// `start`. An empty matrix yields an empty route.
///
/// # Panics
///
/// Panics if `start` is out of bounds for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use open_route::distance::DistanceMatrix;
/// use open_route::constructive::nearest_neighbor_open;
///
/// // Four stops on a line: 0 -- 1 -- 2 -- 3
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 2.0, 3.0,
///     1.0, 0.0, 1.0, 2.0,
///     2.0, 1.0, 0.0, 1.0,
///     3.0, 2.0, 1.0, 0.0,
/// ]).unwrap();
///
/// assert_eq!(nearest_neighbor_open(&dm, 0), vec![0, 1, 2, 3]);
/// assert_eq!(nearest_neighbor_open(&dm, 2), vec![2, 1, 0, 3]);
/// ```
pub fn nearest_neighbor_open(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }

    let mut remaining: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut route = Vec::with_capacity(n);
    route.push(start);
    let mut current = start;

    // `remaining` stays sorted, so the matrix's earliest-candidate tie-break
    // selects the lowest index.
    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        remaining.retain(|&i| i != next);
        route.push(next);
        current = next;
    }

    route
}

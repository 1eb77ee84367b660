//! 2-opt improvement for open routes with fixed endpoints.
//!
//! # Algorithm
//!
//! A sweep visits every interior position pair `(i, k)` with
//! `0 < i < k < n - 1`, `i` outer and `k` inner. For each pair the candidate
//! is the current best route with the segment `[i..=k]` reversed; the first
//! and last positions are never part of a reversed segment.
//!
//! A candidate whose total length undercuts the best by more than the
//! tolerance replaces it immediately (first-improvement), and the same sweep
//! continues from the updated route. Sweeps repeat until one completes
//! without an accepted move.
//!
//! # Complexity
//!
//! O(n²) candidates per sweep, each evaluated in O(n), so O(n³) per sweep.
//! There is no sweep cap; callers needing a time bound must impose one
//! externally.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::evaluation::route_length;

/// Minimum length decrease, in kilometers, for a 2-opt move to be accepted.
pub const DEFAULT_IMPROVEMENT_TOLERANCE: f64 = 1e-12;

/// Applies 2-opt to an open route, keeping its first and last entries fixed.
///
/// Uses [`DEFAULT_IMPROVEMENT_TOLERANCE`]. Routes with fewer than four
/// entries have no interior pair and are returned unchanged.
///
/// # Examples
///
/// ```
/// use open_route::distance::DistanceMatrix;
/// use open_route::local_search::two_opt_fixed_ends;
///
/// // Unit square 0=(0,0) 1=(1,0) 2=(1,1) 3=(0,1)
/// let s = 2f64.sqrt();
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, s,   1.0,
///     1.0, 0.0, 1.0, s,
///     s,   1.0, 0.0, 1.0,
///     1.0, s,   1.0, 0.0,
/// ]).unwrap();
///
/// // 0 -> 2 -> 1 -> 3 crosses itself.
/// assert_eq!(two_opt_fixed_ends(&[0, 2, 1, 3], &dm), vec![0, 1, 2, 3]);
/// ```
pub fn two_opt_fixed_ends(route: &[usize], distances: &DistanceMatrix) -> Vec<usize> {
    two_opt_fixed_ends_with_tolerance(route, distances, DEFAULT_IMPROVEMENT_TOLERANCE)
}

/// Applies 2-opt with an explicit acceptance tolerance in kilometers.
///
/// # Panics
///
/// Panics if the route contains an index out of bounds for the matrix.
pub fn two_opt_fixed_ends_with_tolerance(
    route: &[usize],
    distances: &DistanceMatrix,
    tolerance: f64,
) -> Vec<usize> {
    let mut best = route.to_vec();
    let n = best.len();
    if n < 4 {
        return best;
    }

    let mut best_len = route_length(distances, &best);
    let mut candidate = best.clone();
    let mut sweeps = 0usize;
    let mut improved = true;

    while improved {
        improved = false;
        sweeps += 1;

        for i in 1..n - 2 {
            for k in i + 1..n - 1 {
                candidate.copy_from_slice(&best);
                candidate[i..=k].reverse();
                let len = route_length(distances, &candidate);
                if len + tolerance < best_len {
                    std::mem::swap(&mut best, &mut candidate);
                    best_len = len;
                    improved = true;
                }
            }
        }

        log::trace!("2-opt sweep {sweeps}: length {best_len:.6} km, improved: {improved}");
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn unit_square() -> DistanceMatrix {
        let s = 2f64.sqrt();
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, s, 1.0, //
                1.0, 0.0, 1.0, s, //
                s, 1.0, 0.0, 1.0, //
                1.0, s, 1.0, 0.0,
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_2opt_uncrosses() {
        let dm = unit_square();
        let improved = two_opt_fixed_ends(&[0, 2, 1, 3], &dm);
        assert_eq!(improved, vec![0, 1, 2, 3]);
        assert!((route_length(&dm, &improved) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = unit_square();
        assert_eq!(two_opt_fixed_ends(&[0, 1, 2, 3], &dm), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_2opt_short_routes_unchanged() {
        let dm = unit_square();
        assert!(two_opt_fixed_ends(&[], &dm).is_empty());
        assert_eq!(two_opt_fixed_ends(&[2], &dm), vec![2]);
        assert_eq!(two_opt_fixed_ends(&[0, 3], &dm), vec![0, 3]);
        // Three stops: no interior pair, even if a better order exists.
        assert_eq!(two_opt_fixed_ends(&[0, 2, 1], &dm), vec![0, 2, 1]);
    }

    #[test]
    fn test_2opt_keeps_endpoints() {
        let points: Vec<Point> = (0..8)
            .map(|i| {
                let t = f64::from(i);
                Point::new(format!("P{i}"), "", (t * 1.7).sin(), (t * 2.3).cos())
            })
            .collect();
        let dm = DistanceMatrix::from_points(&points);
        let initial = vec![3, 0, 6, 1, 7, 2, 4, 5];
        let improved = two_opt_fixed_ends(&initial, &dm);

        assert_eq!(improved[0], 3);
        assert_eq!(improved[7], 5);
        let mut sorted = improved.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..8).collect::<Vec<_>>());
        assert!(route_length(&dm, &improved) <= route_length(&dm, &initial));
    }

    #[test]
    fn test_2opt_first_improvement_continues_sweep() {
        // Grid stops under Manhattan distance. One sweep from the identity
        // route accepts (1, 3), (1, 4) and (2, 3), each against the route left
        // by the previous move. Restarting the sweep after each move ends at
        // [0, 1, 4, 2, 3, 5]; applying only the best move per sweep ends at
        // [0, 1, 2, 4, 3, 5]. All three have length 11.
        let grid: [(f64, f64); 6] = [
            (3.0, 2.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (4.0, 0.0),
            (0.0, 1.0),
            (4.0, 2.0),
        ];
        let mut data = Vec::new();
        for a in grid {
            for b in grid {
                data.push((a.0 - b.0).abs() + (a.1 - b.1).abs());
            }
        }
        let dm = DistanceMatrix::from_data(6, data).expect("valid");
        let initial = [0, 1, 2, 3, 4, 5];
        assert_eq!(route_length(&dm, &initial), 17.0);

        let improved = two_opt_fixed_ends(&initial, &dm);
        assert_eq!(improved, vec![0, 4, 2, 1, 3, 5]);
        assert_eq!(route_length(&dm, &improved), 11.0);
    }

    #[test]
    fn test_2opt_line_reaches_optimum() {
        // Stops on a line at positions 0, 3, 1, 2, 4 (index = stop id).
        let pos = [0.0, 3.0, 1.0, 2.0, 4.0];
        let mut data = Vec::new();
        for a in pos {
            for b in pos {
                data.push(f64::abs(a - b));
            }
        }
        let dm = DistanceMatrix::from_data(5, data).expect("valid");
        let improved = two_opt_fixed_ends(&[0, 1, 2, 3, 4], &dm);
        assert_eq!(improved, vec![0, 2, 3, 1, 4]);
        assert!((route_length(&dm, &improved) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_2opt_tolerance_blocks_small_gains() {
        let dm = unit_square();
        let improved = two_opt_fixed_ends_with_tolerance(&[0, 2, 1, 3], &dm, 10.0);
        assert_eq!(improved, vec![0, 2, 1, 3]);
    }
}

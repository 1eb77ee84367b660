//! Engine entry point: validation, ordering, and plan assembly.
//!
//! All input arrives as call parameters and every intermediate structure
//! (distance matrix, index route) lives only for the duration of one call,
//! so independent calls may run concurrently without coordination.
//!
//! # Round trips
//!
//! When the start and end name the same stop and there are at least two
//! stops, a copy of the start is appended as a distinct end stop. The plan
//! then lists that stop at both ends and the distance includes the leg back.

use std::collections::HashMap;

use crate::config::OptimizeOptions;
use crate::constructive::{force_end, nearest_neighbor_open};
use crate::distance::DistanceMatrix;
use crate::error::{RouteError, StopRole};
use crate::evaluation::{path_length, route_length};
use crate::link::google_maps_url;
use crate::local_search::two_opt_fixed_ends_with_tolerance;
use crate::models::{Point, RoutePlan};

/// Orders stops from `start_name` to `end_name`, minimizing great-circle
/// distance with nearest-neighbor construction and fixed-end 2-opt.
///
/// # Errors
///
/// See [`plan_route`].
///
/// # Examples
///
/// ```
/// use open_route::models::Point;
/// use open_route::optimize_open_route;
///
/// let stops = vec![
///     Point::new("Office", "", 0.0, 0.0),
///     Point::new("C", "", 3.0, 0.0),
///     Point::new("B", "", 2.0, 0.0),
///     Point::new("A", "", 1.0, 0.0),
/// ];
/// let plan = optimize_open_route(&stops, "Office", "C").unwrap();
/// assert_eq!(plan.names(), vec!["Office", "A", "B", "C"]);
/// assert!((plan.distance_km() - 333.585).abs() < 1e-3);
/// ```
pub fn optimize_open_route(
    points: &[Point],
    start_name: &str,
    end_name: &str,
) -> Result<RoutePlan, RouteError> {
    plan_route(points, start_name, end_name, &OptimizeOptions::default())
}

/// Keeps the caller's order, moving only the start to the front and the end
/// to the back. The distance is the direct consecutive haversine sum.
///
/// # Errors
///
/// See [`plan_route`].
pub fn fixed_order_route(
    points: &[Point],
    start_name: &str,
    end_name: &str,
) -> Result<RoutePlan, RouteError> {
    let options = OptimizeOptions::default().with_auto_optimize(false);
    plan_route(points, start_name, end_name, &options)
}

/// Validates the input and produces a plan according to `options`.
///
/// # Errors
///
/// - [`RouteError::DuplicateName`] if two points share a name.
/// - [`RouteError::InvalidCoordinates`] if any point is off the globe.
/// - [`RouteError::UnknownStop`] if the start or end name matches no point.
///
/// Validation completes before any distance is computed.
pub fn plan_route(
    points: &[Point],
    start_name: &str,
    end_name: &str,
    options: &OptimizeOptions,
) -> Result<RoutePlan, RouteError> {
    let (start, resolved_end) = resolve_endpoints(points, start_name, end_name)?;

    let mut stops: Vec<&Point> = points.iter().collect();
    let end = if start == resolved_end && points.len() >= 2 {
        stops.push(&points[start]);
        stops.len() - 1
    } else {
        resolved_end
    };

    log::debug!(
        "planning route over {} stops ({start_name} -> {end_name}), auto_optimize: {}",
        stops.len(),
        options.auto_optimize
    );

    let (order, distance_km) = if options.auto_optimize {
        let distances = DistanceMatrix::from_points(stops.iter().copied());
        let order = open_route_order(&distances, start, end, options.improvement_tolerance);
        let length = route_length(&distances, &order);
        (order, length)
    } else {
        let order = fixed_order(stops.len(), start, end);
        let length = path_length(order.iter().map(|&i| stops[i]));
        (order, length)
    };

    let ordered: Vec<Point> = order.iter().map(|&i| stops[i].clone()).collect();
    let url = google_maps_url(&ordered);
    Ok(RoutePlan::new(ordered, distance_km, url))
}

/// Builds an index route from `start` to `end` over every matrix index:
/// nearest-neighbor construction, fixed-end repair, then 2-opt.
///
/// The result is a permutation of `0..distances.size()` beginning at `start`
/// and, when `start != end`, ending at `end`.
///
/// # Panics
///
/// Panics if `start` or `end` is out of bounds for the matrix.
pub fn open_route_order(
    distances: &DistanceMatrix,
    start: usize,
    end: usize,
    tolerance: f64,
) -> Vec<usize> {
    let constructed = force_end(nearest_neighbor_open(distances, start), end);
    let constructed_len = route_length(distances, &constructed);

    let refined = two_opt_fixed_ends_with_tolerance(&constructed, distances, tolerance);
    let refined_len = route_length(distances, &refined);

    log::debug!(
        "nearest-neighbor length {constructed_len:.3} km, after 2-opt {refined_len:.3} km"
    );
    refined
}

/// Identity order over `0..n` with `start` moved to the front and `end` to
/// the back; everything else keeps its relative position.
fn fixed_order(n: usize, start: usize, end: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    if let Some(pos) = order.iter().position(|&i| i == start) {
        let moved = order.remove(pos);
        order.insert(0, moved);
    }
    force_end(order, end)
}

/// Checks names and coordinates, then resolves the endpoint names to indices.
fn resolve_endpoints(
    points: &[Point],
    start_name: &str,
    end_name: &str,
) -> Result<(usize, usize), RouteError> {
    let mut index_by_name: HashMap<&str, usize> = HashMap::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if index_by_name.insert(p.name(), i).is_some() {
            return Err(RouteError::DuplicateName {
                name: p.name().to_string(),
            });
        }
        if !p.has_valid_coordinates() {
            return Err(RouteError::InvalidCoordinates {
                name: p.name().to_string(),
                lat: p.lat(),
                lon: p.lon(),
            });
        }
    }

    let lookup = |role: StopRole, name: &str| {
        index_by_name
            .get(name)
            .copied()
            .ok_or_else(|| RouteError::UnknownStop {
                role,
                name: name.to_string(),
            })
    };
    Ok((lookup(StopRole::Start, start_name)?, lookup(StopRole::End, end_name)?))
}

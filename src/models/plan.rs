//! Optimization result type.

use super::Point;

/// The ordered stops produced by one optimization call.
///
/// # Examples
///
/// ```
/// use open_route::models::{Point, RoutePlan};
///
/// let plan = RoutePlan::new(vec![Point::new("A", "", 0.0, 0.0)], 0.0, String::new());
/// assert_eq!(plan.len(), 1);
/// assert!(plan.google_maps_url().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    ordered: Vec<Point>,
    distance_km: f64,
    google_maps_url: String,
}

impl RoutePlan {
    /// Creates a plan from its parts.
    pub fn new(ordered: Vec<Point>, distance_km: f64, google_maps_url: String) -> Self {
        Self {
            ordered,
            distance_km,
            google_maps_url,
        }
    }

    /// Stops in visiting order.
    pub fn ordered(&self) -> &[Point] {
        &self.ordered
    }

    /// Names of the stops in visiting order.
    pub fn names(&self) -> Vec<&str> {
        self.ordered.iter().map(Point::name).collect()
    }

    /// Unrounded total great-circle distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Total distance rounded to three decimal places (meter resolution).
    pub fn rounded_distance_km(&self) -> f64 {
        (self.distance_km * 1000.0).round() / 1000.0
    }

    /// Navigation deep link; empty for fewer than two stops.
    pub fn google_maps_url(&self) -> &str {
        &self.google_maps_url
    }

    /// Number of stops in the plan.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns `true` if the plan has no stops.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Consumes the plan, returning its parts.
    pub fn into_parts(self) -> (Vec<Point>, f64, String) {
        (self.ordered, self.distance_km, self.google_maps_url)
    }
}

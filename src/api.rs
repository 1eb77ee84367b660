//! JSON request/response types for the route optimization endpoint.
//!
//! These mirror the wire contract of the web front end: a request carries
//! the stops plus start/end names, and the response carries the ordered
//! stops, the distance rounded to meters, and a navigation link.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::OptimizeOptions;
use crate::error::RouteError;
use crate::models::{Point, RoutePlan};
use crate::optimizer::plan_route;

/// An optimization request.
///
/// # Examples
///
/// ```
/// use open_route::api::OptimizeRequest;
///
/// let req: OptimizeRequest = serde_json::from_str(r#"{
///     "houses": [{"name": "A", "address": "", "lat": 0.0, "lon": 0.0}],
///     "start_name": "A",
///     "end_name": "A"
/// }"#).unwrap();
/// assert!(req.auto_optimize);
/// assert_eq!(req.stops.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Stops to order.
    #[serde(alias = "houses")]
    pub stops: Vec<Point>,
    /// Name of the first stop.
    pub start_name: String,
    /// Name of the last stop.
    pub end_name: String,
    /// Reorder the stops; when `false` only the endpoints move.
    #[serde(default = "default_auto_optimize")]
    pub auto_optimize: bool,
}

fn default_auto_optimize() -> bool {
    true
}

/// An optimization response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    /// Stops in visiting order, attributes untouched.
    pub ordered: Vec<Point>,
    /// Total great-circle distance in kilometers, rounded to 3 decimals.
    pub distance_km: f64,
    /// Navigation deep link; empty for fewer than two stops.
    pub google_maps_url: String,
}

impl From<RoutePlan> for OptimizeResponse {
    fn from(plan: RoutePlan) -> Self {
        let distance_km = plan.rounded_distance_km();
        let (ordered, _, google_maps_url) = plan.into_parts();
        Self {
            ordered,
            distance_km,
            google_maps_url,
        }
    }
}

/// Errors raised while handling a JSON request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was not a valid request document.
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The request was well-formed but could not be planned.
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Plans a route for a decoded request.
///
/// # Errors
///
/// Returns the [`RouteError`] raised by validation.
pub fn optimize(request: &OptimizeRequest) -> Result<OptimizeResponse, RouteError> {
    let options = OptimizeOptions::default().with_auto_optimize(request.auto_optimize);
    let plan = plan_route(
        &request.stops,
        &request.start_name,
        &request.end_name,
        &options,
    )?;
    Ok(plan.into())
}

/// Decodes a JSON request, plans the route, and encodes the response.
///
/// # Errors
///
/// Returns [`ApiError::Malformed`] for undecodable input and
/// [`ApiError::Route`] for validation failures.
pub fn optimize_json(body: &str) -> Result<String, ApiError> {
    let request: OptimizeRequest = serde_json::from_str(body)?;
    let response = optimize(&request)?;
    Ok(serde_json::to_string(&response)?)
}

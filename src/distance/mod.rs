//! Great-circle distances.
//!
//! Provides the haversine distance function and a dense distance matrix
//! built from a stop list.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;

//! Domain model types for open-route ordering.
//!
//! Provides the stop record supplied by callers and the plan returned by
//! the optimizer. Routes themselves are plain index sequences
//! (`Vec<usize>`) into the caller's stop list.

mod plan;
mod point;

pub use plan::RoutePlan;
pub use point::Point;

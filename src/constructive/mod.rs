//! Constructive heuristics for building initial open routes.
//!
//! - [`nearest_neighbor_open`] — Greedy nearest-neighbor path from a fixed start, O(n²)
//! - [`force_end`] — Moves the required end stop to the tail of a route, O(n)

mod fixed_end;
mod nearest_neighbor;

pub use fixed_end::force_end;
pub use nearest_neighbor::nearest_neighbor_open;

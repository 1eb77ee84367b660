//! Route length evaluation.

mod evaluator;

pub use evaluator::{path_length, route_length};

//! Local search operators for improving open routes.
//!
//! - [`two_opt_fixed_ends`] — Segment reversal with both endpoints pinned

mod two_opt;

pub use two_opt::{
    two_opt_fixed_ends, two_opt_fixed_ends_with_tolerance, DEFAULT_IMPROVEMENT_TOLERANCE,
};

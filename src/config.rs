//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::local_search::DEFAULT_IMPROVEMENT_TOLERANCE;

/// Options for one optimization call.
///
/// Every field has a default, so partial JSON configurations deserialize.
///
/// # Examples
///
/// ```
/// use open_route::config::OptimizeOptions;
///
/// let opts = OptimizeOptions::default();
/// assert!(opts.auto_optimize);
///
/// let fixed = OptimizeOptions::default().with_auto_optimize(false);
/// assert!(!fixed.auto_optimize);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeOptions {
    /// Reorder stops with nearest-neighbor + 2-opt. When `false`, only the
    /// start and end are moved into place.
    pub auto_optimize: bool,
    /// Minimum length decrease in kilometers for a 2-opt move to count.
    pub improvement_tolerance: f64,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            auto_optimize: true,
            improvement_tolerance: DEFAULT_IMPROVEMENT_TOLERANCE,
        }
    }
}

impl OptimizeOptions {
    /// Sets whether stops are reordered.
    pub fn with_auto_optimize(mut self, auto_optimize: bool) -> Self {
        self.auto_optimize = auto_optimize;
        self
    }

    /// Sets the 2-opt acceptance tolerance.
    pub fn with_improvement_tolerance(mut self, tolerance: f64) -> Self {
        self.improvement_tolerance = tolerance;
        self
    }
}

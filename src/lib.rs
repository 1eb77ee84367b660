//! # open-route
//!
//! Orders a set of geographic stops into a single route with a fixed start
//! and a fixed end, minimizing total great-circle distance, and renders the
//! result as a shareable navigation link.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, RoutePlan)
//! - [`distance`] — Haversine distance and dense distance matrix
//! - [`constructive`] — Nearest-neighbor construction and fixed-end repair
//! - [`local_search`] — 2-opt refinement with pinned endpoints
//! - [`evaluation`] — Open-route length
//! - [`link`] — Google Maps directions link
//! - [`optimizer`] — Validation and the end-to-end pipeline
//! - [`api`] — JSON request/response contract
//!
//! ## Example
//!
//! ```
//! use open_route::{optimize_open_route, models::Point};
//!
//! let stops = vec![
//!     Point::new("Office", "Chaussée de Boondael 365", 50.8177318, 4.3864221),
//!     Point::new("Artan 112", "Rue Artan 112", 50.85364680806313, 4.383660167330543),
//!     Point::new("Flagey 21", "Rue du Serpentin 21", 50.82793441321475, 4.374789453835611),
//! ];
//! let plan = optimize_open_route(&stops, "Office", "Artan 112").unwrap();
//! assert_eq!(plan.names(), vec!["Office", "Flagey 21", "Artan 112"]);
//! assert!(plan.google_maps_url().contains("waypoints="));
//! ```

pub mod api;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod link;
pub mod local_search;
pub mod models;
pub mod optimizer;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::RouteError;
pub use optimizer::{fixed_order_route, optimize_open_route, plan_route};

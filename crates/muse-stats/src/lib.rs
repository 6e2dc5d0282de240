//! muse-stats - Statistical primitives for collection analytics
//!
//! This crate provides the building blocks composed by the metrics layer:
//!
//! - **summary**: mean, median, nearest-rank percentiles, weighted variants
//! - **histogram**: fixed-edge and dynamic decade binning
//! - **color**: hex to HSL conversion and named color family classification
//! - **geo**: haversine distance and weighted distance summaries
//! - **aggregate**: per-gender categorical and uniqueness-aware counting
//! - **rank**: per-artist aggregation and top-N selection
//!
//! # Design Philosophy
//!
//! Every primitive is pure and total over its input: empty or degenerate
//! input produces a documented zero-valued result rather than an error, so
//! the metrics layer never has a failure path that depends on the data.

pub mod aggregate;
pub mod color;
pub mod geo;
pub mod histogram;
pub mod rank;
pub mod summary;

pub use aggregate::*;
pub use color::*;
pub use geo::*;
pub use histogram::*;
pub use rank::*;
pub use summary::*;

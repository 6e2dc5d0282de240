//! muse-metrics - Visualization metrics for the muse collection analytics
//!
//! Each public function here is one visualization metric: it takes the
//! record slice (plus small scalar configuration such as a top-N limit,
//! a year range, or a distance origin) and returns a self-describing
//! result with ordered labels, parallel per-gender arrays, and raw counts
//! next to derived percentages.
//!
//! # Metric groups
//!
//! - **counts**: gender split, object types, nationalities, departments,
//!   display/image shares, depicted persons
//! - **timeline**: production/acquisition decades, age at production,
//!   exhibition bands
//! - **dimensions**: artwork size bands and central tendencies
//! - **colors**: named color families and dominant exact colors
//! - **geography**: distance spread from a reference point
//! - **artists**: uniqueness-aware distributions, rankings, scatter
//!
//! # Guarantees
//!
//! Every metric is pure and deterministic, holds no state between calls,
//! and degrades to its documented zero-valued shape on empty input. None
//! of them panic on any input; records missing a field are excluded from
//! the affected metric only. Metrics share no mutable state, so callers
//! may evaluate them concurrently over the same snapshot.

pub mod artists;
pub mod colors;
pub mod counts;
pub mod dimensions;
pub mod geography;
pub mod result;
pub mod timeline;

pub use artists::*;
pub use colors::*;
pub use counts::*;
pub use dimensions::*;
pub use geography::*;
pub use result::*;
pub use timeline::*;

//! Domain types for the muse collection analytics engine
//!
//! This crate provides the normalized artwork record model consumed by the
//! analytics crates:
//! - ArtworkRecord: a single catalogued artwork with creator metadata
//! - Gender: the categorical partition key for comparative metrics
//! - Dimensions, GeoLocation, DepictedPerson: embedded value types
//!
//! Records are produced upstream (harvesting and normalization are out of
//! scope here) and are never mutated by the analytics layers.

pub mod record;

pub use record::*;

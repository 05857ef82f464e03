//! # Ports
//!
//! Interface definitions for the collaborators around the counting core.
//!
//! - [`sink`]: where completed records go (aggregation, reporting)
//! - [`source`]: where records come from (file-system discovery)
//!
//! The core and the discovery adapters only meet through these traits.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod sink;
pub mod source;

pub use sink::RecordSink;
pub use source::ContentSource;

//! Optional counters for observing cache behavior (feature `metrics`).
//!
//! Recording, snapshotting and exporting are separate concerns:
//! policies write through the recorder traits, callers read a plain-data
//! snapshot, and exporters publish a snapshot to a monitoring backend.

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

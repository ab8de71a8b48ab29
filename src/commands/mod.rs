//! Top-level command orchestration.
pub mod migrate;

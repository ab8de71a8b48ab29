//! Developer profile migration engine.
//!
//! Copies developer-tool configuration (editor, shell, Git, SSH, package
//! manager, cloud CLI settings) from one platform's home-directory layout to
//! another's, driven by a built-in table of relative path mappings. Runs are
//! previews by default; existing destinations are kept unless forced.
//!
//! The public API is organised into layers, leaves first:
//!
//! - **[`config`]**: mapping catalog, classifier, validated run options
//! - **[`platform`]**: platform identifiers and home-directory resolution
//! - **[`plan`]**: plan construction and sequential execution
//! - **[`resources`]**: the `check + apply` file copy primitive
//! - **[`report`]**: aggregated summary, text and JSON rendering
//! - **[`commands`]**: top-level orchestration used by the binary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod plan;
pub mod platform;
pub mod report;
pub mod resources;

//! Core types shared by every algoviz crate.
//!
//! - [`Error`] / [`Result`]: the error taxonomy for structure mutations
//!   (`Validation`, `NotFound`, `InvariantViolation`, `NoOp`) plus config errors.
//! - [`MutationExt`]: helpers for treating a `NoOp` as "keep the current snapshot".
//! - [`VisualizerConfig`]: pacing, trace level and log filter.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod error;
pub mod result;

pub use config::{TraceLevel, VisualizerConfig};
pub use error::Error;
pub use result::{MutationExt, OptionExt, Result};

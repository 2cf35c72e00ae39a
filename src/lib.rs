//! Data layer and chart model for viewing Hermite equalizing spline output.
//!
//! The external solver writes `Output.txt`: four lines holding the control
//! point abscissas and ordinates followed by the sampled curve. This crate
//! reads that file, validates it into a [`chart::Chart`], and leaves drawing
//! to the `spline-viewer` binary.

pub mod chart;
pub mod data;
pub mod error;

pub use error::{Error, Result};

//! # Gnuviz
//!
//! Fluent gnuplot script builder for scientific plotting.
//!
//! Gnuviz assembles plotting commands and numeric data into a gnuplot script
//! and data file, then runs `gnuplot` as a subprocess to pop up a window or
//! save a figure. The library never rasterizes anything itself; it emits
//! well-formed gnuplot documents and manages their lifecycle.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gnuviz::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.0, 1.0, 5.0, 3.0];
//!
//! let mut fig = Figure::new();
//! fig.x_label("time (s)");
//! fig.draw(DrawStyle::LinesPoints, &[&x, &y]).title("signal");
//! fig.save("signal.svg")?;
//! ```
//!
//! ## Requirements
//!
//! The `gnuplot` executable must be resolvable on `PATH` when
//! [`Figure::show`] or [`Figure::save`] is called; absence surfaces as
//! [`Error::Spawn`] at invocation time, not at configuration time.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Formatting helpers for gnuplot literal syntax.
pub mod format;

/// Dataset serialization into indexed data blocks.
pub mod dataset;

/// Plot entries and drawing-style tables.
pub mod entry;

/// Global setting specs (border, grid, legend, tics, ...).
pub mod specs;

/// Embedded color palettes.
pub mod palettes;

// ============================================================================
// Document and Output Modules
// ============================================================================

/// The figure document and artifact lifecycle.
pub mod figure;

/// Terminal selection and the gnuplot subprocess.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for gnuviz operations.
pub mod error;

pub use error::{Error, Result};
pub use figure::Figure;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use gnuviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dataset::{Datum, Sequence};
    pub use crate::entry::{Axes, DrawStyle, PlotEntry, Smooth};
    pub use crate::error::{Error, Result};
    pub use crate::figure::Figure;
    pub use crate::output::OutputFormat;
    pub use crate::specs::{Horizontal, Vertical};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #[test]
    fn test_library_compiles() {
        // Smoke test to ensure the library compiles
        assert!(true);
    }
}

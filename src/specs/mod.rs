//! Global setting specs: one small optional-field object per category.
//!
//! Each spec exposes chained mutators and renders either a complete
//! `set`/`unset` directive (newline-terminated) or the empty string when it
//! was never configured. The figure concatenates them in a fixed slot order.

mod axis_label;
mod border;
mod fill_style;
mod grid;
mod histogram_style;
mod legend;
mod tics;

pub use axis_label::AxisLabelSpec;
pub use border::BorderSpec;
pub use fill_style::{FillBorder, FillStyleSpec};
pub use grid::GridSpec;
pub use histogram_style::{HistogramKind, HistogramStyleSpec};
pub use legend::{Horizontal, LegendSpec, Vertical};
pub use tics::{TicsMajorSpec, TicsMinorSpec, TicsSpec};

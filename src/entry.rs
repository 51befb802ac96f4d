//! Plot entries: one drawing request per `draw` call.
//!
//! An entry pairs a plot expression (a literal function or a
//! `'<datafile>' index <N>` reference) with a `with` style keyword and a bag of
//! optional per-entry attributes. Attribute clauses render in the fixed order
//! gnuplot's grammar requires; reordering them desyncs defaults from explicit
//! overrides on the consumer side.

use crate::format;

/// Axis pair an entry is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axes {
    /// Primary x, primary y (gnuplot default).
    X1Y1,
    /// Primary x, secondary y.
    X1Y2,
    /// Secondary x, primary y.
    X2Y1,
    /// Secondary x, secondary y.
    X2Y2,
}

impl Axes {
    /// The gnuplot keyword for this axis pair.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::X1Y1 => "x1y1",
            Self::X1Y2 => "x1y2",
            Self::X2Y1 => "x2y1",
            Self::X2Y2 => "x2y2",
        }
    }
}

/// Interpolation mode applied to an entry's data before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Smooth {
    /// Collapse duplicate x values to their mean.
    Unique,
    /// Sum y values sharing an x value.
    Frequency,
    /// Natural cubic splines through the data.
    CSplines,
    /// Weighted cubic splines.
    ACSplines,
    /// Monotone cubic splines.
    MCSplines,
    /// Bezier curve of degree n (number of points).
    Bezier,
    /// Bezier curve through splined points.
    SBezier,
}

impl Smooth {
    /// The gnuplot keyword for this interpolation mode.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Unique => "unique",
            Self::Frequency => "frequency",
            Self::CSplines => "csplines",
            Self::ACSplines => "acsplines",
            Self::MCSplines => "mcsplines",
            Self::Bezier => "bezier",
            Self::SBezier => "sbezier",
        }
    }
}

/// Semantic drawing kind, mapped to a gnuplot `with` style keyword.
///
/// This table is the entire convenience surface for data plots; every kind
/// funnels into [`Figure::draw`](crate::figure::Figure::draw).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStyle {
    /// Connected line segments.
    Lines,
    /// Lines with point markers at each datum.
    LinesPoints,
    /// Point markers only.
    Points,
    /// Minimal dots.
    Dots,
    /// Vertical lines from the x axis to each datum.
    Impulses,
    /// Steps, x changes first.
    Steps,
    /// Steps, y changes first.
    FSteps,
    /// Histogram-style centered steps.
    HiSteps,
    /// Steps with the area below filled.
    FillSteps,
    /// Boxes centered on each x value.
    Boxes,
    /// Boxes with y error bars.
    BoxErrorBars,
    /// Error bars along x.
    XErrorBars,
    /// Error bars along y.
    YErrorBars,
    /// Error bars along x and y.
    XYErrorBars,
    /// Lines with error bars along x.
    XErrorLines,
    /// Lines with error bars along y.
    YErrorLines,
    /// Lines with error bars along x and y.
    XYErrorLines,
    /// Histogram columns; relies on the document-level
    /// `set style data histogram` default rather than a `with` clause.
    Histogram,
}

impl DrawStyle {
    /// The gnuplot `with` keyword for this drawing kind.
    ///
    /// [`DrawStyle::Histogram`] maps to the empty keyword: histogram entries
    /// draw through the `set style data histogram` document default.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::LinesPoints => "linespoints",
            Self::Points => "points",
            Self::Dots => "dots",
            Self::Impulses => "impulses",
            Self::Steps => "steps",
            Self::FSteps => "fsteps",
            Self::HiSteps => "histeps",
            Self::FillSteps => "fillsteps",
            Self::Boxes => "boxes",
            Self::BoxErrorBars => "boxerrorbars",
            Self::XErrorBars => "xerrorbars",
            Self::YErrorBars => "yerrorbars",
            Self::XYErrorBars => "xyerrorbars",
            Self::XErrorLines => "xerrorlines",
            Self::YErrorLines => "yerrorlines",
            Self::XYErrorLines => "xyerrorlines",
            Self::Histogram => "",
        }
    }
}

/// One drawing request: expression, style keyword, and per-entry attributes.
///
/// Mutators return `&mut Self` for chaining off the reference handed back by
/// the figure's draw operations:
///
/// ```rust,ignore
/// figure
///     .draw(DrawStyle::Lines, &[&x, &y])
///     .title("measured")
///     .line_width(2.0);
/// ```
#[derive(Debug, Clone)]
pub struct PlotEntry {
    what: String,
    with: String,
    title: Option<String>,
    line_style: Option<usize>,
    line_type: Option<usize>,
    line_width: Option<f64>,
    line_color: Option<String>,
    point_type: Option<usize>,
    point_size: Option<f64>,
    fill_pattern: Option<usize>,
    axes: Option<Axes>,
    smooth: Option<Smooth>,
}

impl PlotEntry {
    pub(crate) fn new(what: impl Into<String>, with: impl Into<String>) -> Self {
        Self {
            what: what.into(),
            with: with.into(),
            title: None,
            line_style: None,
            line_type: None,
            line_width: None,
            line_color: None,
            point_type: None,
            point_size: None,
            fill_pattern: None,
            axes: None,
            smooth: None,
        }
    }

    /// Set the legend text. When unset, gnuplot titles the curve with the
    /// literal plot expression.
    pub fn title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the line style ordinal (selects one of the palette line styles).
    pub fn line_style(&mut self, ordinal: usize) -> &mut Self {
        self.line_style = Some(ordinal);
        self
    }

    /// Set the line type.
    pub fn line_type(&mut self, linetype: usize) -> &mut Self {
        self.line_type = Some(linetype);
        self
    }

    /// Set the line width.
    pub fn line_width(&mut self, width: f64) -> &mut Self {
        self.line_width = Some(width);
        self
    }

    /// Set the line color, e.g. `"red"` or `"#1B9E77"`.
    pub fn line_color(&mut self, color: &str) -> &mut Self {
        self.line_color = Some(color.to_string());
        self
    }

    /// Set the point marker type.
    pub fn point_type(&mut self, pointtype: usize) -> &mut Self {
        self.point_type = Some(pointtype);
        self
    }

    /// Set the point marker size.
    pub fn point_size(&mut self, size: f64) -> &mut Self {
        self.point_size = Some(size);
        self
    }

    /// Set the fill pattern ordinal for filled styles (boxes, fillsteps).
    pub fn fill_pattern(&mut self, pattern: usize) -> &mut Self {
        self.fill_pattern = Some(pattern);
        self
    }

    /// Plot this entry against the given axis pair.
    pub fn axes(&mut self, axes: Axes) -> &mut Self {
        self.axes = Some(axes);
        self
    }

    /// Apply an interpolation mode to this entry's data.
    pub fn smooth(&mut self, mode: Smooth) -> &mut Self {
        self.smooth = Some(mode);
        self
    }

    /// The plot expression this entry draws.
    #[must_use]
    pub fn what(&self) -> &str {
        &self.what
    }

    /// Render this entry as one clause of the plot directive.
    ///
    /// Clause order is fixed: expression, `smooth`, `axes`, `title`,
    /// `with <style>`, then line/point/fill attributes.
    #[must_use]
    pub fn render(&self) -> String {
        let mut clause = self.what.clone();

        if let Some(mode) = self.smooth {
            clause.push_str(" smooth ");
            clause.push_str(mode.keyword());
        }
        if let Some(axes) = self.axes {
            clause.push_str(" axes ");
            clause.push_str(axes.keyword());
        }
        if let Some(title) = &self.title {
            clause.push_str(" title ");
            clause.push_str(&format::quoted(title));
        }
        if !self.with.is_empty() {
            clause.push_str(" with ");
            clause.push_str(&self.with);
        }
        if let Some(ordinal) = self.line_style {
            clause.push_str(&format!(" linestyle {ordinal}"));
        }
        if let Some(linetype) = self.line_type {
            clause.push_str(&format!(" linetype {linetype}"));
        }
        if let Some(width) = self.line_width {
            clause.push_str(&format!(" linewidth {width}"));
        }
        if let Some(color) = &self.line_color {
            clause.push_str(" linecolor ");
            clause.push_str(&format::quoted(color));
        }
        if let Some(pointtype) = self.point_type {
            clause.push_str(&format!(" pointtype {pointtype}"));
        }
        if let Some(size) = self.point_size {
            clause.push_str(&format!(" pointsize {size}"));
        }
        if let Some(pattern) = self.fill_pattern {
            clause.push_str(&format!(" fillstyle pattern {pattern}"));
        }

        clause
    }
}

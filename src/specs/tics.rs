//! Tics specs: global, per-axis major, and per-axis minor.

use crate::format;

/// Options applied to all tics at once. Renders nothing until configured.
#[derive(Debug, Clone, Default)]
pub struct TicsSpec {
    show: Option<bool>,
    behind: Option<bool>,
    rotate: Option<f64>,
    scale: Option<f64>,
    format: Option<String>,
}

impl TicsSpec {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Show tics on all axes.
    pub fn show(&mut self) -> &mut Self {
        self.show = Some(true);
        self
    }

    /// Suppress all tics.
    pub fn hide(&mut self) -> &mut Self {
        self.show = Some(false);
        self
    }

    /// Draw tics behind the plot elements.
    pub fn back(&mut self) -> &mut Self {
        self.show = Some(true);
        self.behind = Some(true);
        self
    }

    /// Draw tics in front of the plot elements.
    pub fn front(&mut self) -> &mut Self {
        self.show = Some(true);
        self.behind = Some(false);
        self
    }

    /// Rotate tic labels by the given angle in degrees.
    pub fn rotate_by(&mut self, degrees: f64) -> &mut Self {
        self.show = Some(true);
        self.rotate = Some(degrees);
        self
    }

    /// Scale tic marks relative to the default size.
    pub fn scale_by(&mut self, factor: f64) -> &mut Self {
        self.show = Some(true);
        self.scale = Some(factor);
        self
    }

    /// Set the tic label number format, e.g. `"%.2f"`.
    pub fn label_format(&mut self, fmt: &str) -> &mut Self {
        self.show = Some(true);
        self.format = Some(fmt.to_string());
        self
    }

    /// Render the `set tics` / `unset tics` directive, or nothing.
    #[must_use]
    pub fn render(&self) -> String {
        match self.show {
            None => String::new(),
            Some(false) => "unset tics\n".to_string(),
            Some(true) => {
                let mut cmd = String::from("set tics");
                if let Some(behind) = self.behind {
                    cmd.push_str(if behind { " back" } else { " front" });
                }
                if let Some(degrees) = self.rotate {
                    cmd.push_str(&format!(" rotate by {degrees}"));
                }
                if let Some(factor) = self.scale {
                    cmd.push_str(&format!(" scale {factor}"));
                }
                if let Some(fmt) = &self.format {
                    cmd.push_str(" format ");
                    cmd.push_str(&format::quoted(fmt));
                }
                cmd.push('\n');
                cmd
            }
        }
    }
}

/// Major tics of one axis (`xtics`, `x2tics`, `ytics`, `y2tics`).
///
/// Renders nothing until shown or hidden explicitly.
#[derive(Debug, Clone)]
pub struct TicsMajorSpec {
    axis: &'static str,
    show: Option<bool>,
    mirror: Option<bool>,
    rotate: Option<f64>,
    format: Option<String>,
}

impl TicsMajorSpec {
    pub(crate) fn new(axis: &'static str) -> Self {
        Self {
            axis,
            show: None,
            mirror: None,
            rotate: None,
            format: None,
        }
    }

    /// Show major tics on this axis.
    pub fn show(&mut self) -> &mut Self {
        self.show = Some(true);
        self
    }

    /// Suppress major tics on this axis.
    pub fn hide(&mut self) -> &mut Self {
        self.show = Some(false);
        self
    }

    /// Mirror tics onto the opposite border.
    pub fn mirror(&mut self) -> &mut Self {
        self.show = Some(true);
        self.mirror = Some(true);
        self
    }

    /// Do not mirror tics onto the opposite border.
    pub fn no_mirror(&mut self) -> &mut Self {
        self.show = Some(true);
        self.mirror = Some(false);
        self
    }

    /// Rotate tic labels by the given angle in degrees.
    pub fn rotate_by(&mut self, degrees: f64) -> &mut Self {
        self.show = Some(true);
        self.rotate = Some(degrees);
        self
    }

    /// Set the tic label number format.
    pub fn label_format(&mut self, fmt: &str) -> &mut Self {
        self.show = Some(true);
        self.format = Some(fmt.to_string());
        self
    }

    /// Render the `set <axis>tics` / `unset <axis>tics` directive, or nothing.
    #[must_use]
    pub fn render(&self) -> String {
        match self.show {
            None => String::new(),
            Some(false) => format!("unset {}tics\n", self.axis),
            Some(true) => {
                let mut cmd = format!("set {}tics", self.axis);
                match self.mirror {
                    Some(true) => cmd.push_str(" mirror"),
                    Some(false) => cmd.push_str(" nomirror"),
                    None => {}
                }
                if let Some(degrees) = self.rotate {
                    cmd.push_str(&format!(" rotate by {degrees}"));
                }
                if let Some(fmt) = &self.format {
                    cmd.push_str(" format ");
                    cmd.push_str(&format::quoted(fmt));
                }
                cmd.push('\n');
                cmd
            }
        }
    }
}

/// Minor tics of one axis (`mxtics`, `mx2tics`, `mytics`, `my2tics`).
///
/// Renders nothing until shown or hidden explicitly.
#[derive(Debug, Clone)]
pub struct TicsMinorSpec {
    axis: &'static str,
    show: Option<bool>,
    intervals: Option<usize>,
}

impl TicsMinorSpec {
    pub(crate) fn new(axis: &'static str) -> Self {
        Self {
            axis,
            show: None,
            intervals: None,
        }
    }

    /// Show minor tics on this axis with gnuplot's default frequency.
    pub fn show(&mut self) -> &mut Self {
        self.show = Some(true);
        self
    }

    /// Suppress minor tics on this axis.
    pub fn hide(&mut self) -> &mut Self {
        self.show = Some(false);
        self
    }

    /// Show minor tics dividing each major interval into `intervals` parts.
    pub fn intervals(&mut self, intervals: usize) -> &mut Self {
        self.show = Some(true);
        self.intervals = Some(intervals);
        self
    }

    /// Render the `set m<axis>tics` / `unset m<axis>tics` directive, or
    /// nothing.
    #[must_use]
    pub fn render(&self) -> String {
        match self.show {
            None => String::new(),
            Some(false) => format!("unset m{}tics\n", self.axis),
            Some(true) => match self.intervals {
                Some(intervals) => format!("set m{}tics {intervals}\n", self.axis),
                None => format!("set m{}tics\n", self.axis),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_specs_render_nothing() {
        assert_eq!(TicsSpec::new().render(), "");
        assert_eq!(TicsMajorSpec::new("x").render(), "");
        assert_eq!(TicsMinorSpec::new("y2").render(), "");
    }

    #[test]
    fn test_global_tics_options() {
        let mut tics = TicsSpec::new();
        tics.back().rotate_by(45.0).label_format("%.1f");
        assert_eq!(tics.render(), "set tics back rotate by 45 format '%.1f'\n");
    }

    #[test]
    fn test_major_show_and_hide() {
        let mut shown = TicsMajorSpec::new("x");
        shown.show();
        assert_eq!(shown.render(), "set xtics\n");

        let mut hidden = TicsMajorSpec::new("x2");
        hidden.hide();
        assert_eq!(hidden.render(), "unset x2tics\n");
    }

    #[test]
    fn test_major_no_mirror() {
        let mut tics = TicsMajorSpec::new("y");
        tics.no_mirror();
        assert_eq!(tics.render(), "set ytics nomirror\n");
    }

    #[test]
    fn test_minor_intervals() {
        let mut tics = TicsMinorSpec::new("x");
        tics.intervals(5);
        assert_eq!(tics.render(), "set mxtics 5\n");
    }

    #[test]
    fn test_minor_hide() {
        let mut tics = TicsMinorSpec::new("y2");
        tics.hide();
        assert_eq!(tics.render(), "unset my2tics\n");
    }
}

//! Axis label spec.

use crate::format;

/// Label of one axis. Renders nothing until text is set.
#[derive(Debug, Clone)]
pub struct AxisLabelSpec {
    axis: &'static str,
    text: Option<String>,
    rotate: Option<f64>,
}

impl AxisLabelSpec {
    pub(crate) fn new(axis: &'static str) -> Self {
        Self {
            axis,
            text: None,
            rotate: None,
        }
    }

    /// Set the label text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.text = Some(text.to_string());
        self
    }

    /// Rotate the label by the given angle in degrees.
    pub fn rotate_by(&mut self, degrees: f64) -> &mut Self {
        self.rotate = Some(degrees);
        self
    }

    /// Render the `set <axis>label` directive, or nothing when unset.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(text) = &self.text else {
            return String::new();
        };
        let mut cmd = format!("set {}label {}", self.axis, format::quoted(text));
        if let Some(degrees) = self.rotate {
            cmd.push_str(&format!(" rotate by {degrees}"));
        }
        cmd.push('\n');
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_renders_nothing() {
        assert_eq!(AxisLabelSpec::new("x").render(), "");
    }

    #[test]
    fn test_text() {
        let mut label = AxisLabelSpec::new("y");
        label.text("energy (eV)");
        assert_eq!(label.render(), "set ylabel 'energy (eV)'\n");
    }

    #[test]
    fn test_rotation() {
        let mut label = AxisLabelSpec::new("y");
        label.text("count").rotate_by(90.0);
        assert_eq!(label.render(), "set ylabel 'count' rotate by 90\n");
    }
}

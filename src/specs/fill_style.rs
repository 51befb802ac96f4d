//! Fill style spec for paintable plot elements (boxes, filled steps).

#[derive(Debug, Clone, Copy, PartialEq)]
enum FillMode {
    Empty,
    Solid,
    Pattern(usize),
}

/// Border handling for filled elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillBorder {
    /// No border around filled elements.
    Hidden,
    /// Border using the element's own line type.
    Shown,
    /// Border using an explicit line type.
    LineType(usize),
}

/// Fill style of paintable plot elements. Renders nothing until configured.
#[derive(Debug, Clone, Default)]
pub struct FillStyleSpec {
    mode: Option<FillMode>,
    density: Option<f64>,
    transparent: bool,
    border: Option<FillBorder>,
}

impl FillStyleSpec {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Leave elements unfilled.
    pub fn empty(&mut self) -> &mut Self {
        self.mode = Some(FillMode::Empty);
        self
    }

    /// Fill elements with a solid color.
    pub fn solid(&mut self) -> &mut Self {
        self.mode = Some(FillMode::Solid);
        self
    }

    /// Set the solid fill density in `[0, 1]`.
    pub fn density(&mut self, density: f64) -> &mut Self {
        self.mode = Some(FillMode::Solid);
        self.density = Some(density.clamp(0.0, 1.0));
        self
    }

    /// Make the solid fill transparent.
    pub fn transparent(&mut self) -> &mut Self {
        self.mode = Some(FillMode::Solid);
        self.transparent = true;
        self
    }

    /// Fill elements with the given pattern ordinal.
    pub fn pattern(&mut self, pattern: usize) -> &mut Self {
        self.mode = Some(FillMode::Pattern(pattern));
        self
    }

    /// Hide the border of filled elements.
    pub fn border_hide(&mut self) -> &mut Self {
        self.border = Some(FillBorder::Hidden);
        self
    }

    /// Show the border of filled elements.
    pub fn border_show(&mut self) -> &mut Self {
        self.border = Some(FillBorder::Shown);
        self
    }

    /// Show the border with an explicit line type.
    pub fn border_line_type(&mut self, linetype: usize) -> &mut Self {
        self.border = Some(FillBorder::LineType(linetype));
        self
    }

    /// Render the `set style fill` directive, or nothing.
    #[must_use]
    pub fn render(&self) -> String {
        if self.mode.is_none() && self.border.is_none() {
            return String::new();
        }
        let mut cmd = String::from("set style fill");
        match self.mode {
            Some(FillMode::Empty) => cmd.push_str(" empty"),
            Some(FillMode::Solid) => {
                if self.transparent {
                    cmd.push_str(" transparent");
                }
                cmd.push_str(" solid");
                if let Some(density) = self.density {
                    cmd.push_str(&format!(" {density}"));
                }
            }
            Some(FillMode::Pattern(pattern)) => cmd.push_str(&format!(" pattern {pattern}")),
            None => {}
        }
        match self.border {
            Some(FillBorder::Hidden) => cmd.push_str(" noborder"),
            Some(FillBorder::Shown) => cmd.push_str(" border"),
            Some(FillBorder::LineType(lt)) => cmd.push_str(&format!(" border lt {lt}")),
            None => {}
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
        assert_eq!(FillStyleSpec::new().render(), "");
    }

    #[test]
    fn test_solid_noborder() {
        let mut fill = FillStyleSpec::new();
        fill.solid().border_hide();
        assert_eq!(fill.render(), "set style fill solid noborder\n");
    }

    #[test]
    fn test_transparent_density() {
        let mut fill = FillStyleSpec::new();
        fill.transparent().density(0.5);
        assert_eq!(fill.render(), "set style fill transparent solid 0.5\n");
    }

    #[test]
    fn test_density_clamped() {
        let mut fill = FillStyleSpec::new();
        fill.density(1.7);
        assert_eq!(fill.render(), "set style fill solid 1\n");
    }

    #[test]
    fn test_pattern_with_border_line_type() {
        let mut fill = FillStyleSpec::new();
        fill.pattern(5).border_line_type(2);
        assert_eq!(fill.render(), "set style fill pattern 5 border lt 2\n");
    }
}

//! Legend (key) spec.

use crate::format;

/// Vertical anchor of the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    /// Top of the plot area.
    Top,
    /// Vertical center.
    Center,
    /// Bottom of the plot area.
    Bottom,
}

impl Vertical {
    fn keyword(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

/// Horizontal anchor of the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    /// Left of the plot area.
    Left,
    /// Horizontal center.
    Center,
    /// Right of the plot area.
    Right,
}

impl Horizontal {
    fn keyword(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Legend of the plot. Renders nothing until configured.
#[derive(Debug, Clone, Default)]
pub struct LegendSpec {
    show: Option<bool>,
    outside: bool,
    anchor: Option<(Vertical, Horizontal)>,
    boxed: Option<bool>,
    title: Option<String>,
}

impl LegendSpec {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Show the legend.
    pub fn show(&mut self) -> &mut Self {
        self.show = Some(true);
        self
    }

    /// Suppress the legend (`unset key`).
    pub fn hide(&mut self) -> &mut Self {
        self.show = Some(false);
        self
    }

    /// Place the legend inside the plot area at the given anchor.
    pub fn inside(&mut self, vertical: Vertical, horizontal: Horizontal) -> &mut Self {
        self.show = Some(true);
        self.outside = false;
        self.anchor = Some((vertical, horizontal));
        self
    }

    /// Place the legend outside the plot area at the given anchor.
    pub fn outside(&mut self, vertical: Vertical, horizontal: Horizontal) -> &mut Self {
        self.show = Some(true);
        self.outside = true;
        self.anchor = Some((vertical, horizontal));
        self
    }

    /// Draw a box around the legend.
    pub fn boxed(&mut self) -> &mut Self {
        self.show = Some(true);
        self.boxed = Some(true);
        self
    }

    /// Draw the legend without a box.
    pub fn not_boxed(&mut self) -> &mut Self {
        self.show = Some(true);
        self.boxed = Some(false);
        self
    }

    /// Set the legend title.
    pub fn title(&mut self, title: &str) -> &mut Self {
        self.show = Some(true);
        self.title = Some(title.to_string());
        self
    }

    /// Render the `set key` / `unset key` directive, or nothing.
    #[must_use]
    pub fn render(&self) -> String {
        match self.show {
            None => String::new(),
            Some(false) => "unset key\n".to_string(),
            Some(true) => {
                let mut cmd = String::from("set key");
                if let Some((vertical, horizontal)) = self.anchor {
                    cmd.push_str(if self.outside { " outside" } else { " inside" });
                    cmd.push(' ');
                    cmd.push_str(vertical.keyword());
                    cmd.push(' ');
                    cmd.push_str(horizontal.keyword());
                }
                match self.boxed {
                    Some(true) => cmd.push_str(" box"),
                    Some(false) => cmd.push_str(" nobox"),
                    None => {}
                }
                if let Some(title) = &self.title {
                    cmd.push_str(" title ");
                    cmd.push_str(&format::quoted(title));
                }
                cmd.push('\n');
                cmd
            }
        }
    }
}

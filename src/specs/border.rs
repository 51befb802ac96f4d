//! Plot border spec.

/// Border of the plot area, encoded as the gnuplot edge bit mask.
///
/// Renders nothing until an edge or line option is set.
#[derive(Debug, Clone, Default)]
pub struct BorderSpec {
    edges: Option<u8>,
    line_width: Option<f64>,
    behind: Option<bool>,
}

const BOTTOM: u8 = 1;
const LEFT: u8 = 2;
const TOP: u8 = 4;
const RIGHT: u8 = 8;
const ALL: u8 = BOTTOM | LEFT | TOP | RIGHT;

impl BorderSpec {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn add_edge(&mut self, bit: u8) -> &mut Self {
        self.edges = Some(self.edges.unwrap_or(0) | bit);
        self
    }

    /// Show the bottom edge.
    pub fn bottom(&mut self) -> &mut Self {
        self.add_edge(BOTTOM)
    }

    /// Show the left edge.
    pub fn left(&mut self) -> &mut Self {
        self.add_edge(LEFT)
    }

    /// Show the top edge.
    pub fn top(&mut self) -> &mut Self {
        self.add_edge(TOP)
    }

    /// Show the right edge.
    pub fn right(&mut self) -> &mut Self {
        self.add_edge(RIGHT)
    }

    /// Show all four edges.
    pub fn all(&mut self) -> &mut Self {
        self.add_edge(ALL)
    }

    /// Hide the border entirely.
    pub fn none(&mut self) -> &mut Self {
        self.edges = Some(0);
        self
    }

    /// Set the border line width.
    pub fn line_width(&mut self, width: f64) -> &mut Self {
        self.line_width = Some(width);
        self
    }

    /// Draw the border behind the plot elements.
    pub fn back(&mut self) -> &mut Self {
        self.behind = Some(true);
        self
    }

    /// Draw the border in front of the plot elements.
    pub fn front(&mut self) -> &mut Self {
        self.behind = Some(false);
        self
    }

    /// Render the `set border` / `unset border` directive, or nothing.
    #[must_use]
    pub fn render(&self) -> String {
        if self.edges.is_none() && self.line_width.is_none() && self.behind.is_none() {
            return String::new();
        }
        match self.edges {
            Some(0) => "unset border\n".to_string(),
            edges => {
                let mut cmd = format!("set border {}", edges.unwrap_or(ALL));
                if let Some(behind) = self.behind {
                    cmd.push_str(if behind { " back" } else { " front" });
                }
                if let Some(width) = self.line_width {
                    cmd.push_str(&format!(" linewidth {width}"));
                }
                cmd.push('\n');
                cmd
            }
        }
    }
}

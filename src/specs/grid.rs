//! Grid spec.

/// Grid lines drawn at tic positions. Renders nothing until configured.
#[derive(Debug, Clone, Default)]
pub struct GridSpec {
    show: Option<bool>,
    minor: bool,
    behind: Option<bool>,
}

impl GridSpec {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Draw grid lines at major tics.
    pub fn show(&mut self) -> &mut Self {
        self.show = Some(true);
        self
    }

    /// Suppress the grid explicitly (`unset grid`).
    pub fn hide(&mut self) -> &mut Self {
        self.show = Some(false);
        self
    }

    /// Also draw grid lines at minor tics.
    pub fn minor(&mut self) -> &mut Self {
        self.show = Some(true);
        self.minor = true;
        self
    }

    /// Draw the grid behind the plot elements.
    pub fn back(&mut self) -> &mut Self {
        self.behind = Some(true);
        self
    }

    /// Draw the grid in front of the plot elements.
    pub fn front(&mut self) -> &mut Self {
        self.behind = Some(false);
        self
    }

    /// Render the `set grid` / `unset grid` directive, or nothing.
    #[must_use]
    pub fn render(&self) -> String {
        match self.show {
            None => String::new(),
            Some(false) => "unset grid\n".to_string(),
            Some(true) => {
                let mut cmd = String::from("set grid xtics ytics");
                if self.minor {
                    cmd.push_str(" mxtics mytics");
                }
                if let Some(behind) = self.behind {
                    cmd.push_str(if behind { " back" } else { " front" });
                }
                cmd.push('\n');
                cmd
            }
        }
    }
}

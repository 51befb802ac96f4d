//! Histogram layout style spec.

/// Histogram layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramKind {
    /// Clusters of side-by-side columns grouped by row.
    Clustered,
    /// Clustered columns with error bars.
    ErrorBars,
    /// Columns stacked by data row.
    RowStacked,
    /// Columns stacked by data column.
    ColumnStacked,
}

impl HistogramKind {
    fn keyword(self) -> &'static str {
        match self {
            Self::Clustered => "clustered",
            Self::ErrorBars => "errorbars",
            Self::RowStacked => "rowstacked",
            Self::ColumnStacked => "columnstacked",
        }
    }
}

/// Layout of histogram entries. Renders nothing until configured.
#[derive(Debug, Clone, Default)]
pub struct HistogramStyleSpec {
    kind: Option<HistogramKind>,
    gap: Option<f64>,
}

impl HistogramStyleSpec {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Use clustered layout.
    pub fn clustered(&mut self) -> &mut Self {
        self.kind = Some(HistogramKind::Clustered);
        self
    }

    /// Use clustered layout with error bars.
    pub fn error_bars(&mut self) -> &mut Self {
        self.kind = Some(HistogramKind::ErrorBars);
        self
    }

    /// Stack columns by data row.
    pub fn row_stacked(&mut self) -> &mut Self {
        self.kind = Some(HistogramKind::RowStacked);
        self
    }

    /// Stack columns by data column.
    pub fn column_stacked(&mut self) -> &mut Self {
        self.kind = Some(HistogramKind::ColumnStacked);
        self
    }

    /// Gap between clusters, in box widths. Only meaningful for the clustered
    /// and errorbars layouts.
    pub fn gap(&mut self, gap: f64) -> &mut Self {
        self.gap = Some(gap);
        self
    }

    /// Render the `set style histogram` directive, or nothing.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(kind) = self.kind else {
            return String::new();
        };
        let mut cmd = format!("set style histogram {}", kind.keyword());
        if let Some(gap) = self.gap {
            if matches!(kind, HistogramKind::Clustered | HistogramKind::ErrorBars) {
                cmd.push_str(&format!(" gap {gap}"));
            }
        }
        cmd.push('\n');
        cmd
    }
}

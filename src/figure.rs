//! The figure document: global settings, plot entries, and artifact lifecycle.
//!
//! A [`Figure`] accumulates settings and draw calls, renders them into one
//! gnuplot script plus one multi-block data file, and hands both to the
//! gnuplot subprocess. Script and data file names are derived from a
//! process-wide counter, so concurrently alive figures never collide.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::dataset::{self, Sequence};
use crate::entry::{DrawStyle, PlotEntry};
use crate::error::Result;
use crate::format;
use crate::output::{self, OutputFormat};
use crate::palettes;
use crate::specs::{
    AxisLabelSpec, BorderSpec, FillStyleSpec, GridSpec, HistogramStyleSpec, LegendSpec,
    TicsMajorSpec, TicsMinorSpec, TicsSpec,
};

/// Counter of figures created in this process; feeds artifact file names.
static FIGURE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Default box width, relative to the slot width.
const DEFAULT_BOX_WIDTH_RELATIVE: f64 = 0.9;

fn banner(script: &mut String, heading: &str) {
    script.push_str(
        "#==============================================================================\n",
    );
    script.push_str("# ");
    script.push_str(heading);
    script.push('\n');
    script.push_str(
        "#==============================================================================\n",
    );
}

/// A figure composed of plot entries, global settings, and plot data.
///
/// ```rust,ignore
/// use gnuviz::prelude::*;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0];
/// let y = vec![1.0, 4.0, 9.0, 16.0];
///
/// let mut fig = Figure::new();
/// fig.x_range(0.0, 5.0);
/// fig.draw(DrawStyle::LinesPoints, &[&x, &y]).title("squares");
/// fig.save("squares.svg")?;
/// ```
#[derive(Debug)]
pub struct Figure {
    autoclean: bool,
    palette: Option<String>,
    width: usize,
    height: usize,
    script_filename: String,
    data_filename: String,
    data: String,
    num_datasets: usize,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    x_label: AxisLabelSpec,
    y_label: AxisLabelSpec,
    border: BorderSpec,
    grid: GridSpec,
    style_fill: FillStyleSpec,
    style_histogram: HistogramStyleSpec,
    tics: TicsSpec,
    x_tics_major_bottom: TicsMajorSpec,
    x_tics_major_top: TicsMajorSpec,
    x_tics_minor_bottom: TicsMinorSpec,
    x_tics_minor_top: TicsMinorSpec,
    y_tics_major_left: TicsMajorSpec,
    y_tics_major_right: TicsMajorSpec,
    y_tics_minor_left: TicsMinorSpec,
    y_tics_minor_right: TicsMinorSpec,
    legend: LegendSpec,
    samples: Option<usize>,
    box_width: Option<String>,
    entries: Vec<PlotEntry>,
    custom_commands: Vec<String>,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    /// Create a figure with default settings.
    ///
    /// Major and minor tics start shown on the bottom/left axes and hidden on
    /// the top/right axes; fills are solid without borders; box widths default
    /// to relative mode.
    #[must_use]
    pub fn new() -> Self {
        let id = FIGURE_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut figure = Self {
            autoclean: true,
            palette: None,
            width: 0,
            height: 0,
            script_filename: format!("show{id}.plt"),
            data_filename: format!("plot{id}.dat"),
            data: String::new(),
            num_datasets: 0,
            x_range: None,
            y_range: None,
            x_label: AxisLabelSpec::new("x"),
            y_label: AxisLabelSpec::new("y"),
            border: BorderSpec::new(),
            grid: GridSpec::new(),
            style_fill: FillStyleSpec::new(),
            style_histogram: HistogramStyleSpec::new(),
            tics: TicsSpec::new(),
            x_tics_major_bottom: TicsMajorSpec::new("x"),
            x_tics_major_top: TicsMajorSpec::new("x2"),
            x_tics_minor_bottom: TicsMinorSpec::new("x"),
            x_tics_minor_top: TicsMinorSpec::new("x2"),
            y_tics_major_left: TicsMajorSpec::new("y"),
            y_tics_major_right: TicsMajorSpec::new("y2"),
            y_tics_minor_left: TicsMinorSpec::new("y"),
            y_tics_minor_right: TicsMinorSpec::new("y2"),
            legend: LegendSpec::new(),
            samples: None,
            box_width: None,
            entries: Vec::new(),
            custom_commands: Vec::new(),
        };

        // Tics on the primary axes only.
        figure.x_tics_major_bottom.show();
        figure.x_tics_minor_bottom.show();
        figure.y_tics_major_left.show();
        figure.y_tics_minor_left.show();
        figure.x_tics_major_top.hide();
        figure.x_tics_minor_top.hide();
        figure.y_tics_major_right.hide();
        figure.y_tics_minor_right.hide();

        figure.style_fill.solid().border_hide();
        figure.box_width_relative(DEFAULT_BOX_WIDTH_RELATIVE);

        // Histogram entries carry no `with` keyword and draw through this
        // document-level data style instead.
        figure.command("set style data histogram");

        figure
    }

    // ========================================================================
    // Global settings
    // ========================================================================

    /// Select a color palette by name (e.g. `"dark2"`, `"viridis"`, `"jet"`).
    ///
    /// Unknown names fall back to the default palette at render time.
    pub fn palette(&mut self, name: &str) -> &mut Self {
        self.palette = Some(name.to_string());
        self
    }

    /// Set the figure size in points (1 inch = 72 points). A zero width or
    /// height means "use the default dimensions".
    pub fn size(&mut self, width: usize, height: usize) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the x-axis range.
    pub fn x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    /// Set the y-axis range.
    pub fn y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Set the x-axis label and return its spec for further styling.
    pub fn x_label(&mut self, text: &str) -> &mut AxisLabelSpec {
        self.x_label.text(text);
        &mut self.x_label
    }

    /// Set the y-axis label and return its spec for further styling.
    pub fn y_label(&mut self, text: &str) -> &mut AxisLabelSpec {
        self.y_label.text(text);
        &mut self.y_label
    }

    /// Set the default box width in absolute mode (units of the x axis).
    pub fn box_width_absolute(&mut self, width: f64) -> &mut Self {
        self.box_width = Some(format!("{width} absolute"));
        self
    }

    /// Set the default box width in relative mode (1.0 puts boxes side by
    /// side).
    pub fn box_width_relative(&mut self, width: f64) -> &mut Self {
        self.box_width = Some(format!("{width} relative"));
        self
    }

    /// Set the number of sample points for analytic expression plots.
    pub fn samples(&mut self, count: usize) -> &mut Self {
        self.samples = Some(count);
        self
    }

    /// Append a verbatim gnuplot command, rendered after the generated
    /// settings and before the plot directive, in insertion order.
    pub fn command(&mut self, command: &str) -> &mut Self {
        self.custom_commands.push(command.to_string());
        self
    }

    // ========================================================================
    // Spec accessors
    // ========================================================================

    /// Border spec of the plot area.
    pub fn border(&mut self) -> &mut BorderSpec {
        &mut self.border
    }

    /// Grid spec.
    pub fn grid(&mut self) -> &mut GridSpec {
        &mut self.grid
    }

    /// Fill style spec for paintable elements.
    pub fn style_fill(&mut self) -> &mut FillStyleSpec {
        &mut self.style_fill
    }

    /// Histogram layout spec.
    pub fn style_histogram(&mut self) -> &mut HistogramStyleSpec {
        &mut self.style_histogram
    }

    /// Legend spec.
    pub fn legend(&mut self) -> &mut LegendSpec {
        &mut self.legend
    }

    /// Options applied to all tics at once.
    pub fn tics(&mut self) -> &mut TicsSpec {
        &mut self.tics
    }

    /// Major x tics on the bottom axis (shorthand for
    /// [`x_tics_major_bottom`](Self::x_tics_major_bottom)).
    pub fn x_tics(&mut self) -> &mut TicsMajorSpec {
        self.x_tics_major_bottom()
    }

    /// Major y tics on the left axis (shorthand for
    /// [`y_tics_major_left`](Self::y_tics_major_left)).
    pub fn y_tics(&mut self) -> &mut TicsMajorSpec {
        self.y_tics_major_left()
    }

    /// Major x tics on the bottom axis.
    pub fn x_tics_major_bottom(&mut self) -> &mut TicsMajorSpec {
        &mut self.x_tics_major_bottom
    }

    /// Major x tics on the top axis.
    pub fn x_tics_major_top(&mut self) -> &mut TicsMajorSpec {
        &mut self.x_tics_major_top
    }

    /// Minor x tics on the bottom axis.
    pub fn x_tics_minor_bottom(&mut self) -> &mut TicsMinorSpec {
        &mut self.x_tics_minor_bottom
    }

    /// Minor x tics on the top axis.
    pub fn x_tics_minor_top(&mut self) -> &mut TicsMinorSpec {
        &mut self.x_tics_minor_top
    }

    /// Major y tics on the left axis.
    pub fn y_tics_major_left(&mut self) -> &mut TicsMajorSpec {
        &mut self.y_tics_major_left
    }

    /// Major y tics on the right axis.
    pub fn y_tics_major_right(&mut self) -> &mut TicsMajorSpec {
        &mut self.y_tics_major_right
    }

    /// Minor y tics on the left axis.
    pub fn y_tics_minor_left(&mut self) -> &mut TicsMinorSpec {
        &mut self.y_tics_minor_left
    }

    /// Minor y tics on the right axis.
    pub fn y_tics_minor_right(&mut self) -> &mut TicsMinorSpec {
        &mut self.y_tics_minor_right
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Draw the given columns with a semantic drawing kind.
    ///
    /// The first column is conventionally the independent variable. Columns
    /// are expected to have equal length; mismatched lengths truncate the
    /// dataset to the shortest column (no validation is performed).
    pub fn draw(&mut self, style: DrawStyle, columns: &[&dyn Sequence]) -> &mut PlotEntry {
        self.draw_with(style.keyword(), columns)
    }

    /// Draw the given columns with a raw gnuplot `with` keyword.
    ///
    /// Serializes one new dataset block, appends it to the figure's data
    /// buffer, and appends an entry referencing the block by index. Returns
    /// the entry for style chaining.
    pub fn draw_with(&mut self, with: &str, columns: &[&dyn Sequence]) -> &mut PlotEntry {
        let index = self.num_datasets;
        let rows = dataset::write_dataset(&mut self.data, index, columns);
        self.num_datasets += 1;
        log::debug!(
            "dataset {index}: {rows} rows, {} columns",
            columns.len()
        );

        let what = format!("'{}' index {index}", self.data_filename);
        self.push_entry(what, with)
    }

    /// Draw a literal gnuplot expression (e.g. `"sin(x)"`), with no dataset.
    pub fn draw_expression(&mut self, expression: &str, with: &str) -> &mut PlotEntry {
        self.push_entry(expression.to_string(), with)
    }

    fn push_entry(&mut self, what: String, with: &str) -> &mut PlotEntry {
        let mut entry = PlotEntry::new(what, with);
        // Default line style ordinal is the entry's 1-based position at append
        // time; it is never renumbered.
        entry.line_style(self.entries.len() + 1);
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    // ========================================================================
    // Rendering and lifecycle
    // ========================================================================

    /// Number of dataset blocks written so far.
    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.num_datasets
    }

    /// Accumulated data-file text.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Name of the script artifact.
    #[must_use]
    pub fn script_path(&self) -> &Path {
        Path::new(&self.script_filename)
    }

    /// Name of the data artifact.
    #[must_use]
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_filename)
    }

    fn dimensions(&self) -> (usize, usize) {
        let width = if self.width == 0 {
            output::DEFAULT_WIDTH
        } else {
            self.width
        };
        let height = if self.height == 0 {
            output::DEFAULT_HEIGHT
        } else {
            self.height
        };
        (width, height)
    }

    fn palette_commands(&self) -> (&str, &'static str) {
        let name = self.palette.as_deref().unwrap_or(palettes::DEFAULT_PALETTE);
        match palettes::commands(name) {
            Some(block) => (name, block),
            None => {
                log::warn!(
                    "unknown palette {name:?}, falling back to {:?}",
                    palettes::DEFAULT_PALETTE
                );
                (
                    palettes::DEFAULT_PALETTE,
                    palettes::commands(palettes::DEFAULT_PALETTE).unwrap_or_default(),
                )
            }
        }
    }

    /// Render the full gnuplot document text.
    ///
    /// Pure and idempotent: two calls with no intervening mutation produce
    /// byte-identical text. Order is fixed: palette, generated settings,
    /// custom commands, plot directive. Unset settings render nothing.
    #[must_use]
    pub fn render(&self) -> String {
        let mut script = String::new();

        let (palette_name, palette_block) = self.palette_commands();
        banner(&mut script, &format!("PALETTE ({palette_name})"));
        script.push_str(palette_block);

        banner(&mut script, "SETUP COMMANDS");
        let x_range = self.x_range.map(|(min, max)| format::range(min, max));
        let y_range = self.y_range.map(|(min, max)| format::range(min, max));
        script.push_str(&format::command_value(
            "set xrange",
            x_range.as_deref().unwrap_or(""),
        ));
        script.push_str(&format::command_value(
            "set yrange",
            y_range.as_deref().unwrap_or(""),
        ));
        script.push_str(&self.x_label.render());
        script.push_str(&self.y_label.render());
        script.push_str(&self.border.render());
        script.push_str(&self.grid.render());
        script.push_str(&self.style_fill.render());
        script.push_str(&self.style_histogram.render());
        script.push_str(&self.tics.render());
        script.push_str(&self.x_tics_major_bottom.render());
        script.push_str(&self.x_tics_major_top.render());
        script.push_str(&self.x_tics_minor_bottom.render());
        script.push_str(&self.x_tics_minor_top.render());
        script.push_str(&self.y_tics_major_left.render());
        script.push_str(&self.y_tics_major_right.render());
        script.push_str(&self.y_tics_minor_left.render());
        script.push_str(&self.y_tics_minor_right.render());
        script.push_str(&self.legend.render());
        script.push_str(&format::command_value(
            "set boxwidth",
            self.box_width.as_deref().unwrap_or(""),
        ));
        let samples = self.samples.map(|n| n.to_string());
        script.push_str(&format::command_value(
            "set samples",
            samples.as_deref().unwrap_or(""),
        ));

        if !self.custom_commands.is_empty() {
            banner(&mut script, "CUSTOM EXPLICIT GNUPLOT COMMANDS");
            for command in &self.custom_commands {
                script.push_str(command);
                script.push('\n');
            }
        }

        if !self.entries.is_empty() {
            banner(&mut script, "PLOT COMMANDS");
            script.push_str("plot ");
            let clauses: Vec<String> = self.entries.iter().map(PlotEntry::render).collect();
            script.push_str(&clauses.join(", "));
            script.push('\n');
        }

        script
    }

    fn show_script(&self) -> String {
        let (width, height) = self.dimensions();
        let mut script = output::show_terminal_command(width, height);
        script.push_str(&self.render());
        // Trailing blank line; gnuplot chokes on scripts without one.
        script.push('\n');
        script
    }

    fn save_script(&self, cleaned_path: &str) -> String {
        let extension = cleaned_path
            .rfind('.')
            .map_or(cleaned_path, |dot| &cleaned_path[dot + 1..]);
        let output_format = OutputFormat::from_extension(extension);

        let (width, height) = self.dimensions();
        let mut script = output::save_terminal_command(&output_format, width, height);
        script.push_str(&output::output_command(cleaned_path));
        script.push_str(&self.render());
        // Flush and release the output file before gnuplot exits.
        script.push_str("set output\n");
        script.push('\n');
        script
    }

    /// Write the accumulated plot data to the data artifact.
    ///
    /// Skipped entirely when no dataset block exists; no empty file is
    /// created.
    pub fn save_plot_data(&self) -> Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        fs::write(&self.data_filename, &self.data)?;
        log::debug!(
            "wrote {} bytes to {}",
            self.data.len(),
            self.data_filename
        );
        Ok(())
    }

    /// Show the figure in an interactive window.
    ///
    /// Writes the script and data artifacts, runs gnuplot in persist mode
    /// (blocking until the window closes), and removes the artifacts
    /// afterwards when auto-clean is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error when an artifact cannot be written or gnuplot cannot
    /// be launched or exits non-zero.
    pub fn show(&self) -> Result<()> {
        fs::write(&self.script_filename, self.show_script())?;
        self.save_plot_data()?;
        output::run_script(self.script_path(), true)?;
        if self.autoclean {
            self.cleanup();
        }
        Ok(())
    }

    /// Save the figure to a file; the extension picks the output format.
    ///
    /// Recognized extensions are `pdf`, `eps`, `svg`, `png`, and `jpeg`;
    /// anything else is passed to gnuplot verbatim as the terminal name.
    /// Removes the script/data artifacts afterwards when auto-clean is
    /// enabled (the saved figure itself is kept).
    ///
    /// # Errors
    ///
    /// Returns an error when an artifact cannot be written or gnuplot cannot
    /// be launched or exits non-zero.
    pub fn save(&self, path: &str) -> Result<()> {
        let cleaned = format::clean_path(path);
        fs::write(&self.script_filename, self.save_script(&cleaned))?;
        self.save_plot_data()?;
        output::run_script(self.script_path(), false)?;
        if self.autoclean {
            self.cleanup();
        }
        Ok(())
    }

    /// Toggle automatic removal of the script/data artifacts after
    /// [`show`](Self::show) and [`save`](Self::save). Enabled by default.
    pub fn autoclean(&mut self, enable: bool) -> &mut Self {
        self.autoclean = enable;
        self
    }

    /// Remove the script and data artifacts, best effort.
    ///
    /// Missing files are ignored; calling this repeatedly is a no-op.
    pub fn cleanup(&self) {
        output::remove_artifacts(&[&self.script_filename, &self.data_filename]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Axes, DrawStyle};

    #[test]
    fn test_artifact_names_are_unique_across_figures() {
        let first = Figure::new();
        let second = Figure::new();
        assert_ne!(first.script_path(), second.script_path());
        assert_ne!(first.data_path(), second.data_path());
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut fig = Figure::new();
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![4.0, 5.0, 6.0];
        fig.x_range(0.0, 4.0);
        fig.draw(DrawStyle::Lines, &[&x, &y]).title("data");

        assert_eq!(fig.render(), fig.render());
    }

    #[test]
    fn test_default_ordinals_are_one_based_insertion_positions() {
        let mut fig = Figure::new();
        let x = vec![1.0, 2.0];
        let y = vec![3.0, 4.0];

        fig.draw(DrawStyle::Lines, &[&x, &y]);
        fig.draw(DrawStyle::Points, &[&x, &y]);
        fig.draw_expression("sin(x)", "lines");

        let script = fig.render();
        assert!(script.contains("index 0 with lines linestyle 1"));
        assert!(script.contains("index 1 with points linestyle 2"));
        assert!(script.contains("sin(x) with lines linestyle 3"));
    }

    #[test]
    fn test_unset_range_is_absent_until_set() {
        let mut fig = Figure::new();
        assert!(!fig.render().contains("set xrange"));
        assert!(!fig.render().contains("set yrange"));

        fig.x_range(0.5, 2.5);
        let script = fig.render();
        assert_eq!(script.matches("set xrange").count(), 1);
        assert!(script.contains("set xrange [0.5:2.5]\n"));
        assert!(!script.contains("set yrange"));
    }

    #[test]
    fn test_two_draws_reference_consecutive_blocks() {
        let mut fig = Figure::new();
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![4.0, 5.0, 6.0];
        let x2 = vec![1.0, 2.0];
        let y2 = vec![7.0, 8.0];

        fig.draw(DrawStyle::Lines, &[&x, &y]);
        fig.draw(DrawStyle::Points, &[&x2, &y2]);

        assert_eq!(fig.dataset_count(), 2);

        // Block 0 has 3 rows, block 1 has 2 rows.
        let data = fig.data();
        let block0 = &data[..data.find("# dataset 1").unwrap()];
        assert_eq!(block0.trim_end().lines().count(), 1 + 3);
        let block1 = &data[data.find("# dataset 1").unwrap()..];
        assert_eq!(block1.trim_end().lines().count(), 1 + 2);

        // Both entries in one comma-joined plot directive.
        let script = fig.render();
        let data_file = fig.data_path().display().to_string();
        let plot_line = script
            .lines()
            .find(|line| line.starts_with("plot "))
            .unwrap();
        assert!(plot_line.contains(&format!("'{data_file}' index 0")));
        assert!(plot_line.contains(&format!(", '{data_file}' index 1")));
    }

    #[test]
    fn test_each_draw_increments_block_count_by_one() {
        let mut fig = Figure::new();
        let x = vec![1.0, 2.0];
        let y = vec![3.0, 4.0];
        let e = vec![0.1, 0.2];

        assert_eq!(fig.dataset_count(), 0);
        fig.draw(DrawStyle::Lines, &[&x, &y]);
        assert_eq!(fig.dataset_count(), 1);
        // Column count does not affect the increment.
        fig.draw(DrawStyle::YErrorBars, &[&x, &y, &e]);
        assert_eq!(fig.dataset_count(), 2);
    }

    #[test]
    fn test_expression_draw_writes_no_data() {
        let mut fig = Figure::new();
        fig.draw_expression("sin(x)*cos(x)", "linespoints");

        assert_eq!(fig.dataset_count(), 0);
        assert!(fig.data().is_empty());
        assert!(fig.render().contains("plot sin(x)*cos(x) with linespoints"));
    }

    #[test]
    fn test_custom_commands_render_between_settings_and_plot() {
        let mut fig = Figure::new();
        let x = vec![1.0];
        let y = vec![2.0];
        fig.command("set angles degrees");
        fig.draw(DrawStyle::Lines, &[&x, &y]);

        let script = fig.render();
        let custom = script.find("set angles degrees").unwrap();
        let tics = script.find("set xtics").unwrap();
        let plot = script.find("\nplot ").unwrap();
        assert!(tics < custom);
        assert!(custom < plot);
    }

    #[test]
    fn test_default_figure_settings() {
        let script = Figure::new().render();

        // Primary-axis tics shown, secondary hidden.
        assert!(script.contains("set xtics\n"));
        assert!(script.contains("set mxtics\n"));
        assert!(script.contains("unset x2tics\n"));
        assert!(script.contains("unset my2tics\n"));
        // Solid borderless fills and relative box width.
        assert!(script.contains("set style fill solid noborder\n"));
        assert!(script.contains("set boxwidth 0.9 relative\n"));
        // Histogram entries need the document-level data style.
        assert!(script.contains("set style data histogram\n"));
    }

    #[test]
    fn test_palette_commands_lead_the_script() {
        let mut fig = Figure::new();
        fig.palette("viridis");
        let script = fig.render();

        assert!(script.contains("PALETTE (viridis)"));
        assert!(script.find("set style line 1").unwrap() < script.find("SETUP").unwrap());
    }

    #[test]
    fn test_unknown_palette_falls_back_to_default() {
        let mut fig = Figure::new();
        fig.palette("not-a-palette");
        let script = fig.render();
        assert!(script.contains(&format!("PALETTE ({})", palettes::DEFAULT_PALETTE)));
    }

    #[test]
    fn test_show_script_has_interactive_header_and_trailing_blank_line() {
        let mut fig = Figure::new();
        fig.size(800, 600);
        let x = vec![1.0];
        let y = vec![2.0];
        fig.draw(DrawStyle::Lines, &[&x, &y]);

        let script = fig.show_script();
        assert!(script.starts_with("set terminal qt size 800,600"));
        assert!(script.ends_with("\n\n"));
    }

    #[test]
    fn test_save_script_headers_differ_by_extension() {
        let mut fig = Figure::new();
        let x = vec![1.0];
        let y = vec![2.0];
        fig.draw(DrawStyle::Lines, &[&x, &y]);

        let svg = fig.save_script("out.svg");
        let pdf = fig.save_script("out.pdf");

        assert!(svg.contains("set terminal svg size 600,450"));
        assert!(svg.contains("set output 'out.svg'\n"));
        assert!(pdf.contains("set terminal pdfcairo size"));
        assert!(pdf.contains("in,"));
        assert_ne!(svg.lines().next(), pdf.lines().next());

        // Output redirect opens before the plot and is reset after it.
        let open = svg.find("set output 'out.svg'").unwrap();
        let plot = svg.find("\nplot ").unwrap();
        let reset = svg.rfind("set output\n").unwrap();
        assert!(open < plot);
        assert!(plot < reset);
    }

    #[test]
    fn test_default_size_substituted_when_zero() {
        let fig = Figure::new();
        let script = fig.show_script();
        assert!(script.contains(&format!(
            "size {},{}",
            output::DEFAULT_WIDTH,
            output::DEFAULT_HEIGHT
        )));
    }

    #[test]
    fn test_axes_and_smooth_chain_through_draw() {
        let mut fig = Figure::new();
        let x = vec![1.0, 2.0];
        let y = vec![3.0, 4.0];
        fig.draw(DrawStyle::Lines, &[&x, &y])
            .axes(Axes::X1Y2)
            .smooth(crate::entry::Smooth::CSplines)
            .line_width(2.0);

        let script = fig.render();
        assert!(script.contains("smooth csplines axes x1y2"));
        assert!(script.contains("with lines linestyle 1 linewidth 2"));
    }

    #[test]
    fn test_histogram_draw_has_no_with_clause() {
        let mut fig = Figure::new();
        let y = vec![3.0, 1.0, 4.0];
        fig.draw(DrawStyle::Histogram, &[&y]);

        let script = fig.render();
        let plot_line = script
            .lines()
            .find(|line| line.starts_with("plot "))
            .unwrap();
        assert!(!plot_line.contains(" with "));
        assert!(plot_line.contains("index 0 linestyle 1"));
    }
}

//! Terminal selection and header commands.
//!
//! Interactive display uses the `qt` terminal in persist mode; file output
//! picks a terminal from the save path's extension. Sizes are given in points
//! except for pdf, which takes physical inches.

use crate::format;

/// Default figure width in points, used when the caller sets no size.
pub const DEFAULT_WIDTH: usize = 600;

/// Default figure height in points, used when the caller sets no size.
pub const DEFAULT_HEIGHT: usize = 450;

/// Font passed to every terminal.
const DEFAULT_FONT: &str = "Georgia,10";

/// Output format selected from a save path's extension.
///
/// Unrecognized extensions pass through verbatim as the terminal keyword;
/// gnuplot reports the failure itself if it has no such terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Portable document format (print-oriented, physical units).
    Pdf,
    /// Encapsulated postscript.
    Eps,
    /// Scalable vector graphics.
    Svg,
    /// Portable network graphics.
    Png,
    /// JPEG raster image.
    Jpeg,
    /// Any other extension, passed through as the terminal keyword.
    Other(String),
}

impl OutputFormat {
    /// Select the format for a file extension (case-insensitive).
    #[must_use]
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "eps" => Self::Eps,
            "svg" => Self::Svg,
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            _ => Self::Other(extension.to_string()),
        }
    }

    /// The gnuplot terminal keyword for this format.
    #[must_use]
    pub fn terminal(&self) -> &str {
        match self {
            Self::Pdf => "pdfcairo",
            Self::Eps => "epscairo",
            Self::Svg => "svg",
            Self::Png => "pngcairo",
            Self::Jpeg => "jpeg",
            Self::Other(extension) => extension,
        }
    }

    /// Whether this format's terminal takes its size in inches.
    #[must_use]
    pub fn uses_inches(&self) -> bool {
        matches!(self, Self::Pdf)
    }
}

/// Terminal header for interactive display.
#[must_use]
pub fn show_terminal_command(width: usize, height: usize) -> String {
    format!(
        "set terminal qt size {} enhanced font '{DEFAULT_FONT}' persist\n",
        format::size(width, height, false)
    )
}

/// Terminal header for file output.
#[must_use]
pub fn save_terminal_command(output: &OutputFormat, width: usize, height: usize) -> String {
    format!(
        "set terminal {} size {} enhanced font '{DEFAULT_FONT}'\n",
        output.terminal(),
        format::size(width, height, output.uses_inches())
    )
}

/// The `set output` redirect command for a save path.
#[must_use]
pub fn output_command(path: &str) -> String {
    format!("set output {}\n", format::quoted(path))
}

//! Formatting helpers for gnuplot literal syntax.
//!
//! Pure functions converting numeric and textual values into the exact text
//! gnuplot expects: ranges, size strings, quoted strings, and `set` commands.

/// Conversion factor from points to inches (1 inch = 72 points).
pub(crate) const POINT_TO_INCHES: f64 = 1.0 / 72.0;

/// Format a two-ended range as `[min:max]`.
///
/// Numbers use their default `Display` rendering so the text round-trips the
/// value's effective representation.
#[must_use]
pub fn range(min: f64, max: f64) -> String {
    format!("[{min}:{max}]")
}

/// Format a terminal size string from width and height in points.
///
/// Print-oriented terminals take physical units: with `as_inches` the
/// dimensions are converted at 72 points per inch and suffixed with `in`.
#[must_use]
pub fn size(width: usize, height: usize, as_inches: bool) -> String {
    if as_inches {
        let w = width as f64 * POINT_TO_INCHES;
        let h = height as f64 * POINT_TO_INCHES;
        format!("{w}in,{h}in")
    } else {
        format!("{width},{height}")
    }
}

/// Rewrite a path so it survives gnuplot's quoted-argument parsing.
///
/// Backslashes become forward slashes and quote characters are dropped.
#[must_use]
pub fn clean_path(path: &str) -> String {
    path.chars()
        .filter(|c| *c != '\'' && *c != '"')
        .map(|c| if c == '\\' { '/' } else { c })
        .collect()
}

/// Single-quote a string, doubling any embedded single quotes.
#[must_use]
pub fn quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Format a `set` command line, or nothing when the value is unset.
///
/// An empty value means the setting was never configured; no stray directive
/// is emitted for it.
#[must_use]
pub fn command_value(command: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{command} {value}\n")
    }
}

//! Output side: terminal/format selection and the gnuplot subprocess.

mod runner;
mod terminal;

pub use runner::{remove_artifacts, run_script, version, Version};
pub use terminal::{
    output_command, save_terminal_command, show_terminal_command, OutputFormat, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};

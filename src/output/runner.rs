//! Gnuplot subprocess invocation and artifact removal.
//!
//! The renderer is resolved on PATH at invocation time; a missing executable
//! surfaces as [`Error::Spawn`], a non-zero exit as [`Error::Renderer`]. The
//! call blocks until gnuplot exits (interactive windows hold the process).

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

const RENDERER: &str = "gnuplot";

/// Run gnuplot on a script, blocking until it exits.
///
/// `persistent` keeps interactive plot windows open after the script finishes.
///
/// # Errors
///
/// Returns [`Error::Spawn`] when gnuplot cannot be launched and
/// [`Error::Renderer`] when it exits with a non-zero status.
pub fn run_script(script: &Path, persistent: bool) -> Result<()> {
    run_renderer(RENDERER, script, persistent)
}

fn run_renderer(program: &str, script: &Path, persistent: bool) -> Result<()> {
    let mut command = Command::new(program);
    if persistent {
        command.arg("-persist");
    }
    command.arg(script);

    log::debug!("invoking {program} on {}", script.display());

    let status = command.status().map_err(|source| Error::Spawn {
        program: program.to_string(),
        source,
    })?;

    if !status.success() {
        log::warn!("{program} exited with {status}");
        return Err(Error::Renderer { status });
    }
    Ok(())
}

/// Remove generated artifacts, best effort.
///
/// Missing files and permission errors are ignored; cleanup is a convenience,
/// not a correctness requirement.
pub fn remove_artifacts<P: AsRef<Path>>(paths: &[P]) {
    for path in paths {
        let path = path.as_ref();
        if fs::remove_file(path).is_ok() {
            log::debug!("removed {}", path.display());
        }
    }
}

/// Parsed gnuplot version banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    /// Major version number.
    pub major: u32,
    /// Minor version number.
    pub minor: u32,
    /// Patch level, kept verbatim (may be non-numeric, e.g. `rc1`).
    pub patch: String,
}

/// Probe the installed gnuplot version.
///
/// Runs `gnuplot --version` and parses a banner of the form
/// `gnuplot 5.4 patchlevel 2`.
///
/// # Errors
///
/// Returns [`Error::Spawn`] when gnuplot cannot be launched and
/// [`Error::Version`] when the banner does not parse.
pub fn version() -> Result<Version> {
    let output = Command::new(RENDERER)
        .arg("--version")
        .output()
        .map_err(|source| Error::Spawn {
            program: RENDERER.to_string(),
            source,
        })?;

    let banner = String::from_utf8_lossy(&output.stdout).into_owned();
    parse_version(&banner).ok_or(Error::Version { output: banner })
}

fn parse_version(banner: &str) -> Option<Version> {
    let mut words = banner.split_whitespace();
    if words.next() != Some("gnuplot") {
        return None;
    }
    let mut release = words.next()?.split('.');
    let major = release.next()?.parse().ok()?;
    let minor = release.next()?.parse().ok()?;

    // "patchlevel N" may be absent in some builds.
    let patch = match words.next() {
        Some("patchlevel") => words.next().unwrap_or_default().to_string(),
        _ => String::new(),
    };

    Some(Version {
        major,
        minor,
        patch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_renderer_is_a_spawn_error() {
        let script = PathBuf::from("does-not-matter.plt");
        let result = run_renderer("this_renderer_does_not_exist_12345", &script, false);
        assert!(matches!(result, Err(Error::Spawn { .. })));
    }

    #[test]
    fn test_parse_version_banner() {
        let version = parse_version("gnuplot 5.4 patchlevel 2").unwrap();
        assert_eq!(version.major, 5);
        assert_eq!(version.minor, 4);
        assert_eq!(version.patch, "2");
    }

    #[test]
    fn test_parse_version_without_patchlevel() {
        let version = parse_version("gnuplot 6.0").unwrap();
        assert_eq!(version.major, 6);
        assert_eq!(version.minor, 0);
        assert_eq!(version.patch, "");
    }

    #[test]
    fn test_parse_version_rejects_garbage() {
        assert!(parse_version("not a banner").is_none());
        assert!(parse_version("").is_none());
    }

    #[test]
    fn test_remove_artifacts_ignores_missing_files() {
        // Must not panic or error on files that were never created.
        remove_artifacts(&["never-existed-0.plt", "never-existed-0.dat"]);
    }

    #[test]
    fn test_version_probe_does_not_panic() {
        // gnuplot may or may not be installed where tests run; both outcomes
        // are acceptable, only a panic is a failure.
        match version() {
            Ok(v) => assert!(v.major >= 4),
            Err(Error::Spawn { .. } | Error::Version { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}

//! Artifact lifecycle tests.
//!
//! Exercise the figure's file-facing surface — data artifact contents,
//! cleanup semantics, artifact naming — without invoking gnuplot.

#![allow(clippy::unwrap_used)]

use gnuviz::prelude::*;

// ============================================================================
// DATA ARTIFACT
// ============================================================================

#[test]
fn data_artifact_holds_all_blocks_in_creation_order() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![4.0, 5.0, 6.0];
    let x2 = vec![1.0, 2.0];
    let y2 = vec![7.0, 8.0];

    let mut fig = Figure::new();
    fig.autoclean(false);
    fig.draw(DrawStyle::Lines, &[&x, &y]);
    fig.draw(DrawStyle::Points, &[&x2, &y2]);

    fig.save_plot_data().unwrap();

    let data = std::fs::read_to_string(fig.data_path()).unwrap();
    let block0 = data.find("# dataset 0").unwrap();
    let block1 = data.find("# dataset 1").unwrap();
    assert!(block0 < block1);
    assert!(data.contains("1 4\n2 5\n3 6\n"));
    assert!(data.contains("1 7\n2 8\n"));

    fig.cleanup();
}

#[test]
fn empty_figure_writes_no_data_artifact() {
    let mut fig = Figure::new();
    fig.autoclean(false);
    fig.draw_expression("sin(x)", "lines");

    fig.save_plot_data().unwrap();

    assert!(!fig.data_path().exists());
}

// ============================================================================
// CLEANUP SEMANTICS
// ============================================================================

#[test]
fn cleanup_removes_artifacts_and_is_idempotent() {
    let x = vec![1.0, 2.0];
    let y = vec![3.0, 4.0];

    let mut fig = Figure::new();
    fig.autoclean(false);
    fig.draw(DrawStyle::Lines, &[&x, &y]);

    // With auto-clean disabled the artifact stays on disk after writing.
    fig.save_plot_data().unwrap();
    assert!(fig.data_path().exists());

    // Explicit cleanup removes it; a second call must not error or panic.
    fig.cleanup();
    assert!(!fig.data_path().exists());
    fig.cleanup();
}

#[test]
fn cleanup_on_a_fresh_figure_is_a_no_op() {
    let fig = Figure::new();
    fig.cleanup();
}

// ============================================================================
// ARTIFACT NAMING
// ============================================================================

#[test]
fn artifact_names_never_collide_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let fig = Figure::new();
                fig.script_path().display().to_string()
            })
        })
        .collect();

    let mut names: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn script_and_data_names_share_the_figure_id() {
    let fig = Figure::new();
    let script = fig.script_path().display().to_string();
    let data = fig.data_path().display().to_string();

    let script_id = script
        .trim_start_matches("show")
        .trim_end_matches(".plt")
        .to_string();
    let data_id = data
        .trim_start_matches("plot")
        .trim_end_matches(".dat")
        .to_string();
    assert_eq!(script_id, data_id);
    assert!(script_id.parse::<usize>().is_ok());
}

// ============================================================================
// RENDERED DOCUMENT
// ============================================================================

#[test]
fn rendered_document_orders_settings_before_plot() {
    let x = vec![1.0, 2.0];
    let y = vec![3.0, 4.0];

    let mut fig = Figure::new();
    fig.x_range(0.0, 3.0);
    fig.y_range(0.0, 5.0);
    fig.x_label("time");
    fig.legend().inside(Vertical::Top, Horizontal::Left);
    fig.command("set angles degrees");
    fig.draw(DrawStyle::Lines, &[&x, &y]).title("measured");

    let script = fig.render();
    let xrange = script.find("set xrange [0:3]").unwrap();
    let yrange = script.find("set yrange [0:5]").unwrap();
    let label = script.find("set xlabel 'time'").unwrap();
    let key = script.find("set key inside top left").unwrap();
    let custom = script.find("set angles degrees").unwrap();
    let plot = script.find("\nplot ").unwrap();

    assert!(xrange < yrange);
    assert!(yrange < label);
    assert!(label < key);
    assert!(key < custom);
    assert!(custom < plot);
    assert!(script.contains("title 'measured'"));
}

#[test]
fn save_formats_select_distinct_terminals() {
    use gnuviz::output::{save_terminal_command, OutputFormat};

    let svg = save_terminal_command(&OutputFormat::from_extension("svg"), 640, 480);
    let pdf = save_terminal_command(&OutputFormat::from_extension("pdf"), 640, 480);

    assert!(svg.contains("svg size 640,480"));
    assert!(pdf.contains("pdfcairo"));
    assert_ne!(svg, pdf);
}

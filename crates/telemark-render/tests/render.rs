//! Integration tests for report assembly over a synthetic artifact folder.

use std::path::Path;

use tempfile::TempDir;

use telemark_ingest::discover_artifacts;
use telemark_model::{RenderOptions, bank_marketing_report};
use telemark_render::render_report;

fn write_artifacts(dir: &Path) {
    std::fs::write(
        dir.join("attributes.csv"),
        "name,type,description\n\
         age,numeric,Client age in years\n\
         job,categorical,Kind of job\n\
         poutcome,categorical,Outcome of the previous campaign\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("rf_params.csv"),
        "parameter,value\nn_estimators,400\nmax_depth,18\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("logreg_params.csv"),
        "parameter,value\nC,0.75\npenalty,l2\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("coefficients.csv"),
        "feature,coefficient\n\
         poutcome_success,1.52\n\
         month_mar,0.84\n\
         duration,0.61\n\
         housing_yes,-0.42\n\
         contact_unknown,-1.10\n",
    )
    .unwrap();
    std::fs::write(dir.join("rf_confusion.png"), b"not-really-a-png").unwrap();
    std::fs::write(dir.join("logreg_confusion.png"), b"also-not-a-png").unwrap();
}

#[test]
fn renders_the_full_report() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    let output_dir = dir.path().join("out");

    let artifacts = discover_artifacts(dir.path()).unwrap();
    let report = bank_marketing_report();
    let options = RenderOptions::new(&output_dir);
    let summary = render_report(&artifacts, &report, &options).unwrap();

    assert_eq!(summary.blocks.len(), report.blocks.len());

    let html = std::fs::read_to_string(output_dir.join("report.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Bank telemarketing"));

    // Attribute table preserved: every source cell present, column order kept.
    for cell in ["age", "job", "poutcome", "Client age in years"] {
        assert!(html.contains(cell), "missing cell {cell:?}");
    }
    let name_pos = html.find("<th>name</th>").unwrap();
    let description_pos = html.find("<th>description</th>").unwrap();
    assert!(name_pos < description_pos);

    // Hand-entered scores rendered to two decimals.
    assert!(html.contains("0.91"));
    assert!(html.contains("Precision"));

    // Images copied and referenced relatively.
    assert!(html.contains("assets/rf_confusion.png"));
    assert!(output_dir.join("assets/rf_confusion.png").is_file());
    assert!(output_dir.join("assets/logreg_confusion.png").is_file());

    // Charts written as SVG assets.
    assert!(
        output_dir
            .join("assets/strongest-positive-coefficients.svg")
            .is_file()
    );
    assert!(
        output_dir
            .join("assets/strongest-negative-coefficients.svg")
            .is_file()
    );
}

#[test]
fn table_row_counts_reach_the_summary() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    let output_dir = dir.path().join("out");

    let artifacts = discover_artifacts(dir.path()).unwrap();
    let report = bank_marketing_report();
    let summary = render_report(&artifacts, &report, &RenderOptions::new(&output_dir)).unwrap();

    let attribute_table = summary
        .blocks
        .iter()
        .find(|outcome| outcome.kind == "table")
        .expect("report has tables");
    assert_eq!(attribute_table.rows, Some(3));

    // Slices shrink to the five available coefficients.
    let charts: Vec<_> = summary
        .blocks
        .iter()
        .filter(|outcome| outcome.kind == "chart")
        .collect();
    assert_eq!(charts.len(), 2);
    assert_eq!(charts[0].rows, Some(5));
    assert_eq!(charts[1].rows, Some(5));
}

#[test]
fn summary_json_is_written_and_parses() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    let output_dir = dir.path().join("out");

    let artifacts = discover_artifacts(dir.path()).unwrap();
    let report = bank_marketing_report();
    render_report(&artifacts, &report, &RenderOptions::new(&output_dir)).unwrap();

    let raw = std::fs::read_to_string(output_dir.join("render_summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["schema"], "telemark.render-summary");
    assert_eq!(
        value["blocks"].as_array().unwrap().len(),
        report.blocks.len()
    );
}

#[test]
fn self_contained_report_inlines_charts() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    let output_dir = dir.path().join("out");

    let artifacts = discover_artifacts(dir.path()).unwrap();
    let report = bank_marketing_report();
    let options = RenderOptions::new(&output_dir).with_self_contained(true);
    render_report(&artifacts, &report, &options).unwrap();

    let html = std::fs::read_to_string(output_dir.join("report.html")).unwrap();
    assert!(html.contains("<svg"));
    assert!(html.contains("poutcome_success"));
    assert!(!output_dir.join("assets/strongest-positive-coefficients.svg").exists());
}

#[test]
fn missing_artifact_fails_the_render() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    std::fs::remove_file(dir.path().join("coefficients.csv")).unwrap();
    let output_dir = dir.path().join("out");

    let artifacts = discover_artifacts(dir.path()).unwrap();
    let report = bank_marketing_report();
    let error = render_report(&artifacts, &report, &RenderOptions::new(&output_dir)).unwrap_err();
    assert!(error.to_string().contains("coefficients"));
}

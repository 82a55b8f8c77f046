//! Integration tests for the pipeline module.

use std::path::Path;

use tempfile::TempDir;

use telemark_cli::pipeline::{check_artifacts, run_pipeline};
use telemark_ingest::sha256_hex;
use telemark_model::{RenderOptions, bank_marketing_report};

fn write_artifacts(dir: &Path) {
    std::fs::write(
        dir.join("attributes.csv"),
        "name,type,description\nage,numeric,Client age in years\n",
    )
    .unwrap();
    std::fs::write(dir.join("rf_params.csv"), "parameter,value\nmax_depth,18\n").unwrap();
    std::fs::write(dir.join("logreg_params.csv"), "parameter,value\nC,0.75\n").unwrap();
    std::fs::write(
        dir.join("coefficients.csv"),
        "feature,coefficient\npoutcome_success,1.52\ncontact_unknown,-1.10\n",
    )
    .unwrap();
    std::fs::write(dir.join("rf_confusion.png"), b"png-one").unwrap();
    std::fs::write(dir.join("logreg_confusion.png"), b"png-two").unwrap();
}

fn write_manifest(dir: &Path, coefficients_body: &[u8]) {
    let manifest = format!(
        "[manifest]\n\
         schema = \"telemark.artifacts-manifest\"\n\
         schema_version = 1\n\
         \n\
         [[files]]\n\
         path = \"coefficients.csv\"\n\
         sha256 = \"{}\"\n\
         role = \"coefficients\"\n",
        sha256_hex(coefficients_body)
    );
    std::fs::write(dir.join("artifacts.toml"), manifest).unwrap();
}

#[test]
fn pipeline_renders_with_a_clean_manifest() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    let body = std::fs::read(dir.path().join("coefficients.csv")).unwrap();
    write_manifest(dir.path(), &body);

    let report = bank_marketing_report();
    let output_dir = dir.path().join("report");
    let summary = run_pipeline(
        dir.path(),
        &report,
        &RenderOptions::new(&output_dir),
        false,
    )
    .unwrap();

    assert_eq!(summary.blocks.len(), report.blocks.len());
    assert!(output_dir.join("report.html").is_file());
    assert!(output_dir.join("render_summary.json").is_file());
}

#[test]
fn tampered_manifest_blocks_the_render() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    write_manifest(dir.path(), b"what the manifest expected");

    let report = bank_marketing_report();
    let output_dir = dir.path().join("report");
    let error = run_pipeline(
        dir.path(),
        &report,
        &RenderOptions::new(&output_dir),
        false,
    )
    .unwrap_err();

    assert!(error.to_string().contains("manifest verification failed"));
    assert!(!output_dir.join("report.html").exists());
}

#[test]
fn skip_flag_renders_past_a_bad_manifest() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    write_manifest(dir.path(), b"stale pin");

    let report = bank_marketing_report();
    let output_dir = dir.path().join("report");
    run_pipeline(dir.path(), &report, &RenderOptions::new(&output_dir), true).unwrap();
    assert!(output_dir.join("report.html").is_file());
}

#[test]
fn check_reports_missing_artifacts() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("attributes.csv"),
        "name,type,description\n",
    )
    .unwrap();

    let outcome = check_artifacts(dir.path()).unwrap();
    assert!(!outcome.is_clean());
    assert_eq!(outcome.artifacts.missing().len(), 5);
    assert!(outcome.manifest.is_none());
}

#[test]
fn check_passes_a_complete_folder() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    let body = std::fs::read(dir.path().join("coefficients.csv")).unwrap();
    write_manifest(dir.path(), &body);
    std::fs::write(dir.path().join("notes.txt"), b"scratch").unwrap();

    let outcome = check_artifacts(dir.path()).unwrap();
    assert!(outcome.is_clean());
    let report = outcome.manifest.unwrap();
    assert_eq!(report.checked, 1);
    assert_eq!(outcome.unclaimed.len(), 1);
    assert!(outcome.unclaimed[0].ends_with("notes.txt"));
}

#[test]
fn report_outline_is_stable() {
    let report = bank_marketing_report();
    let kinds: Vec<&str> = report.blocks.iter().map(|block| block.kind()).collect();
    insta::assert_snapshot!(
        kinds.join(" "),
        @"paragraph heading paragraph table heading paragraph table table heading paragraph scores figure scores figure heading paragraph chart chart paragraph heading paragraph"
    );
}

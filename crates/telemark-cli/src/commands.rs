use anyhow::Result;
use comfy_table::Table;

use telemark_cli::pipeline::{CheckOutcome, check_artifacts, run_pipeline};
use telemark_model::{ChartSlices, RenderOptions, bank_marketing_report};

use crate::cli::{CheckArgs, RenderArgs};
use crate::summary::{apply_table_style, print_check_report};
use crate::types::RenderResult;

pub fn run_render(args: &RenderArgs) -> Result<RenderResult> {
    let report = bank_marketing_report();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.artifact_dir.join("report"));
    let slices = ChartSlices {
        top: args.top.unwrap_or(report.slices.top),
        bottom: args.bottom.unwrap_or(report.slices.bottom),
    };
    let options = RenderOptions::new(&output_dir)
        .with_slices(slices)
        .with_self_contained(args.self_contained);

    let summary = run_pipeline(&args.artifact_dir, &report, &options, args.no_manifest_check)?;
    Ok(RenderResult {
        output_dir,
        summary,
    })
}

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let outcome = check_artifacts(&args.artifact_dir)?;
    print_check_report(&outcome);
    Ok(outcome)
}

pub fn run_blocks() -> Result<()> {
    let report = bank_marketing_report();
    let mut table = Table::new();
    table.set_header(vec!["#", "Kind", "Content"]);
    apply_table_style(&mut table);
    for (index, block) in report.blocks.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            block.kind().to_string(),
            truncate_label(block.label()),
        ]);
    }
    println!("{}", report.title);
    println!("{table}");
    Ok(())
}

fn truncate_label(label: &str) -> String {
    const MAX: usize = 60;
    let mut out = String::new();
    for word in label.split_whitespace() {
        if out.len() + word.len() + 1 > MAX {
            out.push_str(" ...");
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use telemark_cli::pipeline::CheckOutcome;
use telemark_model::ArtifactRole;

use crate::types::RenderResult;

pub fn print_render_summary(result: &RenderResult) {
    println!("Report: {}", result.summary.report_path.display());
    println!("Output: {}", result.output_dir.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Kind"),
        header_cell("Content"),
        header_cell("Source"),
        header_cell("Rows"),
        header_cell("Asset"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for (index, block) in result.summary.blocks.iter().enumerate() {
        let is_prose = matches!(block.kind, "heading" | "paragraph");
        let content_cell = if is_prose {
            dim_cell(&block.title)
        } else {
            Cell::new(&block.title)
        };
        let source = block
            .source
            .as_ref()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
            .map(ToString::to_string);
        table.add_row(vec![
            Cell::new(index + 1),
            kind_cell(block.kind),
            content_cell,
            source.map_or_else(|| dim_cell("-"), Cell::new),
            block
                .rows
                .map_or_else(|| dim_cell("-"), Cell::new),
            block
                .asset
                .clone()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
}

pub fn print_check_report(outcome: &CheckOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("File"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for role in ArtifactRole::ALL {
        let status = if outcome.artifacts.path(role).is_some() {
            Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("missing")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            Cell::new(role.as_str()),
            Cell::new(role.file_name()),
            status,
        ]);
    }
    println!("{table}");

    match &outcome.manifest {
        None => println!("No manifest (artifacts.toml) present."),
        Some(report) if report.is_clean() => {
            println!("Manifest: {} pinned file(s), all clean.", report.checked);
        }
        Some(report) => {
            println!("Manifest findings:");
            let mut findings = Table::new();
            findings.set_header(vec![header_cell("Path"), header_cell("Finding")]);
            apply_table_style(&mut findings);
            for finding in &report.findings {
                findings.add_row(vec![
                    Cell::new(finding.path.display()),
                    Cell::new(finding.kind.to_string()).fg(Color::Red),
                ]);
            }
            println!("{findings}");
        }
    }

    if !outcome.unclaimed.is_empty() {
        println!("Unclaimed files:");
        for path in &outcome.unclaimed {
            println!("- {}", path.display());
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: &str) -> Cell {
    match kind {
        "table" | "scores" => Cell::new(kind).fg(Color::Blue),
        "figure" | "chart" => Cell::new(kind).fg(Color::Cyan),
        _ => dim_cell(kind),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

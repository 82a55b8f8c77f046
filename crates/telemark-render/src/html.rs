//! HTML document assembly.
//!
//! The block list is walked once, front to back; each block renders
//! independently of the others. Any missing or malformed artifact aborts the
//! render with a contextual error.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::{debug, info};

use telemark_chart::{BarChart, bottom_slice, format_label, rank_coefficients, svg_string,
    top_slice, write_svg_file};
use telemark_ingest::{ArtifactSet, read_artifact_table, read_coefficients};
use telemark_model::{
    ArtifactRole, ArtifactTable, Block, ChartEnd, CoefficientRow, ModelScores, RenderOptions,
    ReportDefinition,
};

use crate::assets::copy_asset;
use crate::common::{ASSETS_DIR_NAME, REPORT_FILE_NAME, STYLESHEET, slugify, write_text_element};
use crate::summary::{BlockOutcome, RenderSummary, write_render_summary};

/// Assemble the report and write it, its assets and its summary to disk.
pub fn render_report(
    artifacts: &ArtifactSet,
    report: &ReportDefinition,
    options: &RenderOptions,
) -> Result<RenderSummary> {
    let output_dir = options.output_dir.as_path();
    let assets_dir = output_dir.join(ASSETS_DIR_NAME);
    std::fs::create_dir_all(&assets_dir)
        .with_context(|| format!("create {}", assets_dir.display()))?;

    let slices = options.slices.unwrap_or(report.slices);

    // The coefficient table backs both charts; load and rank it once.
    let ranked = if report
        .blocks
        .iter()
        .any(|block| matches!(block, Block::Chart { .. }))
    {
        let path = artifacts.require(ArtifactRole::Coefficients)?;
        let rows = read_coefficients(path)?;
        debug!(rows = rows.len(), "coefficients loaded");
        Some(rank_coefficients(rows))
    } else {
        None
    };

    let report_path = output_dir.join(REPORT_FILE_NAME);
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut summary = RenderSummary::new(&report.title, generated_at.clone(), report_path.clone());

    let file =
        File::create(&report_path).with_context(|| format!("create {}", report_path.display()))?;
    let mut buffered = BufWriter::new(file);
    let mut xml = Writer::new_with_indent(&mut buffered, b' ', 2);

    xml.write_event(Event::DocType(BytesText::new("html")))?;
    let mut html = BytesStart::new("html");
    html.push_attribute(("lang", "en"));
    xml.write_event(Event::Start(html))?;

    write_head(&mut xml, &report.title)?;

    xml.write_event(Event::Start(BytesStart::new("body")))?;
    xml.write_event(Event::Start(BytesStart::new("main")))?;
    write_text_element(&mut xml, "h1", &report.title)?;

    for block in &report.blocks {
        let outcome = match block {
            Block::Heading { level, text } => {
                let tag = format!("h{}", (*level).clamp(1, 6));
                write_text_element(&mut xml, &tag, text)?;
                BlockOutcome::new(block.kind(), text)
            }
            Block::Paragraph { text } => {
                write_text_element(&mut xml, "p", text)?;
                BlockOutcome::new(block.kind(), preview(text))
            }
            Block::Table { caption, source } => {
                let path = artifacts.require(*source)?;
                let table = read_artifact_table(path)?;
                write_table(&mut xml, caption, &table)?;
                BlockOutcome::new(block.kind(), caption)
                    .with_source(path)
                    .with_rows(table.row_count())
            }
            Block::Figure {
                caption,
                source,
                alt,
            } => {
                let path = artifacts.require(*source)?;
                let name = copy_asset(path, &assets_dir)?;
                write_figure(&mut xml, caption, &format!("{ASSETS_DIR_NAME}/{name}"), alt)?;
                BlockOutcome::new(block.kind(), caption)
                    .with_source(path)
                    .with_asset(name)
            }
            Block::Chart { title, end } => {
                let ranked = ranked
                    .as_ref()
                    .context("chart block without a coefficient table")?;
                let slice = chart_slice(ranked, *end, slices.top, slices.bottom);
                let chart = BarChart::build(title.clone(), slice);
                let mut outcome = BlockOutcome::new(block.kind(), title).with_rows(slice.len());
                if options.self_contained {
                    write_inline_chart(&mut xml, title, &chart)?;
                } else {
                    let name = format!("{}.svg", slugify(title));
                    write_svg_file(&chart, &assets_dir.join(&name))?;
                    write_figure(&mut xml, title, &format!("{ASSETS_DIR_NAME}/{name}"), title)?;
                    outcome = outcome.with_asset(name);
                }
                outcome
            }
            Block::Scores { caption, scores } => {
                write_scores(&mut xml, caption, scores)?;
                BlockOutcome::new(block.kind(), caption).with_rows(scores.classes.len())
            }
        };
        summary.push(outcome);
    }

    write_footer(&mut xml, &generated_at)?;
    xml.write_event(Event::End(BytesEnd::new("main")))?;
    xml.write_event(Event::End(BytesEnd::new("body")))?;
    xml.write_event(Event::End(BytesEnd::new("html")))?;
    buffered
        .flush()
        .with_context(|| format!("write {}", report_path.display()))?;

    write_render_summary(output_dir, &summary)?;
    info!(
        report = %report_path.display(),
        blocks = summary.blocks.len(),
        "report rendered"
    );
    Ok(summary)
}

fn chart_slice(
    ranked: &[CoefficientRow],
    end: ChartEnd,
    top: usize,
    bottom: usize,
) -> &[CoefficientRow] {
    match end {
        ChartEnd::Top => top_slice(ranked, top),
        ChartEnd::Bottom => bottom_slice(ranked, bottom),
    }
}

fn write_head<W: Write>(xml: &mut Writer<W>, title: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("head")))?;

    let mut charset = BytesStart::new("meta");
    charset.push_attribute(("charset", "utf-8"));
    xml.write_event(Event::Empty(charset))?;

    let mut viewport = BytesStart::new("meta");
    viewport.push_attribute(("name", "viewport"));
    viewport.push_attribute(("content", "width=device-width, initial-scale=1"));
    xml.write_event(Event::Empty(viewport))?;

    write_text_element(xml, "title", title)?;

    xml.write_event(Event::Start(BytesStart::new("style")))?;
    xml.write_event(Event::Text(BytesText::from_escaped(STYLESHEET)))?;
    xml.write_event(Event::End(BytesEnd::new("style")))?;

    xml.write_event(Event::End(BytesEnd::new("head")))?;
    Ok(())
}

fn write_table<W: Write>(xml: &mut Writer<W>, caption: &str, table: &ArtifactTable) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("table")))?;
    write_text_element(xml, "caption", caption)?;

    xml.write_event(Event::Start(BytesStart::new("thead")))?;
    xml.write_event(Event::Start(BytesStart::new("tr")))?;
    for header in &table.headers {
        write_text_element(xml, "th", header)?;
    }
    xml.write_event(Event::End(BytesEnd::new("tr")))?;
    xml.write_event(Event::End(BytesEnd::new("thead")))?;

    xml.write_event(Event::Start(BytesStart::new("tbody")))?;
    for row in &table.rows {
        xml.write_event(Event::Start(BytesStart::new("tr")))?;
        for cell in row {
            if cell.parse::<f64>().is_ok() {
                let mut td = BytesStart::new("td");
                td.push_attribute(("class", "numeric"));
                xml.write_event(Event::Start(td))?;
                xml.write_event(Event::Text(BytesText::new(cell)))?;
                xml.write_event(Event::End(BytesEnd::new("td")))?;
            } else {
                write_text_element(xml, "td", cell)?;
            }
        }
        xml.write_event(Event::End(BytesEnd::new("tr")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("tbody")))?;

    xml.write_event(Event::End(BytesEnd::new("table")))?;
    Ok(())
}

fn write_scores<W: Write>(xml: &mut Writer<W>, caption: &str, scores: &ModelScores) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("table")))?;
    write_text_element(xml, "caption", caption)?;

    xml.write_event(Event::Start(BytesStart::new("thead")))?;
    xml.write_event(Event::Start(BytesStart::new("tr")))?;
    for header in ["Class", "Precision", "Recall", "F1"] {
        write_text_element(xml, "th", header)?;
    }
    xml.write_event(Event::End(BytesEnd::new("tr")))?;
    xml.write_event(Event::End(BytesEnd::new("thead")))?;

    xml.write_event(Event::Start(BytesStart::new("tbody")))?;
    for class in &scores.classes {
        xml.write_event(Event::Start(BytesStart::new("tr")))?;
        write_text_element(xml, "td", &class.label)?;
        for metric in [class.precision, class.recall, class.f1] {
            let mut td = BytesStart::new("td");
            td.push_attribute(("class", "numeric"));
            xml.write_event(Event::Start(td))?;
            xml.write_event(Event::Text(BytesText::new(&format_label(metric))))?;
            xml.write_event(Event::End(BytesEnd::new("td")))?;
        }
        xml.write_event(Event::End(BytesEnd::new("tr")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("tbody")))?;

    xml.write_event(Event::Start(BytesStart::new("tfoot")))?;
    xml.write_event(Event::Start(BytesStart::new("tr")))?;
    write_text_element(xml, "td", "accuracy")?;
    let mut td = BytesStart::new("td");
    td.push_attribute(("class", "numeric"));
    td.push_attribute(("colspan", "3"));
    xml.write_event(Event::Start(td))?;
    xml.write_event(Event::Text(BytesText::new(&format_label(scores.accuracy))))?;
    xml.write_event(Event::End(BytesEnd::new("td")))?;
    xml.write_event(Event::End(BytesEnd::new("tr")))?;
    xml.write_event(Event::End(BytesEnd::new("tfoot")))?;

    xml.write_event(Event::End(BytesEnd::new("table")))?;
    Ok(())
}

fn write_figure<W: Write>(xml: &mut Writer<W>, caption: &str, src: &str, alt: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("figure")))?;
    let mut img = BytesStart::new("img");
    img.push_attribute(("src", src));
    img.push_attribute(("alt", alt));
    xml.write_event(Event::Empty(img))?;
    write_text_element(xml, "figcaption", caption)?;
    xml.write_event(Event::End(BytesEnd::new("figure")))?;
    Ok(())
}

fn write_inline_chart<W: Write>(xml: &mut Writer<W>, title: &str, chart: &BarChart) -> Result<()> {
    let svg = svg_string(chart)?;
    xml.write_event(Event::Start(BytesStart::new("figure")))?;
    // Already-valid XML; pass it through untouched.
    xml.write_event(Event::Text(BytesText::from_escaped(svg)))?;
    write_text_element(xml, "figcaption", title)?;
    xml.write_event(Event::End(BytesEnd::new("figure")))?;
    Ok(())
}

fn write_footer<W: Write>(xml: &mut Writer<W>, generated_at: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("footer")))?;
    write_text_element(
        xml,
        "p",
        &format!(
            "Generated by telemark on {generated_at}. Evaluation scores are \
             transcribed constants; tables and charts come from pipeline artifacts."
        ),
    )?;
    xml.write_event(Event::End(BytesEnd::new("footer")))?;
    Ok(())
}

/// First few words of a paragraph, for the summary listing.
fn preview(text: &str) -> String {
    let mut words = text.split_whitespace();
    let head: Vec<&str> = words.by_ref().take(6).collect();
    let mut out = head.join(" ");
    if words.next().is_some() {
        out.push_str(" ...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_text() {
        assert_eq!(preview("one two"), "one two");
        assert_eq!(
            preview("one two three four five six seven"),
            "one two three four five six ..."
        );
    }
}

//! SVG emission for bar charts.
//!
//! Output is deterministic for a given chart: same bars, same bytes. That is
//! what makes the generated figures diffable between report runs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::layout::{BAR_HEIGHT, BarChart, CHART_WIDTH, LABEL_COLUMN};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "system-ui, sans-serif";
const BACKGROUND_FILL: &str = "#ffffff";
const TITLE_FILL: &str = "#111827";
const FEATURE_FILL: &str = "#374151";

/// Render a chart to an SVG string.
pub fn svg_string(chart: &BarChart) -> Result<String> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_svg(chart, &mut xml)?;
    let bytes = xml.into_inner();
    String::from_utf8(bytes).context("svg output is not utf-8")
}

/// Render a chart to a file.
pub fn write_svg_file(chart: &BarChart, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let mut xml = Writer::new_with_indent(&mut writer, b' ', 2);
    write_svg(chart, &mut xml)?;
    writer.flush().with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn write_svg<W: Write>(chart: &BarChart, xml: &mut Writer<W>) -> Result<()> {
    let height = chart.height();

    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("width", CHART_WIDTH.to_string().as_str()));
    root.push_attribute(("height", height.to_string().as_str()));
    root.push_attribute((
        "viewBox",
        format!("0 0 {CHART_WIDTH} {height}").as_str(),
    ));
    root.push_attribute(("role", "img"));
    root.push_attribute(("font-family", FONT_FAMILY));
    xml.write_event(Event::Start(root))?;

    write_text_element(xml, "title", &chart.title)?;

    let mut background = BytesStart::new("rect");
    background.push_attribute(("width", CHART_WIDTH.to_string().as_str()));
    background.push_attribute(("height", height.to_string().as_str()));
    background.push_attribute(("fill", BACKGROUND_FILL));
    xml.write_event(Event::Empty(background))?;

    write_title(xml, &chart.title)?;

    for (index, bar) in chart.bars.iter().enumerate() {
        let y = BarChart::row_y(index);
        let text_y = y + BAR_HEIGHT / 2 + 5;
        let length = chart.bar_length(bar.value);

        let mut feature = BytesStart::new("text");
        feature.push_attribute(("x", (LABEL_COLUMN - 10).to_string().as_str()));
        feature.push_attribute(("y", text_y.to_string().as_str()));
        feature.push_attribute(("text-anchor", "end"));
        feature.push_attribute(("font-size", "13"));
        feature.push_attribute(("fill", FEATURE_FILL));
        xml.write_event(Event::Start(feature))?;
        xml.write_event(Event::Text(BytesText::new(&bar.feature)))?;
        xml.write_event(Event::End(BytesEnd::new("text")))?;

        let mut rect = BytesStart::new("rect");
        rect.push_attribute(("x", LABEL_COLUMN.to_string().as_str()));
        rect.push_attribute(("y", y.to_string().as_str()));
        rect.push_attribute(("width", format!("{length:.1}").as_str()));
        rect.push_attribute(("height", BAR_HEIGHT.to_string().as_str()));
        rect.push_attribute(("rx", "2"));
        rect.push_attribute(("fill", BarChart::fill(bar.value)));
        xml.write_event(Event::Empty(rect))?;

        let value_x = f64::from(LABEL_COLUMN) + length + 8.0;
        let mut value = BytesStart::new("text");
        value.push_attribute(("x", format!("{value_x:.1}").as_str()));
        value.push_attribute(("y", text_y.to_string().as_str()));
        value.push_attribute(("font-size", "13"));
        value.push_attribute(("fill", TITLE_FILL));
        xml.write_event(Event::Start(value))?;
        xml.write_event(Event::Text(BytesText::new(&bar.label)))?;
        xml.write_event(Event::End(BytesEnd::new("text")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("svg")))?;
    Ok(())
}

fn write_title<W: Write>(xml: &mut Writer<W>, title: &str) -> Result<()> {
    let mut text = BytesStart::new("text");
    text.push_attribute(("x", "16"));
    text.push_attribute(("y", "30"));
    text.push_attribute(("font-size", "16"));
    text.push_attribute(("font-weight", "600"));
    text.push_attribute(("fill", TITLE_FILL));
    xml.write_event(Event::Start(text))?;
    xml.write_event(Event::Text(BytesText::new(title)))?;
    xml.write_event(Event::End(BytesEnd::new("text")))?;
    Ok(())
}

fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{NEGATIVE_FILL, POSITIVE_FILL};
    use telemark_model::CoefficientRow;

    fn sample_chart() -> BarChart {
        BarChart::build(
            "Strongest positive coefficients",
            &[
                CoefficientRow::new("poutcome_success", 1.5),
                CoefficientRow::new("contact_unknown", -0.5),
            ],
        )
    }

    #[test]
    fn svg_carries_labels_bars_and_colors() {
        let svg = svg_string(&sample_chart()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("poutcome_success"));
        assert!(svg.contains("contact_unknown"));
        assert!(svg.contains("1.50"));
        assert!(svg.contains("-0.50"));
        assert!(svg.contains(POSITIVE_FILL));
        assert!(svg.contains(NEGATIVE_FILL));
        assert_eq!(svg.matches("<rect").count(), 3); // background + two bars
    }

    #[test]
    fn feature_names_are_escaped() {
        let chart = BarChart::build("t", &[CoefficientRow::new("a<b&c", 1.0)]);
        let svg = svg_string(&chart).unwrap();
        assert!(svg.contains("a&lt;b&amp;c"));
        assert!(!svg.contains("a<b"));
    }

    #[test]
    fn output_is_deterministic() {
        let a = svg_string(&sample_chart()).unwrap();
        let b = svg_string(&sample_chart()).unwrap();
        assert_eq!(a, b);
    }
}

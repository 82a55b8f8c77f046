//! Shared helpers for HTML assembly.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// File name of the rendered document inside the output directory.
pub const REPORT_FILE_NAME: &str = "report.html";

/// Directory for copied images and generated charts, relative to the report.
pub const ASSETS_DIR_NAME: &str = "assets";

/// Embedded stylesheet. Kept free of characters the XML writer would escape.
pub const STYLESHEET: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; color: #111827; background: #f9fafb; }\n\
main { max-width: 920px; margin: 0 auto; padding: 2rem 1.5rem 4rem; }\n\
h1 { font-size: 1.6rem; line-height: 1.3; }\n\
h2 { font-size: 1.2rem; margin-top: 2.5rem; }\n\
p { line-height: 1.6; }\n\
table { border-collapse: collapse; width: 100%; margin: 1rem 0 2rem; background: #ffffff; }\n\
caption { caption-side: top; text-align: left; font-weight: 600; padding: 0.5rem 0; }\n\
th, td { border: 1px solid #e5e7eb; padding: 0.4rem 0.6rem; text-align: left; font-size: 0.9rem; }\n\
th { background: #f3f4f6; }\n\
td.numeric { text-align: right; font-variant-numeric: tabular-nums; }\n\
figure { margin: 1rem 0 2rem; }\n\
figure img { max-width: 100%; height: auto; }\n\
figcaption { font-size: 0.85rem; color: #6b7280; padding-top: 0.4rem; }\n\
footer { margin-top: 3rem; font-size: 0.8rem; color: #6b7280; }\n";

/// Write `<name>text</name>`.
pub fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// File-name slug for a generated chart: lowercase, runs of non-alphanumerics
/// collapsed to single dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash && !slug.is_empty() {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Strongest positive coefficients"), "strongest-positive-coefficients");
        assert_eq!(slugify("  A -- b  "), "a-b");
        assert_eq!(slugify("(top 10)"), "top-10");
    }

    #[test]
    fn stylesheet_survives_xml_text_escaping() {
        assert!(!STYLESHEET.contains('<'));
        assert!(!STYLESHEET.contains('>'));
        assert!(!STYLESHEET.contains('&'));
    }
}

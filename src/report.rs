//! HTML report rendering.
//!
//! The template lives in the working directory as `comparison-template.html`
//! and must contain a single `{% for table in tables %} .. {% endfor %}`
//! block with `{{ table.title }}` / `{{ table.body }}` placeholders.

use std::fs;
use std::path::Path;

use crate::CompareError;

pub const TEMPLATE_FILE: &str = "comparison-template.html";

/// One rendered comparison section: the compared column name and its HTML
/// table body.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub body: String,
}

/// Render the report using `comparison-template.html` from the working
/// directory, overwriting `output`.
pub fn render_report(tables: &[ReportTable], output: &Path) -> Result<(), CompareError> {
    render_report_from(Path::new(TEMPLATE_FILE), tables, output)
}

pub fn render_report_from(
    template: &Path,
    tables: &[ReportTable],
    output: &Path,
) -> Result<(), CompareError> {
    let source = fs::read_to_string(template)
        .map_err(|e| CompareError::template(format!("{}: {e}", template.display())))?;
    let html = render_template(&source, tables)?;
    fs::write(output, html).map_err(|e| CompareError::io(format!("{}: {e}", output.display())))
}

/// Expand the template's loop block once per table. Zero tables leave the
/// surrounding document intact with no sections.
pub fn render_template(source: &str, tables: &[ReportTable]) -> Result<String, CompareError> {
    let (for_start, for_end) = find_tag(source, "for table in tables").ok_or_else(|| {
        CompareError::template("missing '{% for table in tables %}' block".to_string())
    })?;
    let tail = &source[for_end..];
    let (end_start, end_end) = find_tag(tail, "endfor")
        .ok_or_else(|| CompareError::template("missing '{% endfor %}' tag".to_string()))?;
    let section = &tail[..end_start];

    let mut html = String::new();
    html.push_str(&source[..for_start]);
    for table in tables {
        html.push_str(&expand_section(section, table)?);
    }
    html.push_str(&tail[end_end..]);
    Ok(html)
}

/// Byte range of the first `{% .. %}` tag whose trimmed body matches.
fn find_tag(source: &str, body: &str) -> Option<(usize, usize)> {
    let mut search = 0;
    while let Some(open_rel) = source[search..].find("{%") {
        let open = search + open_rel;
        let close = source[open + 2..].find("%}")? + open + 2;
        if source[open + 2..close].trim() == body {
            return Some((open, close + 2));
        }
        search = close + 2;
    }
    None
}

fn expand_section(section: &str, table: &ReportTable) -> Result<String, CompareError> {
    let mut expanded = String::new();
    let mut rest = section;
    while let Some(open) = rest.find("{{") {
        let Some(close_rel) = rest[open + 2..].find("}}") else {
            return Err(CompareError::template(
                "unterminated '{{' placeholder".to_string(),
            ));
        };
        let close = open + 2 + close_rel;
        expanded.push_str(&rest[..open]);
        match rest[open + 2..close].trim() {
            "table.title" => expanded.push_str(&table.title),
            "table.body" => expanded.push_str(&table.body),
            other => {
                return Err(CompareError::template(format!(
                    "unknown placeholder '{other}'"
                )));
            }
        }
        rest = &rest[close + 2..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}

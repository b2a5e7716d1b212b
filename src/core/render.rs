//! Renderer module
//!
//! Renders a run report to stdout formats: jsonl, json, md, table

use serde::Serialize;
use std::io::Write;

use crate::core::model::{CountRecord, DocumentFailure, RunReport, TABLE_HEADER};
use crate::core::paths::normalize_path;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "table" | "txt" => Ok(OutputFormat::Table),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// One line of machine-readable output
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum OutputLine<'a> {
    Count(&'a CountRecord),
    Error(ErrorLine),
}

#[derive(Debug, Serialize)]
struct ErrorLine {
    code: &'static str,
    document: String,
    path: String,
    message: String,
}

impl From<&DocumentFailure> for ErrorLine {
    fn from(failure: &DocumentFailure) -> Self {
        Self {
            code: failure.error.code(),
            document: failure.label.clone(),
            path: normalize_path(&failure.path),
            message: failure.error.to_string(),
        }
    }
}

/// Renderer for run reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &RunReport) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report),
            OutputFormat::Table => self.render_table(report),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, report: &RunReport, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        writeln!(writer, "{}", output)
    }

    fn lines<'a>(&self, report: &'a RunReport) -> Vec<OutputLine<'a>> {
        report
            .table
            .iter()
            .map(OutputLine::Count)
            .chain(
                report
                    .failures
                    .iter()
                    .map(|f| OutputLine::Error(ErrorLine::from(f))),
            )
            .collect()
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, report: &RunReport) -> String {
        self.lines(report)
            .iter()
            .filter_map(|line| {
                if self.config.pretty {
                    serde_json::to_string_pretty(line).ok()
                } else {
                    serde_json::to_string(line).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, report: &RunReport) -> String {
        let lines = self.lines(report);
        if self.config.pretty {
            serde_json::to_string_pretty(&lines).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&lines).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, report: &RunReport) -> String {
        let mut output = String::new();

        if !report.failures.is_empty() {
            output.push_str("## Errors\n\n");
            for failure in &report.failures {
                output.push_str(&format!(
                    "- **{}** `{}`: {}\n",
                    failure.error.code(),
                    failure.label,
                    failure.error
                ));
            }
            output.push('\n');
        }

        if !report.table.is_empty() {
            output.push_str("## Counts\n\n");
            output.push_str(&format!("| {} |\n", TABLE_HEADER.join(" | ")));
            output.push_str("|---|---|---:|\n");
            for record in &report.table {
                output.push_str(&format!(
                    "| `{}` | {} | {} |\n",
                    record.document,
                    escape_md_cell(&record.value),
                    record.count
                ));
            }
            output.push('\n');
        }

        output
    }

    /// Render as an aligned plain-text table
    fn render_table(&self, report: &RunReport) -> String {
        let rows: Vec<[String; 3]> = report
            .table
            .iter()
            .map(|r| [r.document.clone(), r.value.clone(), r.count.to_string()])
            .collect();

        let mut widths = TABLE_HEADER.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = TABLE_HEADER.map(String::from);
        std::iter::once(&header)
            .chain(rows.iter())
            .map(|row| {
                format!(
                    "{:<w0$}  {:<w1$}  {:>w2$}",
                    row[0],
                    row[1],
                    row[2],
                    w0 = widths[0],
                    w1 = widths[1],
                    w2 = widths[2]
                )
                .trim_end()
                .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn escape_md_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

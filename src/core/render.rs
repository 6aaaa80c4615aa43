//! Renderer module
//!
//! Renders reports to different output formats: text, json, jsonl

use serde::Serialize;
use std::io::Write;

use crate::core::extra_lists::ExtraLists;
use crate::core::model::{Summary, HEADER_DISTINCT, HEADER_FILENAME, HEADER_TOTAL};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
            color: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Anything the renderer can print: machine-readable records plus a text form
pub trait Report {
    type Record: Serialize;

    /// Records emitted in json/jsonl mode
    fn records(&self) -> &[Self::Record];

    /// Human-readable form
    fn to_text(&self, color: bool) -> String;
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
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
    pub fn render<R: Report>(&self, report: &R) -> String {
        match self.config.format {
            OutputFormat::Text => report.to_text(self.config.color),
            OutputFormat::Json => self.render_json(report.records()),
            OutputFormat::Jsonl => self.render_jsonl(report.records()),
        }
    }

    /// Render to a writer, newline terminated
    pub fn render_to<R: Report, W: Write>(&self, report: &R, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        if output.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}", output)
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl<T: Serialize>(&self, records: &[T]) -> String {
        records
            .iter()
            .filter_map(|record| {
                if self.config.pretty {
                    serde_json::to_string_pretty(record).ok()
                } else {
                    serde_json::to_string(record).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json<T: Serialize>(&self, records: &[T]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

impl Report for Summary {
    type Record = crate::core::model::SummaryRow;

    fn records(&self) -> &[Self::Record] {
        &self.rows
    }

    fn to_text(&self, _color: bool) -> String {
        if self.rows.is_empty() {
            return "There are no files to display".to_string();
        }

        let w = self.widths;
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(format!(
            "{:<fw$}  {:>tw$}  {:>dw$}",
            HEADER_FILENAME,
            HEADER_TOTAL,
            HEADER_DISTINCT,
            fw = w.filename,
            tw = w.total,
            dw = w.distinct
        ));
        for row in &self.rows {
            lines.push(format!(
                "{:<fw$}  {:>tw$}  {:>dw$}",
                row.filename,
                row.total_words,
                row.distinct_words,
                fw = w.filename,
                tw = w.total,
                dw = w.distinct
            ));
        }
        lines.join("\n")
    }
}

impl Report for ExtraLists {
    type Record = ExtraLists;

    fn records(&self) -> &[Self::Record] {
        std::slice::from_ref(self)
    }

    fn to_text(&self, _color: bool) -> String {
        let mut output = String::from("IGNORE:");
        for word in &self.ignore {
            output.push('\n');
            output.push_str(word);
        }
        output.push_str("\nHIGHLIGHT:");
        for word in &self.highlight {
            output.push('\n');
            output.push_str(word);
        }
        output
    }
}

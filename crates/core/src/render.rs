use std::io::{self, Write};

use chrono::{Local, NaiveDateTime};
use owo_colors::{OwoColorize, Style};

use crate::Report;

const DEFAULT_TITLE: &str = "🤖 Agent Response";
const DEFAULT_RULE_WIDTH: usize = 80;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const INDENT: &str = "   ";
const NO_RESPONSE: &str = "No response found";
const UNKNOWN: &str = "N/A";

/// Builder for [`RenderConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderConfigBuilder {
    colored: Option<bool>,
    title: Option<String>,
    rule_width: Option<usize>,
}

impl RenderConfigBuilder {
    /// Creates a builder with everything left to the defaults.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables ANSI colors.
    #[inline]
    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = Some(colored);
        self
    }

    /// Sets the title shown in the banner.
    #[inline]
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the width of the horizontal rules.
    #[inline]
    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = Some(width);
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> RenderConfig {
        RenderConfig {
            colored: self.colored.unwrap_or(true),
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            rule_width: self.rule_width.unwrap_or(DEFAULT_RULE_WIDTH),
        }
    }
}

/// Configuration of a [`Renderer`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    pub(crate) colored: bool,
    pub(crate) title: String,
    pub(crate) rule_width: usize,
}

impl RenderConfig {
    /// The configuration for sinks that are not terminals: no ANSI escape
    /// sequences, everything else default.
    #[inline]
    pub fn plain() -> Self {
        RenderConfigBuilder::new().with_colored(false).build()
    }

    /// Returns `true` if the output contains ANSI colors.
    #[inline]
    pub fn colored(&self) -> bool {
        self.colored
    }
}

impl Default for RenderConfig {
    #[inline]
    fn default() -> Self {
        RenderConfigBuilder::new().build()
    }
}

/// Renders reports as a line-oriented transcript for the terminal.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Creates a renderer with the given configuration.
    #[inline]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renders the report, stamped with the current local time.
    pub fn render(
        &self,
        report: &Report,
        question: &str,
        model: &str,
    ) -> String {
        self.render_at(report, question, model, Local::now().naive_local())
    }

    /// Renders the report with a fixed timestamp.
    ///
    /// The output only depends on the arguments and the configuration.
    pub fn render_at(
        &self,
        report: &Report,
        question: &str,
        model: &str,
        timestamp: NaiveDateTime,
    ) -> String {
        let rule = "=".repeat(self.config.rule_width);
        let mut lines = Vec::new();

        // Banner.
        lines.push(String::new());
        lines.push(self.paint(&rule, rule_style()));
        lines.push(
            self.paint(&format!("  {}", self.config.title), heading_style()),
        );
        lines.push(self.paint(&rule, rule_style()));

        lines.push(format!(
            "{} {}",
            self.paint("📅 Timestamp:", label_style()),
            timestamp.format(TIMESTAMP_FORMAT)
        ));
        lines.push(format!(
            "{} {model}",
            self.paint("🔧 Model:", label_style())
        ));

        lines.push(String::new());
        lines.push(self.paint("❓ Question:", heading_style()));
        for line in question.split('\n') {
            lines.push(self.paint(&format!("{INDENT}{line}"), body_style()));
        }

        lines.push(String::new());
        lines.push(self.paint("💬 Answer:", heading_style()));
        match report.final_answer() {
            Some(answer) => {
                for line in answer.split('\n') {
                    let line = line.trim();
                    if line.is_empty() {
                        lines.push(String::new());
                    } else {
                        let line = format!("{INDENT}{line}");
                        lines.push(self.paint(&line, body_style()));
                    }
                }
            }
            None => {
                lines.push(self.paint(
                    &format!("{INDENT}{NO_RESPONSE}"),
                    missing_style(),
                ));
            }
        }

        lines.push(String::new());
        lines.push(self.paint("📊 Metadata:", heading_style()));
        // Usage without any counter is shown as no usage at all.
        let usage = report.usage().filter(|usage| !usage.is_empty());
        if let Some(usage) = usage {
            lines.push(self.metadata_line(
                "Input tokens",
                &count_or_unknown(usage.input_tokens),
            ));
            lines.push(self.metadata_line(
                "Output tokens",
                &count_or_unknown(usage.output_tokens),
            ));
            lines.push(self.metadata_line(
                "Total tokens",
                &count_or_unknown(usage.total_tokens),
            ));
        }
        if report.tool_call_count() > 0 {
            lines.push(self.metadata_line(
                "Tool calls made",
                &report.tool_call_count().to_string(),
            ));
        }
        lines.push(self.metadata_line(
            "Total messages",
            &report.message_count().to_string(),
        ));

        lines.push(self.paint(&rule, rule_style()));
        lines.push(String::new());

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    /// Renders the report with the current local time and writes it to
    /// `writer`.
    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        report: &Report,
        question: &str,
        model: &str,
    ) -> io::Result<()> {
        let rendered = self.render(report, question, model);
        writer.write_all(rendered.as_bytes())?;
        writer.flush()
    }

    fn metadata_line(&self, label: &str, value: &str) -> String {
        format!(
            "{} {value}",
            self.paint(&format!("{INDENT}• {label}:"), label_style())
        )
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.config.colored {
            text.style(style).to_string()
        } else {
            text.to_owned()
        }
    }
}

/// Renders the report and prints it to the standard output.
///
/// A failed write is logged and otherwise ignored.
pub fn print_report(
    report: &Report,
    question: &str,
    model: &str,
    config: RenderConfig,
) {
    let renderer = Renderer::new(config);
    let mut stdout = io::stdout().lock();
    if let Err(err) = renderer.write_to(&mut stdout, report, question, model)
    {
        warn!("failed to print the report: {err}");
    }
}

#[inline]
fn count_or_unknown(count: Option<u64>) -> String {
    count.map_or_else(|| UNKNOWN.to_owned(), |count| count.to_string())
}

#[inline]
fn rule_style() -> Style {
    Style::new().bright_blue()
}

#[inline]
fn heading_style() -> Style {
    Style::new().bright_blue().bold()
}

#[inline]
fn label_style() -> Style {
    Style::new().bright_magenta()
}

#[inline]
fn body_style() -> Style {
    Style::new().bright_black()
}

#[inline]
fn missing_style() -> Style {
    Style::new().bright_red()
}

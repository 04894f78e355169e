//! Output sinks receiving rendered tutorial content.

use crate::chart::ChartArtifact;
use crate::content::Dataset;
use serde::Serialize;
use std::io::{self, Write};

/// Accepts ordered writes of tutorial content.
pub trait OutputSink {
    fn write_heading(&mut self, text: &str) -> io::Result<()>;

    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// `language` is passed through verbatim as a display hint.
    fn write_code(&mut self, code: &str, language: &str) -> io::Result<()>;

    fn write_chart(&mut self, artifact: &ChartArtifact) -> io::Result<()>;

    fn write_table(&mut self, dataset: &Dataset) -> io::Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_heading(&mut self, text: &str) -> io::Result<()> {
        (**self).write_heading(text)
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn write_code(&mut self, code: &str, language: &str) -> io::Result<()> {
        (**self).write_code(code, language)
    }

    fn write_chart(&mut self, artifact: &ChartArtifact) -> io::Result<()> {
        (**self).write_chart(artifact)
    }

    fn write_table(&mut self, dataset: &Dataset) -> io::Result<()> {
        (**self).write_table(dataset)
    }
}

/// Human-readable output to any writer.
pub struct TerminalSink<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        TerminalSink { out, styled: false }
    }

    /// Emit ANSI bold around headings
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn write_heading(&mut self, text: &str) -> io::Result<()> {
        let underline = "=".repeat(text.chars().count());
        if self.styled {
            writeln!(self.out, "\x1b[1m{}\x1b[0m", text)?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        writeln!(self.out, "{}\n", underline)
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}\n", text)
    }

    fn write_code(&mut self, code: &str, language: &str) -> io::Result<()> {
        writeln!(self.out, "```{}\n{}\n```\n", language, code)
    }

    fn write_chart(&mut self, artifact: &ChartArtifact) -> io::Result<()> {
        writeln!(self.out, "{}", artifact.body)
    }

    fn write_table(&mut self, dataset: &Dataset) -> io::Result<()> {
        const LABEL_HEADER: &str = "Category";
        const VALUE_HEADER: &str = "Value";

        let label_width = dataset
            .rows()
            .iter()
            .map(|r| r.label.chars().count())
            .chain(std::iter::once(LABEL_HEADER.len()))
            .max()
            .unwrap_or(LABEL_HEADER.len());
        let value_width = dataset
            .rows()
            .iter()
            .map(|r| r.value.to_string().len())
            .chain(std::iter::once(VALUE_HEADER.len()))
            .max()
            .unwrap_or(VALUE_HEADER.len());

        writeln!(
            self.out,
            "{:<lw$} | {:>vw$}",
            LABEL_HEADER,
            VALUE_HEADER,
            lw = label_width,
            vw = value_width
        )?;
        writeln!(
            self.out,
            "{}-+-{}",
            "-".repeat(label_width),
            "-".repeat(value_width)
        )?;
        for row in dataset.rows() {
            writeln!(
                self.out,
                "{:<lw$} | {:>vw$}",
                row.label,
                row.value,
                lw = label_width,
                vw = value_width
            )?;
        }
        writeln!(self.out)
    }
}

/// A single recorded sink write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SinkEvent {
    Heading { text: String },
    Text { text: String },
    Code { code: String, language: String },
    Chart { artifact: ChartArtifact },
    Table { dataset: Dataset },
}

/// Records every write, for JSON output and inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TranscriptSink {
    events: Vec<SinkEvent>,
}

impl TranscriptSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SinkEvent> {
        self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl OutputSink for TranscriptSink {
    fn write_heading(&mut self, text: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Heading {
            text: text.to_string(),
        });
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Text {
            text: text.to_string(),
        });
        Ok(())
    }

    fn write_code(&mut self, code: &str, language: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Code {
            code: code.to_string(),
            language: language.to_string(),
        });
        Ok(())
    }

    fn write_chart(&mut self, artifact: &ChartArtifact) -> io::Result<()> {
        self.events.push(SinkEvent::Chart {
            artifact: artifact.clone(),
        });
        Ok(())
    }

    fn write_table(&mut self, dataset: &Dataset) -> io::Result<()> {
        self.events.push(SinkEvent::Table {
            dataset: dataset.clone(),
        });
        Ok(())
    }
}

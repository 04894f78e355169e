//! Render a tutorial section for the tutor CLI

use super::CliError;
use crate::chart::DEFAULT_CHART_WIDTH;
use crate::page::render_page;
use crate::{
    ContentCatalog, OutputSink, RenderSummary, Section, SectionRenderer, TerminalSink,
    TextBarChart, TranscriptSink,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// How rendered content is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// Pretty-printed JSON transcript of sink events
    Json,
}

/// Options for the show command
#[derive(Debug, Clone)]
pub struct ShowOptions {
    /// Section selector, validated before rendering
    pub section: String,
    pub format: OutputFormat,
    /// Seed for the chart dataset; drawn from entropy when absent
    pub seed: Option<u64>,
    pub chart_width: usize,
    /// Include the page title, intro and section header
    pub page: bool,
    /// ANSI styling for text output
    pub styled: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        ShowOptions {
            section: String::new(),
            format: OutputFormat::Text,
            seed: None,
            chart_width: DEFAULT_CHART_WIDTH,
            page: false,
            styled: false,
        }
    }
}

/// Execute a show operation, writing the result to `out`
pub fn execute_show<W: Write>(
    options: &ShowOptions,
    out: &mut W,
) -> Result<RenderSummary, CliError> {
    let section: Section = options.section.parse()?;

    let catalog = ContentCatalog::standard();
    let chart = TextBarChart::new(options.chart_width);
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = match options.format {
        OutputFormat::Text => {
            let mut sink = TerminalSink::new(&mut *out).styled(options.styled);
            let summary = render(section, options.page, &catalog, &mut sink, &chart, &mut rng)?;
            sink.into_inner().flush()?;
            summary
        }
        OutputFormat::Json => {
            let mut sink = TranscriptSink::new();
            let summary = render(section, options.page, &catalog, &mut sink, &chart, &mut rng)?;
            serde_json::to_writer_pretty(&mut *out, &sink)?;
            writeln!(out)?;
            summary
        }
    };

    tracing::debug!(
        section = %summary.section,
        blocks = summary.blocks,
        charts = summary.charts,
        "show complete"
    );
    Ok(summary)
}

fn render<S: OutputSink>(
    section: Section,
    page: bool,
    catalog: &ContentCatalog,
    sink: &mut S,
    chart: &TextBarChart,
    rng: &mut StdRng,
) -> Result<RenderSummary, CliError> {
    let summary = if page {
        render_page(section, catalog, sink, chart, rng)?
    } else {
        SectionRenderer::new(catalog).render(section, sink, chart, rng)?
    };
    Ok(summary)
}

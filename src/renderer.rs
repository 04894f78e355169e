//! Emits a section's content blocks to a sink.
//!
//! Blocks are written strictly in catalog order. The only non-deterministic
//! step is the [`Dataset`] draw, which happens at most once per render and
//! only when a block needs it; Basic and Intermediate never touch the random
//! source or the chart collaborator.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tutorial_navigator::{ContentCatalog, Section, SectionRenderer, TextBarChart, TranscriptSink};
//!
//! let catalog = ContentCatalog::standard();
//! let renderer = SectionRenderer::new(&catalog);
//! let mut sink = TranscriptSink::new();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let summary = renderer
//!     .render(Section::Advanced, &mut sink, &TextBarChart::default(), &mut rng)
//!     .unwrap();
//! assert_eq!(summary.charts, 1);
//! ```

use crate::catalog::ContentCatalog;
use crate::chart::ChartCollaborator;
use crate::content::{ContentBlock, Dataset};
use crate::section::{Section, UnknownSectionError};
use crate::sink::OutputSink;
use rand::Rng;
use serde::Serialize;
use std::io;
use thiserror::Error;

/// Errors that can occur while rendering a section
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    UnknownSection(#[from] UnknownSectionError),

    #[error("Failed to write output: {0}")]
    Sink(#[from] io::Error),
}

/// What a completed render emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub section: Section,
    pub blocks: usize,
    pub charts: usize,
}

pub struct SectionRenderer<'a> {
    catalog: &'a ContentCatalog,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(catalog: &'a ContentCatalog) -> Self {
        SectionRenderer { catalog }
    }

    /// Render `section` block by block into `sink`.
    pub fn render<S, C, R>(
        &self,
        section: Section,
        sink: &mut S,
        chart: &C,
        rng: &mut R,
    ) -> Result<RenderSummary, RenderError>
    where
        S: OutputSink + ?Sized,
        C: ChartCollaborator + ?Sized,
        R: Rng + ?Sized,
    {
        let blocks = self.catalog.blocks_for(section);
        tracing::debug!(section = %section, blocks = blocks.len(), "rendering section");

        let mut dataset: Option<Dataset> = None;
        let mut charts = 0;

        for block in blocks {
            match block {
                ContentBlock::Heading { text } => sink.write_heading(text)?,
                ContentBlock::Paragraph { text } => sink.write_text(text)?,
                ContentBlock::CodeSample { code, language } => sink.write_code(code, language)?,
                ContentBlock::ChartRequest => {
                    let data = dataset.get_or_insert_with(|| draw_dataset(rng));
                    let artifact = chart.render_bar_chart(data);
                    sink.write_chart(&artifact)?;
                    charts += 1;
                }
                ContentBlock::DataTable => {
                    let data = dataset.get_or_insert_with(|| draw_dataset(rng));
                    sink.write_table(data)?;
                }
            }
        }

        Ok(RenderSummary {
            section,
            blocks: blocks.len(),
            charts,
        })
    }

    /// Render from a free-form selector value.
    ///
    /// An unrecognised name fails before anything is written.
    pub fn render_named<S, C, R>(
        &self,
        name: &str,
        sink: &mut S,
        chart: &C,
        rng: &mut R,
    ) -> Result<RenderSummary, RenderError>
    where
        S: OutputSink + ?Sized,
        C: ChartCollaborator + ?Sized,
        R: Rng + ?Sized,
    {
        let section: Section = name.parse().map_err(|e: UnknownSectionError| {
            tracing::warn!(selector = name, "unknown section requested");
            e
        })?;
        self.render(section, sink, chart, rng)
    }
}

fn draw_dataset<R: Rng + ?Sized>(rng: &mut R) -> Dataset {
    let data = Dataset::random(rng);
    tracing::trace!(values = ?data.values(), "drew chart dataset");
    data
}

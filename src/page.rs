//! Full page framing around a section: title, intro and section header.

use crate::catalog::ContentCatalog;
use crate::chart::ChartCollaborator;
use crate::renderer::{RenderError, RenderSummary, SectionRenderer};
use crate::section::Section;
use crate::sink::OutputSink;
use rand::Rng;

pub const PAGE_TITLE: &str = "Advanced Python Tutorial with Streamlit";

/// Intro paragraph listing every section with its summary
pub fn page_intro() -> String {
    let mut intro = String::from("This is a basic to advanced Python tutorial using Streamlit.");
    for section in Section::ALL {
        intro.push_str(&format!("\n- **{}**: {}", section.name(), section.summary()));
    }
    intro
}

/// Write the page header, then the selected section.
///
/// The returned summary counts only the section's own blocks.
pub fn render_page<S, C, R>(
    section: Section,
    catalog: &ContentCatalog,
    sink: &mut S,
    chart: &C,
    rng: &mut R,
) -> Result<RenderSummary, RenderError>
where
    S: OutputSink + ?Sized,
    C: ChartCollaborator + ?Sized,
    R: Rng + ?Sized,
{
    sink.write_heading(PAGE_TITLE)?;
    sink.write_text(&page_intro())?;
    sink.write_heading(section.title())?;

    SectionRenderer::new(catalog).render(section, sink, chart, rng)
}

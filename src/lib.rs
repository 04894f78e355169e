pub mod catalog;
pub mod chart;
pub mod cli;
pub mod content;
pub mod page;
pub mod renderer;
pub mod section;
pub mod sink;

pub use catalog::ContentCatalog;
pub use chart::{ChartArtifact, ChartCollaborator, TextBarChart};
pub use content::{ContentBlock, DataRow, Dataset};
pub use page::{render_page, PAGE_TITLE};
pub use renderer::{RenderError, RenderSummary, SectionRenderer};
pub use section::{Section, UnknownSectionError};
pub use sink::{OutputSink, SinkEvent, TerminalSink, TranscriptSink};

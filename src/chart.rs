//! Bar chart rendering for the dataset demo.
//!
//! The renderer only hands a [`Dataset`] to a [`ChartCollaborator`] and
//! forwards whatever [`ChartArtifact`] comes back. [`TextBarChart`] is the
//! terminal implementation used by the `tutor` binary.
//!
//! # Examples
//!
//! ```
//! use tutorial_navigator::{ChartCollaborator, Dataset, TextBarChart};
//!
//! let data = Dataset::new([("A", 50), ("B", 100)]);
//! let artifact = TextBarChart::new(10).render_bar_chart(&data);
//!
//! assert_eq!(artifact.body, "A │█████ 50\nB │██████████ 100\n");
//! ```

use crate::content::Dataset;
use serde::Serialize;

pub const DEFAULT_CHART_WIDTH: usize = 40;
pub const MIN_CHART_WIDTH: usize = 10;
pub const MAX_CHART_WIDTH: usize = 200;

const BAR_CELL: char = '█';

/// Rendered chart, opaque to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartArtifact {
    pub kind: &'static str,
    pub body: String,
}

/// External charting capability.
pub trait ChartCollaborator {
    fn render_bar_chart(&self, dataset: &Dataset) -> ChartArtifact;
}

impl<C: ChartCollaborator + ?Sized> ChartCollaborator for &C {
    fn render_bar_chart(&self, dataset: &Dataset) -> ChartArtifact {
        (**self).render_bar_chart(dataset)
    }
}

/// Horizontal bar chart drawn with block characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBarChart {
    width: usize,
}

impl TextBarChart {
    /// `width` is the length of the longest bar, clamped to a sane range.
    pub fn new(width: usize) -> Self {
        TextBarChart {
            width: width.clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn bar_len(&self, value: u32, max: u32) -> usize {
        if value == 0 || max == 0 {
            return 0;
        }
        let scaled = (value as f64 * self.width as f64 / max as f64).round() as usize;
        scaled.max(1)
    }
}

impl Default for TextBarChart {
    fn default() -> Self {
        TextBarChart::new(DEFAULT_CHART_WIDTH)
    }
}

impl ChartCollaborator for TextBarChart {
    fn render_bar_chart(&self, dataset: &Dataset) -> ChartArtifact {
        let max = dataset.max_value().unwrap_or(0);
        let label_width = dataset
            .rows()
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut body = String::new();
        for row in dataset.rows() {
            let bar: String = std::iter::repeat(BAR_CELL)
                .take(self.bar_len(row.value, max))
                .collect();
            body.push_str(&format!(
                "{:<width$} │{} {}\n",
                row.label,
                bar,
                row.value,
                width = label_width
            ));
        }

        ChartArtifact {
            kind: "bar_chart",
            body,
        }
    }
}

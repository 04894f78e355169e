//! Display units and the demo dataset.
//!
//! A section is an ordered slice of [`ContentBlock`]s. Text blocks borrow
//! `'static` strings so the whole catalog can live in constant tables; the
//! only value built at render time is the [`Dataset`] behind the chart demo.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tutorial_navigator::Dataset;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let data = Dataset::random(&mut rng);
//!
//! assert_eq!(data.labels(), vec!["A", "B", "C", "D"]);
//! assert!(data.values().iter().all(|v| (1..=100).contains(v)));
//! ```

use rand::Rng;
use serde::Serialize;

/// Category labels of the demo dataset, in display order
pub const DATASET_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// Inclusive bounds of a dataset value
pub const DATASET_MIN: u32 = 1;
pub const DATASET_MAX: u32 = 100;

/// A single display unit within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { text: &'static str },

    Paragraph { text: &'static str },

    /// Source shown to the reader, never executed. `language` is a display hint.
    CodeSample {
        code: &'static str,
        language: &'static str,
    },

    /// Bar chart over the render's dataset
    ChartRequest,

    /// Table of the same dataset the chart was drawn from
    DataTable,
}

impl ContentBlock {
    pub const fn heading(text: &'static str) -> Self {
        ContentBlock::Heading { text }
    }

    pub const fn paragraph(text: &'static str) -> Self {
        ContentBlock::Paragraph { text }
    }

    pub const fn code(code: &'static str, language: &'static str) -> Self {
        ContentBlock::CodeSample { code, language }
    }
}

/// One `(category, value)` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataRow {
    pub label: String,
    pub value: u32,
}

/// Ordered category/value pairs behind the chart demo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Dataset {
    rows: Vec<DataRow>,
}

impl Dataset {
    pub fn new<L: Into<String>>(rows: impl IntoIterator<Item = (L, u32)>) -> Self {
        Dataset {
            rows: rows
                .into_iter()
                .map(|(label, value)| DataRow {
                    label: label.into(),
                    value,
                })
                .collect(),
        }
    }

    /// Draw one value per fixed label, uniformly from `[1, 100]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Dataset::new(
            DATASET_LABELS
                .iter()
                .map(|label| (*label, rng.gen_range(DATASET_MIN..=DATASET_MAX))),
        )
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.value).collect()
    }

    pub fn max_value(&self) -> Option<u32> {
        self.rows.iter().map(|r| r.value).max()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

//! Tutorial sections selectable from the sidebar.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three fixed tutorial categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Basic,
    Intermediate,
    Advanced,
}

/// The selector value did not name a known section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown section: '{name}' (expected one of: basic, intermediate, advanced)")]
pub struct UnknownSectionError {
    pub name: String,
}

impl Section {
    /// All sections in sidebar order
    pub const ALL: [Section; 3] = [Section::Basic, Section::Intermediate, Section::Advanced];

    /// Selector label
    pub fn name(self) -> &'static str {
        match self {
            Section::Basic => "Basic",
            Section::Intermediate => "Intermediate",
            Section::Advanced => "Advanced",
        }
    }

    /// Page header shown above the section's content
    pub fn title(self) -> &'static str {
        match self {
            Section::Basic => "Basic Python Concepts",
            Section::Intermediate => "Intermediate Python Concepts",
            Section::Advanced => "Advanced Python Concepts",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Section::Basic => "Introduction to Python fundamentals.",
            Section::Intermediate => "Data handling and object-oriented programming.",
            Section::Advanced => {
                "Advanced topics including Machine Learning, Data Visualization, etc."
            }
        }
    }
}

impl FromStr for Section {
    type Err = UnknownSectionError;

    /// Parse a free-form selector value, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Section::Basic),
            "intermediate" => Ok(Section::Intermediate),
            "advanced" => Ok(Section::Advanced),
            _ => Err(UnknownSectionError {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Basic".parse::<Section>(), Ok(Section::Basic));
        assert_eq!("  ADVANCED ".parse::<Section>(), Ok(Section::Advanced));
        assert_eq!("intermediate".parse::<Section>(), Ok(Section::Intermediate));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Expert".parse::<Section>().unwrap_err();
        assert_eq!(err.name, "Expert");
        assert!(err.to_string().contains("'Expert'"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>(), Ok(section));
        }
    }
}

//! Section listing for the tutor CLI

use crate::{ContentBlock, ContentCatalog, Section};

/// Get the sections overview
pub fn sections_overview(catalog: &ContentCatalog) -> String {
    let mut out = String::from("TUTORIAL SECTIONS\n\n");

    for section in Section::ALL {
        let topics = catalog
            .blocks_for(section)
            .iter()
            .filter(|b| matches!(b, ContentBlock::Heading { .. }))
            .count();
        out.push_str(&format!(
            "  {:<14}{} ({} topics)\n  {:<14}{}\n\n",
            section.name().to_lowercase(),
            section.title(),
            topics,
            "",
            section.summary()
        ));
    }

    out.push_str("Run 'tutor show <section>' to read a section.\n");
    out.push_str("Run 'tutor show <section> --page' to include the page header.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_lists_every_section() {
        let overview = sections_overview(&ContentCatalog::standard());
        assert!(overview.contains("basic         Basic Python Concepts (4 topics)"));
        assert!(overview.contains("intermediate  Intermediate Python Concepts (3 topics)"));
        assert!(overview.contains("advanced      Advanced Python Concepts"));
    }
}

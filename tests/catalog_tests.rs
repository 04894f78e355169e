use tutorial_navigator::{ContentBlock, ContentCatalog, Section};

fn headings(section: Section) -> Vec<&'static str> {
    ContentCatalog::standard()
        .blocks_for(section)
        .iter()
        .filter_map(|b| match b {
            ContentBlock::Heading { text } => Some(*text),
            _ => None,
        })
        .collect()
}

#[test]
fn test_every_section_has_content() {
    let catalog = ContentCatalog::standard();
    for section in Section::ALL {
        assert!(!catalog.blocks_for(section).is_empty(), "{} is empty", section);
    }
}

#[test]
fn test_lookup_is_stable() {
    let catalog = ContentCatalog::standard();
    for section in Section::ALL {
        let first = catalog.blocks_for(section);
        let second = catalog.blocks_for(section);
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }
}

#[test]
fn test_basic_opens_with_variables() {
    let blocks = ContentCatalog::standard().blocks_for(Section::Basic);

    assert_eq!(blocks[0], ContentBlock::heading("Variables and Data Types"));
    assert!(matches!(blocks[1], ContentBlock::Paragraph { .. }));
    assert_eq!(
        blocks[2],
        ContentBlock::code("x = 10\nname = 'Python'\nflag = True", "python")
    );
    assert_eq!(blocks[3], ContentBlock::heading("If-Else Statement"));
}

#[test]
fn test_basic_ends_with_functions() {
    assert_eq!(
        headings(Section::Basic),
        vec![
            "Variables and Data Types",
            "If-Else Statement",
            "Loops in Python",
            "Functions",
        ]
    );

    let blocks = ContentCatalog::standard().blocks_for(Section::Basic);
    match blocks.last() {
        Some(ContentBlock::CodeSample { code, language }) => {
            assert!(code.contains("def greet(name):"));
            assert_eq!(*language, "python");
        }
        other => panic!("expected trailing code sample, got {:?}", other),
    }
}

#[test]
fn test_intermediate_topics() {
    assert_eq!(
        headings(Section::Intermediate),
        vec![
            "Lists, Tuples, and Dictionaries",
            "Object-Oriented Programming (OOP)",
            "File I/O (Input/Output)",
        ]
    );
}

#[test]
fn test_only_advanced_requests_chart() {
    let catalog = ContentCatalog::standard();
    for section in Section::ALL {
        let charts = catalog
            .blocks_for(section)
            .iter()
            .filter(|b| matches!(b, ContentBlock::ChartRequest))
            .count();
        let expected = if section == Section::Advanced { 1 } else { 0 };
        assert_eq!(charts, expected, "chart requests in {}", section);
    }
}

#[test]
fn test_advanced_carries_trailing_topics() {
    let advanced = headings(Section::Advanced);
    for topic in [
        "Asynchronous Programming",
        "Working with Web APIs",
        "Web Scraping with BeautifulSoup",
    ] {
        assert!(advanced.contains(&topic), "missing {}", topic);
        assert!(!headings(Section::Basic).contains(&topic));
        assert!(!headings(Section::Intermediate).contains(&topic));
    }
}

#[test]
fn test_table_follows_chart() {
    let blocks = ContentCatalog::standard().blocks_for(Section::Advanced);
    let chart = blocks
        .iter()
        .position(|b| matches!(b, ContentBlock::ChartRequest))
        .unwrap();
    let table = blocks
        .iter()
        .position(|b| matches!(b, ContentBlock::DataTable))
        .unwrap();
    assert!(chart < table);
}

#[test]
fn test_code_samples_are_trimmed() {
    let catalog = ContentCatalog::standard();
    for section in Section::ALL {
        for block in catalog.blocks_for(section) {
            if let ContentBlock::CodeSample { code, language } = block {
                assert_eq!(code.trim(), *code);
                assert!(!language.is_empty());
            }
        }
    }
}

#[test]
fn test_scraping_install_is_bash() {
    let blocks = ContentCatalog::standard().blocks_for(Section::Advanced);
    assert_eq!(
        blocks.last(),
        Some(&ContentBlock::code("pip install requests beautifulsoup4", "bash"))
    );
}

#[test]
fn test_custom_catalog() {
    const ONE: &[ContentBlock] = &[ContentBlock::heading("One")];
    const TWO: &[ContentBlock] = &[ContentBlock::paragraph("Two")];
    const THREE: &[ContentBlock] = &[ContentBlock::ChartRequest];

    let catalog = ContentCatalog::new(ONE, TWO, THREE);
    assert_eq!(catalog.blocks_for(Section::Basic), ONE);
    assert_eq!(catalog.blocks_for(Section::Intermediate), TWO);
    assert_eq!(catalog.blocks_for(Section::Advanced), THREE);
}

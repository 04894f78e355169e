use tutorial_navigator::cli::{execute_show, sections_overview, CliError, OutputFormat, ShowOptions};
use tutorial_navigator::{ContentCatalog, Section};

fn show(section: &str, format: OutputFormat, seed: u64, page: bool) -> Result<String, CliError> {
    let options = ShowOptions {
        section: section.to_string(),
        format,
        seed: Some(seed),
        page,
        ..ShowOptions::default()
    };
    let mut out = Vec::new();
    execute_show(&options, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_show_basic_text() {
    let out = show("basic", OutputFormat::Text, 0, false).unwrap();
    assert!(out.starts_with("Variables and Data Types\n========================\n\n"));
    assert!(out.contains("```python\nx = 10\nname = 'Python'\nflag = True\n```"));
    assert!(!out.contains("Basic Python Concepts"));
}

#[test]
fn test_show_page_includes_title() {
    let out = show("Basic", OutputFormat::Text, 0, true).unwrap();
    assert!(out.starts_with("Advanced Python Tutorial with Streamlit\n"));
    assert!(out.contains("Basic Python Concepts\n"));
}

#[test]
fn test_show_unknown_section() {
    let err = show("expert", OutputFormat::Text, 0, false).unwrap_err();
    assert!(matches!(err, CliError::UnknownSection(_)));
    assert!(err.to_string().contains("tutor sections"));
}

#[test]
fn test_show_json_transcript() {
    let out = show("advanced", OutputFormat::Json, 9, false).unwrap();
    let events: serde_json::Value = serde_json::from_str(&out).unwrap();
    let events = events.as_array().unwrap();

    assert_eq!(events[0]["kind"], "heading");
    assert_eq!(events[0]["text"], "Lambda Functions");

    let chart = events.iter().find(|e| e["kind"] == "chart").unwrap();
    assert_eq!(chart["artifact"]["kind"], "bar_chart");

    let table = events.iter().find(|e| e["kind"] == "table").unwrap();
    let rows = table["dataset"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["label"], "A");
    assert_eq!(rows[3]["label"], "D");
}

#[test]
fn test_seed_makes_output_reproducible() {
    let first = show("advanced", OutputFormat::Text, 77, false).unwrap();
    let second = show("advanced", OutputFormat::Text, 77, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sections_overview_mentions_show() {
    let overview = sections_overview(&ContentCatalog::standard());
    for section in Section::ALL {
        assert!(overview.contains(section.title()));
    }
    assert!(overview.contains("tutor show <section>"));
}

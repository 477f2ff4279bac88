mod common;

use common::fixtures::*;
use common::{TestResult, block_kinds, empty_provider, paragraph_texts, render_section};
use rapport::{InMemoryDocument, Report, Section, SectionError, Text};
use serde_json::json;

#[test]
fn test_sequence_order_drives_document_order() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = json!({
        "title": "周报",
        "texts": ["第一段", "第二段"],
        "sequence": ["texts.1", "title", "texts.0"],
    });
    let doc = render_section(&raw, empty_provider())?;

    assert_eq!(paragraph_texts(&doc), vec!["第二段", "周报", "第一段"]);
    Ok(())
}

#[test]
fn test_duplicate_sequence_entries_render_twice() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = json!({
        "title": "t",
        "texts": ["重复段"],
        "sequence": ["texts.0", "texts.0"],
    });
    let doc = render_section(&raw, empty_provider())?;

    assert_eq!(paragraph_texts(&doc), vec!["重复段", "重复段"]);
    Ok(())
}

#[test]
fn test_omitted_collections_never_render() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = json!({
        "title": "t",
        "texts": ["甲", "乙"],
        "sequence": ["texts.0"],
    });
    let doc = render_section(&raw, empty_provider())?;

    assert_eq!(paragraph_texts(&doc), vec!["甲"]);
    Ok(())
}

#[test]
fn test_colon_range_renders_in_one_paragraph() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = json!({
        "title": "t",
        "texts": ["甲", "乙", "丙"],
        "sequence": ["texts.0:2", "texts.2"],
    });
    let doc = render_section(&raw, empty_provider())?;

    assert_eq!(paragraph_texts(&doc), vec!["甲乙", "丙"]);
    Ok(())
}

#[test]
fn test_hyphen_range_renders_one_paragraph_per_item() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = json!({
        "title": "t",
        "texts": ["甲", "乙", "丙"],
        "sequence": ["texts.0-2"],
    });
    let doc = render_section(&raw, empty_provider())?;

    assert_eq!(paragraph_texts(&doc), vec!["甲", "乙"]);
    Ok(())
}

#[test]
fn test_unknown_collection_fails_resolution() {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = json!({
        "title": "t",
        "sequence": ["charts.0"],
    });
    let err = render_section(&raw, empty_provider()).unwrap_err();
    assert!(err.to_string().contains("charts"));
}

#[test]
fn test_mixed_separator_token_fails_resolution() {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = json!({
        "title": "t",
        "texts": ["甲", "乙", "丙"],
        "sequence": ["texts.0-1:2"],
    });
    assert!(render_section(&raw, empty_provider()).is_err());
}

#[test]
fn test_image_renders_captions_and_picture() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let provider = common::provider_with(&[("img-1", b"PNG")]);
    let raw = json!({
        "title": "t",
        "images": [{"title": "图1", "identity": "img-1", "text": "说明"}],
        "sequence": ["images.0"],
    });
    let doc = render_section(&raw, provider)?;

    let paragraph = doc.paragraphs().next().expect("one paragraph");
    assert_eq!(paragraph.text(), "图1说明");
    assert_eq!(paragraph.picture_count(), 1);
    Ok(())
}

#[test]
fn test_failed_image_lookup_degrades_to_captions() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = json!({
        "title": "t",
        "images": [{"title": "图1", "identity": "missing", "text": "说明"}],
        "texts": ["后续段"],
        "sequence": ["images.0", "texts.0"],
    });
    let doc = render_section(&raw, empty_provider())?;

    let paragraph = doc.paragraphs().next().expect("one paragraph");
    assert_eq!(paragraph.text(), "图1说明");
    assert_eq!(paragraph.picture_count(), 0);
    // Rendering continued past the failed lookup.
    assert_eq!(paragraph_texts(&doc)[1], "后续段");
    Ok(())
}

#[test]
fn test_tables_are_never_nested_in_an_inline_paragraph() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = json!({
        "title": "t",
        "tables": [
            table_record("表一", 4, categories_payload()),
            table_record("表二", 4, categories_payload()),
        ],
        "sequence": ["tables.0:2"],
    });
    let doc = render_section(&raw, empty_provider())?;

    // The inline group still opens its paragraph, but both tables land at
    // document level.
    assert_eq!(block_kinds(&doc), vec!["paragraph", "table", "table"]);
    Ok(())
}

#[test]
fn test_report_renders_sections_in_order() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let first = Section::new(
        "第一节",
        vec![],
        vec![Text::new("正文一")],
        vec![],
        vec!["title".to_string(), "texts.all".to_string()],
        empty_provider(),
    );
    let second = Section::new(
        "第二节",
        vec![],
        vec![],
        vec![],
        vec!["title".to_string()],
        empty_provider(),
    );

    let mut doc = InMemoryDocument::new();
    Report::new(vec![first, second]).render(&mut doc)?;

    assert_eq!(paragraph_texts(&doc), vec!["第一节", "正文一", "第二节"]);
    Ok(())
}

#[test]
fn test_bad_record_fails_section_construction() {
    let _ = env_logger::builder().is_test(true).try_init();

    let raw = json!({
        "title": "t",
        "tables": [{"title": "缺类型"}],
    });
    let err = Section::from_value(&raw, empty_provider()).unwrap_err();
    assert!(matches!(err, SectionError::Content(_)));
}

/*!
 * Tests for report file generation
 */

use std::fs;

use hotbrief::app_config::OutputConfig;
use hotbrief::hotspot::HotspotItem;
use hotbrief::report::ReportGenerator;

use crate::common::items_with_titles;

fn output_config(dir: &std::path::Path, json: bool) -> OutputConfig {
    OutputConfig {
        dir: dir.to_string_lossy().to_string(),
        json,
    }
}

#[test]
fn test_reportGenerator_generate_shouldWriteHtmlAndJson() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(output_config(dir.path(), true));

    let mut items = items_with_titles(&["AI breakthrough announced"]);
    items[0].translated_title = "宣布AI突破".to_string();
    items[0].summary = "重大进展".to_string();

    let html_path = generator.generate(&items).unwrap();

    assert_eq!(html_path, dir.path().join("index.html"));
    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("宣布AI突破"));
    // Original title shown beneath the translation
    assert!(html.contains("AI breakthrough announced"));
    assert!(html.contains("重大进展"));

    let json = fs::read_to_string(dir.path().join("data.json")).unwrap();
    let parsed: Vec<HotspotItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, items);
}

#[test]
fn test_reportGenerator_generate_withJsonDisabled_shouldOnlyWriteHtml() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(output_config(dir.path(), false));

    generator.generate(&items_with_titles(&["one"])).unwrap();

    assert!(dir.path().join("index.html").exists());
    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn test_reportGenerator_generate_shouldEscapeHtmlInTitles() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(output_config(dir.path(), false));

    let items = items_with_titles(&["<script>alert('x')</script>"]);
    let html_path = generator.generate(&items).unwrap();

    let html = fs::read_to_string(html_path).unwrap();
    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_reportGenerator_generate_shouldEscapeQuotesInUrls() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(output_config(dir.path(), false));

    // A quote in a collected URL must not terminate the href attribute
    let items = vec![HotspotItem::new(
        "Quoted link",
        r#"https://x.example/" onmouseover="alert(1)"#,
        "Test",
        "Test",
    )];
    let html = fs::read_to_string(generator.generate(&items).unwrap()).unwrap();

    assert!(!html.contains(r#"" onmouseover="#));
    assert!(html.contains("https://x.example/&quot; onmouseover=&quot;alert(1)"));
}

#[test]
fn test_reportGenerator_generate_shouldGroupByCategory() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(output_config(dir.path(), false));

    let mut items = items_with_titles(&["a", "b", "c"]);
    items[0].category = "Research".to_string();
    items[1].category = "Industry".to_string();
    items[2].category = "Research".to_string();

    let html = fs::read_to_string(generator.generate(&items).unwrap()).unwrap();

    assert!(html.contains("<h2>Industry (1)</h2>"));
    assert!(html.contains("<h2>Research (2)</h2>"));
}

#[test]
fn test_reportGenerator_generate_withUnenrichedItem_shouldShowOriginalTitle() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(output_config(dir.path(), false));

    let html = fs::read_to_string(
        generator
            .generate(&items_with_titles(&["Plain headline"]))
            .unwrap(),
    )
    .unwrap();

    assert!(html.contains("Plain headline"));
    // No translation, so no summary paragraph and no meta duplicate
    assert!(!html.contains("class=\"summary\""));
}

#[test]
fn test_reportGenerator_generate_withEmptyItems_shouldStillWriteReport() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(output_config(dir.path(), true));

    let html_path = generator.generate(&[]).unwrap();

    let html = fs::read_to_string(html_path).unwrap();
    assert!(html.contains("0 items"));
    assert_eq!(fs::read_to_string(dir.path().join("data.json")).unwrap(), "[]");
}

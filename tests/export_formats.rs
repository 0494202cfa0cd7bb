//! End-to-end tests for `run_gallery` and each output format.

mod helpers;

use helpers::{catalog_file, scenario_catalog};
use serde_json::Value;
use tempfile::TempDir;
use video_gallery::export::{render_csv, render_html, render_jsonl, render_text};
use video_gallery::{run_gallery, Config, ExportFormat, GalleryView, SortMode, ViewState};

fn config_for(catalog: &std::path::Path, output: &std::path::Path, format: ExportFormat) -> Config {
    Config {
        catalog: Some(catalog.to_path_buf()),
        output: Some(output.to_path_buf()),
        format,
        ..Config::default()
    }
}

#[test]
fn test_run_gallery_writes_jsonl_in_display_order() {
    let catalog = catalog_file(&helpers::scenario_json().to_string());
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = dir.path().join("videos.jsonl");

    let mut config = config_for(catalog.path(), &output, ExportFormat::Jsonl);
    config.sort = SortMode::Views;
    let report = run_gallery(&config).expect("run_gallery should succeed");

    assert_eq!(report.catalog_size, 3);
    assert_eq!(report.displayed, 3);
    assert_eq!(report.rejected, 0);
    assert!(report.catalog_available);

    let written = std::fs::read_to_string(&output).unwrap();
    let links: Vec<String> = written
        .lines()
        .map(|line| {
            let value: Value = serde_json::from_str(line).expect("each line is JSON");
            value["link"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(links, vec!["b", "a", "c"]);
}

#[test]
fn test_run_gallery_reports_rejected_entries() {
    let catalog = catalog_file(r#"[{"link": "ok"}, {"title": "no link"}, 7]"#);
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = dir.path().join("videos.csv");

    let report = run_gallery(&config_for(catalog.path(), &output, ExportFormat::Csv))
        .expect("run_gallery should succeed");
    assert_eq!(report.catalog_size, 1);
    assert_eq!(report.rejected, 2);

    let written = std::fs::read_to_string(&output).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("link,title,description,thumbnailUrl,duration,viewCount,authorUrl,category")
    );
    assert_eq!(lines.next(), Some("ok,,,,,,,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_run_gallery_with_missing_catalog_renders_unavailable_state() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = dir.path().join("gallery.html");
    let config = Config {
        catalog: Some(dir.path().join("missing.json")),
        output: Some(output.clone()),
        format: ExportFormat::Html,
        ..Config::default()
    };

    let report = run_gallery(&config).expect("a missing catalog is not a run failure");
    assert!(!report.catalog_available);
    assert_eq!(report.displayed, 0);

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("empty-state"));
    assert!(!html.contains("<article"));
}

#[test]
fn test_run_gallery_fails_when_output_cannot_be_created() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = Config {
        output: Some(dir.path().join("no-such-dir").join("out.txt")),
        ..Config::default()
    };
    assert!(run_gallery(&config).is_err());
}

#[test]
fn test_html_page_opens_links_in_new_context() {
    let catalog = scenario_catalog();
    let view = GalleryView::derive(&catalog, &ViewState::new("", "yoga", SortMode::Default));
    let mut out = Vec::new();
    let count = render_html(&view, &mut out).expect("render_html should succeed");
    assert_eq!(count, 2);

    let html = String::from_utf8(out).unwrap();
    assert_eq!(html.matches("<article").count(), 2);
    assert!(html.contains("data-href=\"a\""));
    assert!(html.contains("noopener"));
    assert!(html.contains("<option value=\"yoga\" selected>"));
}

#[test]
fn test_text_listing_shows_empty_state() {
    let catalog = scenario_catalog();
    let view = GalleryView::derive(&catalog, &ViewState::new("zumba", "all", SortMode::Default));
    let mut out = Vec::new();
    let count = render_text(&view, &mut out, false).expect("render_text should succeed");
    assert_eq!(count, 0);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Found 0 videos"));
    assert!(text.contains("No videos found"));
}

#[test]
fn test_jsonl_and_csv_write_only_displayed_records() {
    let catalog = scenario_catalog();
    let view = GalleryView::derive(&catalog, &ViewState::new("", "pilates", SortMode::Default));

    let mut jsonl = Vec::new();
    assert_eq!(render_jsonl(&view, &mut jsonl).unwrap(), 1);
    let jsonl = String::from_utf8(jsonl).unwrap();
    assert_eq!(jsonl.lines().count(), 1);
    assert!(jsonl.contains("\"viewCount\":9000"));

    let mut csv = Vec::new();
    assert_eq!(render_csv(&view, &mut csv).unwrap(), 1);
    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("b,Core Pilates,,,,9000,,pilates"));
}

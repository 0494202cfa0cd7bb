//! Tests for loading catalogs from files.

mod helpers;

use helpers::catalog_file;
use std::path::Path;
use video_gallery::catalog::read_catalog;
use video_gallery::{Catalog, CatalogError, CatalogStatus, GalleryView, ResultState, ViewState};

#[test]
fn test_bundled_catalog_is_valid() {
    let catalog = Catalog::bundled();
    assert!(catalog.is_available());
    assert_eq!(catalog.len(), 8);
    assert_eq!(catalog.stats().total_rejected(), 0);
    assert_eq!(catalog.source(), "<bundled>");
}

#[test]
fn test_open_without_path_uses_bundled_catalog() {
    let catalog = Catalog::open(None);
    assert_eq!(catalog.records(), Catalog::bundled().records());
}

#[test]
fn test_load_file_skips_malformed_entries() {
    let file = catalog_file(
        r#"[
            {"link": "https://example.com/1", "title": "Keep"},
            {"title": "No link"},
            "not an object",
            {"link": ""},
            {"link": 42},
            {"link": "https://example.com/2", "viewCount": "many"}
        ]"#,
    );
    let catalog = Catalog::open(Some(file.path()));

    assert!(catalog.is_available());
    let links: Vec<_> = catalog.records().iter().map(|r| r.link.as_str()).collect();
    assert_eq!(links, vec!["https://example.com/1", "https://example.com/2"]);
    assert_eq!(catalog.records()[1].view_count, None);
    assert_eq!(catalog.stats().total_rejected(), 4);
}

#[test]
fn test_legacy_labels_are_accepted() {
    let file = catalog_file(
        r#"[{"视频链接": "https://example.com/legacy", "标题": "旧视频", "关键词": "yoga"}]"#,
    );
    let catalog = Catalog::load(file.path());
    assert_eq!(catalog.len(), 1);
    let record = &catalog.records()[0];
    assert_eq!(record.link, "https://example.com/legacy");
    assert_eq!(record.title.as_deref(), Some("旧视频"));
    assert_eq!(record.category.as_deref(), Some("yoga"));
}

#[test]
fn test_missing_file_is_unavailable() {
    let catalog = Catalog::open(Some(Path::new("/nonexistent/videos.json")));
    assert!(!catalog.is_available());
    assert!(catalog.is_empty());

    let view = GalleryView::derive(&catalog, &ViewState::default());
    assert!(matches!(view.result(), ResultState::CatalogUnavailable(_)));
    assert_eq!(view.categories(), ["all"]);
}

#[test]
fn test_invalid_json_is_unavailable() {
    let file = catalog_file("[{\"link\": ");
    let catalog = Catalog::load(file.path());
    assert!(matches!(catalog.status(), CatalogStatus::Unavailable(_)));
}

#[test]
fn test_non_array_root_loads_empty() {
    let file = catalog_file(r#"{"link": "https://example.com/1"}"#);
    let catalog = Catalog::load(file.path());
    assert!(catalog.is_available());
    assert!(catalog.is_empty());

    let view = GalleryView::derive(&catalog, &ViewState::default());
    assert_eq!(view.result(), &ResultState::NoMatches);
}

#[test]
fn test_read_catalog_errors() {
    let err = read_catalog(Path::new("/nonexistent/videos.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));

    let file = catalog_file("nope");
    let err = read_catalog(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

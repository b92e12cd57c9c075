//! Saving and reloading search results

mod common;

use common::{PAGE_URL, poly_item, results_page};
use pricescrape::listing::{self, HtmlPage};
use pricescrape::{load_search_result, save_search_result};

fn sample_result() -> pricescrape::SearchResult {
    let page = HtmlPage::parse(
        &results_page(&[
            poly_item(Some("Mesa de Centro Minimalista"), Some("1,450"), Some("/b")),
            poly_item(Some("Mesa de comedor"), Some("3,200"), Some("/a")),
        ]),
        Some(PAGE_URL),
    );
    listing::search(&page, "mesa de centro", 15).expect("result")
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output_dir = dir.path().join("resultados");
    let result = sample_result();

    let path = save_search_result(&result, &output_dir)
        .await
        .expect("saved");

    assert!(path.starts_with(&output_dir));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("file name");
    assert!(name.starts_with("resultados-mesa-de-centro-"), "{name}");
    assert!(name.ends_with(".json"), "{name}");
    assert!(!name.contains(':'), "{name}");

    let loaded = load_search_result(&path).await.expect("loaded");
    assert_eq!(loaded.query(), "mesa de centro");
    assert_eq!(loaded.timestamp(), result.timestamp());
    assert_eq!(loaded.total_count(), 2);
    assert_eq!(loaded.exact_count(), 1);
    assert_eq!(loaded.partial_count(), 1);
    assert_eq!(loaded.listings(), result.listings());
}

#[tokio::test]
async fn test_saved_json_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = save_search_result(&sample_result(), dir.path())
        .await
        .expect("saved");

    let raw = std::fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");

    assert_eq!(value["query"], "mesa de centro");
    assert_eq!(value["total_count"], 2);
    assert_eq!(value["exact_count"], 1);
    assert_eq!(value["partial_count"], 1);
    assert!(value["timestamp"].is_string());

    let first = &value["listings"][0];
    assert_eq!(first["position"], 1);
    assert_eq!(first["title"], "Mesa de Centro Minimalista");
    assert_eq!(first["price"], "1,450");
    assert_eq!(first["link"], "https://listado.mercadolibre.com.mx/b");
    assert_eq!(first["exact_match"], true);
}

#[tokio::test]
async fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(load_search_result(&dir.path().join("nope.json")).await.is_err());
}

#[tokio::test]
async fn test_query_with_slash_stays_in_output_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = HtmlPage::parse(
        &results_page(&[poly_item(Some("Cable USB C"), Some("149"), Some("/c"))]),
        Some(PAGE_URL),
    );
    let result = listing::search(&page, "usb/c", 15).expect("result");

    let path = save_search_result(&result, dir.path()).await.expect("saved");

    assert_eq!(path.parent(), Some(dir.path()));
    let name = path.file_name().and_then(|n| n.to_str()).expect("file name");
    assert!(name.starts_with("resultados-usb-c-"), "{name}");
    assert_eq!(load_search_result(&path).await.expect("loaded").query(), "usb/c");
}

#[tokio::test]
async fn test_load_recomputes_tampered_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = save_search_result(&sample_result(), dir.path())
        .await
        .expect("saved");

    let mut value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    value["total_count"] = serde_json::json!(7);
    value["exact_count"] = serde_json::json!(9);
    value["partial_count"] = serde_json::json!(0);
    std::fs::write(&path, value.to_string()).expect("write");

    let loaded = load_search_result(&path).await.expect("loaded");
    assert_eq!(loaded.total_count(), loaded.listings().len());
    assert_eq!(loaded.total_count(), 2);
    assert_eq!(loaded.exact_count(), 1);
    assert_eq!(loaded.partial_count(), 1);
}

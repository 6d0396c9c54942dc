use std::fs;

use doctitle_core::index::load_document_index;
use doctitle_core::{ConfigError, Doc, Document, InMemoryDocumentStore, page_title};
use tempfile::TempDir;

fn mdn_store() -> InMemoryDocumentStore {
    [
        Document::new("/en-US/docs/Web/HTML", Some("HTML".to_string())),
        Document::new("/en-US/docs/Learn", Some("Learn web development".to_string())),
        Document::new("/en-US/docs/Glossary", None),
    ]
    .into_iter()
    .collect()
}

#[test]
fn appends_parent_and_suffix() {
    let doc = Doc::new("Element", "/en-US/docs/Web/HTML/Element");
    let title = page_title(&doc, &mdn_store(), "mdn").expect("title");
    assert_eq!(title, "Element - HTML | MDN");
}

#[test]
fn no_parent_only_suffix() {
    let doc = Doc::new(
        "Array",
        "/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array",
    );
    let title = page_title(&doc, &mdn_store(), "mdn").expect("title");
    assert_eq!(title, "Array | MDN");
}

#[test]
fn parent_without_title_is_skipped() {
    let doc = Doc::new("HTTP", "/en-US/docs/Glossary/HTTP");
    let title = page_title(&doc, &mdn_store(), "mdn").expect("title");
    assert_eq!(title, "HTTP | MDN");
}

#[test]
fn root_document_is_not_its_own_parent() {
    let doc = Doc::new("HTML", "/en-US/docs/Web/HTML");
    let title = page_title(&doc, &mdn_store(), "mdn").expect("title");
    assert_eq!(title, "HTML | MDN");
}

#[test]
fn webdocs_suffix() {
    let doc = Doc::new("CSS", "/en-US/docs/Learn/CSS");
    let title = page_title(&doc, &mdn_store(), "webdocs.dev").expect("title");
    assert_eq!(title, "CSS - Learn web development | webdocs.dev");
}

#[test]
fn short_url_degrades_gracefully() {
    let doc = Doc::new("Docs", "/en-US/docs");
    assert_eq!(page_title(&doc, &mdn_store(), "mdn").expect("title"), "Docs | MDN");
    let doc = Doc::new("Nowhere", "");
    assert_eq!(
        page_title(&doc, &mdn_store(), "mdn").expect("title"),
        "Nowhere | MDN"
    );
}

#[test]
fn title_is_not_escaped() {
    let doc = Doc::new("<a>: The Anchor element", "/en-US/docs/Web/HTML/Element/a");
    let title = page_title(&doc, &mdn_store(), "mdn").expect("title");
    assert_eq!(title, "<a>: The Anchor element - HTML | MDN");
}

#[test]
fn unknown_organization_is_a_configuration_error() {
    let doc = Doc::new("Array", "/en-US/docs/Learn/Array");
    let err = page_title(&doc, &mdn_store(), "unknown-org").expect_err("expected error");
    assert!(matches!(
        err,
        ConfigError::UnknownOrganization { ref organization } if organization == "unknown-org"
    ));
    let message = err.to_string();
    assert!(message.contains("\"unknown-org\""));
    assert!(message.contains("REACT_APP_ORGANIZATION"));
}

#[test]
fn titles_from_yaml_index() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("documents.yaml");
    fs::write(
        &path,
        "documents:\n  - url: /en-US/docs/Web/CSS\n    title: CSS\n  - url: /en-US/docs/Web/CSS/grid\n    title: grid\n",
    )
    .expect("write index");
    let store = load_document_index(&path).expect("index");
    let doc = Doc::new("grid", "/en-US/docs/Web/CSS/grid");
    assert_eq!(page_title(&doc, &store, "mdn").expect("title"), "grid - CSS | MDN");
}

#[test]
fn missing_index_file_names_path() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("missing.yaml");
    let err = load_document_index(&path).expect_err("expected error");
    assert!(format!("{err:#}").contains("missing.yaml"));
}

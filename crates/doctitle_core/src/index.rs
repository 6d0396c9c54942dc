//! YAML document index
//!
//! Stands in for a site's content store when titles are computed outside a
//! full build.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::model::Document;
use crate::store::InMemoryDocumentStore;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentIndexRaw {
    #[serde(default)]
    documents: Vec<DocumentEntryRaw>,
}

#[derive(Debug, Deserialize)]
struct DocumentEntryRaw {
    url: Option<String>,
    title: Option<String>,
}

pub fn load_document_index(path: &Path) -> Result<InMemoryDocumentStore> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read document index {}", path.display()))?;
    parse_document_index(&text)
        .with_context(|| format!("failed to load document index {}", path.display()))
}

pub fn parse_document_index(text: &str) -> Result<InMemoryDocumentStore> {
    let raw: DocumentIndexRaw =
        serde_yaml::from_str(text).context("failed to parse document index YAML")?;
    let mut store = InMemoryDocumentStore::new();
    for (idx, entry) in raw.documents.into_iter().enumerate() {
        let url = entry.url.map(|url| url.trim().to_string()).unwrap_or_default();
        if url.is_empty() {
            bail!("documents[{idx}]: missing url");
        }
        if !url.starts_with('/') {
            bail!("documents[{idx}]: url '{url}' must start with '/'");
        }
        if let Some(previous) = store.insert(Document::new(url, entry.title)) {
            tracing::warn!(
                url = %previous.url,
                "duplicate document url in index, keeping the last entry"
            );
        }
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DocumentStore;

    #[test]
    fn parses_documents_with_optional_titles() {
        let store = parse_document_index(
            "documents:\n  - url: /en-US/docs/Web/HTML\n    title: HTML\n  - url: /en-US/docs/Learn\n",
        )
        .expect("index");
        assert_eq!(store.len(), 2);
        let html = store.find_by_url("/en-us/docs/web/html").expect("html");
        assert_eq!(html.title(), Some("HTML"));
        let learn = store.find_by_url("/en-us/docs/learn").expect("learn");
        assert_eq!(learn.title(), None);
    }

    #[test]
    fn empty_index_is_allowed() {
        let store = parse_document_index("documents: []\n").expect("index");
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_missing_url() {
        let err = parse_document_index("documents:\n  - title: Orphan\n").expect_err("error");
        assert!(err.to_string().contains("documents[0]"));
    }

    #[test]
    fn rejects_relative_url() {
        let err = parse_document_index("documents:\n  - url: en-US/docs/Web\n")
            .expect_err("error");
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn rejects_unknown_top_level_keys() {
        assert!(parse_document_index("docs: []\n").is_err());
    }
}

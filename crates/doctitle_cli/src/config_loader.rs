use std::path::Path;

use anyhow::{Result, bail};
use doctitle_core::InMemoryDocumentStore;
use doctitle_core::config::organization_from_env;
use doctitle_core::index::load_document_index;

/// Organization from the command line, else from the environment.
pub fn resolve_organization(flag: Option<&str>) -> Result<String> {
    match flag {
        Some(org) if !org.is_empty() => Ok(org.to_string()),
        _ => Ok(organization_from_env()?),
    }
}

pub fn load_index_for_titles(path: Option<&Path>) -> Result<InMemoryDocumentStore> {
    let Some(path) = path else {
        return Ok(InMemoryDocumentStore::new());
    };
    if !path.exists() {
        bail!(
            "Missing document index {}. Pass --index with a YAML file listing `documents` (url, title).",
            path.display()
        );
    }
    load_document_index(path)
}

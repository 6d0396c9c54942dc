use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use doctitle_core::config::validate_organization;
use doctitle_core::{Doc, page_title, root_url};

use crate::config_loader::load_index_for_titles;

pub fn run_root_url<W: Write>(out: &mut W, urls: &[String]) -> Result<()> {
    for url in urls {
        writeln!(out, "{}", root_url(url))?;
    }
    Ok(())
}

pub fn run_title<W: Write>(
    out: &mut W,
    organization: &str,
    title: &str,
    url: &str,
    index: Option<&Path>,
) -> Result<()> {
    let store = load_index_for_titles(index)?;
    let doc = Doc::new(title, url);
    let composed = page_title(&doc, &store, organization)?;
    writeln!(out, "{composed}")?;
    Ok(())
}

/// Prints `url<TAB>title` for every titled document in the index.
pub fn run_titles<W: Write>(out: &mut W, organization: &str, index: &Path) -> Result<usize> {
    validate_organization(organization)?;
    let store = load_index_for_titles(Some(index))?;
    let mut written = 0;
    for document in store.iter() {
        let Some(title) = document.title().filter(|title| !title.is_empty()) else {
            tracing::warn!(url = %document.url, "document has no title, skipped");
            continue;
        };
        let doc = Doc::new(title, document.url.as_str());
        let composed = page_title(&doc, &store, organization)
            .with_context(|| format!("failed to title {}", document.url))?;
        writeln!(out, "{}\t{composed}", document.url)?;
        written += 1;
    }
    tracing::info!(documents = store.len(), titled = written, "titles written");
    Ok(written)
}

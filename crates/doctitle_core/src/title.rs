//! HTML `<title>` composition
//!
//! A page title is the document's own title, followed by the title of its root
//! parent page when there is one, followed by the organization's brand suffix:
//! `Element - HTML | MDN`.

use crate::error::ConfigError;
use crate::model::Doc;
use crate::store::DocumentStore;
use crate::url::root_url;

pub const TITLE_SUFFIX: &[(&str, &str)] = &[("mdn", "MDN"), ("webdocs.dev", "webdocs.dev")];

pub fn title_suffix(organization: &str) -> Option<&'static str> {
    TITLE_SUFFIX
        .iter()
        .find(|(org, _)| *org == organization)
        .map(|(_, suffix)| *suffix)
}

/// Title of the root parent of `doc`, if `doc` is not a root itself and the
/// parent exists with a non-empty title.
pub fn parent_title<S: DocumentStore>(doc: &Doc, store: &S) -> Option<String> {
    let root = root_url(&doc.mdn_url);
    if root.is_empty() || root == doc.mdn_url {
        return None;
    }
    let lookup = root.to_lowercase();
    let Some(parent) = store.find_by_url(&lookup) else {
        tracing::debug!(url = %doc.mdn_url, root = %lookup, "no root parent document");
        return None;
    };
    parent
        .title()
        .filter(|title| !title.is_empty())
        .map(str::to_string)
}

pub fn page_title<S: DocumentStore>(
    doc: &Doc,
    store: &S,
    organization: &str,
) -> Result<String, ConfigError> {
    let mut title = doc.title.clone();
    if let Some(parent) = parent_title(doc, store) {
        title.push_str(" - ");
        title.push_str(&parent);
    }
    let suffix = title_suffix(organization).ok_or_else(|| ConfigError::UnknownOrganization {
        organization: organization.to_string(),
    })?;
    Ok(format!("{title} | {suffix}"))
}

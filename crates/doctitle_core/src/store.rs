use std::collections::BTreeMap;

use crate::model::Document;

/// Read access to the documents of a site, keyed by URL.
pub trait DocumentStore {
    fn find_by_url(&self, url: &str) -> Option<&Document>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn find_by_url(&self, url: &str) -> Option<&Document> {
        (**self).find_by_url(url)
    }
}

/// Store backed by a map of lowercased URLs. Lookups are expected to be made
/// with an already lowercased URL.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    docs: BTreeMap<String, Document>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing and returning any previous document whose
    /// URL differs only in case.
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.docs.insert(document.url.to_lowercase(), document)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Documents in lowercased URL order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.values()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn find_by_url(&self, url: &str) -> Option<&Document> {
        self.docs.get(url)
    }
}

impl FromIterator<Document> for InMemoryDocumentStore {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut store = Self::new();
        for document in iter {
            store.insert(document);
        }
        store
    }
}

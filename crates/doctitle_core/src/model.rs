//! Document models seen by the title composer

/// Page being titled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doc {
    pub title: String,
    pub mdn_url: String,
}

impl Doc {
    pub fn new(title: impl Into<String>, mdn_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mdn_url: mdn_url.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocMetadata {
    pub title: Option<String>,
}

/// A document as held by a [`crate::store::DocumentStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub url: String,
    pub metadata: DocMetadata,
}

impl Document {
    pub fn new(url: impl Into<String>, title: Option<String>) -> Self {
        Self {
            url: url.into(),
            metadata: DocMetadata { title },
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.title.as_deref()
    }
}

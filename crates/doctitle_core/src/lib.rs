pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod title;
pub mod url;

pub use crate::error::ConfigError;
pub use crate::model::{Doc, DocMetadata, Document};
pub use crate::store::{DocumentStore, InMemoryDocumentStore};
pub use crate::title::page_title;
pub use crate::url::root_url;

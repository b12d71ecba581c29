//! Read-only document store.
//!
//! Built once at startup, either from the built-in school documents or from
//! a TOML knowledge file, then shared behind an `Arc` for the lifetime of
//! the process. No mutation is exposed after construction.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::school_kb::{builtin_documents, ADDRESS_DOCUMENT_ID};
use crate::types::Document;

/// Errors raised while building a store from external data.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Knowledge file I/O error ({0}): {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Knowledge file parse error ({0}): {1}")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Duplicate document id: {0}")]
    DuplicateId(String),

    #[error("Document has an empty id")]
    EmptyId,
}

/// On-disk layout of a knowledge file: a list of `[[documents]]` tables.
#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    documents: Vec<Document>,
}

/// Immutable, ordered collection of knowledge documents.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    documents: Vec<Document>,
    address_id: String,
}

impl KnowledgeStore {
    /// Store holding the built-in school documents.
    pub fn builtin() -> Self {
        Self {
            documents: builtin_documents(),
            address_id: ADDRESS_DOCUMENT_ID.to_string(),
        }
    }

    /// Build a store from an explicit document list.
    ///
    /// Tags are normalised; ids must be non-empty and unique. A list
    /// without the canonical address document is accepted (location
    /// queries then fall back to ordinary retrieval).
    pub fn from_documents(mut documents: Vec<Document>) -> Result<Self, KnowledgeError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &mut documents {
            if doc.id.trim().is_empty() {
                return Err(KnowledgeError::EmptyId);
            }
            if !seen.insert(doc.id.clone()) {
                return Err(KnowledgeError::DuplicateId(doc.id.clone()));
            }
            doc.normalize_tags();
        }

        let store = Self {
            documents,
            address_id: ADDRESS_DOCUMENT_ID.to_string(),
        };
        if store.address_document().is_none() {
            warn!(
                address_id = ADDRESS_DOCUMENT_ID,
                "Knowledge store has no canonical address document"
            );
        }
        Ok(store)
    }

    /// Load a store from a TOML file of `[[documents]]` tables.
    pub fn from_toml_file(path: &Path) -> Result<Self, KnowledgeError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| KnowledgeError::Io(path.to_path_buf(), e))?;
        let file: KnowledgeFile = toml::from_str(&contents)
            .map_err(|e| KnowledgeError::Parse(path.to_path_buf(), e))?;
        let store = Self::from_documents(file.documents)?;
        info!(path = %path.display(), documents = store.len(), "Loaded knowledge file");
        Ok(store)
    }

    /// All documents in their original order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Linear lookup by id. Unknown ids are a normal `None`.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// The document carrying the canonical school address, if present.
    pub fn address_document(&self) -> Option<&Document> {
        self.get(&self.address_id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

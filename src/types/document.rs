//! Knowledge documents and their topic categories.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Topic label attached to every knowledge document.
///
/// Serialised lowercase (`"fees"`, `"location"`, ...) both in the TOML
/// knowledge file and in the `sources` array of chat responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Admissions,
    Fees,
    Documents,
    Dates,
    Contact,
    General,
    Location,
    Assessment,
    Campus,
}

impl DocumentCategory {
    /// Lowercase label used for matching and context assembly.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admissions => "admissions",
            Self::Fees => "fees",
            Self::Documents => "documents",
            Self::Dates => "dates",
            Self::Contact => "contact",
            Self::General => "general",
            Self::Location => "location",
            Self::Assessment => "assessment",
            Self::Campus => "campus",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single immutable knowledge base entry.
///
/// Tags are lowercased and deduplicated by [`Document::new`]; documents
/// deserialised from a knowledge file go through the same normalisation
/// in the store loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable key, used for special-case lookups such as the address entry
    pub id: String,
    /// Answer text shown to parents
    pub content: String,
    pub category: DocumentCategory,
    /// Lowercase keywords used for matching
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form annotations, not used by retrieval
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Document {
    pub fn new<I, S>(
        id: impl Into<String>,
        content: impl Into<String>,
        category: DocumentCategory,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut doc = Self {
            id: id.into(),
            content: content.into(),
            category,
            tags: tags.into_iter().map(|t| t.as_ref().to_string()).collect(),
            metadata: BTreeMap::new(),
        };
        doc.normalize_tags();
        doc
    }

    /// Attach a metadata annotation.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Lowercase every tag and drop duplicates, keeping first occurrence order.
    pub fn normalize_tags(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.drain(..) {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        self.tags = seen;
    }
}

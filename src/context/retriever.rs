//! Keyword retrieval over the knowledge store.
//!
//! Substring matching, not token equality: the term "fee" matches the tag
//! "fees". A document is admitted when any term occurs in its content, any
//! tag, or its category label. Ranking counts the distinct terms found in
//! content or tags only; the category can admit a document but never adds
//! to its rank.

use std::sync::Arc;

use super::KnowledgeStore;
use crate::types::Document;

/// Terms that mark a query as asking where the school is.
///
/// "school location" contains a space, so it never equals a single
/// whitespace-separated term; it is kept to mirror the address tags.
pub const LOCATION_TERMS: &[&str] = &[
    "location",
    "address",
    "where",
    "find",
    "directions",
    "map",
    "locate",
    "site",
    "venue",
    "place",
    "school location",
    "campus",
];

/// Lowercase the query and split it on whitespace into distinct terms,
/// keeping first-occurrence order.
pub fn search_terms(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in query.to_lowercase().split_whitespace() {
        if !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    terms
}

/// Ranks store documents against free-text queries.
#[derive(Debug, Clone)]
pub struct Retriever {
    store: Arc<KnowledgeStore>,
}

impl Retriever {
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Return every matching document, most relevant first.
    ///
    /// The list is not truncated; callers slice to their own cap. When any
    /// term is a location term the canonical address document is moved (or
    /// inserted) at rank 0 regardless of score.
    pub fn search(&self, query: &str) -> Vec<&Document> {
        let terms = search_terms(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, &Document)> = self
            .store
            .documents()
            .iter()
            .filter(|doc| is_match(&terms, doc))
            .map(|doc| (relevance(&terms, doc), doc))
            .collect();

        // sort_by is stable: equal scores keep store order
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        let mut results: Vec<&Document> = scored.into_iter().map(|(_, doc)| doc).collect();

        if is_location_query(&terms) {
            self.boost_address(&mut results);
        }

        results
    }

    fn boost_address<'a>(&'a self, results: &mut Vec<&'a Document>) {
        let Some(address) = self.store.address_document() else {
            return;
        };
        if let Some(pos) = results.iter().position(|d| d.id == address.id) {
            let doc = results.remove(pos);
            results.insert(0, doc);
        } else {
            results.insert(0, address);
        }
    }
}

fn is_location_query(terms: &[String]) -> bool {
    terms.iter().any(|t| LOCATION_TERMS.contains(&t.as_str()))
}

fn is_match(terms: &[String], doc: &Document) -> bool {
    let content = doc.content.to_lowercase();
    let category = doc.category.as_str();
    terms.iter().any(|term| {
        content.contains(term.as_str())
            || doc.tags.iter().any(|tag| tag.contains(term.as_str()))
            || category.contains(term.as_str())
    })
}

/// Number of distinct terms found in the content or any tag.
fn relevance(terms: &[String], doc: &Document) -> usize {
    let content = doc.content.to_lowercase();
    terms
        .iter()
        .filter(|term| {
            content.contains(term.as_str()) || doc.tags.iter().any(|tag| tag.contains(term.as_str()))
        })
        .count()
}

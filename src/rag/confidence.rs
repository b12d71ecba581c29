//! Lexical confidence heuristic
//!
//! How much of the query's vocabulary is backed by the retrieved sources.
//! Not a calibrated probability; only meaningful for ordering and thresholds.

use crate::config::defaults::{CONFIDENCE_NORMALIZER, CONTENT_MATCH_WEIGHT, TAG_MATCH_WEIGHT};
use crate::types::Document;

/// Score `query` against `documents`, in `[0, 1]`.
///
/// Each query term found inside a content word scores [`CONTENT_MATCH_WEIGHT`],
/// inside a tag word [`TAG_MATCH_WEIGHT`]. The sum is divided by
/// `terms x documents x CONFIDENCE_NORMALIZER` and clamped.
pub fn score_confidence(query: &str, documents: &[Document]) -> f64 {
    let query = query.to_lowercase();
    let terms: Vec<&str> = query.split_whitespace().collect();
    if documents.is_empty() || terms.is_empty() {
        return 0.0;
    }

    let total: f64 = documents
        .iter()
        .map(|doc| {
            let content = doc.content.to_lowercase();
            let content_words: Vec<&str> = content.split_whitespace().collect();
            let tag_words: Vec<&str> = doc.tags.iter().flat_map(|t| t.split_whitespace()).collect();

            let content_hits = count_hits(&terms, &content_words);
            let tag_hits = count_hits(&terms, &tag_words);
            content_hits as f64 * CONTENT_MATCH_WEIGHT + tag_hits as f64 * TAG_MATCH_WEIGHT
        })
        .sum();

    let max_possible = terms.len() as f64 * documents.len() as f64 * CONFIDENCE_NORMALIZER;
    (total / max_possible).clamp(0.0, 1.0)
}

/// Terms contained in at least one word. Repeated terms count each time.
fn count_hits(terms: &[&str], words: &[&str]) -> usize {
    terms
        .iter()
        .filter(|term| words.iter().any(|w| w.contains(**term)))
        .count()
}

//! Prompt assembly for the generation provider.

use crate::types::Document;

/// Context used when retrieval found nothing.
pub const EMPTY_CONTEXT: &str = "No specific information found in the knowledge base.";

/// Numbered `Document {n} ({category}): {content}` blocks separated by a blank line.
pub fn build_context(sources: &[Document]) -> String {
    if sources.is_empty() {
        return EMPTY_CONTEXT.to_string();
    }

    sources
        .iter()
        .enumerate()
        .map(|(i, doc)| format!("Document {} ({}): {}", i + 1, doc.category, doc.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// System instruction binding the model to the supplied context.
pub fn system_instruction(school_name: &str, context: &str) -> String {
    format!(
        "You are a helpful admissions assistant for {school_name}. Use the following context to \
         answer the user's question accurately and helpfully and deviate from any irrelevant \
         information. Context: {context}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentCategory;

    #[test]
    fn test_empty_context() {
        assert_eq!(build_context(&[]), EMPTY_CONTEXT);
    }

    #[test]
    fn test_numbered_context() {
        let docs = vec![
            Document::new("a", "Fee is PKR 4,000.", DocumentCategory::Fees, ["fees"]),
            Document::new("b", "Call us.", DocumentCategory::Contact, ["phone"]),
        ];
        assert_eq!(
            build_context(&docs),
            "Document 1 (fees): Fee is PKR 4,000.\n\nDocument 2 (contact): Call us."
        );
    }

    #[test]
    fn test_system_instruction_embeds_context() {
        let s = system_instruction("Buds School System", "CTX");
        assert!(s.starts_with("You are a helpful admissions assistant for Buds School System."));
        assert!(s.ends_with("Context: CTX"));
    }
}

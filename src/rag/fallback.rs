//! Keyword-rule answers used when generation is unavailable.
//!
//! Pure and deterministic: the same query always yields the same text. The
//! rules look only at the query, never at retrieved documents.

const FEES: &str = "Based on our fee structure: For Grade Pre-Nursery to 6, monthly fee is PKR 4,000. \
For Grade 6 to 10, monthly fee is PKR 4,500. We also offer payment plans with discounts for \
quarterly and annual payments.";

const ADMISSIONS: &str = "Our admission process has 4 steps: 1) Application Form, 2) Document Submission, \
3) Assessment Test, and 4) Admission Decision. The process typically takes 7-10 working days.";

const DOCUMENTS: &str = "Required documents include: Birth Certificate, Previous School Leaving Certificate, \
Academic Transcripts, Parent CNIC, Recent Photographs, Medical Certificate, and Character Certificate \
(if applicable).";

const DATES: &str = "Application opens February 1, 2025, deadline is March 31, 2025, and the academic \
year starts April 15, 2025.";

const VISITS: &str = "You can schedule a campus visit by calling +92 (51) 123-4567 or WhatsApp at \
+92 300 123-4567. Tours are available Monday to Friday, 9 AM to 3 PM.";

/// Answer when no rule matches.
pub const DEFAULT_FALLBACK: &str = "Thank you for your question! For specific inquiries, I recommend \
contacting our admissions team directly at +92 (51) 123-4567 or visiting our campus.";

/// Keyword buckets in priority order. The first bucket with any keyword
/// contained in the lowercased query wins.
const RULES: &[(&[&str], &str)] = &[
    (&["fee", "cost"], FEES),
    (&["admission", "apply"], ADMISSIONS),
    (&["document", "requirement"], DOCUMENTS),
    (&["when", "deadline"], DATES),
    (&["visit", "tour"], VISITS),
];

/// Canned answer for `query`.
pub fn fallback_response(query: &str) -> &'static str {
    let query = query.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| query.contains(k)))
        .map_or(DEFAULT_FALLBACK, |(_, text)| text)
}

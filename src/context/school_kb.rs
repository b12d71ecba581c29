//! Built-in Buds School knowledge base.
//!
//! Loaded once at startup when no knowledge file is configured.

use crate::types::{Document, DocumentCategory};

/// Id of the document carrying the canonical school address.
pub const ADDRESS_DOCUMENT_ID: &str = "school-info-3";

/// Build the default document set, in display order.
pub fn builtin_documents() -> Vec<Document> {
    use DocumentCategory::{
        Admissions, Assessment, Campus, Contact, Dates, Documents, Fees, General, Location,
    };

    vec![
        // Admission process
        Document::new(
            "admission-process-1",
            "The admission process at Buds School consists of 4 main steps: 1) Application Form completion, \
             2) Document Submission, 3) Assessment Test, and 4) Admission Decision. \
             The entire process typically takes 7-10 working days.",
            Admissions,
            ["admission", "process", "steps", "application"],
        ),
        Document::new(
            "admission-process-2",
            "Step 1: Complete and submit the online application form with all required information \
             including student details, parent information, and previous academic history.",
            Admissions,
            ["application", "form", "online", "step 1"],
        ),
        Document::new(
            "admission-process-3",
            "Step 2: Submit required documents including previous academic records, certificates, \
             birth certificate, and parent identification documents.",
            Admissions,
            ["documents", "submission", "step 2", "requirements"],
        ),
        Document::new(
            "admission-process-4",
            "Step 3: Participate in our age-appropriate assessment test to determine academic level \
             and placement in the appropriate grade.",
            Admissions,
            ["assessment", "test", "placement", "step 3"],
        ),
        Document::new(
            "admission-process-5",
            "Step 4: Receive admission decision within 7-10 working days of completing all previous steps.",
            Admissions,
            ["decision", "timeline", "step 4", "admission result"],
        ),
        // Fee structure
        Document::new(
            "fee-structure-1",
            "For Grade Pre-Nursery to 6: Monthly fee is PKR 4,000, Admission fee is PKR 10,000, \
             and Annual fee is PKR 5,000.",
            Fees,
            ["fees", "grade pre-nursery", "grade 6", "monthly", "admission", "annual"],
        ),
        Document::new(
            "fee-structure-2",
            "For Grade 6 to 10: Monthly fee is PKR 4,500, Admission fee is PKR 10,000, \
             and Annual fee is PKR 10,000.",
            Fees,
            ["fees", "grade 6", "grade 10", "monthly", "admission", "annual"],
        ),
        Document::new(
            "fee-payment-plans",
            "Payment plans available: Monthly installments, Quarterly payments (5% discount), \
             and Annual payment (10% discount).",
            Fees,
            ["payment", "plans", "installments", "discount", "quarterly", "annual"],
        ),
        Document::new(
            "fee-includes",
            "Fees include: Tuition and curriculum materials, Library and computer lab access, \
             Sports and extracurricular activities.",
            Fees,
            ["fees", "includes", "tuition", "library", "sports", "activities"],
        ),
        // Required documents
        Document::new(
            "documents-1",
            "Required documents for admission: Birth Certificate (Original + Photocopy), \
             Previous School Leaving Certificate, Academic Transcripts from Previous School, \
             Parent/Guardian CNIC (Photocopy), Student's Recent Photographs (4 passport size), \
             Medical Certificate, and Character Certificate (if applicable).",
            Documents,
            [
                "documents",
                "requirements",
                "birth certificate",
                "school certificate",
                "transcripts",
                "cnic",
                "photographs",
                "medical",
                "character",
            ],
        ),
        // Important dates
        Document::new(
            "dates-1",
            "Application opens on February 1, 2025 for the academic year 2025-26.",
            Dates,
            ["application", "opens", "february", "2025", "academic year"],
        ),
        Document::new(
            "dates-2",
            "Application deadline is March 31, 2025.",
            Dates,
            ["deadline", "march", "2025", "application"],
        ),
        Document::new(
            "dates-3",
            "Academic year starts on April 15, 2025.",
            Dates,
            ["academic year", "starts", "april", "2025"],
        ),
        // Contact
        Document::new(
            "contact-1",
            "You can schedule a campus visit by calling +92 (51) 123-4567 or WhatsApp us at \
             +92 300 123-4567. Campus tours are available Monday to Friday, 9 AM to 3 PM.",
            Contact,
            ["campus visit", "tour", "phone", "whatsapp", "schedule"],
        ),
        Document::new(
            "contact-2",
            "For specific inquiries, contact our admissions team directly at +92 (51) 123-4567 \
             or visit our campus.",
            Contact,
            ["admissions team", "phone", "campus", "inquiries"],
        ),
        // General
        Document::new(
            "school-info-1",
            "Buds School is accepting applications for the 2025-26 academic year. \
             Early applications are encouraged as we have limited seats.",
            General,
            ["academic year", "applications", "limited seats", "early application"],
        ),
        Document::new(
            "school-info-2",
            "Buds School provides quality education with a focus on academic excellence, \
             character development, and holistic growth.",
            General,
            ["quality education", "academic excellence", "character development", "holistic growth"],
        ),
        Document::new(
            ADDRESS_DOCUMENT_ID,
            "Buds School is located at New AECHS Rd, Sector 2 Airport Employees CHS, Rawalpindi. \
             The exact address is Airport Employees CHS, House No. 232/15, Rawalpindi, Pakistan.",
            Location,
            [
                "location",
                "address",
                "map",
                "campus",
                "where",
                "school location",
                "directions",
                "find",
                "place",
                "site",
                "locate",
                "venue",
            ],
        ),
        // Assessment
        Document::new(
            "assessment-1",
            "The assessment test is age-appropriate and designed to determine the student's \
             current academic level for proper grade placement.",
            Assessment,
            ["assessment", "test", "age-appropriate", "academic level", "placement"],
        ),
        // Campus
        Document::new(
            "campus-1",
            "Our campus features modern facilities including well-equipped classrooms, computer labs, \
             library, sports facilities, and dedicated spaces for extracurricular activities.",
            Campus,
            ["campus", "facilities", "classrooms", "computer labs", "library", "sports"],
        ),
    ]
}

//! System prompts steering the model towards each document's JSON schema.

use super::DocumentType;

pub const INVOICE_PROMPT: &str = r#"You are an invoice data parser. Extract invoice details from the user input and return ONLY valid JSON (no markdown, no code blocks, just raw JSON) with these fields:
{
    "expertName": "Name of the expert/seller",
    "expertLink": "URL to expert profile (full URL)",
    "billedName": "Customer name",
    "billedEmail": "Customer email",
    "billedPhone": "Customer phone number",
    "itemName": "Service/product name",
    "amount": 0,
    "discount": 0,
    "date": "YYYY-MM-DD format"
}

If any field is missing, use reasonable defaults. For date, convert any format to YYYY-MM-DD."#;

pub const CERTIFICATE_PROMPT: &str = r#"You are a certificate data parser. Extract certificate details from the user input and return ONLY valid JSON (no markdown, no code blocks, just raw JSON) with these fields:
{
    "recipientName": "Full name of person receiving the certificate",
    "courseName": "Name of the course or program completed",
    "cohortName": "Name of the cohort if mentioned (e.g., 'February 2026 Cohort'), or empty string",
    "certificateType": "cohort" or "self-paced" (use "cohort" if cohort name is mentioned, otherwise "self-paced"),
    "creatorName": "Name of the instructor or course creator",
    "creatorProfileUrl": "Full Topmate URL (e.g., https://topmate.io/username)",
    "completionDate": "Date when recipient completed the course in YYYY-MM-DD format",
    "issueDate": "Date when certificate is issued in YYYY-MM-DD format (use today if not specified)",
    "duration": "Course duration (e.g., '8 weeks', '12 hours'), or empty string if not mentioned",
    "signatureTitle": "Title for signature (e.g., 'Course Instructor', 'Founder'), default to 'Course Instructor'"
}

If any field is missing, use reasonable defaults. For dates, convert any format to YYYY-MM-DD. If a Topmate username is mentioned without full URL, prepend https://topmate.io/"#;

/// One entry per document type. Adding a type means adding a variant and a row here.
const TEMPLATES: &[(DocumentType, &str)] = &[
    (DocumentType::Invoice, INVOICE_PROMPT),
    (DocumentType::Certificate, CERTIFICATE_PROMPT),
];

pub fn lookup(doc_type: DocumentType) -> &'static str {
    TEMPLATES
        .iter()
        .find(|(t, _)| *t == doc_type)
        .map(|(_, prompt)| *prompt)
        .unwrap_or(INVOICE_PROMPT)
}

mod document;
mod extractor;
pub mod templates;

pub use document::DocumentType;
pub use extractor::{ExtractionRequest, Extractor, ExtractorSettings};

use super::templates;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Invoice,
    Certificate,
}

impl DocumentType {
    pub const ALL: [DocumentType; 2] = [DocumentType::Invoice, DocumentType::Certificate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoice => "invoice",
            Self::Certificate => "certificate",
        }
    }

    /// Maps the request's `type` field. Absent and unrecognised values both
    /// resolve to `Invoice`; the latter is logged.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(value) => Self::ALL
                .into_iter()
                .find(|t| t.as_str() == value)
                .unwrap_or_else(|| {
                    warn!("Unknown document type '{}', falling back to invoice", value);
                    Self::Invoice
                }),
        }
    }

    pub fn template(&self) -> &'static str {
        templates::lookup(*self)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

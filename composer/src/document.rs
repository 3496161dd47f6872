//! Document container, canonical serialization and the persistence seam.
//!
//! DESIGN
//! ======
//! The canonical export is a JSON object `{"pages": [...]}` where each page
//! carries `id`, `elements`, `background`, `width`, `height` and each element
//! carries its full field set plus its `type` tag. Both directions validate:
//! `serialize` refuses to emit a document with any invalid page, and
//! `deserialize` refuses to return a document that parsed but fails
//! validation. Neither ever yields partial output.
//!
//! Storage itself is a collaborator behind [`DocumentStore`]; the engine only
//! hands it text and expects the same text back.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{DocumentError, ErrorCode, Validation, ValidationError};
use crate::page::{Page, validate_page};

// =============================================================================
// DOCUMENT
// =============================================================================

/// The full photobook: an ordered list of pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    #[must_use]
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Index of the page with `id`.
    #[must_use]
    pub fn page_index(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    /// Total number of elements across all pages.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.pages.iter().map(|p| p.elements.len()).sum()
    }

    /// Locate an element anywhere in the document as `(page_index, element_index)`.
    #[must_use]
    pub fn locate_element(&self, id: &str) -> Option<(usize, usize)> {
        self.pages.iter().enumerate().find_map(|(pi, page)| page.position_of(id).map(|ei| (pi, ei)))
    }
}

/// Validate every page, re-rooting page errors under `pages[i]`, and check
/// page ids are unique.
#[must_use]
pub fn validate_document(doc: &Document) -> Validation {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, page) in doc.pages.iter().enumerate() {
        let prefix = format!("pages[{i}]");
        if !page.id.is_empty() && !seen.insert(page.id.as_str()) {
            errors.push(ValidationError::new(
                format!("{prefix}.id"),
                format!("duplicate page id {}", page.id),
                ErrorCode::DuplicateId,
            ));
        }
        errors.extend(validate_page(page).errors.into_iter().map(|e| e.prefixed(&prefix)));
    }

    Validation::from_errors(errors)
}

// =============================================================================
// SERIALIZATION
// =============================================================================

/// Render a valid document as canonical JSON text.
///
/// # Errors
///
/// Returns [`DocumentError::Invalid`] with every validation error when any
/// page is invalid; nothing is produced in that case.
pub fn serialize(doc: &Document) -> Result<String, DocumentError> {
    validate_document(doc).into_result().map_err(DocumentError::Invalid)?;
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Parse and validate a document.
///
/// # Errors
///
/// Returns [`DocumentError::Malformed`] for text that is not a document and
/// [`DocumentError::Invalid`] for a document that fails validation.
pub fn deserialize(text: &str) -> Result<Document, DocumentError> {
    let doc: Document = serde_json::from_str(text)?;
    validate_document(&doc).into_result().map_err(DocumentError::Invalid)?;
    Ok(doc)
}

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Where serialized documents go between sessions.
///
/// Implementations must hand back exactly the text they were given.
pub trait DocumentStore {
    /// Store `text` under `key`, replacing anything already there.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] when the backend cannot store the text.
    fn save(&mut self, key: &str, text: String) -> Result<(), DocumentError>;

    /// Fetch the text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotFound`] when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<String, DocumentError>;
}

/// In-memory [`DocumentStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn save(&mut self, key: &str, text: String) -> Result<(), DocumentError> {
        self.entries.insert(key.to_owned(), text);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<String, DocumentError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| DocumentError::NotFound(key.to_owned()))
    }
}

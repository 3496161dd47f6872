//! Validation records and the error enums returned by the engine.
//!
//! Validation never stops at the first problem: every check runs and each
//! failure becomes one [`ValidationError`], so a caller building UI can show
//! the complete picture at once. Not-found conditions are ordinary values
//! (`bool`/`Option`/`Err`), never panics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// VALIDATION
// =============================================================================

/// Machine-readable reason attached to a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingId,
    InvalidPosition,
    InvalidSize,
    InvalidRotation,
    MissingSource,
    MissingText,
    InvalidFontSize,
    MissingStickerId,
    EmptyPath,
    InvalidStrokeWidth,
    InvalidOpacity,
    InvalidIntensity,
    InvalidStyle,
    DuplicateId,
}

impl ErrorCode {
    /// Wire form of the code, e.g. `"INVALID_POSITION"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingId => "MISSING_ID",
            Self::InvalidPosition => "INVALID_POSITION",
            Self::InvalidSize => "INVALID_SIZE",
            Self::InvalidRotation => "INVALID_ROTATION",
            Self::MissingSource => "MISSING_SOURCE",
            Self::MissingText => "MISSING_TEXT",
            Self::InvalidFontSize => "INVALID_FONT_SIZE",
            Self::MissingStickerId => "MISSING_STICKER_ID",
            Self::EmptyPath => "EMPTY_PATH",
            Self::InvalidStrokeWidth => "INVALID_STROKE_WIDTH",
            Self::InvalidOpacity => "INVALID_OPACITY",
            Self::InvalidIntensity => "INVALID_INTENSITY",
            Self::InvalidStyle => "INVALID_STYLE",
            Self::DuplicateId => "DUPLICATE_ID",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural problem found while validating an element, page or document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `pages[0].elements[2].width`.
    pub field: String,
    /// Human-readable description.
    pub message: String,
    pub code: ErrorCode,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: ErrorCode) -> Self {
        Self { field: field.into(), message: message.into(), code }
    }

    /// Re-root this error under a parent path (`prefix.field`).
    #[must_use]
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.field = format!("{prefix}.{}", self.field);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.field, self.code, self.message)
    }
}

/// Outcome of a validation pass: the full list of problems, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl Validation {
    #[must_use]
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Whether any error carries `code`.
    #[must_use]
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// `Ok(())` when valid, otherwise the collected errors.
    ///
    /// # Errors
    ///
    /// Returns every collected [`ValidationError`] when the record is invalid.
    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.is_valid { Ok(()) } else { Err(self.errors) }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// DOCUMENT / ENGINE ERRORS
// =============================================================================

/// Failure to turn text into a document or back.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The input text is not a well-formed document.
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The document parsed (or was built) but fails validation.
    #[error("invalid document: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
    /// The persistence collaborator has nothing stored under the key.
    #[error("no document stored under key: {0}")]
    NotFound(String),
}

impl DocumentError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "E_MALFORMED",
            Self::Invalid(_) => "E_INVALID",
            Self::NotFound(_) => "E_NOT_FOUND",
        }
    }
}

/// Failure of a composition-engine operation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("page not found: {0}")]
    PageNotFound(usize),
    #[error("element not found on page {page}: {id}")]
    ElementNotFound { page: usize, id: String },
    #[error("validation failed: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
    #[error("template has no elements: {0}")]
    EmptyTemplate(String),
    #[error("unknown resize handle: {0}")]
    UnknownHandle(String),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl EngineError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PageNotFound(_) => "E_PAGE_NOT_FOUND",
            Self::ElementNotFound { .. } => "E_ELEMENT_NOT_FOUND",
            Self::Invalid(_) => "E_INVALID",
            Self::EmptyTemplate(_) => "E_EMPTY_TEMPLATE",
            Self::UnknownHandle(_) => "E_UNKNOWN_HANDLE",
            Self::Document(e) => e.error_code(),
        }
    }

    /// The validation errors carried by this failure, if any.
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(errors) | Self::Document(DocumentError::Invalid(errors)) => errors,
            _ => &[],
        }
    }
}

use std::path::PathBuf;

use thiserror::Error;

use crate::creational::abstract_factory::FamilyTag;
use crate::creational::document::{DocumentKind, Stage};
use crate::creational::singleton::SingletonState;

/// A lifecycle stage of a document failed.
///
/// The built-in documents never fail; the variant exists so that a real
/// backend (or a test double) can report a failure that `run_lifecycle`
/// propagates unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("failed to {stage} {kind} document: {reason}")]
pub struct DocumentError {
    pub kind: DocumentKind,
    pub stage: Stage,
    pub reason: String,
}

impl DocumentError {
    pub fn new(kind: DocumentKind, stage: Stage, reason: impl Into<String>) -> Self {
        Self {
            kind,
            stage,
            reason: reason.into(),
        }
    }
}

/// Failures of the simple factory, the document suites and the registry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FactoryError {
    #[error("unknown document type '{selector}' (expected one of: {expected})")]
    UnknownSelector { selector: String, expected: String },

    #[error("unknown document suite '{family}' (expected one of: {expected})")]
    UnknownFamily { family: String, expected: String },

    #[error("the {family} suite does not create {kind} documents")]
    UnsupportedVariant { family: FamilyTag, kind: DocumentKind },

    #[error(transparent)]
    Lifecycle(#[from] DocumentError),
}

impl FactoryError {
    /// Whether the caller can sensibly retry with different input.
    ///
    /// Selector and family mismatches are input problems and an unsupported
    /// variant is an expected refusal. A lifecycle failure comes from the
    /// document itself and is not fixed by reprompting.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FactoryError::Lifecycle(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SingletonError {
    #[error("direct construction rejected while {state}: use DatabaseConnection::instance()")]
    IllegalState { state: SingletonState },

    #[error("DatabaseConnection cannot be cloned")]
    CloneNotSupported,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        let unknown = FactoryError::UnknownSelector {
            selector: "txt".to_string(),
            expected: "word, excel, pdf".to_string(),
        };
        let unsupported = FactoryError::UnsupportedVariant {
            family: FamilyTag::MicrosoftLike,
            kind: DocumentKind::Pdf,
        };
        let lifecycle = FactoryError::from(DocumentError::new(
            DocumentKind::Word,
            Stage::Save,
            "disk full",
        ));

        assert!(unknown.is_recoverable());
        assert!(unsupported.is_recoverable());
        assert!(!lifecycle.is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = FactoryError::UnsupportedVariant {
            family: FamilyTag::MicrosoftLike,
            kind: DocumentKind::Pdf,
        };
        assert_eq!(err.to_string(), "the microsoft-like suite does not create PDF documents");

        let err = DocumentError::new(DocumentKind::Spreadsheet, Stage::Close, "locked");
        assert_eq!(err.to_string(), "failed to close Excel document: locked");

        let err = SingletonError::IllegalState {
            state: SingletonState::Ready,
        };
        assert!(err.to_string().contains("instance()"));
    }

    #[test]
    fn test_lifecycle_is_transparent() {
        let inner = DocumentError::new(DocumentKind::Pdf, Stage::Open, "corrupt");
        let outer = FactoryError::from(inner.clone());
        assert_eq!(outer.to_string(), inner.to_string());
    }
}

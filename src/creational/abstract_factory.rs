// Abstract factory: document suites and the registry that resolves them.

use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::creational::document::{self, run_lifecycle, Document, DocumentKind, LifecycleReport};
use crate::creational::simple_factory::parse_kind;
use crate::creational::{expected_list, normalize_selector};
use crate::error::FactoryError;

// ============================================================================
// Example: Abstract Factory (document suites)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyTag {
    MicrosoftLike,
    OpenLike,
}

impl FamilyTag {
    pub fn selector(self) -> &'static str {
        match self {
            FamilyTag::MicrosoftLike => "microsoft-like",
            FamilyTag::OpenLike => "open-like",
        }
    }
}

impl fmt::Display for FamilyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// A family of documents that belong together.
///
/// Every creation method is independently callable. A suite may decline a
/// kind it does not produce by returning [`FactoryError::UnsupportedVariant`];
/// callers should treat that as an expected answer, not a bug.
pub trait DocumentSuite: Send + Sync {
    fn tag(&self) -> FamilyTag;

    fn create_word(&self) -> Result<Box<dyn Document>, FactoryError>;

    fn create_spreadsheet(&self) -> Result<Box<dyn Document>, FactoryError>;

    fn create_pdf(&self) -> Result<Box<dyn Document>, FactoryError>;

    fn create(&self, kind: DocumentKind) -> Result<Box<dyn Document>, FactoryError> {
        match kind {
            DocumentKind::Word => self.create_word(),
            DocumentKind::Spreadsheet => self.create_spreadsheet(),
            DocumentKind::Pdf => self.create_pdf(),
        }
    }
}

/// Office-style suite. Has no native PDF support.
#[derive(Debug, Default)]
pub struct MicrosoftLikeSuite;

impl DocumentSuite for MicrosoftLikeSuite {
    fn tag(&self) -> FamilyTag {
        FamilyTag::MicrosoftLike
    }

    fn create_word(&self) -> Result<Box<dyn Document>, FactoryError> {
        Ok(document::new_word())
    }

    fn create_spreadsheet(&self) -> Result<Box<dyn Document>, FactoryError> {
        Ok(document::new_spreadsheet())
    }

    fn create_pdf(&self) -> Result<Box<dyn Document>, FactoryError> {
        log::warn!("{} suite does not natively create PDF documents", self.tag());
        Err(FactoryError::UnsupportedVariant {
            family: self.tag(),
            kind: DocumentKind::Pdf,
        })
    }
}

#[derive(Debug, Default)]
pub struct OpenLikeSuite;

impl DocumentSuite for OpenLikeSuite {
    fn tag(&self) -> FamilyTag {
        FamilyTag::OpenLike
    }

    fn create_word(&self) -> Result<Box<dyn Document>, FactoryError> {
        log::info!("Creating {} Word document...", self.tag());
        Ok(document::new_word())
    }

    fn create_spreadsheet(&self) -> Result<Box<dyn Document>, FactoryError> {
        log::info!("Creating {} Excel document...", self.tag());
        Ok(document::new_spreadsheet())
    }

    fn create_pdf(&self) -> Result<Box<dyn Document>, FactoryError> {
        Ok(document::new_pdf())
    }
}

type SuiteConstructor = fn() -> Box<dyn DocumentSuite>;

fn microsoft_like() -> Box<dyn DocumentSuite> {
    Box::new(MicrosoftLikeSuite)
}

fn open_like() -> Box<dyn DocumentSuite> {
    Box::new(OpenLikeSuite)
}

// ============================================================================
// Family registry
// ============================================================================

/// Read-only map from family selector to suite constructor.
pub struct FamilyRegistry {
    suites: FxHashMap<&'static str, SuiteConstructor>,
}

lazy_static! {
    static ref REGISTRY: FamilyRegistry = FamilyRegistry::builtin();
}

impl FamilyRegistry {
    fn builtin() -> Self {
        let mut suites: FxHashMap<&'static str, SuiteConstructor> = FxHashMap::default();
        suites.insert(FamilyTag::MicrosoftLike.selector(), microsoft_like);
        suites.insert(FamilyTag::OpenLike.selector(), open_like);
        Self { suites }
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static FamilyRegistry {
        &REGISTRY
    }

    pub fn resolve(&self, family: &str) -> Result<Box<dyn DocumentSuite>, FactoryError> {
        let normalized = normalize_selector(family);
        match self.suites.get(normalized.as_str()) {
            Some(constructor) => Ok(constructor()),
            None => Err(FactoryError::UnknownFamily {
                family: family.to_string(),
                expected: expected_list(self.tags()),
            }),
        }
    }

    /// Registered selectors, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = self.suites.keys().copied().collect();
        tags.sort_unstable();
        tags
    }
}

/// Resolves the family, creates the requested kind and runs its lifecycle.
pub fn process_creation(family: &str, variant: &str) -> Result<LifecycleReport, FactoryError> {
    let suite = FamilyRegistry::global().resolve(family)?;
    let kind = parse_kind(variant)?;
    log::debug!("creating a {kind} document with the {} suite", suite.tag());

    let document = suite.create(kind)?;
    Ok(run_lifecycle(document.as_ref())?)
}

// ============================================================================
// Tests
// ============================================================================

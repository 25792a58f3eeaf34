// Simple factory: one selector string picks one document constructor.

use crate::creational::document::{self, run_lifecycle, Constructor, Document, DocumentKind, LifecycleReport};
use crate::creational::{expected_list, normalize_selector};
use crate::error::{DocumentError, FactoryError};

// ============================================================================
// Example: Simple Factory (selector -> document)
// ============================================================================

/// Creates documents and runs them through the open/save/close template.
pub trait DocumentFactory {
    fn create_document(&self) -> Box<dyn Document>;

    fn new_document(&self) -> Result<LifecycleReport, DocumentError> {
        let document = self.create_document();
        run_lifecycle(document.as_ref())
    }
}

const VARIANTS: [(&str, DocumentKind, Constructor); 3] = [
    ("word", DocumentKind::Word, document::new_word),
    ("excel", DocumentKind::Spreadsheet, document::new_spreadsheet),
    ("pdf", DocumentKind::Pdf, document::new_pdf),
];

/// Factory bound to exactly one document kind.
#[derive(Debug, Clone)]
pub struct SimpleFactory {
    selector: String,
    kind: DocumentKind,
    constructor: Constructor,
}

impl SimpleFactory {
    pub fn resolve(selector: &str) -> Result<Self, FactoryError> {
        let normalized = normalize_selector(selector);
        VARIANTS
            .iter()
            .find(|(name, _, _)| *name == normalized)
            .map(|&(_, kind, constructor)| SimpleFactory {
                selector: normalized.clone(),
                kind,
                constructor,
            })
            .ok_or_else(|| FactoryError::UnknownSelector {
                selector: selector.to_string(),
                expected: expected_list(Self::selectors()),
            })
    }

    /// The closed set of selectors `resolve` accepts.
    pub fn selectors() -> impl Iterator<Item = &'static str> {
        VARIANTS.iter().map(|(name, _, _)| *name)
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }
}

impl DocumentFactory for SimpleFactory {
    fn create_document(&self) -> Box<dyn Document> {
        (self.constructor)()
    }
}

/// Parses a variant selector without binding a constructor.
pub(crate) fn parse_kind(selector: &str) -> Result<DocumentKind, FactoryError> {
    SimpleFactory::resolve(selector).map(|factory| factory.kind)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creational::document::tests::ScriptedDocument;
    use crate::creational::document::Stage;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_every_selector() {
        for (selector, kind) in [
            ("word", DocumentKind::Word),
            ("excel", DocumentKind::Spreadsheet),
            ("pdf", DocumentKind::Pdf),
        ] {
            let factory = SimpleFactory::resolve(selector).unwrap();
            assert_eq!(factory.kind(), kind);
            assert_eq!(factory.selector(), selector);

            let report = factory.new_document().unwrap();
            assert_eq!(report.kind, kind);
            assert_eq!(report.stages, vec![Stage::Open, Stage::Save, Stage::Close]);
        }
    }

    #[test]
    fn test_resolve_normalizes() {
        let factory = SimpleFactory::resolve("  EXCEL \n").unwrap();
        assert_eq!(factory.kind(), DocumentKind::Spreadsheet);
        assert_eq!(factory.selector(), "excel");
    }

    #[test]
    fn test_unknown_selector() {
        let err = SimpleFactory::resolve("powerpoint").unwrap_err();
        assert_eq!(
            err,
            FactoryError::UnknownSelector {
                selector: "powerpoint".to_string(),
                expected: "word, excel, pdf".to_string(),
            }
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_empty_selector_is_unknown() {
        assert!(matches!(
            SimpleFactory::resolve("   "),
            Err(FactoryError::UnknownSelector { .. })
        ));
    }

    struct FailingFactory;

    impl DocumentFactory for FailingFactory {
        fn create_document(&self) -> Box<dyn Document> {
            Box::new(ScriptedDocument::new(Some(Stage::Open)))
        }
    }

    #[test]
    fn test_template_propagates_failure() {
        let err = FailingFactory.new_document().unwrap_err();
        assert_eq!(err.stage, Stage::Open);
    }

    proptest! {
        #[test]
        fn prop_unregistered_strings_are_rejected(s in "\\PC*") {
            let normalized = s.trim().to_lowercase();
            prop_assume!(!SimpleFactory::selectors().any(|name| name == normalized));
            let is_unknown = matches!(
                SimpleFactory::resolve(&s),
                Err(FactoryError::UnknownSelector { .. })
            );
            prop_assert!(is_unknown);
        }

        #[test]
        fn prop_padding_and_case_are_ignored(
            index in 0usize..3,
            upper in proptest::collection::vec(any::<bool>(), 5),
            left in "[ \t]{0,3}",
            right in "[ \t]{0,3}",
        ) {
            let name = SimpleFactory::selectors().nth(index).unwrap();
            let mixed: String = name
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            let factory = SimpleFactory::resolve(&format!("{left}{mixed}{right}")).unwrap();
            prop_assert_eq!(factory.selector(), name);
        }
    }
}

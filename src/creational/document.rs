// Product side of the factories: the document capability and its variants.

use std::fmt;

use crate::error::DocumentError;

// ============================================================================
// Document kinds and lifecycle stages
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Word,
    Spreadsheet,
    Pdf,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Word, DocumentKind::Spreadsheet, DocumentKind::Pdf];

    /// The selector a caller types to ask for this kind.
    pub fn selector(self) -> &'static str {
        match self {
            DocumentKind::Word => "word",
            DocumentKind::Spreadsheet => "excel",
            DocumentKind::Pdf => "pdf",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Word => "Word",
            DocumentKind::Spreadsheet => "Excel",
            DocumentKind::Pdf => "PDF",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Open,
    Save,
    Close,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Stage::Open => "open",
            Stage::Save => "save",
            Stage::Close => "close",
        };
        f.write_str(verb)
    }
}

// ============================================================================
// Document capability and lifecycle
// ============================================================================

/// Something that can be opened, saved and closed.
pub trait Document {
    fn kind(&self) -> DocumentKind;
    fn open(&self) -> Result<(), DocumentError>;
    fn save(&self) -> Result<(), DocumentError>;
    fn close(&self) -> Result<(), DocumentError>;
}

/// Outcome of one open -> save -> close run.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleReport {
    pub kind: DocumentKind,
    pub stages: Vec<Stage>,
}

/// Runs open, save and close in that order.
///
/// Stops at the first failing stage and returns its error as is; stages
/// that already ran are not undone.
pub fn run_lifecycle(document: &dyn Document) -> Result<LifecycleReport, DocumentError> {
    let mut report = LifecycleReport {
        kind: document.kind(),
        stages: Vec::with_capacity(3),
    };

    document.open()?;
    report.stages.push(Stage::Open);
    document.save()?;
    report.stages.push(Stage::Save);
    document.close()?;
    report.stages.push(Stage::Close);

    Ok(report)
}

fn announce(kind: DocumentKind, stage: Stage) -> Result<(), DocumentError> {
    let action = match stage {
        Stage::Open => "Opening",
        Stage::Save => "Saving",
        Stage::Close => "Closing",
    };
    log::info!("{action} {kind} document...");
    Ok(())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WordDocument;

impl Document for WordDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Word
    }
    fn open(&self) -> Result<(), DocumentError> {
        announce(self.kind(), Stage::Open)
    }
    fn save(&self) -> Result<(), DocumentError> {
        announce(self.kind(), Stage::Save)
    }
    fn close(&self) -> Result<(), DocumentError> {
        announce(self.kind(), Stage::Close)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SpreadsheetDocument;

impl Document for SpreadsheetDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Spreadsheet
    }
    fn open(&self) -> Result<(), DocumentError> {
        announce(self.kind(), Stage::Open)
    }
    fn save(&self) -> Result<(), DocumentError> {
        announce(self.kind(), Stage::Save)
    }
    fn close(&self) -> Result<(), DocumentError> {
        announce(self.kind(), Stage::Close)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfDocument;

impl Document for PdfDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }
    fn open(&self) -> Result<(), DocumentError> {
        announce(self.kind(), Stage::Open)
    }
    fn save(&self) -> Result<(), DocumentError> {
        announce(self.kind(), Stage::Save)
    }
    fn close(&self) -> Result<(), DocumentError> {
        announce(self.kind(), Stage::Close)
    }
}

/// Constructor shape shared by the factory lookup tables.
pub type Constructor = fn() -> Box<dyn Document>;

pub fn new_word() -> Box<dyn Document> {
    Box::new(WordDocument)
}

pub fn new_spreadsheet() -> Box<dyn Document> {
    Box::new(SpreadsheetDocument)
}

pub fn new_pdf() -> Box<dyn Document> {
    Box::new(PdfDocument)
}

// ============================================================================
// Tests
// ============================================================================

//! External collaborator contracts
//!
//! The core consumes already-extracted, already-cleaned text. The services
//! upstream and downstream of it (document text extraction, translation) are
//! modeled as traits so callers can plug in real backends; default
//! implementations keep the crate self-contained.

use std::path::Path;

use log::warn;

use crate::error::Result;

/// Extracts raw text from a source document (e.g. a PDF).
///
/// Extraction failures are fatal to the enclosing request: implementations
/// return [`crate::error::Error::ExtractionFailed`] and the caller reports
/// it as a distinct error condition without retrying.
pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Reads a plain-text file as-is. The trivial extractor used in tests and
/// for pre-extracted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Translates text into a target language.
///
/// # Contract
///
/// Best-effort only: on any failure (network error, unsupported language,
/// timeout) implementations return the input unchanged rather than erroring.
pub trait Translate {
    fn translate(&self, text: &str, target_lang: &str) -> String;
}

/// Identity translation: the default when no translation backend is wired
/// up, and the fallback behavior every backend degrades to.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translate for IdentityTranslator {
    fn translate(&self, text: &str, target_lang: &str) -> String {
        if target_lang != "en" {
            warn!("no translation backend configured; returning text unchanged");
        }
        text.to_string()
    }
}

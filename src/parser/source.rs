//! Document source abstraction.
//!
//! Provides a trait-based interface for the PDF-reading collaborator,
//! isolating the text-content producer from the layout analysis logic.
//! The item shape matches what a pdf.js-style `textContent` reader emits,
//! so a serialized dump of its items round-trips into [`MemorySource`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single text-content item as produced by the reading collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceItem {
    /// The text run.
    #[serde(rename = "str")]
    pub text: String,
    /// 2D transform; index 4 is the X translation, index 5 the Y.
    pub transform: [f32; 6],
    /// Font resource name (e.g. "Helvetica-Bold").
    #[serde(rename = "fontName", default)]
    pub font_name: String,
    /// Explicit bold flag, when the reader provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
}

impl SourceItem {
    /// Create an item positioned at `(x, y)`.
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            transform: [1.0, 0.0, 0.0, 1.0, x, y],
            font_name: font_name.into(),
            bold: None,
        }
    }

    /// Set the explicit bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }
}

/// Abstract interface for page/text-content access.
///
/// This is the minimum contract required of a PDF-reading collaborator:
/// pages exposing a list of positioned text items. Implementations report
/// collaborator failures through [`Error::Source`].
pub trait DocumentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text-content items for a page (0-indexed), in emission order.
    fn page_items(&self, page: usize) -> Result<Vec<SourceItem>>;
}

/// In-memory [`DocumentSource`] over pre-collected items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySource {
    pages: Vec<Vec<SourceItem>>,
}

impl MemorySource {
    /// Create a source from per-page item lists.
    pub fn new(pages: Vec<Vec<SourceItem>>) -> Self {
        Self { pages }
    }

    /// Create a single-page source.
    pub fn single_page(items: Vec<SourceItem>) -> Self {
        Self { pages: vec![items] }
    }

    /// Deserialize a JSON dump of per-page items (a `[[item, ...], ...]`
    /// array as produced by the reading collaborator).
    pub fn from_json(json: &str) -> Result<Self> {
        let pages: Vec<Vec<SourceItem>> = serde_json::from_str(json)
            .map_err(|e| Error::Source(format!("invalid items dump: {}", e)))?;
        Ok(Self { pages })
    }
}

impl DocumentSource for MemorySource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_items(&self, page: usize) -> Result<Vec<SourceItem>> {
        self.pages
            .get(page)
            .cloned()
            .ok_or_else(|| Error::Source(format!("page {} out of range", page)))
    }
}

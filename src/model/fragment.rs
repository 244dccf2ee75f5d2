//! Positioned text fragments.

use serde::{Deserialize, Serialize};

/// A single positioned run of text as emitted by the text-content reader,
/// before any layout reconstruction.
///
/// `x1`/`x2` are the horizontal extents on the page; `y` is the baseline
/// position (larger = higher on the page, PDF coordinate convention).
/// Fragments are produced once by the extractor and never mutated except
/// when adjacent fragments are merged during line reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// The text content.
    pub text: String,
    /// Left edge.
    pub x1: f32,
    /// Right edge (approximated from character count when the source
    /// provides no true metrics).
    pub x2: f32,
    /// Baseline Y position.
    pub y: f32,
    /// Page number (1-indexed).
    pub page: u32,
    /// Whether the fragment was set in a bold face.
    pub bold: bool,
    /// Whether the text is entirely uppercase.
    pub all_caps: bool,
}

impl TextFragment {
    /// Create a fragment, computing the all-caps flag from the text.
    pub fn new(text: impl Into<String>, x1: f32, x2: f32, y: f32, page: u32, bold: bool) -> Self {
        let text = text.into();
        let all_caps = text_is_all_caps(&text);
        Self {
            text,
            x1,
            x2,
            y,
            page,
            bold,
            all_caps,
        }
    }

    /// Width of the fragment on the page.
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Number of characters, used for width averaging.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Whether a text uppercases to itself and is not trivially caseless.
pub fn text_is_all_caps(text: &str) -> bool {
    let has_letters = text.chars().any(|c| c.is_alphabetic());
    has_letters && text.chars().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase())
}

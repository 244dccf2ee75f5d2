//! Stage 1: fragment extraction.
//!
//! Turns source page items into an ordered sequence of positioned
//! fragments. Glyph widths are approximated from a per-character average
//! keyed by the bold/monospace flags, not true font metrics; downstream
//! logic tolerates the resulting width error.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::model::TextFragment;

use super::source::{DocumentSource, SourceItem};

/// Average glyph width for regular faces, in page units.
pub(crate) const DEFAULT_CHAR_WIDTH: f32 = 5.5;
/// Bold faces run wider.
const BOLD_CHAR_WIDTH: f32 = 6.5;
/// Monospace faces have a fixed advance.
const MONO_CHAR_WIDTH: f32 = 6.0;

/// Extract every positioned fragment from the source, ordered by
/// (page ascending, top of page first, x ascending).
///
/// A page with no extractable text contributes zero fragments; a document
/// with no text at all is an [`Error::EmptyDocument`].
pub fn extract_fragments<S: DocumentSource + ?Sized>(source: &S) -> Result<Vec<TextFragment>> {
    let mut fragments = Vec::new();

    for index in 0..source.page_count() {
        let items = source.page_items(index)?;
        let page = index as u32 + 1;
        let before = fragments.len();
        fragments.extend(items.into_iter().filter_map(|item| fragment_from_item(item, page)));
        if fragments.len() == before {
            log::debug!("page {}: no extractable text", page);
        }
    }

    if fragments.is_empty() {
        return Err(Error::EmptyDocument);
    }

    fragments.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then_with(|| b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal))
            .then_with(|| a.x1.partial_cmp(&b.x1).unwrap_or(Ordering::Equal))
    });

    log::debug!("extracted {} fragments", fragments.len());
    Ok(fragments)
}

/// Build a fragment from one item; empty-string items are dropped.
fn fragment_from_item(item: SourceItem, page: u32) -> Option<TextFragment> {
    let text: String = item.text.nfc().collect();
    if text.trim().is_empty() {
        return None;
    }

    let bold = item.bold.unwrap_or_else(|| font_name_is_bold(&item.font_name));
    let char_width = if bold {
        BOLD_CHAR_WIDTH
    } else if font_name_is_mono(&item.font_name) {
        MONO_CHAR_WIDTH
    } else {
        DEFAULT_CHAR_WIDTH
    };

    let x1 = item.transform[4];
    let y = item.transform[5];
    let x2 = x1 + text.chars().count() as f32 * char_width;

    Some(TextFragment::new(text, x1, x2, y, page, bold))
}

fn font_name_is_bold(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("bold") || lower.contains("black") || lower.contains("heavy")
}

fn font_name_is_mono(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("mono") || lower.contains("courier") || lower.contains("consol")
}

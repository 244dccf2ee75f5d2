//! Stage 2: line reconstruction.
//!
//! Walks fragments in extraction order and merges runs that share a
//! baseline. The horizontal merge threshold derives from the average
//! character width of the document's regular text, so sub-token splits
//! fuse back together while genuine word gaps stay separate fragments.

use crate::model::{text_is_all_caps, Line, TextFragment};

use super::extractor::DEFAULT_CHAR_WIDTH;
use super::options::ParseOptions;

/// Merge ordered fragments into ordered visual lines.
pub fn reconstruct_lines(fragments: Vec<TextFragment>, options: &ParseOptions) -> Vec<Line> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let merge_threshold = options.merge_factor * average_char_width(&fragments);

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<TextFragment> = Vec::new();

    for frag in fragments {
        let Some(anchor) = current.first() else {
            current.push(frag);
            continue;
        };

        let new_line =
            frag.page != anchor.page || (frag.y - anchor.y).abs() > options.line_tolerance;

        if new_line {
            lines.push(Line::from_fragments(std::mem::take(&mut current)));
            current.push(frag);
            continue;
        }

        let prev = current.last_mut().expect("line has at least the anchor");
        let gap = frag.x1 - prev.x2;
        if gap <= merge_threshold {
            // One continuous run split by the reader: concatenate and
            // extend the extent.
            prev.text.push_str(&frag.text);
            prev.x2 = prev.x2.max(frag.x2);
            prev.bold = prev.bold && frag.bold;
            prev.all_caps = text_is_all_caps(&prev.text);
        } else {
            current.push(frag);
        }
    }

    if !current.is_empty() {
        lines.push(Line::from_fragments(current));
    }

    log::debug!("reconstructed {} lines", lines.len());
    lines
}

/// Average character width over non-bold fragments with non-empty text.
fn average_char_width(fragments: &[TextFragment]) -> f32 {
    let mut width = 0.0f32;
    let mut chars = 0usize;
    for frag in fragments.iter().filter(|f| !f.bold && !f.text.is_empty()) {
        width += frag.width();
        chars += frag.char_count();
    }
    if chars == 0 {
        DEFAULT_CHAR_WIDTH
    } else {
        width / chars as f32
    }
}

//! Visual text lines reconstructed from fragments.

use serde::{Deserialize, Serialize};

use super::fragment::{text_is_all_caps, TextFragment};

/// Glyphs that mark a line as itemized description content.
const BULLET_GLYPHS: &[char] = &['\u{2022}', '-', '\u{2013}', '\u{25AA}', '\u{25CF}', '\u{25E6}', '\u{2023}'];

/// One or more fragments merged into a single visual text row.
///
/// Invariant: `fragments` are sorted ascending by `x1`, and `y` equals the
/// first fragment's `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Whole-line text, fragment texts joined with single spaces.
    pub text: String,
    /// The fragments in this line, sorted by `x1`.
    pub fragments: Vec<TextFragment>,
    /// True only if every fragment in the line is bold.
    pub bold: bool,
    /// Whether the joined text is entirely uppercase.
    pub all_caps: bool,
    /// Whether the trimmed text starts with a bullet glyph or hyphen.
    pub bullet: bool,
    /// Baseline Y position (first fragment's).
    pub y: f32,
    /// Page number (1-indexed).
    pub page: u32,
}

impl Line {
    /// Organize fragments into a finished line: sort by `x1`, join the
    /// texts, and derive the line-level flags.
    ///
    /// A line of exactly one fragment is valid and common (a name, a
    /// section header).
    pub fn from_fragments(mut fragments: Vec<TextFragment>) -> Self {
        fragments.sort_by(|a, b| a.x1.partial_cmp(&b.x1).unwrap_or(std::cmp::Ordering::Equal));

        let text = fragments
            .iter()
            .map(|f| f.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let bold = !fragments.is_empty() && fragments.iter().all(|f| f.bold);
        let all_caps = text_is_all_caps(&text);
        let bullet = text
            .trim_start()
            .chars()
            .next()
            .map(|c| BULLET_GLYPHS.contains(&c))
            .unwrap_or(false);
        let y = fragments.first().map(|f| f.y).unwrap_or(0.0);
        let page = fragments.first().map(|f| f.page).unwrap_or(1);

        Self {
            text,
            fragments,
            bold,
            all_caps,
            bullet,
            y,
            page,
        }
    }

    /// Number of whitespace-separated words in the line.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Whether the line carries no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Strip a leading bullet glyph (and surrounding whitespace) from a line's
/// text, for use when a bulleted line becomes a description item.
pub fn strip_bullet(text: &str) -> &str {
    let trimmed = text.trim_start();
    match trimmed.chars().next() {
        Some(c) if BULLET_GLYPHS.contains(&c) => trimmed[c.len_utf8()..].trim_start(),
        _ => trimmed,
    }
}

//! # uncv
//!
//! Heuristic resume structure extraction for Rust.
//!
//! This library converts raw PDF text-layout primitives (positioned text
//! fragments) into a structured resume document (profile, education,
//! experience, skills, projects) with a deterministic, rule-based
//! pipeline. No model calls, no network.
//!
//! ## Quick Start
//!
//! ```
//! use uncv::{format, parse_text};
//!
//! fn main() -> uncv::Result<()> {
//!     let text = "Jane Doe\njane@example.com\n\nSKILLS\nTechnical: Rust, Go\n";
//!     let doc = parse_text(text)?;
//!
//!     let resume = format::format_resume(&doc);
//!     println!("{}", format::to_json(&resume, format::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Fragment extraction**: source items to positioned fragments
//! - **Line reconstruction**: fragments to visual lines
//! - **Section segmentation**: lines to named sections and entries
//! - **Field extraction**: sections to typed records
//! - **Formatting**: internal document to the external-facing shape
//!
//! Each stage consumes only the previous stage's output. Parsing is
//! synchronous and single-threaded per resume; independent resumes can be
//! parsed concurrently (see [`parse_batch`]).

pub mod error;
pub mod extract;
pub mod format;
pub mod model;
pub mod parser;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{extract_resume, DateMatcher};
pub use format::{format_resume, to_json, FormattedResume, JsonFormat};
pub use model::{
    AchievementEntry, EducationEntry, ExperienceEntry, Line, Profile, ProjectEntry,
    ResumeDocument, Section, SectionContent, SectionMap, SkillSet, Subsection, TextFragment,
};
pub use parser::{
    extract_fragments, reconstruct_lines, segment_lines, DocumentSource, MemorySource,
    ParseOptions, SourceItem,
};

use rayon::prelude::*;
use std::path::Path;

/// Glyph width used for the synthetic geometry of the text-entry path.
const TEXT_CHAR_WIDTH: f32 = 5.5;
/// Line leading used for the synthetic geometry of the text-entry path.
const TEXT_LINE_LEADING: f32 = 12.0;
/// Top-of-page baseline for the text-entry path.
const TEXT_TOP_Y: f32 = 800.0;

/// Parse a resume from a document source.
///
/// # Example
///
/// ```
/// use uncv::{parse_source, MemorySource, SourceItem};
///
/// let source = MemorySource::single_page(vec![
///     SourceItem::new("Jane Doe", 72.0, 720.0, "Times-Bold"),
///     SourceItem::new("jane@example.com", 72.0, 704.0, "Times"),
/// ]);
/// let doc = parse_source(&source).unwrap();
/// assert_eq!(doc.profile.email, "jane@example.com");
/// ```
pub fn parse_source<S: DocumentSource>(source: &S) -> Result<ResumeDocument> {
    parse_source_with_options(source, ParseOptions::default())
}

/// Parse a resume from a document source with custom options.
pub fn parse_source_with_options<S: DocumentSource>(
    source: &S,
    options: ParseOptions,
) -> Result<ResumeDocument> {
    let sections = segment_source(source, &options)?;
    Ok(extract_resume(&sections))
}

/// Run the layout stages only (extraction, line reconstruction,
/// segmentation), returning the segmented sections. Useful for inspecting
/// what the field extractors will see.
pub fn segment_source<S: DocumentSource>(
    source: &S,
    options: &ParseOptions,
) -> Result<SectionMap> {
    let fragments = extract_fragments(source)?;

    if options.min_chars > 0 {
        let len: usize = fragments.iter().map(|f| f.char_count()).sum();
        if len < options.min_chars {
            return Err(Error::TooShort {
                len,
                min: options.min_chars,
            });
        }
    }

    let lines = reconstruct_lines(fragments, options);
    Ok(segment_lines(lines, options))
}

/// Segment already-extracted text without running the field extractors.
pub fn segment_text(text: &str, options: &ParseOptions) -> Result<SectionMap> {
    if options.min_chars > 0 {
        let len = text.chars().count();
        if len < options.min_chars {
            return Err(Error::TooShort {
                len,
                min: options.min_chars,
            });
        }
    }

    let lines = lines_from_text(text);
    if lines.is_empty() {
        return Err(Error::EmptyDocument);
    }
    Ok(segment_lines(lines, options))
}

/// Parse a resume from already-extracted text.
///
/// The lenient text-entry path: the input is treated as extracted text and
/// Stage 1 is skipped. Blank input lines become vertical gaps so the
/// heading and entry-boundary heuristics behave as they do for layout
/// input.
pub fn parse_text(text: &str) -> Result<ResumeDocument> {
    parse_text_with_options(text, ParseOptions::default())
}

/// Parse already-extracted text with custom options.
pub fn parse_text_with_options(text: &str, options: ParseOptions) -> Result<ResumeDocument> {
    let sections = segment_text(text, &options)?;
    Ok(extract_resume(&sections))
}

/// Parse a text file (already-extracted resume text).
pub fn parse_text_file<P: AsRef<Path>>(path: P) -> Result<ResumeDocument> {
    parse_text_file_with_options(path, ParseOptions::default())
}

/// Parse a text file with custom options.
pub fn parse_text_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ResumeDocument> {
    let text = std::fs::read_to_string(path)?;
    parse_text_with_options(&text, options)
}

/// Parse a text file asynchronously.
///
/// The file read is the one awaited I/O step; the pipeline itself runs
/// synchronously afterwards.
#[cfg(feature = "async")]
pub async fn parse_text_file_async<P: AsRef<Path>>(path: P) -> Result<ResumeDocument> {
    let text = tokio::fs::read_to_string(path).await?;
    parse_text(&text)
}

/// Parse independent sources in parallel.
///
/// Each invocation owns its fragment/line/section data; there is no shared
/// mutable state, so documents scale horizontally.
pub fn parse_batch<S: DocumentSource + Sync>(
    sources: &[S],
    options: &ParseOptions,
) -> Vec<Result<ResumeDocument>> {
    sources
        .par_iter()
        .map(|source| parse_source_with_options(source, options.clone()))
        .collect()
}

/// Synthesize single-fragment lines from raw text. Blank lines still
/// consume vertical space, which is what turns them into gap separators
/// downstream.
fn lines_from_text(text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let y = TEXT_TOP_Y - index as f32 * TEXT_LINE_LEADING;
        let x2 = trimmed.chars().count() as f32 * TEXT_CHAR_WIDTH;
        lines.push(Line::from_fragments(vec![TextFragment::new(
            trimmed, 0.0, x2, y, 1, false,
        )]));
    }
    lines
}

/// Builder for parsing and formatting resumes.
///
/// # Example
///
/// ```
/// use uncv::{JsonFormat, Uncv};
///
/// let json = Uncv::new()
///     .with_min_chars(16)
///     .parse_text("Jane Doe\njane@example.com\n\nSKILLS\nTechnical: Rust\n")?
///     .to_json(JsonFormat::Compact)?;
/// # Ok::<(), uncv::Error>(())
/// ```
pub struct Uncv {
    options: ParseOptions,
}

impl Uncv {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    /// Set the line grouping tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.options = self.options.with_line_tolerance(tolerance);
        self
    }

    /// Set the blank-line gap threshold.
    pub fn with_gap_threshold(mut self, gap: f32) -> Self {
        self.options = self.options.with_gap_threshold(gap);
        self
    }

    /// Set the horizontal merge factor.
    pub fn with_merge_factor(mut self, factor: f32) -> Self {
        self.options = self.options.with_merge_factor(factor);
        self
    }

    /// Enable the minimum-length gate.
    pub fn with_min_chars(mut self, min: usize) -> Self {
        self.options = self.options.with_min_chars(min);
        self
    }

    /// Parse from a document source.
    pub fn parse_source<S: DocumentSource>(self, source: &S) -> Result<UncvResult> {
        let document = parse_source_with_options(source, self.options)?;
        Ok(UncvResult { document })
    }

    /// Parse from already-extracted text.
    pub fn parse_text(self, text: &str) -> Result<UncvResult> {
        let document = parse_text_with_options(text, self.options)?;
        Ok(UncvResult { document })
    }

    /// Parse a text file.
    pub fn parse_text_file<P: AsRef<Path>>(self, path: P) -> Result<UncvResult> {
        let document = parse_text_file_with_options(path, self.options)?;
        Ok(UncvResult { document })
    }
}

impl Default for Uncv {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a resume.
pub struct UncvResult {
    /// The structured resume document
    pub document: ResumeDocument,
}

impl UncvResult {
    /// Format into the external-facing shape.
    pub fn format(&self) -> FormattedResume {
        format_resume(&self.document)
    }

    /// Format and serialize to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(&self.format(), format)
    }

    /// Get the structured document.
    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }
}

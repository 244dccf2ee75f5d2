//! Named sections and the section map.

use serde::{Deserialize, Serialize};

use super::line::Line;

/// One entry (one job, one degree, one project) within a multi-entry
/// section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    /// Lines belonging to this entry, in reading order.
    pub lines: Vec<Line>,
}

impl Subsection {
    /// First line of the entry, if any.
    pub fn first(&self) -> Option<&Line> {
        self.lines.first()
    }

    /// Whether the entry carries no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Section body: either a flat run of lines, or per-entry subsections for
/// section types that support multi-entry grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionContent {
    /// Ordered lines with no entry structure.
    Flat(Vec<Line>),
    /// Ordered per-entry subsections.
    Entries(Vec<Subsection>),
}

/// A named, contiguous run of lines corresponding to a resume heading.
///
/// Section names are case-normalized and punctuation-stripped; the heading
/// line itself is consumed as the label and is not part of the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Normalized section name (e.g. "WORK EXPERIENCE").
    pub name: String,
    /// Section body.
    pub content: SectionContent,
}

impl Section {
    /// Iterate over every line in the section, regardless of entry
    /// structure.
    pub fn lines(&self) -> Box<dyn Iterator<Item = &Line> + '_> {
        match &self.content {
            SectionContent::Flat(lines) => Box::new(lines.iter()),
            SectionContent::Entries(subs) => Box::new(subs.iter().flat_map(|s| s.lines.iter())),
        }
    }

    /// Total number of lines in the section.
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Number of entries, when the section was split into subsections.
    pub fn entry_count(&self) -> Option<usize> {
        match &self.content {
            SectionContent::Flat(_) => None,
            SectionContent::Entries(subs) => Some(subs.len()),
        }
    }

    /// Subsections, when present.
    pub fn entries(&self) -> Option<&[Subsection]> {
        match &self.content {
            SectionContent::Flat(_) => None,
            SectionContent::Entries(subs) => Some(subs),
        }
    }
}

/// Segmented document: sections in reading order with keyword lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section, merging content into an existing section of the
    /// same name (a heading repeated across pages stays one section).
    pub fn push(&mut self, section: Section) {
        if let Some(existing) = self.sections.iter_mut().find(|s| s.name == section.name) {
            match (&mut existing.content, section.content) {
                (SectionContent::Flat(dst), SectionContent::Flat(src)) => dst.extend(src),
                (SectionContent::Entries(dst), SectionContent::Entries(src)) => dst.extend(src),
                (dst, src) => *dst = src,
            }
        } else {
            self.sections.push(section);
        }
    }

    /// Look up a section by exact normalized name.
    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// First section whose name contains the given keyword.
    pub fn find(&self, keyword: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name.contains(keyword))
    }

    /// All sections whose names contain the given keyword.
    pub fn find_all<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Section> {
        self.sections.iter().filter(move |s| s.name.contains(keyword))
    }

    /// Sections in reading order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no sections were produced.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of content lines across all sections.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.line_count()).sum()
    }
}

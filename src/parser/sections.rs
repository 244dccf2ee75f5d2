//! Stage 3: section segmentation.
//!
//! Groups lines into named sections using heading heuristics, then splits
//! multi-entry sections into per-entry subsections. Segmentation is a fold
//! over the line sequence with an explicit accumulator; there is no
//! module-level state.

use crate::model::{Line, Section, SectionContent, SectionMap, Subsection};

use super::options::ParseOptions;

/// Name of the implicit header-area section holding everything before the
/// first detected heading.
pub const DEFAULT_SECTION: &str = "PROFILE";

/// Maximum word count for a keyword-matched heading line.
const HEADING_MAX_WORDS: usize = 4;

/// Fixed vocabulary of section heading keywords, matched against the
/// normalized line text.
const SECTION_KEYWORDS: &[&str] = &[
    "EDUCATION",
    "WORK EXPERIENCE",
    "EXPERIENCE",
    "EMPLOYMENT",
    "TECHNICAL SKILLS",
    "SKILLS",
    "PROFICIENCIES",
    "PROJECT EXPERIENCE",
    "PROJECTS",
    "CERTIFICATIONS",
    "ACHIEVEMENTS",
    "HONORS",
    "AWARDS",
    "VOLUNTEERING",
    "VOLUNTEER",
    "COMMUNITY SERVICE",
    "PUBLICATIONS",
    "RESEARCH",
    "LANGUAGES",
    "INTERESTS",
    "ACTIVITIES",
    "OBJECTIVE",
    "SUMMARY",
    "PROFILE",
    "ABOUT",
];

/// Section-name keywords whose sections are split into per-entry
/// subsections.
const SPLIT_KEYWORDS: &[&str] = &["EDUCATION", "EXPERIENCE", "EMPLOYMENT", "VOLUNTEER", "PROJECT"];

/// Group lines into a section map. Every content line lands in exactly one
/// section; heading lines are consumed as section labels.
pub fn segment_lines(lines: Vec<Line>, options: &ParseOptions) -> SectionMap {
    let mut map = SectionMap::new();
    let mut current_name = DEFAULT_SECTION.to_string();
    let mut current_lines: Vec<Line> = Vec::new();
    let mut prev_pos: Option<(u32, f32)> = None;

    for line in lines {
        let preceded_by_gap = match prev_pos {
            // Start of document counts as a separator, as does a page break.
            None => true,
            Some((page, y)) => page != line.page || (y - line.y) > options.gap_threshold,
        };
        prev_pos = Some((line.page, line.y));

        if let Some(name) = heading_name(&line, preceded_by_gap) {
            flush_section(&mut map, &current_name, std::mem::take(&mut current_lines), options);
            log::debug!("section heading: {}", name);
            current_name = name;
        } else {
            current_lines.push(line);
        }
    }

    flush_section(&mut map, &current_name, current_lines, options);
    map
}

/// Normalize heading text: uppercased, punctuation stripped, whitespace
/// collapsed.
pub fn normalize_heading(text: &str) -> String {
    let cleaned: String = text
        .to_uppercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classify a line as a section heading, returning the cleaned name.
///
/// A line is a heading when it is bold, all-caps and a single fragment, or
/// when its normalized text contains a vocabulary keyword, it is short, and
/// it is bold or separated from the previous line by a blank-line gap.
fn heading_name(line: &Line, preceded_by_gap: bool) -> Option<String> {
    if line.bold && line.all_caps && line.fragments.len() == 1 {
        let name = normalize_heading(&line.text);
        if !name.is_empty() {
            return Some(name);
        }
    }

    let normalized = normalize_heading(&line.text);
    if normalized.is_empty() {
        return None;
    }
    let has_keyword = SECTION_KEYWORDS.iter().any(|kw| normalized.contains(kw));
    if has_keyword && line.word_count() <= HEADING_MAX_WORDS && (line.bold || preceded_by_gap) {
        return Some(normalized);
    }

    None
}

/// Close the current section and add it to the map. Empty sections (a
/// heading immediately followed by another heading) are dropped.
fn flush_section(map: &mut SectionMap, name: &str, lines: Vec<Line>, options: &ParseOptions) {
    if lines.is_empty() {
        return;
    }

    let content = if SPLIT_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        SectionContent::Entries(split_subsections(lines, options))
    } else {
        SectionContent::Flat(lines)
    };

    map.push(Section {
        name: name.to_string(),
        content,
    });
}

/// Split a multi-entry section into subsections. A subsection closes when
/// the vertical gap to the next line exceeds the blank-line threshold, or
/// when the next line is bold while the current is not and the next is not
/// a bullet. With no detected boundaries the whole section is one
/// subsection; the last subsection always closes at end of section.
fn split_subsections(lines: Vec<Line>, options: &ParseOptions) -> Vec<Subsection> {
    let mut subsections: Vec<Subsection> = Vec::new();
    let mut current: Vec<Line> = Vec::new();

    for line in lines {
        if let Some(prev) = current.last() {
            let gap_break =
                line.page != prev.page || (prev.y - line.y) > options.gap_threshold;
            let title_break = line.bold && !prev.bold && !line.bullet;
            if gap_break || title_break {
                subsections.push(Subsection {
                    lines: std::mem::take(&mut current),
                });
            }
        }
        current.push(line);
    }

    if !current.is_empty() {
        subsections.push(Subsection { lines: current });
    }

    subsections
}

//! Entry extraction for multi-entry sections.
//!
//! Each subsection maps to exactly one entry. The first line supplies the
//! primary name (with any embedded date split off); subsequent lines are
//! classified by ordered checks: bulleted lines are always description, a
//! date populates the date field if unset, and the second non-bulleted
//! line becomes the title (experience) or technologies (projects) while no
//! bullets have been seen. Volunteer sections reuse the experience
//! extractor unchanged.

use regex::Regex;

use crate::model::{strip_bullet, EducationEntry, ExperienceEntry, Line, ProjectEntry, Section, SectionContent};

use super::dates::DateMatcher;

/// Extract education entries from a section.
pub fn extract_education(section: &Section, dates: &DateMatcher) -> Vec<EducationEntry> {
    let degree = Regex::new(
        r"(?ix)\b(?:bachelor|master|doctor(?:ate)?|ph\.?\s?d|b\.?s\.?c?|m\.?s\.?c?|b\.?a\.?|
           m\.?a\.?|b\.?tech|m\.?tech|b\.?e\.?|m\.?eng|mba|associate|diploma|minor)\b",
    )
    .unwrap();
    let gpa = Regex::new(r"(?i)\bgpa\b[:\s]*([0-9](?:\.[0-9]{1,2})?)").unwrap();

    entry_views(section)
        .into_iter()
        .filter_map(|lines| education_entry(lines, dates, &degree, &gpa))
        .collect()
}

fn education_entry(
    lines: &[Line],
    dates: &DateMatcher,
    degree: &Regex,
    gpa: &Regex,
) -> Option<EducationEntry> {
    let (first, rest) = lines.split_first()?;
    let (name, date) = dates.split_name_date(&first.text);

    let mut entry = EducationEntry {
        name,
        date,
        ..Default::default()
    };

    for line in rest {
        let text = line.text.trim();
        if entry.degree.is_empty() && degree.is_match(text) {
            entry.degree = text.to_string();
        }
        if entry.gpa.is_empty() {
            if let Some(caps) = gpa.captures(text) {
                entry.gpa = caps[1].to_string();
            }
        }
        if entry.date.is_empty() {
            if let Some(span) = dates.find(text) {
                entry.date = text[span.start..span.end].to_string();
            }
        }
    }

    Some(entry)
}

/// Extract experience entries from a section. Also used for volunteer
/// sections.
pub fn extract_experience(section: &Section, dates: &DateMatcher) -> Vec<ExperienceEntry> {
    entry_views(section)
        .into_iter()
        .filter_map(|lines| experience_entry(lines, dates))
        .collect()
}

fn experience_entry(lines: &[Line], dates: &DateMatcher) -> Option<ExperienceEntry> {
    let (first, rest) = lines.split_first()?;
    let (company, date) = dates.split_name_date(&first.text);

    let mut entry = ExperienceEntry {
        company,
        date,
        ..Default::default()
    };
    let mut seen_bullets = false;

    for line in rest {
        if line.bullet {
            entry.description.push(strip_bullet(&line.text).to_string());
            seen_bullets = true;
            continue;
        }

        let text = line.text.trim();
        if dates.is_date_only(text) {
            if entry.date.is_empty() {
                entry.date = text.to_string();
            }
            continue;
        }
        if entry.title.is_empty() && !seen_bullets {
            let (title, title_date) = dates.split_name_date(text);
            if entry.date.is_empty() && !title_date.is_empty() {
                entry.date = title_date;
            }
            entry.title = title;
            continue;
        }
        if entry.date.is_empty() {
            if let Some(span) = dates.find(text) {
                entry.date = text[span.start..span.end].to_string();
                continue;
            }
        }
        // Unbulleted trailing prose still belongs to the entry.
        entry.description.push(text.to_string());
    }

    Some(entry)
}

/// Extract project entries from a section.
pub fn extract_projects(section: &Section, dates: &DateMatcher) -> Vec<ProjectEntry> {
    let tech_label =
        Regex::new(r"(?i)^(?:technologies|tech(?:nology)?\s*stack|tools|built\s+with)\s*[:\-]?\s*")
            .unwrap();

    entry_views(section)
        .into_iter()
        .filter_map(|lines| project_entry(lines, dates, &tech_label))
        .collect()
}

fn project_entry(lines: &[Line], dates: &DateMatcher, tech_label: &Regex) -> Option<ProjectEntry> {
    let (first, rest) = lines.split_first()?;
    let (name, date) = dates.split_name_date(&first.text);

    let mut entry = ProjectEntry {
        name,
        date,
        ..Default::default()
    };
    let mut seen_bullets = false;

    for line in rest {
        if line.bullet {
            entry.description.push(strip_bullet(&line.text).to_string());
            seen_bullets = true;
            continue;
        }

        let text = line.text.trim();
        if dates.is_date_only(text) {
            if entry.date.is_empty() {
                entry.date = text.to_string();
            }
            continue;
        }
        if entry.technologies.is_empty() && !seen_bullets {
            entry.technologies = tech_label.replace(text, "").trim().to_string();
            continue;
        }
        if entry.date.is_empty() {
            if let Some(span) = dates.find(text) {
                entry.date = text[span.start..span.end].to_string();
                continue;
            }
        }
        entry.description.push(text.to_string());
    }

    Some(entry)
}

/// Per-entry line views. Sections of these kinds are segmented into
/// subsections; a flat section (custom segmentation, hand-built maps)
/// degrades to one entry spanning all lines.
fn entry_views(section: &Section) -> Vec<&[Line]> {
    match &section.content {
        SectionContent::Entries(subs) => subs
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.lines.as_slice())
            .collect(),
        SectionContent::Flat(lines) if lines.is_empty() => Vec::new(),
        SectionContent::Flat(lines) => vec![lines.as_slice()],
    }
}

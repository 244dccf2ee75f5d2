//! Stage 4: field extractors.
//!
//! One extractor per section type, all side-effect-free functions over the
//! section map. Every extractor degrades to empty output on empty input;
//! none of them can fail.

mod achievements;
mod dates;
mod entries;
mod profile;
mod skills;

pub use achievements::extract_achievements;
pub use dates::{DateMatcher, DateSpan};
pub use entries::{extract_education, extract_experience, extract_projects};
pub use profile::{extract_profile, ProfileScorer};
pub use skills::extract_skills;

use crate::model::{ResumeDocument, Section, SectionMap, SkillSet};
use crate::parser::DEFAULT_SECTION;

/// Build the structured resume from a segmented document.
pub fn extract_resume(sections: &SectionMap) -> ResumeDocument {
    let dates = DateMatcher::new();
    let mut doc = ResumeDocument::new();

    if let Some(section) = sections.get(DEFAULT_SECTION) {
        doc.profile = extract_profile(section);
    }

    if let Some(section) = first_match(sections, &["OBJECTIVE", "SUMMARY", "ABOUT"], &[]) {
        doc.objective = section
            .lines()
            .map(|l| l.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
    }

    for section in matches(sections, &["EDUCATION"], &[]) {
        doc.education.extend(extract_education(section, &dates));
    }

    for section in matches(
        sections,
        &["EXPERIENCE", "EMPLOYMENT", "WORK"],
        &["PROJECT", "VOLUNTEER"],
    ) {
        doc.experience.extend(extract_experience(section, &dates));
    }

    for section in matches(sections, &["SKILL", "PROFICIENC"], &[]) {
        merge_skills(&mut doc.skills, extract_skills(section));
    }

    for section in matches(sections, &["PROJECT"], &[]) {
        doc.projects.extend(extract_projects(section, &dates));
    }

    for section in matches(sections, &["VOLUNTEER", "COMMUNITY"], &[]) {
        doc.volunteer.extend(extract_experience(section, &dates));
    }

    for section in matches(sections, &["ACHIEVEMENT", "HONOR", "AWARD"], &[]) {
        doc.achievements.extend(extract_achievements(section, &dates));
    }

    log::debug!(
        "extracted resume: {} education, {} experience, {} projects",
        doc.education.len(),
        doc.experience.len(),
        doc.projects.len()
    );
    doc
}

/// Sections whose names contain any `include` keyword and none of the
/// `exclude` keywords, in reading order.
fn matches<'a>(
    sections: &'a SectionMap,
    include: &'a [&str],
    exclude: &'a [&str],
) -> impl Iterator<Item = &'a Section> {
    sections.iter().filter(move |s| {
        include.iter().any(|kw| s.name.contains(kw))
            && !exclude.iter().any(|kw| s.name.contains(kw))
    })
}

fn first_match<'a>(
    sections: &'a SectionMap,
    include: &'a [&str],
    exclude: &'a [&str],
) -> Option<&'a Section> {
    matches(sections, include, exclude).next()
}

fn merge_skills(into: &mut SkillSet, from: SkillSet) {
    into.technical.extend(from.technical);
    into.languages.extend(from.languages);
    into.soft.extend(from.soft);
    into.other.extend(from.other);
}

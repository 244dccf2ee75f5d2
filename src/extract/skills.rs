//! Skills extraction.
//!
//! Walks the skills section tracking a current category, switched by
//! keyword lines. A line with a colon contributes its label's category and
//! the comma/pipe-delimited list after it; a bare non-bold line is a list
//! under the current category. No de-duplication happens here.

use crate::model::{Line, Section, SkillSet};

/// Skill category buckets, in flatten order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Technical,
    Languages,
    Soft,
    Other,
}

/// Extract category-keyed skills from a section.
pub fn extract_skills(section: &Section) -> SkillSet {
    let mut set = SkillSet::default();
    // Unlabeled lists at the top of a skills section are overwhelmingly
    // technical on student resumes.
    let mut current = Category::Technical;

    for line in section.lines() {
        let text = line.text.trim();
        if text.is_empty() {
            continue;
        }

        if let Some((label, rest)) = text.split_once(':') {
            let category = keyword_category(label).unwrap_or(Category::Other);
            push_skills(&mut set, category, rest);
            current = category;
        } else if let Some(category) = category_marker(line) {
            current = category;
        } else if !line.bold {
            push_skills(&mut set, current, text);
        }
        // Bold lines without a colon or category keyword are decorative
        // subheaders; skip them.
    }

    set
}

/// Category for a label/marker text, when it names one.
fn keyword_category(label: &str) -> Option<Category> {
    let lower = label.to_lowercase();
    if lower.contains("language") {
        Some(Category::Languages)
    } else if lower.contains("soft") || lower.contains("interpersonal") {
        Some(Category::Soft)
    } else if lower.contains("tech")
        || lower.contains("programming")
        || lower.contains("tool")
        || lower.contains("framework")
        || lower.contains("software")
    {
        Some(Category::Technical)
    } else {
        None
    }
}

/// A short list-free line naming a category switches the current bucket.
fn category_marker(line: &Line) -> Option<Category> {
    let text = line.text.trim();
    if line.word_count() <= 3 && !text.contains(',') && !text.contains('|') {
        keyword_category(text)
    } else {
        None
    }
}

fn push_skills(set: &mut SkillSet, category: Category, list: &str) {
    let bucket = match category {
        Category::Technical => &mut set.technical,
        Category::Languages => &mut set.languages,
        Category::Soft => &mut set.soft,
        Category::Other => &mut set.other,
    };
    bucket.extend(
        list.split(|c| matches!(c, ',' | '|' | ';'))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    );
}

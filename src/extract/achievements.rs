//! Achievements/honors/awards extraction.
//!
//! Entries are keyed on bold-or-bulleted lines; a date substring inside
//! the title line is split off. Following lines accumulate into a single
//! space-joined description string (prose, unlike the itemized experience
//! descriptions).

use crate::model::{strip_bullet, AchievementEntry, Section};

use super::dates::DateMatcher;

/// Extract achievement entries from a section.
pub fn extract_achievements(section: &Section, dates: &DateMatcher) -> Vec<AchievementEntry> {
    let mut entries: Vec<AchievementEntry> = Vec::new();
    let mut current: Option<AchievementEntry> = None;

    for line in section.lines() {
        let starts_entry = line.bold || line.bullet;

        if starts_entry || current.is_none() {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            let text = strip_bullet(line.text.trim());
            let (title, date) = dates.split_name_date(text);
            current = Some(AchievementEntry {
                title,
                date,
                description: String::new(),
            });
        } else if let Some(entry) = current.as_mut() {
            let text = line.text.trim();
            if entry.date.is_empty() && dates.is_date_only(text) {
                entry.date = text.to_string();
            } else {
                if !entry.description.is_empty() {
                    entry.description.push(' ');
                }
                entry.description.push_str(text);
            }
        }
    }

    if let Some(entry) = current.take() {
        entries.push(entry);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Line, SectionContent, TextFragment};

    fn line(text: &str, bold: bool) -> Line {
        let x2 = text.chars().count() as f32 * 5.5;
        Line::from_fragments(vec![TextFragment::new(text, 0.0, x2, 700.0, 1, bold)])
    }

    fn section(lines: Vec<Line>) -> Section {
        Section {
            name: "ACHIEVEMENTS".to_string(),
            content: SectionContent::Flat(lines),
        }
    }

    #[test]
    fn test_bulleted_entries_with_dates() {
        let entries = extract_achievements(
            &section(vec![
                line("\u{2022} Dean's List 2020", false),
                line("\u{2022} Hackathon Winner Spring 2021", false),
            ]),
            &DateMatcher::new(),
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Dean's List");
        assert_eq!(entries[0].date, "2020");
        assert_eq!(entries[1].title, "Hackathon Winner");
        assert_eq!(entries[1].date, "Spring 2021");
    }

    #[test]
    fn test_description_space_joined() {
        let entries = extract_achievements(
            &section(vec![
                line("ACM ICPC Regional Finalist", true),
                line("Placed 4th of 120 teams", false),
                line("with two first-year teammates", false),
            ]),
            &DateMatcher::new(),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].description,
            "Placed 4th of 120 teams with two first-year teammates"
        );
    }

    #[test]
    fn test_date_only_followup_line() {
        let entries = extract_achievements(
            &section(vec![
                line("National Merit Scholar", true),
                line("2019", false),
            ]),
            &DateMatcher::new(),
        );
        assert_eq!(entries[0].date, "2019");
        assert!(entries[0].description.is_empty());
    }

    #[test]
    fn test_leading_plain_line_starts_entry() {
        let entries = extract_achievements(
            &section(vec![line("Employee of the Month", false)]),
            &DateMatcher::new(),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Employee of the Month");
    }

    #[test]
    fn test_empty_section() {
        let entries = extract_achievements(&section(Vec::new()), &DateMatcher::new());
        assert!(entries.is_empty());
    }
}

//! Structured resume output types.
//!
//! All fields are best-effort strings; absence is an empty string or empty
//! sequence, never an error. The document is constructed once per parse and
//! not mutated afterward.

use serde::{Deserialize, Serialize};

/// Contact/header fields extracted from the profile area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: String,
}

impl Profile {
    /// Whether no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.location.is_empty()
            && self.url.is_empty()
    }
}

/// One degree/school entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub name: String,
    pub degree: String,
    pub date: String,
    pub gpa: String,
}

/// One job entry. Also used for volunteer positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub date: String,
    pub description: Vec<String>,
}

/// One project entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub date: String,
    pub technologies: String,
    pub description: Vec<String>,
}

/// One achievement/honor/award entry. Description is free-form prose, not
/// an itemized list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementEntry {
    pub title: String,
    pub date: String,
    pub description: String,
}

/// Category-keyed skill lists. No de-duplication is performed at this
/// stage; downstream consumers own that policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub languages: Vec<String>,
    pub soft: Vec<String>,
    pub other: Vec<String>,
}

impl SkillSet {
    /// Whether no skill was extracted in any category.
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty()
            && self.languages.is_empty()
            && self.soft.is_empty()
            && self.other.is_empty()
    }

    /// Flatten all categories into one ordered list: technical, then
    /// languages, then soft, then other.
    pub fn flatten(&self) -> Vec<String> {
        self.technical
            .iter()
            .chain(self.languages.iter())
            .chain(self.soft.iter())
            .chain(self.other.iter())
            .cloned()
            .collect()
    }
}

/// The structured resume produced by one parse invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub profile: Profile,
    pub objective: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: SkillSet,
    pub projects: Vec<ProjectEntry>,
    pub volunteer: Vec<ExperienceEntry>,
    pub achievements: Vec<AchievementEntry>,
}

impl ResumeDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every field degraded to empty. Callers decide whether that
    /// constitutes a failed parse; the pipeline does not.
    pub fn is_empty(&self) -> bool {
        self.profile.is_empty()
            && self.objective.is_empty()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
            && self.volunteer.is_empty()
            && self.achievements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_set_flatten_order() {
        let skills = SkillSet {
            technical: vec!["Rust".to_string(), "Go".to_string()],
            languages: vec!["Spanish".to_string()],
            soft: vec!["Mentoring".to_string()],
            other: vec!["First Aid".to_string()],
        };
        assert_eq!(
            skills.flatten(),
            vec!["Rust", "Go", "Spanish", "Mentoring", "First Aid"]
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = ResumeDocument::new();
        assert!(doc.is_empty());

        let mut doc = ResumeDocument::new();
        doc.objective = "Seeking an internship".to_string();
        assert!(!doc.is_empty());
    }
}

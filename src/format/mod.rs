//! Stage 5: resume formatting.
//!
//! Pure mapping from the internal [`ResumeDocument`] to the external-facing
//! shape consumed by persistence and the email generator. Skill categories
//! flatten into one ordered list, project descriptions join into a single
//! string, and start/end date substrings derive from each entry's raw date
//! field. Missing dates are empty strings, never null.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extract::DateMatcher;
use crate::model::ResumeDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// The external-facing resume shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: String,
    pub objective: String,
    /// All skill categories flattened: technical, languages, soft, other.
    pub skills: Vec<String>,
    pub education: Vec<FormattedEducation>,
    pub experience: Vec<FormattedExperience>,
    pub projects: Vec<FormattedProject>,
    pub volunteer: Vec<FormattedExperience>,
    pub achievements: Vec<FormattedAchievement>,
}

/// Formatted education entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedEducation {
    pub name: String,
    pub degree: String,
    pub gpa: String,
    pub date: String,
    pub start_date: String,
    pub end_date: String,
}

/// Formatted experience/volunteer entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedExperience {
    pub company: String,
    pub title: String,
    pub date: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
}

/// Formatted project entry. The description is a single joined string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedProject {
    pub name: String,
    pub technologies: String,
    pub date: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Formatted achievement entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAchievement {
    pub title: String,
    pub date: String,
    pub description: String,
}

/// Map a structured resume into the external-facing shape.
pub fn format_resume(doc: &ResumeDocument) -> FormattedResume {
    let dates = DateMatcher::new();

    FormattedResume {
        name: doc.profile.name.clone(),
        email: doc.profile.email.clone(),
        phone: doc.profile.phone.clone(),
        location: doc.profile.location.clone(),
        url: doc.profile.url.clone(),
        objective: doc.objective.clone(),
        skills: doc.skills.flatten(),
        education: doc
            .education
            .iter()
            .map(|e| FormattedEducation {
                name: e.name.clone(),
                degree: e.degree.clone(),
                gpa: e.gpa.clone(),
                date: e.date.clone(),
                start_date: dates.start_date(&e.date),
                end_date: dates.end_date(&e.date),
            })
            .collect(),
        experience: doc.experience.iter().map(|e| format_experience(e, &dates)).collect(),
        projects: doc
            .projects
            .iter()
            .map(|p| FormattedProject {
                name: p.name.clone(),
                technologies: p.technologies.clone(),
                date: p.date.clone(),
                start_date: dates.start_date(&p.date),
                end_date: dates.end_date(&p.date),
                description: p.description.join(" "),
            })
            .collect(),
        volunteer: doc.volunteer.iter().map(|e| format_experience(e, &dates)).collect(),
        achievements: doc
            .achievements
            .iter()
            .map(|a| FormattedAchievement {
                title: a.title.clone(),
                date: a.date.clone(),
                description: a.description.clone(),
            })
            .collect(),
    }
}

fn format_experience(
    entry: &crate::model::ExperienceEntry,
    dates: &DateMatcher,
) -> FormattedExperience {
    FormattedExperience {
        company: entry.company.clone(),
        title: entry.title.clone(),
        date: entry.date.clone(),
        start_date: dates.start_date(&entry.date),
        end_date: dates.end_date(&entry.date),
        description: entry.description.clone(),
    }
}

/// Serialize a formatted resume to JSON.
pub fn to_json(resume: &FormattedResume, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(resume),
        JsonFormat::Compact => serde_json::to_string(resume),
    };

    result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
}

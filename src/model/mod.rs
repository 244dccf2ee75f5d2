//! Resume model types.
//!
//! This module defines the intermediate representation that bridges text
//! layout analysis and the structured resume output: positioned fragments,
//! reconstructed lines, named sections, and the typed resume document.

mod fragment;
mod line;
mod resume;
mod section;

pub use fragment::{text_is_all_caps, TextFragment};
pub use line::{strip_bullet, Line};
pub use resume::{
    AchievementEntry, EducationEntry, ExperienceEntry, Profile, ProjectEntry, ResumeDocument,
    SkillSet,
};
pub use section::{Section, SectionContent, SectionMap, Subsection};

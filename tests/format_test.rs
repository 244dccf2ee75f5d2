//! Integration tests for formatting the parsed resume.

use uncv::{format_resume, parse_text, to_json, FormattedResume, JsonFormat};

const RESUME_TEXT: &str = "\
Jane Doe
jane@example.com | (555) 123-4567
Cambridge, MA

OBJECTIVE
Seeking a systems engineering internship.

SKILLS
Technical: Rust, Go
Languages
Spanish

EXPERIENCE
Acme Corp Jan 2020 - Present
Software Engineer
\u{2022} Built the billing pipeline
\u{2022} Cut p99 latency by 40%

PROJECTS
Ray Tracer May 2018 \u{2013} June 2021
Technologies: Rust, wgpu
\u{2022} Real-time path tracing
\u{2022} Ported to the GPU
";

fn formatted() -> FormattedResume {
    let doc = parse_text(RESUME_TEXT).unwrap();
    format_resume(&doc)
}

#[test]
fn test_profile_and_objective_flattened() {
    let resume = formatted();
    assert_eq!(resume.name, "Jane Doe");
    assert_eq!(resume.email, "jane@example.com");
    assert_eq!(resume.phone, "(555) 123-4567");
    assert_eq!(resume.location, "Cambridge, MA");
    assert_eq!(resume.objective, "Seeking a systems engineering internship.");
}

#[test]
fn test_skills_flatten_order() {
    let resume = formatted();
    assert_eq!(resume.skills, vec!["Rust", "Go", "Spanish"]);
}

#[test]
fn test_experience_dates_derived() {
    let resume = formatted();
    assert_eq!(resume.experience.len(), 1);
    let job = &resume.experience[0];
    assert_eq!(job.company, "Acme Corp");
    assert_eq!(job.title, "Software Engineer");
    assert_eq!(job.date, "Jan 2020 - Present");
    assert_eq!(job.start_date, "Jan 2020");
    assert_eq!(job.end_date, "Present");
    assert_eq!(
        job.description,
        vec!["Built the billing pipeline", "Cut p99 latency by 40%"]
    );
}

#[test]
fn test_project_description_joined_to_one_string() {
    let resume = formatted();
    assert_eq!(resume.projects.len(), 1);
    let project = &resume.projects[0];
    assert_eq!(project.name, "Ray Tracer");
    assert_eq!(project.technologies, "Rust, wgpu");
    assert_eq!(project.start_date, "May 2018");
    assert_eq!(project.end_date, "June 2021");
    assert_eq!(project.description, "Real-time path tracing Ported to the GPU");
}

#[test]
fn test_json_round_trip() {
    let resume = formatted();
    let json = to_json(&resume, JsonFormat::Compact).unwrap();

    assert!(json.contains("\"startDate\":\"Jan 2020\""));
    assert!(json.contains("\"endDate\":\"Present\""));

    let back: FormattedResume = serde_json::from_str(&json).unwrap();
    assert_eq!(back, resume);
}

#[test]
fn test_missing_dates_are_empty_strings() {
    let doc = parse_text("EXPERIENCE\nAcme Corp\nEngineer\n").unwrap();
    let resume = format_resume(&doc);
    assert_eq!(resume.experience[0].date, "");
    assert_eq!(resume.experience[0].start_date, "");
    assert_eq!(resume.experience[0].end_date, "");
}

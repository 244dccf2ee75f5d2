//! Integration tests for the full parsing pipeline.

use uncv::{
    parse_source, parse_text, segment_source, Error, MemorySource, ParseOptions, SourceItem,
};

/// A small but complete single-page resume as source items.
fn sample_source() -> MemorySource {
    MemorySource::single_page(vec![
        SourceItem::new("Jane Doe", 72.0, 760.0, "Times-Bold"),
        SourceItem::new("jane@example.com | (555) 123-4567", 72.0, 746.0, "Times"),
        SourceItem::new("Cambridge, MA", 72.0, 732.0, "Times"),
        SourceItem::new("SKILLS", 72.0, 704.0, "Times-Bold"),
        SourceItem::new("Technical: Python, Go, Rust", 72.0, 690.0, "Times"),
        SourceItem::new("EDUCATION", 72.0, 662.0, "Times-Bold"),
        SourceItem::new("MIT 2020", 72.0, 648.0, "Times"),
        SourceItem::new("Bachelor of Science", 72.0, 634.0, "Times"),
        SourceItem::new("GPA 3.9", 72.0, 620.0, "Times"),
        SourceItem::new("EXPERIENCE", 72.0, 592.0, "Times-Bold"),
        SourceItem::new("Acme Corp Jan 2020 - Present", 72.0, 578.0, "Times-Bold"),
        SourceItem::new("Software Engineer", 72.0, 564.0, "Times"),
        SourceItem::new("\u{2022} Built the billing pipeline", 80.0, 550.0, "Times"),
    ])
}

#[test]
fn test_skills_section_end_to_end() {
    // A bold all-caps single-fragment heading followed by a labeled list.
    let source = MemorySource::single_page(vec![
        SourceItem::new("SKILLS", 72.0, 700.0, "Helvetica-Bold"),
        SourceItem::new("Technical: Python, Go, Rust", 72.0, 680.0, "Helvetica"),
    ]);

    let sections = segment_source(&source, &ParseOptions::default()).unwrap();
    let skills_section = sections.get("SKILLS").expect("SKILLS section detected");
    assert_eq!(skills_section.line_count(), 1);

    let doc = parse_source(&source).unwrap();
    assert_eq!(doc.skills.technical, vec!["Python", "Go", "Rust"]);
}

#[test]
fn test_education_subsection_end_to_end() {
    let source = MemorySource::single_page(vec![
        SourceItem::new("EDUCATION", 72.0, 700.0, "Helvetica-Bold"),
        SourceItem::new("MIT 2020", 72.0, 686.0, "Helvetica"),
        SourceItem::new("Bachelor of Science", 72.0, 672.0, "Helvetica"),
        SourceItem::new("GPA 3.9", 72.0, 658.0, "Helvetica"),
    ]);

    let doc = parse_source(&source).unwrap();
    assert_eq!(doc.education.len(), 1);
    let entry = &doc.education[0];
    assert_eq!(entry.name, "MIT");
    assert_eq!(entry.date, "2020");
    assert_eq!(entry.degree, "Bachelor of Science");
    assert_eq!(entry.gpa, "3.9");
}

#[test]
fn test_empty_document_raises() {
    let source = MemorySource::default();
    assert!(matches!(parse_source(&source), Err(Error::EmptyDocument)));

    let blank_page = MemorySource::single_page(vec![SourceItem::new("  ", 0.0, 0.0, "Helvetica")]);
    assert!(matches!(parse_source(&blank_page), Err(Error::EmptyDocument)));
}

#[test]
fn test_experience_date_split() {
    let doc = parse_source(&sample_source()).unwrap();
    assert_eq!(doc.experience.len(), 1);
    assert_eq!(doc.experience[0].company, "Acme Corp");
    assert_eq!(doc.experience[0].date, "Jan 2020 - Present");
    assert_eq!(doc.experience[0].title, "Software Engineer");
    assert_eq!(doc.experience[0].description, vec!["Built the billing pipeline"]);
}

#[test]
fn test_full_resume_profile_fields() {
    let doc = parse_source(&sample_source()).unwrap();
    assert_eq!(doc.profile.name, "Jane Doe");
    assert_eq!(doc.profile.email, "jane@example.com");
    assert_eq!(doc.profile.phone, "(555) 123-4567");
    assert_eq!(doc.profile.location, "Cambridge, MA");
}

#[test]
fn test_heading_lines_not_in_content() {
    let sections = segment_source(&sample_source(), &ParseOptions::default()).unwrap();
    for section in sections.iter() {
        for line in section.lines() {
            assert_ne!(line.text, section.name, "heading leaked into content");
        }
    }
}

#[test]
fn test_every_content_line_in_exactly_one_section() {
    let sections = segment_source(&sample_source(), &ParseOptions::default()).unwrap();
    // 13 items, 3 headings consumed as labels.
    assert_eq!(sections.line_count(), 10);
}

#[test]
fn test_parse_is_idempotent() {
    let first = parse_source(&sample_source()).unwrap();
    let second = parse_source(&sample_source()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fragment_merge_in_pipeline() {
    // One word split by the reader at a sub-threshold gap fuses back into
    // a single heading fragment.
    let source = MemorySource::single_page(vec![
        SourceItem::new("OBJEC", 72.0, 700.0, "Helvetica"),
        SourceItem::new("TIVE", 72.0 + 5.0 * 5.5 + 3.0, 700.0, "Helvetica"),
        SourceItem::new("Seeking a systems role", 72.0, 670.0, "Helvetica"),
    ]);

    let doc = parse_source(&source).unwrap();
    assert_eq!(doc.objective, "Seeking a systems role");
}

#[test]
fn test_multi_page_resume() {
    let source = MemorySource::new(vec![
        vec![
            SourceItem::new("Jane Doe", 72.0, 760.0, "Times-Bold"),
            SourceItem::new("EXPERIENCE", 72.0, 700.0, "Times-Bold"),
            SourceItem::new("Acme Corp", 72.0, 686.0, "Times-Bold"),
            SourceItem::new("\u{2022} Shipped things", 80.0, 672.0, "Times"),
        ],
        vec![
            SourceItem::new("Globex Inc", 72.0, 760.0, "Times-Bold"),
            SourceItem::new("\u{2022} Maintained things", 80.0, 746.0, "Times"),
        ],
    ]);

    let doc = parse_source(&source).unwrap();
    // The page break separates the two jobs into two entries.
    assert_eq!(doc.experience.len(), 2);
    assert_eq!(doc.experience[0].company, "Acme Corp");
    assert_eq!(doc.experience[1].company, "Globex Inc");
}

#[test]
fn test_volunteer_uses_experience_extraction() {
    let text = "VOLUNTEER\nFood Bank Jan 2019 - Dec 2019\nDriver\n\u{2022} Weekly deliveries\n";
    let doc = parse_text(text).unwrap();
    assert_eq!(doc.volunteer.len(), 1);
    assert_eq!(doc.volunteer[0].company, "Food Bank");
    assert_eq!(doc.volunteer[0].title, "Driver");
    assert_eq!(doc.volunteer[0].date, "Jan 2019 - Dec 2019");
    assert!(doc.experience.is_empty());
}

#[test]
fn test_degraded_sections_never_fail() {
    // Headings with no content, sections with odd shapes.
    let text = "SKILLS\n\nEDUCATION\n\nEXPERIENCE\nAcme Corp\n";
    let doc = parse_text(text).unwrap();
    assert!(doc.skills.is_empty());
    assert!(doc.education.is_empty());
    assert_eq!(doc.experience.len(), 1);
}

#[test]
fn test_text_file_parsing() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Jane Doe\njane@example.com\n\nSKILLS\nTechnical: Rust\n"
    )
    .unwrap();

    let doc = uncv::parse_text_file(file.path()).unwrap();
    assert_eq!(doc.profile.name, "Jane Doe");
    assert_eq!(doc.skills.technical, vec!["Rust"]);
}

#[test]
fn test_items_dump_round_trip() {
    let json = r#"[[
        {"str": "ACHIEVEMENTS", "transform": [1, 0, 0, 1, 72, 700], "fontName": "Times-Bold"},
        {"str": "• Dean's List 2020", "transform": [1, 0, 0, 1, 80, 686], "fontName": "Times"}
    ]]"#;
    let source = MemorySource::from_json(json).unwrap();
    let doc = parse_source(&source).unwrap();
    assert_eq!(doc.achievements.len(), 1);
    assert_eq!(doc.achievements[0].title, "Dean's List");
    assert_eq!(doc.achievements[0].date, "2020");
}

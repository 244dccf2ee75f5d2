//! Profile field extraction.
//!
//! Every line of the header area is scored against five independent
//! scoring functions (name, email, phone, location, url). Per field, the
//! highest-scoring line wins when its score is positive; a single line may
//! win more than one field. The scorers are pure functions over a line,
//! testable in isolation.

use regex::Regex;

use crate::model::{Line, Profile, Section};

/// Compiled patterns backing the scoring functions.
pub struct ProfileScorer {
    email: Regex,
    phone: Regex,
    location: Regex,
    url: Regex,
}

impl ProfileScorer {
    /// Compile the profile patterns.
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap(),
            phone: Regex::new(
                r"(?:\+?\d{1,3}[\s.\-])?(?:\(\d{3}\)|\d{3})[\s.\-]?\d{3}[\s.\-]?\d{4}",
            )
            .unwrap(),
            location: Regex::new(r"[A-Z][A-Za-z .]+,\s*[A-Z]{2}\b|[A-Z][a-z]+,\s*[A-Z][a-z]+")
                .unwrap(),
            url: Regex::new(
                r"(?i)https?://\S+|www\.\S+|\b[a-z0-9\-]+\.(?:com|org|net|io|dev|me)(?:/\S*)?",
            )
            .unwrap(),
        }
    }

    /// Score a line as a candidate person name.
    pub fn score_name(&self, line: &Line) -> i32 {
        let text = line.text.trim();
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut score = 0;

        if (2..=4).contains(&words.len()) {
            score += 3;
        }
        if !words.is_empty()
            && words
                .iter()
                .all(|w| w.chars().next().map(|c| c.is_uppercase()).unwrap_or(false))
        {
            score += 2;
        }
        if line.bold {
            score += 2;
        }
        if line.all_caps {
            score += 1;
        }
        // Names carry neither addresses nor digits.
        if text.contains('@') {
            score -= 10;
        }
        if text.chars().any(|c| c.is_ascii_digit()) {
            score -= 6;
        }
        if text.contains("http") || text.contains("www.") {
            score -= 5;
        }
        if text.chars().count() > 40 {
            score -= 3;
        }
        score
    }

    /// Score a line as an email candidate.
    pub fn score_email(&self, line: &Line) -> i32 {
        let text = line.text.trim();
        let mut score = -1;
        if self.email.is_match(text) {
            score += 10;
        }
        if text.contains('@') {
            score += 1;
        }
        if line.all_caps {
            score -= 2;
        }
        score
    }

    /// Score a line as a phone number candidate.
    pub fn score_phone(&self, line: &Line) -> i32 {
        let text = line.text.trim();
        let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
        let mut score = -1;
        if self.phone.is_match(text) {
            score += 10;
        }
        if (7..=15).contains(&digits) {
            score += 2;
        }
        if text.contains('@') {
            score -= 4;
        }
        score
    }

    /// Score a line as a location candidate (city-comma-state shapes).
    pub fn score_location(&self, line: &Line) -> i32 {
        let text = line.text.trim();
        let mut score = 0;
        if self.location.is_match(text) {
            score += 6;
        }
        if text.chars().any(|c| c.is_ascii_digit()) {
            score -= 3;
        }
        if line.bold {
            score -= 1;
        }
        if line.all_caps {
            score -= 1;
        }
        if line.word_count() > 6 {
            score -= 2;
        }
        score
    }

    /// Score a line as a URL candidate.
    pub fn score_url(&self, line: &Line) -> i32 {
        let text = line.text.trim();
        let mut score = -1;
        if self.url.is_match(text) {
            score += 10;
        }
        let lower = text.to_lowercase();
        if lower.contains("linkedin") || lower.contains("github") {
            score += 3;
        }
        // An email's domain also looks like a URL; the at-sign decides.
        if text.contains('@') {
            score -= 10;
        }
        score
    }

    fn field_value(&self, pattern: Option<&Regex>, line: &Line) -> String {
        match pattern.and_then(|re| re.find(line.text.trim())) {
            Some(m) => m.as_str().to_string(),
            None => line.text.trim().to_string(),
        }
    }
}

impl Default for ProfileScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract profile fields from the header-area section.
pub fn extract_profile(section: &Section) -> Profile {
    let scorer = ProfileScorer::new();
    let lines: Vec<&Line> = section.lines().collect();

    Profile {
        name: pick(&lines, |l| scorer.score_name(l))
            .map(|l| scorer.field_value(None, l))
            .unwrap_or_default(),
        email: pick(&lines, |l| scorer.score_email(l))
            .map(|l| scorer.field_value(Some(&scorer.email), l))
            .unwrap_or_default(),
        phone: pick(&lines, |l| scorer.score_phone(l))
            .map(|l| scorer.field_value(Some(&scorer.phone), l))
            .unwrap_or_default(),
        location: pick(&lines, |l| scorer.score_location(l))
            .map(|l| scorer.field_value(Some(&scorer.location), l))
            .unwrap_or_default(),
        url: pick(&lines, |l| scorer.score_url(l))
            .map(|l| scorer.field_value(Some(&scorer.url), l))
            .unwrap_or_default(),
    }
}

/// Per-field argmax with a positive-score floor. Ties go to the earliest
/// line so repeated runs stay deterministic.
fn pick<'a, F: Fn(&Line) -> i32>(lines: &[&'a Line], score: F) -> Option<&'a Line> {
    let mut best: Option<(i32, &'a Line)> = None;
    for &line in lines {
        let s = score(line);
        if s > 0 && best.map(|(b, _)| s > b).unwrap_or(true) {
            best = Some((s, line));
        }
    }
    best.map(|(_, l)| l)
}

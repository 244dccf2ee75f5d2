//! Shared date pattern matching.
//!
//! One matcher serves every entry extractor and the formatter, so the
//! month/season/year patterns cannot drift apart. Recognized shapes:
//! "Jan 2020", "September 2019", "Fall 2021", "2020", and ranges of those
//! with a dash separator or an open "Present"/"Current" end.

use regex::Regex;

const MONTH: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|\
                     aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";
const SEASON: &str = "spring|summer|fall|autumn|winter";

/// Byte span of a date match within a line's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: usize,
    pub end: usize,
}

/// Compiled date patterns.
pub struct DateMatcher {
    full: Regex,
    point: Regex,
    range: Regex,
    open_end: Regex,
}

impl DateMatcher {
    /// Compile the shared patterns.
    pub fn new() -> Self {
        let point = format!(r"(?:(?:{MONTH}|{SEASON})\.?\s+(?:19|20)\d{{2}}|(?:19|20)\d{{2}})");
        let full = format!(r"(?i)\b{point}(?:\s*[-\u{{2013}}\u{{2014}}]\s*(?:{point}|present|current))?");
        let range = format!(r"(?i)\b{point}\s*[-\u{{2013}}\u{{2014}}]\s*({point})");
        Self {
            full: Regex::new(&full).unwrap(),
            point: Regex::new(&format!(r"(?i)\b{point}")).unwrap(),
            range: Regex::new(&range).unwrap(),
            open_end: Regex::new(r"(?i)\b(?:present|current)\b").unwrap(),
        }
    }

    /// First date (or date range) in the text.
    pub fn find(&self, text: &str) -> Option<DateSpan> {
        self.full.find(text).map(|m| DateSpan {
            start: m.start(),
            end: m.end(),
        })
    }

    /// Whether the trimmed text is nothing but a date.
    pub fn is_date_only(&self, text: &str) -> bool {
        let trimmed = text.trim();
        match self.find(trimmed) {
            Some(span) => span.start == 0 && span.end == trimmed.len(),
            None => false,
        }
    }

    /// Split a title-style line at its date match: returns the text before
    /// the match (trailing separators stripped) and the matched date.
    /// Without a match the whole line is the name and the date is empty.
    pub fn split_name_date(&self, text: &str) -> (String, String) {
        let trimmed = text.trim();
        match self.find(trimmed) {
            Some(span) => {
                let name = trimmed[..span.start]
                    .trim_end_matches(|c: char| {
                        c.is_whitespace() || matches!(c, ',' | ';' | '|' | '(' | '-' | '\u{2013}' | '\u{2014}')
                    })
                    .to_string();
                let date = trimmed[span.start..span.end].to_string();
                (name, date)
            }
            None => (trimmed.to_string(), String::new()),
        }
    }

    /// Start-of-range substring for the formatter: the first date point.
    pub fn start_date(&self, raw: &str) -> String {
        self.point
            .find(raw)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// End-of-range substring for the formatter: "Present" when the raw
    /// date has an open end, else the right side of a two-sided range.
    pub fn end_date(&self, raw: &str) -> String {
        if self.open_end.is_match(raw) {
            return "Present".to_string();
        }
        self.range
            .captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Default for DateMatcher {
    fn default() -> Self {
        Self::new()
    }
}

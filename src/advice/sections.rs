//! Markdown section tokenizer for AI-generated advice

use tracing::debug;

use super::model::NOT_AVAILABLE;

/// Headers of a treatment advice response, in the order they are requested
pub const TREATMENT_HEADERS: [&str; 4] = [
    "Description",
    "Treatment Plan",
    "Prevention",
    "Generated Treatment Schedule",
];

/// Content captured for one header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionText {
    Found(String),
    Missing,
}

impl SectionText {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Found(text) => Some(text),
            Self::Missing => None,
        }
    }

    /// The captured text, or the "N/A" sentinel when the header was absent
    pub fn or_sentinel(&self) -> String {
        self.as_str().unwrap_or(NOT_AVAILABLE).to_string()
    }
}

/// Where the content of the final header stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// Any markdown heading closes the last section
    AnyHeading,
    /// The last section runs to the end of the text
    EndOfText,
}

/// An ordered list of section headers to split a response on
#[derive(Debug, Clone, Copy)]
pub struct HeaderSchema<'a> {
    pub headers: &'a [&'a str],
    pub tail: Tail,
}

impl<'a> HeaderSchema<'a> {
    pub const fn new(headers: &'a [&'a str], tail: Tail) -> Self {
        Self { headers, tail }
    }

    /// Split `text` into one [`SectionText`] per header, in schema order.
    ///
    /// A header is a markdown heading line (`#` to `######`) whose title is
    /// exactly the header text. A section's content runs until the next
    /// heading of the schema. Only the first occurrence of a header counts.
    pub fn split(&self, text: &str) -> Vec<SectionText> {
        let lines: Vec<&str> = text.lines().collect();
        let last = self.headers.len().saturating_sub(1);

        self.headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let Some(start) = lines
                    .iter()
                    .position(|line| heading_title(line) == Some(*header))
                else {
                    debug!("Section header {:?} not found", header);
                    return SectionText::Missing;
                };

                let end = lines[start + 1..]
                    .iter()
                    .position(|line| match heading_title(line) {
                        Some(title) => {
                            self.headers.iter().any(|h| *h == title)
                                || (idx == last && self.tail == Tail::AnyHeading)
                        }
                        None => false,
                    })
                    .map(|offset| start + 1 + offset)
                    .unwrap_or(lines.len());

                SectionText::Found(lines[start + 1..end].join("\n").trim().to_string())
            })
            .collect()
    }
}

/// Title of a markdown heading line, or `None` if the line is not a heading
fn heading_title(line: &str) -> Option<&str> {
    let line = line.trim();
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some(rest.trim())
}

/// The four sections of a treatment advice response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSections {
    pub description: SectionText,
    pub treatment: SectionText,
    pub prevention: SectionText,
    pub schedule: SectionText,
}

/// Split a raw advice response into its four labeled sections.
///
/// Never fails: each absent header simply yields [`SectionText::Missing`].
pub fn extract(raw: &str) -> ExtractedSections {
    let schema = HeaderSchema::new(&TREATMENT_HEADERS, Tail::AnyHeading);
    let mut sections = schema.split(raw).into_iter();
    let mut next = || sections.next().unwrap_or(SectionText::Missing);

    ExtractedSections {
        description: next(),
        treatment: next(),
        prevention: next(),
        schedule: next(),
    }
}

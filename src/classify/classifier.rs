use anyhow::Result;

use crate::model::PersonnelRecord;

use super::header::HeaderMatcher;
use super::normalize::normalize;
use super::personnel::PersonnelLineParser;
use super::rules::{HEADER_RULES, REVIEW_CATEGORY};

/// Tracks which section heading governs the lines currently being read.
/// Scoped to one document; never shared across documents.
#[derive(Debug, Default)]
pub struct CategoryTracker {
    current: Option<&'static str>,
}

impl CategoryTracker {
    pub fn enter(&mut self, category: &'static str) {
        self.current = Some(category);
    }

    /// An unrecognized line breaks the contiguity between a heading and its
    /// entries; entries after the break are demoted to the review category
    /// rather than inheriting a possibly stale one.
    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn current_or_review(&self) -> &'static str {
        self.current.unwrap_or(REVIEW_CATEGORY)
    }
}

#[derive(Debug)]
pub struct DocumentClassifier {
    matcher: HeaderMatcher,
    parser: PersonnelLineParser,
}

impl DocumentClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            matcher: HeaderMatcher::new(HEADER_RULES),
            parser: PersonnelLineParser::new()?,
        })
    }

    /// One sequential pass over a document's paragraphs. Per non-empty line:
    /// a heading match updates the tracker and emits nothing; otherwise a
    /// parsed personnel line emits one record under the current category;
    /// otherwise the tracker resets. Whitespace-only paragraphs are skipped
    /// without touching the tracker.
    pub fn classify(&self, paragraphs: &[String], unit: &str) -> Vec<PersonnelRecord> {
        let mut tracker = CategoryTracker::default();
        let mut records = Vec::new();

        for paragraph in paragraphs {
            let line = paragraph.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(category) = self.matcher.match_line(&normalize(line)) {
                tracker.enter(category);
                continue;
            }

            match self.parser.parse_line(paragraph) {
                Some(entry) => records.push(PersonnelRecord {
                    category: tracker.current_or_review().to_string(),
                    number: entry.number,
                    rank: entry.rank,
                    name: entry.name,
                    unit: unit.to_string(),
                    note: String::new(),
                }),
                None => tracker.reset(),
            }
        }

        records
    }
}

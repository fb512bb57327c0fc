use anyhow::{Context, Result};
use regex::Regex;

use super::normalize::strip_invisible;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonnelLine {
    pub number: String,
    pub rank: String,
    pub name: String,
}

/// Extracts the personnel-number/rank/name triple from a free-text line.
/// Two line shapes are tried in order: the enumerated style ("1. 123456 KPL
/// ...") and the bulleted style ("- 123456 KPL ..."); the first success
/// wins. Partial matches are never returned.
#[derive(Debug)]
pub struct PersonnelLineParser {
    enumerated: Regex,
    bulleted: Regex,
    trailing_note: Regex,
}

impl PersonnelLineParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            enumerated: Regex::new(
                r"(?i)^\s*(?:👉\s*)?(?:\d+\.?\s*)?(\d{3,6})\s+([a-z0-9./]+)\s+(.+)",
            )
            .context("failed to compile enumerated personnel regex")?,
            bulleted: Regex::new(r"(?i)^\s*(?:[-*👉]\s*)?(\d{3,6})\s+([a-z0-9./]+)\s+(.+)")
                .context("failed to compile bulleted personnel regex")?,
            trailing_note: Regex::new(r"\s*\([^)]*\)\s*$")
                .context("failed to compile trailing annotation regex")?,
        })
    }

    pub fn parse_line(&self, raw: &str) -> Option<PersonnelLine> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let cleaned = strip_invisible(text);
        let captures = self
            .enumerated
            .captures(&cleaned)
            .or_else(|| self.bulleted.captures(&cleaned))?;

        let number = captures.get(1)?.as_str();
        let rank = captures.get(2)?.as_str();
        let name = captures.get(3)?.as_str().trim();
        if name.is_empty() {
            return None;
        }

        // drop a trailing "(...)" annotation from the name
        let name = self.trailing_note.replace(name, "");

        Some(PersonnelLine {
            number: number.to_string(),
            rank: rank.to_uppercase(),
            name: name.trim().to_uppercase(),
        })
    }
}

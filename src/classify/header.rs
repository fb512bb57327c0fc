use super::normalize::normalize;
use super::rules::HeaderRule;

/// Decides whether a normalized line is a section heading and which category
/// it declares. Rules are scanned in catalog order; the first hit wins.
#[derive(Debug)]
pub struct HeaderMatcher {
    rules: Vec<CompiledRule>,
}

#[derive(Debug)]
struct CompiledRule {
    trigger: String,
    trigger_len: usize,
    category: &'static str,
}

impl HeaderMatcher {
    /// Triggers are normalized once up front; a rule whose trigger normalizes
    /// to the empty string can never match and is dropped.
    pub fn new(rules: &[HeaderRule]) -> Self {
        let rules = rules
            .iter()
            .filter_map(|rule| {
                let trigger = normalize(rule.trigger);
                if trigger.is_empty() {
                    return None;
                }

                let trigger_len = trigger.chars().count();
                Some(CompiledRule {
                    trigger,
                    trigger_len,
                    category: rule.category,
                })
            })
            .collect();

        Self { rules }
    }

    /// `line` must already be in [`normalize`] form. The length bounds admit
    /// headings with minor decoration (numbering, stray words) while
    /// rejecting long free-text lines that merely mention a trigger.
    pub fn match_line(&self, line: &str) -> Option<&'static str> {
        let line_len = line.chars().count();

        for rule in &self.rules {
            if line.starts_with(&rule.trigger) {
                if line_len < rule.trigger_len + 35 {
                    return Some(rule.category);
                }
            } else if line.contains(&rule.trigger) {
                let leftover = line.replace(&rule.trigger, "");
                if line_len < rule.trigger_len + 30 && leftover.trim().chars().count() < 20 {
                    return Some(rule.category);
                }
            }
        }

        None
    }
}

// src/extractors/rules.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// What a rule does with the line it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    SectionBegin,
    SectionEnd,
    Comment,
    Content,
}

/// One entry of the ordered rule table.
#[derive(Debug)]
pub struct LineRule {
    pub kind: RuleKind,
    pub pattern: Regex,
}

impl LineRule {
    fn new(kind: RuleKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).expect("Failed to compile line rule"),
        }
    }
}

/// Classification of a single non-blank line, borrowing from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `--` marker; `name` is the rest of the line, trimmed. May be empty.
    SectionBegin { name: &'a str },
    SectionEnd,
    Comment,
    Content(&'a str),
}

// --- Rule Table (Lazy Static) ---
// Applied in sequence, so ordered from most to least restrictive.
// The last rule matches anything.
static LINE_RULES: Lazy<Vec<LineRule>> = Lazy::new(|| {
    vec![
        LineRule::new(RuleKind::SectionBegin, r"^--"),
        LineRule::new(RuleKind::SectionEnd, r"^=="),
        LineRule::new(RuleKind::Comment, r"^\s*#"),
        LineRule::new(RuleKind::Content, r"^.*"),
    ]
});

/// Classifies a line (trailing whitespace already removed) with the standard rules.
pub fn classify(line: &str) -> Option<LineClass<'_>> {
    classify_with(&LINE_RULES, line)
}

/// First matching rule wins. `None` only if `rules` has no catch-all.
pub fn classify_with<'a>(rules: &[LineRule], line: &'a str) -> Option<LineClass<'a>> {
    for rule in rules {
        let Some(m) = rule.pattern.find(line) else {
            continue;
        };
        tracing::trace!("Line matched {:?} rule: '{}'", rule.kind, line);
        let class = match rule.kind {
            RuleKind::SectionBegin => LineClass::SectionBegin {
                name: line[m.end()..].trim(),
            },
            RuleKind::SectionEnd => LineClass::SectionEnd,
            RuleKind::Comment => LineClass::Comment,
            RuleKind::Content => LineClass::Content(line),
        };
        return Some(class);
    }
    None
}

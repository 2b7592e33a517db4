//! Blocked and warning pattern tables

use lazy_static::lazy_static;
use mirai_core::{Error, Result, ViolationCategory};
use regex::Regex;

// Order matters: tables are walked top to bottom.
const BLOCKED_PATTERNS: &[&str] = &[
    // Threats of violence
    r"(?i)\b(kill|murder|shoot|stab|hurt)\s+(you|u|him|her|them|everyone)\b",
    // Self-harm
    r"(?i)\b(kill\s+(myself|yourself)|suicide|self[-\s]?harm)\b",
    // Sexual content
    r"(?i)\b(porn|nudes?|nsfw|sexting)\b",
    // Requests for personal data
    r"(?i)\b(home\s+address|credit\s+card\s+number|social\s+security\s+number)\b",
    r"(死ね|殺す|殺してやる|消えろ)",
];

const WARNING_PATTERNS: &[&str] = &[
    r"(?i)\b(stupid|idiot|dumb|moron|loser|pathetic)\b",
    r"(?i)\b(hate|terrible|awful|worst|disgusting)\b",
    r"(?i)\b(shut\s+up|go\s+away)\b",
    r"(バカ|馬鹿|アホ|うざい|キモい)",
];

lazy_static! {
    static ref BUILTIN_BLOCKED: Vec<Pattern> =
        compile_builtin(ViolationCategory::BlockedContent, BLOCKED_PATTERNS);
    static ref BUILTIN_WARNING: Vec<Pattern> =
        compile_builtin(ViolationCategory::PotentiallyHarmful, WARNING_PATTERNS);
}

fn compile_builtin(category: ViolationCategory, sources: &[&str]) -> Vec<Pattern> {
    sources
        .iter()
        .map(|source| Pattern {
            category,
            regex: Regex::new(source).unwrap(),
        })
        .collect()
}

/// A compiled rule and the category it reports
#[derive(Debug, Clone)]
pub struct Pattern {
    category: ViolationCategory,
    regex: Regex,
}

impl Pattern {
    pub fn new(category: ViolationCategory, source: &str) -> Result<Self> {
        let regex = Regex::new(source).map_err(|source_err| Error::InvalidPattern {
            pattern: source.to_string(),
            source: source_err,
        })?;
        Ok(Self { category, regex })
    }

    pub fn category(&self) -> ViolationCategory {
        self.category
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Ordered blocked and warning tables
#[derive(Debug, Clone)]
pub struct PatternStore {
    blocked: Vec<Pattern>,
    warning: Vec<Pattern>,
}

impl PatternStore {
    /// Built-in tables only
    pub fn builtin() -> Self {
        Self {
            blocked: BUILTIN_BLOCKED.clone(),
            warning: BUILTIN_WARNING.clone(),
        }
    }

    /// Built-in tables followed by operator-supplied patterns
    pub fn with_extra(extra_blocked: &[String], extra_warning: &[String]) -> Result<Self> {
        let mut store = Self::builtin();

        for source in extra_blocked {
            store
                .blocked
                .push(Pattern::new(ViolationCategory::BlockedContent, source)?);
        }
        for source in extra_warning {
            store
                .warning
                .push(Pattern::new(ViolationCategory::PotentiallyHarmful, source)?);
        }

        Ok(store)
    }

    pub fn blocked(&self) -> &[Pattern] {
        &self.blocked
    }

    pub fn warning(&self) -> &[Pattern] {
        &self.warning
    }

    pub fn first_blocked(&self, text: &str) -> Option<&Pattern> {
        self.blocked.iter().find(|p| p.is_match(text))
    }

    pub fn first_warning(&self, text: &str) -> Option<&Pattern> {
        self.warning.iter().find(|p| p.is_match(text))
    }

    /// `(category, source)` pairs in evaluation order
    pub fn describe(&self) -> Vec<(ViolationCategory, String)> {
        self.blocked
            .iter()
            .chain(self.warning.iter())
            .map(|p| (p.category(), p.as_str().to_string()))
            .collect()
    }
}

impl Default for PatternStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_compile() {
        let store = PatternStore::builtin();
        assert_eq!(store.blocked().len(), BLOCKED_PATTERNS.len());
        assert_eq!(store.warning().len(), WARNING_PATTERNS.len());
        assert!(
            store
                .blocked()
                .iter()
                .all(|p| p.category() == ViolationCategory::BlockedContent)
        );
    }

    #[test]
    fn test_first_match_order() {
        let store = PatternStore::builtin();
        let hit = store.first_blocked("i will kill you").unwrap();
        assert_eq!(hit.as_str(), BLOCKED_PATTERNS[0]);

        assert!(store.first_blocked("have a nice day").is_none());
        assert!(store.first_warning("what an idiot").is_some());
    }

    #[test]
    fn test_japanese_patterns() {
        let store = PatternStore::builtin();
        assert!(store.first_blocked("お前なんか死ね").is_some());
        assert!(store.first_warning("バカじゃないの").is_some());
    }

    #[test]
    fn test_extra_patterns_appended() {
        let store =
            PatternStore::with_extra(&["(?i)spoiler".to_string()], &["(?i)meh".to_string()])
                .unwrap();

        assert_eq!(store.blocked().len(), BLOCKED_PATTERNS.len() + 1);
        assert_eq!(store.blocked().last().unwrap().as_str(), "(?i)spoiler");
        assert!(store.first_warning("MEH").is_some());
    }

    #[test]
    fn test_invalid_extra_pattern() {
        let err = PatternStore::with_extra(&["(unclosed".to_string()], &[]).unwrap_err();
        match err {
            Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_describe_lists_everything() {
        let store = PatternStore::builtin();
        let described = store.describe();
        assert_eq!(
            described.len(),
            BLOCKED_PATTERNS.len() + WARNING_PATTERNS.len()
        );
        assert_eq!(described[0].0, ViolationCategory::BlockedContent);
        assert_eq!(
            described.last().unwrap().0,
            ViolationCategory::PotentiallyHarmful
        );
    }
}
